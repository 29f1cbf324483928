use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use benefit_core::calculations::{NetBenefitProjector, TaxSchedule};
use benefit_data::{BracketLoader, ConfigLoader};
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// Load and validate the engine's reference data files.
///
/// Expects a directory containing:
/// - tax_brackets.csv: the marginal tax bracket table
/// - tax_year.csv: tax-year parameters (rates, thresholds)
/// - fee_schedule.csv: the service fee schedule
/// - projection.csv: reinvestment projection parameters
///
/// Optionally runs a sample tax and net-benefit calculation against
/// the loaded data.
#[derive(Parser, Debug)]
#[command(name = "benefit-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing the reference data CSV files
    #[arg(short, long, default_value = "benefit-data/data")]
    data_dir: PathBuf,

    /// Taxable income for a sample tax calculation
    #[arg(short, long)]
    income: Option<Decimal>,

    /// Annual deduction for a sample net-benefit projection
    #[arg(long, requires = "income")]
    deduction: Option<Decimal>,

    /// Client age for the sample projection horizon
    #[arg(long, default_value_t = 40)]
    age: u32,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

fn open(dir: &PathBuf, name: &str) -> Result<File> {
    let path = dir.join(name);
    File::open(&path).with_context(|| format!("Failed to open: {}", path.display()))
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    println!("Checking data files in: {}", args.data_dir.display());

    let brackets = BracketLoader::parse(open(&args.data_dir, "tax_brackets.csv")?)
        .context("Failed to parse tax_brackets.csv")?;
    println!("tax_brackets.csv: {} brackets", brackets.len());

    let tax_year = ConfigLoader::load_tax_year_config(open(&args.data_dir, "tax_year.csv")?)
        .context("Failed to parse tax_year.csv")?;
    println!("tax_year.csv: tax year {}", tax_year.tax_year);

    let fees = ConfigLoader::load_fee_schedule(open(&args.data_dir, "fee_schedule.csv")?)
        .context("Failed to parse fee_schedule.csv")?;
    println!(
        "fee_schedule.csv: year-one fee {}, intro annual fee {}, steady-state annual fee {}, first-year total {}",
        fees.year_one_fee(),
        fees.intro_annual_fee(),
        fees.steady_state_annual_fee(),
        fees.first_year_total()
    );

    let params = ConfigLoader::load_projection_params(open(&args.data_dir, "projection.csv")?)
        .context("Failed to parse projection.csv")?;
    params
        .validate()
        .context("projection.csv failed validation")?;
    println!(
        "projection.csv: retirement age {}, mortgage rate {}",
        params.default_retirement_age, params.mortgage_annual_rate
    );

    println!("All data files loaded and validated.");

    if let Some(income) = args.income {
        let schedule = TaxSchedule::new(&brackets, tax_year.medicare_levy_rate);

        let total = schedule
            .total_tax(income)
            .context("Failed to calculate tax for sample income")?;
        let marginal = schedule
            .marginal_rate(income)
            .context("Failed to determine marginal rate for sample income")?;
        println!("Sample income {income}: total tax {total}, marginal rate {marginal}");

        if let Some(deduction) = args.deduction {
            let projector = NetBenefitProjector::new(schedule, &fees, params);
            let projection = projector
                .lifetime(deduction, income, args.age)
                .context("Failed to project lifetime net benefit")?;

            println!(
                "Sample deduction {deduction}: annual tax savings {}, {}-year total net benefit {}",
                projection.annual_tax_savings,
                projection.horizon_years,
                projection.total_net_benefit
            );
            match projection.break_even_year {
                Some(year) => println!("Breaks even in year {year}"),
                None => println!("Never breaks even over the horizon"),
            }
        }
    }

    Ok(())
}
