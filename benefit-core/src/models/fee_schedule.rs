use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two-phase advisory fee plan, versioned by effective tax year.
///
/// Phase 1 (implementation) is an upfront amount plus a fixed number of
/// recurring instalments. Phase 2 (ongoing access) bills per period at
/// an introductory rate for the first year and a lower ongoing rate
/// after that. Treated as immutable configuration, not client data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub effective_year: i32,
    pub phase1_upfront: Decimal,
    pub phase1_instalment: Decimal,
    pub phase1_instalment_count: u32,
    pub phase2_intro_fee: Decimal,
    pub phase2_ongoing_fee: Decimal,
    pub periods_per_year: u32,
}

impl FeeSchedule {
    /// Total implementation fee payable in year 1 (upfront plus all
    /// phase-1 instalments).
    pub fn year_one_fee(&self) -> Decimal {
        self.phase1_upfront + self.phase1_instalment * Decimal::from(self.phase1_instalment_count)
    }

    /// Annual phase-2 fee at the introductory rate.
    pub fn intro_annual_fee(&self) -> Decimal {
        self.phase2_intro_fee * Decimal::from(self.periods_per_year)
    }

    /// Annual phase-2 fee at the ongoing (steady-state) rate. This is
    /// the recurring cost charged every year after year 1.
    pub fn steady_state_annual_fee(&self) -> Decimal {
        self.phase2_ongoing_fee * Decimal::from(self.periods_per_year)
    }

    /// Total fees payable across the first year if both phases run
    /// concurrently (implementation plus introductory access).
    pub fn first_year_total(&self) -> Decimal {
        self.year_one_fee() + self.intro_annual_fee()
    }
}
