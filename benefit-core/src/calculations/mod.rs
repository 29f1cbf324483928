//! Calculation modules for the home-office deduction engine.
//!
//! Each calculator is a pure worksheet over injected, versioned
//! configuration: the tax schedule values income and deductions, the
//! deduction worksheet selects between the two claim methods, and the
//! projector composes both with the fee schedule into multi-year net
//! benefit figures.

pub mod common;
pub mod deduction;
pub mod projection;
pub mod tax;

pub use deduction::{DeductionConfig, DeductionError, DeductionWorksheet};
pub use projection::{NetBenefitProjector, ProjectionError, ProjectionParams};
pub use tax::{TaxSchedule, TaxScheduleError};
