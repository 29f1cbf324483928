//! Versioned configuration loading for the benefit engine.
//!
//! The engine itself takes bracket tables, deduction rates, fee
//! schedules, and projection parameters by injection; this crate is
//! where those versioned constants come from. Each tax year ships as
//! a set of CSV files which are parsed into the typed config objects
//! and checked against their structural invariants at load time.

pub mod config;
pub mod loader;

pub use config::{ConfigLoader, ConfigLoaderError};
pub use loader::{BracketLoader, BracketLoaderError};
