//! Reference-statistic validation.
//!
//! A [`ValidationCheck`] pairs a [`Probe`] (row count, a cell, a frequency)
//! with the [`Observation`] it must produce. [`validate`] runs every check and
//! collects all mismatches into a [`ValidationReport`]; a failing check is
//! data for the caller, never an error.

mod check;
mod engine;
pub mod nsfg;
mod report;

pub use check::{Observation, Probe, ValidationCheck};
pub use engine::validate;
pub use report::{ValidationFailure, ValidationReport};
