//! Data model for fixed-width survey files.
//!
//! A survey file is described by a dictionary of [`FieldSpec`]s. Each record
//! decodes into a [`Row`] of [`Value`]s, and rows are accumulated into a
//! column-oriented [`Dataset`]. Datasets are immutable: every update produces
//! a new `Dataset` that shares the columns it did not touch.
//!
//! # Example
//!
//! ```
//! use survey_model::{Column, Dataset, Value};
//!
//! let dataset = Dataset::new(
//!     "preg",
//!     vec![Column::new("prglngth", vec![Value::Integer(39), Value::Missing])],
//! )
//! .unwrap();
//!
//! assert_eq!(dataset.row_count(), 2);
//! assert_eq!(dataset.get(0, "prglngth"), Some(&Value::Integer(39)));
//! ```

mod dataset;
mod error;
mod field;
mod frequencies;
mod value;

#[cfg(feature = "polars")]
mod polars_ext;

pub use dataset::{Column, Dataset};
pub use error::{ModelError, Result};
pub use field::{FieldSpec, FieldType};
pub use frequencies::Frequencies;
pub use value::{Row, Value};
