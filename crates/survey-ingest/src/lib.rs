//! Survey ingestion.
//!
//! This crate turns a dictionary file and a fixed-width data file into a
//! [`Dataset`](survey_model::Dataset):
//!
//! - **dictionary**: parses `_column(...)` field definitions into [`FieldSpec`]s
//! - **decoder**: slices one record line into typed values
//! - **source**: streams lines from plain or gzip-compressed files
//! - **builder**: accumulates decoded rows into columns
//!
//! # Usage
//!
//! ```ignore
//! use survey_ingest::{DatasetBuilder, read_dictionary};
//!
//! let fields = read_dictionary("2002FemPreg.dct".as_ref())?;
//! let dataset = DatasetBuilder::new("2002FemPreg", fields)
//!     .build_from_path("2002FemPreg.dat.gz".as_ref())?;
//! println!("{} rows", dataset.row_count());
//! ```
//!
//! Any malformed line aborts the load; no partial dataset is returned.

pub mod builder;
pub mod decoder;
pub mod dictionary;
mod error;
pub mod source;

pub use builder::{DatasetBuilder, load_dataset};
pub use decoder::{RecordDecoder, decode_record};
pub use dictionary::{normalize_field_name, parse_dictionary, read_dictionary};
pub use error::{DecodeError, IngestError, Result};
pub use source::{LineSource, is_gzip_path};

pub use survey_model::{FieldSpec, FieldType};
