//! Survey cleaning transforms.
//!
//! This crate applies an ordered list of [`ColumnTransform`]s to a dataset:
//!
//! - **transform**: declarative column transforms (rescale, sentinel remap,
//!   derived combination)
//! - **cleaner**: runs transforms in order, producing a new dataset
//! - **nsfg**: the fixed cleaning pipeline for the 2002 pregnancy file
//!
//! Every transform propagates `Missing`: a numeric operation never treats an
//! absent value as zero.

pub mod cleaner;
mod error;
pub mod nsfg;
pub mod transform;

pub use cleaner::{apply_transform, clean};
pub use error::{Result, TransformError};
pub use transform::{ColumnTransform, CombineFn, TransformOp};
