//! Declarative column transforms.
//!
//! A [`ColumnTransform`] names the column it writes, the columns it reads and
//! the operation that maps source values to the target value, row by row.
//! Transforms carry no state; the same list can be applied to any number of
//! datasets.

use survey_model::Value;

/// Numeric combination for derived columns.
///
/// Receives one value per source column, in source order, and is only called
/// when none of them is missing. Returning `None` aborts the transform.
pub type CombineFn = fn(&[f64]) -> Option<f64>;

/// Row-wise operation of a transform.
#[derive(Debug, Clone)]
pub enum TransformOp {
    /// `target = source / divisor`, producing floats.
    Rescale { divisor: f64 },

    /// `target = Missing` where the source holds one of these codes.
    Sentinels(Vec<Value>),

    /// `target = combine(sources...)`, producing floats.
    Combine(CombineFn),
}

impl TransformOp {
    /// Short label used in logs and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rescale { .. } => "rescale",
            Self::Sentinels(_) => "sentinel remap",
            Self::Combine(_) => "derived",
        }
    }

    /// Number of sources the operation reads, `None` when any count works.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Self::Rescale { .. } | Self::Sentinels(_) => Some(1),
            Self::Combine(_) => None,
        }
    }
}

/// A column produced (or replaced) from one or more source columns.
#[derive(Debug, Clone)]
pub struct ColumnTransform {
    pub target: String,
    pub sources: Vec<String>,
    pub op: TransformOp,
}

impl ColumnTransform {
    /// Divide `source` by `divisor` into `target`.
    pub fn rescale(target: impl Into<String>, source: impl Into<String>, divisor: f64) -> Self {
        Self {
            target: target.into(),
            sources: vec![source.into()],
            op: TransformOp::Rescale { divisor },
        }
    }

    /// Replace sentinel codes in `column` with `Missing`, in place.
    pub fn remap_sentinels(
        column: impl Into<String>,
        sentinels: impl IntoIterator<Item = Value>,
    ) -> Self {
        let column = column.into();
        Self {
            target: column.clone(),
            sources: vec![column],
            op: TransformOp::Sentinels(sentinels.into_iter().collect()),
        }
    }

    /// Derive `target` from several sources.
    pub fn derive<I, S>(target: impl Into<String>, sources: I, combine: CombineFn) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            target: target.into(),
            sources: sources.into_iter().map(Into::into).collect(),
            op: TransformOp::Combine(combine),
        }
    }
}
