//! Ordered application of column transforms.

use survey_model::{Dataset, Value};
use tracing::debug;

use crate::error::{Result, TransformError};
use crate::transform::{ColumnTransform, CombineFn, TransformOp};

/// Apply `transforms` in order and return the cleaned dataset.
///
/// Each transform reads the output of the ones before it, so a derived
/// column sees sentinel-remapped inputs when the remap comes first. The
/// input dataset is not modified.
pub fn clean(dataset: &Dataset, transforms: &[ColumnTransform]) -> Result<Dataset> {
    let mut current = dataset.clone();
    for transform in transforms {
        current = apply_transform(&current, transform)?;
    }
    Ok(current)
}

/// Apply a single transform, returning a new dataset.
pub fn apply_transform(dataset: &Dataset, transform: &ColumnTransform) -> Result<Dataset> {
    let target = transform.target.as_str();
    if transform.sources.is_empty() {
        return Err(TransformError::NoSources {
            target: target.to_string(),
        });
    }
    if let Some(expected) = transform.op.arity()
        && expected != transform.sources.len()
    {
        return Err(TransformError::ArityMismatch {
            target: target.to_string(),
            expected,
            actual: transform.sources.len(),
        });
    }

    let sources = transform
        .sources
        .iter()
        .map(|name| {
            dataset
                .column(name)
                .map(|values| (name.as_str(), values))
                .ok_or_else(|| TransformError::UnknownColumn {
                    target: target.to_string(),
                    column: name.clone(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let values = match &transform.op {
        TransformOp::Rescale { divisor } => rescale(target, sources[0], *divisor)?,
        TransformOp::Sentinels(sentinels) => remap_sentinels(sources[0].1, sentinels),
        TransformOp::Combine(combine) => combine_columns(target, &sources, *combine)?,
    };

    let missing = values.iter().filter(|value| value.is_missing()).count();
    debug!(
        column = target,
        op = transform.op.label(),
        missing,
        "applied transform"
    );
    Ok(dataset.with_column(target, values)?)
}

fn rescale(target: &str, (name, values): (&str, &[Value]), divisor: f64) -> Result<Vec<Value>> {
    if divisor == 0.0 || !divisor.is_finite() {
        return Err(TransformError::InvalidDivisor {
            target: target.to_string(),
        });
    }
    values
        .iter()
        .enumerate()
        .map(|(row, value)| match value {
            Value::Missing => Ok(Value::Missing),
            other => numeric(name, row, other).map(|v| Value::Float(v / divisor)),
        })
        .collect()
}

fn remap_sentinels(values: &[Value], sentinels: &[Value]) -> Vec<Value> {
    values
        .iter()
        .map(|value| {
            if sentinels.iter().any(|code| value.is_same_value(code)) {
                Value::Missing
            } else {
                value.clone()
            }
        })
        .collect()
}

fn combine_columns(
    target: &str,
    sources: &[(&str, &[Value])],
    combine: CombineFn,
) -> Result<Vec<Value>> {
    let row_count = sources.first().map_or(0, |(_, values)| values.len());
    let mut operands = Vec::with_capacity(sources.len());
    let mut out = Vec::with_capacity(row_count);

    for row in 0..row_count {
        if sources.iter().any(|(_, values)| values[row].is_missing()) {
            out.push(Value::Missing);
            continue;
        }
        operands.clear();
        for &(name, values) in sources {
            operands.push(numeric(name, row, &values[row])?);
        }
        let combined = combine(&operands).ok_or_else(|| TransformError::CombineFailed {
            target: target.to_string(),
            row,
        })?;
        out.push(Value::Float(combined));
    }
    Ok(out)
}

fn numeric(column: &str, row: usize, value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| TransformError::NonNumeric {
        column: column.to_string(),
        row,
    })
}
