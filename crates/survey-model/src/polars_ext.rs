//! Conversion of datasets into Polars DataFrames.
//!
//! Downstream analysis (histograms, summary statistics) works on Polars
//! frames; this module hands a decoded dataset over with `Missing` mapped to
//! null.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

use crate::dataset::{Column, Dataset};
use crate::value::Value;

impl Dataset {
    /// Build a DataFrame with one column per dataset column.
    ///
    /// Columns whose non-missing values are all integers become `i64`, all
    /// floats become `f64`; anything else is rendered as strings.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let columns = self
            .columns()
            .iter()
            .map(|column| column_to_series(column).into_column())
            .collect::<Vec<_>>();
        DataFrame::new(columns)
    }
}

fn column_to_series(column: &Column) -> Series {
    let name: polars::prelude::PlSmallStr = column.name().into();
    let values = column.values();
    let present = || values.iter().filter(|value| !value.is_missing());

    if present().all(|value| matches!(value, Value::Integer(_))) {
        let ints: Vec<Option<i64>> = values
            .iter()
            .map(|value| match value {
                Value::Integer(v) => Some(*v),
                _ => None,
            })
            .collect();
        return Series::new(name, ints);
    }

    if present().all(|value| matches!(value, Value::Float(_))) {
        let floats: Vec<Option<f64>> = values.iter().map(Value::as_f64).collect();
        return Series::new(name, floats);
    }

    let strings: Vec<Option<String>> = values
        .iter()
        .map(|value| match value {
            Value::Missing => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
        .collect();
    Series::new(name, strings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_becomes_null() {
        let dataset = Dataset::new(
            "t",
            vec![
                Column::new("n", vec![Value::Integer(1), Value::Missing]),
                Column::new("w", vec![Value::Float(0.5), Value::Float(1.5)]),
                Column::new("id", vec![Value::from("a"), Value::Missing]),
            ],
        )
        .expect("dataset");

        let df = dataset.to_dataframe().expect("dataframe");
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
        assert_eq!(df.column("n").expect("n").null_count(), 1);
        assert_eq!(df.column("id").expect("id").null_count(), 1);
        assert_eq!(df.column("w").expect("w").null_count(), 0);
    }
}
