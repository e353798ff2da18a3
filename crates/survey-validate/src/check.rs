//! Validation checks and the probes they evaluate.

use std::fmt;

use serde::Serialize;
use survey_model::{Dataset, Value};

/// What a probe saw in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Observation {
    Count(usize),
    Value(Value),
    /// The probe could not be evaluated (unknown column, row out of range).
    Unavailable(String),
}

impl Observation {
    /// True when `self` was observed and equals `expected`.
    ///
    /// An unavailable observation never matches, even another unavailable one.
    pub fn matches(&self, expected: &Observation) -> bool {
        !matches!(self, Self::Unavailable(_)) && self == expected
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::Value(value) => write!(f, "{value}"),
            Self::Unavailable(reason) => write!(f, "unavailable ({reason})"),
        }
    }
}

impl From<usize> for Observation {
    fn from(count: usize) -> Self {
        Self::Count(count)
    }
}

impl From<Value> for Observation {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// A quantity computed from a dataset.
#[derive(Debug, Clone)]
pub enum Probe {
    RowCount,
    ValueAt { column: String, row: usize },
    /// Rows of `column` equal to `value`.
    Frequency { column: String, value: Value },
    /// Count recorded for the largest key of `column`'s frequency table.
    CountAtMaxKey { column: String },
    Custom(fn(&Dataset) -> Observation),
}

impl Probe {
    pub fn observe(&self, dataset: &Dataset) -> Observation {
        match self {
            Self::RowCount => Observation::Count(dataset.row_count()),
            Self::ValueAt { column, row } => match dataset.column(column) {
                None => unknown_column(column),
                Some(values) => values.get(*row).cloned().map_or_else(
                    || {
                        Observation::Unavailable(format!(
                            "row {row} out of range for {} rows",
                            values.len()
                        ))
                    },
                    Observation::Value,
                ),
            },
            Self::Frequency { column, value } => dataset
                .frequencies(column)
                .map_or_else(|| unknown_column(column), |f| Observation::Count(f.count(value))),
            Self::CountAtMaxKey { column } => match dataset.frequencies(column) {
                None => unknown_column(column),
                Some(frequencies) => frequencies.count_at_max_key().map_or_else(
                    || Observation::Unavailable(format!("column {column} has no values")),
                    Observation::Count,
                ),
            },
            Self::Custom(probe) => probe(dataset),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::RowCount => "row count".to_string(),
            Self::ValueAt { column, row } => format!("{column}[{row}]"),
            Self::Frequency { column, value } => format!("count of {value} in {column}"),
            Self::CountAtMaxKey { column } => format!("count at max key of {column}"),
            Self::Custom(_) => "custom probe".to_string(),
        }
    }
}

fn unknown_column(column: &str) -> Observation {
    Observation::Unavailable(format!("unknown column {column}"))
}

/// A probe paired with the observation it must produce.
#[derive(Debug, Clone)]
pub struct ValidationCheck {
    pub description: String,
    pub probe: Probe,
    pub expected: Observation,
}

impl ValidationCheck {
    /// Build a check described by its probe.
    pub fn new(probe: Probe, expected: impl Into<Observation>) -> Self {
        Self {
            description: probe.describe(),
            probe,
            expected: expected.into(),
        }
    }

    pub fn row_count(expected: usize) -> Self {
        Self::new(Probe::RowCount, expected)
    }

    pub fn value_at(column: impl Into<String>, row: usize, expected: impl Into<Value>) -> Self {
        Self::new(
            Probe::ValueAt {
                column: column.into(),
                row,
            },
            expected.into(),
        )
    }

    pub fn frequency(column: impl Into<String>, value: impl Into<Value>, expected: usize) -> Self {
        Self::new(
            Probe::Frequency {
                column: column.into(),
                value: value.into(),
            },
            expected,
        )
    }

    pub fn count_at_max_key(column: impl Into<String>, expected: usize) -> Self {
        Self::new(
            Probe::CountAtMaxKey {
                column: column.into(),
            },
            expected,
        )
    }

    pub fn custom(
        description: impl Into<String>,
        probe: fn(&Dataset) -> Observation,
        expected: impl Into<Observation>,
    ) -> Self {
        Self::new(Probe::Custom(probe), expected).with_description(description)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Evaluate the probe, returning the observation and whether it matched.
    pub fn evaluate(&self, dataset: &Dataset) -> (Observation, bool) {
        let actual = self.probe.observe(dataset);
        let passed = actual.matches(&self.expected);
        (actual, passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_model::Column;

    fn dataset() -> Dataset {
        Dataset::new(
            "t",
            vec![Column::new(
                "n",
                vec![
                    Value::Integer(1),
                    Value::Integer(3),
                    Value::Integer(3),
                    Value::Missing,
                ],
            )],
        )
        .expect("dataset")
    }

    #[test]
    fn unavailable_never_matches() {
        let missing = Observation::Unavailable("x".to_string());
        assert!(!missing.matches(&missing));
        assert!(Observation::Count(2).matches(&Observation::Count(2)));
    }

    #[test]
    fn probes_observe_dataset() {
        let data = dataset();
        assert_eq!(Probe::RowCount.observe(&data), Observation::Count(4));
        assert_eq!(
            Probe::ValueAt {
                column: "n".to_string(),
                row: 1
            }
            .observe(&data),
            Observation::Value(Value::Integer(3))
        );
        assert_eq!(
            Probe::CountAtMaxKey {
                column: "n".to_string()
            }
            .observe(&data),
            Observation::Count(2)
        );
    }

    #[test]
    fn out_of_range_row_is_unavailable() {
        let observation = Probe::ValueAt {
            column: "n".to_string(),
            row: 9,
        }
        .observe(&dataset());
        assert_eq!(
            observation,
            Observation::Unavailable("row 9 out of range for 4 rows".to_string())
        );
    }

    #[test]
    fn descriptions_name_the_probe() {
        assert_eq!(ValidationCheck::row_count(1).description, "row count");
        assert_eq!(
            ValidationCheck::value_at("caseid", 3, "1").description,
            "caseid[3]"
        );
        assert_eq!(
            ValidationCheck::frequency("pregordr", 1_i64, 5033).description,
            "count of 1 in pregordr"
        );
    }
}
