//! Column-oriented, immutable datasets.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{ModelError, Result};
use crate::frequencies::Frequencies;
use crate::value::Value;

/// A named sequence of values.
///
/// Values sit behind an `Arc` so datasets derived from one another share
/// untouched columns instead of copying them.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Arc<[Value]>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values: values.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of `Missing` entries.
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_missing()).count()
    }

    /// Distinct non-missing values and their counts.
    pub fn frequencies(&self) -> Frequencies {
        Frequencies::from_values(&self.values)
    }

    /// Returns true when both columns point at the same value storage.
    pub fn shares_storage(&self, other: &Column) -> bool {
        Arc::ptr_eq(&self.values, &other.values)
    }
}

/// A decoded survey dataset.
///
/// Every column has exactly [`row_count`](Self::row_count) entries and
/// column order follows the dictionary, with derived columns appended.
#[derive(Debug, Clone)]
pub struct Dataset {
    name: String,
    columns: Vec<Column>,
    index: HashMap<String, usize>,
    row_count: usize,
}

impl Dataset {
    /// Build a dataset from columns, checking names and lengths.
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map_or(0, Column::len);
        let mut index = HashMap::with_capacity(columns.len());
        for (position, column) in columns.iter().enumerate() {
            if column.len() != row_count {
                return Err(ModelError::ColumnLengthMismatch {
                    name: column.name.clone(),
                    expected: row_count,
                    actual: column.len(),
                });
            }
            if index.insert(column.name.clone(), position).is_some() {
                return Err(ModelError::DuplicateColumn {
                    name: column.name.clone(),
                });
            }
        }
        Ok(Self {
            name: name.into(),
            columns,
            index,
            row_count,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a column by name.
    pub fn column_entry(&self, name: &str) -> Option<&Column> {
        self.index.get(name).map(|&position| &self.columns[position])
    }

    /// Values of a named column.
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.column_entry(name).map(Column::values)
    }

    /// Value at a zero-based row of a named column.
    pub fn get(&self, row: usize, name: &str) -> Option<&Value> {
        self.column(name).and_then(|values| values.get(row))
    }

    /// Frequency table of a named column.
    pub fn frequencies(&self, name: &str) -> Option<Frequencies> {
        self.column_entry(name).map(Column::frequencies)
    }

    pub fn missing_count(&self, name: &str) -> Option<usize> {
        self.column_entry(name).map(Column::missing_count)
    }

    /// Return a new dataset with `name` set to `values`.
    ///
    /// An existing column keeps its position; a new one is appended. The
    /// receiver is left untouched.
    pub fn with_column(&self, name: impl Into<String>, values: Vec<Value>) -> Result<Self> {
        let column = Column::new(name, values);
        let len = column.len();
        if !self.columns.is_empty() && len != self.row_count {
            return Err(ModelError::ColumnLengthMismatch {
                name: column.name,
                expected: self.row_count,
                actual: len,
            });
        }

        let mut next = self.clone();
        if self.columns.is_empty() {
            next.row_count = len;
        }
        match next.index.get(&column.name) {
            Some(&position) => next.columns[position] = column,
            None => {
                next.index.insert(column.name.clone(), next.columns.len());
                next.columns.push(column);
            }
        }
        Ok(next)
    }
}
