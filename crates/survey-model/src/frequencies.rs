//! Value frequency tables.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::value::Value;

/// Distinct values of a column mapped to their counts.
///
/// Missing entries are not counted, so the table describes observed values
/// only. Keys are ordered by [`Value`]'s total order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frequencies {
    counts: BTreeMap<Value, usize>,
}

impl Frequencies {
    pub fn from_values(values: &[Value]) -> Self {
        let mut counts = BTreeMap::new();
        for value in values.iter().filter(|value| !value.is_missing()) {
            *counts.entry(value.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `value`, zero when it never appears.
    pub fn count(&self, value: &Value) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Largest observed value.
    pub fn max_key(&self) -> Option<&Value> {
        self.counts.keys().next_back()
    }

    /// Occurrences of the largest observed value.
    pub fn count_at_max_key(&self) -> Option<usize> {
        self.counts.values().next_back().copied()
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of non-missing entries counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Value, usize> {
        self.counts.iter()
    }
}

impl<'a> IntoIterator for &'a Frequencies {
    type Item = (&'a Value, &'a usize);
    type IntoIter = btree_map::Iter<'a, Value, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_skip_missing() {
        let freq = Frequencies::from_values(&[
            Value::Integer(1),
            Value::Missing,
            Value::Integer(1),
            Value::Integer(3),
        ]);
        assert_eq!(freq.count(&Value::Integer(1)), 2);
        assert_eq!(freq.count(&Value::Integer(2)), 0);
        assert_eq!(freq.count(&Value::Missing), 0);
        assert_eq!(freq.total(), 3);
        assert_eq!(freq.len(), 2);
    }

    #[test]
    fn max_key_reports_its_count() {
        let freq = Frequencies::from_values(&[
            Value::Float(2.5),
            Value::Float(10.25),
            Value::Float(10.25),
            Value::Missing,
        ]);
        assert_eq!(freq.max_key(), Some(&Value::Float(10.25)));
        assert_eq!(freq.count_at_max_key(), Some(2));
    }

    #[test]
    fn empty_table_has_no_max() {
        let freq = Frequencies::from_values(&[Value::Missing]);
        assert!(freq.is_empty());
        assert_eq!(freq.max_key(), None);
        assert_eq!(freq.count_at_max_key(), None);
    }
}
