//! Aggregated validation outcome.

use std::fmt;

use serde::Serialize;

use crate::check::Observation;

/// One check whose observation did not match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub description: String,
    pub actual: Observation,
    pub expected: Observation,
}

/// Result of running every check against a dataset.
///
/// `passed` is true exactly when `failures` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub dataset: String,
    pub passed: bool,
    pub checks_run: usize,
    pub failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    pub fn new(
        dataset: impl Into<String>,
        checks_run: usize,
        failures: Vec<ValidationFailure>,
    ) -> Self {
        Self {
            dataset: dataset.into(),
            passed: failures.is_empty(),
            checks_run,
            failures,
        }
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    pub fn passed_count(&self) -> usize {
        self.checks_run.saturating_sub(self.failures.len())
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed {
            return write!(f, "{}: all {} checks passed", self.dataset, self.checks_run);
        }
        write!(
            f,
            "{}: {} of {} checks failed",
            self.dataset,
            self.failed_count(),
            self.checks_run
        )?;
        for failure in &self.failures {
            write!(
                f,
                "\n  {}: expected {}, got {}",
                failure.description, failure.expected, failure.actual
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(description: &str) -> ValidationFailure {
        ValidationFailure {
            description: description.to_string(),
            actual: Observation::Count(1),
            expected: Observation::Count(2),
        }
    }

    #[test]
    fn passed_count_never_goes_below_zero() {
        let report = ValidationReport::new("t", 1, vec![failure("a"), failure("b")]);
        assert!(!report.passed);
        assert_eq!(report.failed_count(), 2);
        assert_eq!(report.passed_count(), 0);
    }
}
