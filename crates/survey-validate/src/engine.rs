use survey_model::Dataset;
use tracing::{info, info_span, warn};

use crate::check::ValidationCheck;
use crate::report::{ValidationFailure, ValidationReport};

/// Run every check against `dataset`.
///
/// A mismatch is recorded and the remaining checks still run; the report
/// lists each failing check in the order given.
pub fn validate(dataset: &Dataset, checks: &[ValidationCheck]) -> ValidationReport {
    let span = info_span!("validate", dataset = %dataset.name(), checks = checks.len());
    let _guard = span.enter();

    let mut failures = Vec::new();
    for check in checks {
        let (actual, passed) = check.evaluate(dataset);
        if passed {
            continue;
        }
        warn!(
            check = %check.description,
            expected = %check.expected,
            actual = %actual,
            "validation check failed"
        );
        failures.push(ValidationFailure {
            description: check.description.clone(),
            actual,
            expected: check.expected.clone(),
        });
    }

    let report = ValidationReport::new(dataset.name(), checks.len(), failures);
    info!(
        passed = report.passed,
        checks_run = report.checks_run,
        failed = report.failed_count(),
        "validation finished"
    );
    report
}
