//! Load, clean and check stages shared by the subcommands.

use std::time::Instant;

use anyhow::{Context, Result};
use survey_ingest::{DatasetBuilder, read_dictionary};
use survey_model::Dataset;
use survey_transform::clean;
use survey_validate::{ValidationReport, validate};
use tracing::{info, info_span};

use crate::config::DatasetInputs;

/// Parse the dictionary and decode the data file.
pub fn load(inputs: &DatasetInputs) -> Result<Dataset> {
    let fields = read_dictionary(&inputs.dictionary)
        .with_context(|| format!("parse dictionary {}", inputs.dictionary.display()))?;
    DatasetBuilder::new(inputs.name.as_str(), fields)
        .build_from_path(&inputs.data)
        .with_context(|| format!("load data file {}", inputs.data.display()))
}

/// Apply the pregnancy cleaning pipeline.
pub fn clean_pregnancy(dataset: &Dataset) -> Result<Dataset> {
    clean(dataset, &survey_transform::nsfg::pregnancy_pipeline())
        .with_context(|| format!("clean dataset {}", dataset.name()))
}

/// Load, clean and run the pregnancy reference checks.
///
/// Check failures are part of the returned report; only ingest and cleaning
/// problems are errors.
pub fn check_pregnancy(inputs: &DatasetInputs) -> Result<(Dataset, ValidationReport)> {
    let span = info_span!("check", dataset = %inputs.name);
    let _guard = span.enter();
    let start = Instant::now();

    let raw = load(inputs)?;
    let cleaned = clean_pregnancy(&raw)?;
    let report = validate(&cleaned, &survey_validate::nsfg::pregnancy_checks());

    info!(
        rows = cleaned.row_count(),
        passed = report.passed,
        duration_ms = start.elapsed().as_millis(),
        "check complete"
    );
    Ok((cleaned, report))
}
