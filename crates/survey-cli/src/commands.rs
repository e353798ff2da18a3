use std::path::Path;

use anyhow::{Context, Result};
use survey_cli::config::{
    DEFAULT_DATASET_NAME, DatasetInputs, InputOverrides, RunConfig, data_dir_from_env,
    resolve_inputs,
};
use survey_cli::pipeline::{check_pregnancy, clean_pregnancy, load};
use survey_ingest::read_dictionary;

use crate::cli::{CheckArgs, LoadArgs, SchemaArgs};
use crate::summary::{print_dataset_summary, print_report, print_schema};

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let fields = read_dictionary(&args.dictionary)
        .with_context(|| format!("parse dictionary {}", args.dictionary.display()))?;
    print_schema(&fields);
    Ok(())
}

pub fn run_load(args: &LoadArgs) -> Result<()> {
    let inputs = DatasetInputs {
        name: dataset_name(&args.data),
        dictionary: args.dictionary.clone(),
        data: args.data.clone(),
    };
    let mut dataset = load(&inputs)?;
    if args.clean {
        dataset = clean_pregnancy(&dataset)?;
    }
    print_dataset_summary(&dataset);
    Ok(())
}

/// Returns whether every check passed.
pub fn run_check(args: &CheckArgs) -> Result<bool> {
    let config = args.config.as_deref().map(RunConfig::load).transpose()?;
    let overrides = InputOverrides {
        dictionary: args.dictionary.clone(),
        data: args.data.clone(),
    };
    let data_dir = data_dir_from_env();
    let inputs = resolve_inputs(&overrides, config.as_ref(), data_dir.as_deref())?;

    let (_, report) = check_pregnancy(&inputs)?;
    print_report(&report, args.format)?;
    Ok(report.passed)
}

/// File name up to its first dot, so `2002FemPreg.dat.gz` names `2002FemPreg`.
fn dataset_name(data: &Path) -> String {
    data.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .filter(|stem| !stem.is_empty())
        .unwrap_or(DEFAULT_DATASET_NAME)
        .to_string()
}
