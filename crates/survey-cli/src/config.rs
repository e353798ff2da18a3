//! Input resolution for survey runs.
//!
//! Paths come from three layers, highest precedence first:
//!
//! 1. command-line flags
//! 2. a TOML run file passed with `--config`
//! 3. the `SURVEY_DATA_DIR` environment variable, joined with the default
//!    pregnancy file names

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Environment variable naming the directory holding the survey files.
pub const DATA_DIR_ENV_VAR: &str = "SURVEY_DATA_DIR";

pub const DEFAULT_DATASET_NAME: &str = "2002FemPreg";
pub const DEFAULT_DICTIONARY_FILE: &str = "2002FemPreg.dct";
pub const DEFAULT_DATA_FILE: &str = "2002FemPreg.dat.gz";

/// Contents of a `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    #[serde(default)]
    pub dataset: DatasetSection,
}

/// The `[dataset]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetSection {
    pub name: Option<String>,
    pub dictionary: Option<PathBuf>,
    pub data: Option<PathBuf>,
}

impl RunConfig {
    /// Read a run file; relative paths are resolved against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let mut config: RunConfig =
            toml::from_str(&text).with_context(|| format!("parse config {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.dataset.dictionary = config.dataset.dictionary.map(|p| base.join(p));
        config.dataset.data = config.dataset.data.map(|p| base.join(p));
        Ok(config)
    }
}

/// Paths given directly on the command line.
#[derive(Debug, Clone, Default)]
pub struct InputOverrides {
    pub dictionary: Option<PathBuf>,
    pub data: Option<PathBuf>,
}

/// Fully resolved inputs of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetInputs {
    pub name: String,
    pub dictionary: PathBuf,
    pub data: PathBuf,
}

/// Value of `SURVEY_DATA_DIR`, ignoring an empty setting.
pub fn data_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(DATA_DIR_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Merge the configuration layers into concrete input paths.
pub fn resolve_inputs(
    overrides: &InputOverrides,
    config: Option<&RunConfig>,
    data_dir: Option<&Path>,
) -> Result<DatasetInputs> {
    let section = config.map(|c| &c.dataset);
    let name = section
        .and_then(|s| s.name.clone())
        .unwrap_or_else(|| DEFAULT_DATASET_NAME.to_string());

    let dictionary = overrides
        .dictionary
        .clone()
        .or_else(|| section.and_then(|s| s.dictionary.clone()))
        .or_else(|| data_dir.map(|dir| dir.join(DEFAULT_DICTIONARY_FILE)));
    let data = overrides
        .data
        .clone()
        .or_else(|| section.and_then(|s| s.data.clone()))
        .or_else(|| data_dir.map(|dir| dir.join(DEFAULT_DATA_FILE)));

    match (dictionary, data) {
        (Some(dictionary), Some(data)) => Ok(DatasetInputs {
            name,
            dictionary,
            data,
        }),
        (dictionary, _) => {
            let missing = if dictionary.is_none() {
                "dictionary"
            } else {
                "data"
            };
            bail!(
                "no {missing} file given; pass --{missing}, set it in a --config file, \
                 or set {DATA_DIR_ENV_VAR} to the directory holding {DEFAULT_DICTIONARY_FILE} \
                 and {DEFAULT_DATA_FILE}"
            )
        }
    }
}
