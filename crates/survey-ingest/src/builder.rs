//! Dataset construction from streamed records.

use std::path::Path;

use survey_model::{Column, Dataset, FieldSpec, Value};
use tracing::{debug, info, info_span};

use crate::decoder::RecordDecoder;
use crate::dictionary::read_dictionary;
use crate::error::{IngestError, Result};
use crate::source::LineSource;

/// Builds a [`Dataset`] by decoding a data file line by line.
///
/// Each decoded row is pushed into per-field column buffers, so the raw
/// text of a line is dropped as soon as it is decoded.
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    name: String,
    fields: Vec<FieldSpec>,
}

impl DatasetBuilder {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Decode every line of a file (gzip when the path ends in `.gz`).
    pub fn build_from_path(&self, path: &Path) -> Result<Dataset> {
        let span = info_span!("build_dataset", dataset = %self.name, path = %path.display());
        let _guard = span.enter();
        let source = LineSource::open(path)?;
        self.build_from_lines(source)
    }

    /// Decode every line yielded by `source`.
    ///
    /// The first failure aborts the build; the source is dropped (closing
    /// its file) before the error is returned.
    pub fn build_from_lines(&self, source: LineSource) -> Result<Dataset> {
        if self.fields.is_empty() {
            return Err(IngestError::layout("no fields to decode"));
        }
        let decoder = RecordDecoder::new(&self.fields);
        let mut buffers: Vec<Vec<Value>> = vec![Vec::new(); self.fields.len()];
        let mut rows = 0usize;

        for line in source {
            let line = line?;
            let row = decoder
                .decode(&line)
                .map_err(|err| IngestError::Decode {
                    line: rows + 1,
                    source: err,
                })?;
            for (buffer, value) in buffers.iter_mut().zip(row) {
                buffer.push(value);
            }
            rows += 1;
        }

        let columns = self
            .fields
            .iter()
            .zip(buffers)
            .map(|(field, values)| Column::new(field.name.clone(), values))
            .collect();
        let dataset = Dataset::new(self.name.clone(), columns)?;

        debug!(required_len = decoder.required_len(), "record layout");
        info!(
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "dataset built"
        );
        Ok(dataset)
    }
}

/// Parse a dictionary and decode its data file in one step.
pub fn load_dataset(name: &str, dictionary: &Path, data: &Path) -> Result<Dataset> {
    let fields = read_dictionary(dictionary)?;
    DatasetBuilder::new(name, fields).build_from_path(data)
}
