//! Fixed-width record decoding.

use survey_model::{FieldSpec, FieldType, Row, Value};

use crate::error::DecodeError;

/// Decodes record lines against a fixed field layout.
///
/// The decoder borrows the field specifications and precomputes the minimum
/// line length, so one instance is reused for every line of a file.
#[derive(Debug, Clone)]
pub struct RecordDecoder<'a> {
    fields: &'a [FieldSpec],
    required_len: usize,
}

impl<'a> RecordDecoder<'a> {
    pub fn new(fields: &'a [FieldSpec]) -> Self {
        let required_len = fields.iter().map(FieldSpec::end).max().unwrap_or(0);
        Self {
            fields,
            required_len,
        }
    }

    pub fn fields(&self) -> &'a [FieldSpec] {
        self.fields
    }

    /// Shortest line that holds every field.
    pub fn required_len(&self) -> usize {
        self.required_len
    }

    /// Decode one line into a row, one value per field.
    ///
    /// Blank fields decode to [`Value::Missing`] whatever their declared type.
    pub fn decode(&self, line: &str) -> Result<Row, DecodeError> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.len() < self.required_len {
            return Err(DecodeError::LineTooShort {
                required: self.required_len,
                actual: line.len(),
            });
        }

        self.fields
            .iter()
            .map(|field| decode_field(field, line))
            .collect()
    }
}

/// Decode a single line without keeping a decoder around.
pub fn decode_record(fields: &[FieldSpec], line: &str) -> Result<Row, DecodeError> {
    RecordDecoder::new(fields).decode(line)
}

fn decode_field(field: &FieldSpec, line: &str) -> Result<Value, DecodeError> {
    let raw = line
        .get(field.offset..field.end())
        .ok_or_else(|| DecodeError::InvalidSlice {
            field: field.name.clone(),
        })?;
    let text = raw.trim();
    if text.is_empty() {
        return Ok(Value::Missing);
    }

    match field.field_type {
        FieldType::String => Ok(Value::String(text.to_string())),
        FieldType::Integer => {
            text.parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| DecodeError::InvalidInteger {
                    field: field.name.clone(),
                    text: text.to_string(),
                })
        }
        FieldType::Float => match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Value::Float(v)),
            _ => Err(DecodeError::InvalidFloat {
                field: field.name.clone(),
                text: text.to_string(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, offset: usize, width: usize, field_type: FieldType) -> FieldSpec {
        FieldSpec {
            name: name.to_string(),
            offset,
            width,
            field_type,
            format_code: format!("%{width}f"),
            description: String::new(),
        }
    }

    #[test]
    fn blank_field_is_missing_for_every_type() {
        let fields = vec![
            field("s", 0, 3, FieldType::String),
            field("i", 3, 3, FieldType::Integer),
            field("f", 6, 3, FieldType::Float),
        ];
        let row = decode_record(&fields, "         ").expect("decode");
        assert_eq!(row, vec![Value::Missing, Value::Missing, Value::Missing]);
    }

    #[test]
    fn strips_carriage_return() {
        let fields = vec![field("i", 0, 2, FieldType::Integer)];
        let row = decode_record(&fields, "42\r").expect("decode");
        assert_eq!(row, vec![Value::Integer(42)]);
    }

    #[test]
    fn rejects_non_finite_floats() {
        let fields = vec![field("f", 0, 3, FieldType::Float)];
        let err = decode_record(&fields, "inf").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidFloat { .. }));
    }

    #[test]
    fn reports_split_characters() {
        let fields = vec![field("s", 0, 1, FieldType::String)];
        let err = decode_record(&fields, "é").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidSlice {
                field: "s".to_string()
            }
        );
    }
}
