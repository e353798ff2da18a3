//! Dictionary (`.dct`) parsing.
//!
//! A dictionary wraps its field definitions in a header and a closing brace:
//!
//! ```text
//! infile dictionary {
//!     _column(1)      str12      caseid    %12s  "RESPONDENT ID NUMBER"
//!     _column(13)     byte       pregordr   %2f  "PREGNANCY ORDER (NUMBER)"
//! }
//! ```
//!
//! Offsets are one-based in the file and zero-based in [`FieldSpec`].

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use survey_model::{FieldSpec, FieldType};
use tracing::debug;

use crate::error::{IngestError, Result};

/// `_column(<offset>) <type> <name> %<width><format> "<description>"`
static FIELD_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s+_column\((\d+)\)\s+(\S+)\s+(\S+)\s+(%(\d+)(?:\.\d+)?[A-Za-z]+)\s+"([^"]*)"\s*$"#,
    )
    .expect("Invalid dictionary field regex")
});

/// Read and parse a dictionary file.
pub fn read_dictionary(path: &Path) -> Result<Vec<FieldSpec>> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let fields = parse_dictionary(&text)?;
    debug!(path = %path.display(), fields = fields.len(), "parsed dictionary");
    Ok(fields)
}

/// Parse dictionary text into field specifications, in file order.
///
/// The first non-blank line must open the dictionary with `{` and the last
/// non-blank line must be `}`. Blank lines in between are ignored; every
/// other line must be a field definition.
pub fn parse_dictionary(text: &str) -> Result<Vec<FieldSpec>> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();

    let Some(&(header_line, header)) = lines.first() else {
        return Err(IngestError::schema(1, "dictionary is empty"));
    };
    if !header.trim_end().ends_with('{') {
        return Err(IngestError::schema(
            header_line,
            format!("expected dictionary header ending in '{{', found {header:?}"),
        ));
    }
    let (trailer_line, trailer) = lines[lines.len() - 1];
    if lines.len() < 2 || trailer.trim() != "}" {
        return Err(IngestError::schema(
            trailer_line,
            "expected closing '}' on the last line",
        ));
    }

    let mut seen = HashSet::new();
    let mut fields = Vec::with_capacity(lines.len() - 2);
    for &(line_number, line) in &lines[1..lines.len() - 1] {
        let field = parse_field_line(line_number, line)?;
        if !seen.insert(field.name.clone()) {
            return Err(IngestError::schema(
                line_number,
                format!("duplicate field name {:?}", field.name),
            ));
        }
        fields.push(field);
    }
    if fields.is_empty() {
        return Err(IngestError::schema(trailer_line, "dictionary defines no fields"));
    }
    Ok(fields)
}

fn parse_field_line(line_number: usize, line: &str) -> Result<FieldSpec> {
    let captures = FIELD_LINE_REGEX.captures(line).ok_or_else(|| {
        IngestError::schema(line_number, format!("not a field definition: {line:?}"))
    })?;

    let column: usize = captures[1]
        .parse()
        .map_err(|_| IngestError::schema(line_number, "column offset out of range"))?;
    let offset = column
        .checked_sub(1)
        .ok_or_else(|| IngestError::schema(line_number, "column offsets start at 1"))?;

    let type_token = &captures[2];
    let field_type = FieldType::from_token(type_token).ok_or_else(|| {
        IngestError::schema(line_number, format!("unknown type token {type_token:?}"))
    })?;

    let width: usize = captures[5]
        .parse()
        .map_err(|_| IngestError::schema(line_number, "field width out of range"))?;
    if width == 0 {
        return Err(IngestError::schema(line_number, "field width must be positive"));
    }

    Ok(FieldSpec {
        name: normalize_field_name(&captures[3]),
        offset,
        width,
        field_type,
        format_code: captures[4].to_string(),
        description: captures[6].to_string(),
    })
}

/// Dataset column keys use hyphens where dictionaries use underscores.
pub fn normalize_field_name(raw: &str) -> String {
    raw.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_single_field() {
        let field = parse_field_line(
            2,
            r#"    _column(13)     byte       pregordr   %2f  "PREGNANCY ORDER (NUMBER)""#,
        )
        .expect("field");
        assert_eq!(field.name, "pregordr");
        assert_eq!(field.offset, 12);
        assert_eq!(field.width, 2);
        assert_eq!(field.field_type, FieldType::Integer);
        assert_eq!(field.format_code, "%2f");
        assert_eq!(field.description, "PREGNANCY ORDER (NUMBER)");
    }

    #[test]
    fn accepts_precision_in_format() {
        let field = parse_field_line(
            2,
            r#"  _column(423)  double  finalwgt  %18.8f  "FINAL WEIGHT""#,
        )
        .expect("field");
        assert_eq!(field.width, 18);
        assert_eq!(field.format_code, "%18.8f");
        assert_eq!(field.field_type, FieldType::Float);
    }

    #[test]
    fn requires_leading_whitespace() {
        let err = parse_field_line(4, r#"_column(1) str12 caseid %12s "ID""#).unwrap_err();
        assert!(matches!(err, IngestError::Schema { line: 4, .. }));
    }

    #[test]
    fn normalizes_underscores() {
        assert_eq!(normalize_field_name("birthwgt_lb"), "birthwgt-lb");
        assert_eq!(normalize_field_name("caseid"), "caseid");
    }
}
