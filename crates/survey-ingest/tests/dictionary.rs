//! Tests for dictionary parsing.

use survey_ingest::{FieldType, IngestError, parse_dictionary, read_dictionary};

const PREG_DICTIONARY: &str = r#"infile dictionary {
    _column(1)      str12                             caseid  %12s  "RESPONDENT ID NUMBER"
    _column(13)     byte                            pregordr   %2f  "PREGNANCY ORDER (NUMBER)"
    _column(15)     byte                           howpreg_n   %2f  "BB-2 # OF WEEKS OR MONTHS CURRENTLY PREGNANT"
    _column(275)    int                              agepreg   %4f  "AGE AT PREGNANCY OUTCOME"
    _column(423)    double                          finalwgt  %18f  "FINAL POST-STRATIFIED AND ADJUSTED WEIGHT"
}
"#;

#[test]
fn parses_fields_in_order() {
    let fields = parse_dictionary(PREG_DICTIONARY).expect("parse");
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["caseid", "pregordr", "howpreg-n", "agepreg", "finalwgt"]
    );

    let caseid = &fields[0];
    assert_eq!(caseid.offset, 0);
    assert_eq!(caseid.width, 12);
    assert_eq!(caseid.field_type, FieldType::String);
    assert_eq!(caseid.format_code, "%12s");
    assert_eq!(caseid.description, "RESPONDENT ID NUMBER");

    let agepreg = &fields[3];
    assert_eq!(agepreg.offset, 274);
    assert_eq!(agepreg.width, 4);
    assert_eq!(agepreg.field_type, FieldType::Integer);

    assert_eq!(fields[4].field_type, FieldType::Float);
}

#[test]
fn parsing_is_idempotent() {
    let first = parse_dictionary(PREG_DICTIONARY).expect("first parse");
    let second = parse_dictionary(PREG_DICTIONARY).expect("second parse");
    assert_eq!(first, second);
}

#[test]
fn ignores_blank_lines_around_fields() {
    let text = "\ninfile dictionary {\n\n    _column(1) byte a %1f \"A\"\n\n}\n\n";
    let fields = parse_dictionary(text).expect("parse");
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "a");
}

#[test]
fn unknown_type_is_a_schema_error() {
    let text = "infile dictionary {\n    _column(1) date a %1f \"A\"\n}\n";
    let err = parse_dictionary(text).unwrap_err();
    match err {
        IngestError::Schema { line, message } => {
            assert_eq!(line, 2);
            assert!(message.contains("date"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_field_line_is_rejected() {
    let text = "infile dictionary {\n    _column(1) byte a 1f \"A\"\n}\n";
    assert!(matches!(
        parse_dictionary(text),
        Err(IngestError::Schema { line: 2, .. })
    ));

    let unquoted = "infile dictionary {\n    _column(1) byte a %1f A\n}\n";
    assert!(matches!(
        parse_dictionary(unquoted),
        Err(IngestError::Schema { line: 2, .. })
    ));
}

#[test]
fn zero_offset_and_zero_width_are_rejected() {
    let zero_offset = "infile dictionary {\n    _column(0) byte a %1f \"A\"\n}\n";
    assert!(parse_dictionary(zero_offset).is_err());

    let zero_width = "infile dictionary {\n    _column(1) byte a %0f \"A\"\n}\n";
    assert!(parse_dictionary(zero_width).is_err());
}

#[test]
fn duplicate_names_are_rejected() {
    let text = "infile dictionary {\n    _column(1) byte a_b %1f \"A\"\n    _column(2) byte a-b %1f \"B\"\n}\n";
    let err = parse_dictionary(text).unwrap_err();
    assert!(matches!(err, IngestError::Schema { line: 3, .. }));
}

#[test]
fn framing_is_required() {
    let no_header = "    _column(1) byte a %1f \"A\"\n}\n";
    assert!(matches!(
        parse_dictionary(no_header),
        Err(IngestError::Schema { line: 1, .. })
    ));

    let no_trailer = "infile dictionary {\n    _column(1) byte a %1f \"A\"\n";
    assert!(matches!(
        parse_dictionary(no_trailer),
        Err(IngestError::Schema { line: 2, .. })
    ));

    assert!(parse_dictionary("").is_err());
    assert!(parse_dictionary("infile dictionary {\n}\n").is_err());
}

#[test]
fn read_dictionary_reports_missing_file() {
    let err = read_dictionary(std::path::Path::new("/no/such/file.dct")).unwrap_err();
    assert!(matches!(err, IngestError::Io { .. }));
}
