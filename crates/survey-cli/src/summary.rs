use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use survey_model::{Dataset, FieldSpec, Value};
use survey_validate::ValidationReport;

use crate::cli::ReportFormatArg;

pub fn print_schema(fields: &[FieldSpec]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Column"),
        header_cell("Width"),
        header_cell("Type"),
        header_cell("Format"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for field in fields {
        table.add_row(vec![
            Cell::new(&field.name).add_attribute(Attribute::Bold),
            Cell::new(field.offset + 1),
            Cell::new(field.width),
            Cell::new(field.field_type),
            dim_cell(&field.format_code),
            Cell::new(&field.description),
        ]);
    }
    println!("{table}");
    println!("{} fields", fields.len());
}

pub fn print_dataset_summary(dataset: &Dataset) {
    println!(
        "Dataset: {} ({} rows, {} columns)",
        dataset.name(),
        dataset.row_count(),
        dataset.column_count()
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Missing"),
        header_cell("Distinct"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for column in dataset.columns() {
        table.add_row(vec![
            Cell::new(column.name()).add_attribute(Attribute::Bold),
            Cell::new(column_kind(column.values())),
            missing_cell(column.missing_count()),
            Cell::new(column.frequencies().len()),
        ]);
    }
    println!("{table}");
}

pub fn print_report(report: &ValidationReport, format: ReportFormatArg) -> Result<()> {
    match format {
        ReportFormatArg::Text => println!("{report}"),
        ReportFormatArg::Json => {
            let json = serde_json::to_string_pretty(report).context("serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Variant shared by every observed value.
fn column_kind(values: &[Value]) -> &'static str {
    let mut kinds = values.iter().filter_map(|value| match value {
        Value::Integer(_) => Some("integer"),
        Value::Float(_) => Some("float"),
        Value::String(_) => Some("string"),
        Value::Missing => None,
    });
    match kinds.next() {
        None => "-",
        Some(first) if kinds.all(|kind| kind == first) => first,
        Some(_) => "mixed",
    }
}

fn missing_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_kind_ignores_missing() {
        assert_eq!(
            column_kind(&[Value::Missing, Value::Integer(1), Value::Integer(2)]),
            "integer"
        );
        assert_eq!(column_kind(&[Value::Float(1.0), Value::from("x")]), "mixed");
        assert_eq!(column_kind(&[Value::Missing]), "-");
    }
}
