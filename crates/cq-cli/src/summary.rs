use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cq_model::CanonicalRecord;

use crate::cli::OutputFormatArg;
use crate::types::{CategoriesOutcome, ListOutcome, ShowOutcome, UpdateOutcome};

pub fn print_listing(outcome: &ListOutcome, format: OutputFormatArg) -> Result<()> {
    if format == OutputFormatArg::Json {
        println!("{}", serde_json::to_string_pretty(&outcome.page.items)?);
        return Ok(());
    }

    println!("Catalog: {}", outcome.catalog.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Category"),
        header_cell("Price"),
        header_cell("Stock"),
        header_cell("Updated"),
        header_cell("Score"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    for record in &outcome.page.items {
        table.add_row(vec![
            Cell::new(&record.id),
            Cell::new(&record.name),
            Cell::new(&record.category),
            Cell::new(format!("{:.2}", record.price)),
            Cell::new(record.stock),
            Cell::new(record.updated_at.as_deref().unwrap_or("-")),
            score_cell(record.glitch_score),
        ]);
    }
    println!("{table}");
    println!("{}", list_summary_line(outcome));
    Ok(())
}

pub fn print_detail(outcome: &ShowOutcome) {
    print_record(&outcome.record);
}

pub fn print_update(outcome: &UpdateOutcome) {
    let fields: Vec<String> = outcome
        .event
        .fields
        .iter()
        .map(|field| field.to_string())
        .collect();
    println!("Updated {}: {}", outcome.event.id, fields.join(", "));
    print_record(&outcome.record);
    if outcome.written {
        println!("Catalog written back.");
    } else {
        println!("Catalog not written (pass --write to persist).");
    }
}

pub fn print_categories(outcome: &CategoriesOutcome) {
    for category in &outcome.categories {
        println!("{category}");
    }
}

fn print_record(record: &CanonicalRecord) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec!["id".to_string(), record.id.clone()]);
    table.add_row(vec!["name".to_string(), record.name.clone()]);
    table.add_row(vec!["category".to_string(), record.category.clone()]);
    table.add_row(vec!["price".to_string(), format!("{:.2}", record.price)]);
    table.add_row(vec!["stock".to_string(), record.stock.to_string()]);
    table.add_row(vec![
        "updated".to_string(),
        record.updated_at.clone().unwrap_or_else(|| "-".to_string()),
    ]);
    println!("{table}");
    println!("{}", score_line(record));

    if !record.glitch_report.is_empty() {
        let mut issues = Table::new();
        issues.set_header(vec![header_cell("Field"), header_cell("Issue")]);
        apply_table_style(&mut issues);
        for issue in &record.glitch_report {
            issues.add_row(vec![issue.field.to_string(), issue.message.clone()]);
        }
        println!("{issues}");
    }
}

/// One-line query recap printed under the listing table.
pub fn list_summary_line(outcome: &ListOutcome) -> String {
    format!(
        "page {}/{} - {} of {} records matched, {} glitched",
        outcome.page.page,
        outcome.page.total_pages,
        outcome.matched,
        outcome.total_records,
        outcome.glitched
    )
}

/// One-line glitch recap for a single record.
pub fn score_line(record: &CanonicalRecord) -> String {
    format!(
        "glitch score {}/100 - {} issues",
        record.glitch_score,
        record.glitch_report.len()
    )
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn score_cell(score: u8) -> Cell {
    let cell = Cell::new(score);
    match score {
        0 => cell.fg(Color::Green),
        1..50 => cell.fg(Color::Yellow),
        _ => cell.fg(Color::Red),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
