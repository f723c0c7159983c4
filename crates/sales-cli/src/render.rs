//! Terminal tables for enriched rows and summaries.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sales_core::{Dataset, Record, Summary};

const HEADERS: [&str; 6] = ["SKU", "Cost", "Price", "Qty", "Profit", "Margin"];

/// Table of every enriched row, optionally closed by the summary row.
pub fn dataset_table(dataset: &Dataset, summary: Option<&Summary>) -> Table {
    let mut table = base_table();
    for record in dataset {
        table.add_row(record_row(record));
    }
    if let Some(summary) = summary {
        table.add_row(summary_row(summary));
    }
    table
}

/// Single-row table for a summary.
pub fn summary_table(summary: &Summary) -> Table {
    let mut table = base_table();
    table.add_row(summary_row(summary));
    table
}

/// Two decimal places, no currency symbol or grouping.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Margin as a percentage with two decimals.
pub fn format_margin(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

pub fn format_quantity(value: f64) -> String {
    format!("{value}")
}

fn base_table() -> Table {
    let mut table = Table::new();
    table.set_header(HEADERS.iter().map(|label| header_cell(label)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for index in 1..HEADERS.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

fn record_row(record: &Record) -> Vec<Cell> {
    vec![
        sku_cell(&record.sku),
        Cell::new(format_amount(record.cost)),
        Cell::new(format_amount(record.price)),
        Cell::new(format_quantity(record.qty)),
        signed_cell(format_amount(record.profit), record.profit),
        signed_cell(format_margin(record.profit_margin), record.profit_margin),
    ]
}

fn summary_row(summary: &Summary) -> Vec<Cell> {
    vec![
        Cell::new(&summary.sku)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format_amount(summary.cost)).add_attribute(Attribute::Bold),
        Cell::new(format_amount(summary.price)).add_attribute(Attribute::Bold),
        Cell::new(format_quantity(summary.qty)).add_attribute(Attribute::Bold),
        signed_cell(format_amount(summary.profit), summary.profit).add_attribute(Attribute::Bold),
        signed_cell(format_margin(summary.profit_margin), summary.profit_margin)
            .add_attribute(Attribute::Bold),
    ]
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn sku_cell(sku: &str) -> Cell {
    if sku.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(sku)
    }
}

/// Green above zero, red below, dim at zero.
fn signed_cell(text: String, value: f64) -> Cell {
    if value > 0.0 {
        Cell::new(text).fg(Color::Green)
    } else if value < 0.0 {
        Cell::new(text).fg(Color::Red)
    } else {
        dim_cell(text)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
