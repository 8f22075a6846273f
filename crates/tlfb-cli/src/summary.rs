use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::TransformResult;

pub fn print_summary(result: &TransformResult) {
    println!("Subject: {} (timepoint {})", result.subid, result.timepoint);
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }
    println!("Record key: {}", result.record_key);
    println!(
        "Days: {} submitted, {} missing",
        result.days_submitted, result.days_missing
    );
    println!(
        "Columns: {} of {} filled",
        result.filled, result.columns
    );
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Days used")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for category in &result.category_days {
        table.add_row(vec![
            Cell::new(category.label),
            days_cell(category.days),
        ]);
    }
    println!("{table}");
    print_aggregates(result);
}

fn print_aggregates(result: &TransformResult) {
    if result.aggregates.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Aggregate"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (name, value) in &result.aggregates {
        table.add_row(vec![Cell::new(name), Cell::new(value)]);
    }
    println!();
    println!("Aggregates:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn days_cell(days: usize) -> Cell {
    if days > 0 {
        Cell::new(days)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
