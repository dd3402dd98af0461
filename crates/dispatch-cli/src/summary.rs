//! Report rendering: comfy-table transcript, plain text and JSON.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dispatch_model::{Report, StatOutcome};
use dispatch_transform::MONTHS;

/// Builds the per-column statistics table.
pub fn report_table(report: &Report) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Statistic"),
        header_cell("Value"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);

    let mut previous: Option<&str> = None;
    for entry in &report.entries {
        let column_cell = if previous == Some(entry.column.as_str()) {
            dim_cell("")
        } else {
            Cell::new(&entry.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold)
        };
        previous = Some(entry.column.as_str());
        table.add_row(vec![
            column_cell,
            Cell::new(entry.statistic),
            outcome_cell(&entry.outcome),
        ]);
    }
    table
}

/// Row counts header printed above the statistics table.
pub fn counts_lines(report: &Report) -> Vec<String> {
    vec![
        format!("Rows loaded: {}", report.rows_loaded),
        format!(
            "Rows retained: {} ({} dropped)",
            report.rows_retained,
            report.rows_dropped()
        ),
        format!("Unmapped months: {}", report.unmapped_months),
        format!("Missing values: {}", report.missing_total()),
    ]
    .into_iter()
    .chain(
        report
            .missing_values
            .iter()
            .filter(|count| count.missing > 0)
            .map(|count| format!("  {}: {}", count.column, count.missing)),
    )
    .collect()
}

/// Console transcript: counts, then one block per column.
pub fn render_plain(report: &Report) -> String {
    let mut lines = counts_lines(report);
    let mut previous: Option<&str> = None;
    for entry in &report.entries {
        if previous != Some(entry.column.as_str()) {
            lines.push(format!("{}:", entry.column));
            previous = Some(entry.column.as_str());
        }
        lines.push(format!("  {}: {}", entry.statistic, entry.outcome));
    }
    lines.join("\n")
}

pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Month lookup as a two-column table.
pub fn months_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Month"), header_cell("Number")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (idx, name) in MONTHS.iter().enumerate() {
        table.add_row(vec![Cell::new(name), Cell::new(idx + 1)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
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

fn outcome_cell(outcome: &StatOutcome) -> Cell {
    match outcome {
        StatOutcome::Values(_) => Cell::new(outcome),
        StatOutcome::Failed(message) => Cell::new(message).fg(Color::Red),
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
