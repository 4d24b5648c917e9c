//! Terminal tables and JSON output for command results.

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use dx_model::{Axis, BarDatum, ChoroplethFill, CountRecord, CrossTabGrid};

use crate::commands::{CatalogEntry, RegionOverview};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Formats `value` as pretty JSON or through its table builder.
pub fn render<T, F>(format: OutputFormat, value: &T, table: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> Table,
{
    match format {
        OutputFormat::Table => Ok(table(value).to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(value).context("serialize output"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn overview_table(rows: &[RegionOverview]) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Region"), header_cell("Respondents")];
    header.extend(Axis::ALL.iter().map(|axis| header_cell(axis.title())));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=Axis::ALL.len() + 1 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total = 0u64;
    for row in rows {
        total += row.respondents;
        let mut cells = vec![Cell::new(&row.region), Cell::new(row.respondents)];
        cells.extend(Axis::ALL.iter().map(|axis| match row.hits.get(axis) {
            Some(count) => count_cell(*count),
            None => dim_cell("-"),
        }));
        table.add_row(cells);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn records_table(records: &[CountRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Region"),
        header_cell("Axis"),
        header_cell("Category"),
        header_cell("Age band"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.region),
            Cell::new(record.axis),
            Cell::new(&record.category),
            Cell::new(&record.age),
            count_cell(record.count),
        ]);
    }
    table
}

pub fn bars_table(bars: &[BarDatum]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for bar in bars {
        table.add_row(vec![Cell::new(&bar.category), count_cell(bar.value)]);
    }
    table
}

pub fn choropleth_table(fill: &ChoroplethFill) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Feature"),
        header_cell("Region"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for shade in &fill.shades {
        table.add_row(vec![
            Cell::new(&shade.feature),
            dim_cell(&shade.region),
            count_cell(shade.count),
        ]);
    }
    table.add_row(vec![
        Cell::new("Scale").add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!("{}..{}", fill.min, fill.max)).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Rows are the x domain, columns the y domain.
pub fn crosstab_table(grid: &CrossTabGrid) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell(&grid.region)];
    header.extend(grid.y_domain.iter().map(|label| header_cell(label)));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=grid.y_domain.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for x in &grid.x_domain {
        let mut cells = vec![Cell::new(x).add_attribute(Attribute::Bold)];
        cells.extend(grid.y_domain.iter().map(|y| {
            count_cell(grid.cell(x, y).map_or(0, |cell| cell.count))
        }));
        table.add_row(cells);
    }
    table
}

pub fn catalog_table(entries: &[CatalogEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Axis"),
        header_cell("Column"),
        header_cell("Key"),
        header_cell("Label"),
    ]);
    apply_table_style(&mut table);
    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.axis),
            dim_cell(&entry.column),
            Cell::new(&entry.key),
            Cell::new(&entry.label),
        ]);
    }
    table
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

fn count_cell(count: u64) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
