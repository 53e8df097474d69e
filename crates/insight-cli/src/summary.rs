use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use insight_chart::{ChartKind, ChartSpec};
use insight_core::Sample;
use insight_model::CellValue;
use insight_profile::ColumnProfile;

use crate::types::IngestReport;

pub fn print_report(report: &IngestReport) {
    println!("Source: {} ({})", report.source, report.format);
    println!(
        "Rows: {}   Columns: {}   Missing cells: {}   Memory: {:.1} KB",
        report.summary.rows,
        report.summary.columns,
        report.summary.missing_cells,
        report.summary.approx_bytes as f64 / 1024.0
    );
    if report.summary.duplicate_rows > 0 {
        println!("Duplicate rows: {}", report.summary.duplicate_rows);
    }
    println!();
    print_profile_table(&report.profiles);
    if !report.charts.is_empty() {
        println!();
        print_chart_table(&report.charts);
    }
    println!();
    print_preview(report);
}

fn print_profile_table(profiles: &[ColumnProfile]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Non-null"),
        header_cell("Nulls"),
        header_cell("Distinct"),
        header_cell("Top value"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Mean"),
    ]);
    apply_table_style(&mut table);
    for index in 2..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for index in 6..=8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for profile in profiles {
        let mode = profile
            .mode
            .as_ref()
            .map(|(value, count)| format!("{value} ({count})"));
        let (min, max, mean) = match profile.numeric {
            Some(stats) => (
                Some(format!("{:.2}", stats.min)),
                Some(format!("{:.2}", stats.max)),
                Some(format!("{:.2}", stats.mean)),
            ),
            None => (None, None, None),
        };
        table.add_row(vec![
            Cell::new(&profile.name).add_attribute(Attribute::Bold),
            Cell::new(profile.column_type),
            Cell::new(profile.non_null),
            count_cell(profile.nulls, Color::Yellow),
            Cell::new(profile.distinct),
            optional_cell(mode),
            optional_cell(min),
            optional_cell(max),
            optional_cell(mean),
        ]);
    }
    println!("{table}");
}

fn print_chart_table(charts: &[ChartSpec]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Chart"),
        header_cell("Columns"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    for chart in charts {
        let kind = match chart.kind {
            ChartKind::Histogram => "histogram",
            ChartKind::Bar => "bar",
            ChartKind::Heatmap => "heatmap",
        };
        let detail = match chart.kind {
            ChartKind::Histogram => format!(
                "{} bins",
                chart.bins.unwrap_or(1)
            ),
            ChartKind::Bar => format!("top {} values", chart.row_cap),
            ChartKind::Heatmap => "pairwise correlation".to_string(),
        };
        table.add_row(vec![
            Cell::new(kind).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(chart.columns.join(", ")),
            Cell::new(detail),
        ]);
    }
    println!("Suggested charts:");
    println!("{table}");
}

fn print_preview(report: &IngestReport) {
    let shown = report.view.row_count().min(report.preview_rows);
    if report.view.row_count() != report.total_rows {
        println!(
            "Preview ({shown} of {} filtered rows, {} total):",
            report.view.row_count(),
            report.total_rows
        );
    } else {
        println!("Preview ({shown} of {} rows):", report.total_rows);
    }
    let mut table = Table::new();
    table.set_header(
        report
            .view
            .columns()
            .iter()
            .map(|column| header_cell(&column.name))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for (index, column) in report.view.columns().iter().enumerate() {
        if column.column_type.is_numeric() {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    for row in 0..shown {
        table.add_row(
            report
                .view
                .row(row)
                .into_iter()
                .map(preview_cell)
                .collect::<Vec<_>>(),
        );
    }
    println!("{table}");
}

pub fn print_samples(samples: &[Sample]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Name"), header_cell("Description")]);
    apply_table_style(&mut table);
    for sample in samples {
        table.add_row(vec![
            Cell::new(sample.name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(sample.description()),
        ]);
    }
    println!("{table}");
    println!("Load one with `insight ingest --sample <NAME>`.");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: Option<String>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn preview_cell(value: &CellValue) -> Cell {
    if value.is_null() {
        dim_cell("∅")
    } else {
        Cell::new(value.display_string())
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
