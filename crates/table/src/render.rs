//! Plain-text rendering for terminals.

use crate::table::{Cell, EpochValidatorsTable};
use epochview_encoder::{BarKind, BarPart, BarSpec};
/// Width units drawn as one glyph.
pub const UNITS_PER_GLYPH: f64 = 10.0;

const COLUMN_SEPARATOR: &str = " | ";

/// Render the table as aligned text: a header-group line, a column title
/// line, then one line per row.
pub fn render_text(table: &EpochValidatorsTable) -> String {
    let body: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.cells().into_iter().map(render_cell).collect())
        .collect();

    let mut widths: Vec<usize> = table.columns.iter().map(|title| display_len(title)).collect();
    for line in &body {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(display_len(cell));
        }
    }

    let mut out = String::new();
    let mut groups = Vec::with_capacity(table.header_groups.len());
    let mut column = 0;
    for group in &table.header_groups {
        let end = (column + group.span).min(widths.len());
        let spanned = &widths[column.min(end)..end];
        let width = spanned.iter().sum::<usize>()
            + COLUMN_SEPARATOR.len() * spanned.len().saturating_sub(1);
        groups.push(pad(&group.title, width));
        column = end;
    }
    push_line(&mut out, &groups);

    let titles: Vec<String> = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(title, width)| pad(title, *width))
        .collect();
    push_line(&mut out, &titles);

    for line in &body {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect();
        push_line(&mut out, &cells);
    }
    out
}

/// Draw a bar: segments as glyph runs, labels verbatim, parts separated by
/// a space.
pub fn render_bar(bar: &BarSpec) -> String {
    let mut out = String::new();
    for part in &bar.parts {
        let text = match part {
            BarPart::Segment { kind, width } => glyphs(*kind, *width),
            BarPart::Label { text, .. } => text.clone(),
        };
        if text.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&text);
    }
    out
}

fn render_cell(cell: Cell<'_>) -> String {
    match cell {
        Cell::Text(text) => text.to_string(),
        Cell::Bar(bar) => bar.map(render_bar).unwrap_or_default(),
        Cell::Kickout(summary) => summary
            .map(|summary| summary.short_label.clone())
            .unwrap_or_default(),
    }
}

fn glyphs(kind: BarKind, width: f64) -> String {
    let glyph = match kind {
        BarKind::Pledge => '#',
        BarKind::Produced => '=',
        BarKind::Missed => '-',
        BarKind::ZeroExpected => return String::new(),
    };
    let count = (width / UNITS_PER_GLYPH).floor().max(0.0) as usize;
    std::iter::repeat(glyph).take(count).collect()
}

fn display_len(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

fn push_line(out: &mut String, cells: &[String]) {
    out.push_str(cells.join(COLUMN_SEPARATOR).trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use epochview_encoder::{pledge_bar, production_bar};
    use epochview_test_helpers::{tokens, SnapshotBuilder};
    use epochview_types::ProductionCounts;

    #[test]
    fn test_pad_fills_to_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("", 2), "  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }

    #[test]
    fn test_render_pledge_bar() {
        let bar = pledge_bar(Some(50.0), 100.0, 200.0).unwrap();
        // 50 / 100 * 100 + 5 = 55 units
        assert_eq!(render_bar(&bar), "##### 0 (25.00%)");
    }

    #[test]
    fn test_render_production_bar() {
        let bar = production_bar(Some(ProductionCounts::new(30, 40)), 80.0).unwrap();
        // 60 units split 45 / 15
        assert_eq!(render_bar(&bar), "30 ==== - 10");

        let zero = production_bar(Some(ProductionCounts::new(0, 0)), 80.0).unwrap();
        assert_eq!(render_bar(&zero), "0");
    }

    #[test]
    fn test_render_table_lines() {
        let snapshot = SnapshotBuilder::new(3)
            .epoch_id(2, "PastEpochId")
            .current_validator("alice", tokens(10), &[0], (5, 5), (0, 0))
            .proposal("bob", tokens(1))
            .block_producer(2, "bob")
            .build();
        let table = EpochValidatorsTable::assemble(&snapshot).unwrap();
        let text = render_text(&table);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2 + table.rows.len());
        assert!(lines[0].contains("Next Epoch"));
        assert!(lines[0].contains("Current Epoch"));
        assert!(lines[0].contains("Past Epochs"));
        assert!(lines[1].starts_with("Validator"));
        assert!(lines[1].ends_with("Past..."));
        assert!(lines[2].starts_with("alice"));
        assert!(lines[2].contains("########## 10 (100.00%)"));
        assert!(lines[3].starts_with("bob"));
        assert!(lines[3].ends_with("BP"));
    }
}
