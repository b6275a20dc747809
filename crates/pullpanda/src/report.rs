//! Rendering summaries for the terminal
//!
//! `SummaryTable` is the plain data behind the table (one row per handle
//! plus a totals row) so it can be checked without parsing box drawing
//! characters. `render` turns it into a comfy-table.

use crate::summary::Summary;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

const TOTAL_LABEL: &str = "Total";
const PARTIAL_MARKER: &str = " (partial)";

/// One line of the summary table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub label: String,
    /// One count per status, in status order
    pub counts: Vec<usize>,
    pub total: usize,
    pub partial: bool,
}

/// Counts per handle and status with column and grand totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTable {
    pub statuses: Vec<String>,
    pub rows: Vec<TableRow>,
    pub totals: TableRow,
}

impl SummaryTable {
    pub fn from_summaries(summaries: &[Summary], statuses: &[String]) -> Self {
        let rows: Vec<TableRow> = summaries
            .iter()
            .map(|summary| {
                let counts: Vec<usize> = statuses.iter().map(|s| summary.count(s)).collect();
                TableRow {
                    label: summary.handle.clone(),
                    total: counts.iter().sum(),
                    counts,
                    partial: summary.is_partial(),
                }
            })
            .collect();

        let column_totals: Vec<usize> = (0..statuses.len())
            .map(|column| rows.iter().map(|row| row.counts[column]).sum())
            .collect();
        let totals = TableRow {
            label: TOTAL_LABEL.to_string(),
            total: column_totals.iter().sum(),
            counts: column_totals,
            partial: rows.iter().any(|row| row.partial),
        };

        Self {
            statuses: statuses.to_vec(),
            rows,
            totals,
        }
    }

    /// Render as a table: header, one row per handle, totals last
    pub fn render(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let mut header = vec![Cell::new("Handle")];
        header.extend(self.statuses.iter().map(Cell::new));
        header.push(Cell::new(TOTAL_LABEL));
        table.set_header(header);

        for row in &self.rows {
            table.add_row(row_cells(row, false));
        }
        table.add_row(row_cells(&self.totals, true));

        table.to_string()
    }
}

fn row_cells(row: &TableRow, bold: bool) -> Vec<Cell> {
    let label = if row.partial {
        format!("{}{}", row.label, PARTIAL_MARKER)
    } else {
        row.label.clone()
    };

    let mut cells = vec![Cell::new(label)];
    cells.extend(
        row.counts
            .iter()
            .chain(std::iter::once(&row.total))
            .map(|count| Cell::new(count).set_alignment(CellAlignment::Right)),
    );

    if bold {
        cells = cells
            .into_iter()
            .map(|cell| cell.add_attribute(Attribute::Bold))
            .collect();
    }
    cells
}

/// List every collected PR as `- [title] link`, grouped by handle
pub fn render_detailed_prs(summaries: &[Summary]) -> String {
    let mut out = String::from("Detailed PRs:\n");
    for summary in summaries {
        out.push_str(&format!("{}:\n", summary.handle));
        for pr in &summary.prs {
            out.push_str(&format!("- [{}] {}\n", pr.title, pr.link()));
        }
    }
    out
}

/// Describe every failed search, or `None` when everything succeeded
pub fn render_failures(summaries: &[Summary]) -> Option<String> {
    let failed: Vec<&Summary> = summaries.iter().filter(|s| s.is_partial()).collect();
    if failed.is_empty() {
        return None;
    }

    let total: usize = failed.iter().map(|s| s.failures.len()).sum();
    let mut out = format!(
        "{} search(es) failed for {} handle(s); their counts are incomplete:\n",
        total,
        failed.len()
    );
    for summary in failed {
        for failure in &summary.failures {
            let scope = failure
                .scope
                .as_ref()
                .map(|s| format!(" {}", s))
                .unwrap_or_default();
            out.push_str(&format!(
                "- {} is:{}{}: {}\n",
                summary.handle, failure.status, scope, failure.error
            ));
        }
    }
    Some(out)
}
