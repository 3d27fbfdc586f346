//! Plain-text board renderer.
//!
//! Draws each territory as a box with its label and defense, followed by its
//! colour band and the units of each type needed to match it. Boxes stack in
//! columns of `ROWS_PER_COLUMN`, columns side by side.

use std::io::{self, Write};

use crate::board::unit::ALL_UNIT_TYPES;
use crate::board::view::{BoardEntry, BoardSink, BoardView};

/// Boxes per column before wrapping to a new column.
pub const ROWS_PER_COLUMN: usize = 6;

const BOX_INNER: usize = 14;
const COLUMN_GAP: &str = "   ";

/// Renders a `BoardView` as text to any writer.
pub struct TextBoard<W: Write> {
    out: W,
}

impl<W: Write> TextBoard<W> {
    pub fn new(out: W) -> Self {
        TextBoard { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BoardSink for TextBoard<W> {
    fn render(&mut self, view: &BoardView) -> io::Result<()> {
        if view.is_empty() {
            writeln!(self.out, "(no territories)")?;
            return self.out.flush();
        }

        let columns: Vec<Vec<Vec<String>>> = view
            .entries
            .chunks(ROWS_PER_COLUMN)
            .map(|chunk| chunk.iter().map(cell_lines).collect())
            .collect();
        let widths: Vec<usize> = columns
            .iter()
            .map(|col| {
                col.iter()
                    .flat_map(|cell| cell.iter().map(|l| l.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let rows = columns.first().map_or(0, |c| c.len());
        for row in 0..rows {
            for line in 0..CELL_HEIGHT {
                let mut text = String::new();
                for (col, width) in columns.iter().zip(&widths) {
                    let Some(cell) = col.get(row) else {
                        continue;
                    };
                    if !text.is_empty() {
                        text.push_str(COLUMN_GAP);
                    }
                    text.push_str(&format!("{:<width$}", cell[line], width = width));
                }
                writeln!(self.out, "{}", text.trim_end())?;
            }
        }
        self.out.flush()
    }
}

const CELL_HEIGHT: usize = 4;

/// The four text lines of one territory box.
fn cell_lines(entry: &BoardEntry) -> Vec<String> {
    let border = format!("+{}+", "-".repeat(BOX_INNER));
    let required: Vec<String> = ALL_UNIT_TYPES
        .iter()
        .map(|&u| format!("{}: {}", u.abbrev(), entry.required.get(u)))
        .collect();
    vec![
        border.clone(),
        format!(
            "|{:<w$}| {}",
            truncate(&entry.label, BOX_INNER),
            entry.band.color(),
            w = BOX_INNER
        ),
        format!(
            "|{:<w$}| {}",
            format!("Def: {}", entry.defense),
            required.join(", "),
            w = BOX_INNER
        ),
        border,
    ]
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
