//! Table and JSON rendering of a [`Report`].

use crate::report::{Report, Stats};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Spaces between two table columns.
const PADDING: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn render<W: Write>(self, report: &Report, out: W) -> io::Result<()> {
        match self {
            Self::Table => write_table(report, out),
            Self::Json => write_json(report, out),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = UnknownOutputType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(UnknownOutputType(s.to_owned())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Json => "json",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output type `{0}`")]
pub struct UnknownOutputType(pub String);

fn row(name: &str, stats: &Stats) -> [String; 4] {
    [
        name.to_owned(),
        stats.diff.to_string(),
        stats.count.to_string(),
        format!("{:.1} %", stats.percent),
    ]
}

/// Writes one row per file followed by a `TOTAL` row.
///
/// Every column but the last is as wide as its widest cell plus [`PADDING`].
pub fn write_table<W: Write>(report: &Report, mut out: W) -> io::Result<()> {
    let mut rows = Vec::with_capacity(report.files.len() + 2);
    rows.push(["File", "Translated", "Total", "Percent"].map(str::to_owned));
    rows.extend(report.files.iter().map(|f| row(&f.file, &f.stats)));
    rows.push(row("TOTAL", &report.total));

    let mut widths = [0; 3];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    for [file, translated, total, percent] in &rows {
        for (cell, width) in [file, translated, total].into_iter().zip(widths) {
            write!(out, "{cell}{:pad$}", "", pad = width - cell.width() + PADDING)?;
        }
        writeln!(out, "{percent}")?;
    }
    out.flush()
}

/// Writes the report as a pretty printed JSON object.
pub fn write_json<W: Write>(report: &Report, mut out: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    out.flush()
}
