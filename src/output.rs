//! Result rendering.

use crate::geometry::{BoundingBox, Star};
use crate::pipeline::Report;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Output format for the selected boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `(line,col)(line,col)` per box
    #[default]
    Text,
    /// A single JSON document with boxes and stage counts
    Json,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Serialize)]
struct BoxRecord {
    top_left: Star,
    bottom_right: Star,
    area: i64,
}

impl From<&BoundingBox> for BoxRecord {
    fn from(b: &BoundingBox) -> Self {
        Self {
            top_left: b.top_left(),
            bottom_right: b.bottom_right(),
            area: b.area(),
        }
    }
}

#[derive(Serialize)]
struct ReportRecord {
    boxes: Vec<BoxRecord>,
    stars: usize,
    components: usize,
    survivors: usize,
}

/// Write one line per box. An empty result writes nothing.
pub fn write_text<W: Write>(out: &mut W, boxes: &[BoundingBox]) -> io::Result<()> {
    for b in boxes {
        writeln!(out, "{}", b)?;
    }
    Ok(())
}

/// Write the report as a single JSON document followed by a newline.
pub fn write_json<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let record = ReportRecord {
        boxes: report.boxes.iter().map(BoxRecord::from).collect(),
        stars: report.stars,
        components: report.components,
        survivors: report.survivors,
    };
    serde_json::to_writer(&mut *out, &record)?;
    writeln!(out)
}

/// Write the report in the requested format.
pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, &report.boxes),
        OutputFormat::Json => write_json(out, report),
    }
}
