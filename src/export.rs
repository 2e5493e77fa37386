//! JSON and CSV reports of a solved contour.

use crate::pressure::ForceCoefficients;
use crate::solver::{FreeStream, PanelMethod, Solution};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

const CSV_HEADER: &str = "index,x,y,half_length,strength,velocity,cp,upper";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One row per panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelRecord {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub half_length: f64,
    pub strength: f64,
    pub velocity: f64,
    pub cp: f64,
    pub upper: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub freestream: FreeStream,
    pub coefficients: ForceCoefficients,
    pub panels: Vec<PanelRecord>,
}

impl Report {
    pub fn new(method: &PanelMethod, solution: &Solution) -> Self {
        let distribution = method.pressure_distribution(solution);
        let panels = method
            .geometry()
            .panels
            .iter()
            .enumerate()
            .map(|(index, panel)| PanelRecord {
                index,
                x: panel.midpoint.x,
                y: panel.midpoint.y,
                half_length: panel.half_length,
                strength: solution.strengths[index],
                velocity: solution.velocity[index],
                cp: solution.pressure[index],
                upper: distribution.is_upper_surface[index],
            })
            .collect();

        Report {
            freestream: solution.freestream,
            coefficients: method.force_coefficients(solution),
            panels,
        }
    }

    pub fn write_json(&self, writer: &mut dyn Write) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }

    pub fn write_csv(&self, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", CSV_HEADER)?;
        for row in &self.panels {
            writeln!(
                writer,
                "{},{:.9},{:.9},{:.9},{:.9},{:.9},{:.9},{}",
                row.index,
                row.x,
                row.y,
                row.half_length,
                row.strength,
                row.velocity,
                row.cp,
                if row.upper { "true" } else { "false" },
            )?;
        }
        Ok(())
    }

    /// Write to `path` (`-` for stdout). `.csv` selects CSV, anything else JSON.
    pub fn write_to_path(&self, path: &Path) -> Result<(), ExportError> {
        let mut writer = writer_for_path(path)?;
        if path.extension().map(|ext| ext == "csv").unwrap_or(false) {
            self.write_csv(&mut *writer)?;
        } else {
            self.write_json(&mut *writer)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}
