//! CSV-based career table loader
//!
//! Expected columns: `career,early,mid,late,raise,every_months,cap,reference_start`.
//! Rows with `raise` set describe stair-step careers, the rest are tiered.

use std::fs::File;
use std::path::Path;

use csv::Reader;

use super::career::{CareerTable, GrowthSchedule, StairStep};
use crate::error::{ProjectionError, Result};

/// Raw CSV row of a career table
#[derive(Debug, serde::Deserialize)]
struct CareerRow {
    career: String,
    early: Option<f64>,
    mid: Option<f64>,
    late: Option<f64>,
    raise: Option<f64>,
    every_months: Option<u32>,
    cap: Option<f64>,
    reference_start: Option<f64>,
}

impl CareerRow {
    fn invalid(&self, reason: &str) -> ProjectionError {
        ProjectionError::InvalidCareerRow {
            career: self.career.clone(),
            reason: reason.to_string(),
        }
    }

    fn to_schedule(&self) -> Result<GrowthSchedule> {
        if self.career.trim().is_empty() {
            return Err(self.invalid("empty career id"));
        }

        if let Some(raise) = self.raise {
            let every_months = self
                .every_months
                .ok_or_else(|| self.invalid("stair-step row needs every_months"))?;
            if every_months == 0 {
                return Err(self.invalid("every_months must be positive"));
            }
            let cap = self
                .cap
                .ok_or_else(|| self.invalid("stair-step row needs cap"))?;
            let reference_start = self
                .reference_start
                .ok_or_else(|| self.invalid("stair-step row needs reference_start"))?;
            return Ok(GrowthSchedule::StairStep(StairStep {
                raise,
                every_months,
                cap,
                reference_start,
            }));
        }

        match (self.early, self.mid, self.late) {
            (Some(early), Some(mid), Some(late)) => Ok(GrowthSchedule::Tiered { early, mid, late }),
            _ => Err(self.invalid("tiered row needs early, mid and late")),
        }
    }
}

/// Load a career table from any reader
pub fn load_careers_from_reader<R: std::io::Read>(reader: R) -> Result<CareerTable> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut table = CareerTable::default();

    for result in csv_reader.deserialize() {
        let row: CareerRow = result?;
        let schedule = row.to_schedule()?;
        table.insert(row.career.trim(), schedule);
    }

    Ok(table)
}

/// Load a career table from a CSV file
pub fn load_careers<P: AsRef<Path>>(path: P) -> Result<CareerTable> {
    let file = File::open(path)?;
    load_careers_from_reader(file)
}
