//! Projection assumptions: inflation decay, career growth, locations and
//! dwelling pricing

mod career;
mod inflation;
mod location;
mod property;
pub mod loader;

pub use career::{
    growth_for, CareerPath, CareerSwitch, CareerTable, GrowthSchedule, ResolvedPath, SalaryPath, StairStep,
    STAY_CAREER,
};
pub use inflation::{inflation_for, InflationSchedule, DECAY_START_YEAR, DECAY_STEP};
pub use location::{Location, LocationBook, Scenario};
pub use property::{DwellingFeatures, DwellingType, Extra};

use std::path::Path;

use crate::error::Result;

/// Container for the lookup data a projection reads
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub careers: CareerTable,
    pub locations: LocationBook,
}

impl Assumptions {
    /// Assumptions with the built-in career table
    pub fn default_careers() -> Self {
        Self {
            careers: CareerTable::builtin().clone(),
            locations: LocationBook::builtin().clone(),
        }
    }

    /// Built-in careers extended (and overridden) by a CSV career table
    pub fn with_career_file(path: &Path) -> Result<Self> {
        let mut careers = CareerTable::builtin().clone();
        let custom = loader::load_careers(path)?;
        log::debug!("loaded {} careers from {}", custom.len(), path.display());
        careers.extend(custom);
        Ok(Self {
            careers,
            locations: LocationBook::builtin().clone(),
        })
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_careers()
    }
}
