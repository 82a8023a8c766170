//! Property price inflation schedule
//!
//! Inflation holds at the base rate for the first five years, then decays by
//! half a percentage point per year until it reaches the floor.

use serde::{Deserialize, Serialize};

/// Years (exclusive) during which the base rate applies unchanged
pub const DECAY_START_YEAR: u32 = 5;

/// Yearly reduction once decay starts
pub const DECAY_STEP: f64 = 0.005;

/// Effective inflation rate for a given projection year
pub fn inflation_for(year: u32, base: f64, floor: f64) -> f64 {
    if year < DECAY_START_YEAR {
        return base;
    }
    let reduced = base - DECAY_STEP * f64::from(year - (DECAY_START_YEAR - 1));
    reduced.max(floor)
}

/// Base rate and floor pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationSchedule {
    /// Yearly inflation for years 0-4
    pub base: f64,
    /// Minimum yearly inflation after decay
    pub floor: f64,
}

impl InflationSchedule {
    pub fn new(base: f64, floor: f64) -> Self {
        Self { base, floor }
    }

    /// Rate for a given projection year
    pub fn rate(&self, year: u32) -> f64 {
        inflation_for(year, self.base, self.floor)
    }

    /// True when the floor sits above the base rate, which makes the decay a no-op
    /// and lifts every year past the fifth to the floor
    pub fn floor_exceeds_base(&self) -> bool {
        self.floor > self.base
    }
}

impl Default for InflationSchedule {
    fn default() -> Self {
        Self {
            base: 0.05,
            floor: 0.02,
        }
    }
}
