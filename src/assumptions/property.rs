//! Dwelling features that scale the base price per area unit

use serde::{Deserialize, Serialize};

/// Room count with no price adjustment
pub const ROOMS_BASE: u32 = 3;

/// Price adjustment per room above or below the base
pub const ROOM_FACTOR: f64 = 0.05;

/// Type of dwelling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DwellingType {
    /// Apartment
    #[default]
    Piso,
    /// Detached house
    Chalet,
    /// Penthouse
    Atico,
}

impl DwellingType {
    pub fn factor(&self) -> f64 {
        match self {
            DwellingType::Piso => 1.0,
            DwellingType::Chalet => 1.25,
            DwellingType::Atico => 1.15,
        }
    }
}

/// Optional extras, each adding a fixed percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Extra {
    Garden,
    Terrace,
    Patio,
    Basement,
}

impl Extra {
    pub fn premium(&self) -> f64 {
        match self {
            Extra::Garden => 0.07,
            Extra::Terrace => 0.05,
            Extra::Patio => 0.03,
            Extra::Basement => 0.04,
        }
    }
}

/// Dwelling description used to adjust the quoted price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DwellingFeatures {
    pub dwelling_type: DwellingType,
    pub rooms: u32,
    #[serde(default)]
    pub extras: Vec<Extra>,
}

impl DwellingFeatures {
    /// Combined multiplier applied to the price per area unit.
    /// Duplicate extras count once.
    pub fn price_factor(&self) -> f64 {
        let mut extras = self.extras.clone();
        extras.sort();
        extras.dedup();

        let room_delta = f64::from(self.rooms) - f64::from(ROOMS_BASE);
        let mut factor = self.dwelling_type.factor() * (1.0 + room_delta * ROOM_FACTOR);
        for extra in extras {
            factor *= 1.0 + extra.premium();
        }
        factor
    }
}

impl Default for DwellingFeatures {
    fn default() -> Self {
        Self {
            dwelling_type: DwellingType::Piso,
            rooms: ROOMS_BASE,
            extras: Vec::new(),
        }
    }
}
