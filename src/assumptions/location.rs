//! Built-in locations with reference prices and inflation scenarios
//!
//! A location name resolves either to a single location or to a group, whose
//! price is the element-wise average of its members' trajectories.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// Inflation outlook applied to a location
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Optimistic,
    #[default]
    Mid,
    Pessimistic,
}

/// Reference price per m2 and yearly inflation under each scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub price: f64,
    pub infl_low: f64,
    pub infl_mid: f64,
    pub infl_high: f64,
}

impl Location {
    /// Base inflation for a scenario. Optimistic means slower price growth.
    pub fn inflation(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::Optimistic => self.infl_low,
            Scenario::Mid => self.infl_mid,
            Scenario::Pessimistic => self.infl_high,
        }
    }
}

const fn loc(price: f64, infl_low: f64, infl_mid: f64, infl_high: f64) -> Location {
    Location {
        price,
        infl_low,
        infl_mid,
        infl_high,
    }
}

const LOCATIONS: [(&str, Location); 19] = [
    ("La Latina", loc(5100.0, 0.03, 0.07, 0.12)),
    ("Lavapiés", loc(4200.0, 0.03, 0.07, 0.12)),
    ("Malasaña", loc(4800.0, 0.03, 0.07, 0.12)),
    ("San Isidro", loc(3200.0, 0.025, 0.055, 0.09)),
    ("Embajadores", loc(3500.0, 0.025, 0.055, 0.09)),
    ("Barajas", loc(3700.0, 0.025, 0.055, 0.09)),
    ("Segovia", loc(2200.0, 0.02, 0.045, 0.07)),
    ("Guadalajara", loc(2100.0, 0.02, 0.045, 0.07)),
    ("Becerril", loc(2600.0, 0.02, 0.04, 0.065)),
    ("Navacerrada", loc(2500.0, 0.02, 0.04, 0.065)),
    ("Costa Andaluza", loc(2400.0, 0.02, 0.045, 0.07)),
    ("Lanzarote", loc(2300.0, 0.02, 0.045, 0.07)),
    ("La Palma", loc(2000.0, 0.02, 0.045, 0.07)),
    ("Tenerife", loc(2400.0, 0.02, 0.045, 0.07)),
    ("Gran Canaria", loc(2300.0, 0.02, 0.045, 0.07)),
    ("Centro Almería", loc(1800.0, 0.02, 0.045, 0.07)),
    ("Retamar", loc(1900.0, 0.02, 0.045, 0.07)),
    ("Aguadulce", loc(2000.0, 0.022, 0.05, 0.075)),
    ("Roquetas de Mar", loc(1750.0, 0.018, 0.04, 0.065)),
];

const GROUPS: [(&str, &[&str]); 7] = [
    ("Centro", &["La Latina", "Lavapiés", "Malasaña"]),
    ("PeriferiaMunicipal", &["San Isidro", "Embajadores", "Barajas"]),
    ("PeriferiaProvincial", &["Segovia", "Guadalajara"]),
    ("SierraMadrid", &["Becerril", "Navacerrada"]),
    ("CostaAndaluza", &["Costa Andaluza"]),
    ("Canarias", &["Lanzarote", "La Palma", "Tenerife", "Gran Canaria"]),
    ("Almeria", &["Centro Almería", "Retamar", "Aguadulce", "Roquetas de Mar"]),
];

/// Named locations and groups of locations
#[derive(Debug, Clone, Default)]
pub struct LocationBook {
    locations: BTreeMap<String, Location>,
    groups: BTreeMap<String, Vec<String>>,
}

impl LocationBook {
    /// Book with every built-in location and group
    pub fn default_locations() -> Self {
        Self {
            locations: LOCATIONS
                .iter()
                .map(|(name, location)| (name.to_string(), *location))
                .collect(),
            groups: GROUPS
                .iter()
                .map(|(name, members)| {
                    (name.to_string(), members.iter().map(|m| m.to_string()).collect())
                })
                .collect(),
        }
    }

    /// Shared built-in book
    pub fn builtin() -> &'static LocationBook {
        static BUILTIN: OnceLock<LocationBook> = OnceLock::new();
        BUILTIN.get_or_init(Self::default_locations)
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    pub fn is_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Locations a name stands for: the group's members, or the location itself
    pub fn members(&self, name: &str) -> Result<Vec<(&str, &Location)>> {
        if let Some(members) = self.groups.get(name) {
            return members
                .iter()
                .map(|member| {
                    self.locations
                        .get_key_value(member)
                        .map(|(k, v)| (k.as_str(), v))
                        .ok_or_else(|| ProjectionError::UnknownLocation(member.clone()))
                })
                .collect();
        }
        self.locations
            .get_key_value(name)
            .map(|(k, v)| vec![(k.as_str(), v)])
            .ok_or_else(|| ProjectionError::UnknownLocation(name.to_string()))
    }

    pub fn location_names(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_book() {
        let book = LocationBook::builtin();
        assert_eq!(book.location_names().count(), 19);
        assert_eq!(book.group_names().count(), 7);
        assert_eq!(book.get("La Latina").unwrap().price, 5100.0);
        assert!(book.is_group("Canarias"));
        assert!(!book.is_group("Tenerife"));
    }

    #[test]
    fn test_every_group_member_is_known() {
        let book = LocationBook::builtin();
        for group in book.group_names() {
            assert!(!book.members(group).unwrap().is_empty(), "{group}");
        }
    }

    #[test]
    fn test_members() {
        let book = LocationBook::builtin();
        let centro: Vec<&str> = book.members("Centro").unwrap().iter().map(|(n, _)| *n).collect();
        assert_eq!(centro.len(), 3);
        assert!(centro.contains(&"Malasaña"));

        let single = book.members("Aguadulce").unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].1.infl_mid, 0.05);
    }

    #[test]
    fn test_unknown_location() {
        let err = LocationBook::builtin().members("Atlantis").unwrap_err();
        assert_eq!(err.to_string(), "unknown location: Atlantis");
    }

    #[test]
    fn test_scenario_inflation() {
        let location = LocationBook::builtin().get("Roquetas de Mar").unwrap();
        assert_eq!(location.inflation(Scenario::Optimistic), 0.018);
        assert_eq!(location.inflation(Scenario::Mid), 0.04);
        assert_eq!(location.inflation(Scenario::Pessimistic), 0.065);
        assert_eq!(Scenario::default(), Scenario::Mid);
    }
}
