//! Salary growth schedules by career path
//!
//! Most careers grow salary multiplicatively with a three-tier table
//! (years 0-4, 5-9, 10+). The "stay" career instead models fixed raises every
//! 18 months up to a salary cap, which produces a stair-step trajectory.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// Career id of the built-in stair-step schedule
pub const STAY_CAREER: &str = "stay";

/// Gross annual raise for the "stay" career
pub const STAY_RAISE: f64 = 2000.0;

/// Months between raises for the "stay" career
pub const STAY_RAISE_EVERY_MONTHS: u32 = 18;

/// Gross annual salary cap for the "stay" career
pub const STAY_CAP: f64 = 30000.0;

/// Annual salary the built-in "stay" rates are quoted against
pub const STAY_REFERENCE_START: f64 = 21000.0;

/// First zero-based year of the mid tier
const MID_TIER_START: u32 = 5;

/// First zero-based year of the late tier
const LATE_TIER_START: u32 = 10;

/// Built-in tiered careers: (id, early, mid, late)
const TIERED_CAREERS: [(&str, f64, f64, f64); 11] = [
    ("odoo", 0.10, 0.05, 0.03),
    ("ai", 0.15, 0.08, 0.04),
    ("ds", 0.12, 0.06, 0.04),
    ("aieng", 0.13, 0.07, 0.05),
    ("llm", 0.14, 0.08, 0.05),
    ("quantum", 0.16, 0.09, 0.06),
    ("bio", 0.11, 0.06, 0.04),
    ("robotics", 0.12, 0.07, 0.05),
    ("ethics", 0.08, 0.05, 0.03),
    ("dataeng", 0.10, 0.06, 0.04),
    ("finance", 0.13, 0.08, 0.05),
];

/// Fixed raises applied on a schedule, capped at a maximum salary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StairStep {
    /// Gross annual raise per step
    pub raise: f64,
    /// Months between steps
    pub every_months: u32,
    /// Maximum gross annual salary
    pub cap: f64,
    /// Annual salary used when no caller salary is available
    pub reference_start: f64,
}

impl StairStep {
    /// The built-in "stay" schedule
    pub fn stay() -> Self {
        Self {
            raise: STAY_RAISE,
            every_months: STAY_RAISE_EVERY_MONTHS,
            cap: STAY_CAP,
            reference_start: STAY_REFERENCE_START,
        }
    }

    /// Annual salary after `year` elapsed years starting from `start_annual`.
    /// From the first year on the salary never exceeds the cap, so a start
    /// above it is brought down to the cap.
    pub fn annual_at(&self, year: u32, start_annual: f64) -> f64 {
        if year == 0 {
            return start_annual;
        }
        let steps = year
            .saturating_mul(12)
            .checked_div(self.every_months)
            .unwrap_or(0);
        (start_annual + f64::from(steps) * self.raise).min(self.cap)
    }

    /// Growth fraction from year `year` to `year + 1`
    pub fn rate(&self, year: u32, start_annual: f64) -> f64 {
        let current = self.annual_at(year, start_annual);
        if current <= 0.0 {
            return 0.0;
        }
        self.annual_at(year.saturating_add(1), start_annual) / current - 1.0
    }
}

/// Growth strategy for one career
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GrowthSchedule {
    /// Multiplicative growth by career stage
    Tiered { early: f64, mid: f64, late: f64 },
    /// Discrete raises with a cap
    StairStep(StairStep),
}

impl GrowthSchedule {
    /// Growth rate for zero-based projection `year`.
    ///
    /// Tiers follow the projection year. Stair steps count `since` years
    /// from the point the schedule took over, at a monthly salary of `anchor_monthly`.
    pub fn rate(&self, year: u32, since: u32, anchor_monthly: f64) -> f64 {
        match self {
            GrowthSchedule::Tiered { early, mid, late } => {
                if year < MID_TIER_START {
                    *early
                } else if year < LATE_TIER_START {
                    *mid
                } else {
                    *late
                }
            }
            GrowthSchedule::StairStep(step) => step.rate(since, anchor_monthly * 12.0),
        }
    }

    /// Growth rate for zero-based `year` without a caller salary
    pub fn reference_rate(&self, year: u32) -> f64 {
        match self {
            GrowthSchedule::StairStep(step) => step.rate(year, step.reference_start),
            tiered => tiered.rate(year, year, 0.0),
        }
    }
}

/// Change of career from a given zero-based year onwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerSwitch {
    pub year: u32,
    pub career: String,
}

/// Career followed over the projection, optionally switching once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPath {
    pub initial: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch: Option<CareerSwitch>,
}

impl CareerPath {
    pub fn single(career: impl Into<String>) -> Self {
        Self {
            initial: career.into(),
            switch: None,
        }
    }

    pub fn with_switch(career: impl Into<String>, year: u32, new_career: impl Into<String>) -> Self {
        Self {
            initial: career.into(),
            switch: Some(CareerSwitch {
                year,
                career: new_career.into(),
            }),
        }
    }
}

/// Career path whose ids have been looked up in a table
#[derive(Debug, Clone, Copy)]
pub struct ResolvedPath<'a> {
    initial: &'a GrowthSchedule,
    switch: Option<(u32, &'a GrowthSchedule)>,
}

impl<'a> ResolvedPath<'a> {
    /// Monthly salaries after 1, 2, 3... years, starting from `base_monthly`
    pub fn salaries(&self, base_monthly: f64) -> SalaryPath<'a> {
        SalaryPath {
            path: *self,
            year: 0,
            salary: base_monthly,
            anchor: base_monthly,
            since: 0,
        }
    }
}

/// Salary recurrence along a resolved career path.
///
/// A switch re-anchors the new schedule on the salary reached at the switch
/// year, so stair-step raises and caps apply to the salary actually earned.
#[derive(Debug, Clone)]
pub struct SalaryPath<'a> {
    path: ResolvedPath<'a>,
    /// Zero-based year whose growth is applied next
    year: u32,
    salary: f64,
    anchor: f64,
    since: u32,
}

impl Iterator for SalaryPath<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let year = self.year;
        let schedule = match self.path.switch {
            Some((from, schedule)) if year >= from => {
                if year == from {
                    self.anchor = self.salary;
                    self.since = from;
                }
                schedule
            }
            _ => self.path.initial,
        };
        self.salary *= 1.0 + schedule.rate(year, year - self.since, self.anchor);
        self.year = year.saturating_add(1);
        Some(self.salary)
    }
}

/// Lookup table from career id to growth schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerTable {
    careers: BTreeMap<String, GrowthSchedule>,
}

impl CareerTable {
    /// Table with the built-in careers
    pub fn default_careers() -> Self {
        let mut careers = BTreeMap::new();
        careers.insert(
            STAY_CAREER.to_string(),
            GrowthSchedule::StairStep(StairStep::stay()),
        );
        for (id, early, mid, late) in TIERED_CAREERS {
            careers.insert(id.to_string(), GrowthSchedule::Tiered { early, mid, late });
        }
        Self { careers }
    }

    /// Shared read-only instance of the built-in table
    pub fn builtin() -> &'static CareerTable {
        static BUILTIN: OnceLock<CareerTable> = OnceLock::new();
        BUILTIN.get_or_init(Self::default_careers)
    }

    /// Look up a career schedule
    pub fn get(&self, career: &str) -> Result<&GrowthSchedule> {
        self.careers
            .get(career)
            .ok_or_else(|| ProjectionError::UnknownCareer(career.to_string()))
    }

    pub fn contains(&self, career: &str) -> bool {
        self.careers.contains_key(career)
    }

    /// Add or replace a career
    pub fn insert(&mut self, career: impl Into<String>, schedule: GrowthSchedule) {
        self.careers.insert(career.into(), schedule);
    }

    /// Merge another table into this one, overriding shared ids
    pub fn extend(&mut self, other: CareerTable) {
        self.careers.extend(other.careers);
    }

    /// Career ids in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.careers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    /// Reference growth rate for a career and zero-based year
    pub fn growth_for(&self, year: u32, career: &str) -> Result<f64> {
        Ok(self.get(career)?.reference_rate(year))
    }

    /// Resolve every career id on a path
    pub fn resolve(&self, path: &CareerPath) -> Result<ResolvedPath<'_>> {
        let initial = self.get(&path.initial)?;
        let switch = match &path.switch {
            Some(switch) => Some((switch.year, self.get(&switch.career)?)),
            None => None,
        };
        Ok(ResolvedPath { initial, switch })
    }
}

/// Growth rate for a built-in career and zero-based year
pub fn growth_for(year: u32, career: &str) -> Result<f64> {
    CareerTable::builtin().growth_for(year, career)
}
