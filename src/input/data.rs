//! Projection input record

use serde::{Deserialize, Serialize};

use super::salary::{net_monthly, SalaryType};
use crate::assumptions::{
    Assumptions, CareerPath, CareerSwitch, DwellingFeatures, InflationSchedule, Scenario,
};
use crate::error::{ProjectionError, Result};
use crate::projection::{SavingsPlan, YearCurve};

/// Built-in location (or group) priced under an inflation scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationChoice {
    pub name: String,
    #[serde(default)]
    pub scenario: Scenario,
}

/// Parameters for one housing projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Price per area unit
    pub price: f64,
    /// Area multiplier
    pub size: f64,
    /// Projection horizon in years
    pub years: u32,
    /// Base yearly price inflation
    pub inflation: f64,
    /// Minimum yearly inflation after decay
    pub floor: f64,
    /// Salary figure, see `salary_type`
    pub salary: f64,
    pub salary_type: SalaryType,
    /// Pay periods per year (gross only)
    pub pays: u32,
    /// Withholding fraction (gross only)
    pub irpf: f64,
    /// Fraction of monthly salary saved
    pub save_rate: f64,
    /// Annual return on accumulated savings
    pub ret_rate: f64,
    pub career: String,
    pub init_savings: f64,

    /// Optional change of career part-way through the horizon
    #[serde(default)]
    pub career_switch: Option<CareerSwitch>,
    /// Fixed monthly expense; when set, replaces `save_rate`
    #[serde(default)]
    pub monthly_expense: Option<f64>,
    /// Saved fraction by year; replaces `save_rate`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_curve: Option<YearCurve>,
    /// Monthly expense by year; replaces every other savings setting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_curve: Option<YearCurve>,
    #[serde(default)]
    pub dwelling: DwellingFeatures,
    /// Price from a built-in location instead of `price`, `inflation`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationChoice>,
}

impl ProjectionInput {
    /// Input with the command-line defaults for everything but the price
    pub fn new(price: f64) -> Self {
        Self {
            price,
            size: 1.0,
            years: 10,
            inflation: 0.05,
            floor: 0.02,
            salary: 1500.0,
            salary_type: SalaryType::Net,
            pays: 12,
            irpf: 0.0,
            save_rate: 0.1,
            ret_rate: 0.03,
            career: "stay".to_string(),
            init_savings: 0.0,
            career_switch: None,
            monthly_expense: None,
            save_curve: None,
            expense_curve: None,
            dwelling: DwellingFeatures::default(),
            location: None,
        }
    }

    /// Property price at year zero
    pub fn base_price(&self) -> f64 {
        self.price * self.dwelling.price_factor() * self.size
    }

    /// Net monthly salary at year zero
    pub fn monthly_net_salary(&self) -> f64 {
        match self.salary_type {
            SalaryType::Net => self.salary,
            SalaryType::Gross => net_monthly(self.salary, self.pays, self.irpf),
        }
    }

    pub fn inflation_schedule(&self) -> InflationSchedule {
        InflationSchedule::new(self.inflation, self.floor)
    }

    pub fn career_path(&self) -> CareerPath {
        CareerPath {
            initial: self.career.clone(),
            switch: self.career_switch.clone(),
        }
    }

    /// Savings rule: an expense curve, a fixed expense, a rate curve or the
    /// flat rate, in that order of precedence
    pub fn savings_plan(&self) -> SavingsPlan {
        if let Some(curve) = &self.expense_curve {
            return SavingsPlan::ExpenseCurve(curve.clone());
        }
        if let Some(expense) = self.monthly_expense {
            return SavingsPlan::FixedExpense(expense);
        }
        match &self.save_curve {
            Some(curve) => SavingsPlan::RateCurve(curve.clone()),
            None => SavingsPlan::Rate(self.save_rate),
        }
    }

    /// Check the input against its valid domain
    pub fn validate(&self, assumptions: &Assumptions) -> Result<()> {
        match &self.location {
            Some(choice) => {
                assumptions.locations.members(&choice.name)?;
            }
            None if !(self.price > 0.0) => {
                return Err(invalid(format!("price must be positive, got {}", self.price)));
            }
            None => {}
        }
        if !(self.size > 0.0) {
            return Err(invalid(format!("size must be positive, got {}", self.size)));
        }
        if self.salary_type == SalaryType::Gross {
            if self.pays == 0 {
                return Err(invalid("pays must be at least 1".to_string()));
            }
            if !(0.0..1.0).contains(&self.irpf) {
                return Err(invalid(format!(
                    "irpf must be in [0, 100) percent, got {}",
                    self.irpf * 100.0
                )));
            }
        }
        if let Some(expense) = self.monthly_expense {
            if expense < 0.0 {
                return Err(invalid(format!("monthly expense must not be negative, got {}", expense)));
            }
        }
        if self.monthly_expense.is_some() && self.expense_curve.is_some() {
            return Err(invalid(
                "monthly expense and expense curve are mutually exclusive".to_string(),
            ));
        }
        if let Some(curve) = &self.save_curve {
            check_curve("savings curve", curve, 0.0, 1.0)?;
        }
        if let Some(curve) = &self.expense_curve {
            check_curve("expense curve", curve, 0.0, f64::INFINITY)?;
        }
        assumptions.careers.resolve(&self.career_path())?;

        if self.floor > self.inflation {
            log::warn!(
                "inflation floor {} is above base inflation {}; years from {} on use the floor",
                self.floor,
                self.inflation,
                crate::assumptions::DECAY_START_YEAR
            );
        }
        Ok(())
    }
}

fn invalid(message: String) -> ProjectionError {
    ProjectionError::InvalidInput(message)
}

fn check_curve(what: &str, curve: &YearCurve, min: f64, max: f64) -> Result<()> {
    match curve.bounds() {
        None => Err(invalid(format!("{what} needs at least one node"))),
        Some((lo, hi)) if lo < min || hi > max => Err(invalid(format!(
            "{what} values must be in [{min}, {max}], got [{lo}, {hi}]"
        ))),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{DwellingType, Extra};
    use crate::projection::CurveNode;
    use approx::assert_relative_eq;

    fn curve(nodes: &[(u32, f64)]) -> YearCurve {
        YearCurve::from_nodes(nodes.iter().map(|&(year, value)| CurveNode { year, value }))
    }

    #[test]
    fn test_defaults_validate() {
        let input = ProjectionInput::new(3000.0);
        assert!(input.validate(&Assumptions::default()).is_ok());
        assert_eq!(input.base_price(), 3000.0);
        assert_eq!(input.monthly_net_salary(), 1500.0);
        assert_eq!(input.savings_plan(), SavingsPlan::Rate(0.1));
    }

    #[test]
    fn test_gross_salary_conversion() {
        let input = ProjectionInput {
            salary: 28000.0,
            salary_type: SalaryType::Gross,
            pays: 14,
            irpf: 0.12,
            ..ProjectionInput::new(3000.0)
        };
        assert_relative_eq!(input.monthly_net_salary(), 2000.0 * 0.88);
    }

    #[test]
    fn test_net_ignores_pays_and_irpf() {
        let input = ProjectionInput {
            pays: 0,
            irpf: 2.0,
            ..ProjectionInput::new(3000.0)
        };
        assert!(input.validate(&Assumptions::default()).is_ok());
        assert_eq!(input.monthly_net_salary(), 1500.0);
    }

    #[test]
    fn test_base_price_with_dwelling() {
        let input = ProjectionInput {
            size: 80.0,
            dwelling: DwellingFeatures {
                dwelling_type: DwellingType::Atico,
                rooms: 3,
                extras: vec![Extra::Terrace],
            },
            ..ProjectionInput::new(4000.0)
        };
        assert_relative_eq!(input.base_price(), 4000.0 * 1.15 * 1.05 * 80.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rejects_bad_domain() {
        let assumptions = Assumptions::default();
        let cases = [
            ProjectionInput::new(0.0),
            ProjectionInput { size: -1.0, ..ProjectionInput::new(1000.0) },
            ProjectionInput {
                salary_type: SalaryType::Gross,
                pays: 0,
                ..ProjectionInput::new(1000.0)
            },
            ProjectionInput {
                salary_type: SalaryType::Gross,
                irpf: 1.0,
                ..ProjectionInput::new(1000.0)
            },
            ProjectionInput { monthly_expense: Some(-5.0), ..ProjectionInput::new(1000.0) },
            ProjectionInput { price: f64::NAN, ..ProjectionInput::new(1000.0) },
            ProjectionInput {
                save_curve: Some(curve(&[(0, 0.1), (5, 1.5)])),
                ..ProjectionInput::new(1000.0)
            },
            ProjectionInput {
                save_curve: Some(YearCurve::default()),
                ..ProjectionInput::new(1000.0)
            },
            ProjectionInput {
                expense_curve: Some(curve(&[(2, -10.0)])),
                ..ProjectionInput::new(1000.0)
            },
            ProjectionInput {
                monthly_expense: Some(800.0),
                expense_curve: Some(curve(&[(0, 900.0)])),
                ..ProjectionInput::new(1000.0)
            },
        ];
        for input in cases {
            assert!(
                matches!(input.validate(&assumptions), Err(ProjectionError::InvalidInput(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_rejects_unknown_career() {
        let input = ProjectionInput {
            career: "astronaut".to_string(),
            ..ProjectionInput::new(1000.0)
        };
        assert!(matches!(
            input.validate(&Assumptions::default()),
            Err(ProjectionError::UnknownCareer(_))
        ));
    }

    #[test]
    fn test_expense_plan() {
        let input = ProjectionInput {
            monthly_expense: Some(900.0),
            ..ProjectionInput::new(1000.0)
        };
        assert_eq!(input.savings_plan(), SavingsPlan::FixedExpense(900.0));
    }

    #[test]
    fn test_curve_plans_take_precedence() {
        let rate_curve = curve(&[(0, 0.1), (10, 0.3)]);
        let input = ProjectionInput {
            save_curve: Some(rate_curve.clone()),
            ..ProjectionInput::new(1000.0)
        };
        assert!(input.validate(&Assumptions::default()).is_ok());
        assert_eq!(input.savings_plan(), SavingsPlan::RateCurve(rate_curve));

        let expenses = curve(&[(0, 900.0), (4, 1100.0)]);
        let input = ProjectionInput {
            save_curve: input.save_curve,
            expense_curve: Some(expenses.clone()),
            ..ProjectionInput::new(1000.0)
        };
        assert!(input.validate(&Assumptions::default()).is_ok());
        assert_eq!(input.savings_plan(), SavingsPlan::ExpenseCurve(expenses));
    }

    #[test]
    fn test_location_replaces_price_check() {
        let input = ProjectionInput {
            location: Some(LocationChoice {
                name: "Canarias".to_string(),
                scenario: Scenario::Pessimistic,
            }),
            ..ProjectionInput::new(0.0)
        };
        assert!(input.validate(&Assumptions::default()).is_ok());

        let input = ProjectionInput {
            location: Some(LocationChoice {
                name: "Atlantis".to_string(),
                scenario: Scenario::Mid,
            }),
            ..ProjectionInput::new(1000.0)
        };
        assert!(matches!(
            input.validate(&Assumptions::default()),
            Err(ProjectionError::UnknownLocation(_))
        ));
    }
}
