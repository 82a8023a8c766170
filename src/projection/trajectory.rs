//! Year-by-year trajectories for price, salary and savings
//!
//! Every trajectory has `years + 1` entries: index 0 is the present value and
//! index `y` the value after `y` elapsed years.

use serde::{Deserialize, Serialize};

use super::curve::YearCurve;
use crate::assumptions::{CareerPath, CareerTable, InflationSchedule, ResolvedPath};
use crate::error::Result;

/// How much of each month's salary goes to savings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum SavingsPlan {
    /// Save a fraction of the monthly salary
    Rate(f64),
    /// Save whatever is left after a fixed monthly expense
    FixedExpense(f64),
    /// Saved fraction varying by year
    RateCurve(YearCurve),
    /// Monthly expense varying by year, the rest is saved
    ExpenseCurve(YearCurve),
}

impl SavingsPlan {
    /// Amount set aside in a month of `year` at the given salary
    pub fn monthly_saving(&self, year: u32, salary: f64) -> f64 {
        match self {
            SavingsPlan::Rate(rate) => salary * rate,
            SavingsPlan::FixedExpense(expense) => (salary - expense).max(0.0),
            SavingsPlan::RateCurve(curve) => salary * curve.value_at(year).unwrap_or(0.0),
            SavingsPlan::ExpenseCurve(curve) => {
                (salary - curve.value_at(year).unwrap_or(0.0)).max(0.0)
            }
        }
    }
}

/// Property price trajectory
pub fn project_price(base: f64, years: u32, infl: f64, floor: f64) -> Vec<f64> {
    project_price_with(base, years, &InflationSchedule::new(infl, floor))
}

/// Property price trajectory for an inflation schedule
pub fn project_price_with(base: f64, years: u32, schedule: &InflationSchedule) -> Vec<f64> {
    let mut values = Vec::with_capacity(years as usize + 1);
    values.push(base);

    let mut price = base;
    for y in 1..=years {
        price *= 1.0 + schedule.rate(y);
        values.push(price);
    }
    values
}

/// Element-wise mean of several price trajectories of equal length
pub fn average_trajectories(trajectories: &[Vec<f64>]) -> Vec<f64> {
    let Some(first) = trajectories.first() else {
        return Vec::new();
    };
    let count = trajectories.len() as f64;
    (0..first.len())
        .map(|idx| trajectories.iter().map(|t| t[idx]).sum::<f64>() / count)
        .collect()
}

/// Monthly salary trajectory for a built-in career
pub fn project_salary(base: f64, years: u32, career: &str) -> Result<Vec<f64>> {
    project_salary_on(CareerTable::builtin(), base, years, &CareerPath::single(career))
}

/// Monthly salary trajectory for a career path in the given table
pub fn project_salary_on(
    careers: &CareerTable,
    base: f64,
    years: u32,
    path: &CareerPath,
) -> Result<Vec<f64>> {
    let resolved = careers.resolve(path)?;

    let mut values = Vec::with_capacity(years as usize + 1);
    values.push(base);
    values.extend(resolved.salaries(base).take(years as usize));
    Ok(values)
}

/// Savings balance trajectory for a built-in career, saving a fixed rate
pub fn project_savings(
    base_salary: f64,
    save_rate: f64,
    years: u32,
    ret_rate: f64,
    career: &str,
    init_savings: f64,
) -> Result<Vec<f64>> {
    project_savings_on(
        CareerTable::builtin(),
        base_salary,
        &SavingsPlan::Rate(save_rate),
        years,
        ret_rate,
        &CareerPath::single(career),
        init_savings,
    )
}

/// Savings balance trajectory for a career path in the given table.
///
/// Each year the salary grows first, then last year's balance earns its
/// return, then twelve months of saving at the new salary are added.
pub fn project_savings_on(
    careers: &CareerTable,
    base_salary: f64,
    plan: &SavingsPlan,
    years: u32,
    ret_rate: f64,
    path: &CareerPath,
    init_savings: f64,
) -> Result<Vec<f64>> {
    let resolved = careers.resolve(path)?;
    Ok(savings_recurrence(&resolved, base_salary, plan, years, ret_rate, init_savings))
}

fn savings_recurrence(
    path: &ResolvedPath<'_>,
    base_salary: f64,
    plan: &SavingsPlan,
    years: u32,
    ret_rate: f64,
    init_savings: f64,
) -> Vec<f64> {
    let mut values = Vec::with_capacity(years as usize + 1);
    values.push(init_savings);

    let mut savings = init_savings;
    for (y, salary) in (1..=years).zip(path.salaries(base_salary)) {
        savings *= 1.0 + ret_rate;
        savings += plan.monthly_saving(y, salary) * 12.0;
        values.push(savings);
    }
    values
}
