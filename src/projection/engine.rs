//! Projection engine: runs the price, salary and savings projectors over one
//! input and zips them into yearly rows

use chrono::Datelike;

use super::mortgage::MortgageTerms;
use super::rows::{ProjectionResult, YearRow};
use super::trajectory::{
    average_trajectories, project_price_with, project_salary_on, project_savings_on,
};
use crate::assumptions::{Assumptions, InflationSchedule};
use crate::error::Result;
use crate::input::{LocationChoice, ProjectionInput};

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Loan terms for the affordability columns
    pub mortgage: MortgageTerms,

    /// Calendar year of year zero
    pub start_year: i32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            mortgage: MortgageTerms::default(),
            start_year: chrono::Local::now().year(),
        }
    }
}

/// Main projection engine
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run projection for a single input.
    ///
    /// The input is validated first; nothing is produced when it is rejected.
    pub fn project(&self, input: &ProjectionInput) -> Result<ProjectionResult> {
        input.validate(&self.assumptions)?;
        let careers = &self.assumptions.careers;

        let base_salary = input.monthly_net_salary();
        let path = input.career_path();
        let plan = input.savings_plan();
        log::debug!(
            "projecting {} years: net salary {:.2}, career {:?}, savings {:?}",
            input.years,
            base_salary,
            path,
            plan
        );

        let prices = match &input.location {
            Some(choice) => self.location_prices(input, choice)?,
            None => project_price_with(input.base_price(), input.years, &input.inflation_schedule()),
        };
        let salaries = project_salary_on(careers, base_salary, input.years, &path)?;
        let savings = project_savings_on(
            careers,
            base_salary,
            &plan,
            input.years,
            input.ret_rate,
            &path,
            input.init_savings,
        )?;

        let mut result = ProjectionResult::new(&input.career);
        for (year, ((price, salary), balance)) in prices
            .into_iter()
            .zip(salaries)
            .zip(savings)
            .enumerate()
        {
            let year = year as u32;
            result.add_row(YearRow {
                year,
                calendar_year: self.config.start_year.saturating_add_unsigned(year),
                price,
                savings: balance,
                monthly_saving: plan.monthly_saving(year, salary),
                salary,
                down_payment: self.config.mortgage.down_payment(price),
                mortgage_payment: self.config.mortgage.monthly_payment(price),
            });
        }

        Ok(result)
    }

    /// Mean price trajectory over the locations a choice stands for
    fn location_prices(&self, input: &ProjectionInput, choice: &LocationChoice) -> Result<Vec<f64>> {
        let members = self.assumptions.locations.members(&choice.name)?;
        let factor = input.dwelling.price_factor() * input.size;
        let trajectories: Vec<Vec<f64>> = members
            .iter()
            .map(|(name, location)| {
                let inflation = location.inflation(choice.scenario);
                log::debug!("{}: {:.0}/m2 at {:.3} inflation", name, location.price, inflation);
                project_price_with(
                    location.price * factor,
                    input.years,
                    &InflationSchedule::new(inflation, input.floor),
                )
            })
            .collect();
        Ok(average_trajectories(&trajectories))
    }
}
