//! Scenario runner for comparing one input across several careers
//!
//! Loads assumptions once, then runs many projections that differ only in
//! the career they follow.

use crate::assumptions::Assumptions;
use crate::error::Result;
use crate::input::ProjectionInput;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Pre-loaded runner for batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ProjectionConfig::default());
/// for result in runner.run_all_careers(&input)? {
///     println!("{}: {:.2}", result.career, result.summary().final_savings);
/// }
/// ```
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the built-in careers
    pub fn new(config: ProjectionConfig) -> Self {
        Self::with_assumptions(Assumptions::default_careers(), config)
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(assumptions, config),
        }
    }

    /// Run a single projection
    pub fn run(&self, input: &ProjectionInput) -> Result<ProjectionResult> {
        self.engine.project(input)
    }

    /// Run the input once per listed career; fails on the first rejected career
    pub fn run_careers(&self, input: &ProjectionInput, careers: &[&str]) -> Result<Vec<ProjectionResult>> {
        careers
            .iter()
            .map(|career| {
                let scenario = ProjectionInput {
                    career: career.to_string(),
                    ..input.clone()
                };
                self.engine.project(&scenario)
            })
            .collect()
    }

    /// Run the input once for every known career, in id order
    pub fn run_all_careers(&self, input: &ProjectionInput) -> Result<Vec<ProjectionResult>> {
        let careers: Vec<&str> = self.engine.assumptions().careers.ids().collect();
        self.run_careers(input, &careers)
    }

    pub fn assumptions(&self) -> &Assumptions {
        self.engine.assumptions()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(ProjectionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;

    fn test_input() -> ProjectionInput {
        ProjectionInput {
            years: 15,
            salary: 1800.0,
            ..ProjectionInput::new(3500.0)
        }
    }

    #[test]
    fn test_run_all_careers() {
        let runner = ScenarioRunner::default();
        let results = runner.run_all_careers(&test_input()).unwrap();
        assert_eq!(results.len(), runner.assumptions().careers.len());
        assert!(results.iter().all(|r| r.rows.len() == 16));

        // Faster growth ends with more savings
        let savings_for = |career: &str| {
            results
                .iter()
                .find(|r| r.career == career)
                .map(|r| r.summary().final_savings)
                .unwrap()
        };
        assert!(savings_for("quantum") > savings_for("ethics"));
        assert!(savings_for("ai") > savings_for("odoo"));
    }

    #[test]
    fn test_prices_shared_across_careers() {
        let runner = ScenarioRunner::default();
        let results = runner.run_careers(&test_input(), &["ai", "stay"]).unwrap();
        assert_eq!(results[0].summary().final_price, results[1].summary().final_price);
    }

    #[test]
    fn test_unknown_career_in_batch() {
        let runner = ScenarioRunner::default();
        assert!(matches!(
            runner.run_careers(&test_input(), &["ai", "pilot"]),
            Err(ProjectionError::UnknownCareer(_))
        ));
    }
}
