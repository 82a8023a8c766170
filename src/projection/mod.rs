//! Projection engine for price, salary and savings trajectories

mod curve;
mod engine;
mod mortgage;
mod rows;
mod trajectory;

pub use curve::{CurveNode, YearCurve};
pub use engine::{ProjectionConfig, ProjectionEngine};
pub use mortgage::{mortgage_payment, MortgageTerms};
pub use rows::{ProjectionResult, ProjectionSummary, YearRow};
pub use trajectory::{
    average_trajectories, project_price, project_price_with, project_salary, project_salary_on, project_savings,
    project_savings_on, SavingsPlan,
};
