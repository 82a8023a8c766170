//! Housing Projection - multi-year affordability projections
//!
//! This library provides:
//! - Property price projection with decaying inflation and a floor, for a
//!   given price or a built-in location under an inflation scenario
//! - Net salary projection under tiered or stair-step career paths
//! - Savings projection with yearly returns and monthly contributions, flat
//!   or following a year curve
//! - Mortgage payment and down payment affordability metrics
//! - Multi-career scenario comparison

pub mod assumptions;
pub mod error;
pub mod input;
pub mod output;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{
    growth_for, inflation_for, Assumptions, CareerPath, CareerTable, LocationBook, Scenario,
};
pub use error::ProjectionError;
pub use input::{net_monthly, ProjectionInput, SalaryType};
pub use projection::{
    mortgage_payment, project_price, project_salary, project_savings, ProjectionConfig,
    ProjectionEngine, ProjectionResult,
};
pub use scenario::ScenarioRunner;
