//! Scenario inputs: the parameter record and salary normalization

mod data;
mod salary;

pub use data::{LocationChoice, ProjectionInput};
pub use salary::{net_monthly, SalaryType};
