//! Net/gross salary handling

use serde::{Deserialize, Serialize};

/// How the salary figure of a projection input is expressed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SalaryType {
    /// Monthly net salary
    #[default]
    Net,
    /// Annual gross salary, paid in `pays` installments with `irpf` withheld
    Gross,
}

/// Net monthly salary from a gross annual figure and a flat withholding rate
pub fn net_monthly(gross_annual: f64, pays: u32, irpf: f64) -> f64 {
    gross_annual / f64::from(pays) * (1.0 - irpf)
}
