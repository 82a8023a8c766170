//! Output structures for projections

use serde::{Deserialize, Serialize};

/// One year of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    /// Elapsed years (0 = today)
    pub year: u32,
    pub calendar_year: i32,

    pub price: f64,
    pub savings: f64,
    /// Amount set aside per month at this year's salary
    pub monthly_saving: f64,
    /// Net monthly salary
    pub salary: f64,

    // Affordability
    pub down_payment: f64,
    pub mortgage_payment: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Career the scenario started on
    pub career: String,

    /// Rows for years `0..=years`
    pub rows: Vec<YearRow>,
}

impl ProjectionResult {
    pub fn new(career: impl Into<String>) -> Self {
        Self {
            career: career.into(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: YearRow) {
        self.rows.push(row);
    }

    /// First year in which savings cover the down payment
    pub fn down_payment_year(&self) -> Option<u32> {
        self.rows
            .iter()
            .find(|r| r.savings >= r.down_payment)
            .map(|r| r.year)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.rows.last();
        let final_price = last.map(|r| r.price).unwrap_or(0.0);
        let final_salary = last.map(|r| r.salary).unwrap_or(0.0);
        let annual_salary = final_salary * 12.0;
        let years_of_salary = if annual_salary > 0.0 {
            final_price / annual_salary
        } else {
            f64::INFINITY
        };

        ProjectionSummary {
            years: self.rows.len().saturating_sub(1) as u32,
            final_price,
            final_salary,
            final_savings: last.map(|r| r.savings).unwrap_or(0.0),
            final_mortgage_payment: last.map(|r| r.mortgage_payment).unwrap_or(0.0),
            years_of_salary,
            down_payment_year: self.down_payment_year(),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub final_price: f64,
    pub final_salary: f64,
    pub final_savings: f64,
    pub final_mortgage_payment: f64,
    /// Years of net salary needed to pay the final price outright
    pub years_of_salary: f64,
    pub down_payment_year: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: u32, savings: f64, down_payment: f64) -> YearRow {
        YearRow {
            year,
            calendar_year: 2030 + year as i32,
            price: 100000.0 + f64::from(year) * 1000.0,
            savings,
            monthly_saving: 200.0,
            salary: 2000.0,
            down_payment,
            mortgage_payment: 400.0,
        }
    }

    #[test]
    fn test_summary() {
        let mut result = ProjectionResult::new("odoo");
        result.add_row(row(0, 1000.0, 20000.0));
        result.add_row(row(1, 15000.0, 20200.0));
        result.add_row(row(2, 30000.0, 20400.0));

        let summary = result.summary();
        assert_eq!(summary.years, 2);
        assert_eq!(summary.final_price, 102000.0);
        assert_eq!(summary.final_savings, 30000.0);
        assert_eq!(summary.years_of_salary, 102000.0 / 24000.0);
        assert_eq!(summary.down_payment_year, Some(2));
    }

    #[test]
    fn test_down_payment_never_reached() {
        let mut result = ProjectionResult::new("stay");
        result.add_row(row(0, 0.0, 20000.0));
        result.add_row(row(1, 100.0, 20000.0));
        assert_eq!(result.down_payment_year(), None);
    }

    #[test]
    fn test_empty_summary() {
        let summary = ProjectionResult::new("ai").summary();
        assert_eq!(summary.years, 0);
        assert_eq!(summary.final_price, 0.0);
        assert!(summary.years_of_salary.is_infinite());
    }
}
