//! Rendering of projection results as a CSV table or a JSON document

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::input::ProjectionInput;
use crate::projection::{MortgageTerms, ProjectionResult, ProjectionSummary, YearRow};

/// Column header of the yearly table
pub const TABLE_HEADER: [&str; 5] = ["Year", "Price", "Savings", "MonthlySaving", "Salary"];

/// Output format selectable from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Write the yearly table, every amount with two decimals
pub fn write_table<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(TABLE_HEADER)?;
    for row in &result.rows {
        csv_writer.write_record([
            row.year.to_string(),
            format!("{:.2}", row.price),
            format!("{:.2}", row.savings),
            format!("{:.2}", row.monthly_saving),
            format!("{:.2}", row.salary),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a ProjectionInput,
    mortgage: &'a MortgageTerms,
    summary: ProjectionSummary,
    rows: &'a [YearRow],
}

/// Write the full result, input and summary as pretty JSON
pub fn write_json<W: Write>(
    mut writer: W,
    input: &ProjectionInput,
    mortgage: &MortgageTerms,
    result: &ProjectionResult,
) -> Result<()> {
    let report = JsonReport {
        input,
        mortgage,
        summary: result.summary(),
        rows: &result.rows,
    };
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writeln!(writer)?;
    Ok(())
}

/// Human-readable summary lines
pub fn write_summary<W: Write>(mut writer: W, summary: &ProjectionSummary) -> Result<()> {
    writeln!(writer, "Summary ({} years):", summary.years)?;
    writeln!(writer, "  Final price:        {:.2}", summary.final_price)?;
    writeln!(writer, "  Final net salary:   {:.2}/month", summary.final_salary)?;
    writeln!(writer, "  Final savings:      {:.2}", summary.final_savings)?;
    writeln!(writer, "  Mortgage payment:   {:.2}/month", summary.final_mortgage_payment)?;
    writeln!(writer, "  Years of salary:    {:.2}", summary.years_of_salary)?;
    match summary.down_payment_year {
        Some(year) => writeln!(writer, "  Down payment saved: year {}", year)?,
        None => writeln!(writer, "  Down payment saved: not within horizon")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::Assumptions;
    use crate::projection::{ProjectionConfig, ProjectionEngine};

    fn sample() -> (ProjectionInput, ProjectionResult) {
        let input = ProjectionInput {
            years: 2,
            salary: 1000.0,
            career: "odoo".to_string(),
            ret_rate: 0.0,
            ..ProjectionInput::new(1000.0)
        };
        let config = ProjectionConfig {
            start_year: 2024,
            ..ProjectionConfig::default()
        };
        let result = ProjectionEngine::new(Assumptions::default(), config)
            .project(&input)
            .unwrap();
        (input, result)
    }

    #[test]
    fn test_table_format() {
        let (_, result) = sample();
        let mut buf = Vec::new();
        write_table(&mut buf, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Year,Price,Savings,MonthlySaving,Salary\n\
             0,1000.00,0.00,100.00,1000.00\n\
             1,1050.00,1320.00,110.00,1100.00\n\
             2,1102.50,2772.00,121.00,1210.00\n"
        );
    }

    #[test]
    fn test_json_report() {
        let (input, result) = sample();
        let mut buf = Vec::new();
        write_json(&mut buf, &input, &MortgageTerms::default(), &result).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["rows"].as_array().unwrap().len(), 3);
        assert_eq!(value["rows"][1]["calendar_year"], 2025);
        assert_eq!(value["input"]["career"], "odoo");
        assert_eq!(value["summary"]["years"], 2);
    }

    #[test]
    fn test_summary_text() {
        let (_, result) = sample();
        let mut buf = Vec::new();
        write_summary(&mut buf, &result.summary()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Summary (2 years):"));
        assert!(text.contains("Final price:        1102.50"));
    }
}
