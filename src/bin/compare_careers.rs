//! Compare every known career on the same housing scenario
//!
//! Usage: cargo run --bin compare_careers -- --price 3500 --size 70 --salary 1800

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use housing_projection::{Assumptions, ProjectionConfig, ProjectionInput, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(name = "compare_careers", about = "Final-year outcome of each career path")]
struct Args {
    /// Price per m2
    #[arg(long)]
    price: f64,

    /// Property size
    #[arg(long, default_value_t = 1.0)]
    size: f64,

    /// Projection years
    #[arg(long, default_value_t = 10)]
    years: u32,

    /// Base inflation rate
    #[arg(long, default_value_t = 0.05, env = "HOUSING_INFLATION")]
    inflation: f64,

    /// Inflation floor
    #[arg(long, default_value_t = 0.02, env = "HOUSING_FLOOR")]
    floor: f64,

    /// Monthly net salary
    #[arg(long, default_value_t = 1500.0)]
    salary: f64,

    /// Savings rate
    #[arg(long, default_value_t = 0.1)]
    save_rate: f64,

    /// Annual return on savings
    #[arg(long, default_value_t = 0.03, env = "HOUSING_RETURN_RATE")]
    return_rate: f64,

    /// Initial savings
    #[arg(long, default_value_t = 0.0)]
    init_savings: f64,

    /// Extra careers CSV
    #[arg(long, env = "HOUSING_CAREERS")]
    careers: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let assumptions = match &args.careers {
        Some(path) => Assumptions::with_career_file(path)
            .with_context(|| format!("loading careers from {}", path.display()))?,
        None => Assumptions::default_careers(),
    };
    let runner = ScenarioRunner::with_assumptions(assumptions, ProjectionConfig::default());

    let input = ProjectionInput {
        size: args.size,
        years: args.years,
        inflation: args.inflation,
        floor: args.floor,
        salary: args.salary,
        save_rate: args.save_rate,
        ret_rate: args.return_rate,
        init_savings: args.init_savings,
        ..ProjectionInput::new(args.price)
    };

    let results = runner.run_all_careers(&input).context("running career comparison")?;
    log::info!("compared {} careers", results.len());

    let mut writer = csv::Writer::from_writer(io::stdout().lock());
    writer.write_record(["Career", "FinalSalary", "FinalSavings", "FinalPrice", "DownPaymentYear"])?;
    for result in &results {
        let summary = result.summary();
        writer.write_record([
            result.career.clone(),
            format!("{:.2}", summary.final_salary),
            format!("{:.2}", summary.final_savings),
            format!("{:.2}", summary.final_price),
            summary
                .down_payment_year
                .map(|year| year.to_string())
                .unwrap_or_default(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}
