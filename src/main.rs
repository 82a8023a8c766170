//! Housing projection CLI
//!
//! Prints a year-by-year table of property price, savings, monthly saving and
//! net salary for one scenario.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use housing_projection::assumptions::{
    CareerSwitch, DwellingFeatures, DwellingType, Extra, Scenario,
};
use housing_projection::input::LocationChoice;
use housing_projection::output::{write_json, write_summary, write_table, OutputFormat};
use housing_projection::projection::{CurveNode, MortgageTerms, YearCurve};
use housing_projection::{
    Assumptions, ProjectionConfig, ProjectionEngine, ProjectionError, ProjectionInput, SalaryType,
};

#[derive(Parser, Debug)]
#[command(name = "housing", version, about = "Housing projection CLI")]
struct Cli {
    /// Price per m2
    #[arg(long, required_unless_present = "location")]
    price: Option<f64>,

    /// Built-in location or group of locations; replaces --price and --inflation
    #[arg(long)]
    location: Option<String>,

    /// Inflation scenario for --location
    #[arg(long, value_enum, default_value_t = Scenario::Mid)]
    scenario: Scenario,

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

    /// Monthly net salary, or annual gross salary with --salary-type gross
    #[arg(long, default_value_t = 1500.0)]
    salary: f64,

    /// How --salary is expressed
    #[arg(long, value_enum, default_value_t = SalaryType::Net)]
    salary_type: SalaryType,

    /// Pay periods per year (gross salary only)
    #[arg(long, default_value_t = 12)]
    pays: u32,

    /// Withholding percentage (gross salary only)
    #[arg(long, default_value_t = 0.0)]
    irpf: f64,

    /// Savings rate
    #[arg(long, default_value_t = 0.1)]
    save_rate: f64,

    /// Savings rate curve node, interpolated between years (repeatable)
    #[arg(long = "save-node", value_name = "YEAR:RATE")]
    save_nodes: Vec<CurveNode>,

    /// Annual return on savings
    #[arg(long, default_value_t = 0.03, env = "HOUSING_RETURN_RATE")]
    return_rate: f64,

    /// Career path
    #[arg(long, default_value = "stay")]
    career: String,

    /// Initial savings
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    init_savings: f64,

    /// Career to switch to at --change-year
    #[arg(long, requires = "change_year")]
    new_career: Option<String>,

    /// Zero-based year from which --new-career applies
    #[arg(long, requires = "new_career")]
    change_year: Option<u32>,

    /// Fixed monthly expense; savings become whatever is left of the salary
    #[arg(long)]
    monthly_expense: Option<f64>,

    /// Monthly expense curve node, interpolated between years (repeatable)
    #[arg(long = "expense-node", value_name = "YEAR:AMOUNT", conflicts_with = "monthly_expense")]
    expense_nodes: Vec<CurveNode>,

    /// Dwelling type
    #[arg(long, value_enum, default_value_t = DwellingType::Piso)]
    dwelling: DwellingType,

    /// Number of rooms
    #[arg(long, default_value_t = 3)]
    rooms: u32,

    /// Dwelling extras (repeatable)
    #[arg(long = "extra", value_enum)]
    extras: Vec<Extra>,

    /// Down payment percentage
    #[arg(long, default_value_t = 20.0)]
    down_pct: f64,

    /// Mortgage interest rate in percent
    #[arg(long, default_value_t = 3.0)]
    mortgage_rate: f64,

    /// Mortgage term in years
    #[arg(long, default_value_t = 30)]
    mortgage_years: i32,

    /// Calendar year of year zero (defaults to the current year)
    #[arg(long)]
    start_year: Option<i32>,

    /// Extra careers CSV (career,early,mid,late,raise,every_months,cap,reference_start)
    #[arg(long, env = "HOUSING_CAREERS")]
    careers: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print an affordability summary to stderr
    #[arg(long)]
    summary: bool,
}

impl Cli {
    fn to_input(&self) -> ProjectionInput {
        let career_switch = match (&self.new_career, self.change_year) {
            (Some(career), Some(year)) => Some(CareerSwitch {
                year,
                career: career.clone(),
            }),
            _ => None,
        };

        ProjectionInput {
            price: self.price.unwrap_or_default(),
            size: self.size,
            years: self.years,
            inflation: self.inflation,
            floor: self.floor,
            salary: self.salary,
            salary_type: self.salary_type,
            pays: self.pays,
            irpf: self.irpf / 100.0,
            save_rate: self.save_rate,
            ret_rate: self.return_rate,
            career: self.career.clone(),
            init_savings: self.init_savings,
            career_switch,
            monthly_expense: self.monthly_expense,
            save_curve: curve_from(&self.save_nodes),
            expense_curve: curve_from(&self.expense_nodes),
            dwelling: DwellingFeatures {
                dwelling_type: self.dwelling,
                rooms: self.rooms,
                extras: self.extras.clone(),
            },
            location: self.location.as_ref().map(|name| LocationChoice {
                name: name.clone(),
                scenario: self.scenario,
            }),
        }
    }

    fn to_config(&self) -> ProjectionConfig {
        let defaults = ProjectionConfig::default();
        ProjectionConfig {
            mortgage: MortgageTerms {
                down_pct: self.down_pct / 100.0,
                rate_pct: self.mortgage_rate,
                years: self.mortgage_years,
            },
            start_year: self.start_year.unwrap_or(defaults.start_year),
        }
    }
}

fn curve_from(nodes: &[CurveNode]) -> Option<YearCurve> {
    if nodes.is_empty() {
        None
    } else {
        Some(YearCurve::from_nodes(nodes.iter().copied()))
    }
}

/// Validation message, listing the known names when a lookup failed
fn describe(err: &ProjectionError, assumptions: &Assumptions) -> String {
    match err {
        ProjectionError::UnknownCareer(_) => {
            let known: Vec<&str> = assumptions.careers.ids().collect();
            format!("{} (careers: {})", err, known.join(", "))
        }
        ProjectionError::UnknownLocation(_) => {
            let known: Vec<&str> = assumptions
                .locations
                .group_names()
                .chain(assumptions.locations.location_names())
                .collect();
            format!("{} (locations: {})", err, known.join(", "))
        }
        _ => err.to_string(),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let assumptions = match &cli.careers {
        Some(path) => Assumptions::with_career_file(path)
            .with_context(|| format!("loading careers from {}", path.display()))?,
        None => Assumptions::default_careers(),
    };

    let input = cli.to_input();
    if let Err(err) = input.validate(&assumptions) {
        Cli::command()
            .error(ErrorKind::ValueValidation, describe(&err, &assumptions))
            .exit();
    }

    let config = cli.to_config();
    let mortgage = config.mortgage;
    let engine = ProjectionEngine::new(assumptions, config);
    let result = engine.project(&input).context("running projection")?;
    log::info!(
        "projected {} years for career {}",
        input.years,
        input.career
    );

    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    match cli.format {
        OutputFormat::Csv => write_table(writer, &result)?,
        OutputFormat::Json => write_json(writer, &input, &mortgage, &result)?,
    }

    if cli.summary {
        write_summary(io::stderr().lock(), &result.summary())?;
    }

    Ok(())
}
