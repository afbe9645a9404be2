//! Finance Projection CLI
//!
//! Command-line interface for running baseline and what-if projections

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use finance_projection::{
    projection::{ProjectionConfig, ScenarioDelta, Timeframe},
    state::{load_investments, load_state},
    FinancialState, ScenarioRunner,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliTimeframe {
    #[value(name = "1")]
    OneYear,
    #[value(name = "3")]
    ThreeYears,
    #[value(name = "5")]
    FiveYears,
    #[value(name = "10")]
    TenYears,
}

impl From<CliTimeframe> for Timeframe {
    fn from(value: CliTimeframe) -> Self {
        match value {
            CliTimeframe::OneYear => Timeframe::OneYear,
            CliTimeframe::ThreeYears => Timeframe::ThreeYears,
            CliTimeframe::FiveYears => Timeframe::FiveYears,
            CliTimeframe::TenYears => Timeframe::TenYears,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "finance_projection",
    version,
    about = "Project net worth under baseline and what-if assumptions"
)]
struct Cli {
    /// JSON snapshot to project (defaults to the sample snapshot)
    #[arg(long)]
    state: Option<PathBuf>,

    /// CSV of holdings (Name,Amount,Type,ExpectedReturn) replacing the snapshot's investments
    #[arg(long)]
    investments: Option<PathBuf>,

    /// Projection horizon in years; overrides --timeframe
    #[arg(long, allow_negative_numbers = true)]
    years: Option<i32>,

    #[arg(long, value_enum, default_value = "5")]
    timeframe: CliTimeframe,

    /// Fractional income change, e.g. 0.1 for +10%
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    income_change: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    expense_change: f64,

    /// Fractional change applied to every expected return
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    investment_change: f64,

    /// Write the yearly comparison to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print both series and key metrics as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut state = match &cli.state {
        Some(path) => load_state(path)
            .with_context(|| format!("loading snapshot {}", path.display()))?,
        None => FinancialState::sample(Utc::now()),
    };
    if let Some(path) = &cli.investments {
        state.investments = load_investments(path)
            .with_context(|| format!("loading holdings {}", path.display()))?;
    }

    let delta = ScenarioDelta::new(cli.income_change, cli.expense_change, cli.investment_change);
    let mut config = ProjectionConfig::with_timeframe(cli.timeframe.into(), delta);
    if let Some(years) = cli.years {
        config.years = years;
    }

    let runner = ScenarioRunner::with_config(state, config);
    let comparison = runner.compare_configured().context("running projection")?;

    if let Some(path) = &cli.csv {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("creating {}", path.display()))?;
        for row in comparison.rows() {
            writer.serialize(row)?;
        }
        writer.flush()?;
        log::info!("wrote {} rows to {}", comparison.baseline.len(), path.display());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&comparison.report())?);
        return Ok(());
    }

    let state = runner.state();
    println!("Finance Projection v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");
    println!("Current Balance:   ${:.2}", state.current_balance);
    println!("Monthly Savings:   ${:.2}", state.monthly_savings());
    match state.actual_savings_rate() {
        Ok(rate) => println!("Savings Rate:      {}%", (rate * 100.0).trunc()),
        Err(_) => println!("Savings Rate:      n/a"),
    }
    println!("Total Invested:    ${:.2}", state.total_invested());
    for (investment_type, amount) in state.allocation_by_type() {
        println!("  {:<16} ${:.2}", investment_type, amount);
    }
    println!();

    println!("Projection ({} years, {:?}):", runner.config().years, delta);
    println!("{:>5} {:>16} {:>16} {:>16}", "Year", "Baseline", "What If", "Difference");
    println!("{}", "-".repeat(56));
    for row in comparison.rows() {
        println!(
            "{:>5} {:>16.2} {:>16.2} {:>16.2}",
            row.year, row.baseline, row.what_if, row.difference
        );
    }

    println!("\nKey Metrics:");
    println!("  Current Projection: ${:.2}", comparison.baseline_final());
    println!("  What If Projection: ${:.2}", comparison.what_if_final());
    println!("  Difference:         ${:.2}", comparison.difference());

    if !state.goals.is_empty() {
        println!("\nGoals:");
        for goal in &state.goals {
            match goal.progress_percent() {
                Ok(pct) => println!(
                    "  {:<16} {:>4}%  ${:.2} of ${:.2} by {} ({})",
                    goal.name,
                    pct,
                    goal.current_amount,
                    goal.target_amount,
                    goal.deadline.format("%Y-%m-%d"),
                    goal.priority
                ),
                Err(err) => log::warn!("skipping goal progress: {}", err),
            }
        }
    }

    Ok(())
}
