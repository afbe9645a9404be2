//! Load snapshots from JSON files and holdings from CSV

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::Reader;

use super::{FinancialState, Investment, InvestmentType};
use crate::error::Result;

/// Raw CSV row for a holdings export
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "Type")]
    investment_type: String,
    #[serde(rename = "ExpectedReturn")]
    expected_return: f64,
}

impl CsvRow {
    fn to_investment(self) -> Result<Investment> {
        let investment_type: InvestmentType = self.investment_type.parse()?;
        Ok(Investment::new(
            self.name,
            self.amount,
            investment_type,
            self.expected_return,
        ))
    }
}

/// Load a full snapshot from a JSON file
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<FinancialState> {
    let path = path.as_ref();
    let state = load_state_from_reader(BufReader::new(File::open(path)?))?;
    log::info!(
        "loaded snapshot from {} ({} investments, {} goals)",
        path.display(),
        state.investments.len(),
        state.goals.len()
    );
    Ok(state)
}

/// Load a full snapshot from any reader holding camelCase JSON
pub fn load_state_from_reader<R: Read>(reader: R) -> Result<FinancialState> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load holdings from a CSV file, preserving row order
pub fn load_investments<P: AsRef<Path>>(path: P) -> Result<Vec<Investment>> {
    let investments = load_investments_from_reader(File::open(path.as_ref())?)?;
    log::info!("loaded {} investments from {}", investments.len(), path.as_ref().display());
    Ok(investments)
}

/// Load holdings from any reader (e.g., string buffer)
pub fn load_investments_from_reader<R: Read>(reader: R) -> Result<Vec<Investment>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut investments = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        investments.push(row.to_investment()?);
    }

    Ok(investments)
}
