//! Financial snapshot data model and loading

mod data;
pub mod loader;

pub use data::{FinancialState, Investment, InvestmentType, FinancialGoal, Priority};
pub use loader::{
    load_state, load_state_from_reader, load_investments, load_investments_from_reader,
};
