//! Finance Projection - Net worth projection engine for personal finance snapshots
//!
//! This library provides:
//! - An in-memory financial snapshot (balance, cash flow, holdings, goals)
//! - Baseline yearly net worth projections
//! - What-if projections under income, expense and return adjustments
//! - Goal progress and savings metrics for display

pub mod error;
pub mod state;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use state::{FinancialState, Investment, InvestmentType, FinancialGoal, Priority};
pub use projection::{ProjectionEngine, ProjectionComparison, ScenarioDelta, Timeframe};
pub use scenario::ScenarioRunner;
