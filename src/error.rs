//! Error types for projections and snapshot loading

use thiserror::Error;

/// Errors raised by the projection engine and the snapshot loader
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// Projection horizon below zero
    #[error("invalid argument: projection horizon must be non-negative, got {years}")]
    NegativeHorizon { years: i32 },

    /// Goal progress is undefined for a zero target
    #[error("invalid argument: goal '{goal}' has a target amount of zero")]
    ZeroGoalTarget { goal: String },

    /// Goal amounts that are NaN or infinite
    #[error("invalid argument: goal '{goal}' has a non-finite target or current amount")]
    NonFiniteGoalProgress { goal: String },

    /// Savings ratio is undefined without income
    #[error("invalid argument: savings ratio is undefined when monthly income is zero")]
    ZeroIncome,

    #[error("unknown investment type: {0}")]
    UnknownInvestmentType(String),

    #[error("unknown priority: {0}")]
    UnknownPriority(String),

    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed holdings CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl ProjectionError {
    /// True for rejections caused by the caller's arguments rather than by input files
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ProjectionError::NegativeHorizon { .. }
                | ProjectionError::ZeroGoalTarget { .. }
                | ProjectionError::NonFiniteGoalProgress { .. }
                | ProjectionError::ZeroIncome
        )
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
