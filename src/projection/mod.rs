//! Projection engine for baseline and what-if net worth projections

mod engine;
mod results;

pub use engine::{
    ProjectionEngine, ProjectionConfig, ScenarioDelta, Timeframe, DEFAULT_WHAT_IF_YEARS,
};
pub use results::{ProjectionComparison, ProjectionRow, ComparisonSummary, ComparisonReport};
