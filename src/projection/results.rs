//! Output structures for baseline vs. what-if comparisons

use serde::{Deserialize, Serialize};

/// One projected year for both series.
/// Serializes as `Year,Baseline,WhatIf,Difference` columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectionRow {
    /// Projection year (1-indexed)
    pub year: u32,
    pub baseline: f64,
    pub what_if: f64,
    pub difference: f64,
}

/// Baseline and what-if series over the same horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionComparison {
    pub baseline: Vec<f64>,
    pub what_if: Vec<f64>,
}

impl ProjectionComparison {
    pub fn new(baseline: Vec<f64>, what_if: Vec<f64>) -> Self {
        Self { baseline, what_if }
    }

    /// Final baseline balance, 0.0 for an empty horizon
    pub fn baseline_final(&self) -> f64 {
        self.baseline.last().copied().unwrap_or(0.0)
    }

    /// Final what-if balance, 0.0 for an empty horizon
    pub fn what_if_final(&self) -> f64 {
        self.what_if.last().copied().unwrap_or(0.0)
    }

    /// Positive when the scenario ends ahead of the baseline
    pub fn difference(&self) -> f64 {
        self.what_if_final() - self.baseline_final()
    }

    /// Year-by-year rows, truncated to the shorter series
    pub fn rows(&self) -> Vec<ProjectionRow> {
        self.baseline
            .iter()
            .zip(&self.what_if)
            .enumerate()
            .map(|(i, (&baseline, &what_if))| ProjectionRow {
                year: i as u32 + 1,
                baseline,
                what_if,
                difference: what_if - baseline,
            })
            .collect()
    }

    /// Both series together with their key metrics, for JSON output
    pub fn report(&self) -> ComparisonReport<'_> {
        ComparisonReport {
            summary: self.summary(),
            baseline: &self.baseline,
            what_if: &self.what_if,
        }
    }

    pub fn summary(&self) -> ComparisonSummary {
        ComparisonSummary {
            years: self.baseline.len() as u32,
            baseline_final: self.baseline_final(),
            what_if_final: self.what_if_final(),
            difference: self.difference(),
        }
    }
}

/// Key metrics for a comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub years: u32,
    pub baseline_final: f64,
    pub what_if_final: f64,
    pub difference: f64,
}

/// Serialized view of a comparison: metrics plus both yearly series
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport<'a> {
    pub summary: ComparisonSummary,
    pub baseline: &'a [f64],
    pub what_if: &'a [f64],
}
