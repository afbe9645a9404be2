//! Core projection engine for yearly net worth projections

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};
use crate::state::FinancialState;

/// Horizon the what-if view historically used regardless of the selected timeframe
pub const DEFAULT_WHAT_IF_YEARS: i32 = 5;

/// Fractional adjustments applied to a snapshot for a what-if projection.
///
/// Each delta scales its base value by `1 + delta`. The UI offers
/// -0.5..=0.5 in 0.05 steps, but nothing here range-checks them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDelta {
    pub income_change: f64,
    pub expense_change: f64,
    /// Scales every holding's expected return, not its principal
    pub investment_change: f64,
}

impl ScenarioDelta {
    pub fn new(income_change: f64, expense_change: f64, investment_change: f64) -> Self {
        Self {
            income_change,
            expense_change,
            investment_change,
        }
    }

    /// All deltas zero; projects identically to the baseline
    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }

    /// Derive a modified copy of `state`. The original is left untouched.
    pub fn apply(&self, state: &FinancialState) -> FinancialState {
        let mut modified = state.clone();
        modified.monthly_income = state.monthly_income * (1.0 + self.income_change);
        modified.monthly_expenses = state.monthly_expenses * (1.0 + self.expense_change);
        for investment in &mut modified.investments {
            investment.expected_return *= 1.0 + self.investment_change;
        }
        modified
    }
}

/// Timeframes offered by the what-if view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Timeframe {
    OneYear,
    ThreeYears,
    #[default]
    FiveYears,
    TenYears,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::OneYear,
        Timeframe::ThreeYears,
        Timeframe::FiveYears,
        Timeframe::TenYears,
    ];

    pub fn years(&self) -> i32 {
        match self {
            Timeframe::OneYear => 1,
            Timeframe::ThreeYears => 3,
            Timeframe::FiveYears => 5,
            Timeframe::TenYears => 10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::OneYear => "1 Year",
            Timeframe::ThreeYears => "3 Years",
            Timeframe::FiveYears => "5 Years",
            Timeframe::TenYears => "10 Years",
        }
    }
}

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Number of years to project
    pub years: i32,

    /// Adjustments for the what-if projection
    pub delta: ScenarioDelta,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            years: Timeframe::default().years(),
            delta: ScenarioDelta::neutral(),
        }
    }
}

impl ProjectionConfig {
    pub fn with_timeframe(timeframe: Timeframe, delta: ScenarioDelta) -> Self {
        Self {
            years: timeframe.years(),
            delta,
        }
    }
}

/// Stateless projection functions over a caller-owned snapshot
pub struct ProjectionEngine;

impl ProjectionEngine {
    /// Project end-of-year balances for `years` years.
    ///
    /// Element `i` is the balance at the end of year `i + 1`. Investment
    /// returns are recomputed each year from the unchanged `amount` of every
    /// holding, so principal never compounds.
    pub fn baseline(state: &FinancialState, years: i32) -> Result<Vec<f64>> {
        if years < 0 {
            return Err(ProjectionError::NegativeHorizon { years });
        }

        log::debug!(
            "baseline projection: {} years, {} investments",
            years,
            state.investments.len()
        );

        let mut projections = Vec::with_capacity(years as usize);
        let mut balance = state.current_balance;

        for _year in 0..years {
            let yearly_savings = state.yearly_savings();
            let investment_returns = state.annual_investment_returns();
            balance += yearly_savings + investment_returns;
            projections.push(balance);
        }

        if projections.iter().any(|b| !b.is_finite()) {
            log::warn!("projection produced a non-finite balance over {} years", years);
        }

        Ok(projections)
    }

    /// Project a what-if scenario against a modified copy of `state`.
    ///
    /// Zero deltas give exactly the baseline series.
    pub fn what_if(
        state: &FinancialState,
        income_change: f64,
        expense_change: f64,
        investment_change: f64,
        years: i32,
    ) -> Result<Vec<f64>> {
        let delta = ScenarioDelta::new(income_change, expense_change, investment_change);
        Self::project_scenario(state, &delta, years)
    }

    pub fn project_scenario(
        state: &FinancialState,
        delta: &ScenarioDelta,
        years: i32,
    ) -> Result<Vec<f64>> {
        log::debug!("what-if projection: {:?}", delta);
        let modified = delta.apply(state);
        Self::baseline(&modified, years)
    }
}
