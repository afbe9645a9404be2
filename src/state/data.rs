//! Financial snapshot structures edited by the presentation layer

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// Asset class of a holding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvestmentType {
    Stocks,
    Bonds,
    RealEstate,
    Crypto,
    Other,
}

impl InvestmentType {
    /// Every type in display order
    pub const ALL: [InvestmentType; 5] = [
        InvestmentType::Stocks,
        InvestmentType::Bonds,
        InvestmentType::RealEstate,
        InvestmentType::Crypto,
        InvestmentType::Other,
    ];

    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentType::Stocks => "Stocks",
            InvestmentType::Bonds => "Bonds",
            InvestmentType::RealEstate => "Real Estate",
            InvestmentType::Crypto => "Cryptocurrency",
            InvestmentType::Other => "Other",
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for InvestmentType {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        InvestmentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProjectionError::UnknownInvestmentType(s.to_string()))
    }
}

/// Goal priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProjectionError::UnknownPriority(s.to_string()))
    }
}

/// A single holding in the portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub name: String,

    /// Principal currently held
    pub amount: f64,

    #[serde(rename = "type")]
    pub investment_type: InvestmentType,

    /// Annualized fractional rate (0.10 = 10%), not a percentage
    pub expected_return: f64,
}

impl Investment {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        investment_type: InvestmentType,
        expected_return: f64,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            investment_type,
            expected_return,
        }
    }

    /// Return earned over one year on the current principal (no compounding)
    pub fn annual_return(&self) -> f64 {
        self.amount * self.expected_return
    }
}

/// A savings target with a deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialGoal {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: DateTime<Utc>,
    pub priority: Priority,
}

impl FinancialGoal {
    pub fn new(
        name: impl Into<String>,
        target_amount: f64,
        current_amount: f64,
        deadline: DateTime<Utc>,
        priority: Priority,
    ) -> Self {
        Self {
            name: name.into(),
            target_amount,
            current_amount,
            deadline,
            priority,
        }
    }

    /// Funded fraction of the target; exceeds 1.0 when over-funded.
    /// Zero or non-finite targets and amounts are rejected.
    pub fn progress(&self) -> Result<f64> {
        if self.target_amount == 0.0 {
            return Err(ProjectionError::ZeroGoalTarget {
                goal: self.name.clone(),
            });
        }
        let progress = self.current_amount / self.target_amount;
        if !progress.is_finite() {
            return Err(ProjectionError::NonFiniteGoalProgress {
                goal: self.name.clone(),
            });
        }
        Ok(progress)
    }

    /// Whole percent funded, truncated toward zero
    pub fn progress_percent(&self) -> Result<i64> {
        Ok((self.progress()? * 100.0).trunc() as i64)
    }

    /// Amount still to save; negative when over-funded
    pub fn remaining(&self) -> f64 {
        self.target_amount - self.current_amount
    }
}

/// In-memory snapshot of a user's finances.
///
/// Owned by a single presentation session and edited through plain field
/// assignment. The projection engine only ever reads it or a clone of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialState {
    /// Net liquid balance, no lower bound
    pub current_balance: f64,

    pub monthly_income: f64,

    pub monthly_expenses: f64,

    /// Display-only; projection formulas never read it
    #[serde(default)]
    pub savings_rate: f64,

    #[serde(default)]
    pub investments: Vec<Investment>,

    #[serde(default)]
    pub goals: Vec<FinancialGoal>,
}

impl FinancialState {
    /// Empty snapshot with the given cash flow and no holdings or goals
    pub fn new(current_balance: f64, monthly_income: f64, monthly_expenses: f64) -> Self {
        Self {
            current_balance,
            monthly_income,
            monthly_expenses,
            savings_rate: 0.0,
            investments: Vec::new(),
            goals: Vec::new(),
        }
    }

    /// Seed snapshot a new session starts from, with goal deadlines relative to `now`
    pub fn sample(now: DateTime<Utc>) -> Self {
        Self {
            current_balance: 50_000.0,
            monthly_income: 8_000.0,
            monthly_expenses: 5_000.0,
            savings_rate: 0.3,
            investments: vec![
                Investment::new("Tech Stocks", 10_000.0, InvestmentType::Stocks, 0.10),
                Investment::new("Government Bonds", 5_000.0, InvestmentType::Bonds, 0.03),
            ],
            goals: vec![
                FinancialGoal::new(
                    "Emergency Fund",
                    10_000.0,
                    7_000.0,
                    now + Duration::days(180),
                    Priority::High,
                ),
                FinancialGoal::new(
                    "Retirement",
                    500_000.0,
                    150_000.0,
                    now + Duration::days(365 * 30),
                    Priority::High,
                ),
                FinancialGoal::new(
                    "New Car",
                    30_000.0,
                    15_000.0,
                    now + Duration::days(365 * 2),
                    Priority::Medium,
                ),
            ],
        }
    }

    /// Income minus expenses; negative when spending exceeds income
    pub fn monthly_savings(&self) -> f64 {
        self.monthly_income - self.monthly_expenses
    }

    pub fn yearly_savings(&self) -> f64 {
        self.monthly_savings() * 12.0
    }

    /// Savings as a fraction of income, derived from the cash flow fields.
    /// Independent of the stored `savings_rate`.
    pub fn actual_savings_rate(&self) -> Result<f64> {
        if self.monthly_income == 0.0 {
            return Err(ProjectionError::ZeroIncome);
        }
        Ok(self.monthly_savings() / self.monthly_income)
    }

    /// Sum of one year's return across all holdings
    pub fn annual_investment_returns(&self) -> f64 {
        self.investments.iter().map(Investment::annual_return).sum()
    }

    pub fn total_invested(&self) -> f64 {
        self.investments.iter().map(|i| i.amount).sum()
    }

    /// Principal per asset class in `InvestmentType::ALL` order, skipping absent classes
    pub fn allocation_by_type(&self) -> Vec<(InvestmentType, f64)> {
        InvestmentType::ALL
            .into_iter()
            .filter_map(|t| {
                let mut held = self
                    .investments
                    .iter()
                    .filter(|i| i.investment_type == t)
                    .peekable();
                held.peek()?;
                Some((t, held.map(|i| i.amount).sum()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    fn goal(target: f64, current: f64) -> FinancialGoal {
        FinancialGoal::new("Emergency Fund", target, current, now(), Priority::High)
    }

    #[test]
    fn test_goal_progress() {
        assert_relative_eq!(goal(10_000.0, 7_000.0).progress().unwrap(), 0.7);
        assert_eq!(goal(10_000.0, 7_500.0).progress_percent().unwrap(), 75);
        assert_eq!(goal(3.0, 2.0).progress_percent().unwrap(), 66);
    }

    #[test]
    fn test_goal_progress_over_funded() {
        let g = goal(10_000.0, 12_500.0);
        assert_relative_eq!(g.progress().unwrap(), 1.25);
        assert_relative_eq!(g.remaining(), -2_500.0);
    }

    #[test]
    fn test_goal_progress_zero_target_rejected() {
        let err = goal(0.0, 100.0).progress().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(err, ProjectionError::ZeroGoalTarget { .. }));
    }

    #[test]
    fn test_goal_progress_non_finite_rejected() {
        let nan_target = goal(f64::NAN, 100.0);
        assert!(matches!(
            nan_target.progress_percent(),
            Err(ProjectionError::NonFiniteGoalProgress { .. })
        ));

        let infinite_saved = goal(1_000.0, f64::INFINITY);
        assert!(infinite_saved.progress().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_sample_snapshot() {
        let state = FinancialState::sample(now());
        assert_eq!(state.investments.len(), 2);
        assert_eq!(state.goals.len(), 3);
        assert_eq!(state.goals[0].deadline, now() + Duration::days(180));
        assert_relative_eq!(state.annual_investment_returns(), 1_150.0);
        assert_relative_eq!(state.yearly_savings(), 36_000.0);
        assert_relative_eq!(state.total_invested(), 15_000.0);
    }

    #[test]
    fn test_actual_savings_rate() {
        let state = FinancialState::new(0.0, 8_000.0, 5_000.0);
        assert_relative_eq!(state.actual_savings_rate().unwrap(), 0.375);

        let broke = FinancialState::new(0.0, 0.0, 5_000.0);
        assert!(matches!(broke.actual_savings_rate(), Err(ProjectionError::ZeroIncome)));
    }

    #[test]
    fn test_allocation_by_type() {
        let mut state = FinancialState::new(0.0, 0.0, 0.0);
        state.investments = vec![
            Investment::new("BTC", 2_000.0, InvestmentType::Crypto, 0.2),
            Investment::new("Index Fund", 8_000.0, InvestmentType::Stocks, 0.07),
            Investment::new("Tech", 1_000.0, InvestmentType::Stocks, 0.1),
        ];

        let allocation = state.allocation_by_type();
        assert_eq!(
            allocation,
            vec![(InvestmentType::Stocks, 9_000.0), (InvestmentType::Crypto, 2_000.0)]
        );
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!("Real Estate".parse::<InvestmentType>().unwrap(), InvestmentType::RealEstate);
        assert_eq!("cryptocurrency".parse::<InvestmentType>().unwrap(), InvestmentType::Crypto);
        assert_eq!(" medium ".parse::<Priority>().unwrap(), Priority::Medium);
        assert!("Gold".parse::<InvestmentType>().is_err());
    }

    #[test]
    fn test_json_field_names() {
        let state = FinancialState::sample(now());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["monthlyIncome"], 8_000.0);
        assert_eq!(json["investments"][0]["type"], "stocks");
        assert_eq!(json["investments"][0]["expectedReturn"], 0.1);
        assert_eq!(json["goals"][2]["priority"], "medium");
    }
}
