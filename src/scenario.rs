//! Scenario runner for a session-owned snapshot
//!
//! Holds the snapshot a presentation session edits in place and re-runs
//! projections against it on demand. Nothing is cached between calls.

use crate::error::Result;
use crate::projection::{ProjectionComparison, ProjectionConfig, ProjectionEngine, ScenarioDelta};
use crate::state::FinancialState;

/// Snapshot plus default projection settings
///
/// # Example
/// ```ignore
/// let mut runner = ScenarioRunner::new(FinancialState::sample(Utc::now()));
///
/// // Slider moved: re-project
/// let comparison = runner.compare(ScenarioDelta::new(0.1, 0.0, 0.0))?;
///
/// // Field edited: the next run sees it
/// runner.state_mut().monthly_expenses = 4_500.0;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    state: FinancialState,
    config: ProjectionConfig,
}

impl ScenarioRunner {
    /// Create runner with the default 5-year horizon and neutral deltas
    pub fn new(state: FinancialState) -> Self {
        Self::with_config(state, ProjectionConfig::default())
    }

    pub fn with_config(state: FinancialState, config: ProjectionConfig) -> Self {
        Self { state, config }
    }

    /// Baseline over the configured horizon
    pub fn run_baseline(&self) -> Result<Vec<f64>> {
        ProjectionEngine::baseline(&self.state, self.config.years)
    }

    /// What-if over the configured horizon
    pub fn run(&self, delta: ScenarioDelta) -> Result<Vec<f64>> {
        ProjectionEngine::project_scenario(&self.state, &delta, self.config.years)
    }

    /// Baseline and what-if side by side. A neutral delta reuses the baseline.
    pub fn compare(&self, delta: ScenarioDelta) -> Result<ProjectionComparison> {
        let baseline = self.run_baseline()?;
        let what_if = if delta.is_neutral() {
            baseline.clone()
        } else {
            self.run(delta)?
        };
        Ok(ProjectionComparison::new(baseline, what_if))
    }

    /// Compare using the configured delta
    pub fn compare_configured(&self) -> Result<ProjectionComparison> {
        self.compare(self.config.delta)
    }

    /// Run several scenarios against the same snapshot
    pub fn run_scenarios(&self, deltas: &[ScenarioDelta]) -> Result<Vec<Vec<f64>>> {
        deltas.iter().map(|delta| self.run(*delta)).collect()
    }

    pub fn state(&self) -> &FinancialState {
        &self.state
    }

    /// Mutable snapshot for in-place edits between projections
    pub fn state_mut(&mut self) -> &mut FinancialState {
        &mut self.state
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ProjectionConfig {
        &mut self.config
    }

    pub fn into_state(self) -> FinancialState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;
    use crate::projection::Timeframe;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    fn runner() -> ScenarioRunner {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        ScenarioRunner::new(FinancialState::sample(now))
    }

    #[test]
    fn test_scenario_runner_batch() {
        let runner = runner();
        let deltas: Vec<_> = [-0.2, 0.0, 0.2]
            .iter()
            .map(|&change| ScenarioDelta::new(change, 0.0, 0.0))
            .collect();

        let results = runner.run_scenarios(&deltas).unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.len() == 5));

        // Higher income should end higher
        assert!(results[2][4] > results[1][4]);
        assert!(results[1][4] > results[0][4]);
    }

    #[test]
    fn test_edits_visible_to_next_run() {
        let mut runner = runner();
        let before = runner.run_baseline().unwrap();

        runner.state_mut().monthly_expenses = 9_000.0;
        let after = runner.run_baseline().unwrap();

        assert!(after[0] < before[0]);
        assert!(after[4] < after[0]);
    }

    #[test]
    fn test_compare_neutral() {
        let comparison = runner().compare(ScenarioDelta::neutral()).unwrap();
        assert_eq!(comparison.baseline, comparison.what_if);
        assert_relative_eq!(comparison.difference(), 0.0);
        assert_relative_eq!(comparison.baseline_final(), 50_000.0 + 5.0 * 37_150.0);
    }

    #[test]
    fn test_neutral_delta_detection() {
        assert!(ScenarioDelta::neutral().is_neutral());
        assert!(!ScenarioDelta::new(0.0, 0.05, 0.0).is_neutral());

        // Neutral shortcut and a full what-if run agree
        let runner = runner();
        let shortcut = runner.compare(ScenarioDelta::neutral()).unwrap();
        assert_eq!(shortcut.what_if, runner.run(ScenarioDelta::neutral()).unwrap());
    }

    #[test]
    fn test_configured_horizon() {
        let config = ProjectionConfig::with_timeframe(
            Timeframe::TenYears,
            ScenarioDelta::new(0.0, 0.1, 0.0),
        );
        let runner = ScenarioRunner::with_config(runner().into_state(), config);

        let comparison = runner.compare_configured().unwrap();
        assert_eq!(comparison.baseline.len(), 10);
        assert_eq!(comparison.what_if.len(), 10);
        assert!(comparison.difference() < 0.0);
    }

    #[test]
    fn test_negative_configured_horizon() {
        let mut runner = runner();
        runner.config_mut().years = -2;
        assert!(matches!(
            runner.run_baseline(),
            Err(ProjectionError::NegativeHorizon { years: -2 })
        ));
    }
}
