//! # Game Situation Analysis
//!
//! Turns one match snapshot into a situation assessment, three alternative
//! strategy plans and a narrative breakdown. The engine is a pure function
//! of its input: no state survives a call, and identical snapshots produce
//! identical reports, so it is safe to share across concurrent callers.

pub mod detail;
pub mod readability;
pub mod signals;
pub mod situation;
pub mod strategy;

pub use signals::{DefaultSignals, Signal, SignalCalculator, Signals};
pub use strategy::{StaticCatalog, StrategyCatalog};

use tracing::debug;

use crate::error::Result;
use crate::models::{GameState, SituationReport};

/// Stateless analysis engine with injectable metric formulas and plan
/// templates.
pub struct SituationEngine {
    signals: Box<dyn SignalCalculator + Send + Sync>,
    catalog: Box<dyn StrategyCatalog + Send + Sync>,
}

impl SituationEngine {
    /// Engine with the default formulas and the fixed plan templates.
    pub fn new() -> Self {
        SituationEngine { signals: Box::new(DefaultSignals), catalog: Box::new(StaticCatalog) }
    }

    /// Replace the metric formulas.
    pub fn with_signals(
        mut self,
        signals: impl SignalCalculator + Send + Sync + 'static,
    ) -> Self {
        self.signals = Box::new(signals);
        self
    }

    /// Replace the strategy templates.
    pub fn with_catalog(mut self, catalog: impl StrategyCatalog + Send + Sync + 'static) -> Self {
        self.catalog = Box::new(catalog);
        self
    }

    /// Analyze one match snapshot.
    ///
    /// Fails only when the state is too incomplete to analyze; signal
    /// fallbacks are recorded on the report instead of failing the call.
    pub fn analyze(&self, state: &GameState) -> Result<SituationReport> {
        let team = state.validate()?;
        let signals = self.signals.compute(team, state);
        debug!(
            score_diff = signals.score_diff.value,
            combat_ratio = signals.combat_ratio.value,
            participation_rate = signals.participation_rate.value,
            "situation signals computed"
        );

        Ok(SituationReport {
            current_situation: situation::assess(signals.score_diff.value),
            strategies: self.catalog.build_set(&signals),
            detailed_analysis: detail::build(&signals),
            degraded_signals: signals.degraded_kinds(),
        })
    }
}

impl Default for SituationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze with the default formulas and templates.
pub fn analyze_situation(state: &GameState) -> Result<SituationReport> {
    SituationEngine::new().analyze(state)
}
