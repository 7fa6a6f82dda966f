//! Result records returned to the host.
//!
//! Everything here is call-scoped output: built fresh per analysis, owned by
//! the caller, never persisted. Advisory strings come verbatim from the
//! fixed tables in `crate::analysis`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Discrete match-state classification.
///
/// The assessment thresholds only ever produce `BigAdvantage`, `Even` and
/// `BigDisadvantage`; the slight variants complete the vocabulary for hosts
/// that render finer-grained trends.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, JsonSchema, PartialEq, Eq, Hash)]
pub enum SituationStatus {
    BigAdvantage,
    SlightAdvantage,
    Even,
    SlightDisadvantage,
    BigDisadvantage,
}

impl SituationStatus {
    /// Player-facing label for UI.
    pub fn display(&self) -> &'static str {
        match self {
            SituationStatus::BigAdvantage => "大优势",
            SituationStatus::SlightAdvantage => "小优势",
            SituationStatus::Even => "势均力敌",
            SituationStatus::SlightDisadvantage => "小劣势",
            SituationStatus::BigDisadvantage => "暂时落后",
        }
    }
}

/// Course-of-action flavor for a strategy plan.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, JsonSchema, PartialEq, Eq, Hash)]
pub enum StrategyStyle {
    Aggressive,
    Defensive,
    Balanced,
}

impl StrategyStyle {
    /// Player-facing label for UI.
    pub fn display(&self) -> &'static str {
        match self {
            StrategyStyle::Aggressive => "主动出击",
            StrategyStyle::Defensive => "稳扎稳打",
            StrategyStyle::Balanced => "均衡",
        }
    }
}

/// Match phase a plan action applies to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Early,
    Mid,
    Late,
}

impl GamePhase {
    /// All phases in match order.
    pub const ALL: [GamePhase; 3] = [GamePhase::Early, GamePhase::Mid, GamePhase::Late];

    /// Player-facing label for UI.
    pub fn display(&self) -> &'static str {
        match self {
            GamePhase::Early => "前期",
            GamePhase::Mid => "中期",
            GamePhase::Late => "后期",
        }
    }
}

/// Signal that fell back to its sentinel value during analysis.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    ScoreDiff,
    CombatRatio,
    ParticipationRate,
}

/// Classification of the current match state.
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, PartialEq)]
pub struct SituationAssessment {
    pub status: SituationStatus,
    /// Classification confidence in [0, 1].
    pub confidence: f32,
    pub key_points: Vec<String>,
    pub mood: String,
    pub advice: String,
}

/// One recommended action within a plan, bound to a match phase.
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, PartialEq)]
pub struct PhaseAction {
    pub phase: GamePhase,
    pub action: String,
    pub priority: String,
}

/// One of the three alternative courses of action.
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, PartialEq)]
pub struct StrategyPlan {
    pub style: StrategyStyle,
    pub description: String,
    /// Estimated win rate in percent (0-100).
    pub win_rate_estimate: u8,
    pub difficulty: String,
    /// One entry per phase, early to late.
    pub phase_actions: Vec<PhaseAction>,
    pub risks: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tip: Option<String>,
}

impl StrategyPlan {
    /// Whether the plan carries exactly one action per phase, in match order.
    pub fn has_full_phase_coverage(&self) -> bool {
        self.phase_actions.len() == GamePhase::ALL.len()
            && self
                .phase_actions
                .iter()
                .zip(GamePhase::ALL)
                .all(|(entry, phase)| entry.phase == phase)
    }
}

/// The three plans generated on every pass. The host picks which to present.
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, PartialEq)]
pub struct StrategySet {
    pub aggressive: StrategyPlan,
    pub defensive: StrategyPlan,
    pub balanced: StrategyPlan,
}

/// Readability labels for the analyzed player's own numbers.
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, PartialEq)]
pub struct PersonalSummary {
    pub combat_rating: String,
    pub team_contribution: String,
}

/// Narrative breakdown combining team and personal performance.
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, PartialEq)]
pub struct DetailedAnalysis {
    pub team_summary: String,
    pub personal_summary: PersonalSummary,
    pub key_observations: Vec<String>,
    pub encouragement: String,
}

/// Complete analysis result for one match snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, PartialEq)]
pub struct SituationReport {
    pub current_situation: SituationAssessment,
    pub strategies: StrategySet,
    pub detailed_analysis: DetailedAnalysis,
    /// Signals that fell back to their sentinel; empty on clean input.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub degraded_signals: Vec<SignalKind>,
}
