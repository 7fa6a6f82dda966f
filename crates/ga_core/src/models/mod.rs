pub mod game_state;
pub mod report;

pub use game_state::{GameState, PlayerStats, TeamStats};
pub use report::{
    DetailedAnalysis, GamePhase, PersonalSummary, PhaseAction, SignalKind, SituationAssessment,
    SituationReport, SituationStatus, StrategyPlan, StrategySet, StrategyStyle,
};
