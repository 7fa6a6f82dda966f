//! # ga_core - Game Situation Analysis Engine
//!
//! This library classifies a MOBA match snapshot and produces
//! Chinese-language strategy recommendations, with a JSON API for easy
//! integration with assistant backends.
//!
//! ## Features
//! - 100% deterministic analysis (same input = same report)
//! - Fixed advisory text tables, asserted verbatim by hosts
//! - Pluggable metric formulas behind `SignalCalculator`
//! - JSON API for easy integration

pub mod analysis;
pub mod api;
pub mod error;
pub mod models;

// Re-export main API functions
pub use analysis::{
    analyze_situation, DefaultSignals, SignalCalculator, SituationEngine, StaticCatalog,
    StrategyCatalog,
};
pub use api::analyze_situation_json;
pub use error::{AnalysisError, Result};
pub use models::{
    GamePhase, GameState, PlayerStats, SituationReport, SituationStatus, StrategyStyle, TeamStats,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
