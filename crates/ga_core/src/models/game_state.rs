use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Aggregate kill/death/assist counts for one side of a match.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, JsonSchema, PartialEq, Eq)]
pub struct TeamStats {
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
}

impl TeamStats {
    /// Net kills for this side (kills minus deaths).
    pub fn net_kills(&self) -> f32 {
        self.kills as f32 - self.deaths as f32
    }
}

/// Counts for the player under analysis.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, JsonSchema, PartialEq, Eq)]
pub struct PlayerStats {
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    /// Team kill-events this player was credited in (kill or assist).
    #[serde(default)]
    pub participation_events: u32,
    /// Total kill-events recorded for the player's team.
    #[serde(default)]
    pub total_team_kill_events: u32,
}

/// Snapshot of one match at analysis time.
///
/// Built by an external collaborator (screenshot extraction or a game-data
/// API) and handed over the JSON boundary. Opponent and player stats are
/// optional because not every caller can extract them.
#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema, PartialEq, Eq)]
pub struct GameState {
    /// Aggregate stats for the analyzed team. Required.
    #[serde(default)]
    pub team_stats: Option<TeamStats>,
    /// Aggregate stats for the opposing team, when the caller has them.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub opponent_stats: Option<TeamStats>,
    /// Stats for the analyzed player. Missing when extraction failed.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub player_stats: Option<PlayerStats>,
}

impl GameState {
    /// Check the record is complete enough to analyze.
    pub fn validate(&self) -> Result<&TeamStats> {
        self.team_stats
            .as_ref()
            .ok_or_else(|| AnalysisError::Validation("team_stats is missing".to_string()))
    }
}
