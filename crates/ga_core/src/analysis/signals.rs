//! Scalar signal extraction from raw match stats.
//!
//! The three formulas live behind `SignalCalculator` because the data
//! sources disagree on what they can provide: screenshot extraction and the
//! game-data API expose different fields, so hosts swap in their own
//! calculator without touching classification.

use tracing::warn;

use crate::models::{GameState, PlayerStats, SignalKind, TeamStats};

/// One computed scalar signal.
///
/// `degraded` marks a value that fell back to its sentinel because the
/// inputs could not support the computation. Degraded signals never abort
/// an analysis pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signal {
    pub value: f32,
    pub degraded: bool,
}

impl Signal {
    pub fn ok(value: f32) -> Self {
        Signal { value, degraded: false }
    }

    /// The fallback value: 0.0, flagged as degraded.
    pub fn sentinel() -> Self {
        Signal { value: 0.0, degraded: true }
    }
}

/// The three signals driving one analysis pass.
#[derive(Debug, Clone, Copy)]
pub struct Signals {
    pub score_diff: Signal,
    pub combat_ratio: Signal,
    pub participation_rate: Signal,
}

impl Signals {
    /// Kinds of the signals that fell back to their sentinel, in fixed order.
    pub fn degraded_kinds(&self) -> Vec<SignalKind> {
        let mut kinds = Vec::new();
        if self.score_diff.degraded {
            kinds.push(SignalKind::ScoreDiff);
        }
        if self.combat_ratio.degraded {
            kinds.push(SignalKind::CombatRatio);
        }
        if self.participation_rate.degraded {
            kinds.push(SignalKind::ParticipationRate);
        }
        kinds
    }
}

/// Pluggable metric formulas.
pub trait SignalCalculator {
    /// Signed team performance differential; positive favors the analyzed team.
    fn score_diff(&self, team: &TeamStats, opponent: Option<&TeamStats>) -> Signal;

    /// Combat performance ratio for the analyzed player.
    fn combat_ratio(&self, player: &PlayerStats) -> Signal;

    /// Fraction of team kill-events the player took part in, clamped to [0, 1].
    fn participation_rate(&self, player: &PlayerStats) -> Signal;

    /// Compute all three signals for a validated game state.
    fn compute(&self, team: &TeamStats, state: &GameState) -> Signals {
        let score_diff = self.score_diff(team, state.opponent_stats.as_ref());
        let (combat_ratio, participation_rate) = match state.player_stats.as_ref() {
            Some(player) => (self.combat_ratio(player), self.participation_rate(player)),
            None => {
                warn!("player_stats missing, combat and participation signals degraded");
                (Signal::sentinel(), Signal::sentinel())
            }
        };
        Signals { score_diff, combat_ratio, participation_rate }
    }
}

/// Default formulas used when the host does not inject its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSignals;

impl SignalCalculator for DefaultSignals {
    /// Net-kill differential between the two sides. Without opponent stats
    /// the team's own net kills stand in for the differential.
    fn score_diff(&self, team: &TeamStats, opponent: Option<&TeamStats>) -> Signal {
        let value = match opponent {
            Some(opp) => team.net_kills() - opp.net_kills(),
            None => team.net_kills(),
        };
        Signal::ok(value)
    }

    /// `(kills + assists) / max(deaths, 1)`. Zero deaths is the guarded
    /// normal path, not a degradation.
    fn combat_ratio(&self, player: &PlayerStats) -> Signal {
        let deaths = player.deaths.max(1) as f32;
        Signal::ok((player.kills as f32 + player.assists as f32) / deaths)
    }

    fn participation_rate(&self, player: &PlayerStats) -> Signal {
        if player.total_team_kill_events == 0 {
            warn!("total_team_kill_events is zero, participation signal degraded");
            return Signal::sentinel();
        }
        let rate =
            player.participation_events as f32 / player.total_team_kill_events as f32;
        Signal::ok(rate.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player(kills: u32, deaths: u32, assists: u32) -> PlayerStats {
        PlayerStats { kills, deaths, assists, ..Default::default() }
    }

    #[test]
    fn test_score_diff_with_opponent() {
        let team = TeamStats { kills: 53, deaths: 42, assists: 125 };
        let opponent = TeamStats { kills: 42, deaths: 53, assists: 95 };

        let signal = DefaultSignals.score_diff(&team, Some(&opponent));
        assert_eq!(signal.value, 22.0);
        assert!(!signal.degraded);
    }

    #[test]
    fn test_score_diff_without_opponent() {
        let team = TeamStats { kills: 30, deaths: 10, assists: 40 };

        let signal = DefaultSignals.score_diff(&team, None);
        assert_eq!(signal.value, 20.0);
        assert!(!signal.degraded);
    }

    #[test]
    fn test_combat_ratio_guards_zero_deaths() {
        let signal = DefaultSignals.combat_ratio(&player(3, 0, 9));
        assert_eq!(signal.value, 12.0);
        assert!(!signal.degraded);
    }

    #[test]
    fn test_combat_ratio_divides_by_deaths() {
        let signal = DefaultSignals.combat_ratio(&player(3, 2, 42));
        assert_eq!(signal.value, 22.5);
    }

    #[test]
    fn test_participation_rate_zero_events_is_sentinel() {
        let stats = PlayerStats { participation_events: 5, ..Default::default() };

        let signal = DefaultSignals.participation_rate(&stats);
        assert_eq!(signal.value, 0.0);
        assert!(signal.degraded);
    }

    #[test]
    fn test_participation_rate_clamps_overcount() {
        let stats = PlayerStats {
            participation_events: 60,
            total_team_kill_events: 53,
            ..Default::default()
        };

        let signal = DefaultSignals.participation_rate(&stats);
        assert_eq!(signal.value, 1.0);
        assert!(!signal.degraded);
    }

    #[test]
    fn test_compute_degrades_without_player_stats() {
        let state = GameState {
            team_stats: Some(TeamStats { kills: 10, deaths: 10, assists: 10 }),
            ..Default::default()
        };
        let team = state.team_stats.unwrap();

        let signals = DefaultSignals.compute(&team, &state);
        assert_eq!(
            signals.degraded_kinds(),
            vec![SignalKind::CombatRatio, SignalKind::ParticipationRate]
        );
    }

    proptest! {
        #[test]
        fn participation_rate_stays_in_unit_interval(
            events in any::<u32>(),
            total in any::<u32>(),
        ) {
            let stats = PlayerStats {
                participation_events: events,
                total_team_kill_events: total,
                ..Default::default()
            };

            let signal = DefaultSignals.participation_rate(&stats);
            prop_assert!(signal.value.is_finite());
            prop_assert!((0.0..=1.0).contains(&signal.value));
        }

        #[test]
        fn combat_ratio_is_finite_and_non_negative(
            kills in any::<u32>(),
            deaths in any::<u32>(),
            assists in any::<u32>(),
        ) {
            let signal = DefaultSignals.combat_ratio(&player(kills, deaths, assists));
            prop_assert!(signal.value.is_finite());
            prop_assert!(signal.value >= 0.0);
        }
    }
}
