//! Narrative breakdown of team and personal performance.

use super::readability::{score_diff_label, COMBAT_SCALE, PARTICIPATION_SCALE};
use super::signals::Signals;
use crate::models::{DetailedAnalysis, PersonalSummary};

/// Map the three signals to their readability labels and attach the fixed
/// narrative lines.
pub fn build(signals: &Signals) -> DetailedAnalysis {
    DetailedAnalysis {
        team_summary: score_diff_label(signals.score_diff.value).to_string(),
        personal_summary: PersonalSummary {
            combat_rating: COMBAT_SCALE.label(signals.combat_ratio.value).to_string(),
            team_contribution: PARTICIPATION_SCALE
                .label(signals.participation_rate.value)
                .to_string(),
        },
        key_observations: vec![
            "团战参与积极,继续保持".to_string(),
            "个人战斗表现不错".to_string(),
            "可以多帮队友控制资源".to_string(),
        ],
        encouragement: "整体表现很棒,继续加油!".to_string(),
    }
}
