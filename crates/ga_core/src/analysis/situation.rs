//! Situation bucket classification and the fixed assessment tables.
//!
//! The assessment payload per bucket is a lookup, not computed text: hosts
//! and their tests rely on these exact strings.

use crate::models::{SituationAssessment, SituationStatus};

/// Classify the score differential into the coarse assessment bucket.
///
/// Exactly +/-20 stays Even; only strict exceedance flips to a big swing.
pub fn classify(score_diff: f32) -> SituationStatus {
    if score_diff > 20.0 {
        SituationStatus::BigAdvantage
    } else if score_diff < -20.0 {
        SituationStatus::BigDisadvantage
    } else {
        SituationStatus::Even
    }
}

/// Build the fixed assessment payload for the classified bucket.
pub fn assess(score_diff: f32) -> SituationAssessment {
    let status = classify(score_diff);
    match status {
        SituationStatus::BigAdvantage => SituationAssessment {
            status,
            confidence: 0.9,
            key_points: vec![
                "咱们队伍整体领先,经济优势明显".to_string(),
                "人头比占优,团战有很大优势".to_string(),
                "野区资源和视野控制都很到位".to_string(),
            ],
            mood: "士气正盛,保持这个势头".to_string(),
            advice: "现在是咱们最强势的时候,抱团推进稳稳赢下比赛".to_string(),
        },
        SituationStatus::BigDisadvantage => SituationAssessment {
            status,
            confidence: 0.8,
            key_points: vec![
                "对面经济领先,需要稳住发育".to_string(),
                "避免无谓的战斗和消耗".to_string(),
                "耐心等待对手失误的机会".to_string(),
            ],
            mood: "别着急,慢慢来".to_string(),
            advice: "先稳住发育,等待翻盘机会,我们后期更强".to_string(),
        },
        _ => SituationAssessment {
            status,
            confidence: 0.7,
            key_points: vec![
                "双方实力相当,关键在于细节".to_string(),
                "小心谨慎,不要出现失误".to_string(),
                "找准机会果断开团".to_string(),
            ],
            mood: "谨慎乐观,保持专注".to_string(),
            advice: "保持冷静,谁的失误少谁就能赢".to_string(),
        },
    }
}
