//! Threshold-to-label mapping for narrative output.
//!
//! Each signal has exactly one band table, evaluated top-down: the first
//! threshold the value strictly exceeds wins, otherwise the fallback label
//! applies.

/// Ordered `(threshold, label)` bands with a fallback label.
pub struct LabelScale {
    bands: &'static [(f32, &'static str)],
    fallback: &'static str,
}

impl LabelScale {
    pub const fn new(bands: &'static [(f32, &'static str)], fallback: &'static str) -> Self {
        LabelScale { bands, fallback }
    }

    /// Label of the first band the value strictly exceeds.
    pub fn label(&self, value: f32) -> &'static str {
        for (threshold, label) in self.bands {
            if value > *threshold {
                return label;
            }
        }
        self.fallback
    }
}

/// Combat-ratio readability.
pub const COMBAT_SCALE: LabelScale = LabelScale::new(
    &[
        (4.0, "战斗表现非常出色"),
        (3.0, "战斗发挥很稳定"),
        (2.0, "战斗表现还不错"),
    ],
    "需要更小心一些",
);

/// Participation readability.
pub const PARTICIPATION_SCALE: LabelScale = LabelScale::new(
    &[(0.7, "团战参与度很高"), (0.5, "团战参与度还行")],
    "可以多参与团战",
);

// The score table is symmetric around zero, so the negative side reuses the
// band mechanism on the magnitude.
const SCORE_AHEAD: LabelScale = LabelScale::new(
    &[(20.0, "咱们队伍大优势"), (10.0, "咱们略有优势")],
    "双方实力相当",
);
const SCORE_BEHIND: LabelScale = LabelScale::new(
    &[(20.0, "暂时有点小劣势"), (10.0, "稍微落后一点")],
    "双方实力相当",
);

/// Five-level readability for the score differential.
pub fn score_diff_label(value: f32) -> &'static str {
    if value >= 0.0 {
        SCORE_AHEAD.label(value)
    } else {
        SCORE_BEHIND.label(-value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combat_scale_bands() {
        assert_eq!(COMBAT_SCALE.label(4.5), "战斗表现非常出色");
        assert_eq!(COMBAT_SCALE.label(4.0), "战斗发挥很稳定");
        assert_eq!(COMBAT_SCALE.label(3.5), "战斗发挥很稳定");
        assert_eq!(COMBAT_SCALE.label(2.5), "战斗表现还不错");
        assert_eq!(COMBAT_SCALE.label(2.0), "需要更小心一些");
        assert_eq!(COMBAT_SCALE.label(0.0), "需要更小心一些");
    }

    #[test]
    fn test_participation_scale_bands() {
        assert_eq!(PARTICIPATION_SCALE.label(0.8), "团战参与度很高");
        assert_eq!(PARTICIPATION_SCALE.label(0.7), "团战参与度还行");
        assert_eq!(PARTICIPATION_SCALE.label(0.6), "团战参与度还行");
        assert_eq!(PARTICIPATION_SCALE.label(0.5), "可以多参与团战");
        assert_eq!(PARTICIPATION_SCALE.label(0.0), "可以多参与团战");
    }

    #[test]
    fn test_score_diff_labels_both_sides() {
        assert_eq!(score_diff_label(25.0), "咱们队伍大优势");
        assert_eq!(score_diff_label(15.0), "咱们略有优势");
        assert_eq!(score_diff_label(5.0), "双方实力相当");
        assert_eq!(score_diff_label(0.0), "双方实力相当");
        assert_eq!(score_diff_label(-5.0), "双方实力相当");
        assert_eq!(score_diff_label(-15.0), "稍微落后一点");
        assert_eq!(score_diff_label(-25.0), "暂时有点小劣势");
    }

    #[test]
    fn test_score_diff_boundaries() {
        // Exactly 20 sits below the top band on either side.
        assert_eq!(score_diff_label(20.0), "咱们略有优势");
        assert_eq!(score_diff_label(-20.0), "稍微落后一点");
        assert_eq!(score_diff_label(10.0), "双方实力相当");
        assert_eq!(score_diff_label(-10.0), "双方实力相当");
    }
}
