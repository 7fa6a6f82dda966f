//! Strategy plan generation.
//!
//! All three plans are produced on every pass; the host decides which one to
//! surface. Template selection sits behind `StrategyCatalog` so plans can
//! later react to the signals without reshaping the engine contract.

use super::signals::Signals;
use crate::models::{GamePhase, PhaseAction, StrategyPlan, StrategySet, StrategyStyle};

/// Source of the three alternative plans.
pub trait StrategyCatalog {
    fn aggressive(&self, signals: &Signals) -> StrategyPlan;
    fn defensive(&self, signals: &Signals) -> StrategyPlan;
    fn balanced(&self, signals: &Signals) -> StrategyPlan;

    /// Build the full set in one call.
    fn build_set(&self, signals: &Signals) -> StrategySet {
        StrategySet {
            aggressive: self.aggressive(signals),
            defensive: self.defensive(signals),
            balanced: self.balanced(signals),
        }
    }
}

/// Fixed plan templates. The signals are accepted but do not alter content.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCatalog;

fn phase_action(phase: GamePhase, action: &str, priority: &str) -> PhaseAction {
    PhaseAction { phase, action: action.to_string(), priority: priority.to_string() }
}

impl StrategyCatalog for StaticCatalog {
    fn aggressive(&self, _signals: &Signals) -> StrategyPlan {
        StrategyPlan {
            style: StrategyStyle::Aggressive,
            description: "趁现在优势,主动找机会打架".to_string(),
            win_rate_estimate: 65,
            difficulty: "需要配合到位".to_string(),
            phase_actions: vec![
                phase_action(GamePhase::Early, "多去骚扰对面野区,抢占资源", "非常重要"),
                phase_action(GamePhase::Mid, "控制视野,寻找机会开团", "非常重要"),
                phase_action(GamePhase::Late, "抱团推进,速战速决", "比较重要"),
            ],
            risks: vec![
                "打得太凶可能会被反打".to_string(),
                "需要队友及时跟上".to_string(),
                "一旦失误可能会送出优势".to_string(),
            ],
            tip: Some("记得带队友一起行动,不要单打独斗".to_string()),
        }
    }

    fn defensive(&self, _signals: &Signals) -> StrategyPlan {
        StrategyPlan {
            style: StrategyStyle::Defensive,
            description: "先发育,等对手犯错".to_string(),
            win_rate_estimate: 45,
            difficulty: "需要耐心".to_string(),
            phase_actions: vec![
                phase_action(GamePhase::Early, "安全发育,补塔下兵", "非常重要"),
                phase_action(GamePhase::Mid, "注意防守,等待机会", "非常重要"),
                phase_action(GamePhase::Late, "抓住对手失误反打", "非常重要"),
            ],
            risks: vec![
                "发育期可能会很难受".to_string(),
                "可能会被压制很惨".to_string(),
                "需要把握住机会".to_string(),
            ],
            tip: Some("别着急,慢慢来,我们后期更强".to_string()),
        }
    }

    fn balanced(&self, _signals: &Signals) -> StrategyPlan {
        StrategyPlan {
            style: StrategyStyle::Balanced,
            description: "平衡发育和进攻,灵活应对".to_string(),
            win_rate_estimate: 55,
            difficulty: "中".to_string(),
            phase_actions: vec![
                phase_action(GamePhase::Early, "正常发育,适度换资源", "中"),
                phase_action(GamePhase::Mid, "控制节奏,把握机会", "高"),
                phase_action(GamePhase::Late, "团队协作,稳定运营", "高"),
            ],
            risks: vec![
                "需要较强意识".to_string(),
                "决策要求高".to_string(),
                "节奏把控难".to_string(),
            ],
            tip: None,
        }
    }
}
