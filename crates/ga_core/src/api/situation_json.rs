// Situation analysis JSON API layer
// Connects the assistant backend to the analysis engine

use serde::Serialize;
use tracing::debug;

use crate::analysis::SituationEngine;
use crate::models::{GameState, SituationReport};

#[derive(Debug, Serialize)]
struct AnalysisSuccess<'a> {
    status: &'static str,
    analysis: &'a SituationReport,
}

#[derive(Debug, Serialize)]
struct AnalysisFailure {
    status: &'static str,
    message: String,
}

const FALLBACK_ERROR: &str = r#"{"status":"error","message":"serialization failed"}"#;

fn error_json(message: impl Into<String>) -> String {
    serde_json::to_string(&AnalysisFailure { status: "error", message: message.into() })
        .unwrap_or_else(|_| FALLBACK_ERROR.to_string())
}

/// Analyze a game state passed as JSON and return the report as JSON.
///
/// Never panics and never returns a non-JSON string: malformed requests and
/// validation failures come back as `{"status":"error","message":...}`,
/// successes as `{"status":"success","analysis":{...}}`.
pub fn analyze_situation_json(request_json: &str) -> String {
    let state: GameState = match serde_json::from_str(request_json) {
        Ok(state) => state,
        Err(e) => return error_json(format!("Invalid request format: {}", e)),
    };

    debug!("processing situation analysis request");

    let report = match SituationEngine::new().analyze(&state) {
        Ok(report) => report,
        Err(e) => return error_json(e.to_string()),
    };

    serde_json::to_string(&AnalysisSuccess { status: "success", analysis: &report })
        .unwrap_or_else(|_| FALLBACK_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope() {
        let request = json!({
            "team_stats": {"kills": 53, "deaths": 42, "assists": 125},
            "opponent_stats": {"kills": 42, "deaths": 53, "assists": 95},
            "player_stats": {
                "kills": 3,
                "deaths": 2,
                "assists": 42,
                "participation_events": 40,
                "total_team_kill_events": 53
            }
        });

        let response = analyze_situation_json(&request.to_string());
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["status"], "success");
        assert_eq!(parsed["analysis"]["current_situation"]["status"], "BigAdvantage");
        assert!(parsed["analysis"]["strategies"]["aggressive"].is_object());
        assert!(parsed["analysis"]["strategies"]["defensive"].is_object());
        assert!(parsed["analysis"]["strategies"]["balanced"].is_object());
    }

    #[test]
    fn test_missing_team_stats_returns_error_payload() {
        let request = json!({
            "player_stats": {"kills": 1, "deaths": 1, "assists": 1}
        });

        let response = analyze_situation_json(&request.to_string());
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["status"], "error");
        assert!(!parsed["message"].as_str().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_returns_error_payload() {
        let response = analyze_situation_json("not a json document");
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["status"], "error");
        assert!(parsed["message"].as_str().unwrap().contains("Invalid request format"));
    }

    #[test]
    fn test_balanced_plan_omits_tip_key() {
        let request = json!({
            "team_stats": {"kills": 5, "deaths": 5, "assists": 5}
        });

        let response = analyze_situation_json(&request.to_string());
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        let balanced = &parsed["analysis"]["strategies"]["balanced"];
        assert!(balanced.get("tip").is_none());
        assert!(parsed["analysis"]["strategies"]["aggressive"].get("tip").is_some());
    }
}
