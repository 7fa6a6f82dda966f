pub mod situation_json;

pub use situation_json::analyze_situation_json;
