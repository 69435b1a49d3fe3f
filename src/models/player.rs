use serde::{Deserialize, Serialize};

/// Identity of the current actor as reported by the game framework.
///
/// Every field may be missing on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerData {
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub dateofbirth: Option<String>,
}

/// The current actor's job. Keys are snake_case as the framework emits them.
///
/// Only `label` and `grade` are read; the rest is carried as sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    pub grade: u32,
    pub grade_label: String,
    pub grade_name: String,
    pub grade_salary: f64,
    pub label: String,
    pub name: String,
    pub skin_female: serde_json::Value,
    pub skin_male: serde_json::Value,
}
