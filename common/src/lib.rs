use std::collections::BTreeMap;

pub mod report;
pub use report::{CivilizationStats, PlayerReport, Report, Totals};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApiInfo {
    pub message: String,
}

/// The configured roster and civilization catalog
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrackerConfig {
    pub players: Vec<String>,
    pub civilizations: Vec<String>,
}

impl TrackerConfig {
    pub fn player_index(&self, player: &str) -> Option<usize> {
        self.players.iter().position(|p| p == player)
    }

    pub fn civilization_index(&self, civilization: &str) -> Option<usize> {
        self.civilizations.iter().position(|c| c == civilization)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerEntry {
    pub civilization: Option<String>,
    pub points: Option<u32>,
}

impl PlayerEntry {
    pub fn new(civilization: impl Into<String>, points: u32) -> Self {
        Self {
            civilization: Some(civilization.into()),
            points: Some(points),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameRecord {
    pub id: i32,
    pub played_at: chrono::NaiveDateTime,
    pub entries: BTreeMap<String, PlayerEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NewGame {
    pub entries: BTreeMap<String, PlayerEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameCreated {
    pub id: i32,
}

/// One player's placement in a single game
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Standing {
    pub player: String,
    pub civilization: Option<String>,
    pub points: Option<u32>,
    pub winner: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameSummary {
    pub id: i32,
    pub played_at: chrono::NaiveDateTime,
    pub standings: Vec<Standing>,
}
