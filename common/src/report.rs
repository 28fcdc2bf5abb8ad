#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Report {
    pub players: Vec<PlayerReport>,
}

impl Report {
    pub fn player(&self, name: &str) -> Option<&PlayerReport> {
        self.players.iter().find(|p| p.player == name)
    }

    pub fn cell(&self, player: &str, civilization: &str) -> Option<&CivilizationStats> {
        self.player(player)?
            .civilizations
            .iter()
            .find(|c| c.civilization == civilization)
    }

    /// Number of player/civilization cells in the report
    pub fn cell_count(&self) -> usize {
        self.players.iter().map(|p| p.civilizations.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerReport {
    pub player: String,
    pub civilizations: Vec<CivilizationStats>,
    pub totals: Totals,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CivilizationStats {
    pub civilization: String,
    pub total_games: usize,
    pub wins: usize,
    pub winrate: String,
    pub avg_points: String,
    pub max_points: u32,
}

impl CivilizationStats {
    pub fn empty(civilization: impl Into<String>) -> Self {
        Self {
            civilization: civilization.into(),
            total_games: 0,
            wins: 0,
            winrate: "0.00".to_owned(),
            avg_points: "0.00".to_owned(),
            max_points: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Totals {
    pub total_wins: usize,
    pub total_games: usize,
}
