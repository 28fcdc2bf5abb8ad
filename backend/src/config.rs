pub const DEFAULT_CIVILIZATIONS: [&str; 7] = [
    "Gizeh",
    "Ephesos",
    "Halikarnassus",
    "Babylon",
    "Olympia",
    "Rhodos",
    "Alexandria",
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("the player roster is empty")]
    NoPlayers,
    #[error("the civilization catalog is empty")]
    NoCivilizations,
    #[error("duplicate entry {0:?}")]
    Duplicate(String),
}

/// Tracks results of 7 Wonders games and serves their statistics
#[derive(Debug, Clone, clap::Parser)]
#[command(version, about)]
pub struct Config {
    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL", required_unless_present = "in_memory")]
    pub database_url: Option<String>,

    /// Keep the games in memory instead of a database
    #[arg(long)]
    pub in_memory: bool,

    #[arg(long, env = "TRACKER_BIND", default_value = "0.0.0.0:3000")]
    pub bind: std::net::SocketAddr,

    /// Comma separated names of the tracked players
    #[arg(long, env = "TRACKER_PLAYERS", value_delimiter = ',', required = true)]
    pub players: Vec<String>,

    #[arg(
        long,
        env = "TRACKER_CIVILIZATIONS",
        value_delimiter = ',',
        default_values_t = DEFAULT_CIVILIZATIONS.map(String::from)
    )]
    pub civilizations: Vec<String>,

    #[arg(long, env = "TRACKER_FRONTEND_DIR", default_value = "frontend/dist/")]
    pub frontend_dir: std::path::PathBuf,
}

impl Config {
    /// The roster and catalog handed to the statistics
    pub fn tracker(&self) -> Result<common::TrackerConfig, ConfigError> {
        let players = clean_list(&self.players)?;
        if players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }

        let civilizations = clean_list(&self.civilizations)?;
        if civilizations.is_empty() {
            return Err(ConfigError::NoCivilizations);
        }

        Ok(common::TrackerConfig {
            players,
            civilizations,
        })
    }
}

fn clean_list(values: &[String]) -> Result<Vec<String>, ConfigError> {
    let mut result: Vec<String> = Vec::with_capacity(values.len());

    for value in values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
        if result.iter().any(|r| r == value) {
            return Err(ConfigError::Duplicate(value.to_owned()));
        }
        result.push(value.to_owned());
    }

    Ok(result)
}
