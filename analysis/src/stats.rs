use std::collections::BTreeMap;

use common::{GameRecord, TrackerConfig};

/// Aggregated results of one player for one civilization
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCivilizationStat {
    pub player: String,
    pub civilization: String,
    pub total_games: usize,
    pub wins: usize,
    pub avg_points: f64,
    pub max_points: u32,
}

impl PlayerCivilizationStat {
    /// Percentage of games won, 0 if no games were played
    pub fn winrate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }

        self.wins as f64 / self.total_games as f64 * 100.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerTotals {
    pub player: String,
    pub total_wins: usize,
    pub total_games: usize,
}

#[derive(Debug, Default)]
struct Accumulator {
    games: usize,
    wins: usize,
    point_sum: u64,
    max_points: u32,
}

/// Computes the stats for every (player, civilization) pair that was played at least once.
///
/// Entries for players outside the roster, civilizations outside the catalog or without
/// points are skipped. A player wins a game if no other roster player scored more, so ties
/// produce multiple winners. Roster players with an unknown civilization still count as
/// opponents, players outside the roster do not.
pub fn compute_stats(
    records: &[GameRecord],
    config: &TrackerConfig,
) -> Vec<PlayerCivilizationStat> {
    let mut groups = BTreeMap::<(usize, usize), Accumulator>::new();

    for record in records {
        for (player, entry) in record.entries.iter() {
            let points = match entry.points {
                Some(p) => p,
                None => {
                    tracing::warn!(game = record.id, %player, "Skipping entry without points");
                    continue;
                }
            };

            let player_idx = match config.player_index(player) {
                Some(idx) => idx,
                None => {
                    tracing::warn!(game = record.id, %player, "Skipping entry of unknown player");
                    continue;
                }
            };

            let civ_idx = match entry
                .civilization
                .as_deref()
                .and_then(|c| config.civilization_index(c))
            {
                Some(idx) => idx,
                None => {
                    tracing::warn!(
                        game = record.id,
                        %player,
                        civilization = ?entry.civilization,
                        "Skipping entry with unknown civilization"
                    );
                    continue;
                }
            };

            let won = record
                .entries
                .iter()
                .filter(|(other, _)| *other != player && config.player_index(other).is_some())
                .filter_map(|(_, other)| other.points)
                .all(|other_points| points >= other_points);

            let group = groups.entry((player_idx, civ_idx)).or_default();
            group.games += 1;
            group.point_sum += u64::from(points);
            group.max_points = group.max_points.max(points);
            if won {
                group.wins += 1;
            }
        }
    }

    groups
        .into_iter()
        .map(|((player_idx, civ_idx), group)| PlayerCivilizationStat {
            player: config.players[player_idx].clone(),
            civilization: config.civilizations[civ_idx].clone(),
            total_games: group.games,
            wins: group.wins,
            avg_points: group.point_sum as f64 / group.games as f64,
            max_points: group.max_points,
        })
        .collect()
}

/// Sums up the wins and games of every roster player across all civilizations
pub fn compute_totals(
    stats: &[PlayerCivilizationStat],
    config: &TrackerConfig,
) -> Vec<PlayerTotals> {
    config
        .players
        .iter()
        .map(|player| {
            stats.iter().filter(|s| &s.player == player).fold(
                PlayerTotals {
                    player: player.clone(),
                    ..Default::default()
                },
                |mut totals, stat| {
                    totals.total_wins += stat.wins;
                    totals.total_games += stat.total_games;
                    totals
                },
            )
        })
        .collect()
}
