use common::{CivilizationStats, PlayerReport, Report, Totals, TrackerConfig};

use crate::stats::{PlayerCivilizationStat, PlayerTotals};

/// Builds the dense report grid of every roster player and every catalog civilization.
///
/// Cells without any stats keep their zeroed defaults. Stats or totals for players or
/// civilizations outside of the config are ignored.
pub fn build_report(
    stats: &[PlayerCivilizationStat],
    totals: &[PlayerTotals],
    config: &TrackerConfig,
) -> Report {
    let mut players: Vec<PlayerReport> = config
        .players
        .iter()
        .map(|player| PlayerReport {
            player: player.clone(),
            civilizations: config
                .civilizations
                .iter()
                .map(CivilizationStats::empty)
                .collect(),
            totals: Totals::default(),
        })
        .collect();

    for stat in stats {
        let (player_idx, civ_idx) = match config
            .player_index(&stat.player)
            .zip(config.civilization_index(&stat.civilization))
        {
            Some(idxs) => idxs,
            None => continue,
        };

        players[player_idx].civilizations[civ_idx] = CivilizationStats {
            civilization: stat.civilization.clone(),
            total_games: stat.total_games,
            wins: stat.wins,
            winrate: format!("{:.2}", stat.winrate()),
            avg_points: format!("{:.2}", stat.avg_points),
            max_points: stat.max_points,
        };
    }

    for total in totals {
        if let Some(idx) = config.player_index(&total.player) {
            players[idx].totals = Totals {
                total_wins: total.total_wins,
                total_games: total.total_games,
            };
        }
    }

    Report { players }
}
