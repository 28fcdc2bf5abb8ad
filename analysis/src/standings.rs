use common::{GameRecord, GameSummary, Standing};

/// Orders the entries of a single game by points, highest first.
///
/// Entries without points come last. Every player sharing the highest score is a winner.
pub fn standings(record: &GameRecord) -> Vec<Standing> {
    let best = record.entries.values().filter_map(|e| e.points).max();

    let mut result: Vec<Standing> = record
        .entries
        .iter()
        .map(|(player, entry)| Standing {
            player: player.clone(),
            civilization: entry.civilization.clone(),
            points: entry.points,
            winner: entry.points.is_some() && entry.points == best,
        })
        .collect();

    result.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.player.cmp(&b.player))
    });

    result
}

pub fn summary(record: &GameRecord) -> GameSummary {
    GameSummary {
        id: record.id,
        played_at: record.played_at,
        standings: standings(record),
    }
}
