use analysis::stats::{self, PlayerCivilizationStat, PlayerTotals};
use common::{GameRecord, PlayerEntry, TrackerConfig};
use pretty_assertions::assert_eq;

fn config() -> TrackerConfig {
    TrackerConfig {
        players: vec!["A".to_owned(), "B".to_owned(), "C".to_owned()],
        civilizations: vec!["Gizeh".to_owned(), "Rhodos".to_owned(), "Babylon".to_owned()],
    }
}

fn game(id: i32, entries: &[(&str, Option<&str>, Option<u32>)]) -> GameRecord {
    GameRecord {
        id,
        played_at: chrono::DateTime::from_timestamp(1_700_000_000 + i64::from(id), 0)
            .unwrap()
            .naive_utc(),
        entries: entries
            .iter()
            .map(|(player, civ, points)| {
                (
                    player.to_string(),
                    PlayerEntry {
                        civilization: civ.map(|c| c.to_owned()),
                        points: *points,
                    },
                )
            })
            .collect(),
    }
}

#[test]
fn tie_for_first_is_a_win_for_both() {
    let records = vec![game(
        1,
        &[
            ("A", Some("Gizeh"), Some(40)),
            ("B", Some("Rhodos"), Some(35)),
            ("C", Some("Gizeh"), Some(40)),
        ],
    )];

    let result = stats::compute_stats(&records, &config());

    assert_eq!(
        vec![
            PlayerCivilizationStat {
                player: "A".to_owned(),
                civilization: "Gizeh".to_owned(),
                total_games: 1,
                wins: 1,
                avg_points: 40.0,
                max_points: 40,
            },
            PlayerCivilizationStat {
                player: "B".to_owned(),
                civilization: "Rhodos".to_owned(),
                total_games: 1,
                wins: 0,
                avg_points: 35.0,
                max_points: 35,
            },
            PlayerCivilizationStat {
                player: "C".to_owned(),
                civilization: "Gizeh".to_owned(),
                total_games: 1,
                wins: 1,
                avg_points: 40.0,
                max_points: 40,
            },
        ],
        result
    );

    let totals = stats::compute_totals(&result, &config());
    assert_eq!(
        vec![
            PlayerTotals {
                player: "A".to_owned(),
                total_wins: 1,
                total_games: 1,
            },
            PlayerTotals {
                player: "B".to_owned(),
                total_wins: 0,
                total_games: 1,
            },
            PlayerTotals {
                player: "C".to_owned(),
                total_wins: 1,
                total_games: 1,
            },
        ],
        totals
    );
}

#[test]
fn everyone_wins_if_everyone_ties() {
    let records = vec![game(
        1,
        &[
            ("A", Some("Gizeh"), Some(50)),
            ("B", Some("Rhodos"), Some(50)),
            ("C", Some("Babylon"), Some(50)),
        ],
    )];

    let result = stats::compute_stats(&records, &config());

    assert_eq!(3, result.len());
    assert!(result.iter().all(|s| s.wins == 1));
}

#[test]
fn aggregates_multiple_games() {
    let records = vec![
        game(
            1,
            &[
                ("A", Some("Gizeh"), Some(55)),
                ("B", Some("Rhodos"), Some(48)),
                ("C", Some("Babylon"), Some(61)),
            ],
        ),
        game(
            2,
            &[
                ("A", Some("Gizeh"), Some(62)),
                ("B", Some("Babylon"), Some(44)),
                ("C", Some("Rhodos"), Some(57)),
            ],
        ),
        game(
            3,
            &[
                ("A", Some("Rhodos"), Some(39)),
                ("B", Some("Gizeh"), Some(70)),
                ("C", Some("Babylon"), Some(52)),
            ],
        ),
    ];

    let result = stats::compute_stats(&records, &config());

    let a_gizeh = result
        .iter()
        .find(|s| s.player == "A" && s.civilization == "Gizeh")
        .unwrap();
    assert_eq!(2, a_gizeh.total_games);
    assert_eq!(1, a_gizeh.wins);
    assert_eq!(58.5, a_gizeh.avg_points);
    assert_eq!(62, a_gizeh.max_points);
    assert_eq!(50.0, a_gizeh.winrate());

    let c_babylon = result
        .iter()
        .find(|s| s.player == "C" && s.civilization == "Babylon")
        .unwrap();
    assert_eq!(2, c_babylon.total_games);
    assert_eq!(1, c_babylon.wins);

    // Pairs that were never played are not part of the result
    assert!(result
        .iter()
        .all(|s| !(s.player == "A" && s.civilization == "Babylon")));

    let totals = stats::compute_totals(&result, &config());
    for total in totals.iter() {
        let wins: usize = result
            .iter()
            .filter(|s| s.player == total.player)
            .map(|s| s.wins)
            .sum();
        let games: usize = result
            .iter()
            .filter(|s| s.player == total.player)
            .map(|s| s.total_games)
            .sum();

        assert_eq!(wins, total.total_wins);
        assert_eq!(games, total.total_games);
        assert_eq!(3, total.total_games);
    }

    // Every game has at least one winner
    let all_wins: usize = totals.iter().map(|t| t.total_wins).sum();
    assert!(all_wins >= records.len());
}

#[test]
fn no_records() {
    let result = stats::compute_stats(&[], &config());
    assert_eq!(Vec::<PlayerCivilizationStat>::new(), result);

    let totals = stats::compute_totals(&result, &config());
    assert_eq!(3, totals.len());
    assert!(totals.iter().all(|t| t.total_wins == 0 && t.total_games == 0));
}

#[test]
fn winrate_without_games_is_zero() {
    let stat = PlayerCivilizationStat {
        player: "A".to_owned(),
        civilization: "Gizeh".to_owned(),
        total_games: 0,
        wins: 0,
        avg_points: 0.0,
        max_points: 0,
    };

    assert_eq!(0.0, stat.winrate());
}

#[test]
#[tracing_test::traced_test]
fn skips_unknown_entries() {
    let records = vec![game(
        7,
        &[
            ("A", Some("Gizeh"), Some(30)),
            ("B", Some("Atlantis"), Some(45)),
            ("Zoe", Some("Rhodos"), Some(50)),
            ("C", Some("Rhodos"), None),
        ],
    )];

    let result = stats::compute_stats(&records, &config());

    // B is on the roster, so the 45 points still beat A
    assert_eq!(
        vec![PlayerCivilizationStat {
            player: "A".to_owned(),
            civilization: "Gizeh".to_owned(),
            total_games: 1,
            wins: 0,
            avg_points: 30.0,
            max_points: 30,
        }],
        result
    );

    assert!(logs_contain("Skipping entry with unknown civilization"));
    assert!(logs_contain("Skipping entry of unknown player"));
    assert!(logs_contain("Skipping entry without points"));
}

#[test]
fn single_scored_entry_wins() {
    let records = vec![game(
        1,
        &[("A", Some("Rhodos"), Some(12)), ("B", None, None)],
    )];

    let result = stats::compute_stats(&records, &config());

    assert_eq!(1, result.len());
    assert_eq!(1, result[0].wins);
}

#[test]
fn players_outside_the_roster_are_no_opponents() {
    let records = vec![game(
        3,
        &[
            ("A", Some("Gizeh"), Some(40)),
            ("B", Some("Rhodos"), Some(35)),
            ("Zoe", Some("Gizeh"), Some(60)),
        ],
    )];

    let result = stats::compute_stats(&records, &config());
    let totals = stats::compute_totals(&result, &config());

    assert_eq!(
        vec![(1, 1), (0, 1), (0, 0)],
        totals
            .iter()
            .map(|t| (t.total_wins, t.total_games))
            .collect::<Vec<_>>()
    );
    assert!(totals.iter().map(|t| t.total_wins).sum::<usize>() >= 1);
}
