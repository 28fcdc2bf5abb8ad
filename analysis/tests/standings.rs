use analysis::standings::{standings, summary};
use common::{GameRecord, PlayerEntry, Standing};
use pretty_assertions::assert_eq;

#[test]
fn ordered_by_points() {
    let record = GameRecord {
        id: 3,
        played_at: chrono::DateTime::from_timestamp(1_700_000_000, 0)
            .unwrap()
            .naive_utc(),
        entries: [
            ("Anna".to_owned(), PlayerEntry::new("Babylon", 48)),
            ("Ben".to_owned(), PlayerEntry::new("Olympia", 61)),
            ("Cleo".to_owned(), PlayerEntry::default()),
            ("Dora".to_owned(), PlayerEntry::new("Rhodos", 61)),
        ]
        .into_iter()
        .collect(),
    };

    let result = standings(&record);

    assert_eq!(
        vec![
            Standing {
                player: "Ben".to_owned(),
                civilization: Some("Olympia".to_owned()),
                points: Some(61),
                winner: true,
            },
            Standing {
                player: "Dora".to_owned(),
                civilization: Some("Rhodos".to_owned()),
                points: Some(61),
                winner: true,
            },
            Standing {
                player: "Anna".to_owned(),
                civilization: Some("Babylon".to_owned()),
                points: Some(48),
                winner: false,
            },
            Standing {
                player: "Cleo".to_owned(),
                civilization: None,
                points: None,
                winner: false,
            },
        ],
        result
    );

    let summary = summary(&record);
    assert_eq!(3, summary.id);
    assert_eq!(result, summary.standings);
}
