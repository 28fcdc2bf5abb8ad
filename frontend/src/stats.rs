use leptos::*;

use crate::ErrorMessage;

#[leptos::component]
pub fn stats() -> impl leptos::IntoView {
    use leptos::Suspense;

    let report_resource = create_resource(
        || (),
        |_| async move { crate::get_json::<common::Report>("/api/stats").await },
    );

    let reports = move || match report_resource.get() {
        Some(Ok(report)) => report
            .players
            .into_iter()
            .map(|player| view! { <PlayerStats player /> })
            .collect::<Vec<_>>()
            .into_view(),
        Some(Err(message)) => view! { <ErrorMessage message /> }.into_view(),
        None => ().into_view(),
    };

    view! {
        <h2>Stats</h2>

        <Suspense
            fallback=move || view! { <p>Loading Stats</p> }
        >
            { reports }
        </Suspense>
    }
}

mod orderings {
    #[derive(Debug, Clone)]
    pub struct Ordering {
        name: SelectedStat,
        pub sort_fn: fn(
            c1: &common::CivilizationStats,
            c2: &common::CivilizationStats,
        ) -> core::cmp::Ordering,
    }

    impl Ordering {
        pub fn display_symbol(&self, stat: SelectedStat) -> &'static str {
            if self.name == stat {
                "↓"
            } else {
                "-"
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SelectedStat {
        Catalog,
        Games,
        Wins,
        Winrate,
        Average,
        Max,
    }

    fn parsed(value: &str) -> f64 {
        value.parse().unwrap_or(0.0)
    }

    pub const CATALOG: Ordering = Ordering {
        name: SelectedStat::Catalog,
        sort_fn: |_, _| core::cmp::Ordering::Equal,
    };

    pub const GAMES: Ordering = Ordering {
        name: SelectedStat::Games,
        sort_fn: |c1, c2| c2.total_games.cmp(&c1.total_games),
    };

    pub const WINS: Ordering = Ordering {
        name: SelectedStat::Wins,
        sort_fn: |c1, c2| c2.wins.cmp(&c1.wins),
    };

    pub const WINRATE: Ordering = Ordering {
        name: SelectedStat::Winrate,
        sort_fn: |c1, c2| parsed(&c2.winrate).total_cmp(&parsed(&c1.winrate)),
    };

    pub const AVERAGE: Ordering = Ordering {
        name: SelectedStat::Average,
        sort_fn: |c1, c2| parsed(&c2.avg_points).total_cmp(&parsed(&c1.avg_points)),
    };

    pub const MAX: Ordering = Ordering {
        name: SelectedStat::Max,
        sort_fn: |c1, c2| c2.max_points.cmp(&c1.max_points),
    };
}

#[leptos::component]
fn player_stats(player: common::PlayerReport) -> impl IntoView {
    let (ordering, set_ordering) = create_signal::<orderings::Ordering>(orderings::CATALOG);

    let style = stylers::style! {
        "Player-Stats",
        tr:nth-child(even) {
            background-color: #dddddd;
        }

        th {
            padding-left: 10px;
            padding-right: 10px;
        }
        th:nth-child(1) {
            width: 200px;
        }
        .totals {
            font-weight: bold;
        }
    };

    let totals = player.totals;
    let civilizations = player.civilizations;

    view! {
        class = style,
        <div>
            <h3>{ player.player }</h3>
            <table>
                <tr>
                    <th on:click=move |_| set_ordering.set(orderings::CATALOG)>
                        Civilization
                        { move || ordering.get().display_symbol(orderings::SelectedStat::Catalog) }
                    </th>
                    <th on:click=move |_| set_ordering.set(orderings::GAMES)>
                        Games
                        { move || ordering.get().display_symbol(orderings::SelectedStat::Games) }
                    </th>
                    <th on:click=move |_| set_ordering.set(orderings::WINS)>
                        Wins
                        { move || ordering.get().display_symbol(orderings::SelectedStat::Wins) }
                    </th>
                    <th on:click=move |_| set_ordering.set(orderings::WINRATE)>
                        Winrate
                        { move || ordering.get().display_symbol(orderings::SelectedStat::Winrate) }
                    </th>
                    <th on:click=move |_| set_ordering.set(orderings::AVERAGE)>
                        Avg Points
                        { move || ordering.get().display_symbol(orderings::SelectedStat::Average) }
                    </th>
                    <th on:click=move |_| set_ordering.set(orderings::MAX)>
                        Max Points
                        { move || ordering.get().display_symbol(orderings::SelectedStat::Max) }
                    </th>
                </tr>
        {
            move || {
                let mut rows = civilizations.clone();
                let sorting = ordering.get();
                rows.sort_by(|c1, c2| (sorting.sort_fn)(c1, c2));

                rows.into_iter().map(|c| {
                    view! {
                        class=style,
                        <tr>
                            <td>{ c.civilization }</td>
                            <td>{ c.total_games }</td>
                            <td>{ c.wins }</td>
                            <td>{ c.winrate }"%"</td>
                            <td>{ c.avg_points }</td>
                            <td>{ c.max_points }</td>
                        </tr>
                    }
                }).collect::<Vec<_>>()
            }
        }
                <tr class="totals">
                    <td>Total</td>
                    <td>{ totals.total_games }</td>
                    <td>{ totals.total_wins }</td>
                    <td></td>
                    <td></td>
                    <td></td>
                </tr>
            </table>
        </div>
    }
}
