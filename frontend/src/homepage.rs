use leptos::*;

use crate::ErrorMessage;

#[leptos::component]
pub fn homepage() -> impl leptos::IntoView {
    let (get_notification, notify) = create_signal(0u8);

    let config = create_resource(
        || (),
        |_| async move { crate::get_json::<common::TrackerConfig>("/api/config").await },
    );

    let form = move || match config.get() {
        Some(Ok(config)) => view! { <AddGame config reload_games=notify /> }.into_view(),
        Some(Err(message)) => view! { <ErrorMessage message /> }.into_view(),
        None => view! { <p>Loading players</p> }.into_view(),
    };

    view! {
        <div>
            <div>
                <h2>Add Game</h2>
                <Suspense fallback=move || view! { <p>Loading players</p> }>
                    { form }
                </Suspense>
            </div>
            <div>
                <h2>Game History</h2>
                <GameHistory get_notification reload_games=notify />
            </div>
        </div>
    }
}

#[derive(Debug, Clone, Copy)]
struct PlayerInput {
    civilization: RwSignal<String>,
    points: RwSignal<String>,
}

impl PlayerInput {
    fn new() -> Self {
        Self {
            civilization: RwSignal::new(String::new()),
            points: RwSignal::new(String::new()),
        }
    }

    fn entry(&self, player: &str) -> Result<Option<common::PlayerEntry>, String> {
        parse_entry(
            player,
            self.civilization.get_untracked(),
            &self.points.get_untracked(),
        )
    }

    fn clear(&self) {
        self.civilization.set(String::new());
        self.points.set(String::new());
    }
}

/// Empty rows are left out of the game, points that are not a number are rejected
fn parse_entry(
    player: &str,
    civilization: String,
    points: &str,
) -> Result<Option<common::PlayerEntry>, String> {
    let civilization = Some(civilization).filter(|c| !c.is_empty());
    let points = match points.trim() {
        "" => None,
        raw => Some(
            raw.parse::<u32>()
                .map_err(|_| format!("Invalid points for {}: {:?}", player, raw))?,
        ),
    };

    if civilization.is_none() && points.is_none() {
        return Ok(None);
    }

    Ok(Some(common::PlayerEntry {
        civilization,
        points,
    }))
}

#[leptos::component]
fn add_game(
    config: common::TrackerConfig,
    reload_games: WriteSignal<u8>,
) -> impl leptos::IntoView {
    let style = stylers::style! {
        "AddGame",
        th, td {
            padding-left: 10px;
            padding-right: 10px;
        }
        th:nth-child(1) {
            width: 200px;
            text-align: left;
        }
    };

    let inputs: Vec<(String, PlayerInput)> = config
        .players
        .iter()
        .map(|player| (player.clone(), PlayerInput::new()))
        .collect();

    let error = RwSignal::new(None::<String>);

    let reset_inputs = inputs.clone();
    let submit = create_action(move |game: &common::NewGame| {
        let game = game.clone();
        let reset_inputs = reset_inputs.clone();

        async move {
            match crate::add_game(&game).await {
                Ok(_) => {
                    error.set(None);
                    reset_inputs.iter().for_each(|(_, input)| input.clear());

                    reload_games.update(|v| {
                        *v = v.wrapping_add(1);
                    });
                }
                Err(e) => error.set(Some(e)),
            }
        }
    });

    let submit_inputs = inputs.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let entries = submit_inputs
            .iter()
            .filter_map(|(player, input)| {
                input
                    .entry(player)
                    .map(|entry| entry.map(|e| (player.clone(), e)))
                    .transpose()
            })
            .collect::<Result<_, _>>();

        match entries {
            Ok(entries) => submit.dispatch(common::NewGame { entries }),
            Err(e) => error.set(Some(e)),
        }
    };

    let civilizations = config.civilizations;
    let rows = inputs
        .into_iter()
        .map(|(player, input)| {
            let options = civilizations
                .iter()
                .map(|civ| view! { <option value=civ.clone()>{ civ.clone() }</option> })
                .collect::<Vec<_>>();

            view! {class = style,
                <tr>
                    <th>{ player }</th>
                    <td>
                        <select
                            prop:value=move || input.civilization.get()
                            on:change=move |ev| input.civilization.set(event_target_value(&ev))
                        >
                            <option value="">"-"</option>
                            { options }
                        </select>
                    </td>
                    <td>
                        <input
                            type="number"
                            min="0"
                            prop:value=move || input.points.get()
                            on:input=move |ev| input.points.set(event_target_value(&ev))
                        />
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {class = style,
        <form on:submit=on_submit>
            <table>
                <tr><th>Player</th><th>Civilization</th><th>Points</th></tr>
                { rows }
            </table>
            <input type="submit" value="Add Game" disabled=move || submit.pending().get() />
        </form>
        { move || error.get().map(|message| view! { <ErrorMessage message /> }) }
    }
}

#[leptos::component]
fn game_history(
    get_notification: ReadSignal<u8>,
    reload_games: WriteSignal<u8>,
) -> impl leptos::IntoView {
    let games = create_resource(
        move || get_notification.get(),
        |_| async move {
            crate::get_json::<Vec<common::GameSummary>>("/api/games/history").await
        },
    );

    let error = RwSignal::new(None::<String>);
    let remove = create_action(move |id: &i32| {
        let id = *id;
        async move {
            if let Err(e) = crate::delete_game(id).await {
                error.set(Some(e));
            }

            reload_games.update(|v| {
                *v = v.wrapping_add(1);
            });
        }
    });

    let entries = move || match games.get() {
        Some(Ok(games)) if games.is_empty() => view! { <p>No games recorded yet</p> }.into_view(),
        Some(Ok(games)) => games
            .into_iter()
            .map(|game| view! { <GameHistoryEntry game on_delete=move |id| remove.dispatch(id) /> })
            .collect::<Vec<_>>()
            .into_view(),
        Some(Err(message)) => view! { <ErrorMessage message /> }.into_view(),
        None => ().into_view(),
    };

    view! {
        { move || error.get().map(|message| view! { <ErrorMessage message /> }) }
        <Suspense fallback=move || view! { <p>Loading games</p> }>
            { entries }
        </Suspense>
    }
}

#[leptos::component]
fn game_history_entry<D>(game: common::GameSummary, on_delete: D) -> impl leptos::IntoView
where
    D: Fn(i32) + 'static,
{
    let style = stylers::style! {
        "GameHistoryEntry",
        .entry {
            display: inline-block;
            margin-bottom: 2ch;
            padding: 1vh 1vw;

            border: solid #030303aa 1px;
        }

        .winner {
            font-weight: bold;
        }

        td {
            padding-left: 5px;
            padding-right: 5px;
        }
    };

    let id = game.id;
    let standings = game
        .standings
        .into_iter()
        .map(|standing| {
            let points = standing
                .points
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_owned());

            view! {class = style,
                <tr class:winner=standing.winner>
                    <td>{ standing.player }</td>
                    <td>{ standing.civilization.unwrap_or_default() }</td>
                    <td>{ points }</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {class = style,
        <div class="entry">
            <h3>Game { id } - { game.played_at.format("%Y-%m-%d %H:%M").to_string() }</h3>
            <table>
                { standings }
            </table>
            <button on:click=move |_| on_delete(id)>Delete</button>
        </div>
    }
}
