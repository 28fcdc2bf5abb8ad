use leptos::*;

mod navbar;
pub use navbar::TopBar;

pub mod homepage;
pub use homepage::Homepage;

pub mod stats;
pub use stats::Stats;

pub async fn get_json<T>(url: &str) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let res = reqwasm::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !res.ok() {
        return Err(format!("Loading {} failed with status {}", url, res.status()));
    }

    res.json::<T>().await.map_err(|e| e.to_string())
}

pub async fn add_game(game: &common::NewGame) -> Result<common::GameCreated, String> {
    let body = serde_json::to_string(game).map_err(|e| e.to_string())?;

    let res = reqwasm::http::Request::post("/api/games/add")
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if res.status() != 201 {
        return Err(format!("Adding the game failed with status {}", res.status()));
    }

    res.json().await.map_err(|e| e.to_string())
}

pub async fn delete_game(id: i32) -> Result<(), String> {
    let res = reqwasm::http::Request::delete(&format!("/api/games/{}", id))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    match res.status() {
        204 => Ok(()),
        404 => Err(format!("Game {} does not exist anymore", id)),
        other => Err(format!("Deleting game {} failed with status {}", id, other)),
    }
}

#[leptos::component]
pub fn error_message(message: String) -> impl leptos::IntoView {
    let style = stylers::style! {
        "ErrorMessage",
        .error {
            color: #e04848;
        }
    };

    view! {class = style,
        <p class="error">{ message }</p>
    }
}
