use leptos::*;
use leptos_router::A;

#[leptos::component]
pub fn top_bar() -> impl leptos::IntoView {
    let style = stylers::style! {
        "TopBar",
        .bar {
            width: 100%;
            height: 4vh;
            padding-top: 0.5vh;
            padding-bottom: 0.5vh;

            background-color: #28282f;
            color: #d5d5d5;

            display: grid;
            grid-template-columns: 20vw auto 8vw 8vw;
        }

        .elem {
            display: inline-block;
            margin-top: auto;
            margin-bottom: auto;
        }

        .logo {
            color: #d5d5d5;
            font-size: 24px;
            padding: 0px;
            margin: 0px;
            margin-left: 1vw;
        }

        .link {
            color: #d5d5d5;
        }
    };

    view! {class = style,
        <div class="bar">
            <A href="/">
                <p class="logo">7 Wonders Tracker</p>
            </A>

            <div class="elem" style="grid-column-start: 3">
                <A href="/"><span class="link">Games</span></A>
            </div>

            <div class="elem" style="grid-column-start: 4">
                <A href="/stats"><span class="link">Stats</span></A>
            </div>
        </div>
    }
}
