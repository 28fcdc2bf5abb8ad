use leptos::*;
use leptos_router::*;

use frontend::{Homepage, Stats, TopBar};

fn main() {
    mount_to_body(move || {
        view! {
            <Router>
                <nav>
                    <TopBar />
                </nav>
                <main>
                    <Routes>
                        <Route path="/" view=Homepage />
                        <Route path="/stats" view=Stats />
                    </Routes>
                </main>
            </Router>
        }
    })
}
