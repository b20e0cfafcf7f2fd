use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{GameView, HistoryView, HomeView, SettingsView, TranslateView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/game", GameView)] Game {},
        #[route("/translate", TranslateView)] Translate {},
        #[route("/history", HistoryView)] History {},
        #[route("/settings", SettingsView)] Settings {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Canto Runner" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Game {}, "Quiz Runner" } }
                li { Link { to: Route::Translate {}, "Translate" } }
                li { Link { to: Route::History {}, "History" } }
                li { Link { to: Route::Settings {}, "Settings" } }
            }
        }
    }
}
