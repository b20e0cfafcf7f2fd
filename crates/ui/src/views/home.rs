use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let question_count = ctx.question_bank().len();

    rsx! {
        div { class: "page page--home",
            h2 { "Canto Runner" }
            p { "Dodge into the right lane before the answers reach you, then practise your Cantonese." }
            div { class: "home-actions",
                Link { class: "button", to: Route::Game {}, "Play the quiz ({question_count} questions)" }
                Link { class: "button", to: Route::Translate {}, "Open the translator" }
            }
        }
    }
}
