use canto_core::model::TranslationId;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{TranslationVm, map_translations};

use super::translation_card::{TranslationCard, speak_and_play};

#[derive(Clone, Debug, PartialEq)]
struct HistoryData {
    items: Vec<TranslationVm>,
}

#[component]
pub fn HistoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let history = ctx.history();
    let mut notice = use_signal(|| None::<String>);
    let mut favorites_only = use_signal(|| false);

    let mut resource = {
        let ctx = ctx.clone();
        use_resource(move || {
            let history = history.clone();
            let settings = ctx.settings();
            async move {
                let entries = history.list().await.map_err(|_| ViewError::Unknown)?;
                Ok::<_, ViewError>(HistoryData {
                    items: map_translations(&entries, &settings),
                })
            }
        })
    };

    let on_favorite = {
        let ctx = ctx.clone();
        use_callback(move |id: u64| {
            let ctx = ctx.clone();
            spawn(async move {
                match ctx.history().toggle_favorite(TranslationId::new(id)).await {
                    Ok(_) => resource.restart(),
                    Err(err) => notice.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_export = {
        let ctx = ctx.clone();
        use_callback(move |id: u64| {
            let ctx = ctx.clone();
            spawn(async move {
                let dir = ctx.export_dir();
                let message = match ctx
                    .history()
                    .export_to_dir(TranslationId::new(id), &dir)
                    .await
                {
                    Ok(path) => format!("Saved {}", path.display()),
                    Err(err) => err.to_string(),
                };
                notice.set(Some(message));
            });
        })
    };

    let on_clear = {
        let ctx = ctx.clone();
        move |_: MouseEvent| {
            let ctx = ctx.clone();
            spawn(async move {
                match ctx.history().clear().await {
                    Ok(()) => {
                        notice.set(None);
                        resource.restart();
                    }
                    Err(err) => notice.set(Some(err.to_string())),
                }
            });
        }
    };

    let on_speak = {
        let ctx = ctx.clone();
        use_callback(move |spoken: String| {
            let ctx = ctx.clone();
            spawn(async move {
                notice.set(speak_and_play(&ctx, &spoken).await);
            });
        })
    };

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page page--history",
            h2 { "History" }
            div { class: "history-toolbar",
                label {
                    input {
                        r#type: "checkbox",
                        checked: favorites_only(),
                        onchange: move |evt| favorites_only.set(evt.checked()),
                    }
                    " Favorites only"
                }
                button {
                    class: "button button--danger",
                    r#type: "button",
                    onclick: on_clear,
                    "Clear history"
                }
            }
            if let Some(message) = notice() {
                p { class: "notice", "{message}" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => {
                    let items: Vec<TranslationVm> = data
                        .items
                        .into_iter()
                        .filter(|item| !favorites_only() || item.favorite)
                        .collect();
                    rsx! {
                        if items.is_empty() {
                            p { "No translations yet." }
                        } else {
                            div { class: "history-list",
                                for vm in items {
                                    TranslationCard {
                                        vm,
                                        on_speak,
                                        on_favorite,
                                        on_export,
                                    }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}
