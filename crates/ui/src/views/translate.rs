use canto_core::model::TranslationId;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{TranslationVm, map_translation};

use super::translation_card::{TranslationCard, speak_and_play};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    Idle,
    Transcribing,
    Translating,
}

impl Pending {
    /// Claim the form for `next`; false while another request is in flight.
    fn try_begin(&mut self, next: Pending) -> bool {
        if *self != Pending::Idle {
            return false;
        }
        *self = next;
        true
    }
}

#[component]
pub fn TranslateView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut text = use_signal(String::new);
    let mut audio_path = use_signal(String::new);
    let mut pending = use_signal(|| Pending::Idle);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    let mut result = use_signal(|| None::<TranslationVm>);

    let translate = {
        let ctx = ctx.clone();
        move |_: MouseEvent| {
            if !pending.with_mut(|p| p.try_begin(Pending::Translating)) {
                return;
            }
            error.set(None);
            notice.set(None);
            let ctx = ctx.clone();
            let input = text();
            spawn(async move {
                let settings = ctx.settings();
                match ctx.translator().translate_text(&input, &settings).await {
                    Ok(entry) => result.set(Some(map_translation(&entry, &settings))),
                    Err(err) => error.set(Some(err.to_string())),
                }
                pending.set(Pending::Idle);
            });
        }
    };

    let transcribe = {
        let ctx = ctx.clone();
        move |_: MouseEvent| {
            if !pending.with_mut(|p| p.try_begin(Pending::Transcribing)) {
                return;
            }
            error.set(None);
            let ctx = ctx.clone();
            let path = audio_path().trim().to_string();
            spawn(async move {
                match tokio::fs::read(&path).await {
                    Ok(audio) => {
                        let settings = ctx.settings();
                        match ctx.translator().transcribe(audio, &settings).await {
                            Ok(transcript) => text.set(transcript),
                            Err(err) => error.set(Some(err.to_string())),
                        }
                    }
                    Err(err) => error.set(Some(format!("Could not read {path}: {err}"))),
                }
                pending.set(Pending::Idle);
            });
        }
    };

    let on_speak = {
        let ctx = ctx.clone();
        use_callback(move |spoken: String| {
            let ctx = ctx.clone();
            spawn(async move {
                error.set(speak_and_play(&ctx, &spoken).await);
            });
        })
    };

    let on_favorite = {
        let ctx = ctx.clone();
        use_callback(move |id: u64| {
            let ctx = ctx.clone();
            spawn(async move {
                match ctx.history().toggle_favorite(TranslationId::new(id)).await {
                    Ok(entry) => result.set(Some(map_translation(&entry, &ctx.settings()))),
                    Err(err) => error.set(Some(err.to_string())),
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
                match ctx
                    .history()
                    .export_to_dir(TranslationId::new(id), &dir)
                    .await
                {
                    Ok(path) => notice.set(Some(format!("Saved {}", path.display()))),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let busy = pending() != Pending::Idle;
    let translate_label = if pending() == Pending::Translating {
        "Translating..."
    } else {
        "Translate"
    };
    let transcribe_label = if pending() == Pending::Transcribing {
        "Transcribing..."
    } else {
        "Transcribe"
    };

    rsx! {
        div { class: "page page--translate",
            h2 { "Translate to Cantonese" }
            section { class: "translate-input",
                textarea {
                    id: "translate-text",
                    rows: "4",
                    placeholder: "Type English text, or transcribe a recording below",
                    value: "{text}",
                    oninput: move |evt| text.set(evt.value()),
                }
                button {
                    id: "translate-submit",
                    class: "button button--primary",
                    r#type: "button",
                    disabled: busy,
                    onclick: translate,
                    "{translate_label}"
                }
            }
            section { class: "translate-audio",
                input {
                    id: "translate-audio-path",
                    r#type: "text",
                    placeholder: "Path to a .wav recording",
                    value: "{audio_path}",
                    oninput: move |evt| audio_path.set(evt.value()),
                }
                button {
                    class: "button",
                    r#type: "button",
                    disabled: busy || audio_path().trim().is_empty(),
                    onclick: transcribe,
                    "{transcribe_label}"
                }
            }
            if let Some(message) = error() {
                p { class: "error", "{message}" }
            }
            if let Some(message) = notice() {
                p { class: "notice", "{message}" }
            }
            if let Some(vm) = result() {
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
