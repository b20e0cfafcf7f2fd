use canto_core::model::{
    MAX_ALTERNATIVES, MIN_ALTERNATIVES, SpeechLanguage, TranslatorSettingsDraft,
};
use dioxus::prelude::*;

use crate::context::AppContext;

#[derive(Clone, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saved,
    Error(String),
}

fn parse_alternative_count(raw: &str) -> Option<u8> {
    raw.trim().parse().ok()
}

#[component]
pub fn SettingsView() -> Element {
    let ctx = use_context::<AppContext>();
    let initial = TranslatorSettingsDraft::from(&ctx.settings());

    let mut show_jyutping = use_signal(|| initial.show_jyutping);
    let mut alternative_count = use_signal(|| initial.alternative_count.to_string());
    let mut speech_language = use_signal(|| initial.speech_language.clone());
    let mut save_state = use_signal(|| SaveState::Idle);

    let save = move |_: MouseEvent| {
        let Some(count) = parse_alternative_count(&alternative_count()) else {
            save_state.set(SaveState::Error(format!(
                "Alternatives must be a number between {MIN_ALTERNATIVES} and {MAX_ALTERNATIVES}"
            )));
            return;
        };
        let draft = TranslatorSettingsDraft {
            show_jyutping: show_jyutping(),
            alternative_count: count,
            speech_language: speech_language(),
        };
        match ctx.update_settings(draft) {
            Ok(_) => save_state.set(SaveState::Saved),
            Err(err) => save_state.set(SaveState::Error(err.to_string())),
        }
    };

    rsx! {
        div { class: "page page--settings",
            h2 { "Translator settings" }
            label { class: "settings-row",
                input {
                    id: "settings-jyutping",
                    r#type: "checkbox",
                    checked: show_jyutping(),
                    onchange: move |evt| {
                        show_jyutping.set(evt.checked());
                        save_state.set(SaveState::Idle);
                    },
                }
                " Show Jyutping"
            }
            label { class: "settings-row",
                "Alternative expressions "
                input {
                    id: "settings-alternatives",
                    r#type: "number",
                    min: "{MIN_ALTERNATIVES}",
                    max: "{MAX_ALTERNATIVES}",
                    value: "{alternative_count}",
                    oninput: move |evt| {
                        alternative_count.set(evt.value());
                        save_state.set(SaveState::Idle);
                    },
                }
            }
            label { class: "settings-row",
                "Speech language "
                select {
                    id: "settings-language",
                    value: "{speech_language}",
                    onchange: move |evt| {
                        speech_language.set(evt.value());
                        save_state.set(SaveState::Idle);
                    },
                    for language in SpeechLanguage::ALL {
                        option {
                            value: language.key(),
                            selected: language.key() == speech_language(),
                            "{language.label()}"
                        }
                    }
                }
            }
            button {
                id: "settings-save",
                class: "button button--primary",
                r#type: "button",
                onclick: save,
                "Save"
            }
            match save_state() {
                SaveState::Idle => rsx! {},
                SaveState::Saved => rsx! {
                    p { class: "notice", "Saved" }
                },
                SaveState::Error(message) => rsx! {
                    p { class: "error", "{message}" }
                },
            }
        }
    }
}
