use dioxus::prelude::*;

use crate::vm::TranslationVm;

use super::scripts::write_clipboard;

/// One translation, as shown on the translate and history screens.
#[component]
pub fn TranslationCard(
    vm: TranslationVm,
    on_speak: EventHandler<String>,
    on_favorite: Option<EventHandler<u64>>,
    on_export: Option<EventHandler<u64>>,
) -> Element {
    let id = vm.id;
    let star = if vm.favorite { "★" } else { "☆" };
    let speak_text = vm.speak_text.clone();
    let copy_text = vm.translated.clone();
    let mut copied = use_signal(|| false);
    let copy_label = if copied() { "Copied" } else { "Copy" };

    rsx! {
        article { class: "translation-card",
            header { class: "translation-card__header",
                span { class: "translation-original", "{vm.original}" }
                span { class: "translation-date", "{vm.created_at_str}" }
            }
            if vm.is_structured() {
                if let Some(chinese) = vm.chinese.clone() {
                    p { class: "translation-chinese", "{chinese}" }
                }
                if let Some(jyutping) = vm.jyutping.clone() {
                    p { class: "translation-jyutping", "{jyutping}" }
                }
                if !vm.key_words.is_empty() {
                    h4 { "Key words" }
                    ul { class: "key-words",
                        for word in vm.key_words.clone() {
                            li {
                                strong { "{word.word}" }
                                if let Some(pron) = word.pronunciation {
                                    span { class: "key-word-pron", " ({pron})" }
                                }
                                span { ": {word.meaning}" }
                            }
                        }
                    }
                }
                if !vm.alternatives.is_empty() {
                    h4 { "Alternatives" }
                    ul { class: "alternatives",
                        for alt in vm.alternatives.clone() {
                            li {
                                span { class: "alternative-kind", "{alt.kind}: " }
                                span { "{alt.chinese}" }
                                if let Some(jyutping) = alt.jyutping {
                                    span { class: "translation-jyutping", " {jyutping}" }
                                }
                            }
                        }
                    }
                }
            } else {
                div { class: "translation-raw", dangerous_inner_html: "{vm.raw_html}" }
            }
            footer { class: "translation-card__actions",
                button {
                    class: "button",
                    r#type: "button",
                    onclick: move |_| on_speak.call(speak_text.clone()),
                    "🔊 Speak"
                }
                button {
                    class: "button",
                    r#type: "button",
                    title: "Copy",
                    onclick: move |_| {
                        let text = copy_text.clone();
                        spawn(async move {
                            write_clipboard(&text).await;
                            copied.set(true);
                        });
                    },
                    "{copy_label}"
                }
                if let Some(on_favorite) = on_favorite {
                    button {
                        class: "button",
                        r#type: "button",
                        title: "Favorite",
                        onclick: move |_| on_favorite.call(id),
                        "{star}"
                    }
                }
                if let Some(on_export) = on_export {
                    button {
                        class: "button",
                        r#type: "button",
                        onclick: move |_| on_export.call(id),
                        "Export"
                    }
                }
            }
        }
    }
}

/// Fetch speech for `text` and play it; returns a message for the user on failure.
pub(crate) async fn speak_and_play(ctx: &crate::context::AppContext, text: &str) -> Option<String> {
    let speech = ctx.speech();
    match speech.speak(text, speech.default_voice()).await {
        Ok(audio) => ctx
            .audio_player()
            .play_mpeg(&audio)
            .err()
            .map(|err| format!("Could not play audio: {err}")),
        Err(err) => Some(err.to_string()),
    }
}
