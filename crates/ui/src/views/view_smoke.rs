use canto_core::model::TranslatorSettings;

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_links_and_question_count() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Canto Runner"), "missing title in {html}");
    assert!(html.contains("Play the quiz (5 questions)"), "missing quiz link in {html}");
    assert!(html.contains("Open the translator"), "missing translator link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_starts_on_home_stage() {
    let mut harness = setup_view_harness(ViewKind::Game);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Kitty Quiz Runner"), "missing heading in {html}");
    assert!(html.contains("Start"), "missing start button in {html}");
    assert!(html.contains("How to Play"), "missing help button in {html}");
    assert!(!html.contains("answer-block"), "board rendered too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_empty_then_entries() {
    let mut harness = setup_view_harness(ViewKind::History);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("No translations yet."), "missing empty state in {html}");

    let mut harness = setup_view_harness(ViewKind::History);
    harness
        .translator
        .translate_text("good morning", &TranslatorSettings::default())
        .await
        .expect("translate");
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("早晨"), "missing translation in {html}");
    assert!(html.contains("zou2 san4"), "missing jyutping in {html}");
    assert!(html.contains("good morning"), "missing original in {html}");
    assert!(html.contains("Export"), "missing export button in {html}");
    assert!(html.contains("Copy"), "missing copy button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn translate_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Translate);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Translate to Cantonese"), "missing heading in {html}");
    assert!(html.contains("translate-submit"), "missing submit in {html}");
    assert!(html.contains("Transcribe"), "missing transcribe in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn settings_view_smoke_renders_defaults() {
    let mut harness = setup_view_harness(ViewKind::Settings);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Show Jyutping"), "missing toggle in {html}");
    assert!(html.contains("Cantonese (粵語)"), "missing language option in {html}");
    assert!(html.contains("settings-alternatives"), "missing count input in {html}");
}
