use std::time::{Duration, Instant};

use canto_core::model::RoundResult;
use canto_core::runner::HudField;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{
    BOARD_HEIGHT, BOARD_WIDTH, GameController, GameKey, PLAYER_X, SessionStage, lane_y,
    result_headline,
};

/// Roughly sixty frames per second.
const FRAME: Duration = Duration::from_millis(16);

/// Map a key press to a game key. OS auto-repeat is not a new press.
fn key_to_game_key(key: &Key, repeating: bool) -> Option<GameKey> {
    if repeating {
        return None;
    }
    match key {
        Key::ArrowUp => Some(GameKey::Up),
        Key::ArrowDown => Some(GameKey::Down),
        Key::ArrowRight => Some(GameKey::Confirm),
        _ => None,
    }
}

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut controller = use_signal(|| GameController::new(ctx.question_bank()));
    let mut show_help = use_signal(|| false);

    use_future(move || async move {
        let mut interval = tokio::time::interval(FRAME);
        let mut last = Instant::now();
        loop {
            interval.tick().await;
            let now = Instant::now();
            let delta = now.duration_since(last).as_secs_f64();
            last = now;
            if controller.peek().stage() == SessionStage::Playing {
                controller.write().tick(delta);
            }
        }
    });

    let stage = controller.read().stage();

    rsx! {
        div { class: "page page--game",
            match stage {
                SessionStage::Home => rsx! {
                    GameHome {
                        show_help: show_help(),
                        on_start: move |()| controller.write().start(),
                        on_help: move |()| show_help.set(!show_help()),
                    }
                },
                SessionStage::Playing => rsx! {
                    GameBoard {
                        controller,
                        on_key: move |key: GameKey| controller.write().press(key),
                    }
                },
                SessionStage::Result(result) => rsx! {
                    GameResult {
                        result,
                        on_again: move |()| controller.write().start(),
                        on_home: move |()| controller.write().home(),
                    }
                },
            }
        }
    }
}

#[component]
fn GameHome(show_help: bool, on_start: EventHandler<()>, on_help: EventHandler<()>) -> Element {
    rsx! {
        section { class: "game-home",
            h1 { "Kitty Quiz Runner" }
            button {
                id: "game-start",
                class: "button button--primary",
                r#type: "button",
                onclick: move |_| on_start.call(()),
                "Start"
            }
            button {
                class: "button",
                r#type: "button",
                onclick: move |_| on_help.call(()),
                "How to Play"
            }
            if show_help {
                p { class: "game-help", "Use ↑↓ to move and → to select the answer" }
            }
        }
    }
}

#[component]
fn GameBoard(controller: Signal<GameController>, on_key: EventHandler<GameKey>) -> Element {
    let controller = controller.read();
    let board = controller.board();
    let player_top = lane_y(board.player_lane());
    let blocks = board.blocks().to_vec();
    let timer = board.hud(HudField::Timer).to_string();
    let score = board.hud(HudField::Score).to_string();
    let lives = board.hud(HudField::Lives).to_string();
    let question = board.hud(HudField::Question).to_string();

    rsx! {
        div {
            class: "game-board",
            tabindex: "0",
            autofocus: true,
            style: "width: {BOARD_WIDTH}px; height: {BOARD_HEIGHT}px;",
            onkeydown: move |evt: KeyboardEvent| {
                if let Some(key) = key_to_game_key(&evt.key(), evt.is_auto_repeating()) {
                    evt.prevent_default();
                    on_key.call(key);
                }
            },
            div { class: "hud hud--timer", "{timer}" }
            div { class: "hud hud--score", "{score}" }
            div { class: "hud hud--lives", "{lives}" }
            div { class: "hud hud--question", "{question}" }
            for block in blocks {
                div {
                    key: "{block.id.value()}",
                    class: "answer-block",
                    style: "left: {block.x}px; top: {lane_y(block.lane)}px;",
                    "{block.label}"
                }
            }
            div {
                class: "player",
                style: "left: {PLAYER_X}px; top: {player_top}px;",
            }
        }
    }
}

#[component]
fn GameResult(
    result: RoundResult,
    on_again: EventHandler<()>,
    on_home: EventHandler<()>,
) -> Element {
    let headline = result_headline(result.outcome);
    rsx! {
        section { class: "game-result",
            h1 { "{headline}" }
            p { "Score: {result.score}" }
            p { "Lives left: {result.lives}" }
            button {
                id: "game-again",
                class: "button button--primary",
                r#type: "button",
                onclick: move |_| on_again.call(()),
                "Play Again"
            }
            button {
                class: "button",
                r#type: "button",
                onclick: move |_| on_home.call(()),
                "Back to Home"
            }
        }
    }
}
