mod game_vm;
mod markdown_vm;
mod time_fmt;
mod translation_vm;

pub use game_vm::{
    BOARD_HEIGHT, BOARD_WIDTH, BlockVm, BoardVm, GameController, GameKey, LANE_GAP, PLAYER_X,
    SessionStage, lane_y, result_headline,
};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use time_fmt::format_datetime;
pub use translation_vm::{
    AlternativeVm, KeyWordVm, TranslationVm, map_translation, map_translations,
};
