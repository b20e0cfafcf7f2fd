mod game;
mod history;
mod home;
mod scripts;
mod settings;
mod state;
mod translate;
mod translation_card;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use game::GameView;
pub use history::HistoryView;
pub use home::HomeView;
pub use settings::SettingsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use translate::TranslateView;
pub use translation_card::TranslationCard;
