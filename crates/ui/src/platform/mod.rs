use std::sync::Arc;

mod desktop;

/// Plays synthesized speech.
pub trait UiAudioPlayer: Send + Sync {
    /// Play MPEG audio bytes.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the audio cannot be handed to a player.
    fn play_mpeg(&self, audio: &[u8]) -> std::io::Result<()>;
}

pub type AudioPlayerRef = Arc<dyn UiAudioPlayer>;

pub use desktop::DesktopAudioPlayer;
