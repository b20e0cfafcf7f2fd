use std::path::{Path, PathBuf};
use std::process::{Child, Command};

use tracing::{debug, warn};

use super::UiAudioPlayer;

/// Hands speech clips to the system player through one reusable temp file.
pub struct DesktopAudioPlayer {
    clip: PathBuf,
}

impl DesktopAudioPlayer {
    #[must_use]
    pub fn new(dir: &Path) -> Self {
        Self {
            clip: dir.join(format!("canto-speech-{}.mp3", std::process::id())),
        }
    }

    #[must_use]
    pub fn clip_path(&self) -> &Path {
        &self.clip
    }
}

impl Default for DesktopAudioPlayer {
    fn default() -> Self {
        Self::new(&std::env::temp_dir())
    }
}

impl Drop for DesktopAudioPlayer {
    fn drop(&mut self) {
        if let Err(err) = std::fs::remove_file(&self.clip) {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.clip.display(), %err, "could not remove speech clip");
            }
        }
    }
}

impl UiAudioPlayer for DesktopAudioPlayer {
    fn play_mpeg(&self, audio: &[u8]) -> std::io::Result<()> {
        std::fs::write(&self.clip, audio)?;
        debug!(path = %self.clip.display(), bytes = audio.len(), "playing speech clip");
        let opener = open_with_system(&self.clip)?;
        reap(opener);
        Ok(())
    }
}

fn open_with_system(path: &Path) -> std::io::Result<Child> {
    #[cfg(target_os = "macos")]
    let child = Command::new("open").arg(path).spawn()?;
    #[cfg(target_os = "windows")]
    let child = Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .spawn()?;
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let child = Command::new("xdg-open").arg(path).spawn()?;
    Ok(child)
}

/// Wait for the opener off the UI thread so it does not linger as a zombie.
fn reap(mut child: Child) {
    std::thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => warn!(%status, "system player exited with an error"),
        Ok(_) => {}
        Err(err) => warn!(%err, "could not wait for system player"),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_clip_path_per_player() {
        let dir = tempfile::tempdir().unwrap();
        let player = DesktopAudioPlayer::new(dir.path());
        assert!(player.clip_path().starts_with(dir.path()));
        assert_eq!(
            player.clip_path().extension().and_then(|e| e.to_str()),
            Some("mp3")
        );
    }

    #[test]
    fn clip_is_removed_when_player_drops() {
        let dir = tempfile::tempdir().unwrap();
        let player = DesktopAudioPlayer::new(dir.path());
        let clip = player.clip_path().to_path_buf();
        std::fs::write(&clip, b"ID3").unwrap();
        drop(player);
        assert!(!clip.exists());

        drop(DesktopAudioPlayer::new(dir.path()));
    }
}
