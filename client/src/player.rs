use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use tracing::{debug, info, warn};

use crate::buffer::AudioBlob;
use crate::error::PlayerError;

/// Playback target for assembled audio. Holds at most one source.
pub trait AudioPlayer {
    fn has_source(&self) -> bool;

    /// Stop playback if anything is playing.
    fn stop(&mut self);

    /// Drop the current source.
    fn clear_source(&mut self);

    /// Replace the current source with `blob`.
    fn load(&mut self, blob: AudioBlob) -> Result<(), PlayerError>;

    /// Start playing the current source.
    fn play(&mut self) -> Result<(), PlayerError>;
}

/// Writes audio to a file and optionally hands it to an external player
/// command (e.g. `mpv --no-video`).
pub struct FilePlayer {
    path: PathBuf,
    command: Option<String>,
    source: Option<PathBuf>,
    child: Option<Child>,
}

impl FilePlayer {
    pub fn new(path: impl Into<PathBuf>, command: Option<String>) -> Self {
        Self {
            path: path.into(),
            command,
            source: None,
            child: None,
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn spawn(command: &str, source: &Path) -> Result<Child, PlayerError> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or_else(|| {
            PlayerError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "empty player command",
            ))
        })?;
        let child = Command::new(program)
            .args(parts)
            .arg(source)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .spawn()?;
        Ok(child)
    }
}

impl AudioPlayer for FilePlayer {
    fn has_source(&self) -> bool {
        self.source.is_some()
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill() {
                debug!("player already exited: {e}");
            }
            let _ = child.wait();
        }
    }

    fn clear_source(&mut self) {
        self.source = None;
    }

    fn load(&mut self, blob: AudioBlob) -> Result<(), PlayerError> {
        std::fs::write(&self.path, &blob.bytes)?;
        debug!(bytes = blob.bytes.len(), path = %self.path.display(), "audio loaded");
        self.source = Some(self.path.clone());
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        let source = self.source.clone().ok_or(PlayerError::NoSource)?;
        match &self.command {
            Some(command) => {
                self.child = Some(Self::spawn(command, &source)?);
                info!("Playing {} with {command}", source.display());
            }
            None => {
                info!("Audio written to {}", source.display());
            }
        }
        Ok(())
    }
}

impl Drop for FilePlayer {
    fn drop(&mut self) {
        if self.child.is_some() {
            warn!("stopping player on shutdown");
            self.stop();
        }
    }
}
