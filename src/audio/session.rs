use std::path::Path;

use super::{AudioConfig, AudioTrack, SilentTrack};

/// Owns the soundtrack for the lifetime of the program
pub struct AudioSession {
    track: Box<dyn AudioTrack>,
}

impl AudioSession {
    pub fn new(track: Box<dyn AudioTrack>) -> Self {
        Self { track }
    }

    pub fn silent() -> Self {
        Self::new(Box::new(SilentTrack::default()))
    }

    /// Pick a backend from configuration, degrading to silence on failure
    pub fn from_config(config: &AudioConfig) -> Self {
        if !config.enabled {
            tracing::info!("audio muted");
            return Self::silent();
        }
        match &config.track {
            Some(path) => Self::open_track(path, config.volume),
            None => {
                tracing::debug!("no soundtrack configured");
                Self::silent()
            }
        }
    }

    #[cfg(feature = "audio")]
    fn open_track(path: &Path, volume: f32) -> Self {
        match super::rodio_track::LoopingTrack::open(path, volume) {
            Ok(track) => {
                tracing::info!(path = %path.display(), "soundtrack loaded");
                Self::new(Box::new(track))
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = ?err, "soundtrack unavailable, playing silently");
                Self::silent()
            }
        }
    }

    #[cfg(not(feature = "audio"))]
    fn open_track(path: &Path, _volume: f32) -> Self {
        tracing::warn!(
            path = %path.display(),
            "built without the `audio` feature, playing silently"
        );
        Self::silent()
    }

    pub fn is_playing(&self) -> bool {
        self.track.is_playing()
    }

    /// A round began (first start or restart)
    pub fn round_started(&mut self) {
        tracing::debug!("audio: round started");
        self.track.start();
    }

    pub fn paused(&mut self) {
        if self.track.is_playing() {
            tracing::debug!("audio: paused");
            self.track.pause();
        }
    }

    pub fn resumed(&mut self) {
        if !self.track.is_playing() {
            tracing::debug!("audio: resumed");
            self.track.start();
        }
    }

    pub fn game_over(&mut self) {
        tracing::debug!("audio: game over");
        self.track.pause();
    }

    /// Left the play screen; the next round starts the track from the top
    pub fn exit_to_menu(&mut self) {
        tracing::debug!("audio: stopped");
        self.track.stop();
    }
}

impl Default for AudioSession {
    fn default() -> Self {
        Self::silent()
    }
}

impl Drop for AudioSession {
    fn drop(&mut self) {
        self.track.stop();
    }
}
