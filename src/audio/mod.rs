//! Background soundtrack.
//!
//! The game core never touches audio. [`AudioSession`] is owned by the
//! front-end and receives lifecycle notifications (round start, pause,
//! resume, game over, back to menu), turning them into commands on an
//! [`AudioTrack`] backend.

#[cfg(feature = "audio")]
pub mod rodio_track;
pub mod session;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub use session::AudioSession;

/// A looping piece of music that can be started, paused and stopped
pub trait AudioTrack {
    /// Start or resume playback from where it was paused
    fn start(&mut self);
    fn pause(&mut self);
    /// Stop playback and rewind
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
}

/// Backend used when audio is disabled or no device is available
#[derive(Debug, Default)]
pub struct SilentTrack {
    playing: bool,
}

impl AudioTrack for SilentTrack {
    fn start(&mut self) {
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn stop(&mut self) {
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

/// Audio settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    /// Music file to loop (any format the `audio` feature can decode)
    pub track: Option<PathBuf>,
    /// Output volume (0.0 to 1.0)
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            track: None,
            volume: 0.8,
        }
    }
}

impl AudioConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(ConfigError::Volume(self.volume));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_track_tracks_state() {
        let mut track = SilentTrack::default();
        assert!(!track.is_playing());
        track.start();
        assert!(track.is_playing());
        track.pause();
        assert!(!track.is_playing());
        track.start();
        track.stop();
        assert!(!track.is_playing());
    }

    #[test]
    fn test_volume_validation() {
        assert!(AudioConfig::default().validate().is_ok());

        let config = AudioConfig {
            volume: 1.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Volume(1.5)));
    }
}
