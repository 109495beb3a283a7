//! Looping soundtrack on the default output device.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use super::AudioTrack;

pub struct LoopingTrack {
    path: PathBuf,
    volume: f32,
    // Dropping the stream silences every sink created from it
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Sink,
    stopped: bool,
}

impl LoopingTrack {
    /// Open the output device and check that `path` decodes
    pub fn open(path: &Path, volume: f32) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("Failed to open audio output device")?;
        let sink = Sink::try_new(&handle).context("Failed to create audio sink")?;
        sink.pause();
        sink.set_volume(volume);
        sink.append(Self::decode(path)?);

        Ok(Self {
            path: path.to_path_buf(),
            volume,
            _stream: stream,
            handle,
            sink,
            stopped: false,
        })
    }

    fn decode(path: &Path) -> Result<rodio::source::Repeat<Decoder<BufReader<File>>>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open soundtrack {}", path.display()))?;
        let decoder = Decoder::new(BufReader::new(file))
            .with_context(|| format!("Failed to decode soundtrack {}", path.display()))?;
        Ok(decoder.repeat_infinite())
    }

    /// Fresh sink queued with the track from the top
    fn rewind(&mut self) -> Result<()> {
        let sink = Sink::try_new(&self.handle).context("Failed to create audio sink")?;
        sink.pause();
        sink.set_volume(self.volume);
        sink.append(Self::decode(&self.path)?);
        self.sink = sink;
        Ok(())
    }
}

impl AudioTrack for LoopingTrack {
    fn start(&mut self) {
        if self.stopped {
            if let Err(err) = self.rewind() {
                tracing::warn!(error = ?err, "could not restart soundtrack");
                return;
            }
            self.stopped = false;
        }
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn stop(&mut self) {
        self.sink.stop();
        self.stopped = true;
    }

    fn is_playing(&self) -> bool {
        !self.stopped && !self.sink.is_paused()
    }
}
