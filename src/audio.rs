// Background music: silent until the first click, then loops forever.
// Best effort: no sound card or no mp3 just means a quiet game.
// The player itself only exists with the `music` feature.

#[cfg(feature = "music")]
use std::{fs::File, io::BufReader, path::Path};

#[cfg(feature = "music")]
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

#[cfg(feature = "music")]
use crate::error::Error;
use crate::types::PointerInput;

pub const MUSIC_FILE: &str = "music1.mp3";

/// Decides on which frame the music starts: the first mouse press.
#[derive(Debug, Default)]
pub struct MusicCue {
    started: bool,
}

impl MusicCue {
    /// True exactly once, on the first frame the button goes down.
    pub fn on_frame(&mut self, input: &PointerInput) -> bool {
        if self.started || !input.button.pressed {
            return false;
        }
        self.started = true;
        true
    }
}

#[cfg(feature = "music")]
pub struct Music {
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    sink: Sink,
    cue: MusicCue,
}

#[cfg(feature = "music")]
impl Music {
    /// Open the default output device and queue the track, paused.
    /// Visual: nothing; you hear it after the first click.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| Error::Audio(format!("Output device: {e}")))?;
        let sink = Sink::try_new(&handle).map_err(|e| Error::Audio(format!("Sink: {e}")))?;

        let file = File::open(path)
            .map_err(|e| Error::Audio(format!("Open {}: {e}", path.display())))?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| Error::Audio(format!("Decode {}: {e}", path.display())))?;

        sink.pause();
        sink.append(source.repeat_infinite());
        log::debug!("Music queued from {}", path.display());

        Ok(Self { _stream: stream, _handle: handle, sink, cue: MusicCue::default() })
    }

    /// Call once per frame with this frame's pointer state.
    pub fn update(&mut self, input: &PointerInput) {
        if self.cue.on_frame(input) {
            log::info!("Music started");
            self.sink.play();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ButtonState;

    fn frame(pressed: bool) -> PointerInput {
        PointerInput {
            position: None,
            button: ButtonState { pressed, held: pressed, released: false },
        }
    }

    #[test]
    fn cue_waits_for_first_press() {
        let mut cue = MusicCue::default();
        assert!(!cue.on_frame(&frame(false)));
        assert!(!cue.on_frame(&frame(false)));
        assert!(cue.on_frame(&frame(true)));
    }

    #[test]
    fn cue_fires_only_once() {
        let mut cue = MusicCue::default();
        assert!(cue.on_frame(&frame(true)));
        assert!(!cue.on_frame(&frame(true)));
        assert!(!cue.on_frame(&frame(false)));
        assert!(!cue.on_frame(&frame(true)));
    }
}
