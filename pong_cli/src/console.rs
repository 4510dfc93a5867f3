//! Terminal stand-ins for the screen and the speakers

use game_core::{Audio, Display, Label, Screen, Sound};
use tracing::info;

/// Prints screen swaps and label changes as plain lines
#[derive(Debug, Default)]
pub struct ConsoleDisplay {
    quiet: bool,
}

impl ConsoleDisplay {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Display for ConsoleDisplay {
    fn show_screen(&mut self, screen: Screen) {
        if !self.quiet {
            println!("== {screen:?} ==");
        }
    }

    fn set_label(&mut self, label: Label, text: &str) {
        if !self.quiet {
            println!("{label:?}: {text}");
        }
    }
}

/// Logs sound cues instead of playing them
#[derive(Debug, Default)]
pub struct LogAudio;

impl Audio for LogAudio {
    fn play(&mut self, sound: Sound) {
        info!(?sound, "play");
    }

    fn stop(&mut self, sound: Sound) {
        info!(?sound, "stop");
    }
}
