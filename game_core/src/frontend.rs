//! Collaborators the match controller drives: sound and on-screen text.
//!
//! Rendering, audio and input devices live outside the core; these traits are
//! the only calls the core makes into them.

use crate::{Screen, Side};

/// Sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    MenuMusic, // Loops while the start screen is up
    MatchStart,
    PaddleHit,
    Goal,
}

/// Text slots on the screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    LeftScore,
    RightScore,
    LeftInstructions,
    RightInstructions,
    MenuButton,
    EndSummary,
}

impl Label {
    pub fn score(side: Side) -> Self {
        match side {
            Side::Left => Label::LeftScore,
            Side::Right => Label::RightScore,
        }
    }

    pub fn instructions(side: Side) -> Self {
        match side {
            Side::Left => Label::LeftInstructions,
            Side::Right => Label::RightInstructions,
        }
    }
}

/// Fire-and-forget audio; nothing waits for playback
pub trait Audio {
    fn play(&mut self, sound: Sound);
    fn stop(&mut self, sound: Sound);
}

pub trait Display {
    /// Swap the visible screen
    fn show_screen(&mut self, screen: Screen);
    fn set_label(&mut self, label: Label, text: &str);
}

/// Audio sink that drops everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl Audio for NullAudio {
    fn play(&mut self, _sound: Sound) {}
    fn stop(&mut self, _sound: Sound) {}
}

/// Display that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl Display for NullDisplay {
    fn show_screen(&mut self, _screen: Screen) {}
    fn set_label(&mut self, _label: Label, _text: &str) {}
}
