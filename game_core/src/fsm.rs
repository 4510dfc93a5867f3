//! Screen State Machine
//!
//! Start menu, match in play, end-of-match summary.

/// Screens the game can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Start,
    Play,
    End,
}

/// Actions that trigger screen transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    /// Menu button: play from the start screen, back to the menu from the end screen
    Confirm,
    GameOver,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: Screen,
    pub to_state: Screen,
    pub action: MatchAction,
}

/// Screen Finite State Machine
#[derive(Debug, Clone)]
pub struct ScreenFsm {
    state: Screen,
}

impl ScreenFsm {
    pub fn new() -> Self {
        Self {
            state: Screen::Start,
        }
    }

    /// Get current state
    pub fn state(&self) -> Screen {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Jump straight to a screen, bypassing the transition table
    pub fn enter(&mut self, state: Screen) {
        self.state = state;
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: MatchAction) -> Option<Screen> {
        match (self.state, action) {
            (Screen::Start, MatchAction::Confirm) => Some(Screen::Play),
            (Screen::Play, MatchAction::GameOver) => Some(Screen::End),
            (Screen::End, MatchAction::Confirm) => Some(Screen::Start),

            // Invalid transition
            _ => None,
        }
    }

    /// Check if a match is in play
    pub fn is_playing(&self) -> bool {
        self.state == Screen::Play
    }

    /// Check if in game over state
    pub fn is_game_over(&self) -> bool {
        self.state == Screen::End
    }
}

impl Default for ScreenFsm {
    fn default() -> Self {
        Self::new()
    }
}
