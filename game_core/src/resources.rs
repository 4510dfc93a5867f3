use crate::{PaddleDirection, Side, WatchKind};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Intersection-enter notification delivered to an observer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    pub observer: hecs::Entity,
    pub kind: WatchKind,
}

/// Events that occurred during one `step` call
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub intersections: Vec<Intersection>,
    pub paddle_hits: Vec<Side>,
    pub wall_bounces: u32,
    pub served: bool,
    pub goal: Option<Side>, // Side that scored
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.intersections.clear();
        self.paddle_hits.clear();
        self.wall_bounces = 0;
        self.served = false;
        self.goal = None;
    }
}

/// Logical input action a key code can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Side, PaddleDirection),
    CycleSize(Side),
    Serve,
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub action: Action,
    pub pressed: bool,
}

/// Input actions waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push(&mut self, action: Action, pressed: bool) {
        self.inputs.push(InputEvent { action, pressed });
    }

    pub fn pop_inputs(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.inputs)
    }
}
