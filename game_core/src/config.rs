use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Action, GameError, PaddleDirection, Params, Side};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub table_half_depth: f32,
    pub wall_z: f32,
    pub goal_x: f32,
    pub goal_width: f32,
    pub goal_depth: f32,
    pub paddle_x: f32,
    pub paddle_width: f32,
    pub paddle_base_depth: f32,
    pub paddle_size_modifiers: [f32; 3],
    pub paddle_speed: f32,
    pub ball_diameter: f32,
    pub ball_speed_initial: f32,
    pub bounce_speedup_divisor: f32,
    pub ball_reset_x: f32,
    pub win_score: u8,
    pub bindings: KeyBindings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_half_depth: Params::TABLE_HALF_DEPTH,
            wall_z: Params::WALL_Z,
            goal_x: Params::GOAL_X,
            goal_width: Params::GOAL_WIDTH,
            goal_depth: Params::GOAL_DEPTH,
            paddle_x: Params::PADDLE_X,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_base_depth: Params::PADDLE_BASE_DEPTH,
            paddle_size_modifiers: Params::PADDLE_SIZE_MODIFIERS,
            paddle_speed: Params::PADDLE_SPEED,
            ball_diameter: Params::BALL_DIAMETER,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            bounce_speedup_divisor: Params::BOUNCE_SPEEDUP_DIVISOR,
            ball_reset_x: Params::BALL_RESET_X,
            win_score: Params::WIN_SCORE,
            bindings: KeyBindings::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ball_radius(&self) -> f32 {
        self.ball_diameter / 2.0
    }

    /// Half of the paddle's z extent at a given size level
    pub fn paddle_half_depth(&self, size_index: usize) -> f32 {
        let modifiers = &self.paddle_size_modifiers;
        0.5 * self.paddle_base_depth * modifiers[size_index % modifiers.len()]
    }

    pub fn paddle_half_extents(&self, size_index: usize) -> Vec2 {
        Vec2::new(self.paddle_width / 2.0, self.paddle_half_depth(size_index))
    }

    /// Check that the geometry is consistent and the bindings are unambiguous
    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("table_half_depth", self.table_half_depth),
            ("goal_width", self.goal_width),
            ("goal_depth", self.goal_depth),
            ("paddle_width", self.paddle_width),
            ("paddle_base_depth", self.paddle_base_depth),
            ("paddle_speed", self.paddle_speed),
            ("ball_diameter", self.ball_diameter),
            ("ball_speed_initial", self.ball_speed_initial),
            ("bounce_speedup_divisor", self.bounce_speedup_divisor),
        ];
        for (field, value) in positive {
            ensure(
                value.is_finite() && value > 0.0,
                field,
                format!("must be a positive number, got {value}"),
            )?;
        }
        for modifier in self.paddle_size_modifiers {
            ensure(
                modifier.is_finite() && modifier > 0.0,
                "paddle_size_modifiers",
                format!("must all be positive, got {modifier}"),
            )?;
        }

        ensure(
            self.wall_z > 0.0 && self.wall_z + self.ball_radius() <= self.table_half_depth,
            "wall_z",
            format!(
                "ball limit {} must keep the ball inside the table half depth {}",
                self.wall_z, self.table_half_depth
            ),
        )?;
        ensure(
            self.paddle_x > 0.0 && self.paddle_x < self.goal_x,
            "paddle_x",
            format!(
                "paddle line {} must lie between the center and the goal line {}",
                self.paddle_x, self.goal_x
            ),
        )?;
        ensure(
            self.ball_reset_x >= 0.0
                && self.ball_reset_x + self.ball_radius() <= self.paddle_x - self.paddle_width / 2.0,
            "ball_reset_x",
            format!(
                "reset position {} must leave the ball clear of the paddle at {}",
                self.ball_reset_x, self.paddle_x
            ),
        )?;
        let deepest = (0..self.paddle_size_modifiers.len())
            .map(|i| self.paddle_half_depth(i))
            .fold(0.0, f32::max);
        ensure(
            deepest < self.table_half_depth,
            "paddle_size_modifiers",
            format!(
                "largest paddle half depth {} does not fit the table half depth {}",
                deepest, self.table_half_depth
            ),
        )?;
        ensure(self.win_score > 0, "win_score", "must be at least 1")?;

        self.bindings.validate()
    }
}

fn ensure(cond: bool, field: &'static str, reason: impl Into<String>) -> Result<(), GameError> {
    if cond {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            field,
            reason: reason.into(),
        })
    }
}

/// Logical key codes (`KeyW`, `ArrowUp`, `Space`, `Digit1`, ...) for every action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left_up: String,
    pub left_down: String,
    pub left_resize: String,
    pub right_up: String,
    pub right_down: String,
    pub right_resize: String,
    pub serve: String,
    pub confirm: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: "KeyW".into(),
            left_down: "KeyS".into(),
            left_resize: "Digit1".into(),
            right_up: "ArrowUp".into(),
            right_down: "ArrowDown".into(),
            right_resize: "Digit2".into(),
            serve: "Space".into(),
            confirm: "Enter".into(),
        }
    }
}

impl KeyBindings {
    fn entries(&self) -> [(&str, Action); 8] {
        [
            (self.left_up.as_str(), Action::Move(Side::Left, PaddleDirection::Up)),
            (self.left_down.as_str(), Action::Move(Side::Left, PaddleDirection::Down)),
            (self.left_resize.as_str(), Action::CycleSize(Side::Left)),
            (self.right_up.as_str(), Action::Move(Side::Right, PaddleDirection::Up)),
            (self.right_down.as_str(), Action::Move(Side::Right, PaddleDirection::Down)),
            (self.right_resize.as_str(), Action::CycleSize(Side::Right)),
            (self.serve.as_str(), Action::Serve),
            (self.confirm.as_str(), Action::Confirm),
        ]
    }

    pub fn resolve(&self, code: &str) -> Option<Action> {
        self.entries()
            .into_iter()
            .find(|(bound, _)| *bound == code)
            .map(|(_, action)| action)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let entries = self.entries();
        for (i, (code, first)) in entries.iter().enumerate() {
            if let Some((_, second)) = entries[i + 1..].iter().find(|(other, _)| other == code) {
                return Err(GameError::DuplicateBinding {
                    code: code.to_string(),
                    first: *first,
                    second: *second,
                });
            }
        }
        Ok(())
    }

    /// Instruction line shown to one player
    pub fn instructions(&self, side: Side) -> String {
        let (up, down, resize) = match side {
            Side::Left => (&self.left_up, &self.left_down, &self.left_resize),
            Side::Right => (&self.right_up, &self.right_down, &self.right_resize),
        };
        format!(
            "{}/{} to move paddle, {} to serve, {} to change paddle size",
            key_label(up),
            key_label(down),
            key_label(&self.serve),
            key_label(resize)
        )
    }
}

fn key_label(code: &str) -> &str {
    ["Key", "Digit", "Arrow"]
        .iter()
        .find_map(|prefix| code.strip_prefix(prefix))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(code)
}
