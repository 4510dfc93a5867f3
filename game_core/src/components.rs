use glam::Vec2;
use hecs::Entity;
use serde::{Deserialize, Serialize};

use crate::table::Aabb;

/// One of the two players; also names paddles and goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Sign of the x axis on this side of the table
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Paddle movement intent along z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleDirection {
    #[default]
    None,
    Up,
    Down,
}

impl PaddleDirection {
    pub fn sign(self) -> f32 {
        match self {
            PaddleDirection::None => 0.0,
            PaddleDirection::Up => 1.0,
            PaddleDirection::Down => -1.0,
        }
    }
}

/// Ball lifecycle: parked somewhere waiting for a serve, or in play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallState {
    IdleMiddle,
    IdleLeft,
    IdleRight,
    Moving,
}

impl BallState {
    pub fn idle_on(side: Side) -> Self {
        match side {
            Side::Left => BallState::IdleLeft,
            Side::Right => BallState::IdleRight,
        }
    }

    pub fn is_idle_on(self, side: Side) -> bool {
        self == Self::idle_on(side)
    }
}

/// Axis-aligned geometry of a collidable body.
///
/// Intersection watchers hold the owning entity, not this value, so replacing
/// a body (paddle resize) never invalidates them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Body {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half_extents(self.center, self.half_extents)
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
    pub size_index: usize, // Index into the size modifier table
}

impl Paddle {
    pub fn new(side: Side, size_index: usize) -> Self {
        Self { side, size_index }
    }

    /// Advance to the next size modifier, wrapping around
    pub fn cycle_size(&mut self, modifier_count: usize) {
        self.size_index = (self.size_index + 1) % modifier_count.max(1);
    }
}

/// Pending paddle input, written by input ingestion and consumed by the tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: PaddleDirection,
    pub size_cycles: u8,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub vel: Vec2,
    pub state: BallState,
    pub bounces: u32, // Paddle hits since the last goal
}

impl Ball {
    pub fn new() -> Self {
        Self {
            vel: Vec2::ZERO,
            state: BallState::IdleMiddle,
            bounces: 0,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.state == BallState::Moving
    }

    /// Launch at `angle` radians. A ball parked on a side always leaves
    /// towards the other side; from the middle either way is fine.
    /// Returns false if the ball is already in play.
    pub fn serve(&mut self, angle: f32, speed: f32) -> bool {
        let vx = angle.cos() * speed;
        let vx = match self.state {
            BallState::Moving => return false,
            BallState::IdleMiddle => vx,
            BallState::IdleLeft => vx.abs(),
            BallState::IdleRight => -vx.abs(),
        };
        self.vel = Vec2::new(vx, angle.sin() * speed);
        self.state = BallState::Moving;
        true
    }

    /// Paddle contact: reverse x and speed it up by `1 + bounces / divisor`
    pub fn paddle_hit(&mut self, divisor: f32) {
        self.bounces += 1;
        self.vel.x *= -(1.0 + self.bounces as f32 / divisor);
    }

    /// Park on `side` with no velocity and a fresh bounce count
    pub fn reset(&mut self, side: Side) {
        self.vel = Vec2::ZERO;
        self.bounces = 0;
        self.state = BallState::idle_on(side);
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// Serve request, cleared every tick whether or not it launched the ball
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallIntent {
    pub serve: bool,
}

/// Goal volume component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    pub side: Side,
}

/// What a watched entity is to the observer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchKind {
    Paddle(Side),
    Goal(Side),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Watch {
    pub target: Entity,
    pub kind: WatchKind,
}

/// Entities an observer wants intersection-enter notifications for
#[derive(Debug, Clone, Default)]
pub struct Watchers(pub Vec<Watch>);

/// Watched entities the observer currently overlaps
#[derive(Debug, Clone, Default)]
pub struct Contacts(pub Vec<Entity>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_from_left_goes_right() {
        for i in 0..64 {
            let angle = i as f32 * std::f32::consts::TAU / 64.0;
            let mut ball = Ball::new();
            ball.state = BallState::IdleLeft;
            assert!(ball.serve(angle, 6.0));
            assert!(ball.vel.x >= 0.0, "angle {} gave vx {}", angle, ball.vel.x);
            assert_eq!(ball.state, BallState::Moving);
        }
    }

    #[test]
    fn test_serve_from_right_goes_left() {
        for i in 0..64 {
            let angle = i as f32 * std::f32::consts::TAU / 64.0;
            let mut ball = Ball::new();
            ball.state = BallState::IdleRight;
            assert!(ball.serve(angle, 6.0));
            assert!(ball.vel.x <= 0.0, "angle {} gave vx {}", angle, ball.vel.x);
        }
    }

    #[test]
    fn test_serve_z_velocity_is_unconstrained() {
        let mut ball = Ball::new();
        ball.state = BallState::IdleRight;
        ball.serve(-std::f32::consts::FRAC_PI_2 + 0.1, 6.0);
        assert!(ball.vel.y < 0.0);
        assert!((ball.vel.length() - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_serve_ignored_while_moving() {
        let mut ball = Ball::new();
        assert!(ball.serve(0.0, 6.0));
        let vel = ball.vel;
        assert!(!ball.serve(std::f32::consts::PI, 6.0));
        assert_eq!(ball.vel, vel);
    }

    #[test]
    fn test_paddle_hit_reverses_and_compounds() {
        let mut ball = Ball::new();
        ball.serve(0.0, 6.0);
        ball.paddle_hit(100.0);
        assert_eq!(ball.bounces, 1);
        assert!((ball.vel.x + 6.0 * 1.01).abs() < 1e-4);
        ball.paddle_hit(100.0);
        assert!((ball.vel.x - 6.0 * 1.01 * 1.02).abs() < 1e-4);
    }

    #[test]
    fn test_reset_parks_ball() {
        let mut ball = Ball::new();
        ball.serve(1.0, 6.0);
        ball.paddle_hit(100.0);
        ball.reset(Side::Left);
        assert_eq!(ball.state, BallState::IdleLeft);
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(ball.bounces, 0);
    }

    #[test]
    fn test_paddle_size_cycles_through_modifiers() {
        let mut paddle = Paddle::new(Side::Left, 1);
        paddle.cycle_size(3);
        assert_eq!(paddle.size_index, 2);
        paddle.cycle_size(3);
        assert_eq!(paddle.size_index, 0);
        paddle.cycle_size(3);
        assert_eq!(paddle.size_index, 1);
    }
}
