pub mod components;
pub mod config;
pub mod error;
pub mod frontend;
pub mod fsm;
pub mod game_state;
pub mod params;
pub mod resources;
pub mod systems;
pub mod table;

pub use components::*;
pub use config::*;
pub use error::*;
pub use frontend::*;
pub use fsm::*;
pub use game_state::*;
pub use params::*;
pub use resources::*;
pub use table::*;

use glam::Vec2;
use hecs::{Entity, World};
use systems::*;

/// Run the table Pong simulation for `time.dt` seconds
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    table: &Table,
    config: &Config,
    events: &mut Events,
    input_queue: &mut InputQueue,
    rng: &mut GameRng,
) {
    events.clear();

    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Ingest inputs (apply to paddle and ball intents)
        ingest_inputs(world, input_queue);

        // 2. Rebuild resized paddles
        apply_size_changes(world, config);

        // 3. Serve a parked ball on request
        serve_ball(world, config, rng, events);

        // 4. Move paddles, carrying a parked ball
        move_paddles(world, &step_time, table, config);

        // 5. Move ball, bouncing off walls
        move_ball(world, &step_time, table, events);

        // 6. Intersection-enter events (ball vs paddles, goals)
        let first_new = detect_intersections(world, events);

        // 7. Paddle hits and goals from this micro-step only
        resolve_intersections(world, config, events, first_new);

        // The controller resets the table before anything else moves
        if events.goal.is_some() {
            break;
        }
    }

    // Update time
    time.now += clamped_dt - remaining_dt;
}

/// Handles to every entity of a running match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEntities {
    pub ball: Entity,
    pub left_paddle: Entity,
    pub right_paddle: Entity,
    pub left_goal: Entity,
    pub right_goal: Entity,
}

impl MatchEntities {
    pub fn paddle(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        }
    }

    pub fn goal(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left_goal,
            Side::Right => self.right_goal,
        }
    }
}

/// Helper to create a paddle entity on its paddle line
pub fn create_paddle(world: &mut World, config: &Config, table: &Table, side: Side) -> Entity {
    let paddle = Paddle::new(side, Params::PADDLE_DEFAULT_SIZE);
    let body = Body::new(
        Vec2::new(table.paddle_x(side), 0.0),
        config.paddle_half_extents(paddle.size_index),
    );
    world.spawn((paddle, PaddleIntent::new(), body))
}

/// Helper to create a goal volume entity
pub fn create_goal(world: &mut World, table: &Table, side: Side) -> Entity {
    world.spawn((Goal { side }, table.goal_body(side)))
}

/// Helper to create the ball entity, parked in the middle
pub fn create_ball(world: &mut World, config: &Config, watches: Vec<Watch>) -> Entity {
    let body = Body::new(Vec2::ZERO, Vec2::splat(config.ball_radius()));
    world.spawn((
        Ball::new(),
        BallIntent::default(),
        body,
        Watchers(watches),
        Contacts::default(),
    ))
}

/// Spawn goals, paddles and a ball watching all four of them
pub fn spawn_match(world: &mut World, table: &Table, config: &Config) -> MatchEntities {
    let left_goal = create_goal(world, table, Side::Left);
    let right_goal = create_goal(world, table, Side::Right);
    let left_paddle = create_paddle(world, config, table, Side::Left);
    let right_paddle = create_paddle(world, config, table, Side::Right);

    let watches = vec![
        Watch {
            target: left_paddle,
            kind: WatchKind::Paddle(Side::Left),
        },
        Watch {
            target: right_paddle,
            kind: WatchKind::Paddle(Side::Right),
        },
        Watch {
            target: left_goal,
            kind: WatchKind::Goal(Side::Left),
        },
        Watch {
            target: right_goal,
            kind: WatchKind::Goal(Side::Right),
        },
    ];
    let ball = create_ball(world, config, watches);

    MatchEntities {
        ball,
        left_paddle,
        right_paddle,
        left_goal,
        right_goal,
    }
}
