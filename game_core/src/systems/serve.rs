use hecs::World;
use rand::Rng;
use std::f32::consts::TAU;

use crate::{Ball, BallIntent, Config, Events, GameRng};

/// Launch parked balls that have a serve request, at a uniformly random angle
pub fn serve_ball(world: &mut World, config: &Config, rng: &mut GameRng, events: &mut Events) {
    for (_e, (ball, intent)) in world.query_mut::<(&mut Ball, &mut BallIntent)>() {
        if !std::mem::take(&mut intent.serve) || ball.is_moving() {
            continue;
        }
        let from = ball.state;
        let angle: f32 = rng.0.gen_range(0.0..TAU);
        if ball.serve(angle, config.ball_speed_initial) {
            events.served = true;
            tracing::debug!(?from, angle, vel = ?ball.vel, "ball served");
        }
    }
}
