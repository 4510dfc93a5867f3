use crate::{Ball, BallIntent, Body, Config, Contacts, Paddle, PaddleDirection, PaddleIntent, Side, Table};
use glam::Vec2;
use hecs::World;

/// Put both paddles back on their lines at z = 0 and stop them
pub fn reset_paddles(world: &mut World, table: &Table) {
    for (_entity, (paddle, intent, body)) in
        world.query_mut::<(&Paddle, &mut PaddleIntent, &mut Body)>()
    {
        intent.dir = PaddleDirection::None;
        body.center = Vec2::new(table.paddle_x(paddle.side), 0.0);
    }
}

/// Reset after a goal: paddles go home and the ball is parked just inside
/// the conceding side's paddle line, ready for that side to serve
pub fn reset_after_goal(world: &mut World, table: &Table, config: &Config, conceding: Side) {
    reset_paddles(world, table);

    for (_entity, (ball, intent, body, contacts)) in
        world.query_mut::<(&mut Ball, &mut BallIntent, &mut Body, &mut Contacts)>()
    {
        ball.reset(conceding);
        intent.serve = false;
        body.center = Vec2::new(conceding.sign() * config.ball_reset_x, 0.0);
        contacts.0.clear();
    }
}
