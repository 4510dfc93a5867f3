use crate::{Ball, Body, Events, Table, Time};
use hecs::World;

/// Integrate the ball and bounce it off the top and bottom walls
pub fn move_ball(world: &mut World, time: &Time, table: &Table, events: &mut Events) {
    for (_entity, (ball, body)) in world.query_mut::<(&mut Ball, &mut Body)>() {
        if !ball.is_moving() {
            continue;
        }
        body.center += ball.vel * time.dt;

        if body.center.y > table.wall_z_top() {
            body.center.y = table.wall_z_top();
            ball.vel.y = -ball.vel.y;
            events.wall_bounces += 1;
        } else if body.center.y < table.wall_z_bottom() {
            body.center.y = table.wall_z_bottom();
            ball.vel.y = -ball.vel.y;
            events.wall_bounces += 1;
        }
    }
}
