use hecs::World;

use crate::{Ball, Body, Config, Paddle, PaddleIntent, Side, Table, Time};

/// Apply pending size cycles by rebuilding the paddle geometry at the same z.
///
/// The entity keeps its handle, so the ball's watchers need no rebinding.
pub fn apply_size_changes(world: &mut World, config: &Config) {
    let modifier_count = config.paddle_size_modifiers.len();
    for (_e, (paddle, intent, body)) in
        world.query_mut::<(&mut Paddle, &mut PaddleIntent, &mut Body)>()
    {
        if intent.size_cycles == 0 {
            continue;
        }
        for _ in 0..intent.size_cycles {
            paddle.cycle_size(modifier_count);
        }
        intent.size_cycles = 0;

        *body = Body::new(body.center, config.paddle_half_extents(paddle.size_index));
        tracing::debug!(
            side = ?paddle.side,
            size_index = paddle.size_index,
            half_depth = body.half_extents.y,
            "paddle resized"
        );
    }
}

/// Move paddles by their intents, clamp them to the table, and carry a
/// parked ball along on the owning side
pub fn move_paddles(world: &mut World, time: &Time, table: &Table, config: &Config) {
    let mut positions: Vec<(Side, f32)> = Vec::with_capacity(2);

    for (_e, (paddle, intent, body)) in world.query_mut::<(&Paddle, &PaddleIntent, &mut Body)>() {
        let delta = intent.dir.sign() * config.paddle_speed * time.dt;
        let half_depth = config.paddle_half_depth(paddle.size_index);
        body.center.y = table.clamp_paddle_z(body.center.y + delta, half_depth);
        positions.push((paddle.side, body.center.y));
    }

    for (_e, (ball, body)) in world.query_mut::<(&Ball, &mut Body)>() {
        for &(side, z) in &positions {
            if ball.state.is_idle_on(side) {
                body.center.y = z;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, BallState, PaddleDirection};

    fn setup() -> (World, Config, Table, Time) {
        (World::new(), Config::new(), Table::default(), Time::default())
    }

    fn set_dir(world: &mut World, entity: hecs::Entity, dir: PaddleDirection) {
        world.get::<&mut PaddleIntent>(entity).unwrap().dir = dir;
    }

    #[test]
    fn test_paddle_moves_a_tenth_per_frame() {
        let (mut world, config, table, time) = setup();
        let paddle = create_paddle(&mut world, &config, &table, Side::Left);
        set_dir(&mut world, paddle, PaddleDirection::Up);

        move_paddles(&mut world, &time, &table, &config);
        let z = world.get::<&Body>(paddle).unwrap().center.y;
        assert!((z - 0.1).abs() < 1e-5, "got {}", z);

        set_dir(&mut world, paddle, PaddleDirection::Down);
        move_paddles(&mut world, &time, &table, &config);
        move_paddles(&mut world, &time, &table, &config);
        let z = world.get::<&Body>(paddle).unwrap().center.y;
        assert!((z + 0.1).abs() < 1e-5, "got {}", z);
    }

    #[test]
    fn test_paddle_stays_on_table_at_every_size() {
        let (mut world, config, table, time) = setup();
        let paddle = create_paddle(&mut world, &config, &table, Side::Right);

        for size in 0..config.paddle_size_modifiers.len() {
            world.get::<&mut Paddle>(paddle).unwrap().size_index = size;
            let limit = table.half_depth - config.paddle_half_depth(size);
            for dir in [PaddleDirection::Up, PaddleDirection::Down] {
                set_dir(&mut world, paddle, dir);
                for _ in 0..200 {
                    move_paddles(&mut world, &time, &table, &config);
                    let z = world.get::<&Body>(paddle).unwrap().center.y;
                    assert!(z.abs() <= limit + 1e-6, "size {} z {}", size, z);
                }
                let z = world.get::<&Body>(paddle).unwrap().center.y;
                assert!((z.abs() - limit).abs() < 1e-5, "should rest on the limit");
            }
        }
    }

    #[test]
    fn test_resize_keeps_z_and_entity() {
        let (mut world, config, table, time) = setup();
        let paddle = create_paddle(&mut world, &config, &table, Side::Left);
        set_dir(&mut world, paddle, PaddleDirection::Up);
        for _ in 0..10 {
            move_paddles(&mut world, &time, &table, &config);
        }
        let z = world.get::<&Body>(paddle).unwrap().center.y;

        world.get::<&mut PaddleIntent>(paddle).unwrap().size_cycles = 1;
        apply_size_changes(&mut world, &config);

        let body = *world.get::<&Body>(paddle).unwrap();
        assert_eq!(body.center.y, z);
        assert_eq!(body.center.x, -8.75);
        assert_eq!(body.half_extents.y, 2.0);
        assert_eq!(world.get::<&Paddle>(paddle).unwrap().size_index, 2);
        assert_eq!(world.get::<&PaddleIntent>(paddle).unwrap().size_cycles, 0);
    }

    #[test]
    fn test_large_paddle_clamped_on_next_update_after_resize() {
        let (mut world, config, table, time) = setup();
        let paddle = create_paddle(&mut world, &config, &table, Side::Left);
        set_dir(&mut world, paddle, PaddleDirection::Up);
        for _ in 0..100 {
            move_paddles(&mut world, &time, &table, &config);
        }
        // 3.5 at the default size; the largest size only allows 2.5
        world.get::<&mut PaddleIntent>(paddle).unwrap().size_cycles = 1;
        apply_size_changes(&mut world, &config);
        move_paddles(&mut world, &time, &table, &config);
        let z = world.get::<&Body>(paddle).unwrap().center.y;
        assert!((z - 2.5).abs() < 1e-5, "got {}", z);
    }

    #[test]
    fn test_idle_ball_rides_its_paddle() {
        let (mut world, config, table, time) = setup();
        let left = create_paddle(&mut world, &config, &table, Side::Left);
        let right = create_paddle(&mut world, &config, &table, Side::Right);
        let ball = create_ball(&mut world, &config, Vec::new());
        world.get::<&mut Ball>(ball).unwrap().state = BallState::IdleLeft;

        set_dir(&mut world, left, PaddleDirection::Down);
        set_dir(&mut world, right, PaddleDirection::Up);
        for _ in 0..5 {
            move_paddles(&mut world, &time, &table, &config);
        }

        let paddle_z = world.get::<&Body>(left).unwrap().center.y;
        let ball_z = world.get::<&Body>(ball).unwrap().center.y;
        assert_eq!(ball_z, paddle_z);
        assert!(ball_z < 0.0);
    }

    #[test]
    fn test_moving_ball_is_not_carried() {
        let (mut world, config, table, time) = setup();
        let left = create_paddle(&mut world, &config, &table, Side::Left);
        let ball = create_ball(&mut world, &config, Vec::new());
        world.get::<&mut Ball>(ball).unwrap().state = BallState::Moving;

        set_dir(&mut world, left, PaddleDirection::Up);
        move_paddles(&mut world, &time, &table, &config);
        assert_eq!(world.get::<&Body>(ball).unwrap().center.y, 0.0);
    }
}
