use crate::{Ball, Body, Config, Contacts, Events, Intersection, WatchKind, Watchers};
use hecs::World;

/// Report intersection-enter events for every moving observer.
///
/// Watches are resolved through the target entity each tick, so whatever
/// geometry the target has right now is what gets tested. Returns the index
/// of the first event added by this call.
pub fn detect_intersections(world: &mut World, events: &mut Events) -> usize {
    let first_new = events.intersections.len();

    // Collect observer data first so no query borrow is held below
    let observers: Vec<_> = world
        .query::<(&Ball, &Body, &Watchers)>()
        .iter()
        .filter(|(_e, (ball, _, _))| ball.is_moving())
        .map(|(e, (_, body, watchers))| (e, body.aabb(), watchers.0.clone()))
        .collect();

    for (observer, bounds, watches) in observers {
        let touching: Vec<_> = watches
            .iter()
            .filter(|watch| {
                world
                    .get::<&Body>(watch.target)
                    .map(|target| bounds.intersects(&target.aabb()))
                    .unwrap_or(false) // Despawned targets never intersect
            })
            .copied()
            .collect();

        let Ok(mut contacts) = world.get::<&mut Contacts>(observer) else {
            continue;
        };
        for watch in &touching {
            if !contacts.0.contains(&watch.target) {
                events.intersections.push(Intersection {
                    observer,
                    kind: watch.kind,
                });
            }
        }
        contacts.0 = touching.iter().map(|watch| watch.target).collect();
    }

    first_new
}

/// React to intersection events: paddles send the ball back faster,
/// goals record who scored. Only events from index `first` on are applied;
/// earlier ones were resolved by a previous micro-step.
pub fn resolve_intersections(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    first: usize,
) {
    let fresh = events.intersections.get(first..).unwrap_or_default().to_vec();
    for hit in fresh {
        match hit.kind {
            WatchKind::Paddle(side) => {
                if let Ok(mut ball) = world.get::<&mut Ball>(hit.observer) {
                    ball.paddle_hit(config.bounce_speedup_divisor);
                    events.paddle_hits.push(side);
                    tracing::debug!(
                        ?side,
                        bounces = ball.bounces,
                        vel_x = ball.vel.x,
                        "ball hit paddle"
                    );
                }
            }
            WatchKind::Goal(side) => {
                // Touching a goal scores for the other side
                if events.goal.is_none() {
                    events.goal = Some(side.opposite());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{spawn_match, BallState, MatchEntities, PaddleIntent, Side, Table};
    use glam::Vec2;

    fn setup() -> (World, Config, MatchEntities, Events) {
        let mut world = World::new();
        let config = Config::new();
        let entities = spawn_match(&mut world, &Table::default(), &config);
        (world, config, entities, Events::new())
    }

    fn launch(world: &mut World, ball: hecs::Entity, pos: Vec2, vel: Vec2) {
        world.get::<&mut Body>(ball).unwrap().center = pos;
        let mut b = world.get::<&mut Ball>(ball).unwrap();
        b.state = BallState::Moving;
        b.vel = vel;
    }

    #[test]
    fn test_paddle_contact_fires_once_per_enter() {
        let (mut world, config, entities, mut events) = setup();
        // Ball edge just inside the left paddle face at x = -8.5
        launch(&mut world, entities.ball, Vec2::new(-8.3, 0.0), Vec2::new(-6.0, 0.0));

        detect_intersections(&mut world, &mut events);
        assert_eq!(
            events.intersections,
            vec![Intersection {
                observer: entities.ball,
                kind: WatchKind::Paddle(Side::Left)
            }]
        );

        // Still overlapping next tick: no new event
        events.clear();
        detect_intersections(&mut world, &mut events);
        assert!(events.intersections.is_empty());

        // Leave, come back: fires again
        world.get::<&mut Body>(entities.ball).unwrap().center.x = -7.0;
        detect_intersections(&mut world, &mut events);
        world.get::<&mut Body>(entities.ball).unwrap().center.x = -8.35;
        detect_intersections(&mut world, &mut events);
        assert_eq!(events.intersections.len(), 1);
    }

    #[test]
    fn test_touching_face_is_not_contact() {
        let (mut world, _config, entities, mut events) = setup();
        launch(&mut world, entities.ball, Vec2::new(-8.25, 0.0), Vec2::new(-6.0, 0.0));
        detect_intersections(&mut world, &mut events);
        assert!(events.intersections.is_empty());
    }

    #[test]
    fn test_idle_ball_reports_nothing() {
        let (mut world, _config, entities, mut events) = setup();
        world.get::<&mut Body>(entities.ball).unwrap().center = Vec2::new(-8.6, 0.0);
        detect_intersections(&mut world, &mut events);
        assert!(events.intersections.is_empty());
    }

    #[test]
    fn test_paddle_hit_reverses_and_speeds_up() {
        let (mut world, config, entities, mut events) = setup();
        launch(&mut world, entities.ball, Vec2::new(8.3, 0.5), Vec2::new(6.0, 1.0));

        let first = detect_intersections(&mut world, &mut events);
        resolve_intersections(&mut world, &config, &mut events, first);

        let ball = *world.get::<&Ball>(entities.ball).unwrap();
        assert_eq!(ball.bounces, 1);
        assert!((ball.vel.x + 6.06).abs() < 1e-4, "got {}", ball.vel.x);
        assert_eq!(ball.vel.y, 1.0);
        assert_eq!(events.paddle_hits, vec![Side::Right]);
        assert_eq!(events.goal, None);
    }

    #[test]
    fn test_earlier_contacts_are_not_resolved_again() {
        let (mut world, config, entities, mut events) = setup();
        launch(&mut world, entities.ball, Vec2::new(8.3, 0.0), Vec2::new(6.0, 0.0));

        let first = detect_intersections(&mut world, &mut events);
        assert_eq!(first, 0);
        resolve_intersections(&mut world, &config, &mut events, first);

        // Next micro-step of the same frame: still overlapping, nothing new
        let first = detect_intersections(&mut world, &mut events);
        assert_eq!(first, 1);
        resolve_intersections(&mut world, &config, &mut events, first);

        let ball = *world.get::<&Ball>(entities.ball).unwrap();
        assert_eq!(ball.bounces, 1);
        assert!(ball.vel.x < 0.0);
        assert_eq!(events.paddle_hits, vec![Side::Right]);
    }

    #[test]
    fn test_missed_paddle_means_no_hit() {
        let (mut world, config, entities, mut events) = setup();
        // Paddle spans z in [-1, 1]
        launch(&mut world, entities.ball, Vec2::new(8.6, 2.0), Vec2::new(6.0, 0.0));
        let first = detect_intersections(&mut world, &mut events);
        resolve_intersections(&mut world, &config, &mut events, first);
        assert!(events.paddle_hits.is_empty());
    }

    #[test]
    fn test_left_goal_scores_for_right() {
        let (mut world, config, entities, mut events) = setup();
        launch(&mut world, entities.ball, Vec2::new(-9.3, 3.0), Vec2::new(-6.0, 0.0));

        let first = detect_intersections(&mut world, &mut events);
        resolve_intersections(&mut world, &config, &mut events, first);

        assert_eq!(events.goal, Some(Side::Right));
    }

    #[test]
    fn test_right_goal_scores_for_left() {
        let (mut world, config, entities, mut events) = setup();
        launch(&mut world, entities.ball, Vec2::new(9.3, -3.0), Vec2::new(6.0, 0.0));

        let first = detect_intersections(&mut world, &mut events);
        resolve_intersections(&mut world, &config, &mut events, first);

        assert_eq!(events.goal, Some(Side::Left));
    }

    #[test]
    fn test_resized_paddle_is_still_watched() {
        let (mut world, config, entities, mut events) = setup();
        let left = entities.paddle(Side::Left);
        world.get::<&mut PaddleIntent>(left).unwrap().size_cycles = 1;
        crate::systems::apply_size_changes(&mut world, &config);

        // Only the enlarged paddle (half depth 2) reaches z = 1.8
        launch(&mut world, entities.ball, Vec2::new(-8.3, 1.8), Vec2::new(-6.0, 0.0));
        let first = detect_intersections(&mut world, &mut events);
        resolve_intersections(&mut world, &config, &mut events, first);

        assert_eq!(events.paddle_hits, vec![Side::Left]);
    }

    #[test]
    fn test_despawned_target_is_ignored() {
        let (mut world, _config, entities, mut events) = setup();
        world.despawn(entities.paddle(Side::Left)).unwrap();
        launch(&mut world, entities.ball, Vec2::new(-8.3, 0.0), Vec2::new(-6.0, 0.0));
        detect_intersections(&mut world, &mut events);
        assert!(events.intersections.is_empty());
    }
}
