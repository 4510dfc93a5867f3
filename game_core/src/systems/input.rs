use hecs::World;

use crate::{Action, BallIntent, InputQueue, Paddle, PaddleDirection, PaddleIntent};

/// Turn queued input actions into paddle and ball intents
pub fn ingest_inputs(world: &mut World, input_queue: &mut InputQueue) {
    for input in input_queue.pop_inputs() {
        match input.action {
            Action::Move(side, dir) => {
                // Releasing either of a paddle's keys stops it
                let dir = if input.pressed {
                    dir
                } else {
                    PaddleDirection::None
                };
                for (_e, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
                    if paddle.side == side {
                        intent.dir = dir;
                    }
                }
            }
            Action::CycleSize(side) if input.pressed => {
                for (_e, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
                    if paddle.side == side {
                        intent.size_cycles = intent.size_cycles.saturating_add(1);
                    }
                }
            }
            Action::Serve if input.pressed => {
                for (_e, intent) in world.query_mut::<&mut BallIntent>() {
                    intent.serve = true;
                }
            }
            _ => {}
        }
    }
}
