/// Game tuning parameters for table Pong
///
/// Coordinates are table-plane: `x` runs between the goals, `z` between the walls.
/// Speeds are per second; the reference frame rate is 60 Hz.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Table
    pub const TABLE_HALF_DEPTH: f32 = 4.5;
    pub const WALL_Z: f32 = 4.25; // Ball center limit (top = +, bottom = -)
    pub const GOAL_X: f32 = 9.75;
    pub const GOAL_WIDTH: f32 = 0.5;
    pub const GOAL_DEPTH: f32 = 9.0;

    // Paddle
    pub const PADDLE_X: f32 = 8.75;
    pub const PADDLE_WIDTH: f32 = 0.5;
    pub const PADDLE_BASE_DEPTH: f32 = 2.0;
    pub const PADDLE_SIZE_MODIFIERS: [f32; 3] = [0.5, 1.0, 2.0];
    pub const PADDLE_DEFAULT_SIZE: usize = 1;
    pub const PADDLE_SPEED: f32 = 6.0; // 0.1 per frame

    // Ball
    pub const BALL_DIAMETER: f32 = 0.5;
    pub const BALL_SPEED_INITIAL: f32 = 6.0; // 0.1 per frame
    pub const BOUNCE_SPEEDUP_DIVISOR: f32 = 100.0;
    // Just inside the paddle line so the reset ball does not touch the paddle or goal
    pub const BALL_RESET_X: f32 = 8.249;

    // Score
    pub const WIN_SCORE: u8 = 3;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1;
}
