/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (pixel-equivalent units used only for collision geometry)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    pub const FIELD_PADDING: f32 = 20.0; // paddle inset from the side edge

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_STEP: f32 = 1.0; // percent per paddle poll
    pub const PADDLE_START: f32 = 50.0; // percent

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SPEED_X: f32 = 1.0; // percent per tick
    pub const BALL_SPEED_Y: f32 = 0.4; // percent per tick, sign picked on serve

    // Score
    pub const WIN_SCORE: u8 = 10;

    // Timers (ms)
    pub const BALL_TICK_MS: u64 = 36;
    pub const PADDLE_POLL_MS: u64 = 16;
    pub const START_POLL_MS: u64 = 10;
    pub const SETTLE_DELAY_MS: u64 = 500;
}
