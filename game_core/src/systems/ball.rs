use glam::Vec2;

use crate::percent::clamp_percent;
use crate::{Ball, Config};

/// Deflection factor for a paddle-hit percent: -1 at the top edge,
/// 0 at the center, 1 at the bottom edge
pub fn angle_factor(paddle_hit: f32) -> f32 {
    2.0 * (clamp_percent(paddle_hit) / 100.0 - 0.5)
}

/// Advance the ball one tick.
///
/// With `paddle_hit` (0 = paddle top, 100 = paddle bottom) the horizontal
/// velocity is reflected and the vertical velocity is re-derived from the
/// contact point before the wall check runs. Touching the top or bottom of
/// the field sends the ball back into the field.
pub fn advance(ball: Ball, paddle_hit: Option<f32>, config: &Config) -> Ball {
    let mut vel = ball.vel;

    if let Some(hit) = paddle_hit {
        vel = Vec2::new(-vel.x, angle_factor(hit) * vel.x.abs());
    }

    let bounds = config.ball_box(ball.pos);
    if bounds.min.y <= 0.0 {
        vel.y = vel.y.abs();
    } else if bounds.max.y >= config.field_height {
        vel.y = -vel.y.abs();
    }

    Ball::new(ball.pos + vel, vel)
}
