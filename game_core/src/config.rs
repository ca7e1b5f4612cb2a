use glam::Vec2;

use crate::error::ConfigError;
use crate::field::Aabb;
use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub field_padding: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_step: f32,
    pub paddle_start: f32,
    pub ball_size: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub win_score: u8,
    pub ball_tick_ms: u64,
    pub paddle_poll_ms: u64,
    pub start_poll_ms: u64,
    pub settle_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            field_padding: Params::FIELD_PADDING,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_step: Params::PADDLE_STEP,
            paddle_start: Params::PADDLE_START,
            ball_size: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            win_score: Params::WIN_SCORE,
            ball_tick_ms: Params::BALL_TICK_MS,
            paddle_poll_ms: Params::PADDLE_POLL_MS,
            start_poll_ms: Params::START_POLL_MS,
            settle_delay_ms: Params::SETTLE_DELAY_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject geometry that would produce degenerate spans or NaN hit positions
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
        ];
        for (name, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        let finite = [
            ("field_padding", self.field_padding),
            ("paddle_step", self.paddle_step),
            ("paddle_start", self.paddle_start),
            ("ball_speed_x", self.ball_speed_x),
            ("ball_speed_y", self.ball_speed_y),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        let periods = [
            ("ball_tick_ms", self.ball_tick_ms),
            ("paddle_poll_ms", self.paddle_poll_ms),
            ("start_poll_ms", self.start_poll_ms),
        ];
        for (name, period) in periods {
            if period == 0 {
                return Err(ConfigError::ZeroPeriod { name });
            }
        }

        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }

    /// Convert a percent-space position to field space
    pub fn to_field(&self, percent: Vec2) -> Vec2 {
        Vec2::new(
            percent.x / 100.0 * self.field_width,
            percent.y / 100.0 * self.field_height,
        )
    }

    /// X of the paddle face the ball meets (inner edge)
    pub fn paddle_face_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.field_padding + self.paddle_width,
            Side::Right => self.field_width - self.field_padding - self.paddle_width,
        }
    }

    /// Field-space box of a paddle centered on `height` (percent)
    pub fn paddle_box(&self, side: Side, height: f32) -> Aabb {
        let top = height / 100.0 * self.field_height - self.paddle_height / 2.0;
        let left = match side {
            Side::Left => self.field_padding,
            Side::Right => self.field_width - self.field_padding - self.paddle_width,
        };
        Aabb::new(
            Vec2::new(left, top),
            Vec2::new(left + self.paddle_width, top + self.paddle_height),
        )
    }

    /// Field-space box of the ball centered on `pos` (percent)
    pub fn ball_box(&self, pos: Vec2) -> Aabb {
        Aabb::from_center_size(self.to_field(pos), Vec2::splat(self.ball_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_face_x() {
        let config = Config::new();
        assert_eq!(config.paddle_face_x(Side::Left), 30.0, "Left paddle face");
        assert_eq!(config.paddle_face_x(Side::Right), 770.0, "Right paddle face");
    }

    #[test]
    fn test_config_paddle_box_centered() {
        let config = Config::new();
        let paddle = config.paddle_box(Side::Left, 50.0);
        assert_eq!(paddle.min, Vec2::new(20.0, 250.0));
        assert_eq!(paddle.max, Vec2::new(30.0, 350.0));

        let paddle = config.paddle_box(Side::Right, 0.0);
        assert_eq!(paddle.min, Vec2::new(770.0, -50.0));
        assert_eq!(paddle.max, Vec2::new(780.0, 50.0));
    }

    #[test]
    fn test_config_ball_box() {
        let config = Config::new();
        let ball = config.ball_box(Vec2::new(50.0, 50.0));
        assert_eq!(ball.min, Vec2::new(392.5, 292.5));
        assert_eq!(ball.max, Vec2::new(407.5, 307.5));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
        assert!(Config::new().paddle_height > 0.0, "Paddle span must be non-degenerate");
    }

    #[test]
    fn test_validate_rejects_degenerate_paddle() {
        let config = Config {
            paddle_height: 0.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "paddle_height",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan_speed() {
        let config = Config {
            ball_speed_x: f32::NAN,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                name: "ball_speed_x",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_period_and_win_score() {
        let config = Config {
            ball_tick_ms: 0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroPeriod {
                name: "ball_tick_ms"
            })
        );

        let config = Config {
            win_score: 0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWinScore));
    }
}
