use crate::systems::ball::advance;
use crate::systems::scoring::award_point;
use crate::{Ball, Config, Events, PaddleSnapshot, ScoreLedger, Side};

/// What a tentative ball position means for the paddles
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    /// Ball is between the paddle faces
    Clear,
    /// Ball reached a paddle face within its span; hit point 0-100 from the paddle top
    Hit { side: Side, percent: f32 },
    /// Ball reached a paddle face outside its span
    Miss { side: Side },
}

/// Classify a ball position against both paddles
pub fn classify(ball: &Ball, paddles: &PaddleSnapshot, config: &Config) -> Contact {
    let bounds = config.ball_box(ball.pos);

    // The ball can't be at both faces at once; left is checked first
    let side = if bounds.min.x <= config.paddle_face_x(Side::Left) {
        Side::Left
    } else if bounds.max.x >= config.paddle_face_x(Side::Right) {
        Side::Right
    } else {
        return Contact::Clear;
    };

    let paddle = config.paddle_box(side, paddles.height(side));
    if bounds.overlaps_vertically(&paddle) {
        Contact::Hit {
            side,
            percent: paddle.vertical_percent(bounds.center().y),
        }
    } else {
        Contact::Miss { side }
    }
}

/// Run one ball tick against the paddles.
///
/// Phase one moves the ball freely. If that lands it on a paddle, phase two
/// re-derives the step from `prev` with the contact point. A miss scores
/// once (guarded by `latch`) and the ball stays at `prev` until the session
/// serves again. While latched the ball stays frozen.
pub fn check_paddles<L: ScoreLedger>(
    prev: Ball,
    paddles: &PaddleSnapshot,
    config: &Config,
    latch: &mut bool,
    ledger: &mut L,
    events: &mut Events,
) -> Ball {
    if *latch {
        return prev;
    }

    let tentative = advance(prev, None, config);

    let next = match classify(&tentative, paddles, config) {
        Contact::Clear => tentative,
        Contact::Hit { side, percent } => {
            log::debug!("Ball hit {} paddle at {:.1}%", side.name(), percent);
            events.ball_hit_paddle = Some(side);
            advance(prev, Some(percent), config)
        }
        Contact::Miss { side } => {
            award_point(side, latch, ledger, events);
            prev
        }
    };

    debug_assert!(next.is_finite(), "Ball state went non-finite: {next:?}");
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Score;
    use glam::Vec2;

    fn setup() -> (Config, Score, Events, bool) {
        (Config::new(), Score::new(), Events::new(), false)
    }

    #[test]
    fn test_ball_in_open_field_moves_freely() {
        let (config, mut score, mut events, mut latch) = setup();
        let prev = Ball::new(Vec2::new(50.0, 50.0), Vec2::new(1.0, 0.5));
        let paddles = PaddleSnapshot::new(50.0, 50.0);

        let next = check_paddles(prev, &paddles, &config, &mut latch, &mut score, &mut events);

        assert_eq!(next, advance(prev, None, &config));
        assert_eq!(events, Events::new());
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (config, mut score, mut events, mut latch) = setup();
        // Tentative x 4.5 puts the box's left edge at 28.5, past the face at 30
        let prev = Ball::new(Vec2::new(5.5, 50.0), Vec2::new(-1.0, 0.0));
        let paddles = PaddleSnapshot::new(50.0, 50.0);

        let next = check_paddles(prev, &paddles, &config, &mut latch, &mut score, &mut events);

        assert_eq!(next.vel, Vec2::new(1.0, 0.0), "Center hit rebounds flat");
        assert_eq!(next.pos, Vec2::new(6.5, 50.0), "Re-derived from prev, not tentative");
        assert_eq!(events.ball_hit_paddle, Some(Side::Left));
        assert_eq!(score, Score::new(), "A hit never scores");
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (config, mut score, mut events, mut latch) = setup();
        let prev = Ball::new(Vec2::new(95.0, 50.0), Vec2::new(1.0, 0.0));
        let paddles = PaddleSnapshot::new(50.0, 50.0);

        let next = check_paddles(prev, &paddles, &config, &mut latch, &mut score, &mut events);

        assert_eq!(next.vel, Vec2::new(-1.0, 0.0));
        assert_eq!(next.pos, Vec2::new(94.0, 50.0));
        assert_eq!(events.ball_hit_paddle, Some(Side::Right));
    }

    #[test]
    fn test_trajectory_affected_by_hit_position() {
        let (config, mut score, mut events, mut latch) = setup();
        // Paddle at 50% spans 250..350; ball center at 255 is near the top
        let paddles = PaddleSnapshot::new(50.0, 50.0);
        let prev = Ball::new(Vec2::new(5.5, 42.5), Vec2::new(-1.0, 0.0));

        let next = check_paddles(prev, &paddles, &config, &mut latch, &mut score, &mut events);
        assert!(next.vel.y < 0.0, "Top of paddle deflects upward");
        assert_eq!(next.vel.x, 1.0);

        let prev = Ball::new(Vec2::new(5.5, 57.5), Vec2::new(-1.0, 0.0));
        let next = check_paddles(prev, &paddles, &config, &mut latch, &mut score, &mut events);
        assert!(next.vel.y > 0.0, "Bottom of paddle deflects downward");
    }

    #[test]
    fn test_ball_inside_paddle_span_is_a_hit() {
        let config = Config::new();
        let paddles = PaddleSnapshot::new(30.0, 70.0);
        // Left paddle spans 130..230 in field space
        for y in [22.0_f32, 30.0, 37.0] {
            let ball = Ball::new(Vec2::new(3.0, y), Vec2::new(-1.0, 0.0));
            assert!(
                matches!(classify(&ball, &paddles, &config), Contact::Hit { side: Side::Left, .. }),
                "y = {y} should hit"
            );
        }
    }

    #[test]
    fn test_ball_overlapping_paddle_top_edge_is_a_hit() {
        let config = Config::new();
        let paddles = PaddleSnapshot::new(50.0, 50.0);
        // Ball center at 244 sits above the paddle top (250), box bottom at 251.5
        let ball = Ball::new(Vec2::new(3.0, 244.0 / 6.0), Vec2::new(-1.0, 0.0));
        match classify(&ball, &paddles, &config) {
            Contact::Hit { side, percent } => {
                assert_eq!(side, Side::Left);
                assert!(percent < 0.0, "Contact point lands above the paddle top");
            }
            other => panic!("expected hit, got {other:?}"),
        }
    }

    #[test]
    fn test_miss_scores_once_and_freezes_ball() {
        let (config, mut score, mut events, mut latch) = setup();
        let prev = Ball::new(Vec2::new(5.5, 50.0), Vec2::new(-1.0, 0.0));
        let paddles = PaddleSnapshot::new(0.0, 50.0);

        let next = check_paddles(prev, &paddles, &config, &mut latch, &mut score, &mut events);

        assert_eq!(next, prev, "Ball stops where it was");
        assert_eq!(score, Score { left: 0, right: 1 });
        assert_eq!(events.scored, Some(Side::Right));
        assert!(latch);

        events.clear();
        let again = check_paddles(next, &paddles, &config, &mut latch, &mut score, &mut events);
        assert_eq!(again, prev);
        assert_eq!(score.right, 1, "Latched miss must not score again");
        assert_eq!(events.scored, None);
    }

    #[test]
    fn test_latched_ball_stays_frozen_even_if_paddle_arrives() {
        let (config, mut score, mut events, mut latch) = setup();
        let prev = Ball::new(Vec2::new(5.5, 50.0), Vec2::new(-1.0, 0.0));

        check_paddles(
            prev,
            &PaddleSnapshot::new(0.0, 50.0),
            &config,
            &mut latch,
            &mut score,
            &mut events,
        );
        events.clear();
        let next = check_paddles(
            prev,
            &PaddleSnapshot::new(50.0, 50.0),
            &config,
            &mut latch,
            &mut score,
            &mut events,
        );

        assert_eq!(next, prev);
        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_right_miss_awards_left() {
        let (config, mut score, mut events, mut latch) = setup();
        let prev = Ball::new(Vec2::new(95.0, 50.0), Vec2::new(1.0, 0.0));
        let paddles = PaddleSnapshot::new(50.0, 100.0);

        check_paddles(prev, &paddles, &config, &mut latch, &mut score, &mut events);

        assert_eq!(score, Score { left: 1, right: 0 });
        assert_eq!(events.ball_missed, Some(Side::Right));
    }
}
