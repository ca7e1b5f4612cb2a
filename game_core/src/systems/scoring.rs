use crate::{Config, Events, ScoreLedger, Side};

/// Side awarded the point when the ball gets past `missed`
pub fn scoring_side(missed: Side) -> Side {
    missed.opponent()
}

/// Side that scores judged by which half of the field the ball is in
/// (right of the midpoint: left scores)
pub fn scoring_side_by_midpoint(ball_field_x: f32, config: &Config) -> Side {
    if ball_field_x > config.field_width / 2.0 {
        Side::Left
    } else {
        Side::Right
    }
}

/// Record a miss: latch, one ledger increment, event.
/// Returns false without touching anything if the latch is already set.
pub fn award_point<L: ScoreLedger>(
    missed: Side,
    latch: &mut bool,
    ledger: &mut L,
    events: &mut Events,
) -> bool {
    events.ball_missed = Some(missed);
    if *latch {
        return false;
    }

    *latch = true;
    let scorer = scoring_side(missed);
    ledger.increment(scorer);
    events.scored = Some(scorer);

    let score = ledger.current();
    log::info!(
        "{} scores ({} : {})",
        scorer.name(),
        score.left,
        score.right
    );
    true
}
