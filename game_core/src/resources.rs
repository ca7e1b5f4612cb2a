use crate::Side;

/// Game score - the single authoritative store for both sides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left = self.left.saturating_add(1);
    }

    pub fn increment_right(&mut self) {
        self.right = self.right.saturating_add(1);
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Score-keeping collaborator: the core only asks for increments
pub trait ScoreLedger {
    fn increment(&mut self, side: Side);
    fn current(&self) -> Score;
}

impl ScoreLedger for Score {
    fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.increment_left(),
            Side::Right => self.increment_right(),
        }
    }

    fn current(&self) -> Score {
        *self
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this ball tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub ball_hit_paddle: Option<Side>,
    pub ball_missed: Option<Side>, // paddle the ball got past
    pub scored: Option<Side>,      // side awarded the point
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_paddle = None;
        self.ball_missed = None;
        self.scored = None;
    }
}
