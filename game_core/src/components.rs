use glam::Vec2;

/// Which half of the table a paddle or player belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Ball component - position and per-tick velocity, both in percent space.
/// Replaced wholesale every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Serve from the center: fixed horizontal speed, vertical sign picked at random
    pub fn serve(speed_x: f32, speed_y: f32, rng: &mut crate::GameRng) -> Self {
        use rand::Rng;
        let sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        Self::new(Vec2::new(50.0, 50.0), Vec2::new(speed_x, speed_y * sign))
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub height: f32, // center, percent space
}

impl Paddle {
    pub fn new(side: Side, height: f32) -> Self {
        Self { side, height }
    }
}

/// Paddle heights read once per ball tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleSnapshot {
    pub left: f32,
    pub right: f32,
}

impl PaddleSnapshot {
    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    pub fn height(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    #[test]
    fn test_serve_starts_at_center() {
        let mut rng = GameRng::new(7);
        let ball = Ball::serve(1.0, 0.4, &mut rng);
        assert_eq!(ball.pos, Vec2::new(50.0, 50.0));
        assert_eq!(ball.vel.x, 1.0);
        assert_eq!(ball.vel.y.abs(), 0.4);
    }

    #[test]
    fn test_serve_randomizes_vertical_sign() {
        let mut rng = GameRng::new(12345);
        let signs: Vec<bool> = (0..64)
            .map(|_| Ball::serve(1.0, 0.4, &mut rng).vel.y > 0.0)
            .collect();
        assert!(signs.iter().any(|&up| up), "Some serves should go down");
        assert!(signs.iter().any(|&up| !up), "Some serves should go up");
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Right.opponent(), Side::Left);
    }
}
