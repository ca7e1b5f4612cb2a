use crate::percent::{clamp_percent, clamp_percent_change};
use crate::{Config, ControlProbe, Paddle, PaddleSnapshot, Side};
use hecs::World;

/// Apply paddle movement from held controls (one paddle poll)
pub fn move_paddles<I: ControlProbe + ?Sized>(world: &mut World, input: &I, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let dir = input.paddle_dir(paddle.side);
        if dir != 0 {
            paddle.height = clamp_percent_change(paddle.height, dir as f32 * config.paddle_step);
        }
    }
}

/// Place a paddle directly, clamped to the field
pub fn set_paddle_height(world: &mut World, side: Side, height: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.height = clamp_percent(height);
        }
    }
}

/// Read both paddle heights as they are right now
pub fn paddle_snapshot(world: &World) -> PaddleSnapshot {
    let mut snapshot = PaddleSnapshot::new(50.0, 50.0);
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => snapshot.left = paddle.height,
            Side::Right => snapshot.right = paddle.height,
        }
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Control, InputState};

    fn setup_world() -> (World, Config) {
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, 50.0);
        create_paddle(&mut world, Side::Right, 50.0);
        (world, Config::new())
    }

    #[test]
    fn test_held_keys_move_each_paddle() {
        let (mut world, config) = setup_world();
        let mut input = InputState::new();
        input.press(Control::LeftUp);
        input.press(Control::RightDown);

        move_paddles(&mut world, &input, &config);

        assert_eq!(paddle_snapshot(&world), PaddleSnapshot::new(49.0, 51.0));
    }

    struct RightDownHeld;

    impl ControlProbe for RightDownHeld {
        fn is_pressed(&self, control: Control) -> bool {
            control == Control::RightDown
        }
    }

    #[test]
    fn test_any_probe_drives_paddles() {
        let (mut world, config) = setup_world();

        move_paddles(&mut world, &RightDownHeld, &config);
        move_paddles(&mut world, &RightDownHeld, &config);

        assert_eq!(paddle_snapshot(&world), PaddleSnapshot::new(50.0, 52.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let (mut world, config) = setup_world();
        let mut input = InputState::new();
        input.press(Control::LeftUp);
        input.press(Control::LeftDown);

        move_paddles(&mut world, &input, &config);

        assert_eq!(paddle_snapshot(&world).left, 50.0);
    }

    #[test]
    fn test_paddle_clamped_to_field() {
        let (mut world, config) = setup_world();
        set_paddle_height(&mut world, Side::Left, 0.5);
        let mut input = InputState::new();
        input.press(Control::LeftUp);

        move_paddles(&mut world, &input, &config);
        assert_eq!(paddle_snapshot(&world).left, 0.0);

        set_paddle_height(&mut world, Side::Right, 250.0);
        assert_eq!(paddle_snapshot(&world).right, 100.0);
    }
}
