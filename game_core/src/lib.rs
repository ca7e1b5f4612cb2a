pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod field;
pub mod fsm;
pub mod input;
pub mod params;
pub mod percent;
pub mod resources;
pub mod session;
pub mod systems;
pub mod timers;

pub use app::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use field::*;
pub use fsm::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use timers::*;

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut hecs::World, side: Side, height: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, height),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut hecs::World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
