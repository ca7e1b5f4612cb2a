pub mod ball;
pub mod collision;
pub mod movement;
pub mod scoring;

pub use ball::*;
pub use collision::*;
pub use movement::*;
pub use scoring::*;
