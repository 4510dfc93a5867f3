pub mod collision;
pub mod input;
pub mod movement;
pub mod paddle;
pub mod scoring;
pub mod serve;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use paddle::*;
pub use scoring::*;
pub use serve::*;
