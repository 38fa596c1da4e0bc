pub mod collision;
pub mod movement;
pub mod spawn;

pub use collision::*;
pub use movement::*;
pub use spawn::*;
