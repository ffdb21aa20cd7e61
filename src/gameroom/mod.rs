mod player;
mod room;

pub use player::*;
pub use room::*;
