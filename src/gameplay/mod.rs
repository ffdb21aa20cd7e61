mod game;
mod pile;
mod seat;
mod turn;

pub use game::*;
pub use pile::*;
pub use seat::*;
pub use turn::*;
