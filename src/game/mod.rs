mod cell;
pub use cell::*;
mod board;
pub use board::*;
pub mod window;
mod win;
mod game;
pub use game::*;
