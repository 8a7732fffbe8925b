pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod snake;
pub mod term;

pub type TermInt = u16;
pub type Coords = (u16, u16);
