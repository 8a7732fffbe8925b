use crate::TermInt;
use std::time::Duration;

pub const BOARD_WIDTH: TermInt = 30;
pub const BOARD_HEIGHT: TermInt = 10;
/// Smallest side length that still leaves one interior cell inside the wall.
pub const MIN_BOARD_SIDE: TermInt = 3;
pub const TICK_INTERVAL_MS: u64 = 400;
/// Food is spawned on every tick divisible by this.
pub const FOOD_CADENCE: u64 = 12;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Board width including the wall; values below `MIN_BOARD_SIDE` are raised to it.
    pub width: TermInt,
    /// Board height including the wall; values below `MIN_BOARD_SIDE` are raised to it.
    pub height: TermInt,
    pub tick_interval: Duration,
    pub food_cadence: u64,
}

impl GameConfig {
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Width and height actually used for the board.
    pub fn board_size(&self) -> (TermInt, TermInt) {
        (self.width.max(MIN_BOARD_SIDE), self.height.max(MIN_BOARD_SIDE))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            food_cadence: FOOD_CADENCE,
        }
    }
}
