//! Background key sampling.
//!
//! A dedicated thread polls crossterm for key events and publishes the most
//! recent arrow key through an [`InputCell`]. The game loop reads the cell
//! once per tick without waiting: it may see a value that is up to one poll
//! interval old, and it sees the same direction again on every tick until a
//! new arrow key arrives.

use crate::snake::Direction::{self, *};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, poll, read};
use tracing::{debug, warn};

const POLL_INTERVAL_MS: u64 = 10;

const NO_DIRECTION: u8 = 0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

/// Maps a key press to a command. Only arrow keys steer; everything except
/// Ctrl+C is ignored.
pub fn decode_key(ev: &KeyEvent) -> Option<Command> {
    match ev {
        KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL } => Some(Command::Quit),
        KeyEvent { code, modifiers: _ } => match code {
            KeyCode::Up => Some(Command::Turn(Up)),
            KeyCode::Down => Some(Command::Turn(Down)),
            KeyCode::Left => Some(Command::Turn(Left)),
            KeyCode::Right => Some(Command::Turn(Right)),
            _ => None,
        }
    }
}

/// Latest input shared between the sampler thread (writer) and the game
/// loop (reader).
#[derive(Debug, Default)]
pub struct InputCell {
    direction: AtomicU8,
    quit: AtomicBool,
}

impl InputCell {
    pub fn new() -> Self {
        InputCell { direction: AtomicU8::new(NO_DIRECTION), quit: AtomicBool::new(false) }
    }

    pub fn apply(&self, command: Command) {
        match command {
            Command::Turn(dir) => self.direction.store(encode(dir), Ordering::Release),
            Command::Quit => self.quit.store(true, Ordering::Release),
        }
    }

    /// Most recent arrow key, or `None` if none has been pressed yet.
    pub fn latest(&self) -> Option<Direction> {
        decode(self.direction.load(Ordering::Acquire))
    }

    pub fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::Acquire)
    }
}

/// Starts the sampler thread. It runs until a quit key is read or the
/// terminal stops delivering events.
pub fn spawn_sampler(cell: Arc<InputCell>) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("input-sampler".into())
        .spawn(move || sample_loop(&cell))
}

fn sample_loop(cell: &InputCell) {
    loop {
        let ready = match poll(Duration::from_millis(POLL_INTERVAL_MS)) {
            Ok(ready) => ready,
            Err(e) => {
                warn!(error = %e, "polling terminal events failed, input sampler stopping");
                return;
            }
        };

        if !ready {
            continue;
        }

        match read() {
            Ok(Event::Key(ev)) => {
                if let Some(command) = decode_key(&ev) {
                    cell.apply(command);
                    if command == Command::Quit {
                        debug!("quit key read, input sampler stopping");
                        return;
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "reading terminal event failed, input sampler stopping");
                return;
            }
        }
    }
}

fn encode(dir: Direction) -> u8 {
    match dir {
        Up => 1,
        Down => 2,
        Left => 3,
        Right => 4,
    }
}

fn decode(raw: u8) -> Option<Direction> {
    match raw {
        1 => Some(Up),
        2 => Some(Down),
        3 => Some(Left),
        4 => Some(Right),
        _ => None,
    }
}
