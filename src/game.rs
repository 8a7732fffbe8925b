use std::{fmt, io::Write, thread::sleep};

use crate::{Coords, TermInt};
use crate::board::{Board, Cell};
use crate::config::GameConfig;
use crate::error::Result;
use crate::input::InputCell;
use crate::snake::{Snake, Direction::{*, self}};
use crate::term::TermManager;

use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug, info};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cause {
    Wall,
    SelfCollision,
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Wall => write!(f, "You hit the wall"),
            Cause::SelfCollision => write!(f, "You ran into yourself"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Terminated { cause: Cause, score: u32 },
}

/// How a call to [`run`] ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Terminated { cause: Cause, score: u32 },
    Quit { score: u32 },
}

impl SessionEnd {
    pub fn message(&self) -> String {
        match self {
            SessionEnd::Terminated { cause, score } => format!("Game over! {}. Score: {}", cause, score),
            SessionEnd::Quit { score } => format!("Quit. Score: {}", score),
        }
    }

    /// Process status: the score after a collision, 0 after quitting.
    pub fn exit_code(&self) -> i32 {
        match self {
            SessionEnd::Terminated { score, .. } => exit_code_for(*score),
            SessionEnd::Quit { .. } => 0,
        }
    }
}

/// Exit statuses are a single byte, so scores above 255 saturate.
pub fn exit_code_for(score: u32) -> i32 {
    score.min(u8::MAX as u32) as i32
}

/// All state of one game: the board, the snake and the tick bookkeeping.
pub struct GameSession<R = ThreadRng> {
    board: Board,
    snake: Snake,
    rng: R,
    ticks: u64,
    score: u32,
    food_cadence: u64,
    food: Option<Coords>,
    /// Segment the next grown segment attaches to, set when food is eaten.
    pending_growth: Option<usize>,
    terminated: Option<Cause>,
}

impl GameSession<ThreadRng> {
    pub fn new(config: &GameConfig) -> Self {
        GameSession::new_with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameSession<R> {
    /// Starts a session with the head heading left from a random interior cell.
    pub fn new_with_rng(config: &GameConfig, mut rng: R) -> Self {
        let (width, height) = config.board_size();
        let head = random_start(width, height, &mut rng);
        GameSession::with_head(config, head, Left, rng)
    }

    pub fn with_head(config: &GameConfig, head: Coords, direction: Direction, rng: R) -> Self {
        let (width, height) = config.board_size();
        let mut board = Board::new(width, height);
        board.set(head, Cell::Occupied);

        info!(width, height, head = ?head, "session started");

        GameSession {
            board,
            snake: Snake::new(head, direction),
            rng,
            ticks: 0,
            score: 0,
            food_cadence: config.food_cadence.max(1),
            food: None,
            pending_growth: None,
            terminated: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn food(&self) -> Option<Coords> {
        self.food
    }

    pub fn growth_pending(&self) -> bool {
        self.pending_growth.is_some()
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated.is_some()
    }

    /// Places food at `pos`, replacing any food already on the board. Only an
    /// empty interior cell is accepted; otherwise nothing changes and `false`
    /// is returned.
    pub fn place_food(&mut self, pos: Coords) -> bool {
        if self.board.is_border(pos) || self.board.get(pos) != Cell::Empty {
            return false;
        }

        if let Some(old) = self.food.take() {
            self.board.set(old, Cell::Empty);
        }
        self.board.set(pos, Cell::Food);
        self.food = Some(pos);
        true
    }

    /// Runs one tick: deferred growth, food cadence, steering, head move with
    /// collision check, then body propagation.
    pub fn tick(&mut self, input: Option<Direction>) -> Outcome {
        if let Some(cause) = self.terminated {
            return Outcome::Terminated { cause, score: self.score };
        }

        if let Some(anchor) = self.pending_growth.take() {
            let pos = self.snake.grow_after(anchor);
            self.board.set(pos, Cell::Occupied);
            self.score += 1;
            debug!(pos = ?pos, len = self.snake.len(), score = self.score, "snake grew");
        }

        if self.ticks % self.food_cadence == 0 && self.food.is_none() {
            self.food = self.board.spawn_food(&mut self.rng);
            match self.food {
                Some(pos) => debug!(pos = ?pos, tick = self.ticks, "food spawned"),
                None => debug!(tick = self.ticks, "no free cell for food"),
            }
        }

        if let Some(dir) = input {
            self.snake.set_direction(dir);
        }

        let dest = self.snake.next_head();
        match self.board.get(dest) {
            Cell::Wall => return self.terminate(Cause::Wall),
            Cell::Occupied => return self.terminate(Cause::SelfCollision),
            Cell::Food => {
                self.food = None;
                self.pending_growth = Some(self.snake.tail_index());
            }
            Cell::Empty => {}
        }

        let (old, new) = self.snake.advance_head();
        self.board.set(old, Cell::Empty);
        self.board.set(new, Cell::Occupied);

        for i in 1..self.snake.len() {
            let (old, new) = self.snake.follow(i);
            self.board.set(old, Cell::Empty);
            self.board.set(new, Cell::Occupied);
        }

        self.ticks += 1;
        Outcome::Continue
    }

    ///////////////////////////////////////////////////////////////////////////

    fn terminate(&mut self, cause: Cause) -> Outcome {
        self.terminated = Some(cause);
        info!(cause = ?cause, score = self.score, ticks = self.ticks, "session terminated");
        Outcome::Terminated { cause, score: self.score }
    }
}

/// Drives `session` until it terminates or a quit is requested: tick, redraw,
/// then wait out the tick interval.
pub fn run<R: Rng, W: Write>(
    session: &mut GameSession<R>,
    term: &mut TermManager<W>,
    input: &InputCell,
    config: &GameConfig,
) -> Result<SessionEnd> {
    loop {
        if input.quit_requested() {
            info!(score = session.score(), "quit requested");
            return Ok(SessionEnd::Quit { score: session.score() });
        }

        let outcome = session.tick(input.latest());
        term.draw_frame(&session.board().render(), &format!("Score: {}", session.score()))?;

        if let Outcome::Terminated { cause, score } = outcome {
            return Ok(SessionEnd::Terminated { cause, score });
        }

        sleep(config.tick_interval);
    }
}

fn random_start<R: Rng>(width: TermInt, height: TermInt, rng: &mut R) -> Coords {
    // Keep a few cells of room ahead of the head, which starts heading left
    let x_hi = width.saturating_sub(5).max(2);
    let y_hi = height.saturating_sub(3).max(1);
    (rng.gen_range(2..=x_hi).min(width - 2), rng.gen_range(1..=y_hi).min(height - 2))
}
