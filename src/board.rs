use crate::{Coords, TermInt};
use crate::config::MIN_BOARD_SIDE;

use rand::Rng;
use rand::seq::SliceRandom;

pub const WALL_CHAR: char = '█';
pub const FOOD_CHAR: char = 'X';
pub const PLAYER_CHAR: char = 'O';
pub const EMPTY_CHAR: char = ' ';

// Random picks tried before falling back to a scan of the free cells
const MAX_FOOD_ATTEMPTS: usize = 64;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Food,
    Occupied,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => EMPTY_CHAR,
            Cell::Wall => WALL_CHAR,
            Cell::Food => FOOD_CHAR,
            Cell::Occupied => PLAYER_CHAR,
        }
    }
}

/// Fixed-size grid surrounded by a wall.
///
/// Coordinates are never bounds-checked against the board size beyond what
/// slice indexing does: callers keep `x < width` and `y < height`.
#[derive(Clone, Debug)]
pub struct Board {
    width: TermInt,
    height: TermInt,
    cells: Vec<Cell>,
}

impl Board {
    /// Sides shorter than `MIN_BOARD_SIDE` are raised to it.
    pub fn new(width: TermInt, height: TermInt) -> Self {
        let (width, height) = (width.max(MIN_BOARD_SIDE), height.max(MIN_BOARD_SIDE));
        let mut cells = Vec::with_capacity(width as usize * height as usize);

        for y in 0..height {
            for x in 0..width {
                let cell = if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                    Cell::Wall
                } else {
                    Cell::Empty
                };
                cells.push(cell);
            }
        }

        Board { width, height, cells }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn get(&self, pos: Coords) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Writes a cell. Border cells always stay `Wall`.
    pub fn set(&mut self, pos: Coords, cell: Cell) {
        if self.is_border(pos) {
            return;
        }

        let i = self.index(pos);
        self.cells[i] = cell;
    }

    pub fn is_border(&self, pos: Coords) -> bool {
        pos.0 == 0 || pos.1 == 0 || pos.0 == self.width - 1 || pos.1 == self.height - 1
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);

        for row in self.cells.chunks(self.width as usize) {
            out.extend(row.iter().map(|c| c.glyph()));
            out.push('\n');
        }

        out
    }

    /// Places food on a random empty cell with `x` in `[2, width-2]` and `y`
    /// in `[2, height-2]`. Returns `None` when that region has no empty cell.
    pub fn spawn_food<R: Rng>(&mut self, rng: &mut R) -> Option<Coords> {
        let (max_x, max_y) = (self.width.checked_sub(2)?, self.height.checked_sub(2)?);
        if max_x < 2 || max_y < 2 {
            return None;
        }

        for _ in 0..MAX_FOOD_ATTEMPTS {
            let pos = (rng.gen_range(2..=max_x), rng.gen_range(2..=max_y));
            if self.get(pos) == Cell::Empty {
                self.set(pos, Cell::Food);
                return Some(pos);
            }
        }

        let choices: Vec<Coords> = (2..=max_y)
            .flat_map(|y| (2..=max_x).map(move |x| (x, y)))
            .filter(|pos| self.get(*pos) == Cell::Empty)
            .collect();

        choices.choose(rng).copied().map(|pos| {
            self.set(pos, Cell::Food);
            pos
        })
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, pos: Coords) -> usize {
        self.width as usize * pos.1 as usize + pos.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn border_is_wall_and_interior_is_empty() {
        let board = Board::new(6, 4);
        assert_eq!((board.width(), board.height()), (6, 4));

        assert_eq!(board.get((0, 0)), Cell::Wall);
        assert_eq!(board.get((5, 3)), Cell::Wall);
        assert_eq!(board.get((0, 2)), Cell::Wall);
        assert_eq!(board.get((3, 0)), Cell::Wall);
        assert_eq!(board.get((1, 1)), Cell::Empty);
        assert_eq!(board.get((4, 2)), Cell::Empty);
        assert_eq!(board.count(Cell::Wall), 6 * 2 + 2 * 2);
    }

    #[test]
    fn set_never_overwrites_the_wall() {
        let mut board = Board::new(5, 5);
        board.set((0, 2), Cell::Occupied);
        board.set((4, 4), Cell::Food);

        assert_eq!(board.get((0, 2)), Cell::Wall);
        assert_eq!(board.get((4, 4)), Cell::Wall);
    }

    #[test]
    fn undersized_board_gets_one_interior_cell() {
        let board = Board::new(0, 1);

        assert_eq!((board.width(), board.height()), (3, 3));
        assert_eq!(board.get((1, 1)), Cell::Empty);
        assert_eq!(board.count(Cell::Wall), 8);
    }

    #[test]
    fn render_reflects_stored_cells() {
        let mut board = Board::new(4, 3);
        board.set((1, 1), Cell::Occupied);
        board.set((2, 1), Cell::Food);

        assert_eq!(board.render(), "████\n█OX█\n████\n");
    }

    #[test]
    fn food_lands_inside_the_spawn_region() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new(12, 9);

        for _ in 0..20 {
            let pos = board.spawn_food(&mut rng).unwrap();
            assert!((2..=10).contains(&pos.0));
            assert!((2..=7).contains(&pos.1));
            assert_eq!(board.get(pos), Cell::Food);
        }

        assert_eq!(board.count(Cell::Food), 20);
    }

    #[test]
    fn food_finds_the_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new(10, 10);

        for y in 2..=8 {
            for x in 2..=8 {
                board.set((x, y), Cell::Occupied);
            }
        }
        board.set((6, 3), Cell::Empty);

        assert_eq!(board.spawn_food(&mut rng), Some((6, 3)));
        assert_eq!(board.spawn_food(&mut rng), None);
    }

    #[test]
    fn tiny_board_has_no_room_for_food() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Board::new(3, 3);

        assert_eq!(board.spawn_food(&mut rng), None);
    }
}
