use crate::Coords;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// The neighbouring cell in this direction. Moving off the top or left
    /// edge saturates at 0, which is always wall.
    pub fn step(self, pos: Coords) -> Coords {
        match self {
            Up => (pos.0, pos.1.saturating_sub(1)),
            Down => (pos.0, pos.1 + 1),
            Left => (pos.0.saturating_sub(1), pos.1),
            Right => (pos.0 + 1, pos.1),
        }
    }

    /// Direction of a single-cell move from `from` to `to`, if they are adjacent.
    pub fn between(from: Coords, to: Coords) -> Option<Direction> {
        [Up, Down, Left, Right].iter().copied().find(|d| d.step(from) == to && from != to)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub pos: Coords,
    pub prev: Coords,
    pub direction: Direction,
    /// Index of the segment directly ahead. Only the head has none.
    pub parent: Option<usize>,
}

/// Snake body stored as an arena: head at index 0, each later segment
/// referencing the one appended before it.
#[derive(Clone, Debug)]
pub struct Snake {
    segments: Vec<Segment>,
}

impl Snake {
    pub fn new(head: Coords, direction: Direction) -> Self {
        let head = Segment { pos: head, prev: head, direction, parent: None };
        Snake { segments: vec![head] }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn tail_index(&self) -> usize {
        self.segments.len() - 1
    }

    pub fn get_direction(&self) -> Direction {
        self.head().direction
    }

    /// Turns the head. Reversing straight into the body is ignored.
    pub fn set_direction(&mut self, new_direction: Direction) {
        if self.len() > 1 && new_direction == self.get_direction().opposite() {
            return;
        }

        self.segments[0].direction = new_direction;
    }

    /// Cell the head would enter on its next move.
    pub fn next_head(&self) -> Coords {
        let head = self.head();
        head.direction.step(head.pos)
    }

    /// Moves the head one cell, returning the old and new positions.
    pub fn advance_head(&mut self) -> (Coords, Coords) {
        let head = &mut self.segments[0];
        let old = head.pos;

        head.prev = old;
        head.pos = head.direction.step(old);

        (old, head.pos)
    }

    /// Moves a non-head segment onto the cell its parent just left.
    /// Returns the old and new positions; the head stays where it is.
    pub fn follow(&mut self, index: usize) -> (Coords, Coords) {
        let seg = &self.segments[index];
        let old = seg.pos;
        let target = match seg.parent {
            Some(parent) => self.segments[parent].prev,
            None => return (old, old),
        };

        let seg = &mut self.segments[index];

        seg.prev = old;
        seg.pos = target;
        if let Some(dir) = Direction::between(old, target) {
            seg.direction = dir;
        }

        (old, target)
    }

    /// Appends a segment one cell behind `index`, opposite to its direction
    /// of travel, and returns the new segment's position.
    pub fn grow_after(&mut self, index: usize) -> Coords {
        let anchor = &self.segments[index];
        let pos = anchor.direction.opposite().step(anchor.pos);
        let direction = anchor.direction;

        self.segments.push(Segment { pos, prev: pos, direction, parent: Some(index) });
        pos
    }
}
