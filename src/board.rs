//! Board storage: a fixed-size square grid of intersections.
//!
//! The board has no rules knowledge beyond bounds checking. Cells are stored
//! `x`-major (`x * size + y`), the same order the state codec scans in.

use std::fmt;

use crate::constants::NEIGHBORHOOD;

/// A stone color, also used for the side to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// 0 for Black, 1 for White.
    pub fn index(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// The state of a single board point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Intersection {
    #[default]
    Empty,
    Black,
    White,
}

impl Intersection {
    /// The intersection holding a stone of `color`.
    pub fn stone(color: Color) -> Self {
        match color {
            Color::Black => Intersection::Black,
            Color::White => Intersection::White,
        }
    }

    /// The stone color here, or `None` if empty.
    pub fn color(self) -> Option<Color> {
        match self {
            Intersection::Empty => None,
            Intersection::Black => Some(Color::Black),
            Intersection::White => Some(Color::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Intersection::Empty
    }
}

/// A board coordinate `(x, y)`.
pub type Point = (usize, usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Intersection>,
}

impl Board {
    /// Create an empty `size`x`size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Intersection::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        x * self.size + y
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Returns `None` for coordinates off the board.
    pub fn get(&self, x: usize, y: usize) -> Option<Intersection> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.cells[self.idx(x, y)])
    }

    /// Store `value` at `(x, y)`. Off-board writes are ignored and return `false`.
    pub fn set(&mut self, x: usize, y: usize, value: Intersection) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let i = self.idx(x, y);
        self.cells[i] = value;
        true
    }

    /// On-board orthogonal neighbours of `(x, y)` in +x, +y, -x, -y order.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = Point> + '_ {
        NEIGHBORHOOD.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            self.in_bounds(nx, ny).then_some((nx, ny))
        })
    }

    /// All points in scan order (x outer, y inner) with their contents.
    pub fn points(&self) -> impl Iterator<Item = (Point, Intersection)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| ((i / self.size, i % self.size), v))
    }

    /// Number of stones of `color` on the board.
    pub fn stones(&self, color: Color) -> usize {
        let target = Intersection::stone(color);
        self.cells.iter().filter(|&&c| c == target).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.cells[self.idx(x, y)] {
                    Intersection::Black => 'X',
                    Intersection::White => 'O',
                    Intersection::Empty => '.',
                };
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
