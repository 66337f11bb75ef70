use std::ops::{Add, BitOr};

/// Bitmask cell state. Only the combinations listed in [`SYMBOLS`] ever occur on a grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Cell(u8);

impl Cell {
    pub const EMPTY: Cell = Cell(0b0000);
    pub const TARGET: Cell = Cell(0b0001);
    pub const CRATE: Cell = Cell(0b0010);
    pub const WALL: Cell = Cell(0b0100);
    pub const SOKO: Cell = Cell(0b1000);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, flag: Cell) -> bool {
        self.0 & flag.0 == flag.0 && flag.0 != 0
    }

    pub const fn intersects(self, flags: Cell) -> bool {
        self.0 & flags.0 != 0
    }

    pub fn insert(&mut self, flag: Cell) {
        self.0 |= flag.0;
    }

    pub fn remove(&mut self, flag: Cell) {
        self.0 &= !flag.0;
    }

    /// A crate that is not sitting on a target.
    pub fn is_bare_crate(self) -> bool {
        self == Cell::CRATE
    }

    /// Occupied by something a crate cannot be pushed through.
    pub fn is_blocking(self) -> bool {
        self.intersects(Cell::CRATE | Cell::WALL)
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        SYMBOLS.iter().find(|(s, _)| *s == symbol).map(|&(_, cell)| cell)
    }

    /// `None` for bit combinations that are not a legal cell state.
    pub fn symbol(self) -> Option<char> {
        SYMBOLS.iter().find(|(_, c)| *c == self).map(|&(s, _)| s)
    }
}

impl BitOr for Cell {
    type Output = Cell;

    fn bitor(self, rhs: Cell) -> Cell {
        Cell(self.0 | rhs.0)
    }
}

pub const SYMBOLS: [(char, Cell); 7] = [
    (' ', Cell::EMPTY),
    ('#', Cell::WALL),
    ('@', Cell::SOKO),
    ('$', Cell::CRATE),
    ('.', Cell::TARGET),
    ('*', Cell(Cell::CRATE.0 | Cell::TARGET.0)),
    ('+', Cell(Cell::SOKO.0 | Cell::TARGET.0)),
];

/// Grid coordinate: `i` is the row, `j` the column.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { i: self.i + rhs.i, j: self.j + rhs.j }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Down => 'v',
            Direction::Left => '<',
            Direction::Right => '>',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Direction> {
        match symbol {
            '^' => Some(Direction::Up),
            'v' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            '>' => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

impl GameChangeType {
    pub fn pushes(self) -> usize {
        match self {
            GameChangeType::PlayerMove => 0,
            GameChangeType::PlayerAndBoxMove => 1,
        }
    }
}
