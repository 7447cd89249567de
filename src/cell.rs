use core::fmt;

/// Classification of a single maze position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    Barrier,
    Start,
    Finish,
    /// Traversable and not yet visited by a search.
    #[default]
    Open,
    /// Tentatively or definitively on the discovered path.
    PathMarked,
    /// Visited and backtracked out of.
    DeadEnd,
}

impl Cell {
    pub const ALL: [Cell; 6] = [
        Cell::Barrier,
        Cell::Start,
        Cell::Finish,
        Cell::Open,
        Cell::PathMarked,
        Cell::DeadEnd,
    ];

    /// The character used when rendering or parsing a maze.
    pub fn symbol(self) -> char {
        match self {
            Cell::Barrier => 'X',
            Cell::Start => 'S',
            Cell::Finish => 'F',
            Cell::Open => 'N',
            Cell::PathMarked => '+',
            Cell::DeadEnd => '-',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        Cell::ALL.into_iter().find(|cell| cell.symbol() == symbol)
    }

    /// Whether a search may still step onto this cell.
    pub fn is_traversable(self) -> bool {
        matches!(self, Cell::Open | Cell::Start | Cell::Finish)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
