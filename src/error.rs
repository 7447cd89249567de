use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("cell (row {row}, col {col}) out of bounds for maze {width}x{height}")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
    #[error("coordinate ({x}, {y}) is negative")]
    NegativeCoordinate { x: i32, y: i32 },
    #[error("unknown cell symbol {symbol:?} at (row {row}, col {col})")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("maze {width}x{height} is smaller than the 3x3 minimum")]
    TooSmall { width: usize, height: usize },
    #[error("maze description contains no rows")]
    Empty,
}

pub type Result<T> = std::result::Result<T, MazeError>;
