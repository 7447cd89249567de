//! # maze_pathfinding
//!
//! An editable maze on a rectangular grid together with a recursive
//! [depth-first](https://en.wikipedia.org/wiki/Depth-first_search) backtracking
//! search. The search walks from the top-left start to the bottom-right finish,
//! marking the committed path with [Cell::PathMarked] and every explored cell
//! that led nowhere with [Cell::DeadEnd]. Note that the path found is *a* path,
//! not necessarily the shortest one.
//!
//! Reachability can also be answered without touching the maze through
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)),
//! see [Maze::reachable].
pub mod cell;
pub mod editor;
pub mod error;
pub mod maze;
pub mod solver;

pub use cell::Cell;
pub use editor::{EditorSettings, MazeEditor};
pub use error::{MazeError, Result};
pub use grid_util::Point;
pub use maze::Maze;
pub use solver::{backtrack::BacktrackingSolver, trace_path, Direction, MazeSolver};

/// Smallest width a [Maze] can have; smaller requests are raised to it.
pub const MINIMUM_WIDTH: usize = 3;
/// Smallest height a [Maze] can have; smaller requests are raised to it.
pub const MINIMUM_HEIGHT: usize = 3;

/// Lower bound of the dimensions accepted by [EditorSettings].
pub const EDITOR_MIN_DIMENSION: usize = 2;
/// Upper bound of the dimensions accepted by [EditorSettings].
pub const EDITOR_MAX_DIMENSION: usize = 100;

/// Convenience wrapper running the [BacktrackingSolver] from the origin.
pub fn find_path(maze: &mut Maze) -> bool {
    BacktrackingSolver.find_path(maze)
}

/// Convenience wrapper running the [BacktrackingSolver] from `(x, y)`.
pub fn find_path_from(maze: &mut Maze, x: i32, y: i32) -> bool {
    BacktrackingSolver.find_path_from(maze, x, y)
}
