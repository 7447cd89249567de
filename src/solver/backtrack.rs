use grid_util::Point;
use log::{debug, trace};

use crate::{
    cell::Cell,
    maze::Maze,
    solver::{Direction, MazeSolver},
};

/// Recursive depth-first search that marks cells in place. A cell is marked
/// [Cell::PathMarked] before its neighbours are tried, which keeps the recursion from
/// revisiting it, and demoted to [Cell::DeadEnd] once all of them have failed. Dead ends
/// stay blocked for the rest of the maze's life, so searching the same maze twice fails
/// the second time.
#[derive(Clone, Copy, Debug, Default)]
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    pub fn new() -> BacktrackingSolver {
        BacktrackingSolver
    }

    fn explore(&self, maze: &mut Maze, pos: Point) -> bool {
        match maze.cell_at(pos) {
            Some(cell) if cell.is_traversable() => {}
            // Outside the maze, a barrier, or already visited
            _ => return false,
        }
        if pos == maze.finish() {
            maze.mark(pos, Cell::PathMarked);
            return true;
        }
        maze.mark(pos, Cell::PathMarked);
        // Same order as Direction::ORDER, spelled out to keep each recursion level to one frame.
        if self.explore(maze, Direction::North.step(pos))
            || self.explore(maze, Direction::East.step(pos))
            || self.explore(maze, Direction::South.step(pos))
            || self.explore(maze, Direction::West.step(pos))
        {
            return true;
        }
        trace!("Backtracking out of {}", pos);
        maze.mark(pos, Cell::DeadEnd);
        false
    }
}

impl MazeSolver for BacktrackingSolver {
    fn find_path_from(&self, maze: &mut Maze, x: i32, y: i32) -> bool {
        let start = Point::new(x, y);
        debug!("Searching for a path from {} to {}", start, maze.finish());
        let found = self.explore(maze, start);
        debug!("Search from {} finished, path found: {}", start, found);
        found
    }
}
