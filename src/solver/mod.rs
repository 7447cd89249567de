use crate::{cell::Cell, maze::Maze};
use fxhash::FxBuildHasher;
use grid_util::Point;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use std::collections::VecDeque;

pub mod backtrack;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// The four moves available in a maze. North increases the row index, matching the
/// row/column layout of [Maze] rather than screen orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The order in which neighbours are tried. Changing it changes which path is found.
    pub const ORDER: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Column and row delta of a single step.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    pub fn step(self, from: Point) -> Point {
        let (dx, dy) = self.offset();
        Point::new(from.x + dx, from.y + dy)
    }
}

pub trait MazeSolver {
    /// Searches from `(x, y)` (column, row) towards [Maze::finish], marking the maze as it goes.
    fn find_path_from(&self, maze: &mut Maze, x: i32, y: i32) -> bool;

    /// Searches from the origin.
    fn find_path(&self, maze: &mut Maze) -> bool {
        let origin = maze.origin();
        self.find_path_from(maze, origin.x, origin.y)
    }
}

/// Recovers the committed path left behind by a successful search as an ordered list
/// running from [Maze::origin] to [Maze::finish]. Returns [None] if either end is not
/// marked or the marked cells do not connect them.
pub fn trace_path(maze: &Maze) -> Option<Vec<Point>> {
    let start = maze.origin();
    let goal = maze.finish();
    let marked = |p: Point| maze.cell_at(p) == Some(Cell::PathMarked);
    if !marked(start) || !marked(goal) {
        return None;
    }
    // Each entry maps a cell to the index of the cell it was reached from.
    let mut parents: FxIndexMap<Point, usize> = FxIndexMap::default();
    parents.insert(start, usize::MAX);
    let mut queue = VecDeque::from([0]);
    while let Some(ix) = queue.pop_front() {
        let (&node, _) = parents.get_index(ix)?;
        if node == goal {
            return Some(reverse_path(&parents, ix));
        }
        for n in maze.neighbours(node) {
            if !marked(n) {
                continue;
            }
            if let Vacant(entry) = parents.entry(n) {
                queue.push_back(entry.index());
                entry.insert(ix);
            }
        }
    }
    None
}

fn reverse_path(parents: &FxIndexMap<Point, usize>, end: usize) -> Vec<Point> {
    let mut path = std::iter::successors(parents.get_index(end), |&(_, parent)| {
        parents.get_index(*parent)
    })
    .map(|(&node, _)| node)
    .collect::<Vec<Point>>();
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_step_one_cell() {
        let p = Point::new(2, 2);
        for dir in Direction::ORDER {
            let n = dir.step(p);
            assert_eq!((n.x - p.x).abs() + (n.y - p.y).abs(), 1);
        }
        assert_eq!(Direction::North.step(p), Point::new(2, 3));
        assert_eq!(Direction::West.step(p), Point::new(1, 2));
    }

    #[test]
    fn trace_requires_marked_ends() {
        let maze = Maze::new(3, 3);
        assert_eq!(trace_path(&maze), None);
        let broken: Maze = "+NN\nNNN\nNN+".parse().unwrap();
        assert_eq!(trace_path(&broken), None);
    }

    #[test]
    fn trace_follows_marked_cells() {
        // Row 0 is the first line; the marked cells bend through (2, 0).
        let maze: Maze = "+++\n--+\nNN+".parse().unwrap();
        let path = trace_path(&maze).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2)
            ]
        );
    }
}
