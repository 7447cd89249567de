use crate::cell::Cell;
use crate::error::{MazeError, Result};
use crate::solver::Direction;
use crate::{MINIMUM_HEIGHT, MINIMUM_WIDTH};
use core::fmt;
use core::str::FromStr;
use grid_util::{Point, SimpleValueGrid, ValueGrid};
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [Maze] stores one [Cell] per position of a rectangular grid. Positions are addressed
/// either as `(row, col)` through the checked [get](Self::get) and [set](Self::set) accessors,
/// or as a [Point] whose `x` is the column and `y` the row. Row 0 is rendered first.
#[derive(Clone, Debug)]
pub struct Maze {
    grid: SimpleValueGrid<Cell>,
}

impl Default for Maze {
    fn default() -> Maze {
        Maze::new(MINIMUM_WIDTH, MINIMUM_HEIGHT)
    }
}

impl Maze {
    /// Creates a maze with [Cell::Start] in the top-left corner, [Cell::Finish] in the
    /// bottom-right corner and [Cell::Open] everywhere else. Dimensions below the minimum
    /// are raised to it.
    pub fn new(width: usize, height: usize) -> Maze {
        let width = width.max(MINIMUM_WIDTH);
        let height = height.max(MINIMUM_HEIGHT);
        let mut grid = SimpleValueGrid::new(width, height, Cell::Open);
        for (y, x) in iproduct!(0..height, 0..width) {
            grid.set(x as i32, y as i32, initial_symbol(x, y, width, height));
        }
        Maze { grid }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Where searches start by default.
    pub fn origin(&self) -> Point {
        Point::new(0, 0)
    }

    /// The only position at which a search succeeds.
    pub fn finish(&self) -> Point {
        Point::new(self.width() as i32 - 1, self.height() as i32 - 1)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    pub fn point_in_bounds(&self, point: Point) -> bool {
        self.in_bounds(point.x, point.y)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.check_bounds(row, col)?;
        Ok(self.grid.get(col as i32, row as i32))
    }

    /// Overwrites a single cell. No check is made that the maze keeps exactly one start
    /// and one finish.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        self.check_bounds(row, col)?;
        self.grid.set(col as i32, row as i32, cell);
        Ok(())
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row < self.height() && col < self.width() {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                row,
                col,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Point-based read used by the solvers; [None] outside the maze.
    pub fn cell_at(&self, point: Point) -> Option<Cell> {
        if self.point_in_bounds(point) {
            Some(self.grid.get_point(point))
        } else {
            None
        }
    }

    pub(crate) fn mark(&mut self, point: Point, cell: Cell) {
        debug_assert!(self.point_in_bounds(point));
        self.grid.set_point(point, cell);
    }

    /// All positions with their cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        iproduct!(0..self.height() as i32, 0..self.width() as i32).map(move |(y, x)| {
            let p = Point::new(x, y);
            (p, self.grid.get_point(p))
        })
    }

    /// Lazily renders the maze, one newline-terminated line per row.
    pub fn render(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height() as i32).map(move |y| {
            let mut line = (0..self.width() as i32)
                .map(|x| self.grid.get(x, y).symbol())
                .collect::<String>();
            line.push('\n');
            line
        })
    }

    /// In-bounds 4-neighbours of a point, in search order.
    pub fn neighbours(&self, point: Point) -> SmallVec<[Point; 4]> {
        Direction::ORDER
            .iter()
            .map(|dir| dir.step(point))
            .filter(|p| self.point_in_bounds(*p))
            .collect()
    }

    fn ix(&self, point: Point) -> usize {
        point.y as usize * self.width() + point.x as usize
    }

    /// Builds a [UnionFind] structure linking up traversable cells that are 4-neighbours.
    pub fn components(&self) -> UnionFind<usize> {
        debug!("Generating connected components");
        let mut components = UnionFind::new(self.width() * self.height());
        for (point, cell) in self.cells() {
            if !cell.is_traversable() {
                continue;
            }
            // Linking forward is enough, the other two directions are covered by the neighbour.
            for dir in [Direction::North, Direction::East] {
                let n = dir.step(point);
                if self.cell_at(n).is_some_and(Cell::is_traversable) {
                    components.union(self.ix(point), self.ix(n));
                }
            }
        }
        components
    }

    /// Checks whether `goal` can be reached from `start` over traversable cells, without
    /// marking anything.
    pub fn reachable(&self, start: Point, goal: Point) -> bool {
        let traversable = |p: Point| self.cell_at(p).is_some_and(Cell::is_traversable);
        if !traversable(start) || !traversable(goal) {
            return false;
        }
        self.components().equiv(self.ix(start), self.ix(goal))
    }
}

fn initial_symbol(x: usize, y: usize, width: usize, height: usize) -> Cell {
    if x == 0 && y == 0 {
        Cell::Start
    } else if x == width - 1 && y == height - 1 {
        Cell::Finish
    } else {
        Cell::Open
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.render() {
            f.write_str(&line)?;
        }
        Ok(())
    }
}

/// Reads the format written by [Display](fmt::Display): one line per row using the cell
/// symbols. Unlike [Maze::new] the size is taken as is and must meet the minimum.
impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Maze> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<&str>>();
        let width = rows.first().ok_or(MazeError::Empty)?.chars().count();
        let height = rows.len();
        if width < MINIMUM_WIDTH || height < MINIMUM_HEIGHT {
            return Err(MazeError::TooSmall { width, height });
        }
        let mut grid = SimpleValueGrid::new(width, height, Cell::Open);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell =
                    Cell::from_symbol(symbol).ok_or(MazeError::UnknownSymbol { symbol, row, col })?;
                grid.set(col as i32, row as i32, cell);
            }
        }
        Ok(Maze { grid })
    }
}
