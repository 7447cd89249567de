use grid_util::Point;
use log::info;

use crate::{
    cell::Cell,
    error::{MazeError, Result},
    maze::Maze,
    solver::{backtrack::BacktrackingSolver, MazeSolver},
    EDITOR_MAX_DIMENSION, EDITOR_MIN_DIMENSION,
};

/// Size of the maze an editor builds on [reset](MazeEditor::reset).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorSettings {
    pub width: usize,
    pub height: usize,
}

impl Default for EditorSettings {
    fn default() -> EditorSettings {
        EditorSettings {
            width: 3,
            height: 3,
        }
    }
}

impl EditorSettings {
    /// Clamps both dimensions into the range the editor accepts. The maze itself raises
    /// anything below its own minimum further.
    pub fn new(width: usize, height: usize) -> EditorSettings {
        let clamp = |v: usize| v.clamp(EDITOR_MIN_DIMENSION, EDITOR_MAX_DIMENSION);
        EditorSettings {
            width: clamp(width),
            height: clamp(height),
        }
    }
}

/// Holds the maze being edited together with the settings used to rebuild it. Drawing and
/// input handling live outside; they read the maze and call the editing methods here.
#[derive(Clone, Debug)]
pub struct MazeEditor {
    pub settings: EditorSettings,
    maze: Maze,
    solver: BacktrackingSolver,
}

impl Default for MazeEditor {
    fn default() -> MazeEditor {
        MazeEditor::new(EditorSettings::default())
    }
}

impl MazeEditor {
    pub fn new(settings: EditorSettings) -> MazeEditor {
        MazeEditor {
            settings,
            maze: Maze::new(settings.width, settings.height),
            solver: BacktrackingSolver::new(),
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn maze_mut(&mut self) -> &mut Maze {
        &mut self.maze
    }

    /// Stores new dimensions; they take effect on the next [reset](Self::reset).
    pub fn set_dimensions(&mut self, width: usize, height: usize) {
        self.settings = EditorSettings::new(width, height);
    }

    /// Throws the current maze away and builds a fresh one from the settings.
    pub fn reset(&mut self) {
        self.maze = Maze::new(self.settings.width, self.settings.height);
        info!(
            "Maze reset to {}x{}",
            self.maze.width(),
            self.maze.height()
        );
    }

    pub fn log_maze(&self) {
        info!("\n{}", self.maze);
    }

    /// Runs the solver from the origin and logs the outcome together with the marked maze.
    pub fn find_path(&mut self) -> bool {
        let found = self.solver.find_path(&mut self.maze);
        info!("Is there a path: {}", found);
        self.log_maze();
        found
    }

    /// Marked cells that should be highlighted, leaving out the two corners which keep
    /// their own colouring.
    pub fn path_highlights(&self) -> Vec<Point> {
        let origin = self.maze.origin();
        let finish = self.maze.finish();
        self.maze
            .cells()
            .filter(|&(p, cell)| cell == Cell::PathMarked && p != origin && p != finish)
            .map(|(p, _)| p)
            .collect()
    }

    /// Raises an open cell into a barrier. Returns whether the cell changed.
    pub fn place_barrier(&mut self, x: i32, y: i32) -> Result<bool> {
        self.replace(x, y, Cell::Open, Cell::Barrier)
    }

    /// Lowers a barrier back into an open cell. Returns whether the cell changed.
    pub fn remove_barrier(&mut self, x: i32, y: i32) -> Result<bool> {
        self.replace(x, y, Cell::Barrier, Cell::Open)
    }

    fn replace(&mut self, x: i32, y: i32, from: Cell, to: Cell) -> Result<bool> {
        let (row, col) = self.to_index(x, y)?;
        if self.maze.get(row, col)? != from {
            return Ok(false);
        }
        self.maze.set(row, col, to)?;
        Ok(true)
    }

    /// Negative coordinates cannot be expressed as a row and column, anything else is
    /// bounds-checked by the maze.
    fn to_index(&self, x: i32, y: i32) -> Result<(usize, usize)> {
        match (usize::try_from(y), usize::try_from(x)) {
            (Ok(row), Ok(col)) => Ok((row, col)),
            _ => Err(MazeError::NegativeCoordinate { x, y }),
        }
    }
}
