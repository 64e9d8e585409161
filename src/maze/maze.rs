use std::fmt;

use thiserror::Error;

use crate::array::Array2D;
use crate::dims::Dims;

use super::cell::Cell;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    #[error("cell index out of range; {0}")]
    OutOfRange(Dims),
    #[error("maze size must be positive; {0}")]
    InvalidSize(Dims),
    #[error("start and exit cells must be set before solving")]
    NotConfigured,
}

/// A rectangular board of marker [`Cell`]s with optional start and exit
/// positions. The solver records its exploration directly in the board.
#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) cells: Array2D<Cell>,
    pub(crate) start: Option<Dims>,
    pub(crate) exit: Option<Dims>,
}

impl Maze {
    /// Creates a board of the given size with every cell open.
    pub fn new(rows: i32, cols: i32) -> Result<Maze, MazeError> {
        let size = Dims(rows, cols);
        if !size.all_positive() {
            return Err(MazeError::InvalidSize(size));
        }

        Ok(Maze {
            cells: Array2D::new(Cell::default(), rows as usize, cols as usize),
            start: None,
            exit: None,
        })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn num_rows(&self) -> i32 {
        self.size().0
    }

    pub fn num_cols(&self) -> i32 {
        self.size().1
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        let Dims(rows, cols) = self.size();
        0 <= pos.0 && pos.0 < rows && 0 <= pos.1 && pos.1 < cols
    }

    fn check_bounds(&self, pos: Dims) -> Result<(), MazeError> {
        if self.is_in_bounds(pos) {
            Ok(())
        } else {
            Err(MazeError::OutOfRange(pos))
        }
    }

    /// Fills the cell with a wall marker, overwriting whatever was there.
    pub fn set_wall(&mut self, pos: Dims) -> Result<(), MazeError> {
        self.check_bounds(pos)?;
        self.cells[pos] = Cell::Wall;
        Ok(())
    }

    /// Records the starting cell. The cell itself is only marked during
    /// solving.
    pub fn set_start(&mut self, pos: Dims) -> Result<(), MazeError> {
        self.check_bounds(pos)?;
        self.start = Some(pos);
        Ok(())
    }

    /// Records the exit cell. The cell itself is only marked during solving.
    pub fn set_exit(&mut self, pos: Dims) -> Result<(), MazeError> {
        self.check_bounds(pos)?;
        self.exit = Some(pos);
        Ok(())
    }

    pub fn start(&self) -> Option<Dims> {
        self.start
    }

    pub fn exit(&self) -> Option<Dims> {
        self.exit
    }

    pub fn get_cell(&self, pos: Dims) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Removes all path and tried markers. Walls and the recorded start and
    /// exit positions stay as they are.
    pub fn reset(&mut self) {
        for pos in Dims::iter_fill(Dims::ZERO, self.size()) {
            if !self.cells[pos].is_wall() {
                self.cells[pos] = Cell::Open;
            }
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Dims(rows, cols) = self.size();

        for row in 0..rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[Dims(row, col)].to_char())?;
            }
        }

        Ok(())
    }
}
