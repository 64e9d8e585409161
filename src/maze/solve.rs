use log::{debug, trace};

use crate::dims::Dims;

use super::cell::{Cell, Way};
use super::maze::{Maze, MazeError};

impl Maze {
    /// Attempts to find a path from the start cell to the exit cell,
    /// stepping only through open cells in the four cardinal directions.
    ///
    /// The search is depth-first with an explicit backtracking stack and
    /// marks cells in place while it runs: cells on the active path carry
    /// [`Cell::Path`], abandoned dead ends carry [`Cell::Tried`]. On
    /// success the remaining path markers spell out the discovered route;
    /// on failure they record the exploration trace. Walls are never
    /// touched. The route is *a* path, not the shortest one; which of
    /// several valid routes is found is fixed by [`Way::get_in_order`].
    ///
    /// Returns [`MazeError::NotConfigured`] unless both start and exit
    /// have been set.
    pub fn find_path(&mut self) -> Result<bool, MazeError> {
        let (start, exit) = match (self.start, self.exit) {
            (Some(start), Some(exit)) => (start, exit),
            _ => return Err(MazeError::NotConfigured),
        };

        self.cells[start] = Cell::Path;
        if start == exit {
            debug!("start and exit coincide; {}", start);
            return Ok(true);
        }

        let mut stack = Vec::with_capacity(self.cells.len());
        stack.push(start);

        while let Some(last) = stack.pop() {
            self.cells[last] = Cell::Tried;

            for way in Way::get_in_order() {
                let next = last + way.offset();
                if !self.is_valid_move(next) {
                    continue;
                }

                // back on the active path, so the tried marker comes off
                self.cells[last] = Cell::Path;
                stack.push(last);

                self.cells[next] = Cell::Path;
                stack.push(next);

                trace!("stepped {:?} to {}", way, next);

                if next == exit {
                    debug!("exit reached; {}", exit);
                    return Ok(true);
                }

                break;
            }
        }

        debug!("exploration exhausted, no path; {} to {}", start, exit);
        Ok(false)
    }

    /// A move is valid if it lands in bounds on a cell that carries no
    /// marker yet.
    fn is_valid_move(&self, pos: Dims) -> bool {
        self.cells.get(pos).is_some_and(|cell| cell.is_open())
    }
}
