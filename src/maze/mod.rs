pub mod cell;
pub use cell::{Cell, Way};
pub mod maze;
pub use maze::{Maze, MazeError};

mod solve;
