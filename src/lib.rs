pub mod array;
pub mod dims;
pub mod maze;

pub use array::Array2D;
pub use dims::Dims;
pub use maze::{Cell, Maze, MazeError, Way};
