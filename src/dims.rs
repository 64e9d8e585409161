use std::fmt;
use std::ops::{Add, Sub};

/// A `(row, col)` pair, used both for board sizes and for cell positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    pub fn all_positive(self) -> bool {
        self.0 > 0 && self.1 > 0
    }

    /// Iterates every position in the half-open rectangle `from..to`,
    /// row by row.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.0..to.0).flat_map(move |row| (from.1..to.1).map(move |col| Dims(row, col)))
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row: {}, col: {}", self.0, self.1)
    }
}
