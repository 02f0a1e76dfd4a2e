use std::fmt;

/// Cardinal heading of the robot.
///
/// # Example
/// ```
/// use kr_core::heading::Heading;
/// assert_eq!(Heading::East.left(), Heading::North);
/// assert_eq!(Heading::East.right(), Heading::South);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Towards row 0.
    North,
    /// Towards the last column.
    East,
    /// Towards the last row.
    South,
    /// Towards column 0.
    West,
}

impl Heading {
    /// Heading after a 90° counter-clockwise turn.
    #[must_use]
    pub fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Heading after a 90° clockwise turn.
    #[must_use]
    pub fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Heading after a half turn.
    #[must_use]
    pub fn opposite(self) -> Self {
        self.left().left()
    }

    /// Offset (d_row, d_col) of one step forward. Row 0 is the north edge.
    #[inline]
    #[must_use]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "nord",
            Self::East => "est",
            Self::South => "sud",
            Self::West => "ouest",
        };
        f.write_str(name)
    }
}
