//! Compass direction letters and the axis each one names.

/// The axis a direction letter places a coordinate on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// East/west: the x axis, -180 to 180.
    Longitude,
    /// North/south: the y axis, -90 to 90.
    Latitude,
}

/// A direction letter prefixing a coordinate token.
///
/// Only the uppercase letters `N`, `E`, `S` and `W` are recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Maps a direction letter to a direction. Case-sensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Returns true if coordinates in this direction are negative (south or west).
    #[inline]
    pub fn is_negative(self) -> bool {
        matches!(self, Self::South | Self::West)
    }

    /// Returns the axis this direction measures along.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Self::East | Self::West => Axis::Longitude,
            Self::North | Self::South => Axis::Latitude,
        }
    }
}
