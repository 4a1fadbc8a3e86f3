//! # Firing Direction
//!
//! The cannon fires along one of four horizontal axes. Each direction
//! occupies the two middle bits of the 32-bit ROM word.

use std::fmt;
use std::str::FromStr;

/// Horizontal direction of the pearl.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    North,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::South,
        Direction::West,
    ];

    /// The 2-bit code written between the blue and red halves.
    pub fn code(self) -> &'static str {
        match self {
            Direction::East => "00",
            Direction::North => "01",
            Direction::South => "10",
            Direction::West => "11",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::East => "east",
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = String;

    /// Parses one of `east`, `north`, `south`, `west` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Direction::ALL
            .into_iter()
            .find(|direction| direction.name() == lower)
            .ok_or_else(|| format!("invalid direction: {s} (expected east, north, south or west)"))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
