//! Named board positions.

use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board (0-8, row-major).
///
/// A move is a position; strategies return one and the wire format carries
/// its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

/// Shape of a square, used by positional heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareKind {
    /// The middle square, on four lines.
    Center,
    /// A corner, on three lines.
    Corner,
    /// An edge square, on two lines.
    Edge,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether this is the center, a corner or an edge.
    pub fn kind(self) -> SquareKind {
        match self {
            Position::Center => SquareKind::Center,
            Position::TopLeft
            | Position::TopRight
            | Position::BottomLeft
            | Position::BottomRight => SquareKind::Corner,
            Position::TopCenter
            | Position::MiddleLeft
            | Position::MiddleRight
            | Position::BottomCenter => SquareKind::Edge,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.to_index())
    }
}
