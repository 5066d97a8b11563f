//! Configuration errors raised before any grid is generated.

use std::error::Error;
use std::fmt;

/// Describes why a set of generation or match parameters was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The grid must be at least one cell wide.
    InvalidSize { size: usize },
    /// A probability is negative or not a finite number.
    InvalidProbability { name: &'static str, value: f64 },
    /// Wall and resource probabilities together leave no room for empty cells.
    ProbabilitiesExceedOne { wall: f64, resource: f64 },
    /// A match needs at least one move.
    InvalidMoveLimit,
    /// A hand-built grid breaks a layout guarantee that generation provides.
    UnplayableGrid { reason: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => write!(f, "grid size must be at least 1, got {size}"),
            Self::InvalidProbability { name, value } => {
                write!(f, "{name} probability must be a finite value >= 0, got {value}")
            }
            Self::ProbabilitiesExceedOne { wall, resource } => write!(
                f,
                "wall probability {wall} plus resource probability {resource} exceeds 1"
            ),
            Self::InvalidMoveLimit => write!(f, "move limit must be at least 1"),
            Self::UnplayableGrid { reason } => write!(f, "grid is not playable: {reason}"),
        }
    }
}

impl Error for ConfigError {}
