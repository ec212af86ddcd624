//! Engine error type
//!
//! Every error is recoverable at the command boundary: a failed command
//! leaves the grid and dot values exactly as they were.

use thiserror::Error;

use crate::sim::Coord;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("({row}, {col}) is not an interior cell")]
    InvalidCell { row: i32, col: i32 },

    #[error("({row}, {col}) is not a border dot")]
    InvalidDot { row: i32, col: i32 },

    #[error("mirror at ({row}, {col}) would touch a neighbouring mirror")]
    AdjacencyViolation { row: i32, col: i32 },

    #[error("laser fired from {entry} did not exit within {steps} steps")]
    NonTerminatingPath { entry: Coord, steps: usize },

    #[error("segment product does not fit in 64 bits")]
    ValueOverflow,

    #[error("invalid layout: {0}")]
    Layout(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCell { .. } => "INVALID_CELL",
            Self::InvalidDot { .. } => "INVALID_DOT",
            Self::AdjacencyViolation { .. } => "ADJACENCY_VIOLATION",
            Self::NonTerminatingPath { .. } => "NON_TERMINATING_PATH",
            Self::ValueOverflow => "VALUE_OVERFLOW",
            Self::Layout(_) => "INVALID_LAYOUT",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
        }
    }
}
