//! Error type shared by the grid model, the parsers and the solver.

use grid_util::point::Point;
use thiserror::Error;

use crate::terrain::TerrainKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("point {point} lies outside the {side}x{side} grid")]
    InvalidArgument { point: Point, side: usize },

    #[error("goal {goal} cannot be reached from {start}")]
    Unreachable { start: Point, goal: Point },

    #[error("parent chain did not reach the start within {limit} steps")]
    BrokenChain { limit: usize },

    #[error("cost {cost} for {kind} is not a finite, non-negative number")]
    InvalidCost { kind: TerrainKind, cost: f32 },

    #[error("unknown terrain symbol {symbol:?}")]
    InvalidTerrain { symbol: char },

    #[error("grid is not square: {rows} rows but a row of {columns} cells")]
    NotSquare { rows: usize, columns: usize },

    #[error("grid has no cells")]
    EmptyGrid,

    #[error("unknown heuristic {0:?}, expected \"axis-sum\" or \"euclidean\"")]
    UnknownHeuristic(String),
}

pub type Result<T> = std::result::Result<T, PathError>;
