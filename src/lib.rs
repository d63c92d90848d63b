//! # terrain_pathfinding
//!
//! Best-first pathfinding on a square grid whose cells carry terrain with different
//! traversal costs. Movement is allowed in all 8 directions. The distance between cells is
//! estimated either by the axis sum (`|dx| + |dy|`) or by the straight-line distance, see
//! [Heuristic].
//!
//! By default a node is scored the way simple tile-map demos usually do it: `g` is only the
//! distance of the step that discovered the node and the terrain cost is added to the
//! estimate `h`. That search is fast and avoids expensive terrain, but it is not guaranteed
//! to return the cheapest route. [MovementCost::Accumulated] scores nodes with the full
//! route cost from the start instead, which makes the result optimal.
//!
//! ```
//! use grid_util::point::Point;
//! use terrain_pathfinding::{find_path, Heuristic, TerrainGrid, TerrainKind};
//!
//! let mut grid = TerrainGrid::new(10, TerrainKind::Open);
//! grid.set_rect(2, 0, 1, 7, TerrainKind::Mountain);
//! let route = find_path(&grid, Point::new(1, 1), Point::new(8, 8), Heuristic::AxisSum).unwrap();
//! assert_eq!(route.first(), Some(&Point::new(1, 1)));
//! assert_eq!(route.last(), Some(&Point::new(8, 8)));
//! ```
pub mod astar;
pub mod error;
pub mod heuristic;
pub mod solver;
pub mod terrain;
pub mod terrain_grid;

use grid_util::point::Point;

pub use crate::astar::{MovementCost, SearchNode, SearchTable};
pub use crate::error::{PathError, Result};
pub use crate::heuristic::Heuristic;
pub use crate::solver::{PathFinder, SearchOutcome};
pub use crate::terrain::{CostTable, TerrainKind};
pub use crate::terrain_grid::TerrainGrid;

/// Side length of a [TerrainGrid] built with [Default].
pub const DEFAULT_SIDE: usize = 10;

/// Computes a route from `start` to `goal` with the default [MovementCost]. Shorthand for
/// [PathFinder::find_path].
pub fn find_path(
    grid: &TerrainGrid,
    start: Point,
    goal: Point,
    heuristic: Heuristic,
) -> Result<Vec<Point>> {
    PathFinder::new(heuristic).find_path(grid, start, goal)
}

/// Checks that `route` runs from `start` to `goal` in steps to one of the 8 surrounding
/// cells.
pub fn is_connected_route(route: &[Point], start: &Point, goal: &Point) -> bool {
    route.first() == Some(start)
        && route.last() == Some(goal)
        && route
            .windows(2)
            .all(|w| (w[0].x - w[1].x).abs().max((w[0].y - w[1].y).abs()) == 1)
}
