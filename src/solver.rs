use grid_util::point::Point;
use log::{debug, info};
use smallvec::SmallVec;

use crate::astar::{astar, MovementCost, SearchNode, SearchTable};
use crate::error::{PathError, Result};
use crate::heuristic::Heuristic;
use crate::terrain_grid::TerrainGrid;

/// Route found by [PathFinder::search] together with the search records, which is what a
/// debugging overlay needs to show g, h and F per cell.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub route: Vec<Point>,
    table: SearchTable<Point, f32>,
}

impl SearchOutcome {
    /// The record of a cell, [None] for cells the search never discovered.
    pub fn node(&self, point: &Point) -> Option<&SearchNode<Point, f32>> {
        self.table.node(point)
    }

    pub fn expanded(&self) -> usize {
        self.table.expanded()
    }

    pub fn table(&self) -> &SearchTable<Point, f32> {
        &self.table
    }
}

/// Configured entry point of the search. Cheap to copy; holds no state between calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathFinder {
    pub heuristic: Heuristic,
    pub movement: MovementCost,
}

impl PathFinder {
    pub fn new(heuristic: Heuristic) -> PathFinder {
        PathFinder {
            heuristic,
            movement: MovementCost::default(),
        }
    }

    pub fn with_movement(mut self, movement: MovementCost) -> PathFinder {
        self.movement = movement;
        self
    }

    /// Neighbours of `node` with the cost of stepping onto each. Under
    /// [MovementCost::StepDistance] the terrain is charged in [estimate](Self::estimate)
    /// instead.
    fn successors(&self, grid: &TerrainGrid, node: &Point) -> SmallVec<[(Point, f32); 8]> {
        grid.neighbours(node)
            .into_iter()
            .map(|p| {
                let step = self.heuristic.distance(node, &p);
                match self.movement {
                    MovementCost::StepDistance => (p, step),
                    MovementCost::Accumulated => (p, step + grid.cost_at(&p)),
                }
            })
            .collect()
    }

    fn estimate(&self, grid: &TerrainGrid, point: &Point, goal: &Point) -> f32 {
        let distance = self.heuristic.distance(point, goal);
        match self.movement {
            MovementCost::StepDistance => distance + grid.cost_at(point),
            MovementCost::Accumulated => distance,
        }
    }

    /// Computes a route from `start` to `goal`, both ends included.
    pub fn find_path(&self, grid: &TerrainGrid, start: Point, goal: Point) -> Result<Vec<Point>> {
        self.search(grid, start, goal).map(|outcome| outcome.route)
    }

    /// Like [find_path](Self::find_path) but also hands back the search records.
    pub fn search(&self, grid: &TerrainGrid, start: Point, goal: Point) -> Result<SearchOutcome> {
        grid.check_bounds(&start)?;
        grid.check_bounds(&goal)?;
        if start == goal {
            debug!("Start and goal coincide at {}", start);
        } else {
            info!(
                "Computing path from {} to {} ({}, {:?})",
                start, goal, self.heuristic, self.movement
            );
        }
        let table = astar(
            &start,
            |node| self.successors(grid, node),
            |point| self.estimate(grid, point, &goal),
            |point| *point == goal,
            self.movement,
        );
        let route = match table.reconstruct(&goal) {
            Some(route) => route?,
            None => return Err(PathError::Unreachable { start, goal }),
        };
        info!(
            "Found path of {} cells after expanding {} cells",
            route.len(),
            table.expanded()
        );
        Ok(SearchOutcome { route, table })
    }

    /// Cost of following `route`: for every step the heuristic distance plus the terrain
    /// cost of the cell stepped onto. The first cell is free.
    pub fn route_cost(&self, grid: &TerrainGrid, route: &[Point]) -> f32 {
        route
            .windows(2)
            .map(|w| self.heuristic.distance(&w[0], &w[1]) + grid.cost_at(&w[1]))
            .sum()
    }
}
