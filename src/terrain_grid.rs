use core::fmt;
use std::str::FromStr;

use grid_util::point::Point;
use itertools::{iproduct, Itertools};
use smallvec::SmallVec;

use crate::error::{PathError, Result};
use crate::terrain::{CostTable, TerrainKind};

/// Square grid of [TerrainKind] cells together with the [CostTable] used to price them.
/// Cells are addressed by [Point] where `x` is the column and `y` the row, and stored
/// row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainGrid {
    side: usize,
    cells: Vec<TerrainKind>,
    costs: CostTable,
}

impl Default for TerrainGrid {
    fn default() -> TerrainGrid {
        TerrainGrid::new(crate::DEFAULT_SIDE, TerrainKind::Open)
    }
}

impl TerrainGrid {
    pub fn new(side: usize, default_kind: TerrainKind) -> TerrainGrid {
        TerrainGrid::with_costs(side, default_kind, CostTable::default())
    }

    pub fn with_costs(side: usize, default_kind: TerrainKind, costs: CostTable) -> TerrainGrid {
        TerrainGrid {
            side,
            cells: vec![default_kind; side * side],
            costs,
        }
    }

    /// Replaces the cost table, keeping the terrain as is.
    pub fn set_costs(&mut self, costs: CostTable) {
        self.costs = costs;
    }

    pub fn costs(&self) -> &CostTable {
        &self.costs
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.side
            && (point.y as usize) < self.side
    }

    /// Fails with [PathError::InvalidArgument] if the point is off the grid.
    pub fn check_bounds(&self, point: &Point) -> Result<()> {
        if self.in_bounds(point) {
            Ok(())
        } else {
            Err(PathError::InvalidArgument {
                point: *point,
                side: self.side,
            })
        }
    }

    #[inline]
    fn ix(&self, point: &Point) -> usize {
        point.y as usize * self.side + point.x as usize
    }

    /// Terrain at an in-bounds point.
    ///
    /// # Panics
    /// If the point is outside the grid, see [get](Self::get) for a checked lookup.
    pub fn terrain_at(&self, point: &Point) -> TerrainKind {
        assert!(
            self.in_bounds(point),
            "{} lies outside the {side}x{side} grid",
            point,
            side = self.side
        );
        self.cells[self.ix(point)]
    }

    pub fn get(&self, point: &Point) -> Option<TerrainKind> {
        if self.in_bounds(point) {
            Some(self.cells[self.ix(point)])
        } else {
            None
        }
    }

    /// Traversal cost of entering the given in-bounds point.
    #[inline]
    pub fn cost_at(&self, point: &Point) -> f32 {
        self.costs.cost(self.terrain_at(point))
    }

    /// Sets the terrain of an in-bounds point; panics otherwise like [terrain_at](Self::terrain_at).
    pub fn set(&mut self, point: &Point, kind: TerrainKind) {
        assert!(
            self.in_bounds(point),
            "{} lies outside the {side}x{side} grid",
            point,
            side = self.side
        );
        let ix = self.ix(point);
        self.cells[ix] = kind;
    }

    /// Fills the rectangle with top-left corner (`col`, `row`), clipped to the grid.
    pub fn set_rect(&mut self, col: i32, row: i32, width: i32, height: i32, kind: TerrainKind) {
        for (y, x) in iproduct!(row..row + height, col..col + width) {
            let p = Point::new(x, y);
            if self.in_bounds(&p) {
                self.set(&p, kind);
            }
        }
    }

    /// The up to 8 in-bounds cells around `point`, rows top to bottom and columns left to
    /// right. This order is the last tie-breaker of the search.
    pub fn neighbours(&self, point: &Point) -> SmallVec<[Point; 8]> {
        iproduct!(-1..=1, -1..=1)
            .filter(|&(dy, dx)| dx != 0 || dy != 0)
            .map(|(dy, dx)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.in_bounds(p))
            .collect()
    }

    /// Iterates over all cells in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, TerrainKind)> + '_ {
        let side = self.side;
        self.cells
            .iter()
            .enumerate()
            .map(move |(ix, &kind)| (Point::new((ix % side) as i32, (ix / side) as i32), kind))
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.side.max(1)) {
            writeln!(f, "{}", row.iter().map(|kind| kind.symbol()).join(""))?;
        }
        Ok(())
    }
}

/// Parses one row per line. See [TerrainKind::from_symbol] for the accepted symbols;
/// whitespace inside a row and blank lines are ignored.
impl FromStr for TerrainGrid {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(TerrainKind::from_symbol)
                    .collect::<Result<Vec<_>>>()
            })
            .filter_ok(|row| !row.is_empty())
            .collect::<Result<Vec<_>>>()?;
        if rows.is_empty() {
            return Err(PathError::EmptyGrid);
        }
        let side = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != side) {
            return Err(PathError::NotSquare {
                rows: side,
                columns: row.len(),
            });
        }
        Ok(TerrainGrid {
            side,
            cells: rows.into_iter().flatten().collect(),
            costs: CostTable::default(),
        })
    }
}
