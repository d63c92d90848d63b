use core::fmt;
use std::str::FromStr;

use crate::error::{PathError, Result};

/// Classification of a single grid cell. The discriminant doubles as the index into a
/// [CostTable].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TerrainKind {
    #[default]
    Open,
    Grass,
    Water,
    Mud,
    Mountain,
}

impl TerrainKind {
    pub const COUNT: usize = 5;
    pub const ALL: [TerrainKind; TerrainKind::COUNT] = [
        TerrainKind::Open,
        TerrainKind::Grass,
        TerrainKind::Water,
        TerrainKind::Mud,
        TerrainKind::Mountain,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Symbol used by the text format of [TerrainGrid](crate::terrain_grid::TerrainGrid).
    pub fn symbol(self) -> char {
        match self {
            TerrainKind::Open => '.',
            TerrainKind::Grass => 'g',
            TerrainKind::Water => 'w',
            TerrainKind::Mud => 'm',
            TerrainKind::Mountain => '^',
        }
    }

    /// Inverse of [symbol](Self::symbol). The digits `0`-`4` are accepted as well and map
    /// onto the kinds in table order.
    pub fn from_symbol(symbol: char) -> Result<TerrainKind> {
        let kind = match symbol {
            '.' | '0' => TerrainKind::Open,
            'g' | '1' => TerrainKind::Grass,
            'w' | '2' => TerrainKind::Water,
            'm' | '3' => TerrainKind::Mud,
            '^' | '4' => TerrainKind::Mountain,
            _ => return Err(PathError::InvalidTerrain { symbol }),
        };
        Ok(kind)
    }
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TerrainKind::Open => "open",
            TerrainKind::Grass => "grass",
            TerrainKind::Water => "water",
            TerrainKind::Mud => "mud",
            TerrainKind::Mountain => "mountain",
        };
        f.write_str(name)
    }
}

impl FromStr for TerrainKind {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        TerrainKind::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PathError::InvalidTerrain {
                symbol: s.trim().chars().next().unwrap_or(' '),
            })
    }
}

/// Traversal cost per [TerrainKind]. Every kind has exactly one finite, non-negative cost
/// and the table cannot be changed once built.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[f32; 5]", into = "[f32; 5]"))]
pub struct CostTable {
    costs: [f32; TerrainKind::COUNT],
}

impl Default for CostTable {
    fn default() -> CostTable {
        CostTable {
            costs: [0.0, 10.0, 25.0, 50.0, 100.0],
        }
    }
}

impl CostTable {
    /// Builds a table from costs given in [TerrainKind::ALL] order.
    pub fn new(costs: [f32; TerrainKind::COUNT]) -> Result<CostTable> {
        for (kind, &cost) in TerrainKind::ALL.iter().zip(costs.iter()) {
            if !cost.is_finite() || cost < 0.0 {
                return Err(PathError::InvalidCost { kind: *kind, cost });
            }
        }
        Ok(CostTable { costs })
    }

    #[inline]
    pub fn cost(&self, kind: TerrainKind) -> f32 {
        self.costs[kind.index()]
    }

    /// The kind with the highest cost. Ties go to the kind listed last.
    pub fn most_expensive(&self) -> TerrainKind {
        TerrainKind::ALL
            .into_iter()
            .fold(TerrainKind::Open, |best, kind| {
                if self.cost(kind) >= self.cost(best) {
                    kind
                } else {
                    best
                }
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (TerrainKind, f32)> + '_ {
        TerrainKind::ALL.into_iter().map(|kind| (kind, self.cost(kind)))
    }
}

impl TryFrom<[f32; TerrainKind::COUNT]> for CostTable {
    type Error = PathError;

    fn try_from(costs: [f32; TerrainKind::COUNT]) -> Result<Self> {
        CostTable::new(costs)
    }
}

impl From<CostTable> for [f32; TerrainKind::COUNT] {
    fn from(table: CostTable) -> Self {
        table.costs
    }
}
