use core::fmt;
use std::str::FromStr;

use grid_util::point::Point;

use crate::error::{PathError, Result};

/// Distance estimate between two cells. Used both for the step between neighbours and
/// for the remaining distance to the goal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Heuristic {
    /// `|dx| + |dy|`, cheap and grid aligned. A diagonal step counts as 2.
    #[default]
    AxisSum,
    /// Straight-line distance.
    Euclidean,
}

impl Heuristic {
    #[inline]
    pub fn distance(self, p1: &Point, p2: &Point) -> f32 {
        let delta_x = (p1.x - p2.x).abs();
        let delta_y = (p1.y - p2.y).abs();
        match self {
            Heuristic::AxisSum => (delta_x + delta_y) as f32,
            Heuristic::Euclidean => ((delta_x * delta_x + delta_y * delta_y) as f32).sqrt(),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Heuristic::AxisSum => f.write_str("axis-sum"),
            Heuristic::Euclidean => f.write_str("euclidean"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "axis-sum" | "axis_sum" | "manhattan" => Ok(Heuristic::AxisSum),
            "euclidean" => Ok(Heuristic::Euclidean),
            other => Err(PathError::UnknownHeuristic(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 5);
        assert_eq!(Heuristic::AxisSum.distance(&a, &b), 7.0);
        assert_eq!(Heuristic::Euclidean.distance(&a, &b), 5.0);
        assert_eq!(Heuristic::Euclidean.distance(&b, &a), 5.0);
        assert_eq!(Heuristic::AxisSum.distance(&a, &a), 0.0);
    }

    /// A diagonal step is 2 under the axis sum but only sqrt(2) in a straight line.
    #[test]
    fn diagonal_step() {
        let a = Point::new(3, 3);
        let b = Point::new(4, 2);
        assert_eq!(Heuristic::AxisSum.distance(&a, &b), 2.0);
        assert!((Heuristic::Euclidean.distance(&a, &b) - 2f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn parse_names() {
        assert_eq!("axis-sum".parse::<Heuristic>().unwrap(), Heuristic::AxisSum);
        assert_eq!("Manhattan".parse::<Heuristic>().unwrap(), Heuristic::AxisSum);
        assert_eq!(" euclidean ".parse::<Heuristic>().unwrap(), Heuristic::Euclidean);
        assert_eq!(
            "chebyshev".parse::<Heuristic>(),
            Err(PathError::UnknownHeuristic("chebyshev".to_owned()))
        );
    }
}
