//! Best-first search over an implicit graph, loosely following
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html).
//! The difference is in how a node is scored: depending on [MovementCost] the `g` of a
//! node is either just the step that discovered it or the full cost from the start, and
//! the per-node records are kept around after the search so callers can inspect them.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, warn};
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::error::{PathError, Result};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// How the `g` value of a freshly discovered node is formed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MovementCost {
    /// `g` is only the cost of the step from the discovering neighbour. Cheap, but the
    /// search is then not guaranteed to return the cheapest route.
    #[default]
    StepDistance,
    /// `g` is the cost of the discovering neighbour plus the step, i.e. the cost of the
    /// whole route from the start. With a consistent heuristic the result is optimal.
    Accumulated,
}

/// Per-node search record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchNode<N, C> {
    pub g: C,
    pub h: C,
    pub parent: N,
}

impl<N, C: Float> SearchNode<N, C> {
    #[inline]
    pub fn f(&self) -> C {
        self.g + self.h
    }

    /// A node whose score is still (about) zero has not been reached through any
    /// neighbour yet. Only the start node looks like this.
    #[inline]
    pub fn unvisited(&self) -> bool {
        self.f() <= C::epsilon()
    }
}

/// Frontier entry. The [BinaryHeap] pops the greatest entry, so the ordering below is
/// reversed: the smallest `estimated_cost` wins, then the largest `cost` (the candidate
/// closest to the goal), then the entry pushed first.
struct SmallestCostHolder<C> {
    estimated_cost: C,
    cost: C,
    sequence: usize,
    index: usize,
}

impl<C: Float> Eq for SmallestCostHolder<C> {}

impl<C: Float> PartialEq for SmallestCostHolder<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Float> PartialOrd for SmallestCostHolder<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Float> Ord for SmallestCostHolder<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Costs are never NaN, treating incomparable values as equal keeps the heap sane anyway
        match other
            .estimated_cost
            .partial_cmp(&self.estimated_cost)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => match self.cost.partial_cmp(&other.cost) {
                Some(Ordering::Equal) | None => other.sequence.cmp(&self.sequence),
                Some(s) => s,
            },
            s => s,
        }
    }
}

/// Everything the search learned about the nodes it touched, keyed by node. Nodes never
/// discovered have no entry.
#[derive(Clone, Debug)]
pub struct SearchTable<N, C> {
    nodes: FxIndexMap<N, SearchNode<N, C>>,
    closed: FxHashSet<usize>,
    reached: bool,
}

impl<N, C> SearchTable<N, C>
where
    N: Eq + Hash + Clone,
    C: Float,
{
    fn new(start: &N) -> Self {
        let mut nodes = FxIndexMap::default();
        nodes.insert(
            start.clone(),
            SearchNode {
                g: C::zero(),
                h: C::zero(),
                parent: start.clone(),
            },
        );
        SearchTable {
            nodes,
            closed: FxHashSet::default(),
            reached: false,
        }
    }

    pub fn node(&self, node: &N) -> Option<&SearchNode<N, C>> {
        self.nodes.get(node)
    }

    /// Whether the search stopped because the success predicate matched.
    pub fn reached(&self) -> bool {
        self.reached
    }

    pub fn is_closed(&self, node: &N) -> bool {
        self.nodes
            .get_index_of(node)
            .is_some_and(|ix| self.closed.contains(&ix))
    }

    /// Number of nodes taken off the frontier and expanded.
    pub fn expanded(&self) -> usize {
        self.closed.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in discovery order, the start first.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &SearchNode<N, C>)> {
        self.nodes.iter()
    }

    /// Walks the parent links back from `goal` until it hits the node that is its own
    /// parent, then returns the nodes in start-to-goal order. The walk is capped at the
    /// number of known nodes so a corrupted chain cannot spin forever.
    pub fn reconstruct(&self, goal: &N) -> Option<Result<Vec<N>>> {
        let limit = self.nodes.len();
        let mut current = goal.clone();
        let mut path = Vec::new();
        loop {
            let node = self.nodes.get(&current)?;
            if node.parent == current {
                break;
            }
            if path.len() >= limit {
                return Some(Err(PathError::BrokenChain { limit }));
            }
            path.push(current);
            current = node.parent.clone();
        }
        path.push(current);
        path.reverse();
        Some(Ok(path))
    }
}

/// Runs the search from `start` until `success` holds for the cheapest frontier node or the
/// frontier runs dry. `successors` yields each neighbour with the cost of stepping onto it,
/// `heuristic` the estimate from a node to the goal. The returned table tells which of the
/// two happened through [SearchTable::reached].
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    movement: MovementCost,
) -> SearchTable<N, C>
where
    N: Eq + Hash + Clone,
    C: Float,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut table = SearchTable::new(start);
    let mut to_see = BinaryHeap::new();
    let mut sequence = 0;
    to_see.push(SmallestCostHolder {
        estimated_cost: C::zero(),
        cost: C::zero(),
        sequence,
        index: 0,
    });
    while let Some(SmallestCostHolder { index, .. }) = to_see.pop() {
        let Some((current, current_g)) = table
            .nodes
            .get_index(index)
            .map(|(node, record)| (node.clone(), record.g))
        else {
            continue;
        };
        if success(&current) {
            table.reached = true;
            break;
        }
        // A node is pushed again every time a better score is found for it; the stale copies
        // surface after the node has been closed.
        if !table.closed.insert(index) {
            continue;
        }
        for (successor, move_cost) in successors(&current) {
            let new_g = match movement {
                MovementCost::StepDistance => move_cost,
                MovementCost::Accumulated => current_g + move_cost,
            };
            let n; // index for successor
            let h; // heuristic(&successor)
            match table.nodes.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert(SearchNode {
                        g: new_g,
                        h,
                        parent: current.clone(),
                    });
                }
                Occupied(mut e) => {
                    if table.closed.contains(&e.index()) {
                        continue;
                    }
                    let new_h = heuristic(e.key());
                    let record = e.get();
                    if record.unvisited() || new_g + new_h < record.f() {
                        h = new_h;
                        n = e.index();
                        e.insert(SearchNode {
                            g: new_g,
                            h,
                            parent: current.clone(),
                        });
                    } else {
                        continue;
                    }
                }
            }
            sequence += 1;
            to_see.push(SmallestCostHolder {
                estimated_cost: new_g + h,
                cost: new_g,
                sequence,
                index: n,
            });
        }
    }
    if table.reached {
        debug!(
            "Search finished after expanding {} of {} discovered nodes",
            table.expanded(),
            table.len()
        );
    } else {
        warn!(
            "Frontier exhausted after expanding {} nodes without reaching the goal",
            table.expanded()
        );
    }
    table
}
