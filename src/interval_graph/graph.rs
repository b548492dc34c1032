use crate::{
    error::{Error, Result},
    types::{Interval, VId},
};
use itertools::Itertools;
use std::{iter, str::FromStr};

/// An interval graph given by its interval model.
///
/// The `n` intervals of a graph of order `n` use every endpoint in `0..2n`
/// exactly once. Adjacency is never stored: two vertices are adjacent iff their
/// intervals overlap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalGraph {
    intervals: Vec<Interval>,
}

impl IntervalGraph {
    /// Creates a graph after checking the endpoint contract.
    pub fn new(intervals: Vec<Interval>) -> Result<Self> {
        let order = intervals.len();
        let mut used = vec![false; 2 * order];
        for interval in &intervals {
            if interval.left >= interval.right {
                return Err(Error::InvalidInterval(*interval));
            }
            for &endpoint in &[interval.left, interval.right] {
                if endpoint >= used.len() {
                    return Err(Error::EndpointOutOfRange { endpoint, order });
                }
                if used[endpoint] {
                    return Err(Error::DuplicateEndpoint(endpoint));
                }
                used[endpoint] = true;
            }
        }
        Ok(Self { intervals })
    }

    /// Creates a graph from `(left, right)` pairs.
    pub fn from_pairs(pairs: &[(usize, usize)]) -> Result<Self> {
        Self::new(
            pairs
                .iter()
                .map(|&(left, right)| Interval::new(left, right))
                .collect(),
        )
    }

    /// Creates a graph whose intervals are known to honor the endpoint contract.
    pub(crate) fn new_unchecked(intervals: Vec<Interval>) -> Self {
        debug_assert!(Self::new(intervals.clone()).is_ok());
        Self { intervals }
    }

    pub fn order(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn interval(&self, v: VId) -> Interval {
        self.intervals[v]
    }

    pub fn vertices(&self) -> impl Iterator<Item = VId> {
        0..self.order()
    }

    pub fn intersects(&self, u: VId, v: VId) -> bool {
        self.intervals[u].intersects(&self.intervals[v])
    }

    /// Returns the neighbors of `v` in graph order.
    pub fn neighbors(&self, v: VId) -> impl Iterator<Item = VId> + '_ {
        let interval = self.intervals[v];
        self.intervals
            .iter()
            .enumerate()
            .filter(move |&(w, other)| w != v && interval.intersects(other))
            .map(|(w, _)| w)
    }

    /// Returns the neighbors of `v` in graph order followed by `v` itself.
    pub fn closed_neighborhood(&self, v: VId) -> impl Iterator<Item = VId> + '_ {
        self.neighbors(v).chain(iter::once(v))
    }

    /// Splits the graph into its connected components.
    ///
    /// Sweeps the endpoints from left to right while counting the open intervals;
    /// a component ends each time the count drops back to zero. Vertices of a
    /// component are listed by left endpoint.
    pub fn connected_components(&self) -> Vec<Vec<VId>> {
        let mut events = vec![None; 2 * self.order()];
        for (v, interval) in self.intervals.iter().enumerate() {
            events[interval.left] = Some((v, true));
            events[interval.right] = Some((v, false));
        }
        let (mut components, mut run, mut open) = (Vec::new(), Vec::new(), 0usize);
        for (v, opens) in events.into_iter().flatten() {
            if opens {
                open += 1;
                run.push(v);
            } else {
                open -= 1;
                if open == 0 {
                    components.push(std::mem::take(&mut run));
                }
            }
        }
        components
    }

    /// Formats the intervals of `vertices`, e.g. `[(0, 2), (1, 3)]`.
    pub fn describe<I: IntoIterator<Item = VId>>(&self, vertices: I) -> String {
        format!(
            "[{}]",
            vertices
                .into_iter()
                .map(|v| self.intervals[v].to_string())
                .join(", ")
        )
    }
}

/// Parses a comma separated list of `left:right` intervals.
impl FromStr for IntervalGraph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::new_unchecked(Vec::new()));
        }
        Self::new(s.split(',').map(str::parse).collect::<Result<_>>()?)
    }
}

impl std::fmt::Display for IntervalGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.describe(self.vertices()))
    }
}
