//! Suppliers of interval graphs: random sampling and exhaustive enumeration.

use super::IntervalGraph;
use crate::{
    error::{Error, Result},
    types::{Interval, VId},
};
use rand::Rng;

/// Generates a random interval graph of the given order.
///
/// Endpoints are drawn from the sorted positions `0..2n`: a left endpoint at a
/// random index `i`, then a right endpoint at a random index not before `i`
/// among the remaining positions.
pub fn random_graph<R: Rng + ?Sized>(order: usize, rng: &mut R) -> IntervalGraph {
    let mut remaining: Vec<usize> = (0..2 * order).collect();
    let mut intervals = Vec::with_capacity(order);
    while !remaining.is_empty() {
        let i = rng.gen_range(0..remaining.len() - 1);
        let left = remaining.remove(i);
        let right = remaining.remove(rng.gen_range(i..remaining.len()));
        intervals.push(Interval::new(left, right));
    }
    IntervalGraph::new_unchecked(intervals)
}

/// Number of graphs [`enumerate_graphs`] yields: `(2n - 1)!!`, and 0 for `n = 0`.
///
/// Returns `None` when the count overflows `usize` (from order 18 on 64-bit
/// targets).
pub fn count_graphs(order: usize) -> Option<usize> {
    if order == 0 {
        return Some(0);
    }
    (1..=order).try_fold(1usize, |count, k| count.checked_mul(2 * k - 1))
}

/// Endpoint-slot assignments of every interval graph of a fixed order.
///
/// Each item has `2n` slots holding vertex ids; every id occupies exactly two
/// slots and ids first appear in increasing order. Items come in lexicographic
/// order.
pub struct Positions {
    order: usize,
    slots: Vec<VId>,
    counts: Vec<u8>,
    fresh: bool,
}

impl Positions {
    pub fn new(order: usize) -> Self {
        let mut positions = Self {
            order,
            slots: Vec::with_capacity(2 * order),
            counts: vec![0; order],
            fresh: true,
        };
        positions.fill();
        positions
    }

    /// Exclusive upper bound of the id that may occupy the next slot.
    fn bound(&self) -> usize {
        match self.slots.iter().max() {
            None => 1,
            Some(&max) => (max + 1).min(self.order - 1) + 1,
        }
    }

    fn push(&mut self, v: VId) {
        self.slots.push(v);
        self.counts[v] += 1;
    }

    /// Completes the current prefix with the smallest admissible ids.
    fn fill(&mut self) {
        while self.slots.len() < 2 * self.order {
            let bound = self.bound();
            match (0..bound).find(|&v| self.counts[v] < 2) {
                Some(v) => self.push(v),
                None => break,
            }
        }
    }

    fn advance(&mut self) -> bool {
        while let Some(last) = self.slots.pop() {
            self.counts[last] -= 1;
            let bound = self.bound();
            if let Some(v) = (last + 1..bound).find(|&v| self.counts[v] < 2) {
                self.push(v);
                self.fill();
                return true;
            }
        }
        false
    }
}

impl Iterator for Positions {
    type Item = Vec<VId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.order == 0 {
            None
        } else if self.fresh {
            self.fresh = false;
            Some(self.slots.clone())
        } else if self.advance() {
            Some(self.slots.clone())
        } else {
            None
        }
    }
}

/// Enumerates the endpoint-slot assignments of every graph of the given order.
pub fn enumerate_positions(order: usize) -> Positions {
    Positions::new(order)
}

/// Enumerates every interval graph of the given order.
pub fn enumerate_graphs(order: usize) -> impl Iterator<Item = IntervalGraph> {
    enumerate_positions(order).map(|positions| {
        IntervalGraph::new_unchecked(intervals_from_positions(&positions, positions.len() / 2))
    })
}

/// Builds the graph whose vertex `v` spans the two slots holding `v`.
pub fn graph_from_positions(positions: &[VId]) -> Result<IntervalGraph> {
    if positions.len() % 2 != 0 {
        return Err(Error::MalformedPositions(format!(
            "odd number of slots ({})",
            positions.len()
        )));
    }
    let order = positions.len() / 2;
    let mut counts = vec![0usize; order];
    for &v in positions {
        match counts.get_mut(v) {
            Some(count) => *count += 1,
            None => {
                return Err(Error::MalformedPositions(format!(
                    "vertex {} in a graph of order {}",
                    v, order
                )))
            }
        }
    }
    if let Some(v) = counts.iter().position(|&count| count != 2) {
        return Err(Error::MalformedPositions(format!(
            "vertex {} occupies {} slots",
            v, counts[v]
        )));
    }
    IntervalGraph::new(intervals_from_positions(positions, order))
}

fn intervals_from_positions(positions: &[VId], order: usize) -> Vec<Interval> {
    let mut slots = vec![Vec::with_capacity(2); order];
    for (slot, &v) in positions.iter().enumerate() {
        slots[v].push(slot);
    }
    slots
        .into_iter()
        .map(|slot| Interval::new(slot[0], slot[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_graph_honors_contract() {
        let mut rng = StdRng::seed_from_u64(7);
        for order in 0..=12 {
            let g = random_graph(order, &mut rng);
            assert_eq!(g.order(), order);
            assert!(IntervalGraph::new(g.intervals().to_vec()).is_ok());
        }
    }

    #[test]
    fn test_enumerate_small_orders() {
        assert_eq!(enumerate_positions(0).count(), 0);
        assert_eq!(enumerate_positions(1).collect::<Vec<_>>(), vec![vec![0, 0]]);
        assert_eq!(
            enumerate_positions(2).collect::<Vec<_>>(),
            vec![vec![0, 0, 1, 1], vec![0, 1, 0, 1], vec![0, 1, 1, 0]]
        );
    }

    #[test]
    fn test_enumeration_count() {
        let mut previous = 1;
        for order in 1..=6 {
            let count = enumerate_graphs(order).count();
            assert_eq!(count, previous * (2 * order - 1));
            assert_eq!(Some(count), count_graphs(order));
            previous = count;
        }
        assert_eq!(count_graphs(0), Some(0));
    }

    #[test]
    fn test_count_graphs_overflow() {
        assert_eq!(count_graphs(6), Some(10395));
        assert_eq!(count_graphs(40), None);
        assert_eq!(count_graphs(usize::MAX / 4), None);
    }

    #[test]
    fn test_enumerated_graphs_are_distinct() {
        let graphs: Vec<_> = enumerate_graphs(4).collect();
        let mut sorted: Vec<_> = graphs.iter().map(|g| g.intervals().to_vec()).collect();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), graphs.len());
    }

    #[test]
    fn test_graph_from_positions() {
        let g = graph_from_positions(&[0, 1, 0, 2, 1, 2]).unwrap();
        assert_eq!(
            g.intervals(),
            &[Interval::new(0, 2), Interval::new(1, 4), Interval::new(3, 5)]
        );
        assert!(matches!(
            graph_from_positions(&[0, 0, 0]),
            Err(Error::MalformedPositions(_))
        ));
        assert!(matches!(
            graph_from_positions(&[0, 0, 0, 1]),
            Err(Error::MalformedPositions(_))
        ));
        assert!(matches!(
            graph_from_positions(&[0, 2, 0, 2]),
            Err(Error::MalformedPositions(_))
        ));
    }
}
