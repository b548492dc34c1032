//! Validity of quasi-total Roman domination functions.
//!
//! A labeling is valid when every vertex labeled 0 has a neighbor labeled 2 and
//! every vertex labeled 2 has a neighbor with a positive label. Vertices labeled 1
//! need no neighbor at all.

use crate::{
    interval_graph::IntervalGraph,
    solution::Solution,
    types::{Label, VId, Weight},
};
use derive_more::Display;

/// The first rule a labeling breaks.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[display(fmt = "vertex {} is not labeled", _0)]
    Unlabeled(VId),
    #[display(fmt = "vertex {} is labeled more than once", _0)]
    MultiplyLabeled(VId),
    #[display(fmt = "vertex {} is not in the graph", _0)]
    UnknownVertex(VId),
    #[display(fmt = "vertex {} is labeled 0 but has no neighbor labeled 2", _0)]
    Undominated(VId),
    #[display(fmt = "vertex {} is labeled 2 but has no positively labeled neighbor", _0)]
    IsolatedTwo(VId),
}

impl std::error::Error for Violation {}

/// Returns `true` if `v` has a positive label or a neighbor labeled 2.
pub fn is_dominated(graph: &IntervalGraph, v: VId, labels: &[Label]) -> bool {
    labels[v].is_positive() || graph.neighbors(v).any(|u| labels[u] == Label::Two)
}

/// Returns `true` if no neighbor of `v` has a positive label.
pub fn is_isolated_in_v2(graph: &IntervalGraph, v: VId, labels: &[Label]) -> bool {
    !graph.neighbors(v).any(|u| labels[u].is_positive())
}

/// Returns the weight of `solution`, or `None` if it is not a valid labeling of
/// `graph`.
pub fn check_solution(graph: &IntervalGraph, solution: &Solution) -> Option<Weight> {
    diagnose_solution(graph, solution).ok()
}

/// Returns the weight of `solution`, or the first rule it breaks.
pub fn diagnose_solution(graph: &IntervalGraph, solution: &Solution) -> Result<Weight, Violation> {
    let labels = solution.labels(graph.order())?;
    diagnose_labels(graph, &labels)
}

/// Same as [`check_solution`] for a labeling given vertex by vertex.
pub fn check_labels(graph: &IntervalGraph, labels: &[Label]) -> Option<Weight> {
    diagnose_labels(graph, labels).ok()
}

fn diagnose_labels(graph: &IntervalGraph, labels: &[Label]) -> Result<Weight, Violation> {
    debug_assert_eq!(labels.len(), graph.order());
    for v in graph.vertices() {
        if !is_dominated(graph, v, labels) {
            return Err(Violation::Undominated(v));
        }
    }
    for v in graph.vertices().filter(|&v| labels[v] == Label::Two) {
        if is_isolated_in_v2(graph, v, labels) {
            return Err(Violation::IsolatedTwo(v));
        }
    }
    Ok(labels.iter().map(|label| label.weight()).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use Label::{One, Two, Zero};

    fn create_graph(pairs: &[(usize, usize)]) -> IntervalGraph {
        IntervalGraph::from_pairs(pairs).unwrap()
    }

    #[test]
    fn test_single_vertex() {
        let g = create_graph(&[(0, 1)]);
        assert_eq!(check_labels(&g, &[One]), Some(1));
        assert_eq!(check_labels(&g, &[Zero]), None);
        assert_eq!(
            diagnose_solution(&g, &Solution::from_labels(&[Two])),
            Err(Violation::IsolatedTwo(0))
        );
    }

    #[test]
    fn test_domination() {
        // A star: 0 contains 1, 2 and 3.
        let g = create_graph(&[(0, 7), (1, 2), (3, 4), (5, 6)]);
        assert!(is_dominated(&g, 1, &[Two, Zero, Zero, Zero]));
        assert!(!is_dominated(&g, 1, &[One, Zero, Zero, Zero]));
        assert!(is_dominated(&g, 1, &[Zero, One, Zero, Zero]));
        assert!(!is_dominated(&g, 2, &[Zero, Two, Zero, Zero]));
        assert_eq!(check_labels(&g, &[Two, One, Zero, Zero]), Some(3));
        assert_eq!(
            diagnose_solution(&g, &Solution::from_labels(&[Two, Zero, Zero, Zero])),
            Err(Violation::IsolatedTwo(0))
        );
        assert_eq!(
            diagnose_solution(&g, &Solution::from_labels(&[One, Zero, Zero, Zero])),
            Err(Violation::Undominated(1))
        );
    }

    #[test]
    fn test_v1_may_be_isolated() {
        let g = create_graph(&[(0, 1), (2, 3)]);
        assert!(is_isolated_in_v2(&g, 0, &[One, One]));
        assert_eq!(check_labels(&g, &[One, One]), Some(2));
    }

    #[test]
    fn test_partition_violations() {
        let g = create_graph(&[(0, 2), (1, 3)]);
        let mut s = Solution::from_labels(&[One]);
        assert_eq!(check_solution(&g, &s), None);
        assert_eq!(diagnose_solution(&g, &s), Err(Violation::Unlabeled(1)));
        s.insert(One, 1);
        assert_eq!(check_solution(&g, &s), Some(2));
        s.insert(Two, 0);
        assert_eq!(
            diagnose_solution(&g, &s),
            Err(Violation::MultiplyLabeled(0))
        );
    }
}
