//! Labelings of interval graphs as partitions into `V0`, `V1` and `V2`.

use crate::{
    checker::Violation,
    interval_graph::IntervalGraph,
    types::{Label, VId, Weight},
};
use itertools::Itertools;

/// A labeling given by its three groups of vertices.
///
/// Nothing prevents a `Solution` from listing a vertex twice or forgetting one;
/// [`labels`](Solution::labels) and the checker reject such partitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    groups: [Vec<VId>; 3],
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the partition where vertex `v` gets `labels[v]`.
    pub fn from_labels(labels: &[Label]) -> Self {
        let mut solution = Self::new();
        for (v, &label) in labels.iter().enumerate() {
            solution.insert(label, v);
        }
        solution
    }

    pub fn insert(&mut self, label: Label, v: VId) {
        self.groups[label.index()].push(v);
    }

    pub fn group(&self, label: Label) -> &[VId] {
        &self.groups[label.index()]
    }

    pub fn v0(&self) -> &[VId] {
        self.group(Label::Zero)
    }

    pub fn v1(&self) -> &[VId] {
        self.group(Label::One)
    }

    pub fn v2(&self) -> &[VId] {
        self.group(Label::Two)
    }

    /// Number of vertices over all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `|V1| + 2|V2|`.
    pub fn weight(&self) -> Weight {
        Label::ALL
            .iter()
            .map(|&label| label.weight() * self.group(label).len())
            .sum()
    }

    /// Moves every vertex of `other` into the same group of `self`.
    pub fn merge(&mut self, other: Solution) {
        for (group, other) in self.groups.iter_mut().zip(other.groups) {
            group.extend(other);
        }
    }

    /// Iterates over `(label, vertex)` pairs, group by group.
    pub fn iter(&self) -> impl Iterator<Item = (Label, VId)> + '_ {
        Label::ALL
            .iter()
            .flat_map(move |&label| self.group(label).iter().map(move |&v| (label, v)))
    }

    /// Returns the label of every vertex of a graph of the given order.
    ///
    /// Fails unless the groups partition `0..order`.
    pub fn labels(&self, order: usize) -> Result<Vec<Label>, Violation> {
        let mut labels = vec![None; order];
        for (label, v) in self.iter() {
            match labels.get_mut(v) {
                None => return Err(Violation::UnknownVertex(v)),
                Some(Some(_)) => return Err(Violation::MultiplyLabeled(v)),
                Some(slot) => *slot = Some(label),
            }
        }
        labels
            .into_iter()
            .enumerate()
            .map(|(v, label)| label.ok_or(Violation::Unlabeled(v)))
            .collect()
    }

    /// Sorts every group by vertex id.
    pub fn normalize(&mut self) {
        for group in self.groups.iter_mut() {
            group.sort_unstable();
        }
    }

    /// Formats the groups with the intervals of `graph`.
    pub fn describe(&self, graph: &IntervalGraph) -> String {
        Label::ALL
            .iter()
            .map(|&label| {
                format!(
                    "{}: {}",
                    label,
                    graph.describe(self.group(label).iter().copied())
                )
            })
            .join(", ")
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Label::ALL
                .iter()
                .map(|&label| format!("{}: [{}]", label, self.group(label).iter().join(", ")))
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_labels() {
        let s = Solution::from_labels(&[Label::One, Label::Zero, Label::Two, Label::One]);
        assert_eq!(s.v0(), &[1]);
        assert_eq!(s.v1(), &[0, 3]);
        assert_eq!(s.v2(), &[2]);
        assert_eq!(s.weight(), 4);
        assert_eq!(s.len(), 4);
        assert_eq!(s.to_string(), "V0: [1], V1: [0, 3], V2: [2]");
    }

    #[test]
    fn test_labels_checks_partition() {
        let mut s = Solution::new();
        s.insert(Label::One, 0);
        s.insert(Label::Two, 1);
        assert_eq!(s.labels(2), Ok(vec![Label::One, Label::Two]));
        assert_eq!(s.labels(3), Err(Violation::Unlabeled(2)));
        assert_eq!(s.labels(1), Err(Violation::UnknownVertex(1)));
        s.insert(Label::Zero, 1);
        assert_eq!(s.labels(2), Err(Violation::MultiplyLabeled(1)));
    }

    #[test]
    fn test_merge() {
        let mut s = Solution::from_labels(&[Label::Two, Label::One]);
        let mut t = Solution::new();
        t.insert(Label::Zero, 2);
        t.insert(Label::Two, 3);
        s.merge(t);
        assert_eq!(s.v0(), &[2]);
        assert_eq!(s.v2(), &[0, 3]);
        assert_eq!(s.weight(), 5);
        assert!(Solution::new().is_empty());
    }

    #[test]
    fn test_describe() {
        let g = IntervalGraph::from_pairs(&[(0, 2), (1, 3)]).unwrap();
        let s = Solution::from_labels(&[Label::Zero, Label::Two]);
        assert_eq!(s.describe(&g), "V0: [(0, 2)], V1: [], V2: [(1, 3)]");
    }
}
