use crate::{
    interval_graph::IntervalGraph,
    types::{Interval, VId},
};
use itertools::Itertools;

/// A position of the sweep: before every vertex, or at a vertex.
///
/// Vertices are indices into the sweep order of their component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Start,
    Vertex(usize),
}

/// A connected component with its vertices sorted by right endpoint.
pub struct Sweep {
    vertices: Vec<VId>,
    intervals: Vec<Interval>,
}

impl Sweep {
    pub fn new(graph: &IntervalGraph, component: &[VId]) -> Self {
        let vertices: Vec<VId> = component
            .iter()
            .copied()
            .sorted_by_key(|&v| graph.interval(v).right)
            .collect();
        let intervals = vertices.iter().map(|&v| graph.interval(v)).collect();
        Self {
            vertices,
            intervals,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The vertex of the graph at position `i` of the sweep.
    pub fn vertex(&self, i: usize) -> VId {
        self.vertices[i]
    }

    /// Position of the vertex with the largest right endpoint.
    pub fn last(&self) -> usize {
        self.len() - 1
    }

    /// Returns `true` if `x` lies in the closed neighborhood of `node`.
    ///
    /// The neighborhood of `Start` is empty.
    pub fn in_closed_neighborhood(&self, node: Node, x: usize) -> bool {
        match node {
            Node::Start => false,
            Node::Vertex(v) => v == x || self.intervals[v].intersects(&self.intervals[x]),
        }
    }

    /// The vertex of `N[v]` reaching furthest to the right.
    pub fn rightmost_in_closed_neighborhood(&self, v: usize) -> usize {
        // `N[v]` contains `v`, and positions follow right endpoints.
        (v..self.len())
            .rev()
            .find(|&x| self.in_closed_neighborhood(Node::Vertex(v), x))
            .unwrap_or(v)
    }

    /// Up to `count` vertices lying entirely to the right of `node`, by
    /// increasing right endpoint.
    pub fn undominated(&self, node: Node, count: usize) -> Vec<usize> {
        (0..self.len())
            .filter(|&x| match node {
                Node::Start => true,
                Node::Vertex(v) => self.intervals[x].left > self.intervals[v].right,
            })
            .take(count)
            .collect()
    }

    pub fn first_undominated(&self, node: Node) -> Option<usize> {
        self.undominated(node, 1).get(0).copied()
    }

    pub fn second_undominated(&self, node: Node) -> Option<usize> {
        self.undominated(node, 2).get(1).copied()
    }

    pub fn third_undominated(&self, node: Node) -> Option<usize> {
        self.undominated(node, 3).get(2).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_sweep(pairs: &[(usize, usize)]) -> Sweep {
        let g = IntervalGraph::from_pairs(pairs).unwrap();
        let component: Vec<_> = g.vertices().collect();
        Sweep::new(&g, &component)
    }

    #[test]
    fn test_sweep_order() {
        let sweep = create_sweep(&[(0, 5), (1, 3), (2, 7), (4, 6)]);
        assert_eq!(
            (0..sweep.len()).map(|i| sweep.vertex(i)).collect::<Vec<_>>(),
            vec![1, 0, 3, 2]
        );
        assert_eq!(sweep.last(), 3);
    }

    #[test]
    fn test_undominated() {
        // By right endpoint: (0, 2), (1, 4), (3, 6), (5, 8), (7, 9).
        let sweep = create_sweep(&[(0, 2), (1, 4), (3, 6), (5, 8), (7, 9)]);
        assert_eq!(sweep.undominated(Node::Start, 3), vec![0, 1, 2]);
        assert_eq!(sweep.first_undominated(Node::Vertex(0)), Some(2));
        assert_eq!(sweep.second_undominated(Node::Vertex(0)), Some(3));
        assert_eq!(sweep.third_undominated(Node::Vertex(0)), Some(4));
        assert_eq!(sweep.first_undominated(Node::Vertex(2)), Some(4));
        assert_eq!(sweep.second_undominated(Node::Vertex(2)), None);
        assert_eq!(sweep.first_undominated(Node::Vertex(4)), None);
    }

    #[test]
    fn test_closed_neighborhood() {
        let sweep = create_sweep(&[(0, 2), (1, 4), (3, 6), (5, 8), (7, 9)]);
        assert!(sweep.in_closed_neighborhood(Node::Vertex(1), 1));
        assert!(sweep.in_closed_neighborhood(Node::Vertex(1), 2));
        assert!(!sweep.in_closed_neighborhood(Node::Vertex(1), 3));
        assert!(!sweep.in_closed_neighborhood(Node::Start, 0));
        assert_eq!(sweep.rightmost_in_closed_neighborhood(0), 1);
        assert_eq!(sweep.rightmost_in_closed_neighborhood(2), 3);
        assert_eq!(sweep.rightmost_in_closed_neighborhood(4), 4);
    }
}
