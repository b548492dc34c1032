//! The greedy heuristic that preceded the exact solver.
//!
//! It always returns a valid labeling but is not minimum in general; the
//! verifier uses it to show how counterexamples are reported.

use crate::{
    checker::{is_dominated, is_isolated_in_v2},
    interval_graph::IntervalGraph,
    solution::Solution,
    types::{Label, VId},
};
use itertools::Itertools;
use log::trace;

/// Labels `graph` greedily.
///
/// Vertices are visited by right endpoint, then by closed neighborhood size.
/// Every vertex still undominated picks the vertex `u` of its closed
/// neighborhood covering the most vertices not yet covered by a vertex labeled 2;
/// `u` is labeled 2 if it covers enough of them, otherwise the vertex labels
/// itself 1. A final pass gives each isolated vertex labeled 2 a neighbor
/// labeled 1.
pub fn greedy(graph: &IntervalGraph) -> Solution {
    let closed: Vec<Vec<VId>> = graph
        .vertices()
        .map(|v| graph.closed_neighborhood(v).collect())
        .collect();
    let mut visits: Vec<VId> = graph
        .vertices()
        .sorted_by_key(|&v| graph.interval(v).right)
        .collect();
    visits.sort_by_key(|&v| closed[v].len());

    // Vertices of `N[x]` not yet in the closed neighborhood of a vertex labeled 2.
    let pending = |x: VId, covered: &[bool]| closed[x].iter().filter(|&&y| !covered[y]).count();
    let mut labels = vec![Label::Zero; graph.order()];
    let mut covered = vec![false; graph.order()];
    for v in visits {
        if is_dominated(graph, v, &labels) {
            continue;
        }
        let mut u = v;
        for &x in &closed[v] {
            let (px, pu) = (pending(x, &covered), pending(u, &covered));
            if px > pu || (px == pu && closed[x].len() > closed[u].len()) {
                u = x;
            }
        }
        let twos = graph.neighbors(u).filter(|&x| labels[x] == Label::Two).count();
        if pending(u, &covered) + twos >= 3 {
            trace!("{} labeled 2 for {}", graph.interval(u), graph.interval(v));
            labels[u] = Label::Two;
            for &x in &closed[u] {
                covered[x] = true;
            }
        } else {
            labels[v] = Label::One;
        }
    }

    let twos: Vec<VId> = graph
        .vertices()
        .filter(|&v| labels[v] == Label::Two)
        .sorted_by_key(|&v| graph.interval(v).right)
        .collect();
    for v in twos {
        if is_isolated_in_v2(graph, v, &labels) {
            if let Some(u) = graph.neighbors(v).max_by_key(|&u| graph.interval(u).right) {
                labels[u] = Label::One;
            }
        }
    }
    Solution::from_labels(&labels)
}
