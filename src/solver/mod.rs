//! Exact minimum quasi-total Roman domination on interval graphs.
//!
//! Components are solved one at a time by a left-to-right dynamic program over
//! their vertices sorted by right endpoint. Each reached state is expanded with
//! the rules of [`transition`]; the optimum of a component is the `Solid` state
//! of its last vertex.

pub use sweep::{Node, Sweep};
pub use table::{Entry, Table};
pub use transition::{Mode, Rule, State, Transition};

mod sweep;
mod table;
pub mod transition;

use crate::{
    interval_graph::IntervalGraph,
    solution::Solution,
    types::{Label, VId, Weight},
};
use log::{debug, error};

/// Returns a minimum weight labeling of `graph` and the weight found by the
/// dynamic program.
pub fn solve(graph: &IntervalGraph) -> (Solution, Weight) {
    let mut solution = Solution::new();
    let mut weight = 0;
    for component in graph.connected_components() {
        let (component_solution, component_weight) = solve_component(graph, &component);
        debug!(
            "component {} has weight {}",
            graph.describe(component.iter().copied()),
            component_weight
        );
        solution.merge(component_solution);
        weight += component_weight;
    }
    (solution, weight)
}

/// Solves the connected component of `graph` made of `component`.
pub fn solve_component(graph: &IntervalGraph, component: &[VId]) -> (Solution, Weight) {
    let sweep = Sweep::new(graph, component);
    if sweep.is_empty() {
        return (Solution::new(), 0);
    }
    let table = run(&sweep);
    let mut solution = Solution::new();
    match table.get(State::new(sweep.last(), Mode::Solid)) {
        Some(entry) => {
            for (i, &label) in entry.labels.iter().enumerate() {
                solution.insert(label, sweep.vertex(i));
            }
            (solution, entry.weight)
        }
        None => {
            error!(
                "the sweep never reached the end of component {}",
                graph.describe(component.iter().copied())
            );
            for i in 0..sweep.len() {
                solution.insert(Label::One, sweep.vertex(i));
            }
            (solution, sweep.len())
        }
    }
}

/// Fills the table of `sweep`, expanding states in sweep order.
fn run(sweep: &Sweep) -> Table {
    let mut table = Table::new(sweep.len());
    expand(sweep, &mut table, State::START);
    for v in 0..sweep.len() {
        for &mode in &[Mode::Solid, Mode::Boundary] {
            let state = State::new(v, mode);
            if table.get(state).is_some() {
                expand(sweep, &mut table, state);
            }
        }
    }
    table
}

fn expand(sweep: &Sweep, table: &mut Table, from: State) {
    for rule in Rule::ALL.iter() {
        for transition in rule.transitions(sweep, from) {
            table.relax(from, &transition);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        brute_force::brute_force_minimum,
        checker::check_solution,
        interval_graph::{enumerate_graphs, random_graph},
    };
    use rand::{rngs::StdRng, SeedableRng};

    fn create_graph(pairs: &[(usize, usize)]) -> IntervalGraph {
        IntervalGraph::from_pairs(pairs).unwrap()
    }

    #[test]
    fn test_empty_graph() {
        let (solution, weight) = solve(&create_graph(&[]));
        assert!(solution.is_empty());
        assert_eq!(weight, 0);
        assert_eq!(solve_component(&create_graph(&[]), &[]).1, 0);
    }

    #[test]
    fn test_single_vertex() {
        let (solution, weight) = solve(&create_graph(&[(0, 1)]));
        assert_eq!(weight, 1);
        assert_eq!(solution.v1(), &[0]);
        assert!(solution.v2().is_empty());
    }

    #[test]
    fn test_disjoint_vertices() {
        let g = create_graph(&[(0, 1), (2, 3)]);
        let (mut solution, weight) = solve(&g);
        solution.normalize();
        assert_eq!(weight, 2);
        assert_eq!(solution.v1(), &[0, 1]);
    }

    #[test]
    fn test_overlapping_pair() {
        let g = create_graph(&[(0, 2), (1, 3)]);
        let (solution, weight) = solve(&g);
        assert_eq!(weight, 2);
        assert_eq!(check_solution(&g, &solution), Some(2));
    }

    #[test]
    fn test_star() {
        let g = create_graph(&[(0, 7), (1, 2), (3, 4), (5, 6)]);
        let (solution, weight) = solve(&g);
        assert_eq!(weight, 3);
        assert_eq!(solution.v2(), &[0]);
        assert_eq!(check_solution(&g, &solution), Some(3));
    }

    #[test]
    fn test_path() {
        let g = create_graph(&[(0, 2), (1, 4), (3, 6), (5, 8), (7, 9)]);
        let (solution, weight) = solve(&g);
        assert_eq!(weight, brute_force_minimum(&g).unwrap().1);
        assert_eq!(check_solution(&g, &solution), Some(weight));
    }

    #[test]
    fn test_matches_brute_force_on_all_small_graphs() {
        for order in 1..=4 {
            for g in enumerate_graphs(order) {
                let (solution, weight) = solve(&g);
                assert_eq!(weight, brute_force_minimum(&g).unwrap().1, "{}", g);
                assert_eq!(check_solution(&g, &solution), Some(weight), "{}", g);
            }
        }
    }

    #[test]
    fn test_matches_brute_force_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(42);
        for order in 5..=8 {
            for _ in 0..20 {
                let g = random_graph(order, &mut rng);
                let (solution, weight) = solve(&g);
                assert_eq!(weight, brute_force_minimum(&g).unwrap().1, "{}", g);
                assert_eq!(check_solution(&g, &solution), Some(weight), "{}", g);
            }
        }
    }
}
