//! Exhaustive search of a minimum quasi-total Roman domination function.
//!
//! Only usable on small graphs: all `3^n` labelings are checked. Labelings are
//! numbered in base 3 with vertex 0 as the most significant digit, and the
//! first labeling of minimum weight is kept as the witness.

use crate::{
    checker::check_labels,
    error::{Error, Result},
    interval_graph::IntervalGraph,
    solution::Solution,
    types::{Label, Weight},
};
use log::debug;
use rayon::prelude::*;

/// Largest order the exhaustive search accepts.
pub const MAX_BRUTE_FORCE_ORDER: usize = 20;

/// Returns a minimum weight labeling of `graph` and its weight.
pub fn brute_force_minimum(graph: &IntervalGraph) -> Result<(Solution, Weight)> {
    let total = num_labelings(graph)?;
    let mut labels = vec![Label::Zero; graph.order()];
    let mut best: Option<(Weight, u64)> = None;
    for index in 0..total {
        decode(index, &mut labels);
        if let Some(weight) = check_labels(graph, &labels) {
            if best.map_or(true, |(best_weight, _)| weight < best_weight) {
                best = Some((weight, index));
            }
        }
    }
    Ok(witness(graph, best))
}

/// Same as [`brute_force_minimum`], with the labelings split over the rayon pool.
///
/// Returns the same witness as the sequential search.
pub fn par_brute_force_minimum(graph: &IntervalGraph) -> Result<(Solution, Weight)> {
    let total = num_labelings(graph)?;
    let order = graph.order();
    let best = (0..total)
        .into_par_iter()
        .map_init(
            || vec![Label::Zero; order],
            |labels, index| {
                decode(index, labels);
                check_labels(graph, labels).map(|weight| (weight, index))
            },
        )
        .flatten()
        .min();
    Ok(witness(graph, best))
}

fn num_labelings(graph: &IntervalGraph) -> Result<u64> {
    if graph.order() > MAX_BRUTE_FORCE_ORDER {
        return Err(Error::OrderTooLarge(graph.order()));
    }
    let total = 3u64.pow(graph.order() as u32);
    debug!("brute force over {} labelings", total);
    Ok(total)
}

fn decode(mut index: u64, labels: &mut [Label]) {
    for label in labels.iter_mut().rev() {
        *label = match index % 3 {
            0 => Label::Zero,
            1 => Label::One,
            _ => Label::Two,
        };
        index /= 3;
    }
}

fn witness(graph: &IntervalGraph, best: Option<(Weight, u64)>) -> (Solution, Weight) {
    match best {
        Some((weight, index)) => {
            let mut labels = vec![Label::Zero; graph.order()];
            decode(index, &mut labels);
            (Solution::from_labels(&labels), weight)
        }
        // Unreachable for real graphs: labeling every vertex 1 is always valid.
        None => (
            Solution::from_labels(&vec![Label::One; graph.order()]),
            graph.order(),
        ),
    }
}
