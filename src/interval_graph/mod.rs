//! Interval graphs and their suppliers.

pub use generate::{
    count_graphs, enumerate_graphs, enumerate_positions, graph_from_positions, random_graph,
    Positions,
};
pub use graph::IntervalGraph;

pub mod generate;
mod graph;
