//! Quasi-total Roman domination on interval graphs.
//!
//! [`solver::solve`] computes a minimum weight labeling in polynomial time;
//! [`brute_force`] and [`verifier`] check it against an exhaustive search.

pub mod brute_force;
pub mod checker;
pub mod config;
pub mod error;
pub mod greedy;
pub mod interval_graph;
pub mod render;
pub mod solution;
pub mod solver;
pub mod types;
pub mod verifier;
