//! Differential verification of a candidate algorithm against the brute force.

use crate::{
    brute_force::{brute_force_minimum, par_brute_force_minimum},
    checker::check_solution,
    error::{Error, Found, Result},
    greedy::greedy,
    interval_graph::IntervalGraph,
    render::{Renderer, TextRenderer},
    solution::Solution,
    solver::solve,
};
use derive_more::Display;
use log::{debug, error, info};
use std::{path::PathBuf, str::FromStr};

/// An algorithm whose weights are compared with the brute force.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    #[display(fmt = "dp")]
    Dp,
    #[display(fmt = "greedy")]
    Greedy,
}

impl Algorithm {
    /// Runs the algorithm on `graph`.
    ///
    /// The reported weight is `Invalid` when the labeling breaks a rule, or when
    /// the solver's own weight disagrees with the checked one.
    pub fn run(self, graph: &IntervalGraph) -> (Solution, Found) {
        match self {
            Algorithm::Dp => {
                let (solution, weight) = solve(graph);
                let found = match check_solution(graph, &solution) {
                    Some(checked) if checked == weight => Found::Weight(weight),
                    _ => Found::Invalid,
                };
                (solution, found)
            }
            Algorithm::Greedy => {
                let solution = greedy(graph);
                let found = check_solution(graph, &solution).into();
                (solution, found)
            }
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dp" => Ok(Algorithm::Dp),
            "greedy" => Ok(Algorithm::Greedy),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Where the drawings of a counterexample go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTarget {
    pub directory: PathBuf,
    pub name: String,
}

impl SaveTarget {
    pub fn algorithm_path(&self) -> PathBuf {
        self.directory.join(format!("algo_{}", self.name))
    }

    pub fn brute_force_path(&self) -> PathBuf {
        self.directory.join(format!("bruteforce_{}", self.name))
    }
}

/// Outcome of a batch in which every graph matched.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "{} matched the brute force on {} graphs", algorithm, checked)]
pub struct Report {
    pub algorithm: Algorithm,
    pub checked: usize,
}

pub struct Verifier<R = TextRenderer> {
    algorithm: Algorithm,
    renderer: R,
    save: Option<SaveTarget>,
    parallel: bool,
}

impl Verifier {
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_renderer(algorithm, TextRenderer::default())
    }
}

impl<R: Renderer> Verifier<R> {
    pub fn with_renderer(algorithm: Algorithm, renderer: R) -> Self {
        Self {
            algorithm,
            renderer,
            save: None,
            parallel: false,
        }
    }

    /// Saves the drawings of a counterexample as `algo_<name>` and
    /// `bruteforce_<name>` in `directory`.
    pub fn save_to<P: Into<PathBuf>, S: Into<String>>(mut self, directory: P, name: S) -> Self {
        self.save = Some(SaveTarget {
            directory: directory.into(),
            name: name.into(),
        });
        self
    }

    /// Spreads the brute force over the rayon pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Compares the algorithm with the brute force on `graph`.
    pub fn check(&self, graph: &IntervalGraph) -> Result<()> {
        let (expected_solution, expected) = if self.parallel {
            par_brute_force_minimum(graph)?
        } else {
            brute_force_minimum(graph)?
        };
        let (solution, found) = self.algorithm.run(graph);
        if found == Found::Weight(expected) {
            debug!("{} and brute force agree on {}: {}", self.algorithm, graph, expected);
            return Ok(());
        }
        error!("counterexample {}", graph);
        error!(
            "{} ({}): {}",
            self.algorithm,
            found,
            solution.describe(graph)
        );
        error!(
            "brute force ({}): {}",
            expected,
            expected_solution.describe(graph)
        );
        let drawings = (
            self.renderer.render(graph, &solution, "QTRD from algorithm"),
            self.renderer
                .render(graph, &expected_solution, "QTRD from brute force"),
        );
        error!("\n{}\n\n{}", drawings.0, drawings.1);
        if let Some(target) = &self.save {
            std::fs::create_dir_all(&target.directory)?;
            drawings.0.save(target.algorithm_path())?;
            drawings.1.save(target.brute_force_path())?;
            info!(
                "counterexample saved at {} and {}",
                target.algorithm_path().display(),
                target.brute_force_path().display()
            );
        }
        Err(Error::Mismatch {
            algorithm: self.algorithm,
            expected,
            found,
        })
    }

    /// Checks every graph in turn, stopping at the first mismatch.
    pub fn run<I: IntoIterator<Item = IntervalGraph>>(&self, graphs: I) -> Result<Report> {
        let mut checked = 0;
        for graph in graphs {
            self.check(&graph)?;
            checked += 1;
            info!("test {} successful", checked);
        }
        Ok(Report {
            algorithm: self.algorithm,
            checked,
        })
    }
}
