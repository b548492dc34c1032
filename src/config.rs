//! Settings of a verification batch.

use crate::{
    interval_graph::{enumerate_graphs, random_graph, IntervalGraph},
    verifier::{Algorithm, Verifier},
};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Number of random graphs; ignored when `order` is set.
    pub samples: usize,
    /// Random graphs have an order drawn in `1..=max_random_order`.
    pub max_random_order: usize,
    pub seed: Option<u64>,
    /// Checks every graph of this order instead of random ones.
    pub order: Option<usize>,
    pub algorithm: Algorithm,
    /// Saves the drawings of a counterexample under this name.
    pub save_name: Option<String>,
    pub directory: PathBuf,
    pub parallel: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            samples: 1,
            max_random_order: 12,
            seed: None,
            order: None,
            algorithm: Algorithm::Dp,
            save_name: None,
            directory: PathBuf::from("counterexamples"),
            parallel: false,
        }
    }
}

impl VerifyConfig {
    /// The graphs of the batch, generated lazily.
    pub fn graphs(&self) -> Box<dyn Iterator<Item = IntervalGraph>> {
        match self.order {
            Some(order) => {
                info!("checking every graph of order {}", order);
                Box::new(enumerate_graphs(order))
            }
            None => {
                let seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
                info!(
                    "checking {} random graphs of order at most {} (seed {})",
                    self.samples, self.max_random_order, seed
                );
                let mut rng = StdRng::seed_from_u64(seed);
                let max_order = self.max_random_order.max(1);
                Box::new((0..self.samples).map(move |_| {
                    let order = rng.gen_range(1..=max_order);
                    random_graph(order, &mut rng)
                }))
            }
        }
    }

    pub fn verifier(&self) -> Verifier {
        let verifier = Verifier::new(self.algorithm).parallel(self.parallel);
        match &self.save_name {
            Some(name) => verifier.save_to(self.directory.clone(), name.clone()),
            None => verifier,
        }
    }
}
