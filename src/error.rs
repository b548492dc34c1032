//! Error management.

use crate::{
    types::{Endpoint, Interval, Weight},
    verifier::Algorithm,
};
use derive_more::{Display, From};

#[derive(Debug, Display, From)]
pub enum Error {
    #[display(fmt = "invalid interval {}: left endpoint must precede the right one", _0)]
    InvalidInterval(Interval),
    #[display(fmt = "endpoint {} is used more than once", _0)]
    DuplicateEndpoint(Endpoint),
    #[display(fmt = "endpoint {} is out of range for a graph of order {}", endpoint, order)]
    EndpointOutOfRange { endpoint: Endpoint, order: usize },
    #[display(fmt = "malformed endpoint positions: {}", _0)]
    MalformedPositions(String),
    #[display(fmt = "cannot parse interval {:?}", _0)]
    ParseInterval(String),
    #[display(fmt = "unknown algorithm {:?}", _0)]
    UnknownAlgorithm(String),
    #[display(fmt = "order {} is too large for the exhaustive search", _0)]
    OrderTooLarge(usize),
    #[display(
        fmt = "{} found weight {} where the brute force found {}",
        algorithm,
        found,
        expected
    )]
    Mismatch {
        algorithm: Algorithm,
        expected: Weight,
        found: Found,
    },
    #[display(fmt = "{}", _0)]
    #[from]
    Io(std::io::Error),
}

impl std::error::Error for Error {}

/// The weight a candidate algorithm reports for a graph.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    #[display(fmt = "{}", _0)]
    Weight(Weight),
    #[display(fmt = "INVALID")]
    Invalid,
}

impl From<Option<Weight>> for Found {
    fn from(weight: Option<Weight>) -> Self {
        weight.map_or(Found::Invalid, Found::Weight)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
