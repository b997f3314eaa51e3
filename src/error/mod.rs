use std::fmt;

use thiserror::Error;

/// Fatal failures of an embedding run. None of these are retried
/// internally; the caller adjusts parameters and re-invokes.
#[derive(Debug, Error)]
pub enum IsomapError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(
        "neighborhood graph is disconnected: no path from node {from} to node {to}; \
         increase n_neighbors or radius and re-run"
    )]
    DisconnectedGraph { from: usize, to: usize },
}

/// Non-fatal signal that some retained eigenvalues were negative and were
/// clamped to zero. The indices refer to embedding components, counted in
/// descending eigenvalue order. A negative retained eigenvalue means the
/// distance matrix is not well approximated by a Euclidean embedding at the
/// requested rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEuclideanWarning {
    pub clamped: Vec<usize>,
}

impl fmt::Display for NonEuclideanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "negative eigenvalues clamped to zero for embedding components {:?}; \
             the distances are not Euclidean at the requested rank",
            self.clamped
        )
    }
}
