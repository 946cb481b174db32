//! Error types for the solver.
//!
//! None of these are recoverable: a `PathError` means the search tree is
//! corrupted, and any output after it would be untrustworthy.

use std::io;

use crate::tree::NodeId;

/// A solution path could not be reconstructed or described.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// Consecutive arrangements do not differ by exactly one frog moving into the gap.
    #[error("step {index} changes {differing} slot(s); expected one frog leaving and one gap filled")]
    InvalidStep {
        /// Position of the later arrangement in the path
        index: usize,
        /// Slots whose kind changed
        differing: usize,
    },

    /// A node on the parent chain was released before the path was printed.
    #[error("node {0} on the solution path was already released")]
    MissingNode(NodeId),
}

/// Fatal failure of a search run.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("corrupted solution path: {0}")]
    Path(#[from] PathError),

    #[error("failed to write solution: {0}")]
    Output(#[from] io::Error),

    #[error("failed to encode solutions as JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SolveError::from(PathError::InvalidStep {
            index: 3,
            differing: 4,
        });
        assert_eq!(
            err.to_string(),
            "corrupted solution path: step 3 changes 4 slot(s); expected one frog leaving and one gap filled"
        );
    }
}
