use std::collections::TryReserveError;

/// Everything that can go wrong while building a tree or generating input for one.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Room for a new node (or a filter's scratch space) could not be reserved. Nothing was
    /// mutated when this is returned.
    #[error("failed to allocate: {0}")]
    Alloc(#[from] TryReserveError),
    /// A generator was asked for something it can't produce.
    #[error("invalid input parameters: {0}")]
    InvalidInput(&'static str),
}
