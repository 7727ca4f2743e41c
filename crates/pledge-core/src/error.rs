use thiserror::Error;

/// The producing side went away without settling.
///
/// Error types awaited through a [`Deferred`](crate::Deferred) implement
/// `From<Abandoned>` so this case folds into their own taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deferred value was abandoned before it was settled")]
pub struct Abandoned;
