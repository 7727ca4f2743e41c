use std::sync::Arc;

use pledge_core::{Callback, Deferred, promisify, spawn_blocking_with};

use crate::entropy::{EntropySource, OsEntropy};
use crate::error::{Error, Result};

/// Number of random bytes behind each token.
pub const TOKEN_BYTES: usize = 20;

/// Length of a rendered token: two hex digits per byte.
pub const TOKEN_LEN: usize = TOKEN_BYTES * 2;

/// Render token bytes as lowercase hex.
pub fn encode_token(bytes: &[u8; TOKEN_BYTES]) -> String { hex::encode(bytes) }

/// Produces random tokens from an [`EntropySource`].
#[derive(Debug)]
pub struct TokenGenerator<S: EntropySource = OsEntropy> {
    source: Arc<S>,
}

impl<S: EntropySource> Clone for TokenGenerator<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl Default for TokenGenerator<OsEntropy> {
    fn default() -> Self { Self::new(OsEntropy) }
}

impl<S: EntropySource> TokenGenerator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Draw one token synchronously.
    pub fn draw(&self) -> Result<String, S::Error> {
        let mut bytes = [0u8; TOKEN_BYTES];
        self.source.fill(&mut bytes).map_err(|e| {
            tracing::warn!(error = %e, "entropy source failed");
            Error::Entropy(e)
        })?;
        Ok(encode_token(&bytes))
    }

    /// Draw a token on the blocking pool and report it through `callback`.
    ///
    /// A source that panics mid-draw is reported as [`Error::Abandoned`].
    ///
    /// Must be called from within a Tokio runtime.
    pub fn generate_with(&self, callback: Callback<String, Error<S::Error>>) {
        let generator = self.clone();
        spawn_blocking_with(move || generator.draw(), callback);
    }

    /// Draw a token, returning a handle settled with it or the entropy failure.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn generate(&self) -> Deferred<String, Error<S::Error>> { promisify(|callback| self.generate_with(callback)) }
}
