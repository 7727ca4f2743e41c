//! Random hexadecimal tokens.
//!
//! A token is [`TOKEN_BYTES`] bytes drawn from an [`EntropySource`] and
//! rendered as lowercase hex. Draws run on Tokio's blocking pool since the
//! operating system may block while gathering entropy.

pub use entropy::{EntropySource, OsEntropy};
pub use error::{Error, Result};
pub use generator::{TOKEN_BYTES, TOKEN_LEN, TokenGenerator, encode_token};

mod entropy;
mod error;
mod generator;
