//! Single-settlement deferred values.
//!
//! # Architecture
//!
//! A [`Deferred`] is the consumer half of a one-shot channel; the matching
//! [`Settler`] is handed to whoever produces the outcome. Settling consumes the
//! settler, so a handle can never observe two outcomes.
//!
//! Callback-style operations report through a [`Callback`], an `FnOnce` over a
//! `Result`. [`promisify`] bridges the two worlds: it starts the operation with
//! a callback wired to a fresh settler and returns the handle. [`spawn_with`]
//! runs work on the Tokio runtime and calls back even if that work panics.
//!
//! # Example
//!
//! ```
//! use pledge_core::{promisify, Abandoned, Callback};
//!
//! #[derive(Debug)]
//! struct Failed;
//!
//! impl From<Abandoned> for Failed {
//!     fn from(_: Abandoned) -> Self { Failed }
//! }
//!
//! fn answer(callback: Callback<u32, Failed>) {
//!     std::thread::spawn(move || callback(Ok(42)));
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let value = promisify(answer).await.unwrap();
//! assert_eq!(value, 42);
//! # });
//! ```

pub use callback::{Callback, promisify};
pub use deferred::{Deferred, Settler};
pub use error::Abandoned;
pub use spawn::{spawn_blocking_with, spawn_with};

mod callback;
mod deferred;
mod error;
mod spawn;
