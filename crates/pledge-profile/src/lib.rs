//! Remote user-profile lookup.
//!
//! # Architecture
//!
//! - [`data`] - Request options and the profile record type
//! - [`logic`] - Pure URL construction and response interpretation
//! - [`effects`] - The HTTP seam and the fetcher that drives it
//!
//! The transport is abstracted behind [`HttpClient`] so tests can substitute
//! a canned client. [`ProfileFetcher::fetch_with`] is the callback-style entry
//! point; [`ProfileFetcher::fetch`] wraps it in a [`pledge_core::Deferred`].

pub mod data;
pub mod effects;
pub mod logic;
mod error;

pub use data::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, Profile, ProfileOptions};
pub use effects::{HttpClient, ProfileFetcher};
pub use logic::{interpret_body, profile_url};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{Error, Result};
