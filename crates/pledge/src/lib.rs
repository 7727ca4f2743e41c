//! Three independent operations, each delivered as a [`Deferred`].
//!
//! - [`fetch_profile`] - GitHub user profile over HTTPS
//! - [`generate_token`] - 40-character random hex token
//! - [`make_file_funny`] - a file's text with `" lol"` after every line
//!
//! Each has a callback-style twin (`*_with`) that reports through a
//! [`Callback`] instead. Every entry point spawns onto the current Tokio
//! runtime and must be called from within one.
//!
//! # Example
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() {
//! let token = pledge::generate_token().await.unwrap();
//! assert_eq!(token.len(), 40);
//!
//! match pledge::fetch_profile("octocat").await {
//!     Ok(profile) => println!("{}", profile["name"]),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # }
//! ```

use std::path::Path;

use once_cell::sync::OnceCell;

pub use pledge_core::{Abandoned, Callback, Deferred, Settler, promisify};
pub use pledge_funny::{FUNNY_SUFFIX, FunnyTransformer, make_funny};
pub use pledge_profile::{HttpClient, Profile, ProfileFetcher, ProfileOptions, ReqwestClient};
pub use pledge_token::{EntropySource, OsEntropy, TOKEN_BYTES, TOKEN_LEN, TokenGenerator};

pub type ProfileError = pledge_profile::Error<<ReqwestClient as HttpClient>::Error>;
pub type TokenError = pledge_token::Error<<OsEntropy as EntropySource>::Error>;
pub type FileError = pledge_funny::Error;

static PROFILE_FETCHER: OnceCell<ProfileFetcher<ReqwestClient>> = OnceCell::new();

/// The process-wide fetcher; its client (and connection pool) is built on first use.
/// A failed build is reported and retried on the next call.
fn profile_fetcher() -> Result<ProfileFetcher<ReqwestClient>, ProfileError> {
    PROFILE_FETCHER
        .get_or_try_init(|| ReqwestClient::new().map(ProfileFetcher::new))
        .cloned()
        .map_err(pledge_profile::Error::Transport)
}

/// Fetch `https://api.github.com/users/<username>`.
pub fn fetch_profile(username: &str) -> Deferred<Profile, ProfileError> {
    match profile_fetcher() {
        Ok(fetcher) => fetcher.fetch(username),
        Err(e) => Deferred::rejected(e),
    }
}

pub fn fetch_profile_with(username: &str, callback: Callback<Profile, ProfileError>) {
    match profile_fetcher() {
        Ok(fetcher) => fetcher.fetch_with(username, callback),
        Err(e) => callback(Err(e)),
    }
}

/// Draw 20 bytes from the operating system and render them as lowercase hex.
pub fn generate_token() -> Deferred<String, TokenError> { TokenGenerator::new(OsEntropy).generate() }

pub fn generate_token_with(callback: Callback<String, TokenError>) { TokenGenerator::new(OsEntropy).generate_with(callback) }

/// Read `path` and append `" lol"` to every line.
pub fn make_file_funny(path: impl AsRef<Path>) -> Deferred<String, FileError> { FunnyTransformer::new().transform_file(path) }

pub fn make_file_funny_with(path: impl AsRef<Path>, callback: Callback<String, FileError>) {
    FunnyTransformer::new().transform_file_with(path, callback)
}
