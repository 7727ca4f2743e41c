use std::sync::Arc;

use pledge_core::{Callback, Deferred, promisify, spawn_with};

use crate::data::{Profile, ProfileOptions};
use crate::effects::http::HttpClient;
use crate::error::{Error, Result};
use crate::logic::{interpret_body, profile_url};

/// Looks up user profiles through an [`HttpClient`].
///
/// Cloning is cheap; clones share the client.
pub struct ProfileFetcher<C: HttpClient> {
    client: Arc<C>,
    options: Arc<ProfileOptions>,
}

impl<C: HttpClient> Clone for ProfileFetcher<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            options: Arc::clone(&self.options),
        }
    }
}

impl<C: HttpClient> ProfileFetcher<C> {
    /// Create a fetcher with default [`ProfileOptions`].
    pub fn new(client: C) -> Self { Self::with_options(client, ProfileOptions::default()) }

    pub fn with_options(client: C, options: ProfileOptions) -> Self {
        Self {
            client: Arc::new(client),
            options: Arc::new(options),
        }
    }

    pub fn client(&self) -> &C { &self.client }

    pub fn options(&self) -> &ProfileOptions { &self.options }

    /// Start a lookup and report its outcome through `callback`.
    ///
    /// The request runs as a task on the current Tokio runtime, so this must
    /// be called from within one. The callback fires exactly once, with
    /// [`Error::Abandoned`] if the request task panicked.
    pub fn fetch_with(&self, username: &str, callback: Callback<Profile, Error<C::Error>>) {
        let fetcher = self.clone();
        let username = username.to_string();
        spawn_with(async move { fetcher.request(&username).await }, callback);
    }

    /// Look up `username`, returning a handle settled with the profile or the failure.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn fetch(&self, username: &str) -> Deferred<Profile, Error<C::Error>> {
        promisify(|callback| self.fetch_with(username, callback))
    }

    /// One GET, no retries.
    pub async fn request(&self, username: &str) -> Result<Profile, C::Error> {
        let url = profile_url::<C::Error>(&self.options.base_url, username)?;
        tracing::debug!(%url, "fetching profile");

        let body = self
            .client
            .get_json(url.as_str(), &self.options.request_headers())
            .await
            .map_err(Error::Transport)?;

        interpret_body(body).inspect_err(|e| {
            if let Error::Remote { message } = e {
                tracing::warn!(%username, %message, "profile service reported a failure");
            }
        })
    }
}
