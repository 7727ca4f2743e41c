//! Request options and the profile record type.

use serde_json::{Map, Value};

/// A decoded user profile, exactly as the remote service returned it.
pub type Profile = Map<String, Value>;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// The service refuses requests without a `User-Agent`.
pub const DEFAULT_USER_AGENT: &str = "request";

/// Options for profile requests.
///
/// # Examples
///
/// ```
/// use pledge_profile::ProfileOptions;
///
/// let options = ProfileOptions::default()
///     .user_agent("pledge-tests")
///     .header("Accept", "application/vnd.github+json");
/// assert_eq!(options.user_agent, "pledge-tests");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOptions {
    /// Root of the API. Profiles live at `<base_url>/users/<username>`.
    ///
    /// Default: `https://api.github.com`
    pub base_url: String,

    /// Value of the `User-Agent` header sent with every request.
    ///
    /// Default: `request`
    pub user_agent: String,

    /// Additional headers sent after `User-Agent`.
    pub headers: Vec<(String, String)>,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: Vec::new(),
        }
    }
}

impl ProfileOptions {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Headers for one request, `User-Agent` first.
    pub fn request_headers(&self) -> Vec<(String, String)> {
        let mut headers = Vec::with_capacity(self.headers.len() + 1);
        headers.push(("User-Agent".to_string(), self.user_agent.clone()));
        headers.extend(self.headers.iter().cloned());
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ProfileOptions::default();
        assert_eq!(options.base_url, "https://api.github.com");
        assert_eq!(options.user_agent, "request");
        assert!(options.headers.is_empty());
    }

    #[test]
    fn test_request_headers_put_user_agent_first() {
        let options = ProfileOptions::default().header("Accept", "application/json");
        assert_eq!(
            options.request_headers(),
            vec![
                ("User-Agent".to_string(), "request".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ]
        );
    }
}
