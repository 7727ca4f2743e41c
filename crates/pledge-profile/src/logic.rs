//! Pure transformations: where to send the request and what the answer means.

use serde_json::Value;
use url::Url;

use crate::data::Profile;
use crate::error::Error;

/// Build `<base_url>/users/<username>`.
///
/// The username is pushed as one path segment, so characters such as `/`
/// or `?` are percent-encoded instead of changing the URL's shape. `.` and
/// `..` would be resolved away as dot segments and are rejected.
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
/// use pledge_profile::profile_url;
///
/// let url = profile_url::<Infallible>("https://api.github.com", "octocat").unwrap();
/// assert_eq!(url.as_str(), "https://api.github.com/users/octocat");
/// ```
pub fn profile_url<E>(base_url: &str, username: &str) -> Result<Url, Error<E>> {
    if matches!(username, "" | "." | "..") {
        return Err(Error::InvalidUsername(username.to_string()));
    }

    let mut url = Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| Error::InvalidUrl(format!("{base_url}: cannot be a base")))?
        .pop_if_empty()
        .push("users")
        .push(username);
    Ok(url)
}

/// Decide whether a decoded body is a profile or a service-reported failure.
///
/// A truthy `message` field marks a failure, whatever the HTTP status was.
pub fn interpret_body<E>(body: Value) -> Result<Profile, Error<E>> {
    match body {
        Value::Object(map) => match map.get("message") {
            Some(message) if is_truthy(message) => Err(Error::Remote {
                message: message_text(message),
            }),
            _ => Ok(map),
        },
        other => Err(Error::UnexpectedBody(kind_of(&other))),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use serde_json::json;

    use super::*;

    type Checked<T> = Result<T, Error<Infallible>>;

    #[test]
    fn test_profile_url() {
        let url: Checked<Url> = profile_url("https://api.github.com", "octocat");
        assert_eq!(url.unwrap().as_str(), "https://api.github.com/users/octocat");
    }

    #[test]
    fn test_profile_url_trailing_slash_base() {
        let url: Checked<Url> = profile_url("http://127.0.0.1:8080/api/", "octocat");
        assert_eq!(url.unwrap().as_str(), "http://127.0.0.1:8080/api/users/octocat");
    }

    #[test]
    fn test_profile_url_encodes_segment() {
        let url: Checked<Url> = profile_url("https://api.github.com", "a/b?c");
        assert_eq!(url.unwrap().as_str(), "https://api.github.com/users/a%2Fb%3Fc");
    }

    #[test]
    fn test_profile_url_rejects_empty_username() {
        let url: Checked<Url> = profile_url("https://api.github.com", "");
        assert!(matches!(url, Err(Error::InvalidUsername(_))));
    }

    #[test]
    fn test_profile_url_rejects_dot_segments() {
        for username in [".", ".."] {
            let url: Checked<Url> = profile_url("https://api.github.com", username);
            assert!(
                matches!(&url, Err(Error::InvalidUsername(u)) if u == username),
                "{username:?} produced {url:?}"
            );
        }
    }

    #[test]
    fn test_profile_url_keeps_dotted_names() {
        let url: Checked<Url> = profile_url("https://api.github.com", "...");
        assert_eq!(url.unwrap().as_str(), "https://api.github.com/users/...");

        let url: Checked<Url> = profile_url("https://api.github.com", "a.b");
        assert_eq!(url.unwrap().as_str(), "https://api.github.com/users/a.b");
    }

    #[test]
    fn test_profile_url_rejects_bad_base() {
        let url: Checked<Url> = profile_url("not a url", "octocat");
        assert!(matches!(url, Err(Error::InvalidUrl(_))));

        let url: Checked<Url> = profile_url("mailto:someone@example.com", "octocat");
        assert!(matches!(url, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_interpret_profile_is_unmodified() {
        let body = json!({ "login": "octocat", "id": 583231, "site_admin": false });
        let profile: Checked<Profile> = interpret_body(body.clone());
        assert_eq!(Value::Object(profile.unwrap()), body);
    }

    #[test]
    fn test_interpret_message_is_remote_error() {
        let body = json!({ "message": "Not Found", "documentation_url": "https://docs.github.com" });
        let err = interpret_body::<Infallible>(body).unwrap_err();
        assert_eq!(err.remote_message(), Some("Not Found"));
        assert_eq!(err.to_string(), "Failed to get GitHub profile: Not Found");
    }

    #[test]
    fn test_interpret_falsy_message_is_profile() {
        for message in [json!(null), json!(""), json!(false), json!(0)] {
            let profile: Checked<Profile> = interpret_body(json!({ "login": "x", "message": message }));
            assert!(profile.is_ok(), "message {message} should not be a failure");
        }
    }

    #[test]
    fn test_interpret_non_string_message() {
        let err = interpret_body::<Infallible>(json!({ "message": 42 })).unwrap_err();
        assert_eq!(err.remote_message(), Some("42"));
    }

    #[test]
    fn test_interpret_rejects_non_object() {
        let err = interpret_body::<Infallible>(json!(["octocat"])).unwrap_err();
        assert!(matches!(err, Error::UnexpectedBody("array")));
    }
}
