use std::borrow::Cow;
use std::path::{Path, PathBuf};

use pledge_core::{Callback, Deferred, promisify, spawn_with};

use crate::error::{Error, Result};

pub const FUNNY_SUFFIX: &str = " lol";

/// Append `suffix` to every `'\n'`-separated segment of `text`.
///
/// Splitting keeps the empty segment after a trailing newline, and that
/// segment gets the suffix too. Carriage returns are left where they are.
///
/// # Examples
///
/// ```
/// use pledge_funny::{make_funny, FUNNY_SUFFIX};
///
/// assert_eq!(make_funny("a\nb\n", FUNNY_SUFFIX), "a lol\nb lol\n lol");
/// ```
pub fn make_funny(text: &str, suffix: &str) -> String {
    let segments = text.split('\n').count();
    let mut out = String::with_capacity(text.len() + segments * suffix.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line);
        out.push_str(suffix);
    }
    out
}

/// Reads text files and suffixes every line.
#[derive(Debug, Clone)]
pub struct FunnyTransformer {
    suffix: Cow<'static, str>,
}

impl Default for FunnyTransformer {
    fn default() -> Self {
        Self {
            suffix: Cow::Borrowed(FUNNY_SUFFIX),
        }
    }
}

impl FunnyTransformer {
    pub fn new() -> Self { Self::default() }

    /// Use `suffix` instead of [`FUNNY_SUFFIX`].
    pub fn suffix(mut self, suffix: impl Into<Cow<'static, str>>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn transform_str(&self, text: &str) -> String { make_funny(text, &self.suffix) }

    /// Read `path` as UTF-8 and transform it. Nothing is produced on a failed read.
    pub async fn transform(&self, path: &Path) -> Result<String> {
        tracing::debug!(path = %path.display(), "reading file");
        let text = tokio::fs::read_to_string(path).await.map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.transform_str(&text))
    }

    /// Transform the file at `path` and report through `callback`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn transform_file_with(&self, path: impl AsRef<Path>, callback: Callback<String, Error>) {
        let transformer = self.clone();
        let path: PathBuf = path.as_ref().to_path_buf();
        spawn_with(async move { transformer.transform(&path).await }, callback);
    }

    /// Transform the file at `path`, returning a handle settled with the text or the read failure.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn transform_file(&self, path: impl AsRef<Path>) -> Deferred<String, Error> {
        promisify(|callback| self.transform_file_with(path, callback))
    }
}
