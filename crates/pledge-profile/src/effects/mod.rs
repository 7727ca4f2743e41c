//! I/O: the HTTP seam and the fetcher that drives it.

mod fetcher;
mod http;

pub use fetcher::ProfileFetcher;
pub use http::HttpClient;

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
