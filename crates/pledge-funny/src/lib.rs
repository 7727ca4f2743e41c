//! Line-suffixing file transform.
//!
//! [`make_funny`] is the pure part; [`FunnyTransformer`] reads the file and
//! delivers the result through a callback or a [`pledge_core::Deferred`].
//! The source file is only ever read.

pub use error::{Error, Result};
pub use transform::{FUNNY_SUFFIX, FunnyTransformer, make_funny};

mod error;
mod transform;
