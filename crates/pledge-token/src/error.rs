use pledge_core::Abandoned;

#[derive(Debug, thiserror::Error)]
pub enum Error<E> {
    /// The entropy source could not supply bytes.
    #[error("entropy source failed")]
    Entropy(#[source] E),

    #[error(transparent)]
    Abandoned(#[from] Abandoned),
}

impl<E> Error<E> {
    pub fn entropy(&self) -> Option<&E> {
        match self {
            Error::Entropy(e) => Some(e),
            Error::Abandoned(_) => None,
        }
    }
}

pub type Result<T, E> = std::result::Result<T, Error<E>>;
