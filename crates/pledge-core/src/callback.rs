use crate::deferred::Deferred;

/// Completion callback invoked exactly once with the outcome of an operation.
pub type Callback<T, E> = Box<dyn FnOnce(Result<T, E>) + Send + 'static>;

/// Start a callback-style operation and return a handle to its outcome.
///
/// `call` receives the callback to report through. It is invoked
/// synchronously; the callback may fire later from any thread.
///
/// Operations whose success value needs post-processing before it is
/// reported should do that work before invoking the callback rather than
/// relying on this adapter to transform it.
pub fn promisify<T, E, F>(call: F) -> Deferred<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
    F: FnOnce(Callback<T, E>),
{
    Deferred::new(|settler| call(settler.into_callback()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Abandoned;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum TestError {
        Boom(&'static str),
        Abandoned,
    }

    impl From<Abandoned> for TestError {
        fn from(_: Abandoned) -> Self { TestError::Abandoned }
    }

    fn double_later(n: u32, callback: Callback<u32, TestError>) {
        std::thread::spawn(move || callback(Ok(n * 2)));
    }

    fn fail_later(callback: Callback<u32, TestError>) {
        std::thread::spawn(move || callback(Err(TestError::Boom("disk on fire"))));
    }

    #[tokio::test]
    async fn test_promisify_resolves_from_callback() {
        let value = promisify(|cb| double_later(21, cb)).await;
        assert_eq!(value, Ok(42));
    }

    #[tokio::test]
    async fn test_promisify_rejects_from_callback() {
        let value = promisify(fail_later).await;
        assert_eq!(value, Err(TestError::Boom("disk on fire")));
    }

    #[tokio::test]
    async fn test_promisify_dropped_callback_is_abandoned() {
        let value: Result<u32, TestError> = promisify(|cb| drop(cb)).await;
        assert_eq!(value, Err(TestError::Abandoned));
    }

    #[tokio::test]
    async fn test_promisify_synchronous_callback() {
        let value: Result<u32, TestError> = promisify(|cb| cb(Ok(7))).await;
        assert_eq!(value, Ok(7));
    }
}
