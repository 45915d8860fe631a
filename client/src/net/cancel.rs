//! Abortable request handles.
//!
//! Pages start a request through [`cancellable`] and abort the returned
//! [`RequestHandle`] on unmount. Aborting drops the wrapped future, which in
//! the browser aborts the underlying `fetch` (see `transport::FetchTransport`).

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::future::Future;

use futures::future::{AbortHandle, Abortable};

use super::error::ApiError;

/// Handle used to abort a request started with [`cancellable`].
#[derive(Clone, Debug)]
pub struct RequestHandle {
    inner: AbortHandle,
}

impl RequestHandle {
    pub fn abort(&self) {
        self.inner.abort();
    }

    pub fn is_aborted(&self) -> bool {
        self.inner.is_aborted()
    }
}

/// Wrap `future` so it can be aborted. An aborted request resolves to
/// [`ApiError::Cancelled`] without polling `future` again.
pub fn cancellable<F, T>(future: F) -> (impl Future<Output = Result<T, ApiError>>, RequestHandle)
where
    F: Future<Output = Result<T, ApiError>>,
{
    let (inner, registration) = AbortHandle::new_pair();
    let guarded = Abortable::new(future, registration);
    let run = async move {
        match guarded.await {
            Ok(result) => result,
            Err(futures::future::Aborted) => Err(ApiError::Cancelled),
        }
    };
    (run, RequestHandle { inner })
}
