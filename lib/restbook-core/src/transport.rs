//! Transport capability boundary.

use std::future::Future;

use crate::{Request, Response, Result};

/// Capability for actually sending a request over the network.
///
/// restbook owns no transport logic of its own. Implementations decide
/// connection handling, TLS, and timeouts; their failures surface to
/// callers unchanged. Each call is a single attempt awaited to completion:
/// no retry, no caching.
pub trait Transport: Send + Sync {
    /// Send a request and await its response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    fn send(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;
}
