use std::fmt::Debug;

use crate::{Context, Nonce, Result};

/// ProvideNonce is the trait used by the signer to obtain the nonce for an
/// outgoing request.
///
/// The sequential counter is the usual strategy, but anything producing
/// values the receiver accepts (random, time-derived) can stand in behind
/// this interface.
#[async_trait::async_trait]
pub trait ProvideNonce: Debug + Send + Sync + 'static {
    /// Produce the nonce for the next request.
    ///
    /// Implementations that maintain state must serialize access internally:
    /// two concurrent callers must never observe the same value.
    async fn provide_nonce(&self, ctx: &Context) -> Result<Nonce>;
}

/// SignRequest is the trait a concrete signing scheme implements to stamp
/// an outgoing request.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + 'static {
    /// Stamp the request with authentication headers.
    ///
    /// ## Body
    ///
    /// `body` is the exact serialized payload the transport will send; the
    /// signature covers those bytes, so callers must not re-serialize after
    /// signing.
    ///
    /// ## Headers
    ///
    /// Implementations only insert their own header keys and leave headers
    /// set by other concerns untouched.
    async fn sign_request(
        &self,
        ctx: &Context,
        parts: &mut http::request::Parts,
        nonce: &Nonce,
        timestamp: i64,
        body: &[u8],
    ) -> Result<()>;
}
