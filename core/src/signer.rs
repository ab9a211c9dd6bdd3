use std::sync::Arc;

use crate::{Context, ProvideNonce, Result, SignRequest};

/// Signer is the per-request hook that stamps outgoing requests.
///
/// It wires the nonce source, the clock, and the signing scheme together:
/// each call pulls the next nonce, reads the current time, and hands both
/// to the scheme to attach the authentication headers.
#[derive(Clone, Debug)]
pub struct Signer {
    ctx: Context,
    nonce: Arc<dyn ProvideNonce>,
    builder: Arc<dyn SignRequest>,
}

impl Signer {
    /// Create a new signer.
    pub fn new(ctx: Context, nonce: impl ProvideNonce, builder: impl SignRequest) -> Self {
        Self {
            ctx,
            nonce: Arc::new(nonce),
            builder: Arc::new(builder),
        }
    }

    /// Stamp an outgoing request.
    ///
    /// Call this exactly once per request, immediately before transmission,
    /// with the exact serialized body the transport will send. Each call
    /// consumes one nonce; retries of a failed send must sign again.
    pub async fn sign(&self, parts: &mut http::request::Parts, body: &[u8]) -> Result<()> {
        let nonce = self.nonce.provide_nonce(&self.ctx).await?;
        let timestamp = self.ctx.now_unix();

        self.builder
            .sign_request(&self.ctx, parts, &nonce, timestamp, body)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Nonce, StaticClock};
    use http::HeaderValue;

    #[derive(Debug)]
    struct FixedNonce(u64);

    #[async_trait::async_trait]
    impl ProvideNonce for FixedNonce {
        async fn provide_nonce(&self, _ctx: &Context) -> Result<Nonce> {
            Ok(Nonce::from(self.0))
        }
    }

    #[derive(Debug)]
    struct RecordingScheme;

    #[async_trait::async_trait]
    impl SignRequest for RecordingScheme {
        async fn sign_request(
            &self,
            _ctx: &Context,
            parts: &mut http::request::Parts,
            nonce: &Nonce,
            timestamp: i64,
            body: &[u8],
        ) -> Result<()> {
            let stamp = format!("{nonce}/{timestamp}/{}", body.len());
            parts
                .headers
                .insert("x-test-stamp", HeaderValue::from_str(&stamp).unwrap());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_sign_threads_nonce_clock_and_body() {
        let ctx = Context::new().with_clock(StaticClock(1_700_000_000));
        let signer = Signer::new(ctx, FixedNonce(42), RecordingScheme);

        let (mut parts, _) = http::Request::post("https://api.example.com/v1")
            .body(())
            .unwrap()
            .into_parts();

        signer.sign(&mut parts, b"{}").await.unwrap();

        assert_eq!(
            parts.headers.get("x-test-stamp").unwrap(),
            "42/1700000000/2"
        );
    }
}
