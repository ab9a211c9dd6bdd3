use std::time::Duration;

use reqstamp_core::hash::constant_time_eq;
use reqstamp_core::{Context, Error, Nonce, Result};

use crate::signer::HmacSigner;

/// What a receiver requires of an incoming signed request.
///
/// Immutable once constructed; construction is the only place validation
/// errors can surface.
#[derive(Clone, Debug)]
pub struct VerificationPolicy {
    subject: String,
    ttl: Duration,
}

impl VerificationPolicy {
    /// Create a policy expecting the given subject, accepting requests no
    /// older than `ttl`.
    ///
    /// Fails with `ErrorKind::ConfigInvalid` on an empty subject or a zero
    /// TTL.
    pub fn new(subject: impl Into<String>, ttl: Duration) -> Result<Self> {
        let subject = subject.into();
        if subject.is_empty() {
            return Err(Error::config_invalid("subject must be a non-empty string"));
        }
        if ttl.is_zero() {
            return Err(Error::config_invalid("signature ttl must be positive"));
        }

        Ok(Self { subject, ttl })
    }
}

/// Validates incoming signed requests.
///
/// A request passes when its subject matches the policy, its timestamp is
/// no older than the policy TTL, and its signature equals the one
/// recomputed over the received nonce, timestamp, and body.
///
/// Check failures are normal outcomes reported as `false`, never as
/// errors, and callers should reject uniformly without telling an
/// unauthenticated peer which check failed. The freshness check bounds
/// staleness only; timestamps ahead of the receiver's clock are accepted.
#[derive(Clone, Debug)]
pub struct Verifier {
    signer: HmacSigner,
    policy: VerificationPolicy,
}

impl Verifier {
    /// Create a verifier recomputing signatures with `signer` and judging
    /// requests against `policy`.
    pub fn new(signer: HmacSigner, policy: VerificationPolicy) -> Self {
        Self { signer, policy }
    }

    /// Check an incoming request, returning whether it authenticates.
    ///
    /// `nonce`, `signature`, `subject`, and `timestamp` are the received
    /// header values; `body` is the raw request body exactly as received.
    /// The final signature comparison runs in fixed time over the full
    /// string length.
    pub fn verify(
        &self,
        ctx: &Context,
        nonce: &Nonce,
        signature: &str,
        subject: &str,
        timestamp: i64,
        body: &[u8],
    ) -> bool {
        if subject != self.policy.subject {
            return false;
        }

        let ttl = i64::try_from(self.policy.ttl.as_secs()).unwrap_or(i64::MAX);
        if timestamp < ctx.now_unix().saturating_sub(ttl) {
            return false;
        }

        // A nonce or timestamp that does not fit the wire layout cannot
        // have produced a valid signature in the first place.
        let expected = match self.signer.sign(body, nonce, timestamp) {
            Ok(signature) => signature,
            Err(_) => return false,
        };

        constant_time_eq(expected.as_bytes(), signature.as_bytes())
    }
}
