use std::sync::Mutex;

use num_bigint::BigUint;
use reqstamp_core::{Context, Nonce, ProvideNonce, Result};

/// A strictly increasing nonce counter.
///
/// Initialized with a starting value and incremented by 1 on every call to
/// [`ProvideNonce::provide_nonce`]; the first value handed out is
/// `start + 1`. The counter is arbitrary-precision, so it keeps counting
/// exactly past the 64-bit boundary.
///
/// The counter sits behind a mutex: concurrent requests sharing one
/// generator serialize on it, and no two callers ever receive the same
/// value. Continuity across process restarts is the caller's concern; pass
/// the last persisted value back in as the new start.
#[derive(Debug)]
pub struct SequentialNonce {
    counter: Mutex<BigUint>,
}

impl SequentialNonce {
    /// Create a counter starting at `start`.
    pub fn new(start: u64) -> Self {
        Self {
            counter: Mutex::new(BigUint::from(start)),
        }
    }

    /// Create a counter from a decimal string.
    ///
    /// Accepts values beyond the 64-bit range. Non-numeric or negative
    /// input fails with `ErrorKind::ConfigInvalid`.
    pub fn from_decimal(start: &str) -> Result<Self> {
        Ok(Self {
            counter: Mutex::new(start.parse::<BigUint>()?),
        })
    }
}

#[async_trait::async_trait]
impl ProvideNonce for SequentialNonce {
    async fn provide_nonce(&self, _ctx: &Context) -> Result<Nonce> {
        let mut counter = self.counter.lock().expect("lock poisoned");
        *counter += 1u32;

        Ok(Nonce::from(counter.clone()))
    }
}
