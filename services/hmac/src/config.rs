use std::fmt::{Debug, Formatter};
use std::time::Duration;

use reqstamp_core::utils::Redact;
use reqstamp_core::{Context, Error, Result};

use crate::constants::*;
use crate::credential::KeyPair;
use crate::nonce::SequentialNonce;
use crate::verify::VerificationPolicy;

/// Config carries the keying and policy settings for the HMAC scheme.
///
/// Fields are filled from the `with_*` builders, from the environment, or
/// both; nothing is validated until a component is built from the config,
/// and components validate exactly once, at construction.
#[derive(Clone, Default)]
pub struct Config {
    /// `key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQSTAMP_KEY_ID`]
    pub key_id: Option<String>,
    /// `key_value` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQSTAMP_KEY_VALUE`]
    pub key_value: Option<String>,
    /// `subject` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQSTAMP_SUBJECT`]
    pub subject: Option<String>,
    /// Starting value for the sequential nonce counter, as a decimal
    /// string. Defaults to `0` when absent.
    pub nonce_start: Option<String>,
    /// Maximum accepted request age for verification, in seconds.
    pub signature_ttl_seconds: Option<u64>,
}

impl Config {
    /// Create a new Config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set key_id.
    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }

    /// Set key_value.
    pub fn with_key_value(mut self, key_value: impl Into<String>) -> Self {
        self.key_value = Some(key_value.into());
        self
    }

    /// Set subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set nonce_start.
    pub fn with_nonce_start(mut self, nonce_start: impl Into<String>) -> Self {
        self.nonce_start = Some(nonce_start.into());
        self
    }

    /// Set signature_ttl_seconds.
    pub fn with_signature_ttl_seconds(mut self, ttl: u64) -> Self {
        self.signature_ttl_seconds = Some(ttl);
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(REQSTAMP_KEY_ID) {
            self.key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(REQSTAMP_KEY_VALUE) {
            self.key_value.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(REQSTAMP_SUBJECT) {
            self.subject.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(REQSTAMP_NONCE_START) {
            self.nonce_start.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(REQSTAMP_SIGNATURE_TTL).and_then(|v| v.parse().ok()) {
            self.signature_ttl_seconds.get_or_insert(v);
        }

        self
    }

    /// Build the key pair.
    ///
    /// Fails with `ErrorKind::ConfigInvalid` when either half is missing.
    pub fn key_pair(&self) -> Result<KeyPair> {
        match (&self.key_id, &self.key_value) {
            (Some(id), Some(value)) => Ok(KeyPair::new(id.clone(), value.clone())),
            _ => Err(Error::config_invalid(
                "key_id and key_value must both be specified",
            )),
        }
    }

    /// The configured subject.
    ///
    /// Fails with `ErrorKind::ConfigInvalid` when missing or empty.
    pub fn subject(&self) -> Result<&str> {
        self.subject
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::config_invalid("subject must be a non-empty string"))
    }

    /// Build the sequential nonce counter, starting at `nonce_start` or 0.
    pub fn sequential_nonce(&self) -> Result<SequentialNonce> {
        match &self.nonce_start {
            Some(start) => SequentialNonce::from_decimal(start),
            None => Ok(SequentialNonce::new(0)),
        }
    }

    /// Build the verification policy.
    ///
    /// Fails with `ErrorKind::ConfigInvalid` when the subject or TTL is
    /// missing or invalid.
    pub fn verification_policy(&self) -> Result<VerificationPolicy> {
        let ttl = self.signature_ttl_seconds.ok_or_else(|| {
            Error::config_invalid("signature_ttl_seconds must be specified")
        })?;

        VerificationPolicy::new(self.subject()?, Duration::from_secs(ttl))
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("key_id", &self.key_id)
            .field("key_value", &self.key_value.as_ref().map(Redact::from))
            .field("subject", &self.subject)
            .field("nonce_start", &self.nonce_start)
            .field("signature_ttl_seconds", &self.signature_ttl_seconds)
            .finish()
    }
}
