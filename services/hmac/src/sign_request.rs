use http::header::CONTENT_TYPE;
use http::HeaderValue;
use log::debug;
use reqstamp_core::{Context, Error, Nonce, Result, SignRequest};

use crate::constants::{X_NONCE, X_SIGNATURE, X_SUBJECT, X_TIMESTAMP};
use crate::signer::HmacSigner;

/// RequestSigner stamps outgoing requests with the scheme's headers.
///
/// Per request it attaches:
///
/// | header | value |
/// |---|---|
/// | `content-type` | `application/json` |
/// | `x-subject` | configured subject |
/// | `x-nonce` | nonce, decimal |
/// | `x-timestamp` | Unix seconds, decimal |
/// | `x-signature` | `<keyId>=<hex HMAC-SHA256>` |
///
/// Only these keys are touched; headers set by other concerns stay as the
/// transport left them.
#[derive(Debug)]
pub struct RequestSigner {
    signer: HmacSigner,
    subject: String,
}

impl RequestSigner {
    /// Create a request signer asserting the given subject.
    ///
    /// Fails with `ErrorKind::ConfigInvalid` if the subject is empty.
    pub fn new(signer: HmacSigner, subject: impl Into<String>) -> Result<Self> {
        let subject = subject.into();
        if subject.is_empty() {
            return Err(Error::config_invalid("subject must be a non-empty string"));
        }

        Ok(Self { signer, subject })
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        nonce: &Nonce,
        timestamp: i64,
        body: &[u8],
    ) -> Result<()> {
        let signature = self.signer.sign(body, nonce, timestamp)?;
        debug!(
            "stamping request: subject={}, nonce={nonce}, timestamp={timestamp}",
            self.subject
        );

        parts
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        parts.headers.insert(X_SUBJECT, self.subject.parse()?);
        parts.headers.insert(X_NONCE, nonce.to_string().parse()?);
        parts
            .headers
            .insert(X_TIMESTAMP, timestamp.to_string().parse()?);
        parts.headers.insert(X_SIGNATURE, {
            let mut value: HeaderValue = signature.parse()?;
            value.set_sensitive(true);

            value
        });

        Ok(())
    }
}
