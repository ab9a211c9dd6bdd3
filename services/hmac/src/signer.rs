use reqstamp_core::hash::hex_hmac_sha256;
use reqstamp_core::{Error, Nonce, Result};

use crate::credential::KeyPair;

/// Byte width of the nonce in the signature input.
const NONCE_WIDTH: usize = 8;
/// Byte width of the timestamp in the signature input.
const TIMESTAMP_WIDTH: usize = 4;

/// Computes request signatures over the scheme's canonical byte layout.
///
/// ## Layout
///
/// ```text
/// nonce     8 bytes, unsigned big-endian, left-padded with zeros
/// timestamp 4 bytes, unsigned big-endian Unix seconds
/// body      raw payload bytes
/// ```
///
/// The HMAC-SHA256 digest over that buffer, keyed with the secret key
/// value, is rendered as `"<keyId>=<lowercase hex>"`. Any receiver must
/// reconstruct the layout identically, so both signing and verification go
/// through this one type.
///
/// Holds no mutable state after construction; a single instance is safe to
/// share across concurrent callers.
#[derive(Clone, Debug)]
pub struct HmacSigner {
    key: KeyPair,
}

impl HmacSigner {
    /// Create a signer from a key pair.
    ///
    /// Fails with `ErrorKind::ConfigInvalid` if either half of the pair is
    /// empty.
    pub fn new(key: KeyPair) -> Result<Self> {
        if !key.is_valid() {
            return Err(Error::config_invalid(
                "key id and key value must both be non-empty",
            ));
        }

        Ok(Self { key })
    }

    /// Sign `body` under the given nonce and timestamp.
    ///
    /// Identical inputs always produce an identical signature. Values that
    /// do not fit the wire layout (nonce wider than 8 bytes, timestamp
    /// outside the unsigned 32-bit range) fail with
    /// `ErrorKind::EncodingInvalid` rather than being truncated: a
    /// truncated encoding would authenticate a different logical value
    /// than the one transported in the headers.
    pub fn sign(&self, body: &[u8], nonce: &Nonce, timestamp: i64) -> Result<String> {
        let ts = u32::try_from(timestamp).map_err(|_| {
            Error::encoding_invalid(format!(
                "timestamp {timestamp} outside the unsigned 32-bit range"
            ))
        })?;

        let mut input = Vec::with_capacity(NONCE_WIDTH + TIMESTAMP_WIDTH + body.len());
        input.extend_from_slice(&nonce.to_be_bytes(NONCE_WIDTH)?);
        input.extend_from_slice(&ts.to_be_bytes());
        input.extend_from_slice(body);

        Ok(format!(
            "{}={}",
            self.key.key_id(),
            hex_hmac_sha256(self.key.key_value().as_bytes(), &input)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reqstamp_core::ErrorKind;
    use test_case::test_case;

    fn test_signer() -> HmacSigner {
        HmacSigner::new(KeyPair::new("secret-key", "my_test_key_value!@#$%^&*(")).unwrap()
    }

    #[test]
    fn test_reference_signature() {
        // Reference fixture shared with the receiving side.
        let signer = test_signer();
        let nonce: Nonce = "1580145857615089920".parse().unwrap();

        let signature = signer.sign(b"test payload", &nonce, 1762935805).unwrap();
        assert_eq!(
            signature,
            "secret-key=9de6aa92b03efd6a96dd3d0c68e56c33a674d339462066467658ba9e68f38934"
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let signer = test_signer();
        let nonce = Nonce::from(7u64);

        let first = signer.sign(b"payload", &nonce, 1_700_000_000).unwrap();
        let second = signer.sign(b"payload", &nonce, 1_700_000_000).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_inputs_change_signature() {
        let signer = test_signer();
        let nonce = Nonce::from(7u64);
        let base = signer.sign(b"payload", &nonce, 1_700_000_000).unwrap();

        let other_body = signer.sign(b"payloae", &nonce, 1_700_000_000).unwrap();
        let other_nonce = signer
            .sign(b"payload", &Nonce::from(8u64), 1_700_000_000)
            .unwrap();
        let other_time = signer.sign(b"payload", &nonce, 1_700_000_001).unwrap();

        assert_ne!(base, other_body);
        assert_ne!(base, other_nonce);
        assert_ne!(base, other_time);
    }

    #[test_case(-1; "before the epoch")]
    #[test_case(u32::MAX as i64 + 1; "past the 32-bit ceiling")]
    fn test_timestamp_outside_wire_range(timestamp: i64) {
        let signer = test_signer();
        let err = signer
            .sign(b"payload", &Nonce::from(1u64), timestamp)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EncodingInvalid);
    }

    #[test]
    fn test_nonce_wider_than_layout() {
        let signer = test_signer();
        let nonce: Nonce = "18446744073709551616".parse().unwrap(); // 2^64

        let err = signer.sign(b"payload", &nonce, 1_700_000_000).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EncodingInvalid);
    }

    #[test]
    fn test_new_rejects_incomplete_key_pair() {
        let err = HmacSigner::new(KeyPair::new("", "value")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);

        let err = HmacSigner::new(KeyPair::new("id", "")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
