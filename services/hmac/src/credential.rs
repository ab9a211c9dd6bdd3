use std::fmt::{Debug, Formatter};

use reqstamp_core::utils::Redact;

/// A symmetric key pair shared with the API provider.
///
/// The key id travels in the clear as the signature prefix; the key value
/// is the HMAC secret and never leaves the process. Both are fixed at
/// construction and never derived or mutated afterwards.
#[derive(Clone)]
pub struct KeyPair {
    key_id: String,
    key_value: String,
}

impl KeyPair {
    /// Create a new key pair.
    pub fn new(key_id: impl Into<String>, key_value: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_value: key_value.into(),
        }
    }

    /// The public key identifier.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// The secret key value.
    pub fn key_value(&self) -> &str {
        &self.key_value
    }

    /// Check that both halves of the pair are present.
    pub fn is_valid(&self) -> bool {
        !self.key_id.is_empty() && !self.key_value.is_empty()
    }
}

impl Debug for KeyPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("key_id", &self.key_id)
            .field("key_value", &Redact::from(&self.key_value))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_key_value() {
        let key = KeyPair::new("secret-key", "my_test_key_value!@#$%^&*(");
        let out = format!("{key:?}");

        assert!(out.contains("secret-key"));
        assert!(!out.contains("my_test_key_value"));
    }

    #[test]
    fn test_is_valid() {
        assert!(KeyPair::new("id", "value").is_valid());
        assert!(!KeyPair::new("", "value").is_valid());
        assert!(!KeyPair::new("id", "").is_valid());
    }
}
