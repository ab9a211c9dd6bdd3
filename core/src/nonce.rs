use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use crate::{Error, Result};

/// A replay-protection counter value carried with every signed request.
///
/// Nonces are arbitrary-precision non-negative integers: generators may
/// grow them past the native word size without truncation or wraparound.
/// On the wire a nonce travels as a decimal string (`Display`/`FromStr`);
/// for signature input it is rendered as fixed-width big-endian bytes via
/// [`Nonce::to_be_bytes`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Nonce(BigUint);

impl Nonce {
    /// Encode as unsigned big-endian bytes, left-padded with zeros to
    /// exactly `width` bytes.
    ///
    /// A value whose natural encoding is wider than `width` is rejected
    /// with `ErrorKind::EncodingInvalid`. Truncating instead would produce
    /// a signature over a different logical nonce than the one transported.
    pub fn to_be_bytes(&self, width: usize) -> Result<Vec<u8>> {
        let bytes = self.0.to_bytes_be();
        if bytes.len() > width {
            return Err(Error::encoding_invalid(format!(
                "nonce requires {} bytes, wire layout allows {width}",
                bytes.len()
            )));
        }

        let mut buf = vec![0u8; width - bytes.len()];
        buf.extend_from_slice(&bytes);
        Ok(buf)
    }
}

impl From<u64> for Nonce {
    fn from(value: u64) -> Self {
        Nonce(BigUint::from(value))
    }
}

impl From<BigUint> for Nonce {
    fn from(value: BigUint) -> Self {
        Nonce(value)
    }
}

impl FromStr for Nonce {
    type Err = Error;

    /// Parse a decimal string. Non-numeric or negative input fails with
    /// `ErrorKind::ConfigInvalid`.
    fn from_str(s: &str) -> Result<Self> {
        Ok(Nonce(s.parse::<BigUint>()?))
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
