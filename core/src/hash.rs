//! Hash related utils.

use hmac::Hmac;
use hmac::Mac;
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// Hex encoded HMAC with SHA256 hash.
///
/// The digest is rendered as lowercase hex without copying the
/// intermediate tag.
pub fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    hex::encode(h.finalize().into_bytes())
}

/// Fixed-time equality over two byte strings.
///
/// Runtime depends only on the input lengths, never on the position of the
/// first mismatching byte. Inputs of different lengths compare unequal.
pub fn constant_time_eq(lhs: &[u8], rhs: &[u8]) -> bool {
    lhs.ct_eq(rhs).into()
}
