// Headers attached by the signing scheme. Header names are ASCII
// case-insensitive; the lowercase form is what the http crate puts on the
// wire.
/// Header carrying the sender's subject identity, e.g. `casino:1122`.
pub const X_SUBJECT: &str = "x-subject";
/// Header carrying the nonce as a decimal string.
pub const X_NONCE: &str = "x-nonce";
/// Header carrying the signing time as decimal Unix seconds.
pub const X_TIMESTAMP: &str = "x-timestamp";
/// Header carrying the signature, formatted as `<keyId>=<hex digest>`.
pub const X_SIGNATURE: &str = "x-signature";

// Env values used by Config::from_env.
/// Key identifier issued by the API provider.
pub const REQSTAMP_KEY_ID: &str = "REQSTAMP_KEY_ID";
/// Secret key value issued by the API provider.
pub const REQSTAMP_KEY_VALUE: &str = "REQSTAMP_KEY_VALUE";
/// Subject identity asserted by outgoing requests.
pub const REQSTAMP_SUBJECT: &str = "REQSTAMP_SUBJECT";
/// Starting value for the sequential nonce counter.
pub const REQSTAMP_NONCE_START: &str = "REQSTAMP_NONCE_START";
/// Maximum accepted request age, in seconds, for verification.
pub const REQSTAMP_SIGNATURE_TTL: &str = "REQSTAMP_SIGNATURE_TTL";
