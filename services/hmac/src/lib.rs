//! Nonce/timestamp HMAC header signing.
//!
//! This crate implements the signing scheme for JSON-RPC platform APIs
//! authenticated with a shared symmetric key: every request carries a
//! strictly increasing nonce, a Unix timestamp, and an HMAC-SHA256
//! signature over `nonce ∥ timestamp ∥ body`, attached as `x-subject`,
//! `x-nonce`, `x-timestamp`, and `x-signature` headers.
//!
//! The sending side wires [`SequentialNonce`] and [`RequestSigner`] into a
//! `reqstamp_core::Signer`; the receiving side checks requests with
//! [`Verifier`] built from the same [`KeyPair`].

mod config;
pub use config::Config;

mod credential;
pub use credential::KeyPair;

mod nonce;
pub use nonce::SequentialNonce;

mod signer;
pub use signer::HmacSigner;

mod sign_request;
pub use sign_request::RequestSigner;

mod verify;
pub use verify::{VerificationPolicy, Verifier};

pub mod constants;
