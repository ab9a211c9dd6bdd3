//! Core components for stamping API requests with signed nonce and
//! timestamp headers.
//!
//! This crate provides the foundational types and traits for the reqstamp
//! ecosystem. It defines the abstractions a signing scheme plugs into; the
//! concrete HMAC header scheme lives in `reqstamp-hmac`.
//!
//! ## Overview
//!
//! The crate is built around a few key concepts:
//!
//! - **Context**: a container holding the ambient capabilities (environment
//!   access, wall clock) signing needs from its surroundings
//! - **Traits**: abstract interfaces for producing nonces ([`ProvideNonce`])
//!   and stamping requests ([`SignRequest`])
//! - **Signer**: the orchestrator invoked once per outgoing request,
//!   immediately before transmission
//!
//! ## Example
//!
//! ```no_run
//! use reqstamp_core::{Context, Nonce, ProvideNonce, Result, SignRequest, Signer};
//! use async_trait::async_trait;
//!
//! // A nonce source; the sequential counter in reqstamp-hmac is the
//! // production implementation.
//! #[derive(Debug)]
//! struct OneShotNonce;
//!
//! #[async_trait]
//! impl ProvideNonce for OneShotNonce {
//!     async fn provide_nonce(&self, _: &Context) -> Result<Nonce> {
//!         Ok(Nonce::from(1u64))
//!     }
//! }
//!
//! // A signing scheme; attaches whatever headers the protocol requires.
//! #[derive(Debug)]
//! struct MyScheme;
//!
//! #[async_trait]
//! impl SignRequest for MyScheme {
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         _parts: &mut http::request::Parts,
//!         _nonce: &Nonce,
//!         _timestamp: i64,
//!         _body: &[u8],
//!     ) -> Result<()> {
//!         // Compute and attach headers here
//!         todo!()
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::default();
//! let signer = Signer::new(ctx, OneShotNonce, MyScheme);
//!
//! let body = br#"{"jsonrpc":"2.0","method":"Session.Create"}"#;
//! let mut parts = http::Request::post("https://api.example.com/v1")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts, body).await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Clock, Context, Env, NoopEnv, OsEnv, StaticClock, StaticEnv, SystemClock};

mod error;
pub use error::{Error, ErrorKind, Result};

mod nonce;
pub use nonce::Nonce;

mod api;
pub use api::{ProvideNonce, SignRequest};

mod signer;
pub use signer::Signer;
