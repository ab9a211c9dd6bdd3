//! End-to-end flow: stamp a request with the core signer, then check the
//! emitted headers with a verifier built from the same key pair.

use std::collections::HashMap;

use reqstamp_core::{Context, Nonce, Signer, StaticClock, StaticEnv};
use reqstamp_hmac::constants::*;
use reqstamp_hmac::{Config, HmacSigner, RequestSigner, Verifier};

const NOW: i64 = 1762935805;
const BODY: &[u8] = br#"{"jsonrpc":"2.0","method":"Session.Create","id":1}"#;

fn test_config() -> Config {
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from_iter([
            (REQSTAMP_KEY_ID.to_string(), "secret-key".to_string()),
            (
                REQSTAMP_KEY_VALUE.to_string(),
                "my_test_key_value!@#$%^&*(".to_string(),
            ),
            (REQSTAMP_SUBJECT.to_string(), "casino:1122".to_string()),
            (REQSTAMP_NONCE_START.to_string(), "9223372036854775806".to_string()),
            (REQSTAMP_SIGNATURE_TTL.to_string(), "300".to_string()),
        ]),
    });

    Config::new().from_env(&ctx)
}

async fn signed_request(config: &Config) -> http::request::Parts {
    let scheme = RequestSigner::new(
        HmacSigner::new(config.key_pair().unwrap()).unwrap(),
        config.subject().unwrap(),
    )
    .unwrap();

    let ctx = Context::new().with_clock(StaticClock(NOW));
    let signer = Signer::new(ctx, config.sequential_nonce().unwrap(), scheme);

    let (mut parts, _) = http::Request::post("https://api.example.com/v1")
        .body(())
        .unwrap()
        .into_parts();
    signer.sign(&mut parts, BODY).await.unwrap();

    parts
}

fn header(parts: &http::request::Parts, name: &str) -> String {
    parts
        .headers
        .get(name)
        .expect("header must be present")
        .to_str()
        .unwrap()
        .to_string()
}

fn verifier(config: &Config) -> Verifier {
    Verifier::new(
        HmacSigner::new(config.key_pair().unwrap()).unwrap(),
        config.verification_policy().unwrap(),
    )
}

#[tokio::test]
async fn test_signed_request_verifies() {
    let config = test_config();
    let parts = signed_request(&config).await;

    // The sender's counter crossed the 64-bit boundary intact.
    assert_eq!(header(&parts, X_NONCE), "9223372036854775807");

    let nonce: Nonce = header(&parts, X_NONCE).parse().unwrap();
    let signature = header(&parts, X_SIGNATURE);
    let subject = header(&parts, X_SUBJECT);
    let timestamp: i64 = header(&parts, X_TIMESTAMP).parse().unwrap();

    let receiver_ctx = Context::new().with_clock(StaticClock(NOW + 60));
    assert!(verifier(&config).verify(&receiver_ctx, &nonce, &signature, &subject, timestamp, BODY));
}

#[tokio::test]
async fn test_modified_body_is_rejected() {
    let config = test_config();
    let parts = signed_request(&config).await;

    let nonce: Nonce = header(&parts, X_NONCE).parse().unwrap();
    let signature = header(&parts, X_SIGNATURE);
    let subject = header(&parts, X_SUBJECT);
    let timestamp: i64 = header(&parts, X_TIMESTAMP).parse().unwrap();

    let mut tampered = BODY.to_vec();
    tampered[BODY.len() - 2] ^= 0x01;

    let receiver_ctx = Context::new().with_clock(StaticClock(NOW + 60));
    assert!(!verifier(&config).verify(
        &receiver_ctx,
        &nonce,
        &signature,
        &subject,
        timestamp,
        &tampered,
    ));
}

#[tokio::test]
async fn test_stale_replay_is_rejected() {
    let config = test_config();
    let parts = signed_request(&config).await;

    let nonce: Nonce = header(&parts, X_NONCE).parse().unwrap();
    let signature = header(&parts, X_SIGNATURE);
    let subject = header(&parts, X_SUBJECT);
    let timestamp: i64 = header(&parts, X_TIMESTAMP).parse().unwrap();

    // The same request presented again once the TTL window has passed.
    let receiver_ctx = Context::new().with_clock(StaticClock(NOW + 301));
    assert!(!verifier(&config).verify(&receiver_ctx, &nonce, &signature, &subject, timestamp, BODY));
}
