//! Example of signing an outgoing request and verifying it on the
//! receiving side with the same key pair.

use reqstamp_core::{Context, Nonce, OsEnv, Result, Signer};
use reqstamp_hmac::constants::{X_NONCE, X_SIGNATURE, X_SUBJECT, X_TIMESTAMP};
use reqstamp_hmac::{Config, HmacSigner, RequestSigner, Verifier};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Pick up REQSTAMP_* variables from the process environment, with a
    // demo fallback so the example runs standalone.
    let ctx = Context::new().with_env(OsEnv);
    let mut config = Config::new().from_env(&ctx);
    if config.key_id.is_none() {
        println!("No REQSTAMP_* configuration found, using demo values");
        config = config
            .with_key_id("demo-key")
            .with_key_value("demo-key-secret-value")
            .with_subject("casino:1122")
            .with_nonce_start("100")
            .with_signature_ttl_seconds(300);
    }

    // Outbound: stamp the request immediately before transmission.
    let scheme = RequestSigner::new(HmacSigner::new(config.key_pair()?)?, config.subject()?)?;
    let signer = Signer::new(ctx.clone(), config.sequential_nonce()?, scheme);

    let body = br#"{"jsonrpc":"2.0","method":"Game.List","params":{},"id":1}"#;
    let (mut parts, _) = http::Request::post("https://api.example.com/v1")
        .body(())
        .unwrap()
        .into_parts();
    signer.sign(&mut parts, body).await?;

    println!("Signed request headers:");
    for name in [X_SUBJECT, X_NONCE, X_TIMESTAMP, X_SIGNATURE] {
        println!("  {name}: {:?}", parts.headers.get(name).unwrap());
    }

    // Inbound: a receiver holding the same key pair checks the headers.
    let verifier = Verifier::new(
        HmacSigner::new(config.key_pair()?)?,
        config.verification_policy()?,
    );

    let nonce: Nonce = parts.headers[X_NONCE].to_str().unwrap().parse()?;
    let accepted = verifier.verify(
        &ctx,
        &nonce,
        parts.headers[X_SIGNATURE].to_str().unwrap(),
        parts.headers[X_SUBJECT].to_str().unwrap(),
        parts.headers[X_TIMESTAMP].to_str().unwrap().parse().unwrap(),
        body,
    );
    println!("Receiver accepted the request: {accepted}");

    Ok(())
}
