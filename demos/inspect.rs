use std::{env, fs};

use keyspec::{extract_key_spec, SigningCert};

fn main() -> anyhow::Result<()> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "fixtures/ec-p256.crt.pem".to_string());
    let cert = SigningCert::PEM(fs::read_to_string(&path)?);
    let spec = extract_key_spec(&cert)?;
    let alg = spec.signature_algorithm();
    println!(
        "{path}: {} {}-bit key, signs with {alg} ({:?})",
        spec.key_type(),
        spec.size(),
        alg.hash()
    );
    Ok(())
}
