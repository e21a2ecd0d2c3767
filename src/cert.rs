use base64::{prelude::BASE64_STANDARD, Engine};
use snafu::{ensure, ResultExt};
use tracing::{debug, warn};
use x509_parser::{
    oid_registry::{OID_KEY_TYPE_EC_PUBLIC_KEY, OID_PKCS1_RSAENCRYPTION},
    parse_x509_certificate,
    prelude::FromDer,
    public_key::PublicKey as X509PublicKey,
    x509::SubjectPublicKeyInfo,
};

use crate::{
    algorithm::KeySpec,
    ec::{Curve, EcPublicKey},
    key::{resolve, PublicKey},
    rsa::RsaPublicKey,
};

/// A signing certificate source
pub enum SigningCert {
    /// `openssl req -x509 -newkey ec -pkeyopt ec_paramgen_curve:prime256v1 -out cert.pem`
    /// * only the first certificate of a chain is read, which should be the leaf
    PEM(String),
    /// `openssl x509 -in cert.pem -outform DER -out cert.der`
    DER(Vec<u8>),
    /// standard (not url-safe) base64 of the DER, as found in a JWS `x5c` header
    Base64(String),
}

impl SigningCert {
    /// Reads the certificate's subject public key.
    ///
    /// # Errors
    ///
    /// This function will return an error if the certificate cannot be decoded
    pub fn read(&self) -> crate::Result<PublicKey> {
        let der = match self {
            Self::PEM(s) => pem_contents(s, "CERTIFICATE")?,
            Self::DER(b) => b.clone(),
            Self::Base64(s) => BASE64_STANDARD
                .decode(s.trim())
                .context(crate::DecodeFailedSnafu)?,
        };
        let (rest, cert) = parse_x509_certificate(&der).context(crate::InvalidCertificateSnafu)?;
        ensure!(rest.is_empty(), crate::TrailingDataSnafu { len: rest.len() });
        public_key(cert.public_key())
    }
}

/// A bare `SubjectPublicKeyInfo` source
pub enum SubjectPublicKey {
    /// `openssl x509 -in cert.pem -pubkey -noout`
    PEM(String),
    /// `openssl pkey -pubin -in public.pem -outform DER`
    DER(Vec<u8>),
}

impl SubjectPublicKey {
    /// Reads a [`SubjectPublicKey`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the key cannot be decoded
    pub fn read(&self) -> crate::Result<PublicKey> {
        let der = match self {
            Self::PEM(s) => pem_contents(s, "PUBLIC KEY")?,
            Self::DER(b) => b.clone(),
        };
        let (rest, spki) =
            SubjectPublicKeyInfo::from_der(&der).context(crate::InvalidSubjectPublicKeySnafu)?;
        ensure!(rest.is_empty(), crate::TrailingDataSnafu { len: rest.len() });
        public_key(&spki)
    }
}

fn pem_contents(s: &str, expected: &'static str) -> crate::Result<Vec<u8>> {
    let p = pem::parse(s).context(crate::InvalidPemSnafu)?;
    ensure!(
        p.tag == expected,
        crate::UnexpectedPemTagSnafu {
            expected,
            found: p.tag
        }
    );
    Ok(p.contents)
}

fn public_key(spki: &SubjectPublicKeyInfo<'_>) -> crate::Result<PublicKey> {
    let oid = &spki.algorithm.algorithm;
    if *oid != OID_PKCS1_RSAENCRYPTION && *oid != OID_KEY_TYPE_EC_PUBLIC_KEY {
        return Ok(PublicKey::Other {
            algorithm: oid.to_id_string(),
        });
    }
    let key = match spki.parsed().context(crate::InvalidPublicKeySnafu)? {
        X509PublicKey::RSA(rsa) => RsaPublicKey::new(rsa.modulus, rsa.exponent).into(),
        X509PublicKey::EC(point) => {
            // named curves only, explicit parameters are not accepted
            let curve = spki
                .algorithm
                .parameters
                .as_ref()
                .and_then(|params| params.as_oid().ok())
                .and_then(|curve| Curve::from_oid(&curve.to_id_string()));
            match curve {
                Some(curve) => EcPublicKey::from_sec1(curve, point.data())?.into(),
                None => PublicKey::Other {
                    algorithm: oid.to_id_string(),
                },
            }
        }
        _ => PublicKey::Other {
            algorithm: oid.to_id_string(),
        },
    };
    Ok(key)
}

/// Extract the [`KeySpec`] of a signing certificate's public key.
///
/// # Errors
///
/// This function will return an error if the certificate cannot be read, or
/// [`crate::Error::UnsupportedSigningKey`] if its key is not an approved signing key
pub fn extract_key_spec(cert: &SigningCert) -> crate::Result<KeySpec> {
    let key = cert.read()?;
    match resolve(&key) {
        Ok(spec) => {
            debug!(
                key_type = %spec.key_type(),
                size = spec.size(),
                algorithm = %spec.signature_algorithm(),
                "resolved signing key"
            );
            Ok(spec)
        }
        Err(err) => {
            warn!(?key, "rejected signing key: {err}");
            Err(err)
        }
    }
}
