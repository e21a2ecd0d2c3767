//! Classify the public key of an X.509 signing certificate and enforce a fixed
//! signing-key policy.
//!
//! A key is accepted only if it is one of:
//!
//! | key                       | signs with |
//! |---------------------------|------------|
//! | RSA, 2048 bit modulus     | `PS256`    |
//! | RSA, 3072 bit modulus     | `PS384`    |
//! | RSA, 4096 bit modulus     | `PS512`    |
//! | EC on P-256               | `ES256`    |
//! | EC on P-384               | `ES384`    |
//! | EC on P-521               | `ES512`    |
//!
//! Sizes are matched exactly: RSA-1024 is rejected, and so is RSA-8192.
//! Every other key type (Ed25519, DSA, EC on other curves) is rejected too.
//!
//! To classify:
//!
//! 1. Get a [`PublicKey`], either from a certificate with
//!    `SigningCert::<format>(..source..).read()`, from a bare public key with
//!    `SubjectPublicKey::<format>(..source..).read()`, or by building one yourself
//! 2. Use [`resolve`] to get the [`KeySpec`], or a rejection
//!
//! [`extract_key_spec`] does both for a certificate.
//!
//! ```ignore
#![doc = include_str!("../demos/inspect.rs")]
//! ```
//!
/// Key types and signature algorithms
pub mod algorithm;

/// Certificate and public key decoding
pub mod cert;

/// EC public keys
pub mod ec;

/// Public keys and their classification
pub mod key;

/// RSA public keys
pub mod rsa;

pub use algorithm::{Algorithm, HashAlgorithm, KeySpec, KeyType};
pub use cert::{extract_key_spec, SigningCert, SubjectPublicKey};
pub use key::{resolve, PublicKey};

use snafu::prelude::*;
use x509_parser::{error::X509Error, nom};

#[derive(Debug, Snafu)]
pub enum Error {
    /// The key is not an approved signing key. Only the message tells the
    /// reasons apart, and it is meant for display.
    #[snafu(display("{}", msg))]
    UnsupportedSigningKey { msg: String },
    #[snafu(display("Unable to parse PEM: {}", source))]
    InvalidPem { source: pem::PemError },
    #[snafu(display("Expected PEM tag {}, found {}", expected, found))]
    UnexpectedPemTag {
        expected: &'static str,
        found: String,
    },
    #[snafu(display("Cannot decode base64: {}", source))]
    DecodeFailed { source: base64::DecodeError },
    #[snafu(display("Cannot parse certificate: {}", source))]
    InvalidCertificate { source: nom::Err<X509Error> },
    #[snafu(display("Cannot parse subject public key info: {}", source))]
    InvalidSubjectPublicKey { source: nom::Err<X509Error> },
    #[snafu(display("Cannot parse public key: {}", source))]
    InvalidPublicKey { source: X509Error },
    #[snafu(display("Unexpected {} bytes after the DER structure", len))]
    TrailingData { len: usize },
    #[snafu(display("EC point of {} bytes is not a valid {} point", len, curve))]
    MalformedEcPoint { curve: ec::Curve, len: usize },
    #[snafu(display("Unknown signature algorithm {}", name))]
    UnknownAlgorithm { name: String },
}
pub type Result<T, E = Error> = std::result::Result<T, E>;
