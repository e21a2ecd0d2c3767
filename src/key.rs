use snafu::OptionExt;

use crate::{
    algorithm::{KeySpec, KeyType},
    ec::EcPublicKey,
    rsa::RsaPublicKey,
};

/// A parsed signing-certificate public key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PublicKey {
    Rsa(RsaPublicKey),
    Ec(EcPublicKey),
    /// Any other key family (Ed25519, DSA, EC on an unknown curve, ...).
    /// `algorithm` is the dotted OID of the key algorithm.
    Other { algorithm: String },
}

impl PublicKey {
    /// Shorthand for [`resolve`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the key is not an approved signing key
    pub fn key_spec(&self) -> crate::Result<KeySpec> {
        resolve(self)
    }
}

impl From<RsaPublicKey> for PublicKey {
    fn from(key: RsaPublicKey) -> Self {
        Self::Rsa(key)
    }
}

impl From<EcPublicKey> for PublicKey {
    fn from(key: EcPublicKey) -> Self {
        Self::Ec(key)
    }
}

/// Classify a public key into an approved [`KeySpec`].
///
/// RSA keys must have a modulus of exactly 2048, 3072 or 4096 bits, EC keys a
/// curve of exactly 256, 384 or 521 bits. Everything else is rejected.
///
/// # Errors
///
/// Fails with [`crate::Error::UnsupportedSigningKey`], and nothing else, when
/// the key size or key type is not allowed
pub fn resolve(key: &PublicKey) -> crate::Result<KeySpec> {
    match key {
        PublicKey::Rsa(rsa) => {
            let bits = rsa.bit_size();
            KeySpec::new(KeyType::Rsa, bits).with_context(|| crate::UnsupportedSigningKeySnafu {
                msg: format!("rsa key size {bits} is not supported"),
            })
        }
        PublicKey::Ec(ec) => {
            let bits = ec.bit_size();
            KeySpec::new(KeyType::Ec, bits).with_context(|| crate::UnsupportedSigningKeySnafu {
                msg: format!("ecdsa key size {bits} is not supported"),
            })
        }
        PublicKey::Other { .. } => crate::UnsupportedSigningKeySnafu {
            msg: "invalid public key type",
        }
        .fail(),
    }
}
