use std::{fmt, str::FromStr};

use snafu::OptionExt;

/// Signature algorithms a signing key may be used with.
///
/// Discriminants are stable and may be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Algorithm {
    /// RSASSA-PSS with SHA-256
    PS256 = 1,
    /// RSASSA-PSS with SHA-384
    PS384 = 2,
    /// RSASSA-PSS with SHA-512
    PS512 = 3,
    /// ECDSA on secp256r1 with SHA-256
    ES256 = 4,
    /// ECDSA on secp384r1 with SHA-384
    ES384 = 5,
    /// ECDSA on secp521r1 with SHA-512
    ES512 = 6,
}

impl Algorithm {
    pub const ALL: [Self; 6] = [
        Self::PS256,
        Self::PS384,
        Self::PS512,
        Self::ES256,
        Self::ES384,
        Self::ES512,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PS256 => "PS256",
            Self::PS384 => "PS384",
            Self::PS512 => "PS512",
            Self::ES256 => "ES256",
            Self::ES384 => "ES384",
            Self::ES512 => "ES512",
        }
    }

    /// Digest the algorithm signs over.
    #[must_use]
    pub const fn hash(self) -> HashAlgorithm {
        match self {
            Self::PS256 | Self::ES256 => HashAlgorithm::Sha256,
            Self::PS384 | Self::ES384 => HashAlgorithm::Sha384,
            Self::PS512 | Self::ES512 => HashAlgorithm::Sha512,
        }
    }

    #[must_use]
    pub const fn key_type(self) -> KeyType {
        match self {
            Self::PS256 | Self::PS384 | Self::PS512 => KeyType::Rsa,
            Self::ES256 | Self::ES384 | Self::ES512 => KeyType::Ec,
        }
    }

    /// The key spec whose keys sign with this algorithm.
    #[must_use]
    pub const fn key_spec(self) -> KeySpec {
        KeySpec { algorithm: self }
    }

    const fn key_size(self) -> usize {
        match self {
            Self::PS256 => 2048,
            Self::PS384 => 3072,
            Self::PS512 => 4096,
            Self::ES256 => 256,
            Self::ES384 => 384,
            Self::ES512 => 521,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == s)
            .context(crate::UnknownAlgorithmSnafu { name: s })
    }
}

/// Hash functions paired with the signature algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Digest length in bytes
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }
}

/// Public key family. Discriminants are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum KeyType {
    Rsa = 1,
    Ec = 2,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rsa => "RSA",
            Self::Ec => "EC",
        })
    }
}

/// Key family and size of an accepted signing key.
///
/// Only the approved combinations can be represented:
///
/// | type | sizes              |
/// |------|--------------------|
/// | RSA  | 2048, 3072, 4096   |
/// | EC   | 256, 384, 521      |
///
/// Each of them signs with exactly one [`Algorithm`], which is what a `KeySpec`
/// holds internally.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    algorithm: Algorithm,
}

impl KeySpec {
    /// Looks up an approved key spec. Sizes are matched exactly, anything off
    /// the allow-list yields `None`.
    #[must_use]
    pub fn new(key_type: KeyType, size: usize) -> Option<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.key_type() == key_type && alg.key_size() == size)
            .map(Algorithm::key_spec)
    }

    #[must_use]
    pub const fn key_type(self) -> KeyType {
        self.algorithm.key_type()
    }

    /// Key size in bits: modulus length for RSA, curve size for EC.
    #[must_use]
    pub const fn size(self) -> usize {
        self.algorithm.key_size()
    }

    /// The signature algorithm keys of this spec sign with.
    #[must_use]
    pub const fn signature_algorithm(self) -> Algorithm {
        self.algorithm
    }
}

impl fmt::Debug for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySpec")
            .field("key_type", &self.key_type())
            .field("size", &self.size())
            .finish()
    }
}

impl fmt::Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.key_type(), self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_stable() {
        let ordinals = Algorithm::ALL.map(|alg| alg as u8);
        assert_eq!(ordinals, [1, 2, 3, 4, 5, 6]);
        assert_eq!(KeyType::Rsa as u8, 1);
        assert_eq!(KeyType::Ec as u8, 2);
    }

    #[test]
    fn test_approved_specs() {
        let cases = [
            (KeyType::Rsa, 2048, Algorithm::PS256),
            (KeyType::Rsa, 3072, Algorithm::PS384),
            (KeyType::Rsa, 4096, Algorithm::PS512),
            (KeyType::Ec, 256, Algorithm::ES256),
            (KeyType::Ec, 384, Algorithm::ES384),
            (KeyType::Ec, 521, Algorithm::ES512),
        ];
        for (key_type, size, alg) in cases {
            let spec = KeySpec::new(key_type, size).expect("should be approved");
            assert_eq!(spec.key_type(), key_type);
            assert_eq!(spec.size(), size);
            assert_eq!(spec.signature_algorithm(), alg);
            assert_eq!(alg.key_spec(), spec);
        }
    }

    #[test]
    fn test_unapproved_specs() {
        for size in [0, 1024, 1536, 2047, 2049, 8192, 256, 521] {
            assert_eq!(KeySpec::new(KeyType::Rsa, size), None, "rsa {size}");
        }
        for size in [0, 192, 224, 255, 512, 2048] {
            assert_eq!(KeySpec::new(KeyType::Ec, size), None, "ec {size}");
        }
    }

    #[test]
    fn test_hash() {
        assert_eq!(Algorithm::PS256.hash(), HashAlgorithm::Sha256);
        assert_eq!(Algorithm::ES384.hash(), HashAlgorithm::Sha384);
        assert_eq!(Algorithm::ES512.hash(), HashAlgorithm::Sha512);
        assert_eq!(Algorithm::PS512.hash().size(), 64);
    }

    #[test]
    fn test_names() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.to_string().parse::<Algorithm>().unwrap(), alg);
        }
        let err = "RS256".parse::<Algorithm>().expect_err("should fail");
        assert_eq!(err.to_string(), "Unknown signature algorithm RS256");
    }

    #[test]
    fn test_display() {
        let spec = KeySpec::new(KeyType::Ec, 521).unwrap();
        assert_eq!(spec.to_string(), "EC-521");
        assert_eq!(
            format!("{spec:?}"),
            "KeySpec { key_type: Ec, size: 521 }"
        );
    }
}
