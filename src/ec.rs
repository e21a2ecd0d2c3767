use std::fmt;

use snafu::ensure;

/// Named curves an EC public key can be classified on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// secp224r1
    P224,
    /// secp256r1 / prime256v1
    P256,
    /// secp384r1
    P384,
    /// secp521r1
    P521,
}

impl Curve {
    pub const ALL: [Self; 4] = [Self::P224, Self::P256, Self::P384, Self::P521];

    /// Dotted form of the named curve OID.
    #[must_use]
    pub const fn oid(self) -> &'static str {
        match self {
            Self::P224 => "1.3.132.0.33",
            Self::P256 => "1.2.840.10045.3.1.7",
            Self::P384 => "1.3.132.0.34",
            Self::P521 => "1.3.132.0.35",
        }
    }

    /// Finds the curve for a dotted OID, `None` for curves this crate does not know.
    #[must_use]
    pub fn from_oid(oid: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|curve| curve.oid() == oid)
    }

    /// Bit size of the curve order.
    #[must_use]
    pub const fn bit_size(self) -> usize {
        match self {
            Self::P224 => 224,
            Self::P256 => 256,
            Self::P384 => 384,
            Self::P521 => 521,
        }
    }

    /// Length in bytes of one encoded coordinate
    const fn coordinate_len(self) -> usize {
        (self.bit_size() + 7) / 8
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::P224 => "P-224",
            Self::P256 => "P-256",
            Self::P384 => "P-384",
            Self::P521 => "P-521",
        })
    }
}

/// A parsed EC public key: a curve and a SEC1 encoded point on it
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EcPublicKey {
    curve: Curve,
    point: Box<[u8]>,
}

impl EcPublicKey {
    /// Wraps a SEC1 point, either uncompressed (`04 || X || Y`) or compressed
    /// (`02 || X`, `03 || X`).
    ///
    /// # Errors
    ///
    /// This function will return an error if the point encoding does not fit the curve
    pub fn from_sec1(curve: Curve, point: &[u8]) -> crate::Result<Self> {
        let n = curve.coordinate_len();
        let well_formed = match point.first() {
            Some(0x04) => point.len() == 1 + 2 * n,
            Some(0x02 | 0x03) => point.len() == 1 + n,
            _ => false,
        };
        ensure!(
            well_formed,
            crate::MalformedEcPointSnafu {
                curve,
                len: point.len()
            }
        );
        Ok(Self {
            curve,
            point: point.into(),
        })
    }

    #[must_use]
    pub fn curve(&self) -> Curve {
        self.curve
    }

    #[must_use]
    pub fn point(&self) -> &[u8] {
        &self.point
    }

    /// Bit size of the key, which is the bit size of its curve.
    #[must_use]
    pub fn bit_size(&self) -> usize {
        self.curve.bit_size()
    }
}

impl fmt::Debug for EcPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EcPublicKey(curve={}, len={})", self.curve, self.point.len())
    }
}
