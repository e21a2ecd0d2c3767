use std::fmt;

/// A parsed RSA public key
///
/// Modulus and exponent are kept as big-endian magnitudes without leading zero
/// bytes, so the DER `INTEGER` sign padding does not count towards the size.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RsaPublicKey {
    modulus: Box<[u8]>,
    exponent: Box<[u8]>,
}

impl RsaPublicKey {
    /// Builds a key from big-endian modulus and public exponent bytes.
    #[must_use]
    pub fn new(modulus: &[u8], exponent: &[u8]) -> Self {
        Self {
            modulus: strip_leading_zeros(modulus).into(),
            exponent: strip_leading_zeros(exponent).into(),
        }
    }

    #[must_use]
    pub fn modulus(&self) -> &[u8] {
        &self.modulus
    }

    #[must_use]
    pub fn exponent(&self) -> &[u8] {
        &self.exponent
    }

    /// Exact bit length of the modulus.
    #[must_use]
    pub fn bit_size(&self) -> usize {
        match self.modulus.first() {
            Some(top) => (self.modulus.len() - 1) * 8 + (8 - top.leading_zeros() as usize),
            None => 0,
        }
    }
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

impl fmt::Debug for RsaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RsaPublicKey(bits={})", self.bit_size())
    }
}
