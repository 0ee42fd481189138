//! Compressed public-key parsing and the table-building entry points.
//!
//! A compressed key is a parity byte (0x02 even, 0x03 odd) followed by the
//! x-coordinate, 33 bytes in all. The packed word form stores those bytes
//! as little-endian u32s, so the word layout is byte-reversed relative to
//! the big-endian field-element order; unpacking is a pure byte shuffle.

use core::cmp::Ordering;
use serde::{Deserialize, Serialize};

use crate::affine::Affine;
use crate::constants::{COMPRESSED_KEY_WORDS, P};
use crate::field::FieldElement;
use crate::table::PrecomputedTable;
use crate::uint::{self, Uint256};

/// Errors from public-key recovery.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The leading byte was not the 0x02/0x03 compressed-point tag.
    InvalidParity,
    /// The x-coordinate is out of range or has no matching y on the curve
    /// (x^3 + 7 is not a quadratic residue).
    InvalidXCoordinate,
}

/// Parity byte plus x-coordinate, the 33-byte compressed form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedPublicKey {
    parity: u8,
    x: Uint256,
}

impl CompressedPublicKey {
    pub fn new(parity: u8, x: Uint256) -> Self {
        CompressedPublicKey { parity, x }
    }

    /// Compress a point. Returns None for the point at infinity, which has
    /// no compressed encoding.
    pub fn encode(point: &Affine) -> Option<Self> {
        if point.is_infinity() {
            return None;
        }
        let parity = if point.y.is_odd() { 0x03 } else { 0x02 };
        Some(CompressedPublicKey {
            parity,
            x: point.x.to_words(),
        })
    }

    pub fn from_bytes(bytes: &[u8; 33]) -> Self {
        let mut x = [0u32; 8];
        for (i, word) in x.iter_mut().enumerate() {
            // x is big-endian starting at byte 1.
            let o = 1 + (7 - i) * 4;
            *word = u32::from_be_bytes([bytes[o], bytes[o + 1], bytes[o + 2], bytes[o + 3]]);
        }
        CompressedPublicKey {
            parity: bytes[0],
            x,
        }
    }

    pub fn to_bytes(&self) -> [u8; 33] {
        let mut bytes = [0u8; 33];
        bytes[0] = self.parity;
        for (i, word) in self.x.iter().enumerate() {
            let o = 1 + (7 - i) * 4;
            bytes[o..o + 4].copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    /// Unpack the 9-word form: the 33 bytes packed as little-endian u32s.
    pub fn from_words(words: &[u32; COMPRESSED_KEY_WORDS]) -> Self {
        let mut bytes = [0u8; 33];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = (words[i >> 2] >> ((i & 3) * 8)) as u8;
        }
        Self::from_bytes(&bytes)
    }

    /// Pack into the 9-word form.
    pub fn to_words(&self) -> [u32; COMPRESSED_KEY_WORDS] {
        let bytes = self.to_bytes();
        let mut words = [0u32; COMPRESSED_KEY_WORDS];
        for (i, &byte) in bytes.iter().enumerate() {
            words[i >> 2] |= (byte as u32) << ((i & 3) * 8);
        }
        words
    }

    #[inline]
    pub fn parity(&self) -> u8 {
        self.parity
    }

    #[inline]
    pub fn x_words(&self) -> Uint256 {
        self.x
    }

    /// Recover the full point: y = sqrt(x^3 + 7) with the matching parity.
    pub fn decode(&self) -> Result<Affine, DecodeError> {
        recover_point(&self.x, self.parity)
    }
}

/// Build a precomputed table from a raw x-coordinate and parity byte.
pub fn transform_public(x: &Uint256, parity: u8) -> Result<PrecomputedTable, DecodeError> {
    let point = recover_point(x, parity)?;
    Ok(PrecomputedTable::build(&point))
}

/// Build a precomputed table from a compressed key in the packed 9-word
/// byte-reversed layout.
pub fn parse_public(key: &[u32; COMPRESSED_KEY_WORDS]) -> Result<PrecomputedTable, DecodeError> {
    let compressed = CompressedPublicKey::from_words(key);
    transform_public(&compressed.x_words(), compressed.parity())
}

fn recover_point(x: &Uint256, parity: u8) -> Result<Affine, DecodeError> {
    if parity != 0x02 && parity != 0x03 {
        return Err(DecodeError::InvalidParity);
    }
    // Reject non-canonical encodings rather than silently reducing.
    if uint::cmp(x, &P) != Ordering::Less {
        return Err(DecodeError::InvalidXCoordinate);
    }

    let x = FieldElement::from_words(*x);
    let rhs = x.square() * x + FieldElement::from_u32(crate::constants::B);
    let mut y = rhs.sqrt().ok_or(DecodeError::InvalidXCoordinate)?;

    let want_odd = parity == 0x03;
    if y.is_odd() != want_odd {
        y = -y;
    }

    let point = Affine::new(x, y);
    if !point.is_on_curve() {
        return Err(DecodeError::InvalidXCoordinate);
    }
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{G_COMPRESSED, G_PARITY, G_X, G_Y};
    use crate::group::Group;

    #[test]
    fn test_transform_g() {
        let table = transform_public(&G_X, G_PARITY).expect("G must decode");
        assert_eq!(table, PrecomputedTable::build(&Affine::generator()));
    }

    #[test]
    fn test_parse_g_compressed() {
        let table = parse_public(&G_COMPRESSED).expect("G must parse");
        assert_eq!(table, PrecomputedTable::build(&Affine::generator()));
    }

    #[test]
    fn test_parse_rejects_bad_parity() {
        let mut key = G_COMPRESSED;
        key[0] = (key[0] & !0xff) | 0x04;
        assert_eq!(parse_public(&key), Err(DecodeError::InvalidParity));
    }

    #[test]
    fn test_transform_rejects_non_canonical_x() {
        assert_eq!(
            transform_public(&P, 0x02),
            Err(DecodeError::InvalidXCoordinate)
        );
    }

    #[test]
    fn test_parity_selects_root() {
        let even = recover_point(&G_X, 0x02).unwrap();
        let odd = recover_point(&G_X, 0x03).unwrap();
        assert!(!even.y.is_odd());
        assert!(odd.y.is_odd());
        assert_eq!(odd, even.negate());
        assert_eq!(even.y.to_words(), G_Y);
    }

    #[test]
    fn test_small_x_scan_has_both_outcomes() {
        // Roughly half of all x-coordinates have no matching y; over a
        // small scan both outcomes must show up, and every success must
        // land on the curve with the requested parity.
        let mut ok = 0;
        let mut bad = 0;
        for k in 1u32..=40 {
            let x = [k, 0, 0, 0, 0, 0, 0, 0];
            match recover_point(&x, 0x02) {
                Ok(point) => {
                    ok += 1;
                    assert!(point.is_on_curve());
                    assert!(!point.y.is_odd());
                }
                Err(e) => {
                    bad += 1;
                    assert_eq!(e, DecodeError::InvalidXCoordinate);
                }
            }
        }
        assert!(ok > 0, "no x in the scan decoded");
        assert!(bad > 0, "no x in the scan failed");
    }

    #[test]
    fn test_bytes_round_trip() {
        let key = CompressedPublicKey::new(G_PARITY, G_X);
        assert_eq!(CompressedPublicKey::from_bytes(&key.to_bytes()), key);
        assert_eq!(CompressedPublicKey::from_words(&key.to_words()), key);
        assert_eq!(key.to_words(), G_COMPRESSED);
        assert_eq!(key.to_bytes()[0], 0x02);
        // Last packed word only carries the final byte.
        assert_eq!(key.to_words()[8], 0x00000098);
    }

    #[test]
    fn test_encode_points() {
        assert_eq!(CompressedPublicKey::encode(&Affine::INFINITY), None);

        let g = Affine::generator();
        let encoded = CompressedPublicKey::encode(&g).unwrap();
        assert_eq!(encoded, CompressedPublicKey::new(G_PARITY, G_X));
        assert_eq!(encoded.decode().unwrap(), g);

        // A few multiples round-trip through encode/decode.
        for k in [2u64, 3, 255, 1000003] {
            let p = g.mul_u64(k);
            let c = CompressedPublicKey::encode(&p).unwrap();
            assert_eq!(c.decode().unwrap(), p, "k = {}", k);
        }
    }
}
