//! Base field of the curve: arithmetic mod P = 2^256 - 2^32 - 977.
//!
//! Elements are canonical 8-limb values in `[0, P)`. Multiplication takes
//! the full 512-bit schoolbook product and folds the high half back in
//! using 2^256 ≡ 2^32 + 977 (mod P). Inversion and square roots go through
//! fixed-exponent powers (P ≡ 3 mod 4, so sqrt is a single exponentiation).

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::P;
use crate::uint::{self, Uint256};

/// Prime field element, invariant `0 <= value < P`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldElement {
    limbs: Uint256,
}

// P - 2, the Fermat inversion exponent.
const INV_EXP: Uint256 = [
    0xfffffc2d, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
];

// (P + 1) / 4, the square-root exponent (valid since P ≡ 3 mod 4).
const SQRT_EXP: Uint256 = [
    0xbfffff0c, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x3fffffff,
];

impl FieldElement {
    pub const ZERO: Self = FieldElement { limbs: [0; 8] };
    pub const ONE: Self = FieldElement {
        limbs: [1, 0, 0, 0, 0, 0, 0, 0],
    };

    /// Build an element from little-endian limbs, reducing once if the
    /// value is not below P. This is the only constructor; everything else
    /// stays canonical by construction.
    pub fn from_words(words: Uint256) -> Self {
        let limbs = if uint::cmp(&words, &P) != Ordering::Less {
            uint::sub(&words, &P).0
        } else {
            words
        };
        FieldElement { limbs }
    }

    pub fn from_u32(val: u32) -> Self {
        FieldElement {
            limbs: [val, 0, 0, 0, 0, 0, 0, 0],
        }
    }

    #[inline]
    pub fn to_words(self) -> Uint256 {
        self.limbs
    }

    /// Parse a big-endian 32-byte value.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let mut words = [0u32; 8];
        for (i, word) in words.iter_mut().enumerate() {
            let o = (7 - i) * 4;
            *word = u32::from_be_bytes([bytes[o], bytes[o + 1], bytes[o + 2], bytes[o + 3]]);
        }
        Self::from_words(words)
    }

    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (i, word) in self.limbs.iter().enumerate() {
            let o = (7 - i) * 4;
            bytes[o..o + 4].copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        uint::is_zero(&self.limbs)
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    /// Multiplicative inverse via Fermat's little theorem: a^(P-2).
    ///
    /// Zero maps to zero by convention; valid flows never invert zero.
    pub fn inverse(&self) -> Self {
        self.pow_vartime(&INV_EXP)
    }

    /// Square root, if one exists: a^((P+1)/4) with a verification multiply.
    pub fn sqrt(&self) -> Option<Self> {
        let root = self.pow_vartime(&SQRT_EXP);
        if root * root == *self {
            Some(root)
        } else {
            None
        }
    }

    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Variable-time exponentiation by a fixed public exponent.
    fn pow_vartime(&self, exp: &Uint256) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }

        let mut result = Self::ONE;
        let mut base = *self;

        for &limb in exp.iter() {
            let mut remaining = limb;
            for _ in 0..32 {
                if remaining & 1 == 1 {
                    result *= base;
                }
                base = base.square();
                remaining >>= 1;
            }
        }

        result
    }

    /// The field modulus as a big integer, for cross-checking.
    pub fn modulus() -> BigUint {
        biguint_from_words(&P)
    }

    /// Canonical value as a big integer.
    pub fn as_biguint(&self) -> BigUint {
        biguint_from_words(&self.limbs)
    }
}

pub(crate) fn biguint_from_words(words: &Uint256) -> BigUint {
    let mut bytes = Vec::with_capacity(32);
    for &word in words {
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}

/// Full 512-bit schoolbook product of two 256-bit values.
fn mul_wide(a: &Uint256, b: &Uint256) -> [u32; 16] {
    let mut t = [0u32; 16];
    for i in 0..8 {
        let mut carry = 0u64;
        for j in 0..8 {
            let v = a[i] as u64 * b[j] as u64 + t[i + j] as u64 + carry;
            t[i + j] = v as u32;
            carry = v >> 32;
        }
        t[i + 8] = carry as u32;
    }
    t
}

/// `lo + (hi << 32) + hi * 977`, one fold of the high half back below
/// 2^256 territory. `hi` is at most 8 limbs.
fn fold(lo: &[u32], hi: &[u32]) -> [u32; 10] {
    let mut h977 = [0u32; 9];
    let mut carry = 0u64;
    for (i, &word) in hi.iter().enumerate() {
        let v = word as u64 * 977 + carry;
        h977[i] = v as u32;
        carry = v >> 32;
    }
    h977[hi.len()] = carry as u32;

    let mut r = [0u32; 10];
    let mut carry = 0u64;
    for (w, out) in r.iter_mut().enumerate() {
        let mut v = carry;
        if w < lo.len() {
            v += lo[w] as u64;
        }
        if w >= 1 && w - 1 < hi.len() {
            v += hi[w - 1] as u64;
        }
        if w < 9 {
            v += h977[w] as u64;
        }
        *out = v as u32;
        carry = v >> 32;
    }
    r
}

/// Reduce a 512-bit product mod P using 2^256 ≡ 2^32 + 977.
fn reduce_wide(t: &[u32; 16]) -> Uint256 {
    // Two folds bring the value under 2^256 + epsilon, then subtract P
    // until canonical (at most twice).
    let r = fold(&t[..8], &t[8..]);
    let r = fold(&r[..8], &r[8..]);

    let mut v = [0u32; 9];
    v.copy_from_slice(&r[..9]);
    loop {
        let low = [v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7]];
        if v[8] == 0 && uint::cmp(&low, &P) == Ordering::Less {
            return low;
        }
        let mut borrow = 0u32;
        for (i, limb) in v.iter_mut().take(8).enumerate() {
            let (d, b) = uint::sbb(*limb, P[i], borrow);
            *limb = d;
            borrow = b;
        }
        v[8] -= borrow;
    }
}

impl Add for FieldElement {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        FieldElement {
            limbs: uint::add_mod(&self.limbs, &rhs.limbs, &P),
        }
    }
}

impl AddAssign for FieldElement {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for FieldElement {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        FieldElement {
            limbs: uint::sub_mod(&self.limbs, &rhs.limbs, &P),
        }
    }
}

impl SubAssign for FieldElement {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for FieldElement {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl Mul for FieldElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        FieldElement {
            limbs: reduce_wide(&mul_wide(&self.limbs, &rhs.limbs)),
        }
    }
}

impl MulAssign for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for FieldElement {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl DivAssign for FieldElement {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for word in self.limbs.iter().rev() {
            write!(f, "{:08x}", word)?;
        }
        Ok(())
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({})", self)
    }
}

impl Distribution<FieldElement> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        loop {
            let words: Uint256 = rng.random();
            if uint::cmp(&words, &P) == Ordering::Less {
                return FieldElement { limbs: words };
            }
        }
    }
}
