//! Scalar arithmetic mod the curve order N.
//!
//! Same operation set as the base field, routed through the shared
//! modulus-parameterized limb helpers. Multiplication uses the generic
//! shift-and-add path; N has no special shape worth a dedicated reduction.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::N;
use crate::field::biguint_from_words;
use crate::group::ScalarBits;
use crate::uint::{self, Uint256};

/// Curve-order scalar, canonical in `[0, N)`.
///
/// Raw 256-bit private-key candidates are fed to `point_multiply` as plain
/// word arrays without reduction; this type is for callers that need
/// genuine mod-N semantics (and is the documented precondition for them).
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scalar {
    limbs: Uint256,
}

// N - 2, the Fermat inversion exponent for the scalar field.
const INV_EXP: Uint256 = [
    0xd036413f, 0xbfd25e8c, 0xaf48a03b, 0xbaaedce6, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff,
];

impl Scalar {
    pub const ZERO: Self = Scalar { limbs: [0; 8] };
    pub const ONE: Self = Scalar {
        limbs: [1, 0, 0, 0, 0, 0, 0, 0],
    };

    /// Build a canonical scalar, reducing a raw 256-bit value mod N.
    /// N > 2^255, so a single conditional subtract suffices.
    pub fn from_words(words: Uint256) -> Self {
        Scalar {
            limbs: reduce(words),
        }
    }

    pub fn from_u32(val: u32) -> Self {
        Scalar {
            limbs: [val, 0, 0, 0, 0, 0, 0, 0],
        }
    }

    #[inline]
    pub fn to_words(self) -> Uint256 {
        self.limbs
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        uint::is_zero(&self.limbs)
    }

    /// Multiplicative inverse mod N via Fermat; zero maps to zero.
    pub fn inverse(&self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }

        let mut result = Self::ONE;
        let mut base = *self;

        for &limb in INV_EXP.iter() {
            let mut remaining = limb;
            for _ in 0..32 {
                if remaining & 1 == 1 {
                    result *= base;
                }
                base = base * base;
                remaining >>= 1;
            }
        }

        result
    }

    /// The group order as a big integer, for cross-checking.
    pub fn modulus() -> BigUint {
        biguint_from_words(&N)
    }

    pub fn as_biguint(&self) -> BigUint {
        biguint_from_words(&self.limbs)
    }
}

/// Canonicalize a raw 256-bit value into `[0, N)`.
pub fn reduce(words: Uint256) -> Uint256 {
    if uint::cmp(&words, &N) != Ordering::Less {
        uint::sub(&words, &N).0
    } else {
        words
    }
}

impl ScalarBits for Scalar {
    #[inline]
    fn to_u32_limbs(&self) -> Uint256 {
        self.limbs
    }
}

impl Add for Scalar {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Scalar {
            limbs: uint::add_mod(&self.limbs, &rhs.limbs, &N),
        }
    }
}

impl AddAssign for Scalar {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Scalar {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Scalar {
            limbs: uint::sub_mod(&self.limbs, &rhs.limbs, &N),
        }
    }
}

impl SubAssign for Scalar {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Scalar {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl Mul for Scalar {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Scalar {
            limbs: uint::mul_mod(&self.limbs, &rhs.limbs, &N),
        }
    }
}

impl MulAssign for Scalar {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for word in self.limbs.iter().rev() {
            write!(f, "{:08x}", word)?;
        }
        Ok(())
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", self)
    }
}

impl Distribution<Scalar> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Scalar {
        loop {
            let words: Uint256 = rng.random();
            if uint::cmp(&words, &N) == Ordering::Less {
                return Scalar { limbs: words };
            }
        }
    }
}
