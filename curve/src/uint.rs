//! 256-bit fixed-width integers as 8 packed 32-bit words, little-endian
//! limb order. Carry chains widen through u64; overflow past 256 bits is
//! always surfaced through an explicit flag, never dropped.

use core::cmp::Ordering;

/// 256-bit unsigned integer: 8 u32 limbs, least significant first.
pub type Uint256 = [u32; 8];

/// Add with carry-in, returning the low word and the carry-out.
#[inline]
pub(crate) const fn adc(a: u32, b: u32, carry: u32) -> (u32, u32) {
    let t = a as u64 + b as u64 + carry as u64;
    (t as u32, (t >> 32) as u32)
}

/// Subtract with borrow-in, returning the low word and the borrow-out.
#[inline]
pub(crate) const fn sbb(a: u32, b: u32, borrow: u32) -> (u32, u32) {
    let t = (a as u64).wrapping_sub(b as u64 + borrow as u64);
    (t as u32, ((t >> 32) as u32) & 1)
}

/// `a + b`, with the carry out of bit 255.
pub fn add(a: &Uint256, b: &Uint256) -> (Uint256, bool) {
    let mut r = [0u32; 8];
    let mut carry = 0u32;
    for (i, limb) in r.iter_mut().enumerate() {
        let (v, c) = adc(a[i], b[i], carry);
        *limb = v;
        carry = c;
    }
    (r, carry != 0)
}

/// `a - b`, with the borrow out of bit 255.
pub fn sub(a: &Uint256, b: &Uint256) -> (Uint256, bool) {
    let mut r = [0u32; 8];
    let mut borrow = 0u32;
    for (i, limb) in r.iter_mut().enumerate() {
        let (v, bw) = sbb(a[i], b[i], borrow);
        *limb = v;
        borrow = bw;
    }
    (r, borrow != 0)
}

/// Compare two 256-bit values.
pub fn cmp(a: &Uint256, b: &Uint256) -> Ordering {
    for i in (0..8).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

pub fn is_zero(a: &Uint256) -> bool {
    a.iter().all(|&w| w == 0)
}

/// Shift left by one bit; the bit shifted out of position 255 is returned.
pub fn shl1(a: &Uint256) -> (Uint256, bool) {
    let mut r = [0u32; 8];
    r[0] = a[0] << 1;
    for i in 1..8 {
        r[i] = (a[i] << 1) | (a[i - 1] >> 31);
    }
    (r, a[7] >> 31 != 0)
}

/// Shift right by one bit; the bit shifted out of position 0 is returned.
pub fn shr1(a: &Uint256) -> (Uint256, bool) {
    let mut r = [0u32; 8];
    for i in 0..7 {
        r[i] = (a[i] >> 1) | (a[i + 1] << 31);
    }
    r[7] = a[7] >> 1;
    (r, a[0] & 1 != 0)
}

/// Bit at position `pos` (0 = least significant).
#[inline]
pub(crate) fn bit(a: &Uint256, pos: usize) -> bool {
    (a[pos >> 5] >> (pos & 31)) & 1 == 1
}

/// `(a + b) mod m`, for canonical `a, b < m`.
pub(crate) fn add_mod(a: &Uint256, b: &Uint256, m: &Uint256) -> Uint256 {
    let (sum, carry) = add(a, b);
    // The wrapped difference is correct when the true sum is >= m.
    if carry || cmp(&sum, m) != Ordering::Less {
        sub(&sum, m).0
    } else {
        sum
    }
}

/// `(a - b) mod m`, for canonical `a, b < m`.
pub(crate) fn sub_mod(a: &Uint256, b: &Uint256, m: &Uint256) -> Uint256 {
    let (diff, borrow) = sub(a, b);
    if borrow {
        add(&diff, m).0
    } else {
        diff
    }
}

/// `(a * b) mod m` by shift-and-add, for canonical `a, b < m`.
///
/// Modulus-generic and total; the prime field uses a faster reduction
/// exploiting the shape of P, this path serves the curve-order modulus.
pub(crate) fn mul_mod(a: &Uint256, b: &Uint256, m: &Uint256) -> Uint256 {
    let mut acc = [0u32; 8];
    for pos in (0..256).rev() {
        acc = add_mod(&acc, &acc, m);
        if bit(b, pos) {
            acc = add_mod(&acc, a, m);
        }
    }
    acc
}
