//! Width-4 signed non-adjacent form for 256-bit scalars.
//!
//! Each digit is odd, drawn from {±1, ±3, ±5, ±7}, and sits at a bit
//! position; nonzero digits are at least four positions apart, so the
//! multiplier only needs the odd multiples 1/3/5/7 of its base point.
//! Digits are packed as two's-complement nibbles, eight per u32 word, 33
//! words in all: 32 words cover bits 0..=255, the last word holds the
//! carry digit a negative recoding can push past bit 255.

use crate::constants::NAF_SIZE;
use crate::uint::Uint256;

/// Packed wNAF digit sequence of a scalar.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WnafForm {
    packed: [u32; NAF_SIZE],
    len: usize,
}

impl WnafForm {
    /// Recode a raw 256-bit scalar. The scalar is consumed as-is, without
    /// reduction mod the group order.
    pub fn encode(scalar: &Uint256) -> Self {
        // One extra limb so the borrow from a negative digit can carry
        // past bit 255.
        let mut n = [0u32; 9];
        n[..8].copy_from_slice(scalar);

        let mut packed = [0u32; NAF_SIZE];
        let mut len = 0;
        let mut pos = 0;

        while !is_zero(&n) {
            if n[0] & 1 == 1 {
                let window = (n[0] & 0xf) as i32;
                let digit = if window >= 8 { window - 16 } else { window };
                if digit >= 0 {
                    sub_small(&mut n, digit as u32);
                } else {
                    add_small(&mut n, (-digit) as u32);
                }
                packed[pos >> 3] |= ((digit & 0xf) as u32) << ((pos & 7) << 2);
                len = pos + 1;
            }
            shr1(&mut n);
            pos += 1;
        }

        WnafForm { packed, len }
    }

    /// Signed digit at bit position `pos`.
    #[inline]
    pub fn digit(&self, pos: usize) -> i32 {
        let nib = (self.packed[pos >> 3] >> ((pos & 7) << 2)) & 0xf;
        if nib >= 8 {
            nib as i32 - 16
        } else {
            nib as i32
        }
    }

    /// Number of digit positions up to and including the highest nonzero
    /// digit; 0 for the zero scalar.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The packed nibble words.
    pub fn as_words(&self) -> &[u32; NAF_SIZE] {
        &self.packed
    }
}

fn is_zero(n: &[u32; 9]) -> bool {
    n.iter().all(|&w| w == 0)
}

fn shr1(n: &mut [u32; 9]) {
    for i in 0..8 {
        n[i] = (n[i] >> 1) | (n[i + 1] << 31);
    }
    n[8] >>= 1;
}

fn add_small(n: &mut [u32; 9], v: u32) {
    let mut carry = v as u64;
    for limb in n.iter_mut() {
        if carry == 0 {
            break;
        }
        let t = *limb as u64 + carry;
        *limb = t as u32;
        carry = t >> 32;
    }
}

fn sub_small(n: &mut [u32; 9], v: u32) {
    let mut borrow = v as u64;
    for limb in n.iter_mut() {
        if borrow == 0 {
            break;
        }
        let t = (*limb as u64).wrapping_sub(borrow);
        *limb = t as u32;
        borrow = (t >> 63) & 1;
    }
}
