//! Precomputed odd multiples of a base point.
//!
//! The wNAF multiplier only ever adds odd multiples, so the table holds
//! exactly 1B, 3B, 5B and 7B, each stored as (x, y, -y). The negated y is
//! precomputed so a negative digit costs a plain lookup instead of a field
//! subtraction inside the hot loop.

use serde::{Deserialize, Serialize};

use crate::affine::Affine;
use crate::constants::TABLE_WORDS;
use crate::field::FieldElement;

/// One table slot: an odd multiple of the base point and its negation's y.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub x: FieldElement,
    pub y: FieldElement,
    pub neg_y: FieldElement,
}

/// Table of (x, y, -y) for the odd multiples 1B, 3B, 5B, 7B.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecomputedTable {
    entries: [TableEntry; 4],
}

impl PrecomputedTable {
    /// Build the table for a base point: 2B once, then chained additions.
    pub fn build(base: &Affine) -> Self {
        let two = base.double();
        let three = two + *base;
        let five = three + two;
        let seven = five + two;

        PrecomputedTable {
            entries: [
                entry(base),
                entry(&three),
                entry(&five),
                entry(&seven),
            ],
        }
    }

    /// The table's base point (the 1B slot).
    pub fn base(&self) -> Affine {
        Affine::new(self.entries[0].x, self.entries[0].y)
    }

    /// Point for a nonzero wNAF digit: |d| selects the odd multiple, the
    /// sign selects which stored y to use. {1,3,5,7} map to slots 0..4.
    #[inline]
    pub fn lookup(&self, digit: i32) -> Affine {
        let slot = &self.entries[(digit.unsigned_abs() as usize) >> 1];
        if digit < 0 {
            Affine::new(slot.x, slot.neg_y)
        } else {
            Affine::new(slot.x, slot.y)
        }
    }

    /// Flatten to the 96-word wire layout: (x1,y1,-y1),(x3,y3,-y3),
    /// (x5,y5,-y5),(x7,y7,-y7), little-endian limbs throughout.
    pub fn to_words(&self) -> [u32; TABLE_WORDS] {
        let mut words = [0u32; TABLE_WORDS];
        for (i, e) in self.entries.iter().enumerate() {
            let o = i * 24;
            words[o..o + 8].copy_from_slice(&e.x.to_words());
            words[o + 8..o + 16].copy_from_slice(&e.y.to_words());
            words[o + 16..o + 24].copy_from_slice(&e.neg_y.to_words());
        }
        words
    }

    /// Rebuild from the 96-word wire layout.
    pub fn from_words(words: &[u32; TABLE_WORDS]) -> Self {
        let mut entries = [TableEntry {
            x: FieldElement::ZERO,
            y: FieldElement::ZERO,
            neg_y: FieldElement::ZERO,
        }; 4];
        for (i, e) in entries.iter_mut().enumerate() {
            let o = i * 24;
            e.x = FieldElement::from_words(slice_to_words(&words[o..o + 8]));
            e.y = FieldElement::from_words(slice_to_words(&words[o + 8..o + 16]));
            e.neg_y = FieldElement::from_words(slice_to_words(&words[o + 16..o + 24]));
        }
        PrecomputedTable { entries }
    }
}

fn entry(point: &Affine) -> TableEntry {
    TableEntry {
        x: point.x,
        y: point.y,
        neg_y: -point.y,
    }
}

fn slice_to_words(s: &[u32]) -> [u32; 8] {
    let mut w = [0u32; 8];
    w.copy_from_slice(s);
    w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::Group;

    #[test]
    fn test_entries_are_odd_multiples() {
        let g = Affine::generator();
        let table = PrecomputedTable::build(&g);

        for (i, mult) in [1u64, 3, 5, 7].into_iter().enumerate() {
            let expected = g.mul_u64(mult);
            let point = Affine::new(table.entries[i].x, table.entries[i].y);
            assert_eq!(point, expected, "slot {} should hold {}B", i, mult);
            assert!(point.is_on_curve());
        }
    }

    #[test]
    fn test_lookup_signs() {
        let g = Affine::generator();
        let table = PrecomputedTable::build(&g);

        assert_eq!(table.lookup(1), g);
        assert_eq!(table.lookup(-1), g.negate());
        assert_eq!(table.lookup(7), g.mul_u64(7));
        assert_eq!(table.lookup(-5), g.mul_u64(5).negate());
    }

    #[test]
    fn test_base() {
        let g = Affine::generator();
        let table = PrecomputedTable::build(&g);
        assert_eq!(table.base(), g);
    }

    #[test]
    fn test_word_round_trip() {
        let g = Affine::generator();
        let table = PrecomputedTable::build(&g);
        let words = table.to_words();
        assert_eq!(PrecomputedTable::from_words(&words), table);
    }

    #[test]
    fn test_word_layout_starts_with_base_x() {
        let g = Affine::generator();
        let table = PrecomputedTable::build(&g);
        let words = table.to_words();
        assert_eq!(&words[..8], &crate::constants::G_X);
        assert_eq!(&words[8..16], &crate::constants::G_Y);
    }
}
