//! Windowed-NAF scalar multiplication over a precomputed table.

use crate::affine::Affine;
use crate::naf::WnafForm;
use crate::table::PrecomputedTable;
use crate::uint::Uint256;

/// Compute k * B where B is the table's base point.
///
/// Double-and-add over the wNAF digits, most significant first: double the
/// accumulator once per position, add the table entry for |digit| when the
/// digit is nonzero (the negated-y slot when it is negative). The scalar
/// covers the full 256-bit range; no reduction mod the group order is
/// applied. A zero scalar yields the point at infinity.
pub fn point_multiply(scalar: &Uint256, table: &PrecomputedTable) -> Affine {
    let naf = WnafForm::encode(scalar);

    let mut acc = Affine::INFINITY;
    for pos in (0..naf.len()).rev() {
        acc = acc.double();
        let digit = naf.digit(pos);
        if digit != 0 {
            acc += table.lookup(digit);
        }
    }

    acc
}

/// Multiply the fixed generator G, building its table on the fly.
pub fn mul_generator(scalar: &Uint256) -> Affine {
    let table = PrecomputedTable::build(&Affine::generator());
    point_multiply(scalar, &table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{G_X, G_Y};
    use crate::field::FieldElement;
    use crate::group::Group;
    use crate::scalar::Scalar;
    use rand::distr::{Distribution, StandardUniform};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generator_table() -> PrecomputedTable {
        PrecomputedTable::build(&Affine::generator())
    }

    #[test]
    fn test_multiply_by_zero() {
        assert_eq!(point_multiply(&[0; 8], &generator_table()), Affine::INFINITY);
    }

    #[test]
    fn test_multiply_by_one_is_g() {
        let result = point_multiply(&[1, 0, 0, 0, 0, 0, 0, 0], &generator_table());
        assert_eq!(result.x.to_words(), G_X);
        assert_eq!(result.y.to_words(), G_Y);
    }

    #[test]
    fn test_multiply_by_two_matches_double() {
        let result = point_multiply(&[2, 0, 0, 0, 0, 0, 0, 0], &generator_table());
        assert_eq!(result, Affine::generator().double());

        // And the published 2G coordinates.
        let x = FieldElement::from_words([
            0x5c709ee5, 0xabac09b9, 0x8cef3ca7, 0x5c778e4b, 0x95c07cd8, 0x3045406e, 0x41ed7d6d,
            0xc6047f94,
        ]);
        let y = FieldElement::from_words([
            0x50cfe52a, 0x236431a9, 0x3266d0e1, 0xf7f63265, 0x466ceaee, 0xa3c58419, 0xa63dc339,
            0x1ae168fe,
        ]);
        assert_eq!(result, Affine::new(x, y));
    }

    #[test]
    fn test_small_multiples_match_ladder() {
        let g = Affine::generator();
        let table = generator_table();
        for k in 1u32..=64 {
            let fast = point_multiply(&[k, 0, 0, 0, 0, 0, 0, 0], &table);
            let slow = g.mul_u64(k as u64);
            assert_eq!(fast, slow, "k = {}", k);
        }
    }

    #[test]
    fn test_random_scalars_match_ladder() {
        let g = Affine::generator();
        let table = generator_table();
        let mut rng = StdRng::seed_from_u64(20);
        for _ in 0..10 {
            let scalar: Scalar = StandardUniform.sample(&mut rng);
            let fast = point_multiply(&scalar.to_words(), &table);
            let slow = g.scalar_mul(&scalar);
            assert_eq!(fast, slow);
            assert!(fast.is_on_curve());
        }
    }

    #[test]
    fn test_unreduced_scalar() {
        // Raw counters above N are multiplied as-is, not reduced first;
        // since G has order N, (N + 5) * G must still equal 5 * G.
        let table = generator_table();
        let raw = crate::uint::add(&crate::constants::N, &[5, 0, 0, 0, 0, 0, 0, 0]).0;

        assert_eq!(crate::scalar::reduce(raw), [5, 0, 0, 0, 0, 0, 0, 0]);
        let direct = point_multiply(&raw, &table);
        assert_eq!(direct, Affine::generator().mul_u64(5));
    }

    #[test]
    fn test_non_generator_base() {
        // Table built from an arbitrary point, not G.
        let base = Affine::generator().mul_u64(987654321);
        let table = PrecomputedTable::build(&base);
        let fast = point_multiply(&[77, 0, 0, 0, 0, 0, 0, 0], &table);
        assert_eq!(fast, base.mul_u64(77));
    }

    #[test]
    fn test_mul_generator() {
        let fast = mul_generator(&[123456, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(fast, Affine::generator().mul_u64(123456));
    }
}
