//! secp256k1 elliptic-curve arithmetic on fixed-width 8x32-bit words.
//!
//! This crate provides the base and scalar prime fields, affine curve
//! points, width-4 wNAF scalar multiplication over a table of precomputed
//! odd base-point multiples, and compressed public-key parse/transform.
//! Every operation is a pure function over fixed-size word arrays; there
//! is no shared state, so independent invocations can run in parallel
//! without coordination. Curve parameters are fixed in the `constants`
//! module.

mod affine;
mod codec;
pub mod constants;
mod field;
mod group;
mod mul;
mod naf;
mod random;
mod scalar;
mod table;
pub mod uint;

pub use affine::Affine;
pub use codec::{parse_public, transform_public, CompressedPublicKey, DecodeError};
pub use field::FieldElement;
pub use group::{Group, ScalarBits};
pub use mul::{mul_generator, point_multiply};
pub use naf::WnafForm;
pub use random::RandomField;
pub use scalar::{reduce as reduce_scalar, Scalar};
pub use table::{PrecomputedTable, TableEntry};
pub use uint::Uint256;
