//! secp256k1 curve constants.
//!
//! Multi-word values are little-endian limb arrays of packed 32-bit words,
//! matching the layout used throughout the crate.

/// Field prime P = 2^256 - 2^32 - 977.
pub const P: [u32; 8] = [
    0xfffffc2f, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
];

/// Order N of the curve group generated by G.
pub const N: [u32; 8] = [
    0xd0364141, 0xbfd25e8c, 0xaf48a03b, 0xbaaedce6, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff,
];

/// x-coordinate of the base point G.
pub const G_X: [u32; 8] = [
    0x16f81798, 0x59f2815b, 0x2dce28d9, 0x029bfcdb, 0xce870b07, 0x55a06295, 0xf9dcbbac, 0x79be667e,
];

/// y-coordinate of the base point G.
pub const G_Y: [u32; 8] = [
    0xfb10d4b8, 0x9c47d08f, 0xa6855419, 0xfd17b448, 0x0e1108a8, 0x5da4fbfc, 0x26a3c465, 0x483ada77,
];

/// Parity byte of G's compressed form (the y-coordinate is even).
pub const G_PARITY: u8 = 0x02;

/// G in the packed compressed-key layout: the 33 bytes
/// `02 79BE667E F9DCBBAC 55A06295 CE870B07 029BFCDB 2DCE28D9 59F2815B 16F81798`
/// packed into little-endian u32 words, parity byte first, x big-endian.
pub const G_COMPRESSED: [u32; 9] = [
    0x66be7902, 0xbbdcf97e, 0x62a055ac, 0x0b87ce95, 0xfc9b0207, 0x28ce2ddb, 0x81f259d9, 0x17f8165b,
    0x00000098,
];

/// Curve equation constant: y^2 = x^3 + 7.
pub const B: u32 = 7;

/// Words in a flattened precomputed table: 4 odd multiples, each (x, y, -y).
pub const TABLE_WORDS: usize = 96;

/// Packed words in a wNAF digit sequence. 32 words cover digits for bits
/// 0..=255; one extra word holds the carry digit past bit 255.
pub const NAF_SIZE: usize = 33;

/// Words in an x-coordinate or private scalar.
pub const KEY_WORDS: usize = 8;

/// Words in the packed compressed-key layout (33 bytes).
pub const COMPRESSED_KEY_WORDS: usize = 9;
