//! Integer avalanche hashing shared by lane seeding and noise gradient lookup.
//!
//! All arithmetic is 32-bit two's complement with wrapping multiplies and
//! arithmetic right shifts; changing any step changes every hashed value.

/// Prime applied to X lattice coordinates before hashing.
pub const PRIME_X: i32 = 501_125_321;
/// Prime applied to Y lattice coordinates before hashing.
pub const PRIME_Y: i32 = 1_136_930_381;
/// Prime applied to Z lattice coordinates before hashing.
pub const PRIME_Z: i32 = 1_720_413_743;

const HASH_MULTIPLIER: i32 = 0x27d4_eb2d;

/// Wang avalanche hash. Seeds each lane's random stream from its own index.
#[inline]
pub fn wang_hash(mut x: i32) -> i32 {
    x = (x ^ 61) ^ (x >> 16);
    x = x.wrapping_mul(9);
    x ^= x >> 4;
    x = x.wrapping_mul(HASH_MULTIPLIER);
    x ^ (x >> 15)
}

/// Hash of a 2D lattice corner. Coordinates must already be prime-multiplied.
#[inline]
pub fn lattice_hash_2(seed: i32, x_primed: i32, y_primed: i32) -> i32 {
    (seed ^ x_primed ^ y_primed).wrapping_mul(HASH_MULTIPLIER)
}

/// Hash of a 3D lattice corner. Coordinates must already be prime-multiplied.
#[inline]
pub fn lattice_hash_3(seed: i32, x_primed: i32, y_primed: i32, z_primed: i32) -> i32 {
    (seed ^ x_primed ^ y_primed ^ z_primed).wrapping_mul(HASH_MULTIPLIER)
}
