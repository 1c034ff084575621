//! Finite field arithmetic for Curve13318.
//!
//! All arithmetic happens in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁵ − 19
//! ```
//!
//! but the crate carries three different limb representations of a field
//! element, each tuned to one stage of the scalar multiplication:
//!
//! - [`fe12::Fe12`]: 12 double-precision limbs in "floating point radix
//!   2^21.25". This is the hot representation: the complete group formulas
//!   run entirely on it.
//! - [`fe10::Fe10`]: 10 unsigned 64-bit limbs in radix 2^25.5, the layout of
//!   the NEON/ref10 family. Used to validate that a decoded point satisfies
//!   the curve equation, and for the canonical reduction behind it.
//! - [`fe51::Fe51`]: 5 unsigned 64-bit limbs in radix 2⁵¹, used only for
//!   the final inversion of Z and the packing of the affine coordinates.
//!
//! [`convert`] moves values out of the floating-point representation into
//! the two integer ones. There is no conversion back: once a computation
//! leaves the floating-point domain it is on its way out of the crate.

pub mod convert;
pub mod fe10;
pub mod fe12;
pub mod fe51;

/// Load 2 bytes of a little-endian byte slice into a `u64`.
#[inline(always)]
pub(crate) fn load_2(input: &[u8]) -> u64 {
    (input[0] as u64) | ((input[1] as u64) << 8)
}

/// Load 3 bytes of a little-endian byte slice into a `u64`.
#[inline(always)]
pub(crate) fn load_3(input: &[u8]) -> u64 {
    (input[0] as u64) | ((input[1] as u64) << 8) | ((input[2] as u64) << 16)
}

/// Load 4 bytes of a little-endian byte slice into a `u64`.
#[inline(always)]
pub(crate) fn load_4(input: &[u8]) -> u64 {
    (input[0] as u64)
        | ((input[1] as u64) << 8)
        | ((input[2] as u64) << 16)
        | ((input[3] as u64) << 24)
}
