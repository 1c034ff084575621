//! Conversions out of the floating-point representation.
//!
//! Both conversions require a squeezed input, so that adjacent limb pairs
//! sum without rounding: the pair z[2i] + z[2i+1] is an integer multiple of
//! 2^e'(2i) bounded well below 2⁵³·2^e'(2i). Rescaling by the limb offset
//! then yields six integer limbs of at most 44 bits (sign included).
//!
//! Limbs of a squeezed element may be negative, so a large multiple of p
//! (8p) is added to make every limb positive before repacking.

use super::fe10::Fe10;
use super::fe12::Fe12;
use super::fe51::Fe51;

/// 8p in six limbs of radix 2^42.5 (offsets 0, 43, 85, 128, 170, 213).
const P8: [u64; 6] = [
    0x1FFF_FFFF_FF68,
    0x0FFF_FFFF_FFFC,
    0x1FFF_FFFF_FFFC,
    0x0FFF_FFFF_FFFC,
    0x1FFF_FFFF_FFFC,
    0x1FFF_FFFF_FFFC,
];

const MASK42: u64 = 0xFFFF_FC00_0000_0000;
const MASK43: u64 = 0xFFFF_F800_0000_0000;

/// Scale factors 2^-e'(2i) that shift each folded limb pair down to an
/// integer.
const FOLD_SCALE: [f64; 6] = [
    1.0,
    super::fe12::two_to(-43),
    super::fe12::two_to(-85),
    super::fe12::two_to(-128),
    super::fe12::two_to(-170),
    super::fe12::two_to(-213),
];

/// Fold the 12 floating-point limbs into 6 integer limbs and lift them into
/// the positive range by adding 8p.
#[inline(always)]
fn fold_positive(z: &Fe12) -> [u64; 6] {
    let z = &z.0;
    let mut out = [0u64; 6];
    for (i, limb) in out.iter_mut().enumerate() {
        let folded = ((z[2 * i] + z[2 * i + 1]) * FOLD_SCALE[i]) as i64;
        *limb = (folded as u64).wrapping_add(P8[i]);
    }

    out
}

/// Convert a squeezed element into the 10-limb integer representation.
pub fn fe12_to_fe10(z: &Fe12) -> Fe10 {
    let [mut z0, mut z1, mut z2, mut z3, mut z4, mut z5] = fold_positive(z);

    // Down to 6 limbs; a good opportunity for a carry ripple. Chains:
    //   a: z0 -> z1 -> z2 -> z3
    //   b: z3 -> z4 -> z5 -> z0
    let mut t0;
    let mut t1;
    t0 = z0 & MASK43; // Round 1a
    z0 ^= t0;
    z1 += t0 >> 43;
    t1 = z3 & MASK42; // Round 1b
    z3 ^= t1;
    z4 += t1 >> 42;
    t0 = z1 & MASK42; // Round 2a
    z1 ^= t0;
    z2 += t0 >> 42;
    t1 = z4 & MASK43; // Round 2b
    z4 ^= t1;
    z5 += t1 >> 43;
    t0 = z2 & MASK43; // Round 3a
    z2 ^= t0;
    z3 += t0 >> 43;
    t1 = z5 & MASK42; // Round 3b
    z5 ^= t1;
    z0 += 19 * (t1 >> 42);
    // The repacking below absorbs what is left: z0 keeps 8 bits of headroom
    // in out[1], z1 keeps 17 in out[3], z3 keeps 9 in out[6] and z4 keeps
    // 17 in out[8].

    let mut out = [0u64; 10];
    out[0] = z0 & 0x3FF_FFFF;
    out[1] = z0 >> 26;
    out[1] += (z1 & 0xFF) << 17;
    out[2] = (z1 >> 8) & 0x3FF_FFFF;
    out[3] = z1 >> 34;
    out[3] += (z2 & 0x1_FFFF) << 8;
    out[4] = z2 >> 17;
    out[5] = z3 & 0x1FF_FFFF;
    out[6] = z3 >> 25;
    out[6] += (z4 & 0x1FF) << 17;
    out[7] = (z4 >> 9) & 0x1FF_FFFF;
    out[8] = z4 >> 34;
    out[8] += (z5 & 0x1_FFFF) << 9;
    out[9] = z5 >> 17;

    Fe10(out)
}

/// Convert a squeezed element into the 5-limb radix-2⁵¹ representation.
///
/// No carry ripple is needed here: the downstream multiplication and packing
/// absorb the slack above 51 bits.
pub fn fe12_to_fe51(z: &Fe12) -> Fe51 {
    let [u0, u1, u2, u3, u4, u5] = fold_positive(z);

    let mut v = [0u64; 5];
    v[0] = u0;
    v[0] += (u1 & 0xFF) << 43;
    v[1] = u1 >> 8;
    v[1] += (u2 & 0x1_FFFF) << 34;
    v[2] = u2 >> 17;
    v[2] += (u3 & 0x1FF_FFFF) << 26;
    v[3] = u3 >> 25;
    v[3] += (u4 & 0x3_FFFF_FFFF) << 17;
    v[4] = u4 >> 34;
    v[4] += (u5 & 0x3FF_FFFF_FFFF) << 9;
    v[0] += 19 * (u5 >> 42);

    Fe51(v)
}
