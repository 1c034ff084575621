//! Floating-point field element with 12 limbs.
//!
//! This is the representation the group law runs on. An element is stored as
//! 12 IEEE-754 doubles in "floating point radix 2^21.25": limb `i` is a
//! multiple of 2^e'(i) with
//!
//! ```text
//! e' = (0, 22, 43, 64, 85, 107, 128, 149, 170, 192, 213, 234)
//! ```
//!
//! and the represented value is the *plain sum* of the limbs. Limbs may be
//! negative; [`Fe12::squeeze`] forces every limb back below 1.01·2^(e'(i)+b)
//! with b alternating 22 and 21, by rounding against large constants.
//!
//! The whole module assumes round-to-nearest-ties-to-even with floating
//! point exceptions masked (see `fpcw`), and that no two operations are
//! contracted into a fused multiply-add. Rust guarantees the latter; the
//! control word handling takes care of the former.
//!
//! The multiplication bound rule of thumb: the lowest product limb absorbs up
//! to a factor 210 from the 19-fold wrap, so the relative magnitudes of two
//! multiplied limbs must multiply out below 1.1·2⁴⁵. A 2²¹·2²⁴ product is
//! fine; 2²³·2²³ is not.

use std::ops::{Add, Mul, Sub};

use super::{load_2, load_3};

/// 2^exp as an exactly-representable double.
pub(crate) const fn two_to(exp: i32) -> f64 {
    f64::from_bits(((exp + 1023) as u64) << 52)
}

/// 19 · 2⁻²⁵⁵, the wrap factor of the top limb.
const WRAP19: f64 = 19.0 * two_to(-255);

const P128: f64 = two_to(128);
const P128_INV: f64 = two_to(-128);

/// 38 · 2⁻¹²⁸, the combined wrap-and-rescale factor in the squaring.
const B38_P128_INV: f64 = 38.0 * two_to(-128);

/// Per-limb scale factors 2^e'(i).
const SCALE: [f64; 12] = [
    two_to(0),
    two_to(22),
    two_to(43),
    two_to(64),
    two_to(85),
    two_to(107),
    two_to(128),
    two_to(149),
    two_to(170),
    two_to(192),
    two_to(213),
    two_to(234),
];

/// Rounding constants 3·2^E per limb: adding and subtracting one of these
/// splits a limb at its target width under round-to-nearest.
const BIAS: [f64; 12] = [
    3.0 * two_to(73),
    3.0 * two_to(94),
    3.0 * two_to(115),
    3.0 * two_to(136),
    3.0 * two_to(158),
    3.0 * two_to(179),
    3.0 * two_to(200),
    3.0 * two_to(221),
    3.0 * two_to(243),
    3.0 * two_to(264),
    3.0 * two_to(285),
    3.0 * two_to(306),
];

/// Divide a squeezed high limb by 2¹²⁸ by clearing one exponent bit.
///
/// Limbs 7 through 10 of a squeezed element are either exactly zero or a
/// multiple of their 2^e' scale well below 2²⁵⁷, which pins exponent bit 7
/// (bit 59 of the encoding) to one. Clearing it subtracts 128 from the
/// exponent; on zero it does nothing.
#[inline(always)]
fn unset_bit59(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & 0xF7FF_FFFF_FFFF_FFFF)
}

/// 6×6 schoolbook polynomial product into 11 accumulators.
///
/// Term order matters: each accumulator collects its products in ascending
/// row order, which is what the bounds analysis of the callers assumes.
#[inline(always)]
fn mul6(a: &[f64; 6], b: &[f64; 6]) -> [f64; 11] {
    let mut r = [0.0f64; 11];
    for i in 0..6 {
        for j in 0..6 {
            r[i + j] += a[i] * b[j];
        }
    }

    r
}

/// 6-limb squaring: 21 distinct products, the off-diagonal ones doubled.
#[inline(always)]
fn square6(a: &[f64; 6]) -> [f64; 11] {
    let a00 = a[0] * a[0];
    let a01 = a[0] * a[1];
    let a02 = a[0] * a[2];
    let a03 = a[0] * a[3];
    let a04 = a[0] * a[4];
    let a05 = a[0] * a[5];
    let a11 = a[1] * a[1];
    let a12 = a[1] * a[2];
    let a13 = a[1] * a[3];
    let a14 = a[1] * a[4];
    let a15 = a[1] * a[5];
    let a22 = a[2] * a[2];
    let a23 = a[2] * a[3];
    let a24 = a[2] * a[4];
    let a25 = a[2] * a[5];
    let a33 = a[3] * a[3];
    let a34 = a[3] * a[4];
    let a35 = a[3] * a[5];
    let a44 = a[4] * a[4];
    let a45 = a[4] * a[5];
    let a55 = a[5] * a[5];

    let mut r = [0.0f64; 11];

    // Add the non-diagonal products
    r[1] = a01;
    r[2] = a02;
    r[3] = a03 + a12;
    r[4] = a04 + a13;
    r[5] = a05 + a14 + a23;
    r[6] = a15 + a24;
    r[7] = a25 + a34;
    r[8] = a35;
    r[9] = a45;

    // Double the non-diagonals and add the diagonals
    r[0] = a00;
    r[1] = r[1] + r[1];
    r[2] = r[2] + a11 + r[2];
    r[3] = r[3] + r[3];
    r[4] = r[4] + a22 + r[4];
    r[5] = r[5] + r[5];
    r[6] = r[6] + a33 + r[6];
    r[7] = r[7] + r[7];
    r[8] = r[8] + a44 + r[8];
    r[9] = r[9] + r[9];
    r[10] = a55;

    r
}

/// Field element modulo 2²⁵⁵ − 19 as 12 scaled doubles.
#[derive(Clone, Copy, Debug)]
pub struct Fe12(pub [f64; 12]);

impl Fe12 {
    /// The additive identity (0).
    pub const ZERO: Self = Fe12([0.0f64; 12]);

    /// The multiplicative identity (1).
    pub const ONE: Self = Fe12([
        1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ]);

    /// Parse a 32-byte little-endian encoding.
    ///
    /// Bit 255 wraps to the bottom limb scaled by 19, so encodings of values
    /// at or above p decode to a congruent element.
    pub fn from_bytes(input: &[u8; 32]) -> Self {
        let mut z0 = load_3(&input[0..]);
        let mut z1 = load_3(&input[3..]) << 2;
        let mut z2 = load_2(&input[6..]) << 5;
        let mut z3 = load_3(&input[8..]);
        let mut z4 = load_3(&input[11..]) << 3;
        let mut z5 = load_2(&input[14..]) << 5;
        let mut z6 = load_3(&input[16..]);
        let mut z7 = load_3(&input[19..]) << 3;
        let mut z8 = load_2(&input[22..]) << 6;
        let mut z9 = load_3(&input[24..]);
        let mut z10 = load_3(&input[27..]) << 3;
        let mut z11 = load_2(&input[30..]) << 6;

        z0 += 19 * (z11 >> 21);
        z11 &= 0x1F_FFFF;
        z2 += z1 >> 21;
        z1 &= 0x1F_FFFF;
        z4 += z3 >> 21;
        z3 &= 0x1F_FFFF;
        z6 += z5 >> 21;
        z5 &= 0x1F_FFFF;
        z8 += z7 >> 21;
        z7 &= 0x1F_FFFF;
        z10 += z9 >> 21;
        z9 &= 0x1F_FFFF;

        z1 += z0 >> 22;
        z0 &= 0x3F_FFFF;
        z5 += z4 >> 22;
        z4 &= 0x3F_FFFF;
        z7 += z6 >> 21;
        z6 &= 0x1F_FFFF;
        z9 += z8 >> 22;
        z8 &= 0x3F_FFFF;
        z11 += z10 >> 21;
        z10 &= 0x1F_FFFF;

        Fe12([
            (z0 as f64) * SCALE[0],
            (z1 as f64) * SCALE[1],
            (z2 as f64) * SCALE[2],
            (z3 as f64) * SCALE[3],
            (z4 as f64) * SCALE[4],
            (z5 as f64) * SCALE[5],
            (z6 as f64) * SCALE[6],
            (z7 as f64) * SCALE[7],
            (z8 as f64) * SCALE[8],
            (z9 as f64) * SCALE[9],
            (z10 as f64) * SCALE[10],
            (z11 as f64) * SCALE[11],
        ])
    }

    /// Multiply every limb by a small constant. No squeeze.
    pub fn mul_small(&self, n: f64) -> Self {
        Fe12(self.0.map(|limb| n * limb))
    }

    /// Multiply by the curve constant 13318. No squeeze.
    pub fn mul_b(&self) -> Self {
        self.mul_small(13318.0)
    }

    /// Add the curve constant 13318 to limb 0.
    pub fn add_b(&mut self) {
        self.0[0] += 13318.0;
    }

    /// Constant-time conditional replacement.
    ///
    /// `mask` must be all-ones (replace with `rhs`) or all-zero (keep). The
    /// blend goes through the bit patterns of the limbs so that no branch
    /// and no rounding is involved.
    pub fn conditional_move(&mut self, rhs: &Self, mask: u64) {
        for (s, r) in self.0.iter_mut().zip(rhs.0.iter()) {
            let tmp = (s.to_bits() ^ r.to_bits()) & mask;
            *s = f64::from_bits(s.to_bits() ^ tmp);
        }
    }

    /// Carry-ripple this field element.
    ///
    /// Interleaves two carry chains (8 rounds):
    ///
    /// ```text
    /// a: z[0] -> z[1] -> z[2] -> z[3] -> z[4]  -> z[5]  -> z[6] -> z[7]
    /// b: z[6] -> z[7] -> z[8] -> z[9] -> z[10] -> z[11] -> z[0] -> z[1]
    /// ```
    ///
    /// Each round splits a limb at its target width by adding and
    /// subtracting 3·2^E under round-to-nearest; the wrap from limb 11
    /// multiplies by 19·2⁻²⁵⁵.
    ///
    /// Precondition: every limb is below 0.99·2⁵³ relative to its scale.
    /// Postcondition: |z[i]| ≤ 1.01·2^(e'(i)+b) with b alternating 22, 21.
    pub fn squeeze(&mut self) {
        let z = &mut self.0;
        let mut t0;
        let mut t1;

        t0 = z[0] + BIAS[0] - BIAS[0]; // Round 1a
        z[0] -= t0;
        z[1] += t0;
        t1 = z[6] + BIAS[6] - BIAS[6]; // Round 1b
        z[6] -= t1;
        z[7] += t1;
        t0 = z[1] + BIAS[1] - BIAS[1]; // Round 2a
        z[1] -= t0;
        z[2] += t0;
        t1 = z[7] + BIAS[7] - BIAS[7]; // Round 2b
        z[7] -= t1;
        z[8] += t1;
        t0 = z[2] + BIAS[2] - BIAS[2]; // Round 3a
        z[2] -= t0;
        z[3] += t0;
        t1 = z[8] + BIAS[8] - BIAS[8]; // Round 3b
        z[8] -= t1;
        z[9] += t1;
        t0 = z[3] + BIAS[3] - BIAS[3]; // Round 4a
        z[3] -= t0;
        z[4] += t0;
        t1 = z[9] + BIAS[9] - BIAS[9]; // Round 4b
        z[9] -= t1;
        z[10] += t1;
        t0 = z[4] + BIAS[4] - BIAS[4]; // Round 5a
        z[4] -= t0;
        z[5] += t0;
        t1 = z[10] + BIAS[10] - BIAS[10]; // Round 5b
        z[10] -= t1;
        z[11] += t1;
        t0 = z[5] + BIAS[5] - BIAS[5]; // Round 6a
        z[5] -= t0;
        z[6] += t0;
        t1 = z[11] + BIAS[11] - BIAS[11]; // Round 6b
        z[11] -= t1;
        z[0] += WRAP19 * t1;
        t0 = z[6] + BIAS[6] - BIAS[6]; // Round 7a
        z[6] -= t0;
        z[7] += t0;
        t1 = z[0] + BIAS[0] - BIAS[0]; // Round 7b
        z[0] -= t1;
        z[1] += t1;
        t0 = z[7] + BIAS[7] - BIAS[7]; // Round 8a
        z[7] -= t0;
        z[8] += t0;
        t1 = z[1] + BIAS[1] - BIAS[1]; // Round 8b
        z[1] -= t1;
        z[2] += t1;
    }

    /// Square this field element. No final squeeze.
    ///
    /// Same Karatsuba layout as the multiplication, but with only 21
    /// distinct products per 6-limb block. The middle block here is
    /// (A_lo − A_hi)·(A_hi − A_lo) ≡ −(A_lo − A_hi)², so its sign is flipped
    /// in the recombination relative to [`Mul`].
    pub fn square(&self) -> Self {
        let a = &self.0;

        let a_lo = [a[0], a[1], a[2], a[3], a[4], a[5]];
        let a_hi = [
            P128_INV * a[6],
            unset_bit59(a[7]),
            unset_bit59(a[8]),
            unset_bit59(a[9]),
            unset_bit59(a[10]),
            P128_INV * a[11],
        ];

        let l = square6(&a_lo);
        let h = square6(&a_hi);

        let ma = [
            a_lo[0] - a_hi[0],
            a_lo[1] - a_hi[1],
            a_lo[2] - a_hi[2],
            a_lo[3] - a_hi[3],
            a_lo[4] - a_hi[4],
            a_lo[5] - a_hi[5],
        ];
        let m = square6(&ma);

        let mut c = [0.0f64; 12];
        c[0] = l[0] + B38_P128_INV * (-m[6] + l[6] + h[6]) + 38.0 * h[0];
        c[1] = l[1] + B38_P128_INV * (-m[7] + l[7] + h[7]) + 38.0 * h[1];
        c[2] = l[2] + B38_P128_INV * (-m[8] + l[8] + h[8]) + 38.0 * h[2];
        c[3] = l[3] + B38_P128_INV * (-m[9] + l[9] + h[9]) + 38.0 * h[3];
        c[4] = l[4] + B38_P128_INV * (-m[10] + l[10] + h[10]) + 38.0 * h[4];
        c[5] = l[5] + 38.0 * h[5];
        c[6] = l[6] + P128 * (-m[0] + l[0] + h[0]) + 38.0 * h[6];
        c[7] = l[7] + P128 * (-m[1] + l[1] + h[1]) + 38.0 * h[7];
        c[8] = l[8] + P128 * (-m[2] + l[2] + h[2]) + 38.0 * h[8];
        c[9] = l[9] + P128 * (-m[3] + l[3] + h[3]) + 38.0 * h[9];
        c[10] = l[10] + P128 * (-m[4] + l[4] + h[4]) + 38.0 * h[10];
        c[11] = P128 * (-m[5] + l[5] + h[5]);

        Fe12(c)
    }

    /// Reference multiplication: 12 rounds of 12 products. No final squeeze.
    ///
    /// Slower than the Karatsuba variant but with a far simpler error
    /// analysis; kept as the cross-check the test suite compares against.
    pub fn mul_schoolbook(&self, rhs: &Self) -> Self {
        let a = &self.0;
        let b = &rhs.0;

        // Precompute the wrapped representations of the high b limbs
        let mut b19 = [0.0f64; 12];
        for (j, limb) in b19.iter_mut().enumerate().skip(1) {
            *limb = WRAP19 * b[j];
        }

        let mut c = [0.0f64; 12];

        // Round 1/12
        for (j, limb) in c.iter_mut().enumerate() {
            *limb = a[0] * b[j];
        }

        // Round 2/12
        c[1] += a[1] * b[0];
        c[2] += a[1] * b[1];
        c[3] += a[1] * b[2];
        c[4] += a[1] * b[3];
        c[5] += a[1] * b[4];
        c[6] += a[1] * b[5];
        c[7] += a[1] * b[6];
        c[8] += a[1] * b[7];
        c[9] += a[1] * b[8];
        c[10] += a[1] * b[9];
        c[11] += a[1] * b[10];
        c[0] += a[1] * b19[11];

        // Round 3/12
        c[2] += a[2] * b[0];
        c[3] += a[2] * b[1];
        c[4] += a[2] * b[2];
        c[5] += a[2] * b[3];
        c[6] += a[2] * b[4];
        c[7] += a[2] * b[5];
        c[8] += a[2] * b[6];
        c[9] += a[2] * b[7];
        c[10] += a[2] * b[8];
        c[11] += a[2] * b[9];
        c[0] += a[2] * b19[10];
        c[1] += a[2] * b19[11];

        // Round 4/12
        c[3] += a[3] * b[0];
        c[4] += a[3] * b[1];
        c[5] += a[3] * b[2];
        c[6] += a[3] * b[3];
        c[7] += a[3] * b[4];
        c[8] += a[3] * b[5];
        c[9] += a[3] * b[6];
        c[10] += a[3] * b[7];
        c[11] += a[3] * b[8];
        c[0] += a[3] * b19[9];
        c[1] += a[3] * b19[10];
        c[2] += a[3] * b19[11];

        // Round 5/12
        c[4] += a[4] * b[0];
        c[5] += a[4] * b[1];
        c[6] += a[4] * b[2];
        c[7] += a[4] * b[3];
        c[8] += a[4] * b[4];
        c[9] += a[4] * b[5];
        c[10] += a[4] * b[6];
        c[11] += a[4] * b[7];
        c[0] += a[4] * b19[8];
        c[1] += a[4] * b19[9];
        c[2] += a[4] * b19[10];
        c[3] += a[4] * b19[11];

        // Round 6/12
        c[5] += a[5] * b[0];
        c[6] += a[5] * b[1];
        c[7] += a[5] * b[2];
        c[8] += a[5] * b[3];
        c[9] += a[5] * b[4];
        c[10] += a[5] * b[5];
        c[11] += a[5] * b[6];
        c[0] += a[5] * b19[7];
        c[1] += a[5] * b19[8];
        c[2] += a[5] * b19[9];
        c[3] += a[5] * b19[10];
        c[4] += a[5] * b19[11];

        // Round 7/12
        c[6] += a[6] * b[0];
        c[7] += a[6] * b[1];
        c[8] += a[6] * b[2];
        c[9] += a[6] * b[3];
        c[10] += a[6] * b[4];
        c[11] += a[6] * b[5];
        c[0] += a[6] * b19[6];
        c[1] += a[6] * b19[7];
        c[2] += a[6] * b19[8];
        c[3] += a[6] * b19[9];
        c[4] += a[6] * b19[10];
        c[5] += a[6] * b19[11];

        // Round 8/12
        c[7] += a[7] * b[0];
        c[8] += a[7] * b[1];
        c[9] += a[7] * b[2];
        c[10] += a[7] * b[3];
        c[11] += a[7] * b[4];
        c[0] += a[7] * b19[5];
        c[1] += a[7] * b19[6];
        c[2] += a[7] * b19[7];
        c[3] += a[7] * b19[8];
        c[4] += a[7] * b19[9];
        c[5] += a[7] * b19[10];
        c[6] += a[7] * b19[11];

        // Round 9/12
        c[8] += a[8] * b[0];
        c[9] += a[8] * b[1];
        c[10] += a[8] * b[2];
        c[11] += a[8] * b[3];
        c[0] += a[8] * b19[4];
        c[1] += a[8] * b19[5];
        c[2] += a[8] * b19[6];
        c[3] += a[8] * b19[7];
        c[4] += a[8] * b19[8];
        c[5] += a[8] * b19[9];
        c[6] += a[8] * b19[10];
        c[7] += a[8] * b19[11];

        // Round 10/12
        c[9] += a[9] * b[0];
        c[10] += a[9] * b[1];
        c[11] += a[9] * b[2];
        c[0] += a[9] * b19[3];
        c[1] += a[9] * b19[4];
        c[2] += a[9] * b19[5];
        c[3] += a[9] * b19[6];
        c[4] += a[9] * b19[7];
        c[5] += a[9] * b19[8];
        c[6] += a[9] * b19[9];
        c[7] += a[9] * b19[10];
        c[8] += a[9] * b19[11];

        // Round 11/12
        c[10] += a[10] * b[0];
        c[11] += a[10] * b[1];
        c[0] += a[10] * b19[2];
        c[1] += a[10] * b19[3];
        c[2] += a[10] * b19[4];
        c[3] += a[10] * b19[5];
        c[4] += a[10] * b19[6];
        c[5] += a[10] * b19[7];
        c[6] += a[10] * b19[8];
        c[7] += a[10] * b19[9];
        c[8] += a[10] * b19[10];
        c[9] += a[10] * b19[11];

        // Round 12/12
        c[11] += a[11] * b[0];
        c[0] += a[11] * b19[1];
        c[1] += a[11] * b19[2];
        c[2] += a[11] * b19[3];
        c[3] += a[11] * b19[4];
        c[4] += a[11] * b19[5];
        c[5] += a[11] * b19[6];
        c[6] += a[11] * b19[7];
        c[7] += a[11] * b19[8];
        c[8] += a[11] * b19[9];
        c[9] += a[11] * b19[10];
        c[10] += a[11] * b19[11];

        Fe12(c)
    }
}

/// Limb-wise addition. No squeeze.
impl Add for Fe12 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut z = [0.0f64; 12];
        for (i, limb) in z.iter_mut().enumerate() {
            *limb = self.0[i] + rhs.0[i];
        }

        Fe12(z)
    }
}

/// Limb-wise subtraction. No squeeze.
impl Sub for Fe12 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut z = [0.0f64; 12];
        for (i, limb) in z.iter_mut().enumerate() {
            *limb = self.0[i] - rhs.0[i];
        }

        Fe12(z)
    }
}

/// Karatsuba field multiplication. No final squeeze.
///
/// The operands split at limb 6 into a low and a high half; the high half is
/// rescaled by 2⁻¹²⁸ (a bit mask for limbs 7–10, a multiplication for limbs
/// 6 and 11). With L = A_lo·B_lo, H = A_hi·B_hi on the rescaled halves and
/// the middle M = (A_lo − A_hi)·(B_hi − B_lo), the result limbs recombine L,
/// M and H with the wrap factor 19 folded into the constants.
impl Mul for Fe12 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let a = &self.0;
        let b = &rhs.0;

        let a_lo = [a[0], a[1], a[2], a[3], a[4], a[5]];
        let b_lo = [b[0], b[1], b[2], b[3], b[4], b[5]];
        let a_hi = [
            P128_INV * a[6],
            unset_bit59(a[7]),
            unset_bit59(a[8]),
            unset_bit59(a[9]),
            unset_bit59(a[10]),
            P128_INV * a[11],
        ];
        let b_hi = [
            P128_INV * b[6],
            unset_bit59(b[7]),
            unset_bit59(b[8]),
            unset_bit59(b[9]),
            unset_bit59(b[10]),
            P128_INV * b[11],
        ];

        let l = mul6(&a_lo, &b_lo);
        let h = mul6(&a_hi, &b_hi);

        let ma = [
            a_lo[0] - a_hi[0],
            a_lo[1] - a_hi[1],
            a_lo[2] - a_hi[2],
            a_lo[3] - a_hi[3],
            a_lo[4] - a_hi[4],
            a_lo[5] - a_hi[5],
        ];
        let mb = [
            b_hi[0] - b_lo[0],
            b_hi[1] - b_lo[1],
            b_hi[2] - b_lo[2],
            b_hi[3] - b_lo[3],
            b_hi[4] - b_lo[4],
            b_hi[5] - b_lo[5],
        ];
        let m = mul6(&ma, &mb);

        let mut c = [0.0f64; 12];
        c[0] = l[0] + 38.0 * (P128_INV * (m[6] + l[6] + h[6]) + h[0]);
        c[1] = l[1] + 38.0 * (P128_INV * (m[7] + l[7] + h[7]) + h[1]);
        c[2] = l[2] + 38.0 * (P128_INV * (m[8] + l[8] + h[8]) + h[2]);
        c[3] = l[3] + 38.0 * (P128_INV * (m[9] + l[9] + h[9]) + h[3]);
        c[4] = l[4] + 38.0 * (P128_INV * (m[10] + l[10] + h[10]) + h[4]);
        c[5] = l[5] + 38.0 * h[5];
        c[6] = l[6] + P128 * (m[0] + l[0] + h[0]) + 38.0 * h[6];
        c[7] = l[7] + P128 * (m[1] + l[1] + h[1]) + 38.0 * h[7];
        c[8] = l[8] + P128 * (m[2] + l[2] + h[2]) + 38.0 * h[8];
        c[9] = l[9] + P128 * (m[3] + l[3] + h[3]) + 38.0 * h[9];
        c[10] = l[10] + P128 * (m[4] + l[4] + h[4]) + 38.0 * h[10];
        c[11] = P128 * (m[5] + l[5] + h[5]);

        Fe12(c)
    }
}
