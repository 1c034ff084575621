//! Integer field element with 10 limbs.
//!
//! The layout is "radix 2^25.5" as in the NEON/ref10 family of Curve25519
//! implementations: alternating 26-bit and 25-bit limbs, so that an element
//! `t` represents the integer
//!
//! ```text
//! t[0] + 2^26·t[1] + 2^51·t[2] + 2^77·t[3] + 2^102·t[4] + ... + 2^230·t[9]
//! ```
//!
//! This representation backs the on-curve validation of decoded points and
//! the canonical reduction used to compare field elements. It never touches
//! secret data: everything secret runs through the floating-point
//! representation instead.
//!
//! After [`Fe10::carry`], even-indexed limbs are at most 2²⁶ and odd-indexed
//! limbs at most 2²⁵. Inputs to the multiplication must keep every limb
//! below 2⁶³/(19·10) so the 64-bit accumulators cannot overflow.

use std::ops::{Add, Mul, Sub};

use super::{load_3, load_4};

/// The curve constant b = 13318 of E : y² = x³ − 3x + b.
pub(crate) const CURVE_B: u64 = 13318;

/// Limb 0 of 2p; the remaining limbs alternate between the B25 and B26
/// constants below. Adding these keeps a following subtraction positive.
const P2_0: u64 = 0x07FF_FFDA;
const P2_REST_B25: u64 = 0x03FF_FFFE;
const P2_REST_B26: u64 = 0x07FF_FFFE;

const MASK25: u64 = 0xFFFF_FFFF_FE00_0000;
const MASK26: u64 = 0xFFFF_FFFF_FC00_0000;
const MASK51: u64 = 0xFFF8_0000_0000_0000;

const LOW51: u64 = (1 << 51) - 1;

/// Field element modulo 2²⁵⁵ − 19 in radix 2^25.5 (10 unsigned limbs).
#[derive(Clone, Copy, Debug)]
pub struct Fe10(pub [u64; 10]);

/// Fully reduced field element in radix 2⁵¹: the unique representative in
/// `[0, p)`. Produced only by [`Fe10::freeze`].
#[derive(Clone, Copy, Debug)]
pub struct Fe10Frozen(pub [u64; 5]);

impl Fe10 {
    /// The additive identity (0).
    pub const ZERO: Self = Fe10([0u64; 10]);

    /// The multiplicative identity (1).
    pub const ONE: Self = Fe10([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Parse a 32-byte little-endian encoding.
    ///
    /// All 256 input bits are consumed; bit 255 is folded back into limb 0
    /// through the identity 2²⁵⁵ ≡ 19, so encodings of values at or above p
    /// decode to the congruent reduced element.
    pub fn from_bytes(input: &[u8; 32]) -> Self {
        let mut z = Fe10([
            load_4(&input[0..]),
            load_3(&input[4..]) << 6,
            load_3(&input[7..]) << 5,
            load_3(&input[10..]) << 3,
            load_3(&input[13..]) << 2,
            load_4(&input[16..]),
            load_3(&input[20..]) << 7,
            load_3(&input[23..]) << 5,
            load_3(&input[26..]) << 4,
            load_3(&input[29..]) << 2,
        ]);
        z.carry();

        z
    }

    /// Serialize into the canonical 32-byte little-endian form.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.freeze().to_bytes()
    }

    /// Add 2p limb-wise.
    ///
    /// Afterwards every limb is at least 2²⁶ (even index) resp. 2²⁵ (odd
    /// index), so a following limb-wise subtraction of a carried element
    /// cannot underflow.
    pub fn add2p(&mut self) {
        self.0[0] += P2_0;
        for (i, limb) in self.0.iter_mut().enumerate().skip(1) {
            *limb += if i % 2 == 0 { P2_REST_B26 } else { P2_REST_B25 };
        }
    }

    /// Add the curve constant 13318 to limb 0.
    pub fn add_b(&mut self) {
        self.0[0] += CURVE_B;
    }

    /// Multiply by the curve constant 13318 and carry.
    pub fn mul_b(&self) -> Self {
        let mut z = Fe10(self.0.map(|limb| limb * CURVE_B));
        z.carry();

        z
    }

    /// Square this field element.
    pub fn square(self) -> Self {
        self * self
    }

    /// Square this field element `n` times in a row.
    pub fn n_square(self, n: usize) -> Self {
        (0..n).fold(self, |acc, _| acc.square())
    }

    /// Carry-ripple back into the 2^25.5 radix bounds.
    ///
    /// Two carry chains are interleaved to shorten the dependency path
    /// (7 rounds):
    ///
    /// ```text
    /// a: z[0] -> z[1] -> z[2] -> z[3] -> z[4] -> z[5] -> z[6]
    /// b: z[5] -> z[6] -> z[7] -> z[8] -> z[9] -> z[0] -> z[1]
    /// ```
    ///
    /// The wrap from limb 9 multiplies the shifted-out value by 19. Inputs
    /// must fit `[0, 2^63 - 1]`; afterwards even limbs are at most 2²⁶ and
    /// odd limbs at most 2²⁵.
    pub fn carry(&mut self) {
        let z = &mut self.0;
        let mut t0;
        let mut t1;

        t0 = z[0] & MASK26; // Round 1a
        z[0] ^= t0;
        z[1] += t0 >> 26;
        t1 = z[5] & MASK25; // Round 1b
        z[5] ^= t1;
        z[6] += t1 >> 25;
        t0 = z[1] & MASK25; // Round 2a
        z[1] ^= t0;
        z[2] += t0 >> 25;
        t1 = z[6] & MASK26; // Round 2b
        z[6] ^= t1;
        z[7] += t1 >> 26;
        t0 = z[2] & MASK26; // Round 3a
        z[2] ^= t0;
        z[3] += t0 >> 26;
        t1 = z[7] & MASK25; // Round 3b
        z[7] ^= t1;
        z[8] += t1 >> 25;
        t0 = z[3] & MASK25; // Round 4a
        z[3] ^= t0;
        z[4] += t0 >> 25;
        t1 = z[8] & MASK26; // Round 4b
        z[8] ^= t1;
        z[9] += t1 >> 26;
        t0 = z[4] & MASK26; // Round 5a
        z[4] ^= t0;
        z[5] += t0 >> 26;
        t1 = z[9] & MASK25; // Round 5b
        z[9] ^= t1;
        z[0] += 19 * (t1 >> 25);
        t0 = z[5] & MASK25; // Round 6a
        z[5] ^= t0;
        z[6] += t0 >> 25;
        t1 = z[0] & MASK26; // Round 6b
        z[0] ^= t1;
        z[1] += t1 >> 26;
        t0 = z[6] & MASK26; // Round 7a
        z[6] ^= t0;
        z[7] += t0 >> 26;
        t1 = z[1] & MASK25; // Round 7b
        z[1] ^= t1;
        z[2] += t1 >> 25;
    }

    /// Invert modulo 2²⁵⁵ − 19 by Fermat's little theorem.
    ///
    /// Computes `self^(p − 2)` with the standard Curve25519 addition chain.
    /// Inverting zero yields zero.
    pub fn invert(&self) -> Self {
        let z = *self;

        let z2 = z.square(); // 2
        let t = z2.square().square(); // 8
        let z9 = t * z; // 9
        let z11 = z9 * z2; // 11
        let t = z11.square(); // 22
        let z2_5_0 = t * z9; // 2^5 - 2^0

        let t = z2_5_0.n_square(5); // 2^10 - 2^5
        let z2_10_0 = t * z2_5_0; // 2^10 - 2^0

        let t = z2_10_0.n_square(10); // 2^20 - 2^10
        let z2_20_0 = t * z2_10_0; // 2^20 - 2^0

        let t = z2_20_0.n_square(20); // 2^40 - 2^20
        let t = t * z2_20_0; // 2^40 - 2^0

        let t = t.n_square(10); // 2^50 - 2^10
        let z2_50_0 = t * z2_10_0; // 2^50 - 2^0

        let t = z2_50_0.n_square(50); // 2^100 - 2^50
        let z2_100_0 = t * z2_50_0; // 2^100 - 2^0

        let t = z2_100_0.n_square(100); // 2^200 - 2^100
        let t = t * z2_100_0; // 2^200 - 2^0

        let t = t.n_square(50); // 2^250 - 2^50
        let t = t * z2_50_0; // 2^250 - 2^0

        let t = t.n_square(5); // 2^255 - 2^5
        t * z11 // 2^255 - 21
    }

    /// Reduce into the unique representative in `[0, p)`.
    ///
    /// [`Fe10::carry`] only guarantees a value in `[0, 2²⁵⁶)`, so up to two
    /// subtractions of p may be required. Both are performed
    /// unconditionally, masked by a probe of whether the running value still
    /// reaches p.
    pub fn freeze(&self) -> Fe10Frozen {
        let z = &self.0;
        let mut t;

        // Done with multiplications; repack into radix 2^51
        let mut z0 = z[0] + (z[1] << 26);
        let mut z1 = z[2] + (z[3] << 26);
        let mut z2 = z[4] + (z[5] << 26);
        let mut z3 = z[6] + (z[7] << 26);
        let mut z4 = z[8] + (z[9] << 26);

        // Normalize the low limbs; z4 keeps the bits at 2^255 and up
        t = z0 & MASK51;
        z0 ^= t;
        z1 += t >> 51;
        t = z1 & MASK51;
        z1 ^= t;
        z2 += t >> 51;
        t = z2 & MASK51;
        z2 ^= t;
        z3 += t >> 51;
        t = z3 & MASK51;
        z3 ^= t;
        z4 += t >> 51;

        for _ in 0..2 {
            // Probe: does z + 19 reach 2^255, i.e. is z still >= p?
            let mut carry = 19u64;
            carry = (carry + z0) >> 51;
            carry = (carry + z1) >> 51;
            carry = (carry + z2) >> 51;
            carry = (carry + z3) >> 51;
            let top = z4 + carry; // (z + 19) >> 204

            let do_reduce = crate::consttime::mask_from_bit(((top >> 51) | (top >> 52)) & 1);

            // Maybe subtract p: add 19 and toggle the 2^255 bit. When the
            // bit was clear the toggle adds 2^256 - p instead; the wrapped
            // 2^256 is dropped below.
            z4 ^= do_reduce & (1 << 51);
            z0 += do_reduce & 19;

            t = z0 & MASK51;
            z0 ^= t;
            z1 += t >> 51;
            t = z1 & MASK51;
            z1 ^= t;
            z2 += t >> 51;
            t = z2 & MASK51;
            z2 ^= t;
            z3 += t >> 51;
            t = z3 & MASK51;
            z3 ^= t;
            z4 += t >> 51;
            z4 &= (1 << 52) - 1;
        }

        Fe10Frozen([z0, z1, z2, z3, z4 & LOW51])
    }
}

impl Fe10Frozen {
    /// Bitwise OR of all limbs; zero exactly for the zero element.
    ///
    /// Frozen elements are canonical, so this is a plain equality test with
    /// zero. The caller folds the result without branching on it.
    pub fn nonzero(&self) -> u64 {
        self.0.iter().fold(0, |acc, &limb| acc | limb)
    }

    /// Serialize into 32 little-endian bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        let z = &self.0;

        let t0 = z[0] | (z[1] << 51);
        let t1 = (z[1] >> 13) | (z[2] << 38);
        let t2 = (z[2] >> 26) | (z[3] << 25);
        let t3 = (z[3] >> 39) | (z[4] << 12);

        let mut output = [0u8; 32];
        output[0..8].copy_from_slice(&t0.to_le_bytes());
        output[8..16].copy_from_slice(&t1.to_le_bytes());
        output[16..24].copy_from_slice(&t2.to_le_bytes());
        output[24..32].copy_from_slice(&t3.to_le_bytes());

        output
    }
}

/// Limb-wise addition without reduction.
///
/// The caller is responsible for carrying before limbs can overflow a
/// multiplication precondition.
impl Add for Fe10 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut z = [0u64; 10];
        for (i, limb) in z.iter_mut().enumerate() {
            *limb = self.0[i] + rhs.0[i];
        }

        Fe10(z)
    }
}

/// Limb-wise subtraction without reduction.
///
/// This does *not* work if any limb underflows; ensure it cannot by first
/// raising the minuend with [`Fe10::add2p`].
impl Sub for Fe10 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut z = [0u64; 10];
        for (i, limb) in z.iter_mut().enumerate() {
            *limb = self.0[i] - rhs.0[i];
        }

        Fe10(z)
    }
}

/// Schoolbook field multiplication.
///
/// Limbs that land past 2²⁵⁵ wrap around scaled by 19; products where both
/// factors sit on an odd (25-bit) limb pick up an extra factor 2 from the
/// half-integer radix. The accumulators are carried before returning.
impl Mul for Fe10 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let f = &self.0;
        let g = &rhs.0;

        // Precompute (19·g[1], ..., 19·g[9])
        let mut g19 = [0u64; 10];
        for (i, limb) in g19.iter_mut().enumerate().skip(1) {
            *limb = 19 * g[i];
        }

        // Precompute (2·f[1], 2·f[3], ..., 2·f[9])
        let mut f2 = [0u64; 10];
        for (i, limb) in f2.iter_mut().enumerate().skip(1).step_by(2) {
            *limb = 2 * f[i];
        }

        let mut h = [0u64; 10];

        // Round 1/10
        for (i, limb) in h.iter_mut().enumerate() {
            *limb = f[0] * g[i];
        }

        // Round 2/10
        h[1] += f[1] * g[0];
        h[2] += f2[1] * g[1];
        h[3] += f[1] * g[2];
        h[4] += f2[1] * g[3];
        h[5] += f[1] * g[4];
        h[6] += f2[1] * g[5];
        h[7] += f[1] * g[6];
        h[8] += f2[1] * g[7];
        h[9] += f[1] * g[8];
        h[0] += f2[1] * g19[9];

        // Round 3/10
        h[2] += f[2] * g[0];
        h[3] += f[2] * g[1];
        h[4] += f[2] * g[2];
        h[5] += f[2] * g[3];
        h[6] += f[2] * g[4];
        h[7] += f[2] * g[5];
        h[8] += f[2] * g[6];
        h[9] += f[2] * g[7];
        h[0] += f[2] * g19[8];
        h[1] += f[2] * g19[9];

        // Round 4/10
        h[3] += f[3] * g[0];
        h[4] += f2[3] * g[1];
        h[5] += f[3] * g[2];
        h[6] += f2[3] * g[3];
        h[7] += f[3] * g[4];
        h[8] += f2[3] * g[5];
        h[9] += f[3] * g[6];
        h[0] += f2[3] * g19[7];
        h[1] += f[3] * g19[8];
        h[2] += f2[3] * g19[9];

        // Round 5/10
        h[4] += f[4] * g[0];
        h[5] += f[4] * g[1];
        h[6] += f[4] * g[2];
        h[7] += f[4] * g[3];
        h[8] += f[4] * g[4];
        h[9] += f[4] * g[5];
        h[0] += f[4] * g19[6];
        h[1] += f[4] * g19[7];
        h[2] += f[4] * g19[8];
        h[3] += f[4] * g19[9];

        // Round 6/10
        h[5] += f[5] * g[0];
        h[6] += f2[5] * g[1];
        h[7] += f[5] * g[2];
        h[8] += f2[5] * g[3];
        h[9] += f[5] * g[4];
        h[0] += f2[5] * g19[5];
        h[1] += f[5] * g19[6];
        h[2] += f2[5] * g19[7];
        h[3] += f[5] * g19[8];
        h[4] += f2[5] * g19[9];

        // Round 7/10
        h[6] += f[6] * g[0];
        h[7] += f[6] * g[1];
        h[8] += f[6] * g[2];
        h[9] += f[6] * g[3];
        h[0] += f[6] * g19[4];
        h[1] += f[6] * g19[5];
        h[2] += f[6] * g19[6];
        h[3] += f[6] * g19[7];
        h[4] += f[6] * g19[8];
        h[5] += f[6] * g19[9];

        // Round 8/10
        h[7] += f[7] * g[0];
        h[8] += f2[7] * g[1];
        h[9] += f[7] * g[2];
        h[0] += f2[7] * g19[3];
        h[1] += f[7] * g19[4];
        h[2] += f2[7] * g19[5];
        h[3] += f[7] * g19[6];
        h[4] += f2[7] * g19[7];
        h[5] += f[7] * g19[8];
        h[6] += f2[7] * g19[9];

        // Round 9/10
        h[8] += f[8] * g[0];
        h[9] += f[8] * g[1];
        h[0] += f[8] * g19[2];
        h[1] += f[8] * g19[3];
        h[2] += f[8] * g19[4];
        h[3] += f[8] * g19[5];
        h[4] += f[8] * g19[6];
        h[5] += f[8] * g19[7];
        h[6] += f[8] * g19[8];
        h[7] += f[8] * g19[9];

        // Round 10/10
        h[9] += f[9] * g[0];
        h[0] += f2[9] * g19[1];
        h[1] += f[9] * g19[2];
        h[2] += f2[9] * g19[3];
        h[3] += f[9] * g19[4];
        h[4] += f2[9] * g19[5];
        h[5] += f[9] * g19[6];
        h[6] += f2[9] * g19[7];
        h[7] += f[9] * g19[8];
        h[8] += f2[9] * g19[9];

        let mut z = Fe10(h);
        z.carry();

        z
    }
}
