//! Integer field element with 5 limbs in radix 2⁵¹.
//!
//! Used only at the very end of a scalar multiplication: inverting the
//! projective Z coordinate and packing the affine coordinates into bytes.
//! Limbs are allowed some slack above 51 bits; [`Fe51::pack`] performs the
//! full canonical reduction.

const LOW51: u64 = 0x7_FFFF_FFFF_FFFF;

/// Field element modulo 2²⁵⁵ − 19 in radix 2⁵¹ (5 unsigned limbs).
#[derive(Clone, Copy, Debug)]
pub struct Fe51(pub [u64; 5]);

impl Fe51 {
    /// Field multiplication with 128-bit intermediates.
    ///
    /// Terms that overflow the five limbs wrap around with factor 19, since
    /// 2²⁵⁵ ≡ 19 (mod p).
    pub fn mul(&self, rhs: &Self) -> Self {
        let (a0, a1, a2, a3, a4) = (
            self.0[0] as u128,
            self.0[1] as u128,
            self.0[2] as u128,
            self.0[3] as u128,
            self.0[4] as u128,
        );
        let (b0, b1, b2, b3, b4) = (
            rhs.0[0] as u128,
            rhs.0[1] as u128,
            rhs.0[2] as u128,
            rhs.0[3] as u128,
            rhs.0[4] as u128,
        );

        let b1_19 = 19 * b1;
        let b2_19 = 19 * b2;
        let b3_19 = 19 * b3;
        let b4_19 = 19 * b4;

        let mut t0 = a0 * b0 + a1 * b4_19 + a2 * b3_19 + a3 * b2_19 + a4 * b1_19;
        let mut t1 = a0 * b1 + a1 * b0 + a2 * b4_19 + a3 * b3_19 + a4 * b2_19;
        let mut t2 = a0 * b2 + a1 * b1 + a2 * b0 + a3 * b4_19 + a4 * b3_19;
        let mut t3 = a0 * b3 + a1 * b2 + a2 * b1 + a3 * b0 + a4 * b4_19;
        let mut t4 = a0 * b4 + a1 * b3 + a2 * b2 + a3 * b1 + a4 * b0;

        let carry = t0 >> 51;
        t0 &= LOW51 as u128;
        t1 += carry;
        let carry = t1 >> 51;
        t1 &= LOW51 as u128;
        t2 += carry;
        let carry = t2 >> 51;
        t2 &= LOW51 as u128;
        t3 += carry;
        let carry = t3 >> 51;
        t3 &= LOW51 as u128;
        t4 += carry;
        let carry = t4 >> 51;
        t4 &= LOW51 as u128;
        t0 += carry * 19;
        let carry = t0 >> 51;
        t0 &= LOW51 as u128;
        t1 += carry;

        Fe51([t0 as u64, t1 as u64, t2 as u64, t3 as u64, t4 as u64])
    }

    /// Square this field element.
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Square this field element `n` times in a row.
    pub fn n_square(&self, n: usize) -> Self {
        (0..n).fold(*self, |acc, _| acc.square())
    }

    /// Invert modulo 2²⁵⁵ − 19 by Fermat's little theorem.
    ///
    /// Same addition chain as the 10-limb inversion. Inverting zero yields
    /// zero, which is exactly what lets the point at infinity (Z = 0)
    /// serialize to the all-zero encoding.
    pub fn invert(&self) -> Self {
        let z = *self;

        let z2 = z.square(); // 2
        let t = z2.square().square(); // 8
        let z9 = t.mul(&z); // 9
        let z11 = z9.mul(&z2); // 11
        let t = z11.square(); // 22
        let z2_5_0 = t.mul(&z9); // 2^5 - 2^0

        let t = z2_5_0.n_square(5); // 2^10 - 2^5
        let z2_10_0 = t.mul(&z2_5_0); // 2^10 - 2^0

        let t = z2_10_0.n_square(10); // 2^20 - 2^10
        let z2_20_0 = t.mul(&z2_10_0); // 2^20 - 2^0

        let t = z2_20_0.n_square(20); // 2^40 - 2^20
        let t = t.mul(&z2_20_0); // 2^40 - 2^0

        let t = t.n_square(10); // 2^50 - 2^10
        let z2_50_0 = t.mul(&z2_10_0); // 2^50 - 2^0

        let t = z2_50_0.n_square(50); // 2^100 - 2^50
        let z2_100_0 = t.mul(&z2_50_0); // 2^100 - 2^0

        let t = z2_100_0.n_square(100); // 2^200 - 2^100
        let t = t.mul(&z2_100_0); // 2^200 - 2^0

        let t = t.n_square(50); // 2^250 - 2^50
        let t = t.mul(&z2_50_0); // 2^250 - 2^0

        let t = t.n_square(5); // 2^255 - 2^5
        t.mul(&z11) // 2^255 - 21
    }

    /// Fully reduce and serialize into 32 little-endian bytes.
    pub fn pack(&self) -> [u8; 32] {
        let mut h = self.0;
        let mut carry;

        // Two carry passes bring the value below 2^255 + small
        for _ in 0..2 {
            for i in 0..4 {
                carry = h[i] >> 51;
                h[i] &= LOW51;
                h[i + 1] += carry;
            }
            carry = h[4] >> 51;
            h[4] &= LOW51;
            h[0] += carry * 19;
        }

        // h < 2^255; subtract p exactly when h >= p. The probe rides a
        // virtual +19 through the limbs: h >= p iff h + 19 >= 2^255.
        let mut q = (h[0] + 19) >> 51;
        for limb in h.iter().skip(1) {
            q = (limb + q) >> 51;
        }

        h[0] += 19 * q;
        carry = h[0] >> 51;
        h[0] &= LOW51;
        for i in 1..4 {
            h[i] += carry;
            carry = h[i] >> 51;
            h[i] &= LOW51;
        }
        h[4] += carry;
        h[4] &= LOW51;

        // Pack 5×51 bits into 4 words
        let t0 = h[0] | (h[1] << 51);
        let t1 = (h[1] >> 13) | (h[2] << 38);
        let t2 = (h[2] >> 26) | (h[3] << 25);
        let t3 = (h[3] >> 39) | (h[4] << 12);

        let mut output = [0u8; 32];
        output[0..8].copy_from_slice(&t0.to_le_bytes());
        output[8..16].copy_from_slice(&t1.to_le_bytes());
        output[16..24].copy_from_slice(&t2.to_le_bytes());
        output[24..32].copy_from_slice(&t3.to_le_bytes());

        output
    }
}
