//! Group elements of E : y² = x³ − 3x + 13318.
//!
//! The Renes–Costello–Batina addition laws need projective coordinates, so
//! a point is represented by a triple (X : Y : Z) of floating-point field
//! elements, with (X : Y : Z) and (λX : λY : λZ) equal for any λ ≠ 0 and
//! Z = 0 the point at infinity.
//!
//! Both group operations are *complete*: the same instruction sequence is
//! valid for every pair of inputs, including doublings, inverses and the
//! neutral element. That property is what makes the scalar multiplication
//! ladder exception-free.
//!
//! ## Bounds discipline
//!
//! `Fe12::squeeze` guarantees that every processed double is divisible by
//! 2^k and bounded by 1.01·2^21·2^k, with k the limb's offset (0, 22, 43,
//! ...). The precondition is that the squeeze input is divisible by 2^k and
//! bounded by 0.98·2⁵³·2^k.
//!
//! Any product limb produced by the multiplication (uncarried) must stay
//! below ±0.98·2⁵³. The lowest limb absorbs the largest wrap factor, namely
//! ±(11·19 + 1)·x·y = ±210·x·y for x, y the largest relative limbs. So the
//! summed limb bits of two multiplied operands must stay under
//! 0.98·2⁵³/210 ≈ 2^45.2, and this module keeps every product under
//! ±1.1·2⁴⁵: multiplying 2²¹ values by 2²⁴ values is fine, 2²³·2²³ is not.
//! The bound annotations next to each step track this.

use crate::Error;
use crate::field::convert;
use crate::field::fe10::Fe10;
use crate::field::fe12::Fe12;

/// A point on the curve in projective coordinates over [`Fe12`].
#[derive(Clone, Copy, Debug)]
pub struct GroupElement {
    pub x: Fe12,
    pub y: Fe12,
    pub z: Fe12,
}

impl GroupElement {
    /// The all-zero triple (0 : 0 : 0).
    ///
    /// Not a point on the curve; this is the seed value the constant-time
    /// OR-blends in the scalar engine build selected points from.
    pub const ZERO: Self = GroupElement {
        x: Fe12::ZERO,
        y: Fe12::ZERO,
        z: Fe12::ZERO,
    };

    /// The neutral element (0 : 1 : 0).
    pub const NEUTRAL: Self = GroupElement {
        x: Fe12::ZERO,
        y: Fe12::ONE,
        z: Fe12::ZERO,
    };

    /// Parse a 64-byte `X ‖ Y` affine encoding into a point on the curve.
    ///
    /// The all-zero encoding decodes to the point at infinity (0 : 1 : 0).
    /// Any other encoding must satisfy the curve equation; coordinates at or
    /// above p are accepted and reduce implicitly.
    pub fn from_bytes(bytes: &[u8; 64]) -> Result<Self, Error> {
        let x = Fe12::from_bytes(bytes[0..32].try_into().unwrap());
        let mut y = Fe12::from_bytes(bytes[32..64].try_into().unwrap());

        // The point at infinity is encoded as (0, 0)
        let mut infinity = 1u64;
        for limb in x.0.iter().chain(y.0.iter()) {
            infinity &= (limb.to_bits() == 0) as u64;
        }

        // Force y to 1 for the point at infinity, and z to 1 for all other
        // points
        y.0[0] += infinity as f64;
        let mut z = Fe12::ZERO;
        z.0[0] = (1 - infinity) as f64;

        if infinity == 0 && !affine_point_on_curve(&x, &y) {
            return Err(Error::InvalidPoint);
        }

        Ok(GroupElement { x, y, z })
    }

    /// Serialize into the 64-byte `X ‖ Y` affine encoding.
    ///
    /// The point at infinity comes out as 64 zero bytes without any special
    /// casing: inverting Z = 0 yields 0, so both affine coordinates collapse
    /// to zero.
    pub fn to_bytes(&self) -> [u8; 64] {
        // Parallel arithmetic is over; move to the packing representation
        let x = convert::fe12_to_fe51(&self.x);
        let y = convert::fe12_to_fe51(&self.y);
        let z = convert::fe12_to_fe51(&self.z);

        let z_inverse = z.invert();
        let x_affine = x.mul(&z_inverse);
        let y_affine = y.mul(&z_inverse);

        let mut output = [0u8; 64];
        output[0..32].copy_from_slice(&x_affine.pack());
        output[32..64].copy_from_slice(&y_affine.pack());

        output
    }

    /// Constant-time conditional negation. `c` must be exactly 0 or 1.
    ///
    /// Negating a projective point negates its Y coordinate; multiplying
    /// every Y limb by 1 − 2c does that without a branch.
    pub fn conditional_negate(&mut self, c: u8) {
        let n = 1.0 - 2.0 * (c as f64);
        self.y = self.y.mul_small(n);
    }

    /// Constant-time conditional replacement of all three coordinates.
    /// `mask` must be all-ones or all-zero.
    pub fn conditional_move(&mut self, rhs: &Self, mask: u64) {
        self.x.conditional_move(&rhs.x, mask);
        self.y.conditional_move(&rhs.y, mask);
        self.z.conditional_move(&rhs.z, mask);
    }

    /// Complete point addition.
    ///
    /// This is exactly Algorithm 4 of the Renes–Costello–Batina addition
    /// laws for a = −3, with squeezes inserted wherever a following
    /// multiplication could otherwise exceed the ±1.1·2⁴⁵ product bound.
    /// The inputs must be squeezed; the result is squeezed.
    pub fn add(&self, rhs: &Self) -> Self {
        let (x1, y1, z1) = (self.x, self.y, self.z);
        let (x2, y2, z2) = (rhs.x, rhs.y, rhs.z);

        // Assume forall v in {x1, y1, z1, x2, y2, z2}: |v| ≤ 1.01 * 2^21
        let mut t0 = x1 * x2; // |t0| ≤ 1.68 * 2^49
        let mut t1 = y1 * y2; // |t1| ≤ 1.68 * 2^49
        let mut t2 = z1 * z2; // |t2| ≤ 1.68 * 2^49
        let mut t3 = x1 + y1; // |t3| ≤ 1.01 * 2^22
        let mut t4 = x2 + y2; // |t4| ≤ 1.01 * 2^22
        t3 = t3 * t4; // |t3| ≤ 1.68 * 2^51
        t4 = t0 + t1; // |t4| ≤ 1.68 * 2^50
        t3 = t3 - t4; // |t3| ≤ 1.26 * 2^52
        t4 = y1 + z1; // |t4| ≤ 1.01 * 2^22
        let mut x3 = y2 + z2; // |x3| ≤ 1.01 * 2^22
        t4 = t4 * x3; // |t4| ≤ 1.01 * 2^23
        x3 = t1 + t2; // |x3| ≤ 1.26 * 2^51
        t4 = t4 - x3; // |t4| ≤ 1.27 * 2^51
        x3 = x1 + z1; // |x3| ≤ 1.01 * 2^22
        let mut y3 = x2 + z2; // |y3| ≤ 1.01 * 2^22
        x3 = x3 * y3; // |x3| ≤ 1.68 * 2^51
        y3 = t0 + t2; // |y3| ≤ 1.68 * 2^50
        y3 = x3 - y3; // |y3| ≤ 1.26 * 2^52
        y3.squeeze(); // |y3| ≤ 1.01 * 2^21
        t0.squeeze(); // |t0| ≤ 1.01 * 2^21
        t1.squeeze(); // |t1| ≤ 1.01 * 2^21
        t2.squeeze(); // |t2| ≤ 1.01 * 2^21
        let mut z3 = t2.mul_b(); // |z3| ≤ 1.65 * 2^34
        x3 = y3 - z3; // |x3| ≤ 1.66 * 2^34
        z3 = x3 + x3; // |z3| ≤ 1.66 * 2^35
        x3 = x3 + z3; // |x3| ≤ 1.25 * 2^36
        z3 = t1 - x3; // |z3| ≤ 1.26 * 2^36
        x3 = t1 + x3; // |x3| ≤ 1.26 * 2^36
        y3 = y3.mul_b(); // |y3| ≤ 1.65 * 2^34
        t1 = t2 + t2; // |t1| ≤ 1.01 * 2^22
        t2 = t1 + t2; // |t2| ≤ 1.52 * 2^22
        y3 = y3 - t2; // |y3| ≤ 1.66 * 2^34
        y3 = y3 - t0; // |y3| ≤ 1.67 * 2^34
        t1 = y3 + y3; // |t1| ≤ 1.67 * 2^35
        y3 = t1 + y3; // |y3| ≤ 1.26 * 2^36
        t1 = t0 + t0; // |t1| ≤ 1.01 * 2^22
        t0 = t1 + t0; // |t0| ≤ 1.52 * 2^22
        t0 = t0 - t2; // |t0| ≤ 1.52 * 2^23
        t4.squeeze(); // |t4| ≤ 1.01 * 2^21
        x3.squeeze(); // |x3| ≤ 1.01 * 2^21
        y3.squeeze(); // |y3| ≤ 1.01 * 2^21
        z3.squeeze(); // |z3| ≤ 1.01 * 2^21
        t0.squeeze(); // |t0| ≤ 1.01 * 2^21
        t1 = t4 * y3; // |t1| ≤ 1.68 * 2^49
        t2 = t0 * y3; // |t2| ≤ 1.26 * 2^52
        y3 = x3 * z3; // |y3| ≤ 1.68 * 2^49
        t3.squeeze(); // |t3| ≤ 1.01 * 2^21
        y3 = y3 + t2; // |y3| ≤ 1.47 * 2^52
        x3 = x3 * t3; // |x3| ≤ 1.68 * 2^49
        x3 = x3 - t1; // |x3| ≤ 1.68 * 2^50
        z3 = z3 * t4; // |z3| ≤ 1.68 * 2^49
        t1 = t3 * t0; // |t1| ≤ 1.68 * 2^49
        z3 = z3 + t1; // |z3| ≤ 1.68 * 2^50

        // Squeeze the result for next time
        x3.squeeze();
        y3.squeeze();
        z3.squeeze();

        GroupElement {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Complete point doubling.
    ///
    /// The doubling counterpart (their Algorithm 6 adapted to a = −3) under
    /// the same bounds and squeeze discipline as [`GroupElement::add`].
    pub fn double(&self) -> Self {
        let (x, y, z) = (self.x, self.y, self.z);

        // Assume forall v in {x, y, z}: |v| ≤ 1.01 * 2^21
        let mut t0 = x.square(); // |t0| ≤ 1.68 * 2^49
        let mut t1 = y.square(); // |t1| ≤ 1.68 * 2^49
        let mut t2 = z.square(); // |t2| ≤ 1.68 * 2^49
        let mut t3 = x * y; // |t3| ≤ 1.68 * 2^49
        t3 = t3 + t3; // |t3| ≤ 1.68 * 2^50
        t2.squeeze(); // |t2| ≤ 1.01 * 2^21
        t3.squeeze(); // |t3| ≤ 1.01 * 2^21
        let mut z3 = x * z; // |z3| ≤ 1.68 * 2^49
        z3 = z3 + z3; // |z3| ≤ 1.68 * 2^50
        let mut y3 = t2.mul_b(); // |y3| ≤ 1.65 * 2^34
        y3 = y3 - z3; // |y3| ≤ 1.69 * 2^50
        let mut x3 = y3 + y3; // |x3| ≤ 1.69 * 2^51
        y3 = x3 + y3; // |y3| ≤ 1.27 * 2^52
        x3 = t1 - y3; // |x3| ≤ 1.48 * 2^52
        y3 = t1 + y3; // |y3| ≤ 1.48 * 2^52
        x3.squeeze(); // |x3| ≤ 1.01 * 2^21
        y3.squeeze(); // |y3| ≤ 1.01 * 2^21
        z3.squeeze(); // |z3| ≤ 1.01 * 2^21
        y3 = x3 * y3; // |y3| ≤ 1.68 * 2^49
        x3 = x3 * t3; // |x3| ≤ 1.68 * 2^49
        t3 = t2 + t2; // |t3| ≤ 1.01 * 2^22
        t2 = t2 + t3; // |t2| ≤ 1.52 * 2^22
        z3 = z3.mul_b(); // |z3| ≤ 1.65 * 2^34
        z3 = z3 - t2; // |z3| ≤ 1.66 * 2^34
        z3 = z3 - t0; // |z3| ≤ 1.69 * 2^49
        t3 = z3 + z3; // |t3| ≤ 1.69 * 2^50
        z3 = z3 + t3; // |z3| ≤ 1.27 * 2^51
        t3 = t0 + t0; // |t3| ≤ 1.68 * 2^50
        t0 = t3 + t0; // |t0| ≤ 1.26 * 2^51
        t0 = t0 - t2; // |t0| ≤ 1.27 * 2^51
        t0.squeeze(); // |t0| ≤ 1.01 * 2^21
        z3.squeeze(); // |z3| ≤ 1.01 * 2^21
        t0 = t0 * z3; // |t0| ≤ 1.68 * 2^49
        y3 = y3 + t0; // |y3| ≤ 1.69 * 2^49
        t0 = y * z; // |t0| ≤ 1.68 * 2^49
        t0 = t0 + t0; // |t0| ≤ 1.68 * 2^50
        t0.squeeze(); // |t0| ≤ 1.01 * 2^21
        z3 = t0 * z3; // |z3| ≤ 1.68 * 2^50
        x3 = x3 - z3; // |x3| ≤ 1.69 * 2^50
        t1.squeeze(); // |t1| ≤ 1.01 * 2^21
        z3 = t0 * t1; // |z3| ≤ 1.68 * 2^49
        z3 = z3 + z3; // |z3| ≤ 1.68 * 2^50
        z3 = z3 + z3; // |z3| ≤ 1.68 * 2^51

        // Squeeze the result, otherwise the next addition or doubling gets
        // into trouble
        x3.squeeze();
        y3.squeeze();
        z3.squeeze();

        GroupElement {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}

/// Check the affine curve equation y² = x³ − 3x + 13318.
///
/// Runs in the 10-limb integer field on the decoded (public) coordinates.
/// The subtraction of 3x is arranged as three additions of 2p − x so that no
/// limb can underflow.
pub(crate) fn affine_point_on_curve(x: &Fe12, y: &Fe12) -> bool {
    let x = convert::fe12_to_fe10(x);
    let y = convert::fe12_to_fe10(y);

    let mut lhs = y.square(); // y^2
    let t0 = x.square(); // x^2
    let mut rhs = t0 * x; // x^3
    let mut t0 = Fe10::ZERO;
    t0.add2p();
    let t0 = t0 - x; // -x
    rhs = rhs + t0; // x^3 - x
    rhs = rhs + t0; // x^3 - 2*x
    rhs = rhs + t0; // x^3 - 3*x
    rhs.add_b(); // x^3 - 3*x + 13318
    rhs.carry();
    lhs.add2p(); // still y^2
    let mut lhs = lhs - rhs; // 0 or not 0, mod p
    lhs.carry();

    lhs.freeze().nonzero() == 0
}
