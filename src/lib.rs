//! Constant-time scalar multiplication on Curve13318.
//!
//! This crate implements exception-free scalar multiplication on the
//! short-Weierstrass curve
//!
//! ```text
//! E : y² = x³ − 3·x + 13318   over  𝔽ₚ,  p = 2²⁵⁵ − 19
//! ```
//!
//! Given a 32-byte scalar k and the 64-byte affine encoding of a point P,
//! [`scalarmult`] produces the 64-byte affine encoding of [k]P, with the
//! point at infinity encoded as 64 zero bytes.
//!
//! The focus is on **predictability and auditability**: the group law is the
//! complete Renes–Costello–Batina formula set, so a single instruction
//! sequence handles every input, and all secret-dependent data flows through
//! branch-free, index-free selection primitives.
//!
//! # Module overview
//!
//! - `field`
//!   Arithmetic in 𝔽ₚ in three limb representations: a 12-limb
//!   double-precision form that the group law runs on, a 10-limb integer
//!   form backing the on-curve validation, and a 5-limb radix-2⁵¹ form for
//!   the final inversion and packing, plus the conversions between them.
//!
//! - `group`
//!   Projective group elements (X : Y : Z) with complete addition and
//!   doubling, decoding with curve-membership validation, and encoding that
//!   maps the point at infinity to the all-zero string.
//!
//! - `scalarmult`
//!   The scalar engine: signed 5-bit window recoding, the 16-entry table of
//!   point multiples, constant-time table selection, the ladder, and the
//!   public entry point.
//!
//! # Floating-point contract
//!
//! The hot arithmetic path stores field elements in IEEE-754 doubles and is
//! only correct under round-to-nearest-ties-to-even with floating-point
//! exceptions masked and no contraction of separate operations into fused
//! multiply-adds. Rust never contracts; the rounding mode is pinned for the
//! duration of each call by saving, replacing and restoring the control
//! word, and a perturbed control word is reported as an error rather than a
//! wrong result.
//!
//! # Design goals
//!
//! - No heap allocations; all state is stack-scoped per call
//! - No secret-dependent branches, memory indices or loop bounds
//! - Explicit, dependency-free primitives
//!
//! Timing is the only side channel considered; power, EM and fault
//! resistance are out of scope.

mod consttime;
mod error;
mod fpcw;

pub mod field;
pub mod group;
pub mod scalarmult;

pub use error::Error;
pub use scalarmult::scalarmult;
