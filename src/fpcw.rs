//! Saving and restoring the floating-point control word.
//!
//! The 12-limb field arithmetic relies on IEEE-754 double precision with
//! round-to-nearest and all exceptions masked. The caller may have left the
//! control register in another state, so the scalar multiplication replaces
//! it on entry and restores it on every exit path. No floating-point
//! exceptions are expected during a correct run; keeping them masked ensures
//! that a fault cannot interrupt the computation and open a timing oracle.

/// The control word the computation runs under: round-to-nearest, all sticky
/// exception flags cleared, all exceptions masked.
#[cfg(target_arch = "x86_64")]
const APP_MXCSR: u32 = 0x1F80;

/// The precision sticky flag. Inexact results are routine in this arithmetic,
/// so the flag is ignored when checking for perturbation.
#[cfg(target_arch = "x86_64")]
const PRECISION_FLAG: u32 = 1 << 5;

/// Replaces the control word with the value the algorithm expects and
/// returns the previous value, to be handed back to [`restore`] later.
#[cfg(target_arch = "x86_64")]
pub(crate) fn replace() -> u32 {
    use core::arch::x86_64::{_mm_getcsr, _mm_setcsr};

    unsafe {
        let prev = _mm_getcsr();
        _mm_setcsr(APP_MXCSR);
        prev
    }
}

/// Writes the saved control word back.
///
/// Returns `true` when the register was still in the state installed by
/// [`replace`], up to the precision flag. `false` means some other code
/// changed the floating-point environment mid-computation, and the caller
/// must discard the result.
#[cfg(target_arch = "x86_64")]
pub(crate) fn restore(saved: u32) -> bool {
    use core::arch::x86_64::{_mm_getcsr, _mm_setcsr};

    unsafe {
        let current = _mm_getcsr();
        _mm_setcsr(saved);
        current & !PRECISION_FLAG == APP_MXCSR
    }
}

// On targets without an MXCSR register the default floating-point
// environment is already round-to-nearest with exceptions masked, and there
// is no supported way for safe Rust code to change it mid-process; both
// operations degrade to no-ops.

#[cfg(not(target_arch = "x86_64"))]
pub(crate) fn replace() -> u32 {
    0
}

#[cfg(not(target_arch = "x86_64"))]
pub(crate) fn restore(_saved: u32) -> bool {
    true
}
