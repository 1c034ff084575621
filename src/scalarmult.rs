//! Constant-time scalar multiplication.
//!
//! The scalar is consumed through a signed 5-bit fixed-window ladder:
//!
//! 1. Precompute the sixteen multiples 1P, 2P, ..., 16P.
//! 2. Recode the 256-bit scalar into 51 windows of 5 bits each, rippling a
//!    signed-digit carry so every window maps to a digit in [−16, 16].
//! 3. Walk the windows from the most significant down: five doublings, one
//!    constant-time table selection, one complete addition per window.
//!
//! Every step that touches the scalar or the accumulator is branch-free and
//! index-free with respect to secret data: the table selection reads all
//! sixteen entries on every window, the sign is applied by a masked
//! negation, and the initial window lands in the accumulator through
//! conditional moves.

use crate::Error;
use crate::consttime::{equal_mask, mask_from_bit};
use crate::field::fe12::Fe12;
use crate::fpcw;
use crate::group::GroupElement;

/// Fill the precomputation table with 1P, 2P, ..., 16P.
///
/// The fixed doubling/addition pattern reaches every multiple in 7
/// doublings and 8 additions.
fn precompute_table(p: &GroupElement) -> [GroupElement; 16] {
    let mut t = [GroupElement::ZERO; 16];

    t[0] = *p;
    t[1] = t[0].double();
    t[2] = t[1].add(&t[0]);
    t[3] = t[1].double();
    t[4] = t[3].add(&t[0]);
    t[5] = t[2].double();
    t[6] = t[5].add(&t[0]);
    t[7] = t[3].double();
    t[8] = t[7].add(&t[0]);
    t[9] = t[4].double();
    t[10] = t[9].add(&t[0]);
    t[11] = t[5].double();
    t[12] = t[11].add(&t[0]);
    t[13] = t[6].double();
    t[14] = t[13].add(&t[0]);
    t[15] = t[7].double();

    t
}

/// The signed-digit carry of a 6-bit window cell: 1 exactly when the cell
/// value is at least 16, i.e. when the window borrows 32 from the next one
/// and turns negative.
#[inline(always)]
fn window_carry(w: u8) -> u8 {
    ((w >> 5) ^ (w >> 4)) & 1
}

/// Decode the scalar bytes into 51 window cells and ripple the
/// signed-recoding carry.
///
/// `w[50]` holds the lowest 5 scalar bits and `w[0]` the highest five
/// (bits 250–254; bit 255 is never read). After the ripple each cell is a
/// 6-bit "value plus carry" in [0, 32] representing the signed digit
/// `cell − 32·carry(cell)` in [−16, 15], so that
///
/// ```text
/// k = Σ_i digit(w[i]) · 2^(5·(50−i)) + zeroth_window · 2^255
/// ```
///
/// The second return value is that zeroth-window bit: the carry out of
/// `w[0]`, produced by the same formula as every other carry.
pub fn compute_windows(e: &[u8; 32]) -> ([u8; 51], u8) {
    let mut w = [0u8; 51];

    for (i, cell) in w.iter_mut().enumerate() {
        let bit = 5 * (50 - i);
        let byte = bit >> 3;
        let shift = bit & 7;

        let mut raw = (e[byte] as u16) >> shift;
        if byte + 1 < 32 {
            raw |= (e[byte + 1] as u16) << (8 - shift);
        }
        *cell = (raw & 0x1F) as u8;
    }

    for i in (0..50).rev() {
        w[i] += window_carry(w[i + 1]);
    }
    let zeroth_window = window_carry(w[0]);

    (w, zeroth_window)
}

/// Select `digit(cell) · P` from the table in constant time.
///
/// Decodes the 6-bit cell into a sign bit and a magnitude in [0, 16], ORs
/// the matching table entry into a zeroed point under an equality mask
/// (touching every lane of all sixteen entries), blends in the neutral
/// element for magnitude 0, and finally applies the sign with a masked
/// negation.
fn select(table: &[GroupElement; 16], cell: u8) -> GroupElement {
    let sign = window_carry(cell);

    let neg = (sign as i32).wrapping_neg();
    let digit = (cell as i32) - ((sign as i32) << 5);
    let magnitude = ((digit ^ neg) - neg) as u64;

    let mut r = GroupElement::ZERO;
    for (slot, entry) in table.iter().enumerate() {
        r.conditional_move(entry, equal_mask(slot as u64 + 1, magnitude));
    }
    r.y.conditional_move(&Fe12::ONE, equal_mask(0, magnitude));
    r.conditional_negate(sign);

    r
}

/// Run the double-and-add ladder over all 51 windows.
///
/// Each window is worth five doublings; the seed digit in `q` sits five
/// doublings above window 0, at weight 2^255.
fn ladder(q: &mut GroupElement, w: &[u8; 51], table: &[GroupElement; 16]) {
    for &cell in w.iter() {
        for _ in 0..5 {
            *q = q.double();
        }
        let r = select(table, cell);
        *q = q.add(&r);
    }
}

/// Multiply the curve point encoded in `point` by the scalar `key`.
///
/// `key` is a 32-byte little-endian integer; its top bit is cleared before
/// use. `point` is the 64-byte `X ‖ Y` affine encoding, with all-zero
/// encoding the point at infinity. On success the result is returned in the
/// same encoding.
///
/// The computation runs in time independent of the scalar. The
/// floating-point control word is replaced on entry and restored on every
/// exit path; if some other code perturbed it mid-run, the result is
/// withheld and [`Error::FpModePerturbed`] returned.
pub fn scalarmult(key: &[u8; 32], point: &[u8; 64]) -> Result<[u8; 64], Error> {
    // Prologue: save the floating-point control word
    let saved_fpcw = fpcw::replace();

    let mut e = *key;
    e[31] &= 0x7F; // The 255'th bit of the key is not used

    let p = match GroupElement::from_bytes(point) {
        Ok(p) => p,
        Err(err) => {
            fpcw::restore(saved_fpcw);
            return Err(err);
        }
    };

    let table = precompute_table(&p);
    let (w, zeroth_window) = compute_windows(&e);

    // Seed the accumulator: the neutral element, or 1P when the recoding
    // carried out of the top window
    let mut q = GroupElement::ZERO;
    q.y.conditional_move(&Fe12::ONE, mask_from_bit(1 - zeroth_window as u64));
    q.conditional_move(&table[0], mask_from_bit(zeroth_window as u64));

    ladder(&mut q, &w, &table);
    let out = q.to_bytes();

    // Epilogue: restore the control word and check it was not tampered with
    if !fpcw::restore(saved_fpcw) {
        return Err(Error::FpModePerturbed);
    }

    Ok(out)
}
