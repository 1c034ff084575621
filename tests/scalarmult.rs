use curve13318::Error;
use curve13318::group::GroupElement;
use curve13318::scalarmult::{compute_windows, scalarmult};

/// The point (0, √13318): x³ − 3x + 13318 degenerates to the constant term
/// at x = 0, so its y-coordinate is a square root of 13318.
const GX_HEX: &str = "0000000000000000000000000000000000000000000000000000000000000000";
const GY_HEX: &str = "b32b6af7ceb0c94d89e07ab04c5d1d45be89116769acecace148f3075e80f011";

fn decode32(s: &str) -> [u8; 32] {
    hex::decode(s).unwrap().try_into().unwrap()
}

fn base_point() -> [u8; 64] {
    let mut p = [0u8; 64];
    p[0..32].copy_from_slice(&decode32(GX_HEX));
    p[32..64].copy_from_slice(&decode32(GY_HEX));
    p
}

fn scalar(k: u64) -> [u8; 32] {
    let mut key = [0u8; 32];
    key[0..8].copy_from_slice(&k.to_le_bytes());
    key
}

/// Deterministic bytes for property checks, xorshift-style.
fn scrambled(seed: u64) -> [u8; 32] {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    let mut out = [0u8; 32];
    for byte in out.iter_mut() {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        *byte = state as u8;
    }
    out
}

/// p − y with schoolbook borrows, for building the negation of a point.
fn p_minus(y: &[u8; 32]) -> [u8; 32] {
    let mut p = [0xFFu8; 32];
    p[0] = 0xED;
    p[31] = 0x7F;

    let mut out = [0u8; 32];
    let mut borrow = 0i32;
    for i in 0..32 {
        let d = p[i] as i32 - y[i] as i32 - borrow;
        out[i] = d as u8;
        borrow = (d >> 8) & 1;
    }
    assert_eq!(borrow, 0, "input must be below p");

    out
}

/// Naive left-to-right double-and-add over the group operations. Secretly
/// variable time, which is fine for a test reference.
fn reference_scalarmult(key: &[u8; 32], point: &[u8; 64]) -> [u8; 64] {
    let p = GroupElement::from_bytes(point).unwrap();
    let mut e = *key;
    e[31] &= 0x7F;

    let mut q = GroupElement::NEUTRAL;
    for i in (0..255).rev() {
        q = q.double();
        if (e[i >> 3] >> (i & 7)) & 1 == 1 {
            q = q.add(&p);
        }
    }

    q.to_bytes()
}

#[test]
fn multiplying_by_one_returns_the_point() {
    let p = base_point();
    let out = scalarmult(&scalar(1), &p).unwrap();
    assert_eq!(out, p, "[1]P != P");
}

#[test]
fn multiplying_by_zero_returns_infinity() {
    let out = scalarmult(&scalar(0), &base_point()).unwrap();
    assert_eq!(out, [0u8; 64], "[0]P must be the encoded infinity");
}

#[test]
fn multiplying_by_two_matches_the_group_doubling() {
    let p = base_point();
    let expected = GroupElement::from_bytes(&p).unwrap().double().to_bytes();

    assert_eq!(scalarmult(&scalar(2), &p).unwrap(), expected, "[2]P != double(P)");
}

#[test]
fn point_off_the_curve_is_rejected() {
    let mut bad = [0u8; 64];
    bad[0] = 1;
    bad[32] = 1;

    assert_eq!(
        scalarmult(&scalar(5), &bad),
        Err(Error::InvalidPoint),
        "(1, 1) is not on the curve and must be rejected"
    );
}

#[test]
fn encoded_infinity_maps_to_encoded_infinity() {
    for key in [scalar(1), scalar(5), scrambled(7)] {
        let out = scalarmult(&key, &[0u8; 64]).unwrap();
        assert_eq!(out, [0u8; 64], "[k]O must stay the encoded infinity");
    }
}

#[test]
fn top_bit_of_the_scalar_is_ignored() {
    let p = base_point();
    for seed in [1, 2, 3] {
        let mut key = scrambled(seed);
        key[31] &= 0x7F;
        let low = scalarmult(&key, &p).unwrap();

        key[31] |= 0x80;
        let high = scalarmult(&key, &p).unwrap();

        assert_eq!(low, high, "bit 255 of the key must not matter");
    }
}

#[test]
fn ladder_matches_naive_double_and_add() {
    let p = base_point();

    // All usable key bits set: 51 saturated windows and a long borrow chain
    let mut all_ones = [0xFFu8; 32];
    all_ones[31] = 0x7F;

    let mut keys = vec![scalar(0), scalar(1), scalar(2), scalar(16), scalar(17), all_ones];
    for seed in 10..18 {
        keys.push(scrambled(seed));
    }

    for key in keys {
        assert_eq!(
            scalarmult(&key, &p).unwrap(),
            reference_scalarmult(&key, &p),
            "ladder output diverges from the reference for key {:02x?}",
            key
        );
    }
}

#[test]
fn outputs_are_on_the_curve() {
    let p = base_point();
    for seed in 20..26 {
        let out = scalarmult(&scrambled(seed), &p).unwrap();
        assert!(
            out == [0u8; 64] || GroupElement::from_bytes(&out).is_ok(),
            "scalarmult produced a point off the curve"
        );
    }
}

#[test]
fn consecutive_scalars_differ_by_one_addition() {
    let p = base_point();
    let p_decoded = GroupElement::from_bytes(&p).unwrap();

    for k in [1u64, 2, 3, 15, 16, 17, 31, 32, 1000] {
        let kp = GroupElement::from_bytes(&scalarmult(&scalar(k), &p).unwrap()).unwrap();
        let expected = kp.add(&p_decoded).to_bytes();

        assert_eq!(
            scalarmult(&scalar(k + 1), &p).unwrap(),
            expected,
            "[{}]P + P != [{}]P",
            k,
            k + 1
        );
    }
}

#[test]
fn scalar_multiplication_is_associative() {
    let p = base_point();

    for (a, b) in [(2u64, 3u64), (5, 7), (16, 16), (21, 33)] {
        let bp = scalarmult(&scalar(b), &p).unwrap();
        let abp = scalarmult(&scalar(a), &bp).unwrap();

        assert_eq!(
            abp,
            scalarmult(&scalar(a * b), &p).unwrap(),
            "[{}]([{}]P) != [{}]P",
            a,
            b,
            a * b
        );
    }
}

#[test]
fn scalarmult_commutes_with_point_negation() {
    // [k](-P) must equal -([k]P); negation flips the y-coordinate
    let p = base_point();
    let mut neg_p = p;
    neg_p[32..64].copy_from_slice(&p_minus(&decode32(GY_HEX)));

    for k in [1u64, 2, 7, 100] {
        let out = scalarmult(&scalar(k), &p).unwrap();
        let mut expected = out;
        expected[32..64].copy_from_slice(&p_minus(&out[32..64].try_into().unwrap()));

        assert_eq!(scalarmult(&scalar(k), &neg_p).unwrap(), expected, "[{}](-P) != -[{}]P", k, k);
    }
}

#[test]
fn conditional_negation_is_an_involution() {
    let p = GroupElement::from_bytes(&base_point()).unwrap();

    let mut q = p;
    q.conditional_negate(0);
    assert_eq!(q.to_bytes(), p.to_bytes(), "cneg(P, 0) changed the point");

    q.conditional_negate(1);
    let negated = q.to_bytes();
    assert_ne!(negated, p.to_bytes(), "cneg(P, 1) did not change the point");

    q.conditional_negate(1);
    assert_eq!(q.to_bytes(), p.to_bytes(), "double negation must restore the point");
}

#[test]
fn adding_the_inverse_gives_infinity() {
    let p = GroupElement::from_bytes(&base_point()).unwrap();

    let mut neg_p = p;
    neg_p.conditional_negate(1);

    assert_eq!(p.add(&neg_p).to_bytes(), [0u8; 64], "P + (-P) != O");
    assert_eq!(p.add(&GroupElement::NEUTRAL).to_bytes(), p.to_bytes(), "P + O != P");
    assert_eq!(GroupElement::NEUTRAL.add(&p).to_bytes(), p.to_bytes(), "O + P != P");
}

#[test]
fn window_recoding_reconstructs_the_scalar() {
    let mut keys = vec![scalar(0), scalar(1), scalar(16), scalar(31), scalar(32), [0xFF; 32]];
    for seed in 40..56 {
        keys.push(scrambled(seed));
    }

    for key in keys {
        let mut e = key;
        e[31] &= 0x7F;
        let (w, zeroth_window) = compute_windows(&e);

        // Accumulate sign(w[i])·|w[i]|·2^(5i) plus the zeroth-window bit at
        // 2^255 into byte-wise accumulators; the total must equal the
        // masked key
        let mut acc = [0i32; 33];
        for (i, &cell) in w.iter().enumerate() {
            let carry = ((cell >> 5) ^ (cell >> 4)) & 1;
            let digit = cell as i32 - ((carry as i32) << 5);
            let bit = 5 * (50 - i);
            acc[bit >> 3] += digit << (bit & 7);
        }
        acc[31] += (zeroth_window as i32) << 7;

        let mut carry = 0i32;
        for byte in acc.iter_mut() {
            *byte += carry;
            carry = *byte >> 8;
            *byte &= 0xFF;
        }
        assert_eq!(carry, 0, "recoding overflowed 256 bits");
        assert_eq!(acc[32], 0, "recoding overflowed 256 bits");

        for (i, &byte) in acc[..32].iter().enumerate() {
            assert_eq!(byte as u8, e[i], "window digits do not sum back to the key");
        }
    }
}
