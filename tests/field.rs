use curve13318::field::convert;
use curve13318::field::fe10::Fe10;
use curve13318::field::fe12::Fe12;

/// y-coordinate of the point (0, √13318) on the curve.
const SQRT_B_HEX: &str = "b32b6af7ceb0c94d89e07ab04c5d1d45be89116769acecace148f3075e80f011";

fn decode32(s: &str) -> [u8; 32] {
    hex::decode(s).unwrap().try_into().unwrap()
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

/// Canonical bytes of a squeezed 12-limb element, through the integer path.
fn canonical(z: &Fe12) -> [u8; 32] {
    convert::fe12_to_fe10(z).to_bytes()
}

fn test_vectors() -> Vec<[u8; 32]> {
    let mut v = vec![
        [0u8; 32],
        {
            let mut one = [0u8; 32];
            one[0] = 1;
            one
        },
        [0xFF; 32],
        // only the low half of the limbs populated
        {
            let mut low = [0u8; 32];
            low[..16].copy_from_slice(&[0xFF; 16]);
            low
        },
        // only the high half of the limbs populated
        {
            let mut high = [0u8; 32];
            high[16..].copy_from_slice(&[0xFF; 16]);
            high
        },
        decode32(SQRT_B_HEX),
    ];
    for seed in 1..=12 {
        v.push(scrambled(seed));
    }

    v
}

#[test]
fn karatsuba_multiplication_matches_schoolbook() {
    for a_bytes in test_vectors() {
        for b_bytes in test_vectors() {
            let a = Fe12::from_bytes(&a_bytes);
            let b = Fe12::from_bytes(&b_bytes);

            let mut karatsuba = a * b;
            karatsuba.squeeze();
            let mut schoolbook = a.mul_schoolbook(&b);
            schoolbook.squeeze();

            assert_eq!(
                canonical(&karatsuba),
                canonical(&schoolbook),
                "karatsuba and schoolbook disagree"
            );
        }
    }
}

#[test]
fn squaring_matches_schoolbook_multiplication() {
    for bytes in test_vectors() {
        let a = Fe12::from_bytes(&bytes);

        let mut square = a.square();
        square.squeeze();
        let mut product = a.mul_schoolbook(&a);
        product.squeeze();

        assert_eq!(
            canonical(&square),
            canonical(&product),
            "dedicated squaring disagrees with a*a"
        );
    }
}

#[test]
fn squeeze_is_idempotent_on_squeezed_values() {
    for a_bytes in test_vectors() {
        let a = Fe12::from_bytes(&a_bytes);
        let b = Fe12::from_bytes(&scrambled(99));

        // A freshly parsed element and an unsqueezed product both meet the
        // squeeze precondition
        for mut z in [a, a * b, a.square()] {
            z.squeeze();
            let once = z.0.map(f64::to_bits);
            z.squeeze();
            let twice = z.0.map(f64::to_bits);

            assert_eq!(once, twice, "second squeeze changed the limbs");
        }
    }
}

#[test]
fn fe12_roundtrip_is_canonical() {
    // Values below p come back out unchanged
    for mut bytes in test_vectors() {
        bytes[31] &= 0x7E; // force the value below p
        let z = Fe12::from_bytes(&bytes);
        assert_eq!(canonical(&z), bytes, "reduced value did not round-trip");
    }

    // 2^256 - 1 reduces to 37
    let mut expected = [0u8; 32];
    expected[0] = 37;
    assert_eq!(canonical(&Fe12::from_bytes(&[0xFF; 32])), expected);
}

#[test]
fn fe10_parse_agrees_with_the_float_path() {
    for bytes in test_vectors() {
        assert_eq!(
            Fe10::from_bytes(&bytes).to_bytes(),
            canonical(&Fe12::from_bytes(&bytes)),
            "integer and float parsers disagree"
        );
    }
}

#[test]
fn freeze_canonicalizes_values_at_and_above_p() {
    let p_bytes = {
        let mut b = [0xFFu8; 32];
        b[0] = 0xED;
        b[31] = 0x7F;
        b
    };
    let mut p_plus_one = p_bytes;
    p_plus_one[0] += 1;

    let zero = [0u8; 32];
    let mut one = [0u8; 32];
    one[0] = 1;
    let mut thirty_seven = [0u8; 32];
    thirty_seven[0] = 37;

    assert_eq!(Fe10::from_bytes(&p_bytes).to_bytes(), zero, "p must freeze to 0");
    assert_eq!(Fe10::from_bytes(&p_plus_one).to_bytes(), one, "p + 1 must freeze to 1");
    assert_eq!(Fe10::from_bytes(&[0xFF; 32]).to_bytes(), thirty_seven);
    assert_eq!(Fe10::from_bytes(&zero).to_bytes(), zero);
    assert_eq!(Fe10::from_bytes(&one).to_bytes(), one);
}

#[test]
fn fe10_multiplicative_identities() {
    for bytes in test_vectors() {
        let x = Fe10::from_bytes(&bytes);

        assert_eq!((x * Fe10::ONE).to_bytes(), x.to_bytes(), "x * 1 != x");
        assert_eq!((x * Fe10::ZERO).to_bytes(), [0u8; 32], "x * 0 != 0");
    }
}

#[test]
fn fe10_inversion_round_trips() {
    let mut one = [0u8; 32];
    one[0] = 1;

    for bytes in test_vectors() {
        let x = Fe10::from_bytes(&bytes);
        if x.to_bytes() == [0u8; 32] {
            // 0 has no inverse; the chain maps it to 0
            assert_eq!(x.invert().to_bytes(), [0u8; 32]);
            continue;
        }

        assert_eq!((x * x.invert()).to_bytes(), one, "x * x^-1 != 1");
    }
}

#[test]
fn fe51_pack_agrees_with_the_integer_path() {
    for bytes in test_vectors() {
        let z = Fe12::from_bytes(&bytes);

        assert_eq!(
            convert::fe12_to_fe51(&z).pack(),
            canonical(&z),
            "radix-51 packing disagrees with the 10-limb path"
        );
    }
}

#[test]
fn fe51_inversion_round_trips() {
    let mut one = [0u8; 32];
    one[0] = 1;

    for bytes in test_vectors() {
        let z = convert::fe12_to_fe51(&Fe12::from_bytes(&bytes));
        if z.pack() == [0u8; 32] {
            assert_eq!(z.invert().pack(), [0u8; 32], "0^-1 must stay 0");
            continue;
        }

        assert_eq!(z.mul(&z.invert()).pack(), one, "z * z^-1 != 1");
    }
}
