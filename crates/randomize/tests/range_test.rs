//! Range properties of one-shot and default-range sampling.

mod common;

use common::TRIALS;
use randomize::RandomizeError;

#[test]
fn test_integral_draws_stay_within_bounds() {
    let provider = common::provider();

    for _ in 0..TRIALS {
        let v = provider.sample_once(-50_i32, 50).unwrap();
        assert!((-50..=50).contains(&v), "{v} escaped [-50, 50]");

        let v = provider.sample_once(0_u64, 10).unwrap();
        assert!(v <= 10, "{v} escaped [0, 10]");

        let v = provider.sample_once(i8::MIN, -100).unwrap();
        assert!((i8::MIN..=-100).contains(&v), "{v} escaped [-128, -100]");

        let v = provider
            .sample_once(i128::from(i64::MIN) * 4, i128::from(i64::MAX) * 4)
            .unwrap();
        assert!(v >= i128::from(i64::MIN) * 4 && v <= i128::from(i64::MAX) * 4);
    }
}

#[test]
#[allow(clippy::approx_constant)]
fn test_float_draws_stay_within_bounds() {
    let provider = common::provider();

    for _ in 0..TRIALS {
        let v = provider.sample_once(3.14, 42.0).unwrap();
        assert!((3.14..=42.0).contains(&v), "{v} escaped [3.14, 42.0]");

        let v = provider.sample_once(-1.0e-3_f32, 1.0e-3).unwrap();
        assert!((-1.0e-3..=1.0e-3).contains(&v), "{v} escaped [-1e-3, 1e-3]");
    }
}

#[test]
fn test_die_roll_is_roughly_uniform() {
    const ROLLS: usize = 100_000;
    let provider = common::provider();
    let mut counts = [0_usize; 6];

    for _ in 0..ROLLS {
        let face = provider.sample_once(1_usize, 6).unwrap();
        assert!((1..=6).contains(&face), "rolled {face}");
        counts[face - 1] += 1;
    }

    let expected = ROLLS / 6;
    let tolerance = expected / 10;
    for (face, &count) in counts.iter().enumerate() {
        assert!(
            count.abs_diff(expected) <= tolerance,
            "face {} came up {count} times, expected {expected} ± {tolerance}",
            face + 1
        );
    }
}

#[test]
fn test_default_i16_stays_within_type() {
    let provider = common::provider();

    for _ in 0..TRIALS {
        let v = i32::from(provider.sample_default::<i16>());
        assert!((-32_768..=32_767).contains(&v));
    }
}

#[test]
#[allow(clippy::cast_precision_loss)]
fn test_default_float_stays_within_i64_span() {
    let provider = common::provider();

    for _ in 0..TRIALS {
        let v: f64 = provider.sample_default();
        assert!(v >= i64::MIN as f64 && v <= i64::MAX as f64);
    }
}

#[test]
fn test_default_u8_reaches_both_ends() {
    let provider = common::provider();
    let seen: std::collections::HashSet<u8> =
        (0..TRIALS).map(|_| provider.sample_default::<u8>()).collect();

    assert!(seen.contains(&0));
    assert!(seen.contains(&u8::MAX));
}

#[test]
#[allow(clippy::approx_constant)]
fn test_inverted_range_is_an_error_for_every_kind() {
    let provider = common::provider();

    assert!(matches!(
        provider.sample_once(10_u16, 1),
        Err(RandomizeError::InvalidRange { .. })
    ));
    assert!(matches!(
        provider.sample_once(42.0, 3.14),
        Err(RandomizeError::InvalidRange { .. })
    ));
}

#[test]
fn test_non_finite_float_bounds_are_rejected() {
    let provider = common::provider();

    assert!(matches!(
        provider.sample_once(f32::NEG_INFINITY, 0.0),
        Err(RandomizeError::NonFiniteRange { .. })
    ));
    assert!(matches!(
        provider.sample_once(f64::NAN, 1.0),
        Err(RandomizeError::NonFiniteRange { .. })
    ));
}

#[test]
fn test_widest_finite_float_spans_are_sampled() {
    let provider = common::provider();

    for _ in 0..TRIALS {
        let v = provider.sample_once(0.0_f64, f64::MAX).unwrap();
        assert!((0.0..=f64::MAX).contains(&v), "{v} escaped [0, MAX]");

        let v = provider.sample_once(-f64::MAX / 2.0, f64::MAX / 2.0).unwrap();
        assert!(v.abs() <= f64::MAX / 2.0, "{v} escaped [-MAX/2, MAX/2]");

        let v = provider.sample_once(f64::MIN, f64::MAX).unwrap();
        assert!(v.is_finite(), "{v} escaped [MIN, MAX]");

        let v = provider.sample_once(f32::MIN, f32::MAX).unwrap();
        assert!(v.is_finite(), "{v} escaped [MIN, MAX]");
    }
}

#[test]
fn test_every_integer_type_samples_within_bounds() {
    macro_rules! check_types {
        ($($ty:ty),* $(,)?) => {$(
            let provider = common::provider();
            let sampler = provider.make_sampler::<$ty>(3, 9).unwrap();
            for v in sampler.take(1_000) {
                assert!((3..=9).contains(&v), "{v} escaped [3, 9] as {}", stringify!($ty));
            }

            let bit = provider.sample_const::<$ty, 0, 1>().unwrap();
            assert!(bit <= 1, "{bit} escaped [0, 1] as {}", stringify!($ty));
        )*};
    }

    check_types!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize);
}
