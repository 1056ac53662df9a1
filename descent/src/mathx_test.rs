use crate::mathx::{factorial, round_to, series_cos, series_e, series_sin, sign};

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => {
        assert!(($lhs - $rhs).abs() < 1.0e-6, "{} vs {}", $lhs, $rhs)
    };
}

#[test]
fn test_factorial() {
    assert_eq!(factorial(0), 1);
    assert_eq!(factorial(1), 1);
    assert_eq!(factorial(5), 120);
    assert_eq!(factorial(12), 479001600);
    assert_eq!(factorial(-3), 1);
}

#[test]
fn test_sign() {
    assert_eq!(sign(3.7), 1);
    assert_eq!(sign(-0.2), -1);
    assert_eq!(sign(0.0), 0);
    assert_eq!(sign(f64::NAN), 0);
}

#[test]
fn test_round_to_truncates() {
    // floor-based, so 2.987654 keeps 2.98 instead of rounding up
    assert_eq!(round_to(2.987654, 2), 2.98);
    assert_eq!(round_to(1.999999, 3), 1.999);
    assert_eq!(round_to(-0.15, 1), -0.2);
}

#[test]
fn test_series_sin() {
    fuzzy_eq!(series_sin(0.0, 15), 0.0);
    fuzzy_eq!(series_sin(1.0, 15), 1.0f64.sin());
    fuzzy_eq!(series_sin(-1.0, 15), -(1.0f64.sin()));
    fuzzy_eq!(series_sin(std::f64::consts::FRAC_PI_2, 15), 1.0);
}

#[test]
fn test_series_cos() {
    fuzzy_eq!(series_cos(0.0, 15), 1.0);
    fuzzy_eq!(series_cos(1.0, 15), 1.0f64.cos());
    fuzzy_eq!(series_cos(std::f64::consts::FRAC_PI_2, 15), 0.0);
}

#[test]
fn test_series_e() {
    assert!((series_e(18) - std::f64::consts::E).abs() < 1.0e-9);
}
