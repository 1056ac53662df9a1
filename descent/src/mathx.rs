//! Series and integer helpers the evaluator leans on instead of libm.

/// n * (n-1) * ... * 1, with 0! = 1! = 1. No guard for negative or large
/// `n`: the product silently wraps past 20!.
pub fn factorial(n: i64) -> i64 {
    let mut f: i64 = 1;
    let mut n = n;
    while n > 1 {
        f = f.wrapping_mul(n);
        n -= 1;
    }
    f
}

pub fn sign(v: f64) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Truncate `v` at 10^precision resolution, toward negative infinity.
/// Display rounding for solver output, not round-to-nearest.
pub fn round_to(v: f64, precision: i32) -> f64 {
    let p = 10f64.powi(precision);
    (v * p).floor() / p
}

// sin(x) = x^1/1! - x^3/3! + x^5/5! - x^7/7! + ...
pub fn series_sin(x: f64, terms: u32) -> f64 {
    let (mut sum, mut sign) = (0.0, 1.0);
    let mut n = 1;
    for _ in 0..terms {
        sum += sign * x.powi(n) / factorial(n as i64) as f64;
        n += 2;
        sign = -sign;
    }
    sum
}

// cos(x) = x^0/0! - x^2/2! + x^4/4! - x^6/6! + ...
// the loop bound is inclusive, so `terms` buys one extra term here
pub fn series_cos(x: f64, terms: u32) -> f64 {
    let (mut sum, mut sign) = (0.0, 1.0);
    let mut n = 0;
    for _ in 0..=terms {
        sum += sign * x.powi(n) / factorial(n as i64) as f64;
        n += 2;
        sign = -sign;
    }
    sum
}

// e = 1/0! + 1/1! + 1/2! + 1/3! + ...
pub fn series_e(terms: u32) -> f64 {
    (0..terms).map(|n| 1.0 / factorial(n as i64) as f64).sum()
}
