//! Root location for a `Function` on an interval: a brute-force bracketing
//! scan plus the refinement algorithms that narrow brackets to roots.

use crate::function::{Function, Solution};
use descent::mathx::sign;
use descent::EvalErr;

pub const MAX_ITERATIONS: usize = 200;

// fixed sampling step of the bracketing scan; roots of even multiplicity
// and pole sign-flips inside one step are invisible to it
const SCAN_STEP: f64 = 0.5;

// forward-difference step for the numeric derivative
const SLOPE_STEP: f64 = 1e-9;

/// Sample `f` from `a` to `b` inclusive and record a bracket wherever the
/// sample sign changes. Heuristic only: a sample landing exactly on a root
/// reports the flanking half-steps as two brackets.
pub fn brute_force(f: &Function, a: f64, b: f64) -> Result<Vec<Solution>, EvalErr> {
    let mut brackets = Vec::new();
    let mut prev = f.eval(a)?;
    let mut x = a + SCAN_STEP;
    while x <= b {
        let current = f.eval(x)?;
        if sign(prev) != sign(current) {
            brackets.push(Solution::new(x - SCAN_STEP, x, x - 0.5 * SCAN_STEP));
        }
        prev = current;
        x += SCAN_STEP;
    }
    Ok(brackets)
}

/// Bisect every bracket the scan reports. Exhausting the iteration budget
/// forces the current midpoint out as the answer, it is not a failure.
pub fn bisection(f: &Function, a: f64, b: f64, epsilon: f64) -> Result<Vec<Solution>, EvalErr> {
    brute_force(f, a, b)?
        .iter()
        .map(|s| bisect(f, s.a(), s.b(), epsilon, 0))
        .collect()
}

fn bisect(
    f: &Function,
    min: f64,
    max: f64,
    epsilon: f64,
    iterations: usize,
) -> Result<Solution, EvalErr> {
    if iterations == MAX_ITERATIONS {
        return Ok(Solution::new(min, max, (min + max) / 2.0));
    }
    let x = (min + max) / 2.0;
    let fx = f.eval(x)?;
    if fx.abs() < epsilon {
        Ok(Solution::new(min, max, x))
    } else if sign(f.eval(min)?) != sign(fx) {
        bisect(f, min, x, epsilon, iterations + 1)
    } else {
        bisect(f, x, max, epsilon, iterations + 1)
    }
}

/// Newton-Raphson from each bracket's reported point, slope estimated by a
/// forward difference. `None` per seed that runs out the iteration budget.
pub fn newton_raphson(
    f: &Function,
    a: f64,
    b: f64,
    epsilon: f64,
) -> Result<Vec<Option<Solution>>, EvalErr> {
    brute_force(f, a, b)?
        .iter()
        .map(|s| newton_find(f, s.x(), epsilon))
        .collect()
}

fn newton_find(f: &Function, x0: f64, epsilon: f64) -> Result<Option<Solution>, EvalErr> {
    let mut x = x0;
    for _ in 0..MAX_ITERATIONS {
        let fx = f.eval(x)?;
        if fx.abs() < epsilon {
            return Ok(Some(Solution::new(x, x, x)));
        }
        let slope = (f.eval(x + SLOPE_STEP)? - fx) / SLOPE_STEP;
        x -= fx / slope;
    }
    Ok(None)
}

/// Secant iteration seeded with each bracket's endpoints. A vanishing
/// denominator is not guarded: the NaN iterates it spawns simply fail the
/// magnitude check until the budget runs out and the bracket reports `None`.
pub fn secant(
    f: &Function,
    a: f64,
    b: f64,
    epsilon: f64,
) -> Result<Vec<Option<Solution>>, EvalErr> {
    brute_force(f, a, b)?
        .iter()
        .map(|s| secant_find(f, s.a(), s.b(), epsilon))
        .collect()
}

fn secant_find(
    f: &Function,
    x0: f64,
    x1: f64,
    epsilon: f64,
) -> Result<Option<Solution>, EvalErr> {
    let (mut x0, mut x1) = (x0, x1);
    let mut iterations = 0;
    while iterations < MAX_ITERATIONS {
        let fx = f.eval(x1)?;
        if fx.abs() < epsilon {
            return Ok(Some(Solution::new(x0, x1, x1)));
        }
        let fx0 = f.eval(x0)?;
        let next = x1 - (x1 - x0) / (fx - fx0) * fx;
        x0 = x1;
        x1 = next;
        iterations += 1;
    }
    Ok(None)
}

/// Iterate `x := g(x)` from `x0` until two successive iterates agree within
/// `epsilon`. Capped at the shared iteration budget; a non-contractive `g`
/// reports `None` instead of looping forever.
pub fn fixed_point(g: &Function, x0: f64, epsilon: f64) -> Result<Option<Solution>, EvalErr> {
    let mut x0 = x0;
    for _ in 0..MAX_ITERATIONS {
        let x1 = g.eval(x0)?;
        if (x1 - x0).abs() < epsilon {
            return Ok(Some(Solution::new(x0, x1, x1)));
        }
        x0 = x1;
    }
    Ok(None)
}

///////////////////////////////////////////////////////////////////////////////
