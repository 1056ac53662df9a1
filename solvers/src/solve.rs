use crate::findroot;
use crate::function::{Function, Solution};
use descent::mathx;
use descent::{EvalErr, Evaluator};

/// Tolerance used when the caller's epsilon doesn't parse.
pub const DEFAULT_EPSILON: f64 = 1e-3;

const DISPLAY_PRECISION: i32 = 6;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Method {
    BestSuited,
    BruteForce,
    Bisection,
    NewtonRaphson,
    Secant,
    FixedPoint,
    AitkenAcceleration,
}

impl Method {
    pub fn from_name(name: &str) -> Option<Method> {
        match name.to_lowercase().as_str() {
            "best" | "bestsuited" => Some(Method::BestSuited),
            "brute" | "bruteforce" => Some(Method::BruteForce),
            "bisection" => Some(Method::Bisection),
            "newton" | "newtonraphson" => Some(Method::NewtonRaphson),
            "secant" => Some(Method::Secant),
            "fixed" | "fixedpoint" => Some(Method::FixedPoint),
            "aitken" => Some(Method::AitkenAcceleration),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum SolveError {
    /// The definition doesn't evaluate; distinct from "no roots found".
    BadExpression(EvalErr),
    /// The selector names a method nothing backs yet.
    Unimplemented(Method),
}

/// Run `method` for `f` over `[a, b]`: one entry per bracket (or per seed
/// for the non-bracketing methods), `None` marking a search that ran out
/// its iteration budget without converging.
pub fn solve(
    f: &Function,
    method: Method,
    a: f64,
    b: f64,
    epsilon: f64,
) -> Result<Vec<Option<Solution>>, SolveError> {
    if let Err(e) = Evaluator::new().check(f.definition()) {
        return Err(SolveError::BadExpression(e));
    }
    let roots = match method {
        Method::BestSuited | Method::BruteForce => {
            findroot::brute_force(f, a, b).map(|s| s.into_iter().map(Some).collect())
        }
        Method::Bisection => {
            findroot::bisection(f, a, b, epsilon).map(|s| s.into_iter().map(Some).collect())
        }
        Method::NewtonRaphson => findroot::newton_raphson(f, a, b, epsilon),
        Method::Secant => findroot::secant(f, a, b, epsilon),
        // the expression is taken as the iteration function, seeded at the
        // interval's left endpoint
        Method::FixedPoint => findroot::fixed_point(f, a, epsilon).map(|s| vec![s]),
        Method::AitkenAcceleration => return Err(SolveError::Unimplemented(method)),
    };
    roots.map_err(SolveError::BadExpression)
}

/// Epsilon as typed by the user; anything unparsable falls back to the
/// default instead of failing the request.
pub fn parse_epsilon(text: &str) -> f64 {
    text.trim().parse().unwrap_or(DEFAULT_EPSILON)
}

pub fn format_solution(root: &Option<Solution>) -> String {
    match root {
        Some(s) => format!("{}", mathx::round_to(s.x(), DISPLAY_PRECISION)),
        None => format!("NOT FOUND"),
    }
}

///////////////////////////////////////////////////////////////////////////////
