use descent::{EvalErr, Evaluator};

/// A plottable, solvable function of `x`: a name, the defining expression
/// text, and the display attributes the front end toggles. The definition
/// never changes after construction.
#[derive(Clone, Debug)]
pub struct Function {
    name: String,
    definition: String,
    pub color: u32,
    pub active: bool,
}

impl Function {
    pub fn new(name: &str, definition: &str) -> Function {
        Function {
            name: name.to_string(),
            definition: definition.to_string(),
            color: 0x000000,
            active: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    // a fresh evaluator per call keeps concurrent solves independent
    pub fn eval(&self, x: f64) -> Result<f64, EvalErr> {
        let mut ev = Evaluator::new();
        ev.set_var("x", x);
        ev.eval(&self.definition)
    }
}

/// An approximate root `x` and the interval `[a, b]` it was pinned in.
/// Immutable once constructed; algorithms that fail to converge produce no
/// `Solution` at all rather than a sentinel.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Solution {
    a: f64,
    b: f64,
    x: f64,
}

impl Solution {
    pub fn new(a: f64, b: f64, x: f64) -> Solution {
        Solution { a, b, x }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn x(&self) -> f64 {
        self.x
    }
}
