use std::collections::HashMap;
use std::f64::consts;

use crate::mathx;
use lexer::{Token, Tokenizer};

#[derive(Clone, Debug, PartialEq)]
pub enum EvalErr {
    NoExpression,
    LastTokenNotNull,
    InvalidExpression,
    InvalidNumber,
    InvalidFunction(String),
    UnknownVariable(String),
}

const SERIES_TERMS: u32 = 15;
const EPS: f64 = 1e-8;

// one token of lookahead over the tokenizer; all per-evaluation state
// lives here so an Evaluator can be shared across calls
struct Cursor {
    lexer: Tokenizer,
    token: Option<Token>,
}

impl Cursor {
    fn new(expr: &str) -> Self {
        let mut lexer = Tokenizer::new(expr);
        let token = lexer.next();
        Cursor { lexer, token }
    }

    fn bump(&mut self) {
        self.token = self.lexer.next();
    }
}

/// Evaluates expressions over `+ - * / % ^ !`, parentheses, the constants
/// `pi`/`e`, and the function set the tokenizer recognizes. Variables are
/// bound with `set_var` before evaluation.
pub struct Evaluator {
    vars: HashMap<String, f64>,
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator { vars: HashMap::new() }
    }

    pub fn set_var(&mut self, var: &str, val: f64) {
        self.vars.insert(var.to_string(), val);
    }

    pub fn eval(&self, expr: &str) -> Result<f64, EvalErr> {
        self.eval_mode(expr, false)
    }

    /// Grammar check only: variables resolve to 0.0 so an expression can be
    /// vetted before any binding exists. The numeric result is discarded.
    pub fn validate(&self, expr: &str) -> bool {
        self.check(expr).is_ok()
    }

    /// Like `validate` but surfaces which error the expression trips.
    pub fn check(&self, expr: &str) -> Result<f64, EvalErr> {
        self.eval_mode(expr, true)
    }

    fn eval_mode(&self, expr: &str, validating: bool) -> Result<f64, EvalErr> {
        let mut cur = Cursor::new(expr);
        if cur.token.is_none() {
            return Err(EvalErr::NoExpression);
        }
        let result = self.sum_and_subtraction(&mut cur, validating)?;
        if cur.token.is_some() {
            return Err(EvalErr::LastTokenNotNull);
        }
        Ok(result)
    }

    fn sum_and_subtraction(&self, cur: &mut Cursor, validating: bool) -> Result<f64, EvalErr> {
        let mut result = self.product_and_division(cur, validating)?;
        while let Some(Token::Delim(op @ ('+' | '-'))) = cur.token {
            cur.bump();
            let rhs = self.product_and_division(cur, validating)?;
            if op == '+' {
                result += rhs;
            } else {
                result -= rhs;
            }
        }
        Ok(result)
    }

    fn product_and_division(&self, cur: &mut Cursor, validating: bool) -> Result<f64, EvalErr> {
        let mut result = self.exponent_and_factorial(cur, validating)?;
        while let Some(Token::Delim(op @ ('*' | '/' | '%'))) = cur.token {
            cur.bump();
            let rhs = self.exponent_and_factorial(cur, validating)?;
            match op {
                '*' => result *= rhs,
                '/' => result /= rhs,
                _ => result %= rhs,
            }
        }
        Ok(result)
    }

    // '^' is right associative and applies to the already-signed base;
    // at most one postfix '!', taken on the integer truncation
    fn exponent_and_factorial(&self, cur: &mut Cursor, validating: bool) -> Result<f64, EvalErr> {
        let result = self.signed(cur, validating)?;
        if let Some(Token::Delim('^')) = cur.token {
            cur.bump();
            let power = self.exponent_and_factorial(cur, validating)?;
            Ok(result.powf(power))
        } else if let Some(Token::Delim('!')) = cur.token {
            cur.bump();
            Ok(mathx::factorial(result as i64) as f64)
        } else {
            Ok(result)
        }
    }

    fn signed(&self, cur: &mut Cursor, validating: bool) -> Result<f64, EvalErr> {
        let mut negate = false;
        if let Some(Token::Delim(op @ ('+' | '-'))) = cur.token {
            cur.bump();
            negate = op == '-';
        }
        let result = self.sub_expression(cur, validating)?;
        Ok(if negate { -result } else { result })
    }

    fn sub_expression(&self, cur: &mut Cursor, validating: bool) -> Result<f64, EvalErr> {
        if cur.token == Some(Token::Delim('(')) {
            cur.bump();
            let result = self.sum_and_subtraction(cur, validating)?;
            if cur.token != Some(Token::Delim(')')) {
                return Err(EvalErr::InvalidExpression);
            }
            cur.bump();
            Ok(result)
        } else {
            self.atom(cur, validating)
        }
    }

    fn atom(&self, cur: &mut Cursor, validating: bool) -> Result<f64, EvalErr> {
        match cur.token.clone() {
            Some(Token::Number(text)) => {
                let value = match text.parse::<f64>() {
                    Ok(v) => v,
                    Err(_) => return Err(EvalErr::InvalidNumber),
                };
                cur.bump();
                Ok(value)
            }
            Some(Token::Variable(name)) => {
                let value = if validating {
                    0.0
                } else {
                    match self.vars.get(&name) {
                        Some(v) => *v,
                        None => return Err(EvalErr::UnknownVariable(name)),
                    }
                };
                cur.bump();
                Ok(value)
            }
            Some(Token::Constant(name)) => {
                cur.bump();
                Ok(match name.as_str() {
                    "pi" => consts::PI,
                    _ => consts::E,
                })
            }
            Some(Token::Function(name)) => {
                cur.bump();
                if cur.token != Some(Token::Delim('(')) {
                    return Err(EvalErr::InvalidFunction(name));
                }
                let parameter = self.sub_expression(cur, validating)?;
                Ok(Self::apply(&name, parameter))
            }
            _ => Err(EvalErr::InvalidNumber),
        }
    }

    fn apply(name: &str, parameter: f64) -> f64 {
        match name {
            "sin" => Self::reduced_trig(parameter, mathx::series_sin),
            "cos" => Self::reduced_trig(parameter, mathx::series_cos),
            "tan" => parameter.tan(),
            "log" => parameter.log10(),
            "ln" => parameter.ln(),
            "exp" => parameter.exp(),
            "abs" => parameter.abs(),
            "sqrt" => parameter.sqrt(),
            // the tokenizer only classifies names from its function table
            _ => 0.0,
        }
    }

    // Fold the argument into the series' happy range with a modulo, then
    // flip the sign when the discarded half-turn count is odd. Arguments
    // far outside [-pi, pi] have NOT been validated against libm and may
    // drift; that precision profile is part of the contract, so this stays
    // a homegrown series and never becomes a platform trig call.
    fn reduced_trig(parameter: f64, series: fn(f64, u32) -> f64) -> f64 {
        let theta = parameter % consts::PI;
        let result = series(theta, SERIES_TERMS);
        let d = ((parameter - theta) / consts::PI + EPS).floor();
        if d as i64 % 2 == 1 && parameter > d * consts::PI {
            -result
        } else {
            result
        }
    }
}
