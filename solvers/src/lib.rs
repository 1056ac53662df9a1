pub use function::{Function, Solution};
pub use solve::{format_solution, parse_epsilon, solve, Method, SolveError, DEFAULT_EPSILON};

mod function;
pub mod findroot;
mod solve;
