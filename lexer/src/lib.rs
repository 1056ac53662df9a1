#![deny(warnings)]

mod tokenizer;

pub use tokenizer::{Token, Tokenizer, CONSTANTS, FUNCTIONS};
