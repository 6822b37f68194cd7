//! Expression trees, their operators and their text rendering

mod ast;
mod display;
mod ops;

pub use ast::Expression;
pub use ops::{Combination, GENERATION_ORDER, Operator, SEARCH_ORDER};
