//! Turkish numeral parsing.
//!
//! Unlike the time grammar, numerals are not matched rule by rule: a single
//! search regex finds candidate expressions and [`convert`] folds their atoms
//! into a value with place-value carrying (see [`helpers::place_value`]).

pub mod helpers;
pub mod rules;

#[cfg(test)]
mod tests;

pub use rules::{NumeralMatch, convert, find_all};
