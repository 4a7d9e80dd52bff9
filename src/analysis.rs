//! Query analysis for lexitag.
//!
//! Splits a query into the tokens that the classifier scores.

pub mod tokenizer;
