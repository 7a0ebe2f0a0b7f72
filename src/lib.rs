//! A minimal backtracking regular expression matcher.
//!
//! Patterns support literal bytes, `\` escapes, the `.` wildcard, byte
//! classes (`[abc]`, `[^a-z]`) and the greedy `?`, `*` and `+` quantifiers.
//! All matching is done over bytes.

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

#[macro_use]
mod macros;

pub mod charset;
pub mod engine;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod pattern;
pub mod search;

pub use self::{
    charset::CharSet,
    engine::MatchRanges,
    lexer::{Lexer, Token},
    operator::{Operator, OperatorKind, Quantifier},
    parser::parse_pattern,
    pattern::Pattern,
    search::{FindIter, find, find_all, is_match},
};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An invalid character set range was used.
    #[error("invalid pattern: {err} at {pos}")]
    CharSet { pos: usize, err: charset::Error },

    /// The pattern ended with an escape character.
    #[error("invalid pattern: pattern ends with '\\' at {pos}")]
    DanglingEscape { pos: usize },

    /// A character set was opened but never closed.
    #[error("invalid pattern: missing ']' for set opened at {pos}")]
    UnterminatedSet { pos: usize },

    /// Repeat bounds where the maximum is below the minimum.
    #[error("invalid repeat bounds {{{min}, {}}}", fmt_max(*.max))]
    InvalidRepeat { min: usize, max: Option<usize> },
}

fn fmt_max(max: Option<usize>) -> String {
    max.map_or_else(|| "inf".to_string(), |n| n.to_string())
}

pub type Result<T> = std::result::Result<T, Error>;
