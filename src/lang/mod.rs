/*!
# Rust Language Module

This Rust module provides lexical analysis of Forth source text.

*/

/// 1-based line in the source, `None` when not known.
pub type LineNumber = Option<usize>;
/// Char offsets of a token within its line.
pub type Column = std::ops::Range<usize>;

/// Line comment marker. The rest of the line is ignored.
pub const COMMENT: char = '\\';

#[macro_use]
mod error;
mod lex;
mod line;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::lines;
pub use line::Line;
pub use line::Tokens;
