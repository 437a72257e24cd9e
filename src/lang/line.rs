use super::lex::*;
use super::token::*;
use super::{Column, LineNumber};

/// Cursor over the rest of a line.
pub type Tokens<'a> = std::slice::Iter<'a, (Column, Token)>;

#[derive(Debug, PartialEq)]
pub struct Line {
    number: usize,
    tokens: Vec<(Column, Token)>,
}

impl Line {
    /// `number` is 1-based, counted from the top of the source.
    pub fn new(number: usize, s: &str) -> Line {
        Line {
            number,
            tokens: lex(s),
        }
    }

    pub fn number(&self) -> LineNumber {
        Some(self.number)
    }

    pub fn tokens(&self) -> &[(Column, Token)] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Split source into lines. LF and CRLF both end a line.
pub fn lines(source: &str) -> impl Iterator<Item = Line> + '_ {
    source
        .lines()
        .enumerate()
        .map(|(index, s)| Line::new(index + 1, s))
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<String> = self.tokens.iter().map(|(_, t)| t.to_string()).collect();
        write!(f, "{}", s.join(" "))
    }
}
