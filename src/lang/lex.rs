use super::{token::*, Column, COMMENT};

/// Lex a single line of source. Everything from the first comment
/// marker onward is discarded. Columns are char offsets into `s`.
pub fn lex(s: &str) -> Vec<(Column, Token)> {
    ForthLexer::lex(s)
}

fn is_forth_whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn strip_comment(s: &str) -> &str {
    match s.find(COMMENT) {
        Some(index) => &s[..index],
        None => s,
    }
}

struct ForthLexer<'a> {
    chars: std::iter::Peekable<std::iter::Enumerate<std::str::Chars<'a>>>,
}

impl<'a> ForthLexer<'a> {
    fn lex(s: &str) -> Vec<(Column, Token)> {
        ForthLexer {
            chars: strip_comment(s).chars().enumerate().peekable(),
        }
        .collect()
    }

    fn whitespace(&mut self) {
        while let Some((_, ch)) = self.chars.peek() {
            if !is_forth_whitespace(*ch) {
                break;
            }
            self.chars.next();
        }
    }
}

impl<'a> Iterator for ForthLexer<'a> {
    type Item = (Column, Token);

    fn next(&mut self) -> Option<Self::Item> {
        self.whitespace();
        let (start, _) = *self.chars.peek()?;
        let mut end = start;
        let mut s = String::new();
        while let Some((index, ch)) = self.chars.peek() {
            if is_forth_whitespace(*ch) {
                break;
            }
            s.push(*ch);
            end = *index + 1;
            self.chars.next();
        }
        Some((start..end, Token::from_string(&s)))
    }
}
