use std::collections::HashMap;

thread_local!(
    static STRING_TO_WORD: HashMap<&'static str, Word> = Word::field_less()
        .iter()
        .map(|w| (w.as_str(), *w))
        .collect();
);

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Word(Word),
    Literal(i32),
    Ident(String),
}

impl Token {
    /// Classify one whitespace-free piece of source text.
    pub fn from_string(s: &str) -> Token {
        if let Some(word) = Word::from_string(s) {
            return Token::Word(word);
        }
        match s.parse::<i32>() {
            Ok(n) => Token::Literal(n),
            Err(_) => Token::Ident(s.to_string()),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Word(w) => write!(f, "{}", w),
            Token::Literal(n) => write!(f, "{}", n),
            Token::Ident(s) => write!(f, "{}", s),
        }
    }
}

/// Reserved words. Aliases get their own variant so a token
/// always prints back the way it was written.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Word {
    Variable,
    Store1,
    Store2,
    Fetch1,
    Fetch2,
    Plus,
    Minus,
    Multiply,
    Mod,
    Dup,
    Swap,
    Drop,
    Over,
    Neg,
    Nip,
    Tuck,
    Dot,
    DotS,
}

impl Word {
    pub fn field_less() -> &'static [Word] {
        use Word::*;
        &[
            Variable, Store1, Store2, Fetch1, Fetch2, Plus, Minus, Multiply, Mod, Dup, Swap,
            Drop, Over, Neg, Nip, Tuck, Dot, DotS,
        ]
    }

    pub fn from_string(s: &str) -> Option<Word> {
        STRING_TO_WORD.with(|stw| stw.get(s).copied())
    }

    pub fn as_str(&self) -> &'static str {
        use Word::*;
        match self {
            Variable => "variable",
            Store1 => "!",
            Store2 => "store",
            Fetch1 => "@",
            Fetch2 => "fetch",
            Plus => "+",
            Minus => "-",
            Multiply => "*",
            Mod => "mod",
            Dup => "dup",
            Swap => "swap",
            Drop => "drop",
            Over => "over",
            Neg => "neg",
            Nip => "nip",
            Tuck => "tuck",
            Dot => ".",
            DotS => ".s",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
