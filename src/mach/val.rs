use crate::error;
use crate::lang::Error;
use std::rc::Rc;

/// ## Stack operand
///
/// Either an integer or a symbolic name. Names are pushed by any token
/// that is neither a reserved word nor an integer literal, which is how
/// variables are referenced.

#[derive(Debug, PartialEq, Clone)]
pub enum Val {
    Integer(i32),
    Name(Rc<str>),
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<i32> for Val {
    fn from(n: i32) -> Self {
        Val::Integer(n)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Self {
        Val::Name(s.into())
    }
}

impl TryFrom<Val> for i32 {
    type Error = Error;

    fn try_from(val: Val) -> std::result::Result<Self, Self::Error> {
        match val {
            Val::Integer(n) => Ok(n),
            Val::Name(s) => Err(error!(TypeMismatch; format!("expected integer, found {}", s))),
        }
    }
}
