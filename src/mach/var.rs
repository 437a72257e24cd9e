use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Entries only come into existence through `declare` and live until
/// `clear`. Undeclared names are errors, never implicitly zero.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, i32>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn is_declared(&self, var_name: &str) -> bool {
        self.vars.contains_key(var_name)
    }

    /// Returns false when the name already existed; its value is kept.
    pub fn declare(&mut self, var_name: &Rc<str>) -> bool {
        if self.vars.contains_key(var_name) {
            return false;
        }
        self.vars.insert(var_name.clone(), 0);
        true
    }

    pub fn fetch(&self, var_name: &Rc<str>) -> Result<i32> {
        match self.vars.get(var_name) {
            Some(n) => Ok(*n),
            None => Err(self.undefined(var_name)),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: i32) -> Result<()> {
        match self.vars.get_mut(var_name) {
            Some(n) => {
                *n = value;
                Ok(())
            }
            None => Err(self.undefined(var_name)),
        }
    }

    fn undefined(&self, var_name: &Rc<str>) -> Error {
        error!(UndefinedVariable; var_name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_keeps_value() {
        let mut v = Var::new();
        let x: Rc<str> = "x".into();
        assert!(v.declare(&x));
        v.store(&x, 7).unwrap();
        assert!(!v.declare(&x));
        assert_eq!(v.fetch(&x).unwrap(), 7);
    }

    #[test]
    fn test_undeclared() {
        let mut v = Var::new();
        let y: Rc<str> = "y".into();
        assert_eq!(v.fetch(&y).unwrap_err().to_string(), "UNDEFINED VARIABLE; y");
        assert!(v.store(&y, 1).is_err());
        assert!(!v.is_declared("y"));
    }
}
