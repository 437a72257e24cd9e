use super::{Config, Operation, Stack, Val, Var};
use crate::error;
use crate::lang::token::{Token, Word};
use crate::lang::{lines, Error, Line, Tokens};
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Observable output of the runtime
///
/// Events are queued in program order and drained by the caller.

#[derive(Debug, PartialEq, Clone)]
pub enum Event {
    Print(String),
    Diagnostic(Error),
}

/// ## Interpreter state
///
/// Owns the operand stack and the variable table. With the default
/// config both survive from one `execute` to the next, which is what
/// an interactive session wants. Call `clear` to start over.

pub struct Runtime {
    config: Config,
    stack: Stack<Val>,
    vars: Var,
    events: VecDeque<Event>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Config::default())
    }
}

impl Runtime {
    pub fn new(config: Config) -> Runtime {
        Runtime {
            config,
            stack: Stack::new(),
            vars: Var::new(),
            events: VecDeque::new(),
        }
    }

    pub fn clear(&mut self) {
        self.stack.clear();
        self.vars.clear();
    }

    /// Bottom to top.
    pub fn stack(&self) -> &[Val] {
        self.stack.as_slice()
    }

    pub fn var(&self, var_name: &str) -> Option<i32> {
        self.vars.fetch(&Rc::from(var_name)).ok()
    }

    pub fn events(&mut self) -> std::collections::vec_deque::Drain<'_, Event> {
        self.events.drain(..)
    }

    /// Run `source` to completion. Diagnostics and prints are queued as
    /// events; only a fatal error ends the run early and is returned.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn execute(&mut self, source: &str) -> Result<()> {
        if !self.config.persist {
            self.clear();
        }
        for line in lines(source) {
            self.execute_line(&line)?;
        }
        Ok(())
    }

    fn execute_line(&mut self, line: &Line) -> Result<()> {
        let mut tokens = line.tokens().iter();
        while let Some((column, token)) = tokens.next() {
            trace!(line = ?line.number(), %token, depth = self.stack.len(), "dispatch");
            let result = match token {
                Token::Word(word) => self.word(*word, &mut tokens),
                Token::Literal(n) => {
                    self.stack.push(Val::Integer(*n));
                    Ok(())
                }
                Token::Ident(s) => {
                    self.stack.push(Val::Name(s.as_str().into()));
                    Ok(())
                }
            };
            if let Err(error) = result {
                let error = error.in_line_number(line.number()).in_column(column);
                if error.is_fatal() && !self.config.recover {
                    debug!("fatal: {}", error);
                    return Err(error);
                }
                debug!("abandoned: {}", error);
                self.events.push_back(Event::Diagnostic(error));
            }
        }
        Ok(())
    }

    /// `tokens` is the rest of the line; only `variable` consumes from it.
    fn word(&mut self, word: Word, tokens: &mut Tokens) -> Result<()> {
        use Word::*;
        match word {
            Variable => self.variable(tokens),
            Store1 | Store2 => self.store(),
            Fetch1 | Fetch2 => self.fetch(),
            Plus => self.binary(Operation::sum),
            Minus => self.binary(Operation::subtract),
            Multiply => self.binary(Operation::multiply),
            Mod => self.binary(Operation::modulus),
            Dup => self.dup(),
            Swap => self.swap(),
            Drop => self.drop(),
            Over => self.over(),
            Neg => self.neg(),
            Nip => self.nip(),
            Tuck => self.tuck(),
            Dot => self.dot(),
            DotS => self.dot_s(),
        }
    }

    fn print(&mut self, s: String) {
        self.events.push_back(Event::Print(s));
    }

    fn name(&self, val: Val) -> Result<Rc<str>> {
        match val {
            Val::Name(s) => Ok(s),
            Val::Integer(n) => Err(error!(InvalidName; format!("{} is not a variable name", n))),
        }
    }

    fn binary(&mut self, op: fn(Val, Val) -> Result<Val>) -> Result<()> {
        let (lhs, rhs) = self.stack.pop_2()?;
        self.stack.push(op(lhs, rhs)?);
        Ok(())
    }

    fn variable(&mut self, tokens: &mut Tokens) -> Result<()> {
        let (column, ident) = match tokens.next() {
            Some(next) => next,
            None => return Err(error!(MissingIdentifier; "expected a name after variable")),
        };
        match ident {
            Token::Ident(s) => {
                let var_name: Rc<str> = s.as_str().into();
                if self.vars.declare(&var_name) {
                    debug!(%var_name, "declared");
                }
                Ok(())
            }
            Token::Word(_) | Token::Literal(_) => Err(error!(InvalidName, ..column;
                format!("{} is not a valid variable name", ident))),
        }
    }

    fn store(&mut self) -> Result<()> {
        self.stack.require(2)?;
        let var_name = self.stack.pop()?;
        let value = self.stack.pop()?;
        let var_name = self.name(var_name)?;
        if !self.vars.is_declared(&var_name) {
            return Err(error!(UndefinedVariable; var_name.to_string()));
        }
        match value {
            Val::Integer(n) => self.vars.store(&var_name, n),
            Val::Name(s) => Err(error!(InvalidValue; format!("expected integer, found {}", s))),
        }
    }

    fn fetch(&mut self) -> Result<()> {
        let var_name = self.stack.pop()?;
        let var_name = self.name(var_name)?;
        let value = self.vars.fetch(&var_name)?;
        self.stack.push(Val::Integer(value));
        Ok(())
    }

    fn dup(&mut self) -> Result<()> {
        if let Some(val) = self.stack.last().cloned() {
            self.stack.push(val);
        }
        Ok(())
    }

    fn swap(&mut self) -> Result<()> {
        let (a, b) = self.stack.pop_2()?;
        let (a, b) = Operation::integers(a, b)?;
        self.stack.push(Val::Integer(b));
        self.stack.push(Val::Integer(a));
        Ok(())
    }

    fn drop(&mut self) -> Result<()> {
        if !self.stack.is_empty() {
            self.stack.pop()?;
        }
        Ok(())
    }

    fn over(&mut self) -> Result<()> {
        self.stack.require(2)?;
        if let Some(second) = self.stack.peek(1).cloned() {
            self.stack.push(second);
        }
        Ok(())
    }

    fn neg(&mut self) -> Result<()> {
        if self.stack.is_empty() {
            return Ok(());
        }
        let val = self.stack.pop()?;
        self.stack.push(Operation::negate(val)?);
        Ok(())
    }

    fn nip(&mut self) -> Result<()> {
        let (a, b) = self.stack.pop_2()?;
        let (_, b) = Operation::integers(a, b)?;
        self.stack.push(Val::Integer(b));
        Ok(())
    }

    fn tuck(&mut self) -> Result<()> {
        let (a, b) = self.stack.pop_2()?;
        let (a, b) = Operation::integers(a, b)?;
        self.stack.push(Val::Integer(b));
        self.stack.push(Val::Integer(a));
        self.stack.push(Val::Integer(b));
        Ok(())
    }

    fn dot(&mut self) -> Result<()> {
        if self.stack.is_empty() {
            return Ok(());
        }
        let val = self.stack.pop()?;
        self.print(format!("{}\n", val));
        Ok(())
    }

    fn dot_s(&mut self) -> Result<()> {
        let items: Vec<String> = self.stack.iter().map(|v| v.to_string()).collect();
        self.print(format!("[Bottom -> Top] [{}]\n", items.join(", ")));
        Ok(())
    }
}
