use super::{Config, Listing, Stack};
use crate::error;
use crate::lang::token::{Token, Word};
use crate::lang::{lines, Error, Line, Tokens};
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Compile a program to 32-bit NASM assembly.
///
/// There is no control flow, so the shape of the operand stack is known
/// at every token. Errors the interpreter would report are found here
/// instead: the word compiles to whatever it would have popped, and the
/// error is kept in the listing. A type mismatch ends compilation unless
/// `config.recover` is set.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn codegen(source: &str, config: Config) -> Result<Listing> {
    let mut gen = Generator::new(config);
    for line in lines(source) {
        gen.line(&line)?;
    }
    Ok(gen.asm)
}

/// What the stack holds at run time. A name is the address of its
/// zero-terminated text in `.data`.
#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Integer,
    Name(Rc<str>),
}

struct Generator {
    recover: bool,
    stack: Stack<Slot>,
    vars: HashMap<Rc<str>, usize>,
    names: HashMap<Rc<str>, usize>,
    labels: usize,
    asm: Listing,
}

impl Generator {
    fn new(config: Config) -> Generator {
        Generator {
            recover: config.recover,
            stack: Stack::new(),
            vars: HashMap::new(),
            names: HashMap::new(),
            labels: 0,
            asm: Listing::default(),
        }
    }

    fn line(&mut self, line: &Line) -> Result<()> {
        if line.is_empty() {
            return Ok(());
        }
        if let Some(number) = line.number() {
            self.asm.comment(format!("line {}: {}", number, line));
        }
        let mut tokens = line.tokens().iter();
        while let Some((column, token)) = tokens.next() {
            trace!(line = ?line.number(), %token, depth = self.stack.len(), "codegen");
            let result = match token {
                Token::Word(word) => self.word(*word, &mut tokens),
                Token::Literal(n) => {
                    self.asm.op(format!("push dword {}", n));
                    self.stack.push(Slot::Integer);
                    Ok(())
                }
                Token::Ident(s) => {
                    let label = self.name_label(s);
                    self.asm.op(format!("push {}", label));
                    self.stack.push(Slot::Name(s.as_str().into()));
                    Ok(())
                }
            };
            if let Err(error) = result {
                let error = error.in_line_number(line.number()).in_column(column);
                if error.is_fatal() && !self.recover {
                    debug!("fatal: {}", error);
                    return Err(error);
                }
                debug!("abandoned: {}", error);
                self.asm.comment(format!("?{}", error));
                self.asm.error(error);
            }
        }
        Ok(())
    }

    fn word(&mut self, word: Word, tokens: &mut Tokens) -> Result<()> {
        use Word::*;
        match word {
            Variable => self.variable(tokens),
            Store1 | Store2 => self.store(),
            Fetch1 | Fetch2 => self.fetch(),
            Plus => self.binary(&["pop eax", "add [esp], eax"]),
            Minus => self.binary(&["pop eax", "sub [esp], eax"]),
            Multiply => self.binary(&["pop eax", "imul eax, [esp]", "mov [esp], eax"]),
            Mod => self.modulus(),
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

    fn ops(&mut self, instructions: &[&str]) {
        for instruction in instructions {
            self.asm.op(instruction);
        }
    }

    fn discard(&mut self, popped: usize) {
        self.asm.op(format!("add esp, {}", 4 * popped));
    }

    fn print(&mut self, message: &str) {
        self.asm.op(format!("push {}", message));
        self.ops(&["call printf", "add esp, 4"]);
    }

    fn new_label(&mut self, prefix: &str) -> String {
        self.labels += 1;
        format!("{}_{}", prefix, self.labels)
    }

    fn name_label(&mut self, s: &str) -> String {
        let next = self.names.len();
        let index = *self.names.entry(s.into()).or_insert(next);
        if index == next {
            let bytes: Vec<String> = s.bytes().map(|b| b.to_string()).collect();
            self.asm
                .data(format!("name_{} db {},0    ; {}", index, bytes.join(","), s));
        }
        format!("name_{}", index)
    }

    fn var_label(&self, var_name: &str) -> Result<String> {
        match self.vars.get(var_name) {
            Some(index) => Ok(format!("var_{}", index)),
            None => Err(error!(UndefinedVariable; var_name.to_string())),
        }
    }

    /// Operands already popped stay popped, at run time too.
    fn integers(&mut self, lhs: Slot, rhs: Slot, popped: usize) -> Result<()> {
        for slot in [rhs, lhs] {
            if let Slot::Name(s) = slot {
                self.discard(popped);
                return Err(error!(TypeMismatch; format!("expected integer, found {}", s)));
            }
        }
        Ok(())
    }

    fn binary(&mut self, instructions: &[&str]) -> Result<()> {
        let (lhs, rhs) = self.stack.pop_2()?;
        self.integers(lhs, rhs, 2)?;
        self.ops(instructions);
        self.stack.push(Slot::Integer);
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
                if !self.vars.contains_key(&var_name) {
                    let index = self.vars.len();
                    self.asm
                        .bss(format!("var_{} resd 1    ; {}", index, var_name));
                    debug!(%var_name, index, "declared");
                    self.vars.insert(var_name, index);
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
        let var_name = match var_name {
            Slot::Name(s) => s,
            Slot::Integer => {
                self.discard(2);
                return Err(error!(InvalidName; "an integer is not a variable name"));
            }
        };
        let label = match self.var_label(&var_name) {
            Ok(label) => label,
            Err(error) => {
                self.discard(2);
                return Err(error);
            }
        };
        match value {
            Slot::Integer => {
                self.ops(&["add esp, 4", "pop eax"]);
                self.asm.op(format!("mov [{}], eax", label));
                Ok(())
            }
            Slot::Name(s) => {
                self.discard(2);
                Err(error!(InvalidValue; format!("expected integer, found {}", s)))
            }
        }
    }

    fn fetch(&mut self) -> Result<()> {
        let var_name = match self.stack.pop()? {
            Slot::Name(s) => s,
            Slot::Integer => {
                self.discard(1);
                return Err(error!(InvalidName; "an integer is not a variable name"));
            }
        };
        let label = match self.var_label(&var_name) {
            Ok(label) => label,
            Err(error) => {
                self.discard(1);
                return Err(error);
            }
        };
        self.asm.op(format!("mov eax, [{}]", label));
        self.asm.op("mov [esp], eax");
        self.stack.push(Slot::Integer);
        Ok(())
    }

    /// `idiv` faults on a zero divisor and on `i32::MIN / -1`. Both
    /// results are 0, so those divisors skip it.
    fn modulus(&mut self) -> Result<()> {
        let (lhs, rhs) = self.stack.pop_2()?;
        self.integers(lhs, rhs, 2)?;
        let done = self.new_label("mod");
        self.ops(&["pop ebx", "pop eax", "xor edx, edx", "cmp ebx, 0"]);
        self.asm.op(format!("je {}", done));
        self.asm.op("cmp ebx, -1");
        self.asm.op(format!("je {}", done));
        self.ops(&["cdq", "idiv ebx"]);
        self.asm.label(&done);
        self.asm.op("push edx");
        self.stack.push(Slot::Integer);
        Ok(())
    }

    fn dup(&mut self) -> Result<()> {
        if let Some(slot) = self.stack.last().cloned() {
            self.asm.op("push dword [esp]");
            self.stack.push(slot);
        }
        Ok(())
    }

    fn swap(&mut self) -> Result<()> {
        let (a, b) = self.stack.pop_2()?;
        self.integers(a, b, 2)?;
        self.ops(&["pop eax", "pop ebx", "push eax", "push ebx"]);
        self.stack.push(Slot::Integer);
        self.stack.push(Slot::Integer);
        Ok(())
    }

    fn drop(&mut self) -> Result<()> {
        if !self.stack.is_empty() {
            self.stack.pop()?;
            self.discard(1);
        }
        Ok(())
    }

    fn over(&mut self) -> Result<()> {
        self.stack.require(2)?;
        if let Some(second) = self.stack.peek(1).cloned() {
            self.asm.op("push dword [esp+4]");
            self.stack.push(second);
        }
        Ok(())
    }

    fn neg(&mut self) -> Result<()> {
        if self.stack.is_empty() {
            return Ok(());
        }
        match self.stack.pop()? {
            Slot::Integer => {
                self.asm.op("neg dword [esp]");
                self.stack.push(Slot::Integer);
                Ok(())
            }
            Slot::Name(s) => {
                self.discard(1);
                Err(error!(TypeMismatch; format!("expected integer, found {}", s)))
            }
        }
    }

    fn nip(&mut self) -> Result<()> {
        let (a, b) = self.stack.pop_2()?;
        self.integers(a, b, 2)?;
        self.ops(&["pop eax", "mov [esp], eax"]);
        self.stack.push(Slot::Integer);
        Ok(())
    }

    fn tuck(&mut self) -> Result<()> {
        let (a, b) = self.stack.pop_2()?;
        self.integers(a, b, 2)?;
        self.ops(&["pop eax", "pop ebx", "push eax", "push ebx", "push eax"]);
        for _ in 0..3 {
            self.stack.push(Slot::Integer);
        }
        Ok(())
    }

    fn dot(&mut self) -> Result<()> {
        if self.stack.is_empty() {
            return Ok(());
        }
        let format = match self.stack.pop()? {
            Slot::Integer => "fmt_int",
            Slot::Name(_) => "fmt_name",
        };
        self.asm.op(format!("push {}", format));
        self.ops(&["call printf", "add esp, 8"]);
        Ok(())
    }

    /// Unrolled: the depth and the kind of every item are known here.
    fn dot_s(&mut self) -> Result<()> {
        let slots: Vec<Slot> = self.stack.iter().cloned().collect();
        self.print("dots_open");
        for (index, slot) in slots.iter().enumerate() {
            if index > 0 {
                self.print("dots_sep");
            }
            let offset = 4 * (slots.len() - 1 - index);
            let format = match slot {
                Slot::Integer => "dots_int",
                Slot::Name(_) => "dots_name",
            };
            self.asm.op(format!("push dword [esp+{}]", offset));
            self.asm.op(format!("push {}", format));
            self.ops(&["call printf", "add esp, 8"]);
        }
        self.print("dots_close");
        Ok(())
    }
}
