use crate::lang::Error;

/// ## NASM listing
///
/// The sections of a compiled program. `Display` renders the whole
/// file, ready for `nasm -felf32` and a 32-bit libc link.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    text: Vec<String>,
    data: Vec<String>,
    bss: Vec<String>,
    errors: Vec<Error>,
}

const PRINT_FORMATS: &[&str] = &[
    "fmt_int db \"%d\",10,0",
    "fmt_name db \"%s\",10,0",
    "dots_int db \"%d\",0",
    "dots_name db \"%s\",0",
    "dots_open db \"[Bottom -> Top] [\",0",
    "dots_sep db \", \",0",
    "dots_close db \"]\",10,0",
];

impl Listing {
    /// Body of `main`, between the saved and the restored stack pointer.
    pub fn text(&self) -> &[String] {
        &self.text
    }

    /// Recoverable errors found while compiling, in source order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub(super) fn op<S: AsRef<str>>(&mut self, instruction: S) {
        self.text.push(format!("    {}", instruction.as_ref()));
    }

    pub(super) fn label(&mut self, label: &str) {
        self.text.push(format!("{}:", label));
    }

    pub(super) fn comment<S: AsRef<str>>(&mut self, comment: S) {
        self.text.push(format!("    ; {}", comment.as_ref()));
    }

    pub(super) fn data(&mut self, line: String) {
        self.data.push(line);
    }

    pub(super) fn bss(&mut self, line: String) {
        self.bss.push(line);
    }

    pub(super) fn error(&mut self, error: Error) {
        self.errors.push(error);
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "global main")?;
        writeln!(f, "extern printf")?;
        writeln!(f)?;
        writeln!(f, "section .text")?;
        writeln!(f, "main:")?;
        writeln!(f, "    mov [stack_start], esp")?;
        for line in &self.text {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "    mov esp, [stack_start]")?;
        writeln!(f, "    xor eax, eax")?;
        writeln!(f, "    ret")?;
        writeln!(f)?;
        writeln!(f, "section .data")?;
        for line in PRINT_FORMATS.iter() {
            writeln!(f, "{}", line)?;
        }
        for line in &self.data {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        writeln!(f, "section .bss")?;
        writeln!(f, "stack_start resd 1")?;
        for line in &self.bss {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
