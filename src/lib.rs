//! # forth
//!
//! A small Forth: integers, names, a handful of stack words and
//! variables. No control flow, no definitions.
//!
//! Linux and MacOS require [Rust](https://www.rust-lang.org/tools/install)
//! then the command `cargo install forth-lang`.
//!
//! Begin by opening a terminal and running the executable.
//! ```text
//! forth 0.1.0
//! > 1 2 + .
//! 3
//! ok
//! ```
//!
//! Embedding the interpreter:
//! ```
//! use forth::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.execute("variable x  10 x !  x @  x @  +  .").unwrap();
//! let events: Vec<Event> = runtime.events().collect();
//! assert_eq!(events, vec![Event::Print("20\n".to_string())]);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

pub mod lang;
pub mod mach;
pub mod term;

/// Run `source` on a new runtime, printing to stdout and reporting
/// diagnostics on stderr. Only a fatal error is returned.
pub fn execute(source: &str) -> Result<(), lang::Error> {
    let mut runtime = mach::Runtime::default();
    let result = runtime.execute(source);
    term::flush(&mut runtime)?;
    result
}
