/*!
## Rust Machine Module

This Rust module is the Forth interpreter: the operand stack, the
variable table, and the dispatch loop that runs lexed lines against them.
`codegen` compiles the same lines to a NASM `Listing` instead.

*/

mod codegen;
mod config;
mod listing;
mod operation;
mod runtime;
mod stack;
mod val;
mod var;

pub use codegen::codegen;
pub use config::Config;
pub use listing::Listing;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;
