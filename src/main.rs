//! # forth
//!
//! Runs a program file, or an interactive session when none is given.
//! `--emit-asm` compiles the file to NASM assembly instead.

use clap::Parser;
use forth::mach::Config;
use std::path::PathBuf;
use std::process::exit;

/// A small Forth interpreter
#[derive(Parser)]
#[command(name = "forth", version)]
#[command(about = "Run a Forth program, or start an interactive session")]
struct Args {
    /// Program to run. Starts an interactive session when omitted.
    file: Option<PathBuf>,

    /// Report type mismatches and keep going instead of stopping
    #[arg(long)]
    recover: bool,

    /// Clear the stack and variables before every line (interactive only)
    #[arg(long)]
    fresh: bool,

    /// Compile FILE to NASM assembly in OUT instead of running it
    #[arg(long, value_name = "OUT", requires = "file")]
    emit_asm: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `forth=trace`. Defaults to RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();
    forth::term::init_tracing(args.log_level.as_deref());

    let config = Config {
        recover: args.recover,
        persist: !args.fresh,
    };
    match args.file {
        Some(file) => {
            let result = match args.emit_asm {
                Some(output) => forth::term::emit_asm(&file, &output, config),
                None => forth::term::run_file(&file, config),
            };
            if let Err(error) = result {
                eprintln!("?{}", error);
                exit(1);
            }
        }
        None => forth::term::main(config),
    }
}
