use crate::error;
use crate::lang::Error;
use crate::mach::{codegen, Config, Event, Runtime};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install the log subscriber. `filter` wins over `RUST_LOG`; with
/// neither only warnings are shown. Logs go to stderr.
pub fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    // Fails when a subscriber is already installed, as in tests or an
    // embedding host. That one stays in charge.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

/// Interactive session. Every entered line is executed against the
/// same runtime so declarations carry over.
pub fn main(config: Config) {
    if let Err(error) = main_loop(config) {
        eprintln!("{}", error);
    }
}

fn main_loop(config: Config) -> std::io::Result<()> {
    let mut runtime = Runtime::new(config);
    let command = Interface::new("forth")?;
    command.set_prompt("> ")?;
    command.write_fmt(format_args!("forth {}\n", env!("CARGO_PKG_VERSION")))?;
    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let result = runtime.execute(&string);
        for event in runtime.events() {
            match event {
                Event::Print(s) => command.write_fmt(format_args!("{}", s))?,
                Event::Diagnostic(error) => command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(format!("?{}", error))
                ))?,
            }
        }
        match result {
            Ok(()) => command.write_fmt(format_args!("ok\n"))?,
            Err(error) => command.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint(format!("?{}", error))
            ))?,
        }
        if !string.trim().is_empty() {
            command.add_history_unique(string);
        }
    }
    Ok(())
}

/// Run a program file on a new runtime. Output is flushed even when
/// the run ends in a fatal error, which is then returned.
pub fn run_file(filename: &Path, config: Config) -> Result<(), Error> {
    let source = load(filename)?;
    info!(file = %filename.display(), bytes = source.len(), "running");
    let mut runtime = Runtime::new(config);
    let result = runtime.execute(&source);
    flush(&mut runtime)?;
    result
}

/// Compile a program file to NASM assembly in `output`. Recoverable
/// errors go to stderr and the listing is still written.
pub fn emit_asm(filename: &Path, output: &Path, config: Config) -> Result<(), Error> {
    let source = load(filename)?;
    info!(file = %filename.display(), output = %output.display(), "compiling");
    let listing = codegen(&source, config)?;
    let stderr = std::io::stderr();
    let mut err = stderr.lock();
    for error in listing.errors() {
        if let Err(error) = writeln!(err, "?{}", error) {
            return Err(error!(InternalError; error.to_string()));
        }
    }
    if let Err(error) = std::fs::write(output, listing.to_string()) {
        return Err(error!(InternalError; format!("{}: {}", output.display(), error)));
    }
    Ok(())
}

/// Drain pending events: prints to stdout, diagnostics to stderr.
pub fn flush(runtime: &mut Runtime) -> Result<(), Error> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    for event in runtime.events() {
        let written = match event {
            Event::Print(s) => write!(out, "{}", s),
            Event::Diagnostic(error) => writeln!(err, "?{}", error),
        };
        if let Err(error) = written {
            return Err(error!(InternalError; error.to_string()));
        }
    }
    if let Err(error) = out.flush() {
        return Err(error!(InternalError; error.to_string()));
    }
    Ok(())
}

fn load(filename: &Path) -> Result<String, Error> {
    let mut file = match File::open(filename) {
        Ok(file) => file,
        Err(error) => {
            let msg = format!("{}: {}", filename.display(), error);
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg)),
                _ => return Err(error!(InternalError; msg)),
            }
        }
    };
    let mut source = String::new();
    if let Err(error) = file.read_to_string(&mut source) {
        return Err(error!(InternalError; format!("{}: {}", filename.display(), error)));
    }
    Ok(source)
}
