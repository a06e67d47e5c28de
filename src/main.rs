//! VECTRIG CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! single-shot trigger flow, and exit with the resulting status. For
//! programmatic use, prefer the library API (`vectrig::api`).
//!
//! Argument errors exit with code 1 (not clap's default 2), matching the
//! contract that every non-success outcome of an invocation is 1;
//! `--help` and `--version` still exit 0.

use clap::Parser;

mod cli;

fn main() {
    let args = match cli::CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    std::process::exit(cli::run(args));
}
