//! Command Line Interface (CLI) layer for VECTRIG.
//!
//! This module defines argument parsing (`args`) and the orchestration
//! logic (`runner`) for the single-shot trigger flow. It wires user-provided
//! flags to the underlying library functionality exposed via `vectrig::api`.
//!
//! If you are embedding the trigger into another application, prefer using
//! the high-level `vectrig::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
