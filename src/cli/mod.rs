//! Command Line Interface (CLI) layer for mfaenum.
//!
//! This module defines argument parsing (`args`) and the orchestration
//! logic (`runner`) for the single-email and batch flows. It wires
//! user-provided options to the underlying library functionality.
//!
//! If you are embedding mfaenum into another application, prefer using
//! the library API (`mfaenum::probe`, `mfaenum::batch`) instead of calling
//! the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
