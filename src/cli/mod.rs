//! Command Line Interface (CLI) layer for favicrop.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`). It maps user-provided options onto
//! `FaviconParams` and calls the library functionality exposed via `favicrop::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
