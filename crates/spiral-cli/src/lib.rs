//! # spiral-cli — Spiral Toolchain Command-Line Interface
//!
//! ## Subcommands
//!
//! - `fetch` — download a matrix over HTTP(S) and print its spiral order
//! - `traverse` — same for a local file or stdin
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; parsing, validation, and traversal live in
//!   `spiral-core`, network access in `spiral-client`.
//! - Results go to stdout, logs and errors to stderr.

pub mod fetch;
pub mod output;
pub mod traverse;
