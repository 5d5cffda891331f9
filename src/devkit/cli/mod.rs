//! # CLI Layer
//!
//! The terminal client for devkit. This is the **only** place that:
//! - Parses arguments (`setup.rs`)
//! - Writes to stdout/stderr and picks exit codes (`commands.rs`)
//! - Formats results for humans (`render.rs`)
//!
//! Each handler calls one `DevkitApi` method and prints its `CmdResult`.
//! The session's config is written back once the command has finished.

mod commands;
mod render;
mod setup;

pub use commands::run;
