//! # Devkit Architecture
//!
//! Devkit bundles two small developer tools: a number-base converter and a
//! reference browser for standard-library containers. Like any UI-agnostic
//! library, the tools are plain functions; the `devkit` binary is just one
//! client of them.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Application context: resources, config, active language  │
//! │  - Dispatches to commands, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Wraps the pure tools into CmdResult values               │
//! │  - Handles config, language switching and resource init     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (radix.rs, numeric.rs, reference.rs, i18n.rs)         │
//! │  - Pure, synchronous, no I/O beyond loading resource files  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! - A malformed number is a [`error::ConversionError`]; nothing partial is returned.
//! - A missing or malformed `config.json` falls back to defaults (`zh`, `Unknown`).
//! - A missing or malformed language file falls back to an empty table whose
//!   lookups return `"Missing translation"`.
//! - Only packaging ([`packaging`]) terminates a process on failure, and only
//!   after removing its partial artifacts.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and application context
//! - [`commands`]: Per-command logic returning `CmdResult`
//! - [`radix`]: The four numeral bases
//! - [`numeric`]: Parsing and rendering of arbitrary-precision integers
//! - [`reference`]: The static container reference table
//! - [`i18n`]: Dotted-key translation tables
//! - [`config`]: `config.json` handling
//! - [`paths`]: Resource directory resolution
//! - [`packaging`]: Release executable packaging
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod i18n;
pub mod numeric;
pub mod packaging;
pub mod paths;
pub mod radix;
pub mod reference;
