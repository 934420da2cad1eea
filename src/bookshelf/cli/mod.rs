//! # CLI Behavior
//!
//! This is **one possible UI client** for bookshelf. The CLI is the only place
//! that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Flags
//!
//! Exactly one action flag is honored per run:
//!
//! - `--get=all` (or no action at all): print the whole catalog
//! - `--get=id --id=<id>`: print one book
//! - `--add`: add a book from `--id --title --author --price [--img]`
//! - `--update --id=<id>`: overwrite the fields that were given
//! - `--delete --id=<id>`: remove a book
//!
//! `--json` switches any printed books to JSON. `-v` raises log verbosity.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-action handlers
//! - `logging`: tracing subscriber setup
//! - `render`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod logging;
mod render;
pub mod setup;

pub use commands::run;
