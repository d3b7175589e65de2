//! # CLI Behavior
//!
//! This is **one possible UI client** for agrocat, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the
//! `agrocat` library.
//!
//! ## Commands
//!
//! - `agrocat list <catalog>`: one page of a catalog. Filters are repeatable
//!   `-f key=value` pairs; `agrocat filters <catalog>` lists the keys a
//!   catalog accepts and how many items each option keeps.
//! - `agrocat show <catalog> <id>`: one item in full.
//! - `agrocat config [key] [value]`: read or change settings.
//!
//! Every listing command accepts `--json`, which prints the computed page
//! instead of the rendered view.
//!
//! ### Empty Results
//!
//! A filter combination with no matches is not an error. The listing shows a
//! dedicated block with the catalog size and the command that clears every
//! filter, and the process exits with status 0.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `render`: Template rendering and layout
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styles by semantic name
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
