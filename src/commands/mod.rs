//! Command implementations for the `botkit` CLI.
//!
//! Each module implements one subcommand as a thin wrapper around the
//! helpers in [`crate::utils`]. Modules expose a `render` function that
//! produces the output text, and a `run` function that prints it.
//!
//! ## Commands
//!
//! - [`time`] - `time` and `parse`: convert milliseconds to a duration and back
//! - [`round`] - `round`: decimal rounding
//! - [`bar`] - `bar`: progress bar for a percentage
//! - [`paginate`] - `paginate`: split a list of items into pages
//! - [`json`] - `json`: read a JSON document from stdin and pretty-print it

pub mod bar;
pub mod json;
pub mod paginate;
pub mod round;
pub mod time;
