//! # Botkit Utils
//!
//! Small stateless helpers for chat bots and the services around them.
//!
//! ## Overview
//!
//! - **Durations** - Break milliseconds into days, hours, minutes and seconds,
//!   render them as `5:05:05` or `1 day, 5 hrs, 5 mins, 5 secs`, and parse
//!   `1h30m` style strings back into milliseconds
//! - **Rounding** - Half-away-from-zero decimal rounding without binary
//!   representation surprises (`1.005` rounds to `1.01`)
//! - **Progress bars** - Ten-slot emoji or ASCII bars
//! - **Pagination** - Fixed-size pages over any slice
//! - **JSON bodies** - Drain an async chunk stream and parse it as JSON
//!
//! Everything except JSON body aggregation is a pure function with no shared
//! state, safe to call from any thread.
//!
//! ## Architecture
//!
//! - [`utils`] - The helpers themselves
//! - [`error`] - Error types for fallible helpers
//! - [`commands`] - Implementations of the `botkit` CLI subcommands
//!
//! ## Example Usage
//!
//! ```bash
//! botkit time 93784000
//! botkit time 93784000 --unit h
//! botkit parse "1h 30m"
//! botkit round 1.005 --digits 2
//! botkit bar 42
//! echo '{"a":1}' | botkit json
//! ```

pub mod commands;
pub mod error;
pub mod utils;
