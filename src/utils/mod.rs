//! Stateless helpers.
//!
//! - [`duration`] - Millisecond to days/hours/minutes/seconds conversion
//! - [`format`] - Simple and detailed duration strings
//! - [`time`] - Parsing `1h30m` style time strings
//! - [`round`] - Decimal rounding
//! - [`progress`] - Ten-slot progress bars
//! - [`paginate`] - Splitting lists into pages
//! - [`json`] - Collecting a chunk stream into a JSON value
//!
//! # Examples
//!
//! ## Formatting a duration
//!
//! ```
//! use botkit_utils::utils::duration::ms_to_time;
//! use botkit_utils::utils::format::ms_to_time_string;
//!
//! let duration = ms_to_time(93_784_000);
//! assert_eq!(ms_to_time_string(&duration, false), "1 day, 2 hrs, 3 mins, 4 secs");
//! assert_eq!(ms_to_time_string(&duration, true), "MORE_THAN_A_DAY");
//! ```
//!
//! ## Parsing a time string
//!
//! ```
//! use botkit_utils::utils::time::parse_time_string;
//!
//! assert_eq!(parse_time_string("1h30m"), 5_400_000);
//! ```

pub mod duration;
pub mod format;
pub mod json;
pub mod paginate;
pub mod progress;
pub mod round;
pub mod time;
