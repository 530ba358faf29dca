//! Next-occurrence predictor for cron-like recurrence schedules.
#![deny(unsafe_code, missing_docs)]

//! This crate is intended to:
//! - parse five-field cron-like schedules;
//! - compute the earliest instant strictly after a given one that satisfies a schedule;
//! - generate series of such instants.
//!
//! Prediction doesn't step through time minute by minute: every field is a rotor over its
//! permitted values, and rotors carry into each other like digits of a counter, so a
//! schedule that fires once in four years is resolved as fast as an hourly one.
//!
//! _This is not a jobs scheduler or runner._ Nothing here sleeps, waits or dispatches.
//!
//! ## Schedule format
//!
//! A schedule has five whitespace-separated fields: minutes, hours, days of month, months and days of week.
//!
//! | Field        | Allowed values         | Allowed special characters |
//! |--------------|------------------------|----------------------------|
//! | Minutes      | 0-59                   | * , - /                    |
//! | Hours        | 0-23                   | * , - /                    |
//! | Day of Month | 1-31                   | * , - / ? L                |
//! | Month        | 1-12 or JAN-DEC        | * , - /                    |
//! | Day of Week  | 0-7 or SUN-SAT         | * , - ?                    |
//!
//! Patterns meanings:
//! - `*` - each possible value, i.e. `0,1,2,...,59` for minutes;
//! - `,` - list of values or patterns, i.e. `1,7,12`, `SUN,FRI`;
//! - `-` - range of values, i.e. `0-15`, `JAN-MAR`;
//! - `/` - repeating values, i.e. `*/12`, `10/5`, `30-59/2`; the step is at least `2`;
//! - `L` - last day of the month, i.e. `L` or `1,15,L`;
//! - `?` - same as `*` for days of month or week.
//!
//! Both `0` and `7` stand for Sunday, so `MON-SUN` is a valid range. Names are case-insensitive.
//!
//! **Days of month and days of week are combined with AND**: `0 0 13 * FRI` fires on
//! Friday the 13th only, and `0 0 L * FRI` fires when the last day of a month is a Friday.
//! A `*` or `?` in either day field lifts that restriction.
//!
//! Also, short aliases for well-known schedule expressions are allowed:
//!
//! | Alias                      | Expression  |
//! |----------------------------|-------------|
//! | `@yearly` (or `@annually`) | 0 0 1 1 *   |
//! | `@monthly`                 | 0 0 1 * *   |
//! | `@weekly`                  | 0 0 * * 0   |
//! | `@daily` (or `@midnight`)  | 0 0 * * *   |
//! | `@hourly`                  | 0 * * * *   |
//!
//! ### Schedule with timezone
//! If `tz` feature is enabled, it's possible to prefix a schedule with timezone, for example:
//! - `TZ=Europe/Paris @monthly`
//! - `TZ=EET 0 12 * * *`
//!
//! ## How to use
//!
//! The main entity of the crate is a [`Schedule`] structure, which has three basic methods:
//! - [new()](Schedule::new): constructor to parse and validate provided schedule;
//! - [upcoming()](Schedule::upcoming): returns time of the next schedule's event, strictly after the provided timestamp;
//! - [iter()](Schedule::iter): returns an `Iterator` which produces a series of timestamps according to the schedule.
//!
//! A schedule may also be assembled from value sets directly with [`Predictor`], which works with
//! any type implementing [`Timestamp`], including [`NaiveDateTime`](chrono::NaiveDateTime).
//!
//! ### Example with `upcoming`
//! ```rust
//! use chrono::Utc;
//! use cron_rotor::{Result, Schedule};
//!
//! fn upcoming() -> Result<()> {
//!     let schedule = Schedule::new("0 0 * * *")?;
//!     let now = Utc::now();
//!
//!     // Get the next event's timestamp after now
//!     let next = schedule.upcoming(&now);
//!     assert!(next.is_some());
//!
//!     println!("next: {:?}", next.unwrap());
//!
//!     Ok(())
//! }
//! # upcoming().unwrap();
//! ```
//!
//! ### Example with `iter`
//! ```rust
//! use chrono::DateTime;
//! use cron_rotor::{Result, Schedule};
//!
//! fn iterator() -> Result<()> {
//!     let schedule = Schedule::new("0 0 L * FRI")?;
//!     let start = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap();
//!
//!     // Last days of month falling on Friday
//!     let next: Vec<String> = schedule.iter(&start).take(2).map(|t| t.to_rfc3339()).collect();
//!     assert_eq!(next, vec!["2024-05-31T00:00:00+00:00", "2025-01-31T00:00:00+00:00"]);
//!
//!     Ok(())
//! }
//! # iterator().unwrap();
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`Schedule`].
//! * `tz`: enables support of [schedules with timezone](#schedule-with-timezone).

mod allowed;
mod day_rotor;
/// Crate specific Error implementation.
pub mod error;
mod field;
mod pattern;
/// Rotor-based next-occurrence predictor.
pub mod predictor;
mod rotor;
/// Schedule pattern parser and upcoming event generator.
pub mod schedule;
mod timestamp;
mod utils;

// Re-export of public entities.
pub use allowed::{AllowedSet, DayConstraint};
pub use error::CronError;
pub use predictor::{Occurrences, Predictor, DEFAULT_YEAR_LIMIT};
pub use schedule::Schedule;
pub use timestamp::Timestamp;

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
