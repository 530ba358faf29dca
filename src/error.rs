use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CronError {
    /// Schedule has a wrong number of fields or an unknown alias.
    #[error("invalid cron schedule: {0}")]
    InvalidCronSchedule(String),
    /// Error parsing a single field of the schedule.
    #[error("invalid schedule pattern: {0}")]
    InvalidCronPattern(String),
    /// Numeric value can't be parsed or is out of the field's range.
    #[error("invalid digital value: {0}")]
    InvalidDigitalValue(String),
    /// Value is neither a number nor a known month or weekday name.
    #[error("invalid mnemonic value: {0}")]
    InvalidMnemonicValue(String),
    /// Invalid range value specified.
    #[error("invalid range value: {0}")]
    InvalidRangeValue(String),
    /// Invalid repeating pattern specified.
    #[error("invalid repeating pattern: {0}")]
    InvalidRepeatingPattern(String),
    /// Invalid month value specified.
    #[error("invalid month value: {0}")]
    InvalidMonthValue(String),
    /// Invalid day of month value specified.
    #[error("invalid day of month value: {0}")]
    InvalidDayOfMonthValue(String),
    /// Invalid day of week value specified.
    #[error("invalid day of week value: {0}")]
    InvalidDayOfWeekValue(String),
    /// Invalid hour value specified.
    #[error("invalid hour value: {0}")]
    InvalidHourValue(String),
    /// Invalid minute value specified.
    #[error("invalid minute value: {0}")]
    InvalidMinuteValue(String),
    /// Unknown time zone name in the `TZ=` prefix.
    #[error("invalid time zone: {0}")]
    InvalidTimeZone(String),
    /// The timestamp type can't represent the requested date.
    #[error("timestamp out of range: {0}")]
    TimestampOutOfRange(String),
    /// Nothing satisfies the schedule within the searched span of years.
    #[error("no upcoming instant within {0} years")]
    NoUpcomingInstant(u16),
}
