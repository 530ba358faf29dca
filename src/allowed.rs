use crate::CronError;
use std::{collections::BTreeSet, fmt::Display};

/// Permitted values of one schedule field.
///
/// Values are kept sorted and deduplicated. An empty set is a wildcard: every
/// value in the field's natural range is permitted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AllowedSet<T = u8> {
    values: Vec<T>,
}

impl<T: Ord + Copy> AllowedSet<T> {
    /// Set that permits every value of the field.
    #[inline]
    pub fn wildcard() -> Self {
        Self { values: Vec::new() }
    }

    /// Builds a set from arbitrary values, sorting and removing duplicates.
    ///
    /// An empty input yields a wildcard.
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        values.into_iter().collect()
    }

    /// Returns `true` if the set doesn't restrict the field.
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if `value` passes this set; a wildcard permits anything.
    #[inline]
    pub fn permits(&self, value: T) -> bool {
        self.is_wildcard() || self.values.binary_search(&value).is_ok()
    }

    /// Explicitly listed values in ascending order, empty for a wildcard.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl AllowedSet<u8> {
    /// Ascending list of permitted values with a wildcard expanded to `min..=max`.
    pub(crate) fn resolve(&self, min: u8, max: u8) -> Vec<u8> {
        if self.is_wildcard() {
            (min..=max).collect()
        } else {
            self.values.clone()
        }
    }
}

impl<T: Ord + Copy> Default for AllowedSet<T> {
    fn default() -> Self {
        Self::wildcard()
    }
}

impl<T: Ord + Copy> FromIterator<T> for AllowedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: BTreeSet<T> = iter.into_iter().collect();
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl<T: Ord + Copy, const N: usize> From<[T; N]> for AllowedSet<T> {
    fn from(values: [T; N]) -> Self {
        Self::new(values)
    }
}

/// Single day-of-month restriction.
///
/// Ordering puts [`LastDayOfMonth`](DayConstraint::LastDayOfMonth) after every
/// numbered day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayConstraint {
    /// Particular day of month, `1..=31`.
    Day(u8),
    /// The last calendar day of whatever month is evaluated.
    LastDayOfMonth,
}

impl DayConstraint {
    /// Numeric code of the last-day marker, kept for callers that encode it as a day number.
    pub const LAST_DAY_CODE: u8 = 32;
}

impl TryFrom<u8> for DayConstraint {
    type Error = CronError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=31 => Ok(Self::Day(value)),
            Self::LAST_DAY_CODE => Ok(Self::LastDayOfMonth),
            _ => Err(CronError::InvalidDayOfMonthValue(value.to_string())),
        }
    }
}

impl Display for DayConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayConstraint::Day(day) => write!(f, "{day}"),
            DayConstraint::LastDayOfMonth => write!(f, "L"),
        }
    }
}
