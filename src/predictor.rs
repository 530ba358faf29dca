use crate::{
    allowed::{AllowedSet, DayConstraint},
    day_rotor::DayRotor,
    field::Field,
    rotor::{Rotor, YearRotor},
    CronError, Result, Timestamp,
};
use chrono::LocalResult;
use std::hash::{Hash, Hasher};
use tracing::{debug, warn};

/// Default number of years searched ahead before giving up.
///
/// The Gregorian calendar repeats every 400 years, so a schedule without a
/// match in that span has no match at all.
pub const DEFAULT_YEAR_LIMIT: u16 = 400;

/// Minutes around a prediction where a clock change can reorder local times:
/// the largest offset change in use (two hours) plus the one-hour gap shift.
const CLOCK_CHANGE_SPAN: i64 = 180;

/// Computes the next instant matching a five-field recurrence schedule.
///
/// Each field is a rotor over its permitted values; a prediction positions the
/// rotors on the reference instant from the coarsest field down and lets the
/// carries run upward, so infrequent schedules are found without stepping
/// through every minute.
///
/// Day-of-month and day-of-week restrictions are combined with logical AND:
/// a day qualifies only if it passes both.
///
/// # Example
/// ```rust
/// use chrono::NaiveDateTime;
/// use cron_rotor::{AllowedSet, DayConstraint, Predictor, Result};
///
/// fn leap_day() -> Result<()> {
///     let mut predictor = Predictor::new(
///         AllowedSet::new([2]),
///         AllowedSet::new([DayConstraint::Day(29)]),
///         AllowedSet::wildcard(),
///         AllowedSet::new([0]),
///         AllowedSet::new([0]),
///     )?;
///
///     let current = NaiveDateTime::parse_from_str("2021-01-01 00:00", "%Y-%m-%d %H:%M").unwrap();
///     let next = predictor.predict(&current)?;
///     assert_eq!(next.to_string(), "2024-02-29 00:00:00");
///
///     Ok(())
/// }
/// # leap_day().unwrap();
/// ```
///
/// Equality and hashing consider the permitted values and the year limit only,
/// not the state left behind by earlier predictions.
#[derive(Debug, Clone)]
pub struct Predictor {
    year: YearRotor,
    month: Rotor,
    day: DayRotor,
    hour: Rotor,
    minute: Rotor,
    year_limit: u16,
}

impl Predictor {
    /// Validates the permitted values of every field and builds a predictor.
    ///
    /// Ranges: months `1..=12`, days of month `1..=31` or
    /// [`LastDayOfMonth`](DayConstraint::LastDayOfMonth), ISO days of week
    /// `1..=7` (Monday is `1`), hours `0..=23`, minutes `0..=59`.
    /// An empty (wildcard) set permits the whole range.
    pub fn new(
        months: AllowedSet,
        month_days: AllowedSet<DayConstraint>,
        week_days: AllowedSet,
        hours: AllowedSet,
        minutes: AllowedSet,
    ) -> Result<Self> {
        for constraint in month_days.values() {
            if let DayConstraint::Day(day) = constraint {
                Field::DayOfMonth.validate(*day)?;
            }
        }

        Ok(Self {
            year: YearRotor::default(),
            month: Field::Month.rotor(&months)?,
            day: DayRotor::new(month_days, Field::DayOfWeek.checked(week_days)?),
            hour: Field::Hour.rotor(&hours)?,
            minute: Field::Minute.rotor(&minutes)?,
            year_limit: DEFAULT_YEAR_LIMIT,
        })
    }

    /// Changes how many years past the reference year are searched before
    /// [`predict`](Self::predict) gives up with [`CronError::NoUpcomingInstant`].
    pub fn with_year_limit(mut self, years: u16) -> Self {
        self.year_limit = years;
        self
    }

    /// Returns the earliest whole-minute instant strictly later than `current` that matches the schedule.
    ///
    /// A `current` that matches exactly resolves to the following occurrence.
    ///
    /// Local times repeated when clocks go back match at both instants. Local times
    /// skipped when clocks go forward match one hour later.
    pub fn predict<T: Timestamp>(&mut self, current: &T) -> Result<T> {
        let start_year = current.year();
        let probe = current.at_time(12, 0).ok_or_else(|| out_of_range(current))?;

        let settled = current
            .add_minutes(-CLOCK_CHANGE_SPAN)
            .map_or(true, |earlier| earlier.utc_offset() == current.utc_offset());

        if settled {
            self.seek(current, &probe, start_year)?;
            loop {
                match self.compose(&probe)? {
                    LocalResult::Single(candidate) if self.shows(&candidate) => {
                        if candidate > *current {
                            return Ok(candidate);
                        }
                        self.advance_minute(&probe, start_year)?;
                    }
                    _ => break,
                }
            }
        }

        debug!("clock change near the prediction, scanning both sides of it");
        self.predict_across_clock_change(current, &probe, start_year)
    }

    /// Consumes the predictor and returns the series of occurrences after `start`.
    pub fn occurrences<T: Timestamp>(self, start: T) -> Occurrences<T> {
        Occurrences {
            predictor: self,
            current: Some(start),
        }
    }

    /// Positions the rotors on the earliest local time not before the one `reference` shows.
    fn seek<T: Timestamp>(&mut self, reference: &T, probe: &T, start_year: i32) -> Result<()> {
        self.month.reset();
        self.hour.reset();
        self.minute.reset();
        self.year.set(reference.year());

        // `exact` stays true while every field fixed so far equals the field of `reference`;
        // once a field moves past it, all finer fields keep their smallest values.
        let mut exact = true;
        if self.month.set(reference.month()) {
            self.year.increment();
            exact = false;
        } else if self.month.value() != reference.month() {
            exact = false;
        }

        if self.bind_days(probe, start_year)? {
            exact = false;
        }

        if exact {
            if self.day.set(reference.day()) {
                self.advance_month(probe, start_year)?;
                exact = false;
            } else if self.day.value() != reference.day() {
                exact = false;
            }
        }

        if exact {
            if self.hour.set(reference.hour()) {
                self.advance_day(probe, start_year)?;
                exact = false;
            } else if self.hour.value() != reference.hour() {
                exact = false;
            }
        }

        if exact && self.minute.set(reference.minute()) {
            self.advance_hour(probe, start_year)?;
        }
        Ok(())
    }

    /// Walks local times from `CLOCK_CHANGE_SPAN` before `current` and keeps the earliest
    /// resolved instant later than `current`.
    ///
    /// Around a clock change local order and instant order disagree, so the walk
    /// continues until local times resolve past the best instant by the same span.
    fn predict_across_clock_change<T: Timestamp>(&mut self, current: &T, probe: &T, start_year: i32) -> Result<T> {
        let earlier = current
            .add_minutes(-CLOCK_CHANGE_SPAN)
            .ok_or_else(|| out_of_range(current))?;
        self.seek(&earlier, probe, start_year)?;

        let mut best: Option<T> = None;
        loop {
            let resolved = self.compose(probe)?;
            if let (Some(best), Some(earliest)) = (&best, resolved.clone().earliest()) {
                if best.add_minutes(CLOCK_CHANGE_SPAN).map_or(true, |horizon| earliest > horizon) {
                    break;
                }
            }

            for candidate in [resolved.clone().earliest(), resolved.latest()].into_iter().flatten() {
                if candidate > *current && best.as_ref().map_or(true, |best| candidate < *best) {
                    best = Some(candidate);
                }
            }

            if let Err(err) = self.advance_minute(probe, start_year) {
                return best.ok_or(err);
            }
        }

        best.ok_or_else(|| out_of_range(current))
    }

    /// Binds the day rotor to the selected year and month, moving on to later
    /// months while the bound month has no permitted day.
    ///
    /// Returns `true` if the month had to be moved.
    fn bind_days<T: Timestamp>(&mut self, probe: &T, start_year: i32) -> Result<bool> {
        let mut moved = false;
        loop {
            let year = self.year.value();
            if year.saturating_sub(start_year) > self.year_limit as i32 {
                warn!(start_year, limit = self.year_limit, "no matching instant within the year limit");
                return Err(CronError::NoUpcomingInstant(self.year_limit));
            }

            let month = self.month.value();
            self.day.recompute_for(probe, year, month)?;
            if !self.day.is_empty() {
                return Ok(moved);
            }

            debug!(year, month, "no matching day in month, skipping");
            moved = true;
            self.hour.reset();
            self.minute.reset();
            if self.month.increment() {
                self.year.increment();
            }
        }
    }

    fn advance_month<T: Timestamp>(&mut self, probe: &T, start_year: i32) -> Result<()> {
        self.hour.reset();
        self.minute.reset();
        if self.month.increment() {
            self.year.increment();
        }
        self.bind_days(probe, start_year)?;
        Ok(())
    }

    fn advance_day<T: Timestamp>(&mut self, probe: &T, start_year: i32) -> Result<()> {
        self.hour.reset();
        self.minute.reset();
        if self.day.increment() {
            self.advance_month(probe, start_year)?;
        }
        Ok(())
    }

    fn advance_hour<T: Timestamp>(&mut self, probe: &T, start_year: i32) -> Result<()> {
        self.minute.reset();
        if self.hour.increment() {
            self.advance_day(probe, start_year)?;
        }
        Ok(())
    }

    fn advance_minute<T: Timestamp>(&mut self, probe: &T, start_year: i32) -> Result<()> {
        if self.minute.increment() {
            self.advance_hour(probe, start_year)?;
        }
        Ok(())
    }

    /// Resolves the local time the rotors currently point to.
    fn compose<T: Timestamp>(&self, probe: &T) -> Result<LocalResult<T>> {
        let (year, month, day) = (self.year.value(), self.month.value(), self.day.value());
        let (hour, minute) = (self.hour.value(), self.minute.value());

        match probe.on_date(year, month, day).map(|ts| ts.resolve_time(hour, minute)) {
            Some(LocalResult::None) | None => Err(CronError::TimestampOutOfRange(format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}"
            ))),
            Some(resolved) => Ok(resolved),
        }
    }

    /// Whether `candidate` shows the hour and minute the rotors point to, i.e. wasn't moved by a clock change.
    #[inline]
    fn shows<T: Timestamp>(&self, candidate: &T) -> bool {
        candidate.hour() == self.hour.value() && candidate.minute() == self.minute.value()
    }
}

impl PartialEq for Predictor {
    fn eq(&self, other: &Self) -> bool {
        self.month.values() == other.month.values()
            && self.day.constraints() == other.day.constraints()
            && self.hour.values() == other.hour.values()
            && self.minute.values() == other.minute.values()
            && self.year_limit == other.year_limit
    }
}

impl Eq for Predictor {}

impl Hash for Predictor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.month.values().hash(state);
        self.day.constraints().hash(state);
        self.hour.values().hash(state);
        self.minute.values().hash(state);
        self.year_limit.hash(state);
    }
}

fn out_of_range<T: Timestamp>(current: &T) -> CronError {
    CronError::TimestampOutOfRange(format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        current.year(),
        current.month(),
        current.day(),
        current.hour(),
        current.minute()
    ))
}

/// Iterator over successive occurrences of a [`Predictor`], see [`Predictor::occurrences`].
#[derive(Debug, Clone)]
pub struct Occurrences<T> {
    predictor: Predictor,
    current: Option<T>,
}

impl<T: Timestamp> Iterator for Occurrences<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let next = self.predictor.predict(&current).ok()?;
        self.current = Some(next.clone());
        Some(next)
    }
}
