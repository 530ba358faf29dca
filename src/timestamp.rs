use chrono::{
    DateTime, Datelike, Days, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Timelike,
};

/// Calendar instant the [`Predictor`](crate::Predictor) works with.
///
/// Implementations own all calendar rules: month lengths, leap years,
/// weekdays and clock changes. The predictor only reads fields, replaces the
/// date or the time of day, compares instants and steps forward.
///
/// Implemented for [`NaiveDateTime`] and for [`DateTime`] in any time zone;
/// the latter exposes its fields in local time.
pub trait Timestamp: Clone + Ord {
    /// Calendar year.
    fn year(&self) -> i32;
    /// Month, `1..=12`.
    fn month(&self) -> u8;
    /// Day of month, `1..=31`.
    fn day(&self) -> u8;
    /// Hour, `0..=23`.
    fn hour(&self) -> u8;
    /// Minute, `0..=59`.
    fn minute(&self) -> u8;
    /// ISO day of week: `1` is Monday, `7` is Sunday.
    fn day_of_week(&self) -> u8;
    /// Seconds the local clock is ahead of UTC; `0` for timestamps without a zone.
    fn utc_offset(&self) -> i32;

    /// Same time of day on another date, `None` if the date doesn't exist.
    fn on_date(&self, year: i32, month: u8, day: u8) -> Option<Self>;
    /// Instants showing `hour:minute:00` on the date of `self`.
    ///
    /// A time repeated when clocks go back resolves to both instants, earlier first.
    /// A time skipped when clocks go forward resolves to the instant one hour later.
    fn resolve_time(&self, hour: u8, minute: u8) -> LocalResult<Self>;
    /// The next calendar day at the same time of day.
    fn add_day(&self) -> Option<Self>;
    /// Instant `minutes` later, or earlier for a negative value.
    fn add_minutes(&self, minutes: i64) -> Option<Self>;

    /// Same date at `hour:minute:00`, with any sub-minute part dropped.
    ///
    /// The earlier instant is taken when the time is repeated.
    #[inline]
    fn at_time(&self, hour: u8, minute: u8) -> Option<Self> {
        self.resolve_time(hour, minute).earliest()
    }
}

impl Timestamp for NaiveDateTime {
    #[inline]
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    #[inline]
    fn month(&self) -> u8 {
        Datelike::month(self) as u8
    }

    #[inline]
    fn day(&self) -> u8 {
        Datelike::day(self) as u8
    }

    #[inline]
    fn hour(&self) -> u8 {
        Timelike::hour(self) as u8
    }

    #[inline]
    fn minute(&self) -> u8 {
        Timelike::minute(self) as u8
    }

    #[inline]
    fn day_of_week(&self) -> u8 {
        self.weekday().number_from_monday() as u8
    }

    #[inline]
    fn utc_offset(&self) -> i32 {
        0
    }

    fn on_date(&self, year: i32, month: u8, day: u8) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month as u32, day as u32).map(|date| date.and_time(self.time()))
    }

    fn resolve_time(&self, hour: u8, minute: u8) -> LocalResult<Self> {
        match NaiveTime::from_hms_opt(hour as u32, minute as u32, 0) {
            Some(time) => LocalResult::Single(self.date().and_time(time)),
            None => LocalResult::None,
        }
    }

    #[inline]
    fn add_day(&self) -> Option<Self> {
        self.checked_add_days(Days::new(1))
    }

    #[inline]
    fn add_minutes(&self, minutes: i64) -> Option<Self> {
        self.checked_add_signed(TimeDelta::try_minutes(minutes)?)
    }
}

impl<Tz: TimeZone> Timestamp for DateTime<Tz> {
    #[inline]
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    #[inline]
    fn month(&self) -> u8 {
        Datelike::month(self) as u8
    }

    #[inline]
    fn day(&self) -> u8 {
        Datelike::day(self) as u8
    }

    #[inline]
    fn hour(&self) -> u8 {
        Timelike::hour(self) as u8
    }

    #[inline]
    fn minute(&self) -> u8 {
        Timelike::minute(self) as u8
    }

    #[inline]
    fn day_of_week(&self) -> u8 {
        self.weekday().number_from_monday() as u8
    }

    #[inline]
    fn utc_offset(&self) -> i32 {
        self.offset().fix().local_minus_utc()
    }

    fn on_date(&self, year: i32, month: u8, day: u8) -> Option<Self> {
        let local = Timestamp::on_date(&self.naive_local(), year, month, day)?;
        resolve_local(&self.timezone(), &local).earliest()
    }

    fn resolve_time(&self, hour: u8, minute: u8) -> LocalResult<Self> {
        match Timestamp::at_time(&self.naive_local(), hour, minute) {
            Some(local) => resolve_local(&self.timezone(), &local),
            None => LocalResult::None,
        }
    }

    fn add_day(&self) -> Option<Self> {
        let local = self.naive_local().checked_add_days(Days::new(1))?;
        resolve_local(&self.timezone(), &local).earliest()
    }

    #[inline]
    fn add_minutes(&self, minutes: i64) -> Option<Self> {
        self.clone().checked_add_signed(TimeDelta::try_minutes(minutes)?)
    }
}

/// Maps local wall time onto the zone. A time falling into a DST gap is taken
/// one hour later.
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: &NaiveDateTime) -> LocalResult<DateTime<Tz>> {
    match tz.from_local_datetime(local) {
        LocalResult::None => {
            let shifted = local
                .checked_add_signed(TimeDelta::hours(1))
                .and_then(|shifted| tz.from_local_datetime(&shifted).earliest());
            match shifted {
                Some(dt) => LocalResult::Single(dt),
                None => LocalResult::None,
            }
        }
        resolved => resolved,
    }
}
