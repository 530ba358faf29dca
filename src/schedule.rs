use crate::{field::Field, pattern::Pattern, CronError, Predictor, Result};
use chrono::{DateTime, TimeZone};
#[cfg(feature = "tz")]
use chrono_tz::Tz;
use std::{fmt::Display, str::FromStr};
use tracing::warn;

/// Represents a recurrence schedule parsed from its text form.
///
/// For the schedule format and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct Schedule {
    minute: Pattern,
    hour: Pattern,
    dom: Pattern,
    month: Pattern,
    dow: Pattern,
    #[cfg(feature = "tz")]
    tz: Option<Tz>,
    predictor: Predictor,
}

impl Schedule {
    /// Parses and validates provided `pattern` and constructs [`Schedule`] instance.
    ///
    /// Alternative way to construct [`Schedule`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`CronError`] in a case provided pattern is unparsable or has format errors.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let mut elements: Vec<&str> = pattern.split_whitespace().collect();
        #[cfg(feature = "tz")]
        let mut tz = None;

        // Parse and define TZ, if present
        #[cfg(feature = "tz")]
        if elements.len() >= 2 {
            if let Some((key, tz_str)) = elements[0].split_once('=') {
                if key.eq_ignore_ascii_case("TZ") {
                    let tz_value = Tz::from_str(tz_str).map_err(|_| CronError::InvalidTimeZone(tz_str.to_owned()))?;
                    tz = Some(tz_value);
                    elements.remove(0);
                }
            }
        }

        if elements.len() == 1 {
            elements = match elements[0] {
                "@yearly" | "@annually" => vec!["0", "0", "1", "1", "*"],
                "@monthly" => vec!["0", "0", "1", "*", "*"],
                "@weekly" => vec!["0", "0", "*", "*", "0"],
                "@daily" | "@midnight" => vec!["0", "0", "*", "*", "*"],
                "@hourly" => vec!["0", "*", "*", "*", "*"],
                _ => return Err(CronError::InvalidCronSchedule(pattern)),
            };
        } else if elements.len() != 5 {
            return Err(CronError::InvalidCronSchedule(pattern));
        }

        let minute = Pattern::parse(Field::Minute, elements[0])?;
        let hour = Pattern::parse(Field::Hour, elements[1])?;
        let dom = Pattern::parse(Field::DayOfMonth, elements[2])?;
        let month = Pattern::parse(Field::Month, elements[3])?;
        let dow = Pattern::parse(Field::DayOfWeek, elements[4])?;

        let predictor = Predictor::new(
            month.allowed(),
            dom.day_constraints(),
            dow.allowed(),
            hour.allowed(),
            minute.allowed(),
        )?;

        Ok(Self {
            minute,
            hour,
            dom,
            month,
            dow,
            #[cfg(feature = "tz")]
            tz,
            predictor,
        })
    }

    /// Returns time of the upcoming event, strictly after the provided `current` value.
    ///
    /// If `tz` feature isn't enabled,
    /// this method assumes that schedule timezone is the same as timezone of the provided `current` instance.
    ///
    /// If `tz` feature is enabled and [schedule uses timezone](crate#schedule-with-timezone),
    /// then method calculates time of the upcoming event with respect to the schedule's timezone:
    /// - converts `current` into schedule timezone;
    /// - calculates upcoming event time;
    /// - converts obtained upcoming value back to the timezone of the `current` instance.
    ///
    /// Returns `None` if there is no upcoming event.
    #[cfg(not(feature = "tz"))]
    #[inline]
    pub fn upcoming<Tz: TimeZone>(&self, current: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        self.upcoming_impl(current)
    }

    /// Doc is above.
    #[cfg(feature = "tz")]
    pub fn upcoming<Z: TimeZone>(&self, current: &DateTime<Z>) -> Option<DateTime<Z>> {
        if let Some(schedule_tz) = &self.tz {
            let current_tz = current.timezone();
            let current = current.with_timezone(schedule_tz);
            let result = self.upcoming_impl(&current);
            result.map(|dt| dt.with_timezone(&current_tz))
        } else {
            self.upcoming_impl(current)
        }
    }

    fn upcoming_impl<Z: TimeZone>(&self, current: &DateTime<Z>) -> Option<DateTime<Z>> {
        let mut predictor = self.predictor.clone();
        match predictor.predict(current) {
            Ok(next) => Some(next),
            Err(err) => {
                warn!(schedule = %self, %err, "no upcoming event");
                None
            }
        }
    }

    /// Returns iterator of events strictly after `current`.
    #[inline]
    pub fn iter<Z: TimeZone>(&self, current: &DateTime<Z>) -> impl Iterator<Item = DateTime<Z>> {
        ScheduleIterator {
            next: self.upcoming(current),
            schedule: self.clone(),
        }
    }

    /// Consumes [`Schedule`] and returns iterator of events strictly after `current`.
    #[inline]
    pub fn into_iter<Z: TimeZone>(self, current: &DateTime<Z>) -> impl Iterator<Item = DateTime<Z>> {
        let next = self.upcoming(current);
        ScheduleIterator { schedule: self, next }
    }

    /// Returns the predictor behind this schedule, for use with any [`Timestamp`](crate::Timestamp) type.
    ///
    /// The predictor works in the time zone of the timestamps it's given; the `TZ=` prefix isn't applied.
    #[inline]
    pub fn predictor(&self) -> Predictor {
        self.predictor.clone()
    }
}

/// Contains iterator state.
#[derive(Debug, Clone)]
struct ScheduleIterator<Z: TimeZone> {
    schedule: Schedule,
    next: Option<DateTime<Z>>,
}

impl<Z: TimeZone> Iterator for ScheduleIterator<Z> {
    type Item = DateTime<Z>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.schedule.upcoming(&current);
        Some(current)
    }
}

impl From<Schedule> for String {
    fn from(value: Schedule) -> Self {
        value.to_string()
    }
}

impl From<&Schedule> for String {
    fn from(value: &Schedule) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Schedule {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for Schedule {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Schedule {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Schedule {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        #[cfg(feature = "tz")]
        if let Some(tz) = self.tz {
            write!(f, "TZ={tz} ")?;
        }

        write!(
            f,
            "{} {} {} {} {}",
            self.minute, self.hour, self.dom, self.month, self.dow
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rstest_reuse::{apply, template};
    use std::time::Duration;

    #[rstest]
    #[case("0 9 * * *", "2021-03-01T09:00:00Z", "2021-03-02T09:00:00+00:00")]
    #[case("0 9 * * *", "2021-03-01T08:59:59Z", "2021-03-01T09:00:00+00:00")]
    #[case("* * * * *", "2024-01-01T00:00:00Z", "2024-01-01T00:01:00+00:00")]
    #[case("* * * * *", "2024-01-01T00:00:30Z", "2024-01-01T00:01:00+00:00")]
    #[case("*/15 * * * *", "2024-01-01T00:00:00Z", "2024-01-01T00:15:00+00:00")]
    #[case("*/15 * * * *", "2024-01-01T00:01:00Z", "2024-01-01T00:15:00+00:00")]
    #[case("*/15 * * * *", "2024-01-01T23:45:00Z", "2024-01-02T00:00:00+00:00")]
    #[case("*/30 9-17 * * 1-5", "2024-01-01T09:00:00Z", "2024-01-01T09:30:00+00:00")]
    #[case("*/30 9-17 * * 1-5", "2024-01-01T09:15:00Z", "2024-01-01T09:30:00+00:00")]
    #[case("*/30 9-17 * * 1-5", "2024-01-05T17:30:00Z", "2024-01-08T09:00:00+00:00")]
    #[case("0 */2 * * *", "2024-01-01T01:00:00Z", "2024-01-01T02:00:00+00:00")]
    #[case("0 0 * * 1-5", "2024-01-05T00:00:01Z", "2024-01-08T00:00:00+00:00")]
    #[case("0 0 * * 6,0", "2024-01-01T00:00:00Z", "2024-01-06T00:00:00+00:00")]
    #[case("0 0 * * 6,0", "2024-01-06T00:00:00Z", "2024-01-07T00:00:00+00:00")]
    #[case("0 0 * * 6,0", "2024-01-07T00:00:00Z", "2024-01-13T00:00:00+00:00")]
    #[case("0 0 * * MON", "2024-01-01T00:00:00Z", "2024-01-08T00:00:00+00:00")]
    #[case("0 0 * * SUN", "2024-01-01T00:00:00Z", "2024-01-07T00:00:00+00:00")]
    #[case("0 0 * * 7", "2024-01-01T00:00:00Z", "2024-01-07T00:00:00+00:00")]
    #[case("0 0 1 */2 *", "2024-01-01T00:00:00Z", "2024-03-01T00:00:00+00:00")]
    #[case("0 0 1 */3 *", "2024-02-01T00:00:00Z", "2024-04-01T00:00:00+00:00")]
    #[case("0 0 1 1,6,12 *", "2024-02-01T00:00:00Z", "2024-06-01T00:00:00+00:00")]
    #[case("0 0 1,15 * ?", "2024-01-01T00:00:00Z", "2024-01-15T00:00:00+00:00")]
    #[case("0 0 1,15 * ?", "2024-01-15T00:00:01Z", "2024-02-01T00:00:00+00:00")]
    #[case("0 0 1,15,L * ?", "2024-01-15T00:00:01Z", "2024-01-31T00:00:00+00:00")]
    #[case("0 0 1,15,L * ?", "2024-01-31T00:00:00Z", "2024-02-01T00:00:00+00:00")]
    #[case("0 0 28-31 2 *", "2024-02-28T00:00:00Z", "2024-02-29T00:00:00+00:00")]
    #[case("0 0 28-31 2 *", "2025-02-28T00:00:00Z", "2026-02-28T00:00:00+00:00")]
    #[case("0 0 29 2 *", "2021-01-01T00:00:00Z", "2024-02-29T00:00:00+00:00")]
    #[case("0 0 29 2 *", "2024-03-01T00:00:00Z", "2028-02-29T00:00:00+00:00")]
    #[case("0 0 31 * *", "2021-04-01T00:00:00Z", "2021-05-31T00:00:00+00:00")]
    #[case("0 0 31 */2 *", "2024-02-01T00:00:00Z", "2024-03-31T00:00:00+00:00")]
    #[case("0 0 L * *", "2024-01-15T00:00:00Z", "2024-01-31T00:00:00+00:00")]
    #[case("0 0 L * *", "2024-02-15T00:00:00Z", "2024-02-29T00:00:00+00:00")]
    #[case("0 0 L * *", "2023-02-15T00:00:00Z", "2023-02-28T00:00:00+00:00")]
    #[case("0 0 L * *", "2024-04-15T00:00:00Z", "2024-04-30T00:00:00+00:00")]
    #[case("0 0 L * FRI", "2024-01-01T00:00:00Z", "2024-05-31T00:00:00+00:00")]
    #[case("0 0 1 * MON", "2024-01-01T00:00:00Z", "2024-04-01T00:00:00+00:00")]
    #[case("0 0 15 * 1", "2021-01-01T00:00:00Z", "2021-02-15T00:00:00+00:00")]
    #[case("0 0 15 * 1", "2021-03-15T00:00:00Z", "2021-11-15T00:00:00+00:00")]
    #[case("0 12 * * MON-FRI", "2024-01-06T00:00:00Z", "2024-01-08T12:00:00+00:00")]
    #[case("0 12 1-7 * *", "2024-01-07T12:00:00Z", "2024-02-01T12:00:00+00:00")]
    #[case("15,45 9-17 * * 1-5", "2024-01-01T09:15:01Z", "2024-01-01T09:45:00+00:00")]
    #[case("30 0 1 * *", "2024-01-01T00:30:00.001Z", "2024-02-01T00:30:00+00:00")]
    #[case("25 * * * *", "2024-01-01T00:21:21Z", "2024-01-01T00:25:00+00:00")]
    #[case("1 2 29-31 * *", "2024-02-01T00:00:21Z", "2024-02-29T02:01:00+00:00")]
    #[case("1 2 29-31 * *", "2025-02-01T00:00:21Z", "2025-03-29T02:01:00+00:00")]
    #[case("0 9 * * *", "2024-01-01T09:00:00+02:00", "2024-01-02T09:00:00+02:00")]
    #[case("@yearly", "2025-03-31T00:00:21Z", "2026-01-01T00:00:00+00:00")]
    #[case("@annually", "2025-03-31T00:00:21Z", "2026-01-01T00:00:00+00:00")]
    #[case("@monthly", "2025-03-31T00:00:21Z", "2025-04-01T00:00:00+00:00")]
    #[case("@weekly", "2025-03-31T00:00:21Z", "2025-04-06T00:00:00+00:00")]
    #[case("@daily", "2025-03-31T00:00:21Z", "2025-04-01T00:00:00+00:00")]
    #[case("@midnight", "2025-03-31T00:00:21Z", "2025-04-01T00:00:00+00:00")]
    #[case("@hourly", "2025-03-31T00:00:21Z", "2025-03-31T01:00:00+00:00")]
    #[case("0 0 30 2 *", "2024-01-01T00:00:00Z", "None")]
    #[case("0 0 31 4,6,9,11 *", "2024-01-01T00:00:00Z", "None")]
    #[timeout(Duration::from_secs(5))]
    fn test_schedule_upcoming(#[case] pattern: &str, #[case] current: &str, #[case] expected: &str) {
        let schedule = Schedule::new(pattern).unwrap();
        let current = DateTime::parse_from_rfc3339(current).unwrap();
        let next = schedule.upcoming(&current);

        if expected == "None" {
            assert!(
                next.is_none(),
                "pattern = {pattern}, schedule = {schedule}, current = {current}, next = {next:?}"
            );
        } else {
            assert_eq!(
                next.map(|dt| dt.to_rfc3339()),
                Some(expected.to_owned()),
                "pattern = {pattern}, schedule = {schedule}, current = {current}"
            );
        }
    }

    #[rstest]
    #[timeout(Duration::from_secs(1))]
    fn test_schedule_iter_every_month() {
        let schedule = Schedule::new("0 0 L * *").unwrap();
        let current = DateTime::parse_from_rfc3339("2023-11-30T00:00:00Z").unwrap();
        let series: Vec<String> = schedule.iter(&current).take(4).map(|dt| dt.to_rfc3339()).collect();
        assert_eq!(
            series,
            vec![
                "2023-12-31T00:00:00+00:00",
                "2024-01-31T00:00:00+00:00",
                "2024-02-29T00:00:00+00:00",
                "2024-03-31T00:00:00+00:00",
            ]
        );
    }

    #[rstest]
    #[timeout(Duration::from_secs(1))]
    fn test_schedule_into_iter() {
        let schedule = Schedule::new("0 0 * * *").unwrap();
        let current = DateTime::parse_from_rfc3339("2024-12-30T12:00:00Z").unwrap();
        let series: Vec<String> = schedule.into_iter(&current).take(3).map(|dt| dt.to_rfc3339()).collect();
        assert_eq!(
            series,
            vec![
                "2024-12-31T00:00:00+00:00",
                "2025-01-01T00:00:00+00:00",
                "2025-01-02T00:00:00+00:00",
            ]
        );
    }

    #[rstest]
    #[timeout(Duration::from_secs(5))]
    fn test_schedule_iter_ends() {
        let schedule = Schedule::new("0 0 30 2 *").unwrap();
        let current = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap();
        assert_eq!(schedule.iter(&current).count(), 0);
    }

    #[test]
    fn test_predictor_with_naive_time() {
        let schedule = Schedule::new("0 9 * * *").unwrap();
        let current = chrono::NaiveDateTime::parse_from_str("2021-03-01 09:00", "%Y-%m-%d %H:%M").unwrap();
        let next = schedule.predictor().predict(&current).unwrap();
        assert_eq!(next.to_string(), "2021-03-02 09:00:00");
    }

    #[template]
    #[rstest]
    #[case("* * * *")]
    #[case("* * * * * *")]
    #[case("")]
    #[case("* * 10 * 1/2")]
    #[case("60 * * * *")]
    #[case("* 24 * * *")]
    #[case("* * 32 * *")]
    #[case("* * 0 * *")]
    #[case("* * * 13 *")]
    #[case("* * * * 8")]
    #[case("* * L,* * *")]
    #[case("* * 5-2 * *")]
    #[case("* * * * FRI-MON")]
    #[case("? * * * *")]
    #[case("@minutely")]
    fn invalid_schedules_to_test(#[case] input: &str) {}

    #[apply(invalid_schedules_to_test)]
    fn test_invalid_schedule_constructor(#[case] input: &str) {
        assert!(Schedule::new(input).is_err(), "input = {input:?}");
    }

    #[apply(invalid_schedules_to_test)]
    fn test_try_from_invalid_string(#[case] input: &str) {
        assert!(Schedule::try_from(input).is_err(), "input = {input:?}");
        assert!(Schedule::try_from(input.to_string()).is_err(), "input = {input:?}");
        assert!(Schedule::from_str(input).is_err(), "input = {input:?}");
    }

    #[rstest]
    #[case("* * * *", CronError::InvalidCronSchedule("* * * *".to_owned()))]
    #[case("@minutely", CronError::InvalidCronSchedule("@minutely".to_owned()))]
    #[case("60 * * * *", CronError::InvalidDigitalValue("60".to_owned()))]
    #[case("* * * * 1/2", CronError::InvalidRepeatingPattern("1/2".to_owned()))]
    #[case("* * 5-2 * *", CronError::InvalidRangeValue("5-2".to_owned()))]
    #[case("* * * JANUARY *", CronError::InvalidMnemonicValue("JANUARY".to_owned()))]
    fn test_invalid_schedule_errors(#[case] input: &str, #[case] expected: CronError) {
        assert_eq!(Schedule::new(input), Err(expected));
    }

    #[template]
    #[rstest]
    #[case("* * * * *", "* * * * *")]
    #[case("*/5 * * * *", "0/5 * * * *")]
    #[case("0 0 1 1 *", "0 0 1 1 *")]
    #[case("0 0 L * FRI", "0 0 L * 5")]
    #[case("0 0 ? * SUN", "0 0 ? * 0")]
    #[case("0 0 1,15,L jan-mar *", "0 0 1,15,L 1-3 *")]
    #[case("0   12\t* * MON-SUN", "0 12 * * 1-7")]
    #[case("@yearly", "0 0 1 1 *")]
    #[case("@annually", "0 0 1 1 *")]
    #[case("@monthly", "0 0 1 * *")]
    #[case("@weekly", "0 0 * * 0")]
    #[case("@daily", "0 0 * * *")]
    #[case("@midnight", "0 0 * * *")]
    #[case("@hourly", "0 * * * *")]
    fn valid_schedules_to_test(#[case] input: &str, #[case] expected: &str) {}

    #[apply(valid_schedules_to_test)]
    fn test_schedule_to_string(#[case] input: &str, #[case] expected: &str) {
        let schedule = Schedule::new(input).unwrap();
        assert_eq!(schedule.to_string(), expected);
        assert_eq!(String::from(&schedule), expected);
    }

    #[apply(valid_schedules_to_test)]
    fn test_display_round_trip(#[case] input: &str, #[case] _expected: &str) {
        let schedule = Schedule::new(input).unwrap();
        let reparsed: Schedule = schedule.to_string().parse().unwrap();
        assert_eq!(reparsed.predictor(), schedule.predictor(), "input = {input:?}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_string_form() {
        let schedule = Schedule::new("*/15 9-17 * * MON-FRI").unwrap();
        let json = serde_json::to_string(&schedule).unwrap();
        assert_eq!(json, "\"0/15 9-17 * * 1-5\"");

        let restored: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.predictor(), schedule.predictor());

        assert!(serde_json::from_str::<Schedule>("\"* * *\"").is_err());
    }

    #[cfg(feature = "tz")]
    mod tz {
        use super::super::*;
        use rstest::rstest;
        use rstest_reuse::{apply, template};
        use std::time::Duration;

        #[template]
        #[rstest]
        #[case("TZ=Europe/Kyiv * * * * *", "TZ=Europe/Kyiv * * * * *")]
        #[case("TZ=UTC */5 * * * *", "TZ=UTC 0/5 * * * *")]
        #[case("TZ=EET 0 */6 * * *", "TZ=EET 0 0/6 * * *")]
        #[case("TZ=Asia/Tokyo @yearly", "TZ=Asia/Tokyo 0 0 1 1 *")]
        #[case("Tz=Asia/Tokyo @yearly", "TZ=Asia/Tokyo 0 0 1 1 *")]
        #[case("tz=Europe/Paris @daily", "TZ=Europe/Paris 0 0 * * *")]
        fn valid_schedules_to_test(#[case] input: &str, #[case] expected: &str) {}

        #[apply(valid_schedules_to_test)]
        fn test_schedule_display_and_new(#[case] input: &str, #[case] expected: &str) {
            assert_eq!(Schedule::new(input).unwrap().to_string(), expected);
        }

        #[template]
        #[rstest]
        #[case("TZ * * * *")]
        #[case("TZ= * * * * *")]
        #[case("TZ=Aaa/Bbb * * * * *")]
        #[case("TZ=UTC * * * *")]
        #[case("TZ =UTC * * * * *")]
        #[case("tz= @hourly")]
        fn invalid_schedules_to_test(#[case] input: &str) {}

        #[apply(invalid_schedules_to_test)]
        fn test_invalid_schedule_constructor(#[case] input: &str) {
            assert!(Schedule::new(input).is_err(), "input = {input:?}");
        }

        #[rstest]
        #[case("TZ=Europe/Kyiv @monthly", "2025-03-31T00:00:21Z", "2025-03-31T21:00:00+00:00")]
        #[case("TZ=Europe/Kyiv @monthly", "2025-03-31T00:00:21+02:00", "2025-03-31T23:00:00+02:00")]
        #[case("TZ=Europe/Kyiv @monthly", "2025-11-30T00:00:21Z", "2025-11-30T22:00:00+00:00")]
        #[case("TZ=Europe/Kyiv 30 3 * * *", "2025-03-29T12:00:00Z", "2025-03-30T01:30:00+00:00")]
        #[case("TZ=Europe/Kyiv 30 3 * * *", "2025-03-30T00:59:00Z", "2025-03-30T01:30:00+00:00")]
        #[case("TZ=Europe/Kyiv 30 3 * * *", "2025-03-30T01:10:00Z", "2025-03-30T01:30:00+00:00")]
        #[case("TZ=Europe/Kyiv 30 3 * * *", "2025-03-30T04:10:00+03:00", "2025-03-30T04:30:00+03:00")]
        #[case("TZ=Europe/Kyiv * * * * *", "2025-10-26T01:30:00Z", "2025-10-26T01:31:00+00:00")]
        #[case("TZ=Europe/Kyiv 45 3 * * *", "2025-10-26T01:30:00Z", "2025-10-26T01:45:00+00:00")]
        #[case("TZ=Europe/Kyiv 45 3 * * *", "2025-10-26T00:50:00Z", "2025-10-26T01:45:00+00:00")]
        #[case("TZ=Europe/Kyiv 45 3 * * *", "2025-10-26T00:30:00Z", "2025-10-26T00:45:00+00:00")]
        #[timeout(Duration::from_secs(1))]
        fn test_schedule_upcoming(#[case] pattern: &str, #[case] current: &str, #[case] expected: &str) {
            let schedule = Schedule::new(pattern).unwrap();
            let current = DateTime::parse_from_rfc3339(current).unwrap();
            let next = schedule.upcoming(&current).map(|dt| dt.to_rfc3339());
            assert_eq!(next, Some(expected.to_owned()), "pattern = {pattern}, current = {current}");
        }
    }
}
