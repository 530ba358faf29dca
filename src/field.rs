use crate::{allowed::AllowedSet, rotor::Rotor, utils, CronError, Result};

/// One of the five fields of a recurrence schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Field {
    Minute = 0,
    Hour = 1,
    DayOfMonth = 2,
    Month = 3,
    DayOfWeek = 4,
}

impl Field {
    const DAYS_OF_WEEK: [&'static str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
    const MONTHS: [&'static str; 12] = [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ];

    /// Natural range of the field as the predictor sees it; days of week are ISO, `1..=7`.
    pub(crate) fn min_max(&self) -> (u8, u8) {
        match self {
            Self::Minute => (0, 59),
            Self::Hour => (0, 23),
            Self::DayOfMonth => (1, 31),
            Self::Month => (1, 12),
            Self::DayOfWeek => (1, 7),
        }
    }

    /// Range accepted in schedule text; day of week `0` is an alias of Sunday there.
    fn text_min_max(&self) -> (u8, u8) {
        match self {
            Self::DayOfWeek => (0, 7),
            _ => self.min_max(),
        }
    }

    fn out_of_range(&self, value: u8) -> CronError {
        let value = value.to_string();
        match self {
            Self::Minute => CronError::InvalidMinuteValue(value),
            Self::Hour => CronError::InvalidHourValue(value),
            Self::DayOfMonth => CronError::InvalidDayOfMonthValue(value),
            Self::Month => CronError::InvalidMonthValue(value),
            Self::DayOfWeek => CronError::InvalidDayOfWeekValue(value),
        }
    }

    /// Checks that `value` lies within the natural range.
    pub(crate) fn validate(&self, value: u8) -> Result<u8> {
        let (min, max) = self.min_max();
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(self.out_of_range(value))
        }
    }

    /// Returns `allowed` back if every listed value is within the natural range.
    pub(crate) fn checked(&self, allowed: AllowedSet) -> Result<AllowedSet> {
        for value in allowed.values() {
            self.validate(*value)?;
        }
        Ok(allowed)
    }

    /// Validated rotor over `allowed`, with a wildcard expanded to the natural range.
    pub(crate) fn rotor(&self, allowed: &AllowedSet) -> Result<Rotor> {
        let (min, max) = self.min_max();
        for value in allowed.values() {
            self.validate(*value)?;
        }
        Ok(Rotor::new(allowed.resolve(min, max)))
    }

    /// Parses a single value of the field, numeric or mnemonic.
    ///
    /// Day of week is returned as written: `0` and `SUN` stay `0`.
    pub(crate) fn parse(&self, input: &str) -> Result<u8> {
        let (min, max) = self.text_min_max();
        if let Some(value) = utils::parse_digital_value(input, min, max) {
            return Ok(value);
        }

        let names: &[&str] = match self {
            Self::Month => &Self::MONTHS,
            Self::DayOfWeek => &Self::DAYS_OF_WEEK,
            Self::Minute | Self::Hour | Self::DayOfMonth => {
                return Err(CronError::InvalidDigitalValue(input.to_owned()));
            }
        };

        match utils::parse_string_value(input, names) {
            Some(index) if *self == Self::Month => Ok(index + 1),
            Some(index) => Ok(index),
            None => Err(CronError::InvalidMnemonicValue(input.to_owned())),
        }
    }
}
