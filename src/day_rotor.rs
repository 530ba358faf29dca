use crate::{
    allowed::{AllowedSet, DayConstraint},
    rotor::Rotor,
    CronError, Result, Timestamp,
};

/// Day-of-month rotor whose permitted days depend on the year and month it is bound to.
///
/// A day qualifies when it passes the day-of-month set AND the day-of-week set.
/// [`DayConstraint::LastDayOfMonth`] matches the last calendar day of the bound month.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct DayRotor {
    month_days: AllowedSet<DayConstraint>,
    week_days: AllowedSet,
    bound: Option<(i32, u8)>,
    rotor: Rotor,
}

impl DayRotor {
    pub(crate) fn new(month_days: AllowedSet<DayConstraint>, week_days: AllowedSet) -> Self {
        Self {
            month_days,
            week_days,
            bound: None,
            rotor: Rotor::new(Vec::new()),
        }
    }

    /// Rebuilds the permitted days for `year`-`month`, unless they are computed already.
    ///
    /// Days are enumerated with the timestamp's own calendar, starting from `probe`
    /// moved to the 1st of the month. The rotor is left at its smallest day.
    pub(crate) fn recompute_for<T: Timestamp>(&mut self, probe: &T, year: i32, month: u8) -> Result<()> {
        if self.bound == Some((year, month)) {
            self.reset();
            return Ok(());
        }

        // Noon keeps the walk clear of DST transitions.
        let mut current = probe
            .at_time(12, 0)
            .and_then(|ts| ts.on_date(year, month, 1))
            .ok_or_else(|| CronError::TimestampOutOfRange(format!("{year:04}-{month:02}")))?;

        let has_last_day = self.month_days.values().contains(&DayConstraint::LastDayOfMonth);
        let mut days = Vec::with_capacity(31);
        loop {
            let next = current.add_day().filter(|next| next.month() == month);
            let day = current.day();

            let in_week = self.week_days.permits(current.day_of_week());
            let in_month =
                self.month_days.permits(DayConstraint::Day(day)) || (has_last_day && next.is_none());
            if in_month && in_week {
                days.push(day);
            }

            match next {
                Some(next) => current = next,
                None => break,
            }
        }

        self.rotor = Rotor::new(days);
        self.bound = Some((year, month));
        Ok(())
    }

    /// Day-of-month and day-of-week sets the rotor was built from.
    #[inline]
    pub(crate) fn constraints(&self) -> (&AllowedSet<DayConstraint>, &AllowedSet) {
        (&self.month_days, &self.week_days)
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.rotor.is_empty()
    }

    #[inline]
    pub(crate) fn reset(&mut self) -> bool {
        self.rotor.reset()
    }

    #[inline]
    pub(crate) fn set(&mut self, target: u8) -> bool {
        self.rotor.set(target)
    }

    #[inline]
    pub(crate) fn increment(&mut self) -> bool {
        self.rotor.increment()
    }

    #[inline]
    pub(crate) fn value(&self) -> u8 {
        self.rotor.value()
    }
}
