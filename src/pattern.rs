use crate::{
    allowed::{AllowedSet, DayConstraint},
    field::Field,
    CronError, Result,
};
use std::{collections::BTreeSet, fmt::Display};

/// Parsed text of a single schedule field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Pattern {
    field: Field,
    item: PatternItem,
}

impl Pattern {
    pub(crate) fn parse(field: Field, input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(CronError::InvalidCronPattern(input.to_owned()));
        }

        let mut items = input
            .split(',')
            .map(|value| PatternItem::parse(field, value))
            .collect::<Result<Vec<_>>>()?;

        if items.len() > 1 && items.iter().any(PatternItem::is_wildcard) {
            return Err(CronError::InvalidCronPattern(input.to_owned()));
        }

        let item = if items.len() > 1 {
            PatternItem::List(items)
        } else {
            items.remove(0)
        };

        Ok(Self { field, item })
    }

    /// Permitted values of the field; days of week come out as ISO numbers `1..=7`.
    pub(crate) fn allowed(&self) -> AllowedSet {
        match self.expand() {
            None => AllowedSet::wildcard(),
            Some((values, _)) if self.field == Field::DayOfWeek => {
                values.into_iter().map(|dow| if dow == 0 { 7 } else { dow }).collect()
            }
            Some((values, _)) => values.into_iter().collect(),
        }
    }

    /// Permitted days of month, including the `L` marker.
    pub(crate) fn day_constraints(&self) -> AllowedSet<DayConstraint> {
        match self.expand() {
            None => AllowedSet::wildcard(),
            Some((values, last_day)) => values
                .into_iter()
                .map(DayConstraint::Day)
                .chain(last_day.then_some(DayConstraint::LastDayOfMonth))
                .collect(),
        }
    }

    /// Listed values and the last-day flag, or `None` for a wildcard.
    fn expand(&self) -> Option<(BTreeSet<u8>, bool)> {
        if self.item.is_wildcard() {
            return None;
        }

        let mut values = BTreeSet::new();
        let mut last_day = false;
        self.item.expand_into(self.field, &mut values, &mut last_day);
        Some((values, last_day))
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.item)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum PatternItem {
    All,
    Any,
    Particular(u8),
    List(Vec<PatternItem>),
    // start-finish
    Range(u8, u8),
    // start/step
    RepeatingValue(u8, u8),
    // start-finish/step
    RepeatingRange(u8, u8, u8),
    LastDom,
}

impl PatternItem {
    fn parse(field: Field, value: &str) -> Result<Self> {
        if value == "*" {
            Ok(Self::All)
        } else if value == "?" && matches!(field, Field::DayOfMonth | Field::DayOfWeek) {
            Ok(Self::Any)
        } else if value == "L" && field == Field::DayOfMonth {
            Ok(Self::LastDom)
        } else if let Some((base, step)) = value.split_once('/') {
            if field == Field::DayOfWeek {
                return Err(CronError::InvalidRepeatingPattern(value.to_owned()));
            }

            let (min, max) = field.min_max();
            let step = step
                .parse::<u8>()
                .ok()
                .filter(|step| (2..=max).contains(step))
                .ok_or_else(|| CronError::InvalidRepeatingPattern(value.to_owned()))?;

            if base == "*" {
                Ok(Self::RepeatingValue(min, step))
            } else if let Some((start, end)) = base.split_once('-') {
                let (start, end) = Self::parse_range(field, start, end, value)?;
                Ok(Self::RepeatingRange(start, end, step))
            } else {
                Ok(Self::RepeatingValue(field.parse(base)?, step))
            }
        } else if let Some((start, end)) = value.split_once('-') {
            let (start, end) = Self::parse_range(field, start, end, value)?;
            Ok(Self::Range(start, end))
        } else {
            Ok(Self::Particular(field.parse(value)?))
        }
    }

    fn parse_range(field: Field, start: &str, end: &str, value: &str) -> Result<(u8, u8)> {
        let start = field.parse(start)?;
        let mut end = field.parse(end)?;
        // SUN closes a weekday range as 7: `MON-SUN`
        if field == Field::DayOfWeek && end == 0 {
            end = 7;
        }

        if start >= end {
            return Err(CronError::InvalidRangeValue(value.to_owned()));
        }
        Ok((start, end))
    }

    #[inline]
    fn is_wildcard(&self) -> bool {
        matches!(self, Self::All | Self::Any)
    }

    fn expand_into(&self, field: Field, values: &mut BTreeSet<u8>, last_day: &mut bool) {
        match self {
            Self::All | Self::Any => {
                let (min, max) = field.min_max();
                values.extend(min..=max);
            }
            Self::Particular(value) => {
                values.insert(*value);
            }
            Self::List(items) => {
                for item in items {
                    item.expand_into(field, values, last_day);
                }
            }
            Self::Range(start, end) => values.extend(*start..=*end),
            Self::RepeatingValue(start, step) => {
                let (_min, max) = field.min_max();
                values.extend((*start..=max).step_by(*step as usize));
            }
            Self::RepeatingRange(start, end, step) => {
                values.extend((*start..=*end).step_by(*step as usize));
            }
            Self::LastDom => *last_day = true,
        }
    }
}

impl Display for PatternItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternItem::All => write!(f, "*"),
            PatternItem::Any => write!(f, "?"),
            PatternItem::LastDom => write!(f, "L"),
            PatternItem::RepeatingValue(value, repeater) => write!(f, "{value}/{repeater}"),
            PatternItem::RepeatingRange(start, end, repeater) => write!(f, "{start}-{end}/{repeater}"),
            PatternItem::Range(start, end) => write!(f, "{start}-{end}"),
            PatternItem::Particular(value) => write!(f, "{value}"),
            PatternItem::List(items) => {
                let values = items.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
                write!(f, "{values}")
            }
        }
    }
}
