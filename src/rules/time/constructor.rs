//! Declarative date construction.
//!
//! A [`DateSpec`] describes a timestamp relative to a reference clock: some
//! fields are pinned, some are read from regex captures, the rest default to
//! the reference. Rules hold one spec per produced timestamp and evaluate it
//! with [`DateSpec::build`] once their pattern has matched.

use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};
use regex::Captures;

use crate::rules::time::helpers::calendar::{date_from_parts, days_in_month, shift_months};
use crate::rules::time::helpers::{month_number, weekday_offset};

/// Symbolic table a capture is read through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueMap {
    /// Weekday name to days since Monday.
    Weekday,
    /// Month name to 1-based month number.
    MonthName,
}

/// A value read from a capture group at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub index: usize,
    pub map: Option<ValueMap>,
    pub negated: bool,
    pub offset: i64,
}

impl Capture {
    pub const fn negated(self) -> Self {
        Self { negated: !self.negated, ..self }
    }

    /// Add a constant after parsing (and after negation).
    pub const fn plus(self, offset: i64) -> Self {
        Self { offset: self.offset + offset, ..self }
    }

    fn resolve(&self, caps: &Captures<'_>) -> Option<i64> {
        let text = caps.get(self.index)?.as_str();
        let value = match self.map {
            None => text.parse::<i64>().ok()?,
            Some(ValueMap::Weekday) => weekday_offset(text)?,
            Some(ValueMap::MonthName) => month_number(text)?,
        };
        let value = if self.negated { -value } else { value };
        value.checked_add(self.offset)
    }
}

/// Integer value of capture group `index`.
pub const fn group(index: usize) -> Capture {
    Capture { index, map: None, negated: false, offset: 0 }
}

/// Weekday offset named by capture group `index`.
pub const fn weekday_of(index: usize) -> Capture {
    Capture { map: Some(ValueMap::Weekday), ..group(index) }
}

/// Month number named by capture group `index`.
pub const fn month_of(index: usize) -> Capture {
    Capture { map: Some(ValueMap::MonthName), ..group(index) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Literal(i64),
    Capture(Capture),
    /// Last day of the resolved month. Only meaningful for `day`.
    LastDayOfMonth,
}

pub const LAST_DAY: Field = Field::LastDayOfMonth;

impl From<i32> for Field {
    fn from(value: i32) -> Self {
        Field::Literal(value.into())
    }
}

impl From<Capture> for Field {
    fn from(capture: Capture) -> Self {
        Field::Capture(capture)
    }
}

/// When a built date moves back a year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum YearRounding {
    #[default]
    Off,
    /// When the date's own month is after the reference month.
    OwnMonth,
    /// When the given month is after the reference month.
    Pivot(i64),
}

fn value_of(field: Option<Field>, caps: &Captures<'_>, default: i64) -> Option<i64> {
    match field {
        None => Some(default),
        Some(Field::Literal(value)) => Some(value),
        Some(Field::Capture(capture)) => capture.resolve(caps),
        Some(Field::LastDayOfMonth) => None,
    }
}

/// Field configuration for one constructed timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateSpec {
    year: Option<Field>,
    month: Option<Field>,
    month_name: Option<Field>,
    day: Option<Field>,
    hour: Option<Field>,
    minute: Option<Field>,
    second: Option<Field>,
    dyear: Option<Field>,
    dmonth: Option<Field>,
    dweek: Option<Field>,
    dday: Option<Field>,
    dhour: Option<Field>,
    dminute: Option<Field>,
    dsecond: Option<Field>,
    weekday: Option<Field>,
    round_year: YearRounding,
}

/// Start a spec that, left as is, reproduces the reference time.
pub fn at() -> DateSpec {
    DateSpec::default()
}

macro_rules! setters {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name(mut self, value: impl Into<Field>) -> Self {
                self.$name = Some(value.into());
                self
            }
        )*
    };
}

impl DateSpec {
    setters!(year, month, day, hour, minute, second, dyear, dmonth, dweek, dday, dhour, dminute, weekday);

    /// Seconds delta. No rule sets it; it is applied as minutes by [`build`](Self::build).
    #[allow(dead_code)]
    pub fn dsecond(mut self, value: impl Into<Field>) -> Self {
        self.dsecond = Some(value.into());
        self
    }

    /// Month read by name from capture group `index`; overrides `month`.
    pub fn month_name(mut self, index: usize) -> Self {
        self.month_name = Some(month_of(index).into());
        self
    }

    /// Move the date into the previous year when its month lies after the
    /// reference month ("sevgililer günü" in June means last February).
    pub fn round_year(mut self) -> Self {
        self.round_year = YearRounding::OwnMonth;
        self
    }

    /// Like [`round_year`](Self::round_year) but decided by `month` instead
    /// of the date's own month, so the end of a span that wraps the year
    /// stays in the same occurrence as its start.
    pub fn round_year_by(mut self, month: i32) -> Self {
        self.round_year = YearRounding::Pivot(month.into());
        self
    }

    pub fn hms(self, hour: i32, minute: i32, second: i32) -> Self {
        self.hour(hour).minute(minute).second(second)
    }

    pub fn start_of_day(self) -> Self {
        self.hms(0, 0, 0)
    }

    pub fn end_of_day(self) -> Self {
        self.hms(23, 59, 59)
    }

    /// Evaluate against the captures of a successful match.
    ///
    /// Returns `None` when a capture is missing or unparseable, or when the
    /// assembled date does not exist.
    pub fn build(&self, caps: &Captures<'_>, reference: NaiveDateTime) -> Option<NaiveDateTime> {
        let today = reference.date();

        let mut year = value_of(self.year, caps, today.year().into())?;
        let mut month = match self.month_name {
            Some(_) => value_of(self.month_name, caps, today.month().into())?,
            None => value_of(self.month, caps, today.month().into())?,
        };

        let pivot = match self.round_year {
            YearRounding::Off => None,
            YearRounding::OwnMonth => Some(month),
            YearRounding::Pivot(pivot) => Some(pivot),
        };
        if pivot.is_some_and(|pivot| i64::from(today.month()) < pivot) {
            year -= 1;
        }

        year = year.checked_add(value_of(self.dyear, caps, 0)?)?;

        if self.dmonth.is_some() {
            (year, month) = shift_months(year, month, value_of(self.dmonth, caps, 0)?);
        }

        let day = match self.day {
            Some(Field::LastDayOfMonth) => days_in_month(year, month)?.into(),
            day => value_of(day, caps, today.day().into())?,
        };
        let hour = value_of(self.hour, caps, reference.hour().into())?;
        let minute = value_of(self.minute, caps, reference.minute().into())?;
        let second = value_of(self.second, caps, reference.second().into())?;

        let mut out = date_from_parts(year, month, day)?.and_hms_opt(
            u32::try_from(hour).ok()?,
            u32::try_from(minute).ok()?,
            u32::try_from(second).ok()?,
        )?;

        out = out.checked_add_signed(TimeDelta::try_weeks(value_of(self.dweek, caps, 0)?)?)?;
        out = out.checked_add_signed(TimeDelta::try_days(value_of(self.dday, caps, 0)?)?)?;

        if self.weekday.is_some() {
            let target = value_of(self.weekday, caps, 0)?;
            let shift = target - i64::from(today.weekday().num_days_from_monday());
            out = out.checked_add_signed(TimeDelta::try_days(shift)?)?;
        }

        out = out.checked_add_signed(TimeDelta::try_hours(value_of(self.dhour, caps, 0)?)?)?;
        out = out.checked_add_signed(TimeDelta::try_minutes(value_of(self.dminute, caps, 0)?)?)?;
        // Known defect, kept for output compatibility: `dsecond` shifts by minutes.
        out = out.checked_add_signed(TimeDelta::try_minutes(value_of(self.dsecond, caps, 0)?)?)?;

        Some(out)
    }
}
