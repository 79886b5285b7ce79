use serde::Serialize;
use time::{Date, Duration, Time, Weekday, macros::format_description};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("empty date")]
    Empty,

    #[error("unrecognised date '{0}'")]
    Unrecognised(String),
}

/// Parse a stored date into a calendar day.
///
/// Accepts a plain `YYYY-MM-DD`, optionally followed by a time of day
/// separated by `T` or a space (`HH:MM`, `HH:MM:SS`, fractional seconds) and
/// an optional `Z` or `±HH:MM` offset. The time of day is dropped, so
/// timestamps keep the calendar day of their own offset.
pub fn parse_day(input: &str) -> Result<Date, DateError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(DateError::Empty);
    }

    let unrecognised = || DateError::Unrecognised(input.to_owned());

    let (day, rest) = match (input.get(..10), input.get(10..)) {
        (Some(day), Some(rest)) => (day, rest),
        _ => return Err(unrecognised()),
    };

    let date = Date::parse(day, format_description!("[year]-[month]-[day]"))
        .map_err(|_| unrecognised())?;

    if rest.is_empty() {
        return Ok(date);
    }

    let Some(clock) = rest
        .strip_prefix(['T', 't', ' '])
        .map(|clock| clock.trim_start())
    else {
        return Err(unrecognised());
    };

    let clock = match clock.find(['Z', 'z', '+', '-']) {
        Some(offset_at) => &clock[..offset_at],
        None => clock,
    };

    Time::parse(
        clock.trim_end(),
        format_description!("[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"),
    )
    .map_err(|_| unrecognised())?;

    Ok(date)
}

/// Whole days from `from` to `to`, negative when `to` is in the past
pub fn days_between(from: Date, to: Date) -> i64 {
    (to - from).whole_days()
}

/// Shift a day by `days`, `None` when leaving the supported calendar range
pub fn shift_day(date: Date, days: i64) -> Option<Date> {
    date.checked_add(Duration::days(days))
}

/// Seven contiguous days starting on the configured first day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Week {
    pub start: Date,
    pub end: Date,
}

impl Week {
    pub const DAYS: usize = 7;

    /// Returns the week containing `date` when weeks begin on `week_start`
    pub fn containing(date: Date, week_start: Weekday) -> Self {
        let days_since_start = (Self::DAYS as u8 + date.weekday().number_days_from_monday()
            - week_start.number_days_from_monday())
            % Self::DAYS as u8;

        let start = shift_day(date, -i64::from(days_since_start)).unwrap_or(date);
        let end = shift_day(start, Self::DAYS as i64 - 1).unwrap_or(start);

        Self { start, end }
    }

    /// Column (0-6) of `date` inside the week, `None` when it falls outside
    pub fn column_of(&self, date: Date) -> Option<u8> {
        let offset = days_between(self.start, date);

        (0..Self::DAYS as i64)
            .contains(&offset)
            .then_some(offset as u8)
    }

    pub fn contains(&self, date: Date) -> bool {
        self.column_of(date).is_some()
    }

    pub fn days(&self) -> impl Iterator<Item = Date> + '_ {
        (0..Self::DAYS as i64).filter_map(|offset| shift_day(self.start, offset))
    }
}
