//! Date resolution: user tokens to validated calendar dates.
//!
//! A day token resolves in a fixed order, first match wins:
//!
//! 1. an explicit `year/month/day` (exactly three `/`-separated parts),
//! 2. a unique prefix of `today`, `yesterday` or `tomorrow`,
//! 3. an alias name, where the caller supplies an alias source.
//!
//! Explicit components are never clamped: `2025/4/31` is rejected rather than
//! rolled over to May 1st. Month tokens for the calendar accept `year/month`
//! or a unique prefix of `last`/`next`, which move by whole calendar months.

use crate::constants::{DATE_SEPARATOR, DAY_KEYWORDS, MONTH_KEYWORDS};
use crate::errors::{AppError, AppResult, DateError};
use crate::matching::{match_prefix, PrefixMatch};
use chrono::{Datelike, Local, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A real Gregorian calendar day.
///
/// Ordering is chronological (year, then month, then day, compared as
/// integers). Displays as unpadded `year/month/day`.
///
/// # Examples
///
/// ```
/// use daybook::dates::CalendarDate;
///
/// let date = CalendarDate::new(2025, 1, 6).unwrap();
/// assert_eq!(date.to_string(), "2025/1/6");
/// assert!(CalendarDate::new(2025, 2, 30).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from components, requiring that calendar normalization
    /// returns exactly the same year, month and day.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .filter(|date| date.year() == year && date.month() == month && date.day() == day)
            .map(CalendarDate)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// The year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The month component, 1-based.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The day-of-month component, 1-based.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The underlying chrono date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// The day before, if representable.
    pub fn pred(&self) -> Option<Self> {
        self.0.pred_opt().map(CalendarDate)
    }

    /// The day after, if representable.
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(CalendarDate)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year(), self.month(), self.day())
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses an explicit `year/month/day` token.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = token.split(DATE_SEPARATOR).collect();
        match parts.as_slice() {
            [year, month, day] => CalendarDate::new(
                parse_component("year", year)?,
                parse_component("month", month)?,
                parse_component("day", day)?,
            ),
            _ => Err(DateError::Format(token.to_string())),
        }
    }
}

/// A calendar month, used by the calendar view.
///
/// # Examples
///
/// ```
/// use daybook::dates::YearMonth;
///
/// let january = YearMonth::new(2025, 1).unwrap();
/// assert_eq!(january.offset(-1).unwrap().to_string(), "2024/12");
/// assert_eq!(january.days_in_month(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// Builds a month, rejecting months outside 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(YearMonth)
            .ok_or(DateError::OutOfRange)
    }

    /// The year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The month component, 1-based.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// Number of days in the month, leap years included.
    pub fn days_in_month(&self) -> u32 {
        self.0
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .map_or(31, |last| last.day())
    }

    /// Moves by whole calendar months, wrapping across year boundaries.
    pub fn offset(&self, months: i32) -> Result<Self, DateError> {
        let shifted = if months >= 0 {
            self.0.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.0.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        shifted.map(YearMonth).ok_or(DateError::OutOfRange)
    }
}

impl From<CalendarDate> for YearMonth {
    fn from(date: CalendarDate) -> Self {
        // Day 1 of any valid date's month is always valid.
        YearMonth(date.naive().with_day(1).unwrap_or(date.naive()))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.year(), self.month())
    }
}

/// Source of alias definitions consulted when a day token is neither an
/// explicit date nor a keyword.
///
/// Returns the raw stored `year/month/day` text of the alias, if defined.
pub trait AliasSource {
    /// Looks up `name`, returning its stored date text.
    fn alias_date(&self, name: &str) -> AppResult<Option<String>>;
}

impl<F> AliasSource for F
where
    F: Fn(&str) -> AppResult<Option<String>>,
{
    fn alias_date(&self, name: &str) -> AppResult<Option<String>> {
        self(name)
    }
}

/// Resolves day and month tokens relative to a fixed reference date.
///
/// The reference date is taken once per invocation so that every token in a
/// command sees the same "today".
#[derive(Debug, Clone, Copy)]
pub struct DateResolver {
    today: CalendarDate,
}

impl DateResolver {
    /// Creates a resolver anchored at `today`.
    pub fn new(today: NaiveDate) -> Self {
        DateResolver {
            today: CalendarDate(today),
        }
    }

    /// Creates a resolver anchored at the local date of the process clock.
    pub fn from_clock() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// The reference date.
    pub fn today(&self) -> CalendarDate {
        self.today
    }

    /// Resolves a day token.
    ///
    /// # Errors
    ///
    /// - `AppError::Date` for malformed components or impossible dates
    /// - `AppError::Match` for an ambiguous keyword prefix, or for an unknown
    ///   token when no alias source is given
    /// - `AppError::AliasNotFound` for an unknown token when aliases apply
    pub fn resolve_day(
        &self,
        token: &str,
        aliases: Option<&dyn AliasSource>,
    ) -> AppResult<CalendarDate> {
        if token.split(DATE_SEPARATOR).count() == 3 {
            let date = token.parse::<CalendarDate>()?;
            debug!("Resolved explicit date {}", date);
            return Ok(date);
        }

        let outcome = match_prefix(token, DAY_KEYWORDS);
        if !matches!(outcome, PrefixMatch::Unique(_)) {
            if let Some(source) = aliases {
                if let Some(stored) = source.alias_date(token)? {
                    let date = stored.parse::<CalendarDate>()?;
                    debug!("Resolved alias '{}' to {}", token, date);
                    return Ok(date);
                }
                if outcome == PrefixMatch::NoMatch {
                    return Err(AppError::AliasNotFound(token.to_string()));
                }
            }
        }

        let keyword = outcome.into_result(token, DAY_KEYWORDS)?;
        let date = match keyword {
            "yesterday" => self.today.pred(),
            "tomorrow" => self.today.succ(),
            _ => Some(self.today),
        }
        .ok_or(DateError::OutOfRange)?;
        debug!("Resolved keyword '{}' to {}", keyword, date);
        Ok(date)
    }

    /// Resolves an optional month token; `None` is the current month.
    ///
    /// # Errors
    ///
    /// - `AppError::Date` for malformed components or a month outside 1..=12
    /// - `AppError::Match` for a token that is not a unique prefix of `last`/`next`
    pub fn resolve_month(&self, token: Option<&str>) -> AppResult<YearMonth> {
        let current = YearMonth::from(self.today);
        let Some(token) = token else {
            return Ok(current);
        };

        let parts: Vec<&str> = token.split(DATE_SEPARATOR).collect();
        if let [year, month] = parts.as_slice() {
            let month = YearMonth::new(
                parse_component("year", year)?,
                parse_component("month", month)?,
            )?;
            return Ok(month);
        }

        let keyword = match_prefix(token, MONTH_KEYWORDS).into_result(token, MONTH_KEYWORDS)?;
        let month = match keyword {
            "last" => current.offset(-1)?,
            _ => current.offset(1)?,
        };
        debug!("Resolved keyword '{}' to {}", keyword, month);
        Ok(month)
    }
}

fn parse_component<T: FromStr>(component: &'static str, value: &str) -> Result<T, DateError> {
    value.parse::<T>().map_err(|_| DateError::InvalidComponent {
        component,
        value: value.to_string(),
    })
}
