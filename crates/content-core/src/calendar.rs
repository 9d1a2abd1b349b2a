//! Calendar grid builder.
//!
//! Computes month layouts (day count and weekday of the 1st) and overlays
//! scheduled posts onto day cells for the calendar view.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Platform, ScheduledPost};
use crate::error::DomainError;
use crate::state::ScheduleIndex;

/// Indicator marks shown per day before collapsing into a `+N` count.
pub const MAX_DAY_INDICATORS: usize = 3;

/// Months shown by the calendar view: the current one and the next two.
pub const CALENDAR_SPAN_MONTHS: u32 = 3;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Day count and first-day weekday of one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthLayout {
    pub days_in_month: u32,
    /// Weekday of the 1st, 0 = Sunday .. 6 = Saturday.
    pub starting_day_of_week: u32,
}

impl MonthLayout {
    /// Layout for `year` and zero-based `month` (0 = January).
    ///
    /// Returns `None` for a month index outside `0..=11`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if month > 11 {
            return None;
        }
        let first = NaiveDate::from_ymd_opt(year, month + 1, 1)?;
        // day 0 of the following month
        let last = first_of_next_month(year, month)?.pred_opt()?;

        Some(Self {
            days_in_month: last.day(),
            starting_day_of_week: first.weekday().num_days_from_sunday(),
        })
    }

    /// Blank cells before day 1 for a grid starting on `week_start`.
    pub fn leading_blanks(&self, week_start: WeekStart) -> u32 {
        week_start.leading_blanks(self.starting_day_of_week)
    }
}

fn first_of_next_month(year: i32, month: u32) -> Option<NaiveDate> {
    if month == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 2, 1)
    }
}

/// First column of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Blank cells preceding a month whose 1st falls on `starting_day_of_week`.
    ///
    /// With a Monday start, Sunday is the last column, not the first.
    pub fn leading_blanks(&self, starting_day_of_week: u32) -> u32 {
        match self {
            WeekStart::Sunday => starting_day_of_week,
            WeekStart::Monday => {
                if starting_day_of_week == 0 {
                    6
                } else {
                    starting_day_of_week - 1
                }
            }
        }
    }

    /// Column headers in display order.
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        match self {
            WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Monday => f.write_str("monday"),
            WeekStart::Sunday => f.write_str("sunday"),
        }
    }
}

impl FromStr for WeekStart {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(WeekStart::Monday),
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            other => Err(DomainError::Validation(format!(
                "Unknown week start: {}",
                other
            ))),
        }
    }
}

/// Calendar date of `instant` as seen in `tz`.
///
/// Day cells and scheduled dates are compared as plain dates, so a post
/// scheduled for the 15th shows on the 15th whatever the viewer's offset.
pub fn local_date<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// `(year, zero-based month)` pairs for `count` months starting at `today`'s month.
pub fn month_span(today: NaiveDate, count: u32) -> Vec<(i32, u32)> {
    let start = today.year() * 12 + today.month0() as i32;
    (0..count as i32)
        .map(|offset| {
            let index = start + offset;
            (index.div_euclid(12), index.rem_euclid(12) as u32)
        })
        .collect()
}

/// A coloured mark for one scheduled post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub platform: Platform,
    pub color: &'static str,
}

impl From<Platform> for Indicator {
    fn from(platform: Platform) -> Self {
        Self {
            platform,
            color: platform.accent_color(),
        }
    }
}

/// One day of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub is_today: bool,
    pub post_count: usize,
    /// Marks for the first few posts on this day.
    pub indicators: Vec<Indicator>,
    /// Posts beyond the indicator marks.
    pub overflow: usize,
}

impl DayCell {
    fn new(date: NaiveDate, today: NaiveDate, posts: &[&ScheduledPost]) -> Self {
        let indicators = posts
            .iter()
            .take(MAX_DAY_INDICATORS)
            .map(|p| Indicator::from(p.post.platform))
            .collect();

        Self {
            day: date.day(),
            date,
            is_today: date == today,
            post_count: posts.len(),
            indicators,
            overflow: posts.len().saturating_sub(MAX_DAY_INDICATORS),
        }
    }
}

/// A month laid out for display with scheduled posts overlaid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    /// Zero-based month index.
    pub month: u32,
    pub month_name: &'static str,
    #[serde(flatten)]
    pub layout: MonthLayout,
    pub week_start: WeekStart,
    pub weekday_labels: [&'static str; 7],
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Build the grid for `year` / zero-based `month`.
    pub fn build(
        year: i32,
        month: u32,
        week_start: WeekStart,
        today: NaiveDate,
        schedule: &ScheduleIndex,
    ) -> Option<Self> {
        let layout = MonthLayout::new(year, month)?;

        let days = (1..=layout.days_in_month)
            .filter_map(|day| NaiveDate::from_ymd_opt(year, month + 1, day))
            .map(|date| DayCell::new(date, today, &schedule.for_date(date)))
            .collect();

        Some(Self {
            year,
            month,
            month_name: MONTH_NAMES[month as usize],
            layout,
            week_start,
            weekday_labels: week_start.weekday_labels(),
            leading_blanks: layout.leading_blanks(week_start),
            days,
        })
    }

    /// Grids for the calendar view, starting at `today`'s month.
    pub fn span(
        today: NaiveDate,
        months: u32,
        week_start: WeekStart,
        schedule: &ScheduleIndex,
    ) -> Vec<Self> {
        month_span(today, months)
            .into_iter()
            .filter_map(|(year, month)| Self::build(year, month, week_start, today, schedule))
            .collect()
    }
}
