use super::CalendarConfig;
use std::iter::successors;
use time::{Date, Month, Weekday};

pub(crate) const WEEK_DAYS: usize = 7;

pub(crate) trait WeekdayExt {
    fn index0(&self) -> u8;
    fn short_label(&self) -> &'static str;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u8 {
        self.number_days_from_sunday()
    }

    fn short_label(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Su",
            Weekday::Monday => "Mo",
            Weekday::Tuesday => "Tu",
            Weekday::Wednesday => "We",
            Weekday::Thursday => "Th",
            Weekday::Friday => "Fr",
            Weekday::Saturday => "Sa",
        }
    }
}

/// One cell of a week strip or month grid: a calendar date plus the display
/// flags derived from it.  Identity is the date alone; the flags are
/// recomputed state, so equality ignores them.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CalendarDay {
    pub(crate) date: Date,
    pub(crate) selected: bool,
    pub(crate) enabled: bool,
    pub(crate) current_month: bool,
    pub(crate) show_weekday: bool,
    pub(crate) week_highlighted: bool,
}

impl CalendarDay {
    /// A cell for the week strip, where every day carries its weekday label.
    /// Cells are built unselected; the owning window applies the selection.
    pub(super) fn strip(date: Date, today: Date, config: &CalendarConfig) -> CalendarDay {
        CalendarDay {
            date,
            selected: false,
            enabled: enabled_on(date, today, config),
            current_month: true,
            show_weekday: true,
            week_highlighted: false,
        }
    }

    /// A cell for a month page anchored at `anchor_month`.  Only the first
    /// grid row carries weekday labels.
    pub(super) fn grid(
        date: Date,
        today: Date,
        config: &CalendarConfig,
        anchor_month: Month,
        show_weekday: bool,
    ) -> CalendarDay {
        CalendarDay {
            date,
            selected: false,
            enabled: enabled_on(date, today, config),
            current_month: date.month() == anchor_month,
            show_weekday,
            week_highlighted: false,
        }
    }

    pub(crate) fn day(&self) -> u8 {
        self.date.day()
    }

    pub(crate) fn month(&self) -> Month {
        self.date.month()
    }

    pub(crate) fn weekday_label(&self) -> &'static str {
        self.date.weekday().short_label()
    }
}

impl PartialEq for CalendarDay {
    fn eq(&self, other: &CalendarDay) -> bool {
        self.date == other.date
    }
}

impl Eq for CalendarDay {}

fn enabled_on(date: Date, today: Date, config: &CalendarConfig) -> bool {
    (date <= today || config.allow_future)
        && config.from.map_or(true, |floor| date >= floor)
}

pub(super) fn iter_days_after(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day()).skip(1)
}

pub(super) fn iter_days_before(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.previous_day()).skip(1)
}

/// The most recent Sunday on or before `date` (clamped at the beginning of
/// the calendar)
pub(super) fn week_start(date: Date) -> Date {
    iter_days_before(date)
        .take(usize::from(date.weekday().index0()))
        .last()
        .unwrap_or(date)
}

/// The first day of `date`'s month
pub(super) fn month_start(date: Date) -> Date {
    date.replace_day(1).unwrap_or(date)
}
