mod coordinator;
mod day;
mod month;
mod strip;
mod window;
pub(crate) use self::coordinator::{CalendarCoordinator, ViewMode};
pub(crate) use self::day::CalendarDay;
pub(crate) use self::month::MonthGrid;
pub(crate) use self::strip::WeekStrip;
use thiserror::Error;
use time::Date;

/// Returned when navigation would walk past the ends of the representable
/// calendar, or onto a month page suppressed by the `from` floor.
#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the edge of the calendar")]
pub(crate) struct EndOfCalendarError;

/// Picker-wide policy, fixed at construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct CalendarConfig {
    /// Floor date.  Days before it are built disabled (never omitted), and
    /// month pages wholly before its month are not built at all.
    pub(crate) from: Option<Date>,
    /// Whether days after today are enabled
    pub(crate) allow_future: bool,
    /// Whether a disabled day may still be picked with the cursor
    pub(crate) select_disabled: bool,
    /// Whether selecting a day also flags its whole week row on month pages
    pub(crate) week_highlight: bool,
}

impl Default for CalendarConfig {
    fn default() -> CalendarConfig {
        CalendarConfig {
            from: None,
            allow_future: false,
            select_disabled: true,
            week_highlight: false,
        }
    }
}
