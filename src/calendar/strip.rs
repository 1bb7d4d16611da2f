use super::day::{week_start, CalendarDay};
use super::window::{DateWindow, STRIP_EXTEND_DAYS};
use super::{CalendarConfig, EndOfCalendarError};
use time::{Date, Month};

/// Days on each side of the pivot in a freshly built strip
const STRIP_BUILD_BEFORE: usize = 10;
const STRIP_BUILD_AFTER: usize = 10;

/// The week-strip state: a [`DateWindow`] plus cursor and scroll
/// bookkeeping.  The strip is anchored at the most recent week start on or
/// before the selected day and grows at whichever edge the cursor reaches.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct WeekStrip {
    pub(crate) window: DateWindow,
    cursor: usize,
    origin: usize,
    viewport_days: usize,
}

impl WeekStrip {
    pub(crate) fn new(today: Date, selected: Date, config: CalendarConfig) -> WeekStrip {
        let pivot = week_start(selected);
        let window = DateWindow::build(pivot, STRIP_BUILD_BEFORE, STRIP_BUILD_AFTER, today, config);
        let origin = window.position_of(pivot).unwrap_or(0);
        let cursor = window.position_of(selected).unwrap_or(origin);
        WeekStrip {
            window,
            cursor,
            origin,
            viewport_days: 0,
        }
    }

    pub(crate) fn today(&self) -> Date {
        self.window.today()
    }

    pub(crate) fn cursor_day(&self) -> Option<CalendarDay> {
        self.window.get(self.cursor)
    }

    /// Records the viewport width (in day cells) seen at render time, tops
    /// the window up if the viewport now reaches past its trailing edge, and
    /// keeps the cursor scrolled into view
    pub(crate) fn set_viewport(&mut self, days: usize) {
        self.viewport_days = days.max(1);
        while self.origin + self.viewport_days > self.window.len()
            && self.window.extend_after(STRIP_EXTEND_DAYS) > 0
        {}
        self.scroll_into_view();
    }

    /// Visible cells, paired with their window indices
    pub(crate) fn visible(&self) -> impl Iterator<Item = (usize, &CalendarDay)> {
        self.window
            .iter()
            .enumerate()
            .skip(self.origin)
            .take(self.viewport_days)
    }

    pub(crate) fn cursor_index(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor by `delta` days, extending the window when the
    /// cursor crosses either edge.  After a prepend both the cursor and the
    /// scroll origin shift by the number of days inserted, so the visible
    /// run of days does not jump.
    pub(crate) fn step_days(&mut self, delta: i32) -> Result<(), EndOfCalendarError> {
        let need = usize::try_from(delta.unsigned_abs()).unwrap_or(usize::MAX);
        if delta < 0 {
            while self.cursor < need {
                let added = self.window.extend_before(STRIP_EXTEND_DAYS.max(need));
                if added == 0 {
                    return Err(EndOfCalendarError);
                }
                self.cursor += added;
                self.origin += added;
            }
            self.cursor -= need;
        } else {
            while self.cursor + need >= self.window.len()
                && self.window.extend_after(STRIP_EXTEND_DAYS.max(need)) > 0
            {}
            if self.cursor + need >= self.window.len() {
                return Err(EndOfCalendarError);
            }
            self.cursor += need;
        }
        self.scroll_into_view();
        Ok(())
    }

    /// Moves by one viewport's worth of days
    pub(crate) fn page(&mut self, forwards: bool) -> Result<(), EndOfCalendarError> {
        let span = i32::try_from(self.viewport_days.max(1)).unwrap_or(i32::MAX);
        self.step_days(if forwards { span } else { -span })
    }

    /// Extends the window far enough to cover `date` and puts the cursor on
    /// it
    pub(crate) fn jump_to(&mut self, date: Date) -> Result<(), EndOfCalendarError> {
        while self.window.first_date().is_some_and(|first| date < first) {
            let added = self.window.extend_before(STRIP_EXTEND_DAYS);
            if added == 0 {
                return Err(EndOfCalendarError);
            }
            self.cursor += added;
            self.origin += added;
        }
        while self.window.last_date().is_some_and(|last| date > last)
            && self.window.extend_after(STRIP_EXTEND_DAYS) > 0
        {}
        self.cursor = self.window.position_of(date).ok_or(EndOfCalendarError)?;
        self.scroll_into_view();
        Ok(())
    }

    /// The month of the day nearest the viewport center, for the title
    pub(crate) fn center_month(&self) -> Option<Month> {
        let mid = self.origin + self.viewport_days / 2;
        self.window
            .get(mid.min(self.window.len().saturating_sub(1)))
            .map(|d| d.month())
    }

    fn scroll_into_view(&mut self) {
        if self.viewport_days == 0 {
            return;
        }
        if self.cursor < self.origin {
            self.origin = self.cursor;
        } else if self.cursor >= self.origin + self.viewport_days {
            self.origin = self.cursor + 1 - self.viewport_days;
        }
        let max_origin = self.window.len().saturating_sub(self.viewport_days);
        self.origin = self.origin.min(max_origin);
    }
}
