use super::day::{iter_days_after, month_start, week_start, CalendarDay, WEEK_DAYS};
use super::{CalendarConfig, EndOfCalendarError};
use std::cmp::Ordering;
use std::collections::VecDeque;
use time::{Date, Month};

/// Cells per month page: six whole weeks covering the anchor month
pub(crate) const GRID_CELLS: usize = 42;

/// One month of the grid view: exactly [`GRID_CELLS`] consecutive days
/// starting at the week start on or before the first of the anchor month.
/// Leading and trailing cells belong to the adjacent months.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthPage {
    pub(crate) anchor: Date,
    pub(crate) days: Vec<CalendarDay>,
}

impl MonthPage {
    /// Builds the page for `anchor_date`'s month.  Returns `None` for months
    /// wholly before the `from` floor, and for months whose grid would run
    /// off the end of the representable calendar.
    fn build(anchor_date: Date, today: Date, config: &CalendarConfig) -> Option<MonthPage> {
        let anchor = month_start(anchor_date);
        if let Some(floor) = config.from {
            if anchor < month_start(floor) {
                return None;
            }
        }
        let origin = week_start(anchor);
        let mut days = Vec::with_capacity(GRID_CELLS);
        days.push(CalendarDay::grid(origin, today, config, anchor.month(), true));
        for (i, d) in iter_days_after(origin).take(GRID_CELLS - 1).enumerate() {
            days.push(CalendarDay::grid(
                d,
                today,
                config,
                anchor.month(),
                i + 1 < WEEK_DAYS,
            ));
        }
        (days.len() == GRID_CELLS).then_some(MonthPage { anchor, days })
    }

    pub(crate) fn month_name(&self) -> String {
        self.anchor.month().to_string()
    }

    /// Index of `date`'s cell, ignoring the adjacent-month copies in the
    /// leading and trailing rows
    fn position_of(&self, date: Date) -> Option<usize> {
        self.days
            .iter()
            .position(|d| d.date == date && d.current_month)
    }

    /// Clears all selection and week-highlight flags, then re-applies them
    /// for `date` if it appears on this page.  The highlight is page-local:
    /// it frames the 7-cell row of this page that contains the selection.
    fn select(&mut self, date: Date, week_highlight: bool) {
        for day in &mut self.days {
            day.selected = day.date == date;
            day.week_highlighted = false;
        }
        if week_highlight {
            if let Some(i) = self.days.iter().position(|d| d.selected) {
                let row = i - i % WEEK_DAYS;
                for day in self.days.iter_mut().skip(row).take(WEEK_DAYS) {
                    day.week_highlighted = true;
                }
            }
        }
    }
}

/// The paged month view: a contiguous run of [`MonthPage`]s grown one page
/// at a time at either edge, plus the current page index and cursor cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    pages: VecDeque<MonthPage>,
    page: usize,
    cursor: usize,
    today: Date,
    selection: Option<Date>,
    config: CalendarConfig,
}

impl MonthGrid {
    /// Builds pages for `selected`'s month and its two neighbors (where the
    /// floor and the calendar ends allow), with the cursor on `selected`.
    /// Today starts out flagged selected where it appears, until the first
    /// `select` call moves the highlight.
    pub(crate) fn new(today: Date, selected: Date, config: CalendarConfig) -> MonthGrid {
        let mut anchor = month_start(selected);
        if let Some(floor) = config.from.map(month_start) {
            anchor = anchor.max(floor);
        }
        anchor = anchor.min(last_buildable_month());
        let mut pages = VecDeque::with_capacity(3);
        if let Some(current) = MonthPage::build(anchor, today, &config) {
            pages.push_back(current);
            if let Some(page) =
                prev_month_start(anchor).and_then(|m| MonthPage::build(m, today, &config))
            {
                pages.push_front(page);
            }
            if let Some(page) =
                next_month_start(anchor).and_then(|m| MonthPage::build(m, today, &config))
            {
                pages.push_back(page);
            }
        }
        let page = pages.iter().position(|p| p.anchor == anchor).unwrap_or(0);
        let cursor = pages
            .get(page)
            .and_then(|p| p.position_of(selected))
            .unwrap_or(0);
        let mut grid = MonthGrid {
            pages,
            page,
            cursor,
            today,
            selection: None,
            config,
        };
        grid.select(today);
        grid
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn current_page(&self) -> Option<&MonthPage> {
        self.pages.get(self.page)
    }

    pub(crate) fn cursor_index(&self) -> usize {
        self.cursor
    }

    pub(crate) fn cursor_day(&self) -> Option<CalendarDay> {
        self.pages
            .get(self.page)
            .and_then(|p| p.days.get(self.cursor))
            .copied()
    }

    pub(crate) fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Moves to the previous month, prepending its page first when sitting
    /// at the leading edge.  The page index is shifted by the insertion so
    /// the pages already on screen keep their positions.
    pub(crate) fn page_prev(&mut self) -> Result<(), EndOfCalendarError> {
        if self.page == 0 {
            let front = self.pages.front().ok_or(EndOfCalendarError)?;
            let mut page = prev_month_start(front.anchor)
                .and_then(|m| MonthPage::build(m, self.today, &self.config))
                .ok_or(EndOfCalendarError)?;
            self.apply_selection(&mut page);
            self.pages.push_front(page);
            self.page = 1;
        }
        self.page -= 1;
        Ok(())
    }

    /// Moves to the next month, appending its page first when sitting at
    /// the trailing edge.
    pub(crate) fn page_next(&mut self) -> Result<(), EndOfCalendarError> {
        if self.page + 1 >= self.pages.len() {
            let back = self.pages.back().ok_or(EndOfCalendarError)?;
            let mut page = next_month_start(back.anchor)
                .and_then(|m| MonthPage::build(m, self.today, &self.config))
                .ok_or(EndOfCalendarError)?;
            self.apply_selection(&mut page);
            self.pages.push_back(page);
        }
        self.page += 1;
        Ok(())
    }

    /// Moves the cursor by `delta` cells, paging when it crosses the top or
    /// bottom of the grid
    pub(crate) fn step_cell(&mut self, delta: i32) -> Result<(), EndOfCalendarError> {
        if self.pages.is_empty() {
            return Err(EndOfCalendarError);
        }
        let need = usize::try_from(delta.unsigned_abs()).unwrap_or(usize::MAX);
        if delta < 0 {
            while self.cursor < need {
                self.page_prev()?;
                self.cursor += GRID_CELLS;
            }
            self.cursor -= need;
        } else {
            self.cursor += need;
            while self.cursor >= GRID_CELLS {
                self.page_next()?;
                self.cursor -= GRID_CELLS;
            }
        }
        Ok(())
    }

    /// Records `date` as the selection and re-applies the flags on every
    /// page.  Pages built later pick the recorded selection up, so paging
    /// to fresh months never resurrects a stale highlight.
    pub(crate) fn select(&mut self, date: Date) {
        self.selection = Some(date);
        for page in &mut self.pages {
            page.select(date, self.config.week_highlight);
        }
    }

    fn apply_selection(&self, page: &mut MonthPage) {
        if let Some(date) = self.selection {
            page.select(date, self.config.week_highlight);
        }
    }

    /// Pages to the month containing `date` and puts the cursor on it
    pub(crate) fn jump_to(&mut self, date: Date) -> Result<(), EndOfCalendarError> {
        let target = month_start(date);
        loop {
            let page = self.pages.get(self.page).ok_or(EndOfCalendarError)?;
            match target.cmp(&page.anchor) {
                Ordering::Equal => break,
                Ordering::Less => self.page_prev()?,
                Ordering::Greater => self.page_next()?,
            }
        }
        if let Some(i) = self
            .pages
            .get(self.page)
            .and_then(|p| p.position_of(date))
        {
            self.cursor = i;
        }
        Ok(())
    }
}

fn prev_month_start(anchor: Date) -> Option<Date> {
    month_start(anchor).previous_day().map(month_start)
}

fn next_month_start(anchor: Date) -> Option<Date> {
    let anchor = month_start(anchor);
    let (year, month) = if anchor.month() == Month::December {
        (anchor.year().checked_add(1)?, Month::January)
    } else {
        (anchor.year(), anchor.month().next())
    };
    Date::from_calendar_date(year, month, 1).ok()
}

/// The newest month whose 42-cell grid is guaranteed representable; the
/// final month's grid always crosses the end of the calendar.
fn last_buildable_month() -> Date {
    month_start(Date::MAX)
        .previous_day()
        .map(month_start)
        .unwrap_or(Date::MIN)
}
