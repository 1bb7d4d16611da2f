use super::day::{iter_days_after, iter_days_before, CalendarDay};
use super::CalendarConfig;
use std::collections::VecDeque;
use time::Date;

/// How many days the strip grows by when the cursor reaches either edge
pub(super) const STRIP_EXTEND_DAYS: usize = 10;

/// A contiguous, ascending run of calendar days.  Grows at either end on
/// demand and never shrinks; at most one day is flagged selected.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DateWindow {
    days: VecDeque<CalendarDay>,
    today: Date,
    selection: Option<Date>,
    config: CalendarConfig,
}

impl DateWindow {
    /// Builds a window of `before + 1 + after` contiguous days around
    /// `pivot` (fewer at the ends of the calendar).  Initially the day equal
    /// to `today` is selected, if present.
    pub(crate) fn build(
        pivot: Date,
        before: usize,
        after: usize,
        today: Date,
        config: CalendarConfig,
    ) -> DateWindow {
        let mut window = DateWindow {
            days: VecDeque::with_capacity(before + 1 + after),
            today,
            selection: Some(today),
            config,
        };
        let day = window.make_day(pivot);
        window.days.push_back(day);
        for d in iter_days_before(pivot).take(before) {
            let day = window.make_day(d);
            window.days.push_front(day);
        }
        for d in iter_days_after(pivot).take(after) {
            let day = window.make_day(d);
            window.days.push_back(day);
        }
        window
    }

    /// A cell carrying the window's recorded selection, so days added after
    /// construction never resurrect a stale highlight
    fn make_day(&self, date: Date) -> CalendarDay {
        let mut day = CalendarDay::strip(date, self.today, &self.config);
        day.selected = self.selection == Some(date);
        day
    }

    /// Prepends up to `qty` contiguous days before the current first day and
    /// returns how many were added (less than `qty` only at the beginning of
    /// the calendar).
    pub(crate) fn extend_before(&mut self, qty: usize) -> usize {
        let Some(first) = self.days.front().map(|d| d.date) else {
            return 0;
        };
        let mut added = 0;
        for d in iter_days_before(first).take(qty) {
            let day = self.make_day(d);
            self.days.push_front(day);
            added += 1;
        }
        added
    }

    /// Appends up to `qty` contiguous days after the current last day and
    /// returns how many were added.
    pub(crate) fn extend_after(&mut self, qty: usize) -> usize {
        let Some(last) = self.days.back().map(|d| d.date) else {
            return 0;
        };
        let mut added = 0;
        for d in iter_days_after(last).take(qty) {
            let day = self.make_day(d);
            self.days.push_back(day);
            added += 1;
        }
        added
    }

    /// Records `date` as the selection, clears every selection flag, then
    /// sets it on the day matching `date`.  Selecting a date outside the
    /// window clears the highlight without complaint; the flag is applied
    /// if the window later grows to cover the date.
    pub(crate) fn select(&mut self, date: Date) {
        self.selection = Some(date);
        for day in &mut self.days {
            day.selected = day.date == date;
        }
    }

    pub(crate) fn selected(&self) -> Option<Date> {
        self.days.iter().find(|d| d.selected).map(|d| d.date)
    }

    pub(crate) fn len(&self) -> usize {
        self.days.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<CalendarDay> {
        self.days.get(index).copied()
    }

    pub(crate) fn position_of(&self, date: Date) -> Option<usize> {
        self.days.iter().position(|d| d.date == date)
    }

    pub(crate) fn first_date(&self) -> Option<Date> {
        self.days.front().map(|d| d.date)
    }

    pub(crate) fn last_date(&self) -> Option<Date> {
        self.days.back().map(|d| d.date)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter()
    }

    pub(super) fn today(&self) -> Date {
        self.today
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn window(pivot: Date, before: usize, after: usize) -> DateWindow {
        DateWindow::build(
            pivot,
            before,
            after,
            date!(2024 - 06 - 10),
            CalendarConfig::default(),
        )
    }

    fn assert_contiguous(w: &DateWindow) {
        for (a, b) in w.iter().zip(w.iter().skip(1)) {
            assert_eq!(a.date.next_day(), Some(b.date));
        }
    }

    #[test]
    fn test_build_around_pivot() {
        let w = window(date!(2024 - 06 - 10), 10, 10);
        assert_eq!(w.len(), 21);
        assert_eq!(w.first_date(), Some(date!(2024 - 05 - 31)));
        assert_eq!(w.last_date(), Some(date!(2024 - 06 - 20)));
        assert_contiguous(&w);
        assert_eq!(w.selected(), Some(date!(2024 - 06 - 10)));
        assert_eq!(w.iter().filter(|d| d.selected).count(), 1);
    }

    #[test]
    fn test_build_today_out_of_range() {
        let w = DateWindow::build(
            date!(2020 - 01 - 15),
            5,
            5,
            date!(2024 - 06 - 10),
            CalendarConfig::default(),
        );
        assert_eq!(w.selected(), None);
    }

    #[test]
    fn test_extend_preserves_contiguity() {
        let mut w = window(date!(2024 - 06 - 10), 10, 10);
        let before: Vec<Date> = w.iter().map(|d| d.date).collect();
        assert_eq!(w.extend_before(10), 10);
        assert_eq!(w.extend_after(10), 10);
        assert_eq!(w.len(), 41);
        assert_eq!(w.first_date(), Some(date!(2024 - 05 - 21)));
        assert_eq!(w.last_date(), Some(date!(2024 - 06 - 30)));
        assert_contiguous(&w);
        let middle: Vec<Date> = w.iter().skip(10).take(21).map(|d| d.date).collect();
        assert_eq!(middle, before);
    }

    #[test]
    fn test_extend_stops_at_calendar_start() {
        let mut w = DateWindow::build(
            Date::MIN,
            0,
            3,
            date!(2024 - 06 - 10),
            CalendarConfig::default(),
        );
        assert_eq!(w.extend_before(5), 0);
        assert_eq!(w.first_date(), Some(Date::MIN));
    }

    #[test]
    fn test_select_moves_single_flag() {
        let mut w = window(date!(2024 - 06 - 10), 10, 10);
        w.select(date!(2024 - 06 - 03));
        assert_eq!(w.selected(), Some(date!(2024 - 06 - 03)));
        assert_eq!(w.iter().filter(|d| d.selected).count(), 1);
        w.select(date!(2024 - 06 - 15));
        assert_eq!(w.selected(), Some(date!(2024 - 06 - 15)));
        assert_eq!(w.iter().filter(|d| d.selected).count(), 1);
    }

    #[test]
    fn test_extension_does_not_reselect_today() {
        let mut w = DateWindow::build(
            date!(2024 - 01 - 15),
            10,
            10,
            date!(2024 - 06 - 10),
            CalendarConfig::default(),
        );
        w.select(date!(2024 - 01 - 15));
        while w.last_date() < Some(date!(2024 - 06 - 10)) {
            assert!(w.extend_after(STRIP_EXTEND_DAYS) > 0);
        }
        // Today is now in the window but the selection stays put
        assert_eq!(w.selected(), Some(date!(2024 - 01 - 15)));
        assert_eq!(w.iter().filter(|d| d.selected).count(), 1);
    }

    #[test]
    fn test_extension_applies_pending_selection() {
        let mut w = window(date!(2024 - 06 - 10), 2, 2);
        w.select(date!(2024 - 06 - 20));
        assert_eq!(w.selected(), None);
        while w.last_date() < Some(date!(2024 - 06 - 20)) {
            assert!(w.extend_after(STRIP_EXTEND_DAYS) > 0);
        }
        assert_eq!(w.selected(), Some(date!(2024 - 06 - 20)));
        assert_eq!(w.iter().filter(|d| d.selected).count(), 1);
    }

    #[test]
    fn test_select_absent_date_clears() {
        let mut w = window(date!(2024 - 06 - 10), 10, 10);
        w.select(date!(2030 - 01 - 01));
        assert_eq!(w.selected(), None);
    }

    #[test]
    fn test_floor_disables_without_filtering() {
        let config = CalendarConfig {
            from: Some(date!(2024 - 06 - 05)),
            ..CalendarConfig::default()
        };
        let mut w = DateWindow::build(
            date!(2024 - 06 - 10),
            10,
            10,
            date!(2024 - 06 - 10),
            config,
        );
        assert_eq!(w.len(), 21);
        for day in w.iter() {
            let in_range =
                day.date >= date!(2024 - 06 - 05) && day.date <= date!(2024 - 06 - 10);
            assert_eq!(day.enabled, in_range);
        }
        // Disabling is a display property: the day can still be selected
        w.select(date!(2024 - 06 - 01));
        assert_eq!(w.selected(), Some(date!(2024 - 06 - 01)));
    }
}
