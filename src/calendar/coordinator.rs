use super::day::CalendarDay;
use super::month::MonthGrid;
use super::strip::WeekStrip;
use super::{CalendarConfig, EndOfCalendarError};
use time::Date;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ViewMode {
    Week,
    Month,
}

/// Owns the two peer views and keeps them agreeing on the selected day.
/// Both windows are always maintained; toggling the mode changes which one
/// is rendered and navigated, nothing else.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct CalendarCoordinator {
    pub(crate) strip: WeekStrip,
    pub(crate) grid: MonthGrid,
    mode: ViewMode,
    selection: Option<Date>,
    title: String,
    today: Date,
    config: CalendarConfig,
}

impl CalendarCoordinator {
    pub(crate) fn new(today: Date, selected: Option<Date>, config: CalendarConfig) -> Self {
        let selected = selected.unwrap_or(today);
        let strip = WeekStrip::new(today, selected, config);
        let grid = MonthGrid::new(today, selected, config);
        let mut this = CalendarCoordinator {
            strip,
            grid,
            mode: ViewMode::Week,
            selection: None,
            title: String::new(),
            today,
            config,
        };
        this.set_selected(selected);
        this
    }

    pub(crate) fn mode(&self) -> ViewMode {
        self.mode
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn selection(&self) -> Option<Date> {
        self.selection
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    /// Flips between the week strip and the month grid.  No effect on the
    /// underlying windows.
    pub(crate) fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ViewMode::Week => ViewMode::Month,
            ViewMode::Month => ViewMode::Week,
        };
        self.refresh_title();
    }

    /// Picks the day under the active view's cursor.  Returns the selection
    /// event to forward to the host, or `None` when the day is disabled and
    /// policy forbids picking it.
    pub(crate) fn select_at_cursor(&mut self) -> Option<CalendarDay> {
        let day = match self.mode {
            ViewMode::Week => self.strip.cursor_day(),
            ViewMode::Month => self.grid.cursor_day(),
        }?;
        if !day.enabled && !self.config.select_disabled {
            return None;
        }
        self.set_selected(day.date);
        match self.mode {
            ViewMode::Week => self.strip.cursor_day(),
            ViewMode::Month => self.grid.cursor_day(),
        }
    }

    /// The programmatic selection path: updates both views and the title but
    /// raises no host event and ignores the disabled-day policy
    pub(crate) fn set_selected(&mut self, date: Date) {
        self.selection = Some(date);
        self.strip.window.select(date);
        self.grid.select(date);
        self.change_month(date.month().to_string());
    }

    pub(crate) fn step_days(&mut self, delta: i32) -> Result<(), EndOfCalendarError> {
        match self.mode {
            ViewMode::Week => self.strip.step_days(delta)?,
            ViewMode::Month => self.grid.step_cell(delta)?,
        }
        self.refresh_title();
        Ok(())
    }

    pub(crate) fn page(&mut self, forwards: bool) -> Result<(), EndOfCalendarError> {
        match self.mode {
            ViewMode::Week => self.strip.page(forwards)?,
            ViewMode::Month => {
                if forwards {
                    self.grid.page_next()?;
                } else {
                    self.grid.page_prev()?;
                }
            }
        }
        self.refresh_title();
        Ok(())
    }

    /// Scrolls both views back to today without touching the selection
    pub(crate) fn jump_to_today(&mut self) -> Result<(), EndOfCalendarError> {
        self.strip.jump_to(self.today)?;
        self.grid.jump_to(self.today)?;
        self.refresh_title();
        Ok(())
    }

    /// Re-derives the title from whatever is nearest the viewport center of
    /// the active view
    fn refresh_title(&mut self) {
        let name = match self.mode {
            ViewMode::Week => self.strip.center_month().map(|m| m.to_string()),
            ViewMode::Month => self.grid.current_page().map(|p| p.month_name()),
        };
        if let Some(name) = name {
            self.change_month(name);
        }
    }

    /// Updates the displayed title only when the month name actually changed
    fn change_month(&mut self, name: String) {
        if name != self.title {
            self.title = name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2024 - 06 - 10);

    fn coordinator() -> CalendarCoordinator {
        CalendarCoordinator::new(TODAY, None, CalendarConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let cal = coordinator();
        assert_eq!(cal.mode(), ViewMode::Week);
        assert_eq!(cal.selection(), Some(TODAY));
        assert_eq!(cal.title(), "June");
        assert_eq!(cal.strip.window.selected(), Some(TODAY));
    }

    #[test]
    fn test_explicit_initial_date() {
        let cal = CalendarCoordinator::new(
            TODAY,
            Some(date!(2024 - 06 - 03)),
            CalendarConfig::default(),
        );
        assert_eq!(cal.selection(), Some(date!(2024 - 06 - 03)));
        assert_eq!(cal.strip.window.selected(), Some(date!(2024 - 06 - 03)));
    }

    #[test]
    fn test_selection_syncs_both_views() {
        let mut cal = coordinator();
        cal.step_days(-3).expect("step");
        let event = cal.select_at_cursor().expect("selection event");
        assert_eq!(event.date, date!(2024 - 06 - 07));
        assert!(event.selected);
        assert_eq!(cal.selection(), Some(date!(2024 - 06 - 07)));
        // Both windows agree after the sync
        assert_eq!(cal.strip.window.selected(), Some(date!(2024 - 06 - 07)));
        let page = cal.grid.current_page().expect("page");
        let on_grid: Vec<Date> = page
            .days
            .iter()
            .filter(|d| d.selected)
            .map(|d| d.date)
            .collect();
        assert_eq!(on_grid, vec![date!(2024 - 06 - 07)]);
    }

    #[test]
    fn test_toggle_mode_keeps_data() {
        let mut cal = coordinator();
        let strip_before = cal.strip.clone();
        cal.toggle_mode();
        assert_eq!(cal.mode(), ViewMode::Month);
        assert_eq!(cal.strip, strip_before);
        cal.toggle_mode();
        assert_eq!(cal.mode(), ViewMode::Week);
    }

    #[test]
    fn test_disabled_day_policy() {
        let strict = CalendarConfig {
            select_disabled: false,
            ..CalendarConfig::default()
        };
        let mut cal = CalendarCoordinator::new(TODAY, None, strict);
        cal.step_days(1).expect("step");
        // Tomorrow is disabled and the policy forbids picking it
        assert_eq!(cal.select_at_cursor(), None);
        assert_eq!(cal.selection(), Some(TODAY));
        // The permissive default allows it
        let mut cal = coordinator();
        cal.step_days(1).expect("step");
        let event = cal.select_at_cursor().expect("event");
        assert_eq!(event.date, date!(2024 - 06 - 11));
        assert!(!event.enabled);
    }

    #[test]
    fn test_title_tracks_month_view_paging() {
        let mut cal = coordinator();
        cal.toggle_mode();
        assert_eq!(cal.title(), "June");
        cal.page(true).expect("page");
        assert_eq!(cal.title(), "July");
        cal.page(false).expect("page");
        cal.page(false).expect("page");
        assert_eq!(cal.title(), "May");
    }

    #[test]
    fn test_jump_to_today_preserves_selection() {
        let mut cal = coordinator();
        cal.step_days(-30).expect("step");
        cal.select_at_cursor().expect("event");
        let picked = cal.selection();
        cal.jump_to_today().expect("jump");
        assert_eq!(cal.selection(), picked);
        assert_eq!(cal.strip.cursor_day().map(|d| d.date), Some(TODAY));
    }
}
