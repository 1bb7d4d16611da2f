mod grid;
mod strip;
pub(crate) use self::grid::MonthGridPage;
pub(crate) use self::strip::WeekStripRow;
use crate::calendar::{CalendarCoordinator, CalendarDay, ViewMode};
use crate::theme::{
    ADJACENT_STYLE, BASE_STYLE, CURSOR_STYLE, DISABLED_STYLE, SELECTED_STYLE, TITLE_STYLE,
    TODAY_STYLE, WEEK_HIGHLIGHT_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{StatefulWidget, Widget},
};
use time::Date;

/// Lines taken up by the title and the gap beneath it
const TITLE_LINES: u16 = 2;

/// The whole picker: a title line naming the month nearest the viewport
/// center, over whichever of the two views is active
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct CalendarView;

impl StatefulWidget for CalendarView {
    type State = CalendarCoordinator;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        buf.set_style(area, BASE_STYLE);
        if area.height == 0 {
            return;
        }
        let marker = match state.mode() {
            ViewMode::Week => '▾',
            ViewMode::Month => '▴',
        };
        let title = format!("{marker} {}", state.title());
        Line::styled(title, TITLE_STYLE)
            .centered()
            .render(Rect { height: 1, ..area }, buf);
        if area.height <= TITLE_LINES {
            return;
        }
        let body = Rect {
            y: area.y + TITLE_LINES,
            height: area.height - TITLE_LINES,
            ..area
        };
        match state.mode() {
            ViewMode::Week => WeekStripRow.render(body, buf, &mut state.strip),
            ViewMode::Month => MonthGridPage.render(body, buf, &mut state.grid),
        }
    }
}

/// The four-column text of a day cell; selection is marked in the text
/// itself so it reads even without color
fn day_cell(day: &CalendarDay) -> String {
    if day.selected {
        format!("[{:>2}]", day.day())
    } else {
        format!(" {:>2} ", day.day())
    }
}

fn day_style(day: &CalendarDay, today: Date, is_cursor: bool) -> Style {
    if is_cursor {
        CURSOR_STYLE
    } else if day.selected {
        SELECTED_STYLE
    } else if !day.enabled {
        DISABLED_STYLE
    } else if !day.current_month {
        ADJACENT_STYLE
    } else if day.week_highlighted {
        WEEK_HIGHLIGHT_STYLE
    } else if day.date == today {
        TODAY_STYLE
    } else {
        BASE_STYLE
    }
}

/// Clipped drawing into a sub-rectangle, after the manner of a curses
/// window
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn new(area: Rect, buf: &mut Buffer) -> Canvas<'_> {
        Canvas { area, buf }
    }

    fn mvprint(&mut self, y: u16, x: u16, s: &str, style: Style) {
        if y < self.area.height && x < self.area.width {
            self.buf.set_stringn(
                self.area.x + x,
                self.area.y + y,
                s,
                usize::from(self.area.width - x),
                style,
            );
        }
    }
}
