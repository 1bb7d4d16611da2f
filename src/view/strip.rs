use super::{day_cell, day_style, Canvas};
use crate::calendar::WeekStrip;
use crate::theme::{DISABLED_STYLE, WEEKDAY_STYLE};
use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};

/// Columns per day cell, including the gap
const DAY_WIDTH: u16 = 5;

/// Blank columns at either end of the strip
const SIDE_MARGIN: u16 = 1;

/// A single scrolling row of days, each under its weekday label.  Rendering
/// records the viewport width in the state, which tops the window up when
/// the viewport reaches past its trailing edge.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct WeekStripRow;

impl StatefulWidget for WeekStripRow {
    type State = WeekStrip;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.height < 2 || area.width < SIDE_MARGIN * 2 + DAY_WIDTH {
            return;
        }
        let days_across = usize::from((area.width - SIDE_MARGIN * 2) / DAY_WIDTH);
        state.set_viewport(days_across);
        let today = state.today();
        let cursor = state.cursor_index();
        let mut canvas = Canvas::new(area, buf);
        for (slot, (index, day)) in state.visible().enumerate() {
            let x = SIDE_MARGIN + DAY_WIDTH * u16::try_from(slot).unwrap_or(u16::MAX);
            let label_style = if day.enabled {
                WEEKDAY_STYLE
            } else {
                DISABLED_STYLE
            };
            canvas.mvprint(0, x, &format!(" {} ", day.weekday_label()), label_style);
            canvas.mvprint(1, x, &day_cell(day), day_style(day, today, index == cursor));
        }
    }
}
