use super::{day_cell, day_style, Canvas};
use crate::calendar::MonthGrid;
use crate::theme::{BASE_STYLE, WEEKDAY_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    widgets::StatefulWidget,
};

/// Columns per day cell, including the gap
const DAY_WIDTH: u16 = 5;

/// Total width of the grid: a margin column plus seven cells
const GRID_WIDTH: u16 = 35;

/// Lines taken up by the weekday header and its rule
const HEADER_LINES: u16 = 2;

const ACS_HLINE: char = '─';

/// One page of the month view: a weekday header over six week rows.
/// Cells outside the anchor month are dimmed, not omitted.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGridPage;

impl StatefulWidget for MonthGridPage {
    type State = MonthGrid;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [area] = Layout::horizontal([GRID_WIDTH.min(area.width)])
            .flex(Flex::Center)
            .areas(area);
        let Some(page) = state.current_page() else {
            return;
        };
        let today = state.today();
        let cursor = state.cursor_index();
        let mut canvas = Canvas::new(area, buf);
        for (i, day) in page.days.iter().enumerate() {
            let Ok(cell) = u16::try_from(i) else {
                break;
            };
            let x = 1 + DAY_WIDTH * (cell % 7);
            if day.show_weekday {
                canvas.mvprint(0, x, &format!(" {} ", day.weekday_label()), WEEKDAY_STYLE);
            }
            let y = HEADER_LINES + cell / 7;
            canvas.mvprint(y, x, &day_cell(day), day_style(day, today, i == cursor));
        }
        let rule: String = String::from(ACS_HLINE).repeat(usize::from(GRID_WIDTH - 1));
        canvas.mvprint(1, 1, &rule, BASE_STYLE);
    }
}
