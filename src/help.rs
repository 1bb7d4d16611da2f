use crate::theme::BASE_STYLE;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    text::Text,
    widgets::{Block, Clear, Paragraph, Widget},
};

static TEXT: &str = "\
h, LEFT         Back one day
l, RIGHT        Forward one day
k, UP           Back one week
j, DOWN         Forward one week
w, PAGE UP      Back one page
z, PAGE DOWN    Forward one page
ENTER, SPACE    Pick the day under the cursor
t, TAB          Switch between week and month views
0, HOME         Jump to today
?               Show this help
q, ESC          Quit

Press the Any Key to dismiss.";

/// Popup listing the key bindings, centered over whatever is beneath it
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help;

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::raw(TEXT);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.width);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);
        let [popup] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [popup] = Layout::vertical([height]).flex(Flex::Center).areas(popup);
        Clear.render(popup, buf);
        Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(Alignment::Center),
            )
            .style(BASE_STYLE)
            .render(popup, buf);
    }
}
