use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const TODAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const SELECTED_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);

pub(crate) const CURSOR_STYLE: Style = BASE_STYLE.add_modifier(Modifier::REVERSED);

pub(crate) const DISABLED_STYLE: Style = Style::new().fg(Color::DarkGray).bg(Color::Black);

pub(crate) const ADJACENT_STYLE: Style = Style::new().fg(Color::Gray).bg(Color::Black);

pub(crate) const WEEK_HIGHLIGHT_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
