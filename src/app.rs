use crate::calendar::{CalendarCoordinator, CalendarDay};
use crate::help::Help;
use crate::theme::BASE_STYLE;
use crate::view::CalendarView;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::Date;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    cal: CalendarCoordinator,
    state: AppState,
    picked: Option<CalendarDay>,
}

impl App {
    pub(crate) fn new(cal: CalendarCoordinator) -> App {
        App {
            cal,
            state: AppState::Picking,
            picked: None,
        }
    }

    /// Runs the picker until the user quits and returns the last date they
    /// picked, if any
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<Option<Date>> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(self.picked.map(|day| day.date))
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Picking => match key {
                KeyCode::Char('h') | KeyCode::Left => self.cal.step_days(-1).is_ok(),
                KeyCode::Char('l') | KeyCode::Right => self.cal.step_days(1).is_ok(),
                KeyCode::Char('k') | KeyCode::Up => self.cal.step_days(-7).is_ok(),
                KeyCode::Char('j') | KeyCode::Down => self.cal.step_days(7).is_ok(),
                KeyCode::Char('w') | KeyCode::PageUp => self.cal.page(false).is_ok(),
                KeyCode::Char('z') | KeyCode::PageDown => self.cal.page(true).is_ok(),
                KeyCode::Char(' ') | KeyCode::Enter => self.pick(),
                KeyCode::Char('t') | KeyCode::Tab => {
                    self.cal.toggle_mode();
                    true
                }
                KeyCode::Char('0') | KeyCode::Home => self.cal.jump_to_today().is_ok(),
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Picking;
                true
            }
            AppState::Quitting => false,
        }
    }

    // The one place a user action becomes a selection event; held so the
    // host side of the picker sees each pick exactly once
    fn pick(&mut self) -> bool {
        let Some(day) = self.cal.select_at_cursor() else {
            return false;
        };
        self.picked = Some(day);
        true
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        CalendarView.render(area, buf, &mut self.cal);
        if self.state == AppState::Helping {
            Help.render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Picking,
    Helping,
    Quitting,
}
