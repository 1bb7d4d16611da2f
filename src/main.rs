mod app;
mod calendar;
mod help;
mod theme;
mod view;
use crate::app::App;
use crate::calendar::{CalendarConfig, CalendarCoordinator};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        date: Option<Date>,
        config: CalendarConfig,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut config = CalendarConfig::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('f') | Arg::Long("from") => {
                    config.from = Some(parse_date(parser.value()?.string()?)?);
                }
                Arg::Long("future") => config.allow_future = true,
                Arg::Long("strict") => config.select_disabled = false,
                Arg::Long("week-highlight") => config.week_highlight = true,
                Arg::Value(value) if date.is_none() => {
                    date = Some(parse_date(value.string()?)?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { date, config })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { date, config } => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let picked = with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    let cal = CalendarCoordinator::new(today, date, config);
                    let picked = App::new(cal).run(terminal)?;
                    Ok(picked)
                })?;
                if let Some(date) = picked {
                    let s = date
                        .format(&YMD_FMT)
                        .context("failed to format picked date")?;
                    println!("{s}");
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: stripcal [OPTIONS] [YYYY-MM-DD]");
                println!();
                println!("Terminal date picker with a scrolling week strip and a month grid");
                println!();
                println!("The picked date is printed on exit.");
                println!();
                println!("Options:");
                println!("  -f, --from <YYYY-MM-DD>   Disable days before the given date");
                println!("      --future              Enable days after today");
                println!("      --strict              Refuse to pick disabled days");
                println!("      --week-highlight      Underline the picked day's week row");
                println!("  -h, --help                Display this help message and exit");
                println!("  -V, --version             Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn parse_date(value: String) -> Result<Date, lexopt::Error> {
    match Date::parse(&value, &YMD_FMT) {
        Ok(d) => Ok(d),
        Err(e) => Err(lexopt::Error::ParsingFailed {
            value,
            error: Box::new(e),
        }),
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_bare_date() {
        let parser = Parser::from_iter(["stripcal", "2024-06-10"]);
        let cmd = Command::from_parser(parser).expect("parse");
        assert_eq!(
            cmd,
            Command::Run {
                date: Some(date!(2024 - 06 - 10)),
                config: CalendarConfig::default(),
            }
        );
    }

    #[test]
    fn test_parse_options() {
        let parser = Parser::from_iter([
            "stripcal",
            "--from",
            "2024-06-01",
            "--future",
            "--strict",
            "--week-highlight",
        ]);
        let cmd = Command::from_parser(parser).expect("parse");
        assert_eq!(
            cmd,
            Command::Run {
                date: None,
                config: CalendarConfig {
                    from: Some(date!(2024 - 06 - 01)),
                    allow_future: true,
                    select_disabled: false,
                    week_highlight: true,
                },
            }
        );
    }

    #[test]
    fn test_parse_bad_date() {
        let parser = Parser::from_iter(["stripcal", "June 10th"]);
        assert!(Command::from_parser(parser).is_err());
    }

    #[test]
    fn test_parse_extra_value_rejected() {
        let parser = Parser::from_iter(["stripcal", "2024-06-10", "2024-06-11"]);
        assert!(Command::from_parser(parser).is_err());
    }
}
