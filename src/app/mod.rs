//! Interactive session: the main menu loop and the shared prompt machinery.
//! The individual flows live in `flows`.

pub mod flows;

use std::io::Write;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use yansi::Paint;

use crate::config::Settings;
use crate::core::parse::normalize_digits;
use crate::core::today::{CurrentDateResolver, SystemClock};
use crate::domain::model::Language;
use crate::ui::render;
use crate::ui::text::{error_line, text, Msg};
use crate::utils::error::{AppError, Result};

/// One line of user input, after trimming and back/cancel detection.
pub(crate) enum Input {
    Line(String),
    Back,
    Eof,
    Interrupt,
}

/// What a finished flow means for the session.
pub(crate) enum Outcome {
    Menu,
    Quit,
}

pub struct App {
    lang: Language,
    resolver: CurrentDateResolver<SystemClock>,
    input: Lines<BufReader<Stdin>>,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self> {
        let resolver = CurrentDateResolver::new(
            SystemClock,
            settings.endpoints.clone(),
            Duration::from_secs(settings.timeout_seconds),
            settings.offline,
        )?;
        Ok(Self {
            lang: settings.language,
            resolver,
            input: BufReader::new(tokio::io::stdin()).lines(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            println!("\n{}", render::menu_card(self.lang));
            match self.prompt(text(self.lang, Msg::SelectPrompt)).await {
                Input::Interrupt => {
                    println!("\n{}", text(self.lang, Msg::Interrupted));
                    return Ok(());
                }
                Input::Eof => {
                    println!("{}", text(self.lang, Msg::Goodbye));
                    return Ok(());
                }
                Input::Back => {
                    println!("{}", Paint::red(text(self.lang, Msg::InvalidChoice)));
                }
                Input::Line(choice) => {
                    if let Outcome::Quit = self.dispatch(&choice).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    // Menu choices are digit-normalized too, so Persian keyboard input works.
    async fn dispatch(&mut self, choice: &str) -> Result<Outcome> {
        match normalize_digits(choice).as_str() {
            "1" => self.age_flow(flows::CalendarInput::Gregorian).await,
            "2" => self.age_flow(flows::CalendarInput::Jalali).await,
            "3" => self.convert_flow(flows::Direction::JalaliToGregorian).await,
            "4" => self.convert_flow(flows::Direction::GregorianToJalali).await,
            "5" => {
                self.language_flow();
                Ok(Outcome::Menu)
            }
            "0" => {
                println!("{}", text(self.lang, Msg::Goodbye));
                Ok(Outcome::Quit)
            }
            _ => {
                println!("{}", Paint::red(text(self.lang, Msg::InvalidChoice)));
                Ok(Outcome::Menu)
            }
        }
    }

    /// Prints `message` without a newline and reads the next line, racing it
    /// against Ctrl-C. `b`/`back` cancels; EOF ends the current prompt loop.
    pub(crate) async fn prompt(&mut self, message: &str) -> Input {
        print!("{}", Paint::yellow(message));
        let _ = std::io::stdout().flush();

        tokio::select! {
            _ = tokio::signal::ctrl_c() => Input::Interrupt,
            line = self.input.next_line() => match line {
                Ok(Some(line)) => {
                    let trimmed = line.trim();
                    if trimmed.eq_ignore_ascii_case("b") || trimmed.eq_ignore_ascii_case("back") {
                        Input::Back
                    } else {
                        Input::Line(trimmed.to_string())
                    }
                }
                Ok(None) => Input::Eof,
                Err(e) => {
                    tracing::debug!("stdin read failed: {}", e);
                    Input::Eof
                }
            },
        }
    }

    /// Farewell on a fresh line (the ^C lands mid-prompt), then quit. The
    /// process still exits with status 0.
    pub(crate) fn interrupted(&self) -> Result<Outcome> {
        println!("\n{}", text(self.lang, Msg::Interrupted));
        Ok(Outcome::Quit)
    }

    pub(crate) fn report_error(&self, error: &AppError) {
        println!("{}", Paint::red(error_line(self.lang, error)));
    }
}
