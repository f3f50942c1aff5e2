//! The four interactive flows plus the language menu. Each flow loops on its
//! input prompt, reporting errors and retrying, until the user goes back,
//! declines "try another", or interrupts.

use chrono::NaiveDate;
use yansi::Paint;

use super::{App, Input, Outcome};
use crate::core::{age, jalali_backend, parse};
use crate::domain::model::{DateSource, ResolvedDate};
use crate::domain::ports::{DateResolver, JalaliCalendar};
use crate::ui::render::{self, AgeCard};
use crate::ui::text::{text, Msg};
use crate::utils::error::{AppError, Result};

pub(crate) enum CalendarInput {
    Gregorian,
    Jalali,
}

pub(crate) enum Direction {
    JalaliToGregorian,
    GregorianToJalali,
}

enum TryAgain {
    Yes,
    No,
    Interrupt,
}

fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "بله" | "آره"
    )
}

impl App {
    pub(crate) async fn age_flow(&mut self, calendar: CalendarInput) -> Result<Outcome> {
        let backend = jalali_backend();
        if matches!(calendar, CalendarInput::Jalali) && backend.is_none() {
            println!("{}", Paint::red(text(self.lang, Msg::NeedJalali)));
            return Ok(Outcome::Menu);
        }

        let resolved = self.resolver.resolve().await;
        self.report_date_source(resolved);
        let today = resolved.date;

        let prompt_msg = match calendar {
            CalendarInput::Gregorian => Msg::BirthdatePromptGregorian,
            CalendarInput::Jalali => Msg::BirthdatePromptJalali,
        };

        loop {
            let line = match self.prompt(text(self.lang, prompt_msg)).await {
                Input::Interrupt => return self.interrupted(),
                Input::Back | Input::Eof => return Ok(Outcome::Menu),
                Input::Line(line) => line,
            };

            let born = match parse_birthdate(&line, &calendar, backend) {
                Ok(date) => date,
                Err(e) => {
                    self.report_error(&e);
                    continue;
                }
            };

            let age = match age::age_ymd(born, today) {
                Ok(age) => age,
                Err(e) => {
                    self.report_error(&e);
                    continue;
                }
            };
            let next = age::next_birthday(born, today);

            let card = AgeCard {
                born,
                today,
                jalali_pair: backend.map(|b| (b.to_jalali(born), b.to_jalali(today))),
                age,
                next_birthday: next.date,
                next_birthday_jalali: backend.map(|b| b.to_jalali(next.date)),
                days_away: next.days_away,
            };
            println!("{}", render::age_card(self.lang, &card));

            match self.try_another().await {
                TryAgain::Yes => continue,
                TryAgain::Interrupt => return self.interrupted(),
                TryAgain::No => return Ok(Outcome::Menu),
            }
        }
    }

    pub(crate) async fn convert_flow(&mut self, direction: Direction) -> Result<Outcome> {
        let Some(backend) = jalali_backend() else {
            println!("{}", Paint::red(text(self.lang, Msg::NeedJalali)));
            return Ok(Outcome::Menu);
        };

        let (prompt_msg, title_msg) = match direction {
            Direction::JalaliToGregorian => (Msg::JalaliDatePrompt, Msg::OptionJalaliToGregorian),
            Direction::GregorianToJalali => {
                (Msg::GregorianDatePrompt, Msg::OptionGregorianToJalali)
            }
        };

        loop {
            let line = match self.prompt(text(self.lang, prompt_msg)).await {
                Input::Interrupt => return self.interrupted(),
                Input::Back | Input::Eof => return Ok(Outcome::Menu),
                Input::Line(line) => line,
            };

            let pair = match direction {
                Direction::JalaliToGregorian => parse::parse_jalali(&line)
                    .and_then(|j| backend.to_gregorian(j).map(|g| (g, j))),
                Direction::GregorianToJalali => {
                    parse::parse_gregorian(&line).map(|g| (g, backend.to_jalali(g)))
                }
            };

            let (gregorian, jalali) = match pair {
                Ok(pair) => pair,
                Err(e) => {
                    self.report_error(&e);
                    continue;
                }
            };
            println!(
                "{}",
                render::convert_card(self.lang, text(self.lang, title_msg), gregorian, jalali)
            );

            match self.try_another().await {
                TryAgain::Yes => continue,
                TryAgain::Interrupt => return self.interrupted(),
                TryAgain::No => return Ok(Outcome::Menu),
            }
        }
    }

    pub(crate) fn language_flow(&mut self) {
        println!("{}", render::language_card(self.lang));
        self.lang = self.lang.toggled();
    }

    // Silent for a trusted local clock; the other sources get a notice in the
    // session language.
    fn report_date_source(&self, resolved: ResolvedDate) {
        match resolved.source {
            DateSource::Local => {}
            DateSource::Online => {
                println!("{}", Paint::cyan(text(self.lang, Msg::OnlineInfo)));
            }
            DateSource::Fallback => {
                println!("{}", Paint::yellow(text(self.lang, Msg::FallbackWarning)));
            }
        }
    }

    async fn try_another(&mut self) -> TryAgain {
        match self.prompt(text(self.lang, Msg::TryAnotherPrompt)).await {
            Input::Interrupt => TryAgain::Interrupt,
            Input::Line(answer) if is_affirmative(&answer) => TryAgain::Yes,
            _ => TryAgain::No,
        }
    }
}

fn parse_birthdate(
    input: &str,
    calendar: &CalendarInput,
    backend: Option<&'static dyn JalaliCalendar>,
) -> Result<NaiveDate> {
    match calendar {
        CalendarInput::Gregorian => parse::parse_gregorian(input),
        CalendarInput::Jalali => {
            let backend = backend.ok_or(AppError::CapabilityUnavailable)?;
            let jalali = parse::parse_jalali(input)?;
            backend.to_gregorian(jalali)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_answers() {
        for answer in ["y", "Y", "yes", " Yes ", "بله", "آره"] {
            assert!(is_affirmative(answer), "{:?} should be affirmative", answer);
        }
        for answer in ["", "n", "no", "نه", "maybe"] {
            assert!(!is_affirmative(answer), "{:?} should not be affirmative", answer);
        }
    }

    #[test]
    fn test_parse_birthdate_gregorian() {
        let date = parse_birthdate("1990-07-15", &CalendarInput::Gregorian, None).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 7, 15).unwrap());
    }

    #[test]
    fn test_parse_birthdate_jalali_needs_backend() {
        assert!(matches!(
            parse_birthdate("1369-04-24", &CalendarInput::Jalali, None),
            Err(AppError::CapabilityUnavailable)
        ));
    }

    #[cfg(feature = "jalali")]
    #[test]
    fn test_parse_birthdate_jalali_converts() {
        let date = parse_birthdate("1369-04-24", &CalendarInput::Jalali, jalali_backend()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 7, 15).unwrap());
    }

    #[cfg(feature = "jalali")]
    #[test]
    fn test_parse_birthdate_jalali_invalid_date_fails_at_conversion() {
        assert!(matches!(
            parse_birthdate("1404-12-30", &CalendarInput::Jalali, jalali_backend()),
            Err(AppError::InvalidCalendarDate { calendar: "Jalali", .. })
        ));
    }
}
