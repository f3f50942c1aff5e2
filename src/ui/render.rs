use chrono::NaiveDate;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use yansi::{Color, Paint};

use crate::domain::model::{AgeResult, JalaliDate, Language};
use crate::ui::text::{age_phrase, days_phrase, text, Msg};

pub const WIDTH: usize = 56;
const INNER: usize = WIDTH - 2;

/// Call once at startup. Honors the NO_COLOR convention on top of the
/// explicit setting.
pub fn init_colors(enabled: bool) {
    if !enabled || std::env::var_os("NO_COLOR").is_some() {
        Paint::disable();
    }
}

fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}

pub fn title_bar(lang: Language, title: &str) -> String {
    let title = truncate_to_width(&format!(" {} ", title.trim()), INNER);
    let fill = "═".repeat(INNER.saturating_sub(title.width()));
    match lang {
        Language::Fa => format!("╔{}{}╗", fill, title),
        Language::En => format!("╔{}{}╗", title, fill),
    }
}

pub fn bottom() -> String {
    format!("╚{}╝", "═".repeat(INNER))
}

/// One boxed label/value row. Persian sessions read right to left, so the
/// value comes first and the content is pushed to the right edge. Padding is
/// measured on the unstyled text; color escapes never count toward width.
pub fn line(lang: Language, label: &str, value: &str, color: Option<Color>) -> String {
    let value = truncate_to_width(value, INNER.saturating_sub(label.width() + 2));
    let pad = " ".repeat(INNER.saturating_sub(label.width() + 2 + value.width()));

    let styled = match color {
        Some(c) => c.paint(&value).to_string(),
        None => value.clone(),
    };

    match lang {
        Language::En => format!("║{}: {}{}║", label, styled, pad),
        Language::Fa => format!("║{}{}  {}║", pad, styled, label),
    }
}

/// The localized display name of `of` in the catalog of `lang`.
pub fn language_name(lang: Language, of: Language) -> &'static str {
    match of {
        Language::Fa => text(lang, Msg::LanguageNameFa),
        Language::En => text(lang, Msg::LanguageNameEn),
    }
}

pub struct AgeCard {
    pub born: NaiveDate,
    pub today: NaiveDate,
    pub jalali_pair: Option<(JalaliDate, JalaliDate)>,
    pub age: AgeResult,
    pub next_birthday: NaiveDate,
    pub next_birthday_jalali: Option<JalaliDate>,
    pub days_away: i64,
}

pub fn age_card(lang: Language, card: &AgeCard) -> String {
    let mut lines = vec![
        title_bar(lang, text(lang, Msg::AgeCardTitle)),
        line(
            lang,
            text(lang, Msg::LabelBirthGregorian),
            &card.born.to_string(),
            Some(Color::Green),
        ),
        line(
            lang,
            text(lang, Msg::LabelTodayGregorian),
            &card.today.to_string(),
            Some(Color::Green),
        ),
    ];

    if let Some((born_j, today_j)) = card.jalali_pair {
        lines.push(line(
            lang,
            text(lang, Msg::LabelBirthJalali),
            &born_j.to_string(),
            Some(Color::Magenta),
        ));
        lines.push(line(
            lang,
            text(lang, Msg::LabelTodayJalali),
            &today_j.to_string(),
            Some(Color::Magenta),
        ));
    }

    lines.push(line(
        lang,
        text(lang, Msg::LabelAge),
        &age_phrase(lang, card.age),
        Some(Color::Cyan),
    ));

    match card.next_birthday_jalali {
        Some(next_j) => {
            lines.push(line(
                lang,
                text(lang, Msg::LabelNextBirthdayGregorian),
                &card.next_birthday.to_string(),
                Some(Color::Blue),
            ));
            lines.push(line(
                lang,
                text(lang, Msg::LabelNextBirthdayJalali),
                &next_j.to_string(),
                Some(Color::Blue),
            ));
        }
        None => {
            lines.push(line(
                lang,
                text(lang, Msg::LabelNextBirthday),
                &card.next_birthday.to_string(),
                Some(Color::Blue),
            ));
        }
    }

    lines.push(line(
        lang,
        text(lang, Msg::LabelIn),
        &days_phrase(lang, card.days_away),
        Some(Color::Cyan),
    ));
    lines.push(bottom());

    lines.join("\n")
}

pub fn convert_card(lang: Language, title: &str, gregorian: NaiveDate, jalali: JalaliDate) -> String {
    [
        title_bar(lang, title),
        line(
            lang,
            "Gregorian / میلادی",
            &gregorian.to_string(),
            Some(Color::Green),
        ),
        line(
            lang,
            "Jalali / شمسی",
            &jalali.to_string(),
            Some(Color::Magenta),
        ),
        bottom(),
    ]
    .join("\n")
}

pub fn menu_card(lang: Language) -> String {
    let language_option = format!(
        "{} / {}",
        text(lang, Msg::OptionLanguage),
        text(lang.toggled(), Msg::OptionLanguage)
    );
    let exit_option = format!(
        "{} / {}",
        text(lang, Msg::OptionExit),
        text(lang.toggled(), Msg::OptionExit)
    );

    [
        title_bar(lang, text(lang, Msg::MainMenuTitle)),
        line(lang, "1)", text(lang, Msg::OptionAgeGregorian), None),
        line(lang, "2)", text(lang, Msg::OptionAgeJalali), None),
        line(lang, "3)", text(lang, Msg::OptionJalaliToGregorian), None),
        line(lang, "4)", text(lang, Msg::OptionGregorianToJalali), None),
        line(lang, "5)", &language_option, None),
        line(lang, "0)", &exit_option, None),
        bottom(),
    ]
    .join("\n")
}

pub fn language_card(lang: Language) -> String {
    [
        title_bar(lang, text(lang, Msg::LanguageMenuTitle)),
        line(
            lang,
            text(lang, Msg::LabelCurrentLanguage),
            language_name(lang, lang),
            Some(Color::Cyan),
        ),
        line(
            lang,
            text(lang, Msg::LabelSwitchTo),
            language_name(lang, lang.toggled()),
            Some(Color::Green),
        ),
        bottom(),
    ]
    .join("\n")
}
