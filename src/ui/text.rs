use crate::domain::model::{AgeResult, Language};
use crate::utils::error::AppError;

/// Every user-visible string, addressed by role. `text` resolves a message
/// in the session language; the `*_phrase` helpers cover the parameterized
/// ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    MainMenuTitle,
    OptionAgeGregorian,
    OptionAgeJalali,
    OptionJalaliToGregorian,
    OptionGregorianToJalali,
    OptionLanguage,
    OptionExit,
    SelectPrompt,
    BirthdatePromptGregorian,
    BirthdatePromptJalali,
    JalaliDatePrompt,
    GregorianDatePrompt,
    TryAnotherPrompt,
    Goodbye,
    Interrupted,
    InvalidChoice,
    AgeCardTitle,
    LabelBirthGregorian,
    LabelTodayGregorian,
    LabelBirthJalali,
    LabelTodayJalali,
    LabelAge,
    LabelNextBirthdayGregorian,
    LabelNextBirthdayJalali,
    LabelNextBirthday,
    LabelIn,
    NeedJalali,
    FallbackWarning,
    OnlineInfo,
    LanguageMenuTitle,
    LabelCurrentLanguage,
    LabelSwitchTo,
    LanguageNameFa,
    LanguageNameEn,
}

pub fn text(lang: Language, msg: Msg) -> &'static str {
    match lang {
        Language::En => english(msg),
        Language::Fa => persian(msg),
    }
}

fn english(msg: Msg) -> &'static str {
    match msg {
        Msg::MainMenuTitle => "MAIN MENU",
        Msg::OptionAgeGregorian => "Calculate Age (Gregorian input)",
        Msg::OptionAgeJalali => "Calculate Age (Shamsi input)",
        Msg::OptionJalaliToGregorian => "Convert Shamsi → Gregorian",
        Msg::OptionGregorianToJalali => "Convert Gregorian → Shamsi",
        Msg::OptionLanguage => "Language",
        Msg::OptionExit => "Exit",
        Msg::SelectPrompt => "Select an option [0-5]: ",
        Msg::BirthdatePromptGregorian => {
            "Enter birthdate (Gregorian) [YYYY-MM-DD] (or 'b' to go back): "
        }
        Msg::BirthdatePromptJalali => {
            "Enter birthdate (Jalali) [YYYY-MM-DD] (or 'b' to go back): "
        }
        Msg::JalaliDatePrompt => "Jalali date [YYYY-MM-DD] (or 'b' to go back): ",
        Msg::GregorianDatePrompt => "Gregorian date [YYYY-MM-DD] (or 'b' to go back): ",
        Msg::TryAnotherPrompt => "Try another date? [y/N]: ",
        Msg::Goodbye => "Goodbye! 👋",
        Msg::Interrupted => "Interrupted. Goodbye!",
        Msg::InvalidChoice => "Invalid choice. Please try again.",
        Msg::AgeCardTitle => "AGE CALCULATOR",
        Msg::LabelBirthGregorian => "Birthdate (G)",
        Msg::LabelTodayGregorian => "Today (G)",
        Msg::LabelBirthJalali => "Birthdate (J)",
        Msg::LabelTodayJalali => "Today (J)",
        Msg::LabelAge => "Age",
        Msg::LabelNextBirthdayGregorian => "Next BD (G)",
        Msg::LabelNextBirthdayJalali => "Next BD (J)",
        Msg::LabelNextBirthday => "Next BD",
        Msg::LabelIn => "In",
        Msg::NeedJalali => {
            "✖ Jalali features are not included in this build (rebuild with the 'jalali' feature)."
        }
        Msg::FallbackWarning => {
            "⚠ Could not verify a plausible current date. Using fallback 2000-01-01."
        }
        Msg::OnlineInfo => "ℹ Using current date from an online time source.",
        Msg::LanguageMenuTitle => "LANGUAGE",
        Msg::LabelCurrentLanguage => "Current",
        Msg::LabelSwitchTo => "Switch to",
        Msg::LanguageNameFa => "Persian (فارسی)",
        Msg::LanguageNameEn => "English",
    }
}

fn persian(msg: Msg) -> &'static str {
    match msg {
        Msg::MainMenuTitle => "منوی اصلی",
        Msg::OptionAgeGregorian => "محاسبه سن (ورودی میلادی)",
        Msg::OptionAgeJalali => "محاسبه سن (ورودی شمسی)",
        Msg::OptionJalaliToGregorian => "تبدیل شمسی → میلادی",
        Msg::OptionGregorianToJalali => "تبدیل میلادی → شمسی",
        Msg::OptionLanguage => "تغییر زبان",
        Msg::OptionExit => "خروج",
        Msg::SelectPrompt => "یک گزینه را انتخاب کنید [۰ تا ۵]: ",
        Msg::BirthdatePromptGregorian => {
            "تاریخ تولد (میلادی) را وارد کنید [YYYY-MM-DD] (یا b برای بازگشت): "
        }
        Msg::BirthdatePromptJalali => {
            "تاریخ تولد (شمسی) را وارد کنید [YYYY-MM-DD] (یا b برای بازگشت): "
        }
        Msg::JalaliDatePrompt => "تاریخ شمسی [YYYY-MM-DD] (یا b برای بازگشت): ",
        Msg::GregorianDatePrompt => "تاریخ میلادی [YYYY-MM-DD] (یا b برای بازگشت): ",
        Msg::TryAnotherPrompt => "تاریخ دیگری امتحان شود؟ [y/N]: ",
        Msg::Goodbye => "خدانگهدار! 👋",
        Msg::Interrupted => "عملیات متوقف شد. خدانگهدار!",
        Msg::InvalidChoice => "گزینه نامعتبر است. دوباره امتحان کنید.",
        Msg::AgeCardTitle => "محاسبه سن",
        Msg::LabelBirthGregorian => "تولد (میلادی)",
        Msg::LabelTodayGregorian => "امروز (میلادی)",
        Msg::LabelBirthJalali => "تولد (شمسی)",
        Msg::LabelTodayJalali => "امروز (شمسی)",
        Msg::LabelAge => "سن",
        Msg::LabelNextBirthdayGregorian => "تولد بعدی (میلادی)",
        Msg::LabelNextBirthdayJalali => "تولد بعدی (شمسی)",
        Msg::LabelNextBirthday => "تولد بعدی",
        Msg::LabelIn => "در",
        Msg::NeedJalali => {
            "✖ امکانات شمسی در این نسخه موجود نیست (با ویژگی 'jalali' دوباره بسازید)."
        }
        Msg::FallbackWarning => "⚠ تاریخ جاری قابل اطمینان نبود؛ از 2000-01-01 استفاده شد.",
        Msg::OnlineInfo => "ℹ تاریخ امروز از منبع آنلاین دریافت شد.",
        Msg::LanguageMenuTitle => "زبان",
        Msg::LabelCurrentLanguage => "زبان فعلی",
        Msg::LabelSwitchTo => "تغییر به",
        Msg::LanguageNameFa => "فارسی",
        Msg::LanguageNameEn => "انگلیسی",
    }
}

pub fn age_phrase(lang: Language, age: AgeResult) -> String {
    match lang {
        Language::En => format!(
            "{} years, {} months, {} days",
            age.years, age.months, age.days
        ),
        Language::Fa => format!("{} سال، {} ماه، {} روز", age.years, age.months, age.days),
    }
}

pub fn days_phrase(lang: Language, days: i64) -> String {
    match lang {
        Language::En => format!("{} days", days),
        Language::Fa => format!("{} روز", days),
    }
}

pub fn error_line(lang: Language, error: &AppError) -> String {
    match lang {
        Language::En => format!("Error: {}", error),
        Language::Fa => format!("خطا: {}", error),
    }
}
