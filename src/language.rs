//! Language profiles, script-based detection and per-language validation.
//!
//! Every supported language has one immutable [`LanguageInfo`]: its code,
//! display name, text direction, the alphabet fed to the candidate generator,
//! and a normalization rule. Normalization is a closed set of strategies picked
//! by matching on the language; there is no way to plug in new ones at runtime.
//!
//! # Detection
//!
//! [`detect_language`] scans the word once per script family, in this order:
//!
//! 1. Arabic script (Arabic, Supplement, Extended-A, Presentation Forms A/B) → Persian
//! 2. Cyrillic → Russian
//! 3. CJK Unified Ideographs → Chinese
//! 4. Hiragana → Japanese
//! 5. Hangul Syllables → Korean
//!
//! and falls back to English. Arabic-script text is always reported as Persian;
//! telling Arabic and Persian apart is left to the caller.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

const LATIN_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// A supported language, identified by its ISO 639-1 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Language {
    #[default]
    English,
    Persian,
    Arabic,
    French,
    Spanish,
    German,
    Italian,
    Russian,
    Chinese,
    Japanese,
    Korean,
}

/// Every supported language, in a stable order.
pub const SUPPORTED_LANGUAGES: [Language; 11] = [
    Language::English,
    Language::Persian,
    Language::Arabic,
    Language::French,
    Language::Spanish,
    Language::German,
    Language::Italian,
    Language::Russian,
    Language::Chinese,
    Language::Japanese,
    Language::Korean,
];

impl Language {
    /// The ISO 639-1 code, e.g. `"fa"`.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Persian => "fa",
            Language::Arabic => "ar",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::German => "de",
            Language::Italian => "it",
            Language::Russian => "ru",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
            Language::Korean => "ko",
        }
    }

    /// English display name.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Persian => "Persian",
            Language::Arabic => "Arabic",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Russian => "Russian",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
        }
    }

    /// Resolve a code, silently falling back to English for anything unknown.
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }

    /// The profile for this language.
    pub fn info(self) -> LanguageInfo {
        get_language_info(self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Strict parse of a language code (case-insensitive, surrounding
    /// whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        SUPPORTED_LANGUAGES
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}

/// Writing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable per-language metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    pub code: Language,
    pub name: &'static str,
    pub direction: Direction,
    /// Letters used for insertions and substitutions. Empty for Chinese,
    /// where there is no small alphabet to enumerate.
    pub alphabet: &'static str,
}

impl LanguageInfo {
    pub fn is_rtl(&self) -> bool {
        self.direction == Direction::Rtl
    }

    /// Canonical storage and lookup key for `word` in this language.
    ///
    /// - Latin-script languages and Russian: trim, lowercase.
    /// - Persian: trim, ASCII digits become Extended Arabic-Indic digits.
    /// - Arabic, Chinese, Japanese, Korean: trim only.
    pub fn normalize(&self, word: &str) -> String {
        match self.code {
            Language::English
            | Language::French
            | Language::Spanish
            | Language::German
            | Language::Italian
            | Language::Russian => word.trim().to_lowercase(),
            Language::Persian => word
                .trim()
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) if c.is_ascii_digit() => PERSIAN_DIGITS[d as usize],
                    _ => c,
                })
                .collect(),
            Language::Arabic | Language::Chinese | Language::Japanese | Language::Korean => {
                word.trim().to_string()
            }
        }
    }

    /// Whether every character of `word` is acceptable for this language.
    pub fn is_valid_word(&self, word: &str) -> bool {
        is_valid_word_for_language(word, self.code)
    }
}

/// The profile for `lang`.
pub fn get_language_info(lang: Language) -> LanguageInfo {
    let (direction, alphabet) = match lang {
        Language::English => (Direction::Ltr, LATIN_ALPHABET),
        Language::Persian => (Direction::Rtl, "ابپتثجچحخدذرزژسشصضطظعغفقکگلمنوهی"),
        Language::Arabic => (Direction::Rtl, "ابتثجحخدذرزسشصضطظعغفقكلمنهوي"),
        Language::French => (Direction::Ltr, "abcdefghijklmnopqrstuvwxyzàâäéèêëïîôöùûüÿç"),
        Language::Spanish => (Direction::Ltr, "abcdefghijklmnopqrstuvwxyzñáéíóúü"),
        Language::German => (Direction::Ltr, "abcdefghijklmnopqrstuvwxyzäöüß"),
        Language::Italian => (Direction::Ltr, "abcdefghijklmnopqrstuvwxyzàèéìíîòóùú"),
        Language::Russian => (Direction::Ltr, "абвгдеёжзийклмнопрстуфхцчшщъыьэюя"),
        Language::Chinese => (Direction::Ltr, ""),
        Language::Japanese => (
            Direction::Ltr,
            "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわをん",
        ),
        Language::Korean => (Direction::Ltr, "ㄱㄴㄷㄹㅁㅂㅅㅇㅈㅊㅋㅌㅍㅎㅏㅑㅓㅕㅗㅛㅜㅠㅡㅣ"),
    };

    LanguageInfo {
        code: lang,
        name: lang.name(),
        direction,
        alphabet,
    }
}

/// Profile lookup by code string; unknown codes resolve to English.
pub fn language_info_for_code(code: &str) -> LanguageInfo {
    get_language_info(Language::from_code(code))
}

/// All supported languages.
pub fn supported_languages() -> &'static [Language] {
    &SUPPORTED_LANGUAGES
}

fn is_arabic_script(c: char) -> bool {
    matches!(
        c as u32,
        0x0600..=0x06FF | 0x0750..=0x077F | 0x08A0..=0x08FF | 0xFB50..=0xFDFF | 0xFE70..=0xFEFF
    )
}

fn is_cyrillic(c: char) -> bool {
    matches!(c as u32, 0x0400..=0x04FF)
}

fn is_cjk_ideograph(c: char) -> bool {
    matches!(c as u32, 0x4E00..=0x9FFF)
}

fn is_hiragana(c: char) -> bool {
    matches!(c as u32, 0x3040..=0x309F)
}

fn is_hangul_syllable(c: char) -> bool {
    matches!(c as u32, 0xAC00..=0xD7AF)
}

fn is_han(c: char) -> bool {
    matches!(
        c as u32,
        0x2E80..=0x2FDF | 0x3005 | 0x3007 | 0x3021..=0x3029 | 0x3038..=0x303B
            | 0x3400..=0x4DBF | 0x4E00..=0x9FFF | 0xF900..=0xFAFF | 0x20000..=0x3134F
    )
}

fn is_katakana(c: char) -> bool {
    matches!(c as u32, 0x30A0..=0x30FF | 0x31F0..=0x31FF | 0xFF66..=0xFF9F)
}

fn is_hangul(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x11FF | 0x3130..=0x318F | 0xA960..=0xA97F | 0xAC00..=0xD7AF | 0xD7B0..=0xD7FF
    )
}

/// Any `L*` general category. Narrower than `char::is_alphabetic`, which also
/// admits letter numerals and some combining marks.
fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Guess the language of `word` from the scripts it uses.
pub fn detect_language(word: &str) -> Language {
    let checks: [(fn(char) -> bool, Language); 5] = [
        (is_arabic_script, Language::Persian),
        (is_cyrillic, Language::Russian),
        (is_cjk_ideograph, Language::Chinese),
        (is_hiragana, Language::Japanese),
        (is_hangul_syllable, Language::Korean),
    ];

    checks
        .iter()
        .find(|(in_script, _)| word.chars().any(in_script))
        .map(|&(_, lang)| lang)
        .unwrap_or(Language::English)
}

/// Whether `word` only uses characters valid for `lang`.
///
/// Alphabet languages accept whitespace plus their alphabet. Chinese, Japanese
/// and Korean accept their scripts (Han, Hiragana, Katakana, Hangul) or any
/// other Unicode letter. Empty and whitespace-only words are invalid.
pub fn is_valid_word_for_language(word: &str, lang: Language) -> bool {
    if word.trim().is_empty() {
        return false;
    }

    match lang {
        Language::Chinese => word.chars().all(|c| is_han(c) || is_letter(c)),
        Language::Japanese => word
            .chars()
            .all(|c| is_hiragana(c) || is_katakana(c) || is_han(c) || is_letter(c)),
        Language::Korean => word.chars().all(|c| is_hangul(c) || is_letter(c)),
        _ => {
            let alphabet = get_language_info(lang).alphabet;
            word.chars()
                .all(|c| c.is_whitespace() || alphabet.contains(c))
        }
    }
}
