//! The spell checker: per-language dictionaries, correctness checks and
//! ranked suggestions.
//!
//! # Pipeline
//!
//! Every query runs the same fixed steps against one language:
//!
//! 1. Normalize the word with the language's rule.
//! 2. Reject it if it has characters the language does not allow.
//! 3. Check the membership filter, then confirm in the exact word set.
//! 4. If the word is known, it is its own (only) suggestion at similarity 1.0.
//! 5. Otherwise generate edit and keyboard candidates, keep those in the
//!    dictionary, score them against the normalized word, sort by descending
//!    similarity and truncate.
//!
//! Language dictionaries are created lazily the first time words are added
//! for a language and only ever grow.
//!
//! The unsuffixed methods (`is_correct`, `get_suggestions`, ...) act on the
//! active language set with [`SpellChecker::set_language`]; the `_for_language`
//! variants take the language explicitly and leave the active language alone.

use crate::config::Config;
use crate::dictionary::{read_word_list, LanguageDictionary};
use crate::error::Result;
use crate::language::{detect_language, get_language_info, Language};
use crate::similarity::similarity;
use crate::wordlist::default_words;
use ahash::AHashMap;
use log::{debug, info};
use std::path::Path;

/// Bits per language filter when none is configured.
pub const DEFAULT_DICTIONARY_SIZE: usize = 10_000;
/// Probes per word when none is configured.
pub const DEFAULT_HASH_COUNT: usize = 7;
/// Suggestion count used by `check_and_suggest`.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;
/// Edit distance used by `suggest` and `check_and_suggest`.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

/// A candidate correction and how close it is to the queried word.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub word: String,
    /// In `[0.0, 1.0]`; 1.0 only for an exact match.
    pub similarity: f64,
}

/// Result of [`SpellChecker::check_and_suggest`].
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub correct: bool,
    /// Empty when the word is correct.
    pub suggestions: Vec<Suggestion>,
}

/// Result of [`SpellChecker::auto_detect_and_suggest`].
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub language: Language,
    pub correct: bool,
    pub suggestions: Vec<Suggestion>,
}

/// Multilingual spell checker.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    dictionaries: AHashMap<Language, LanguageDictionary>,
    active_language: Language,
    dictionary_size: usize,
    hash_count: usize,
    max_suggestions: usize,
    max_edit_distance: usize,
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new(DEFAULT_DICTIONARY_SIZE, DEFAULT_HASH_COUNT)
    }
}

impl SpellChecker {
    /// A checker whose per-language filters get `dictionary_size` bits and
    /// `hash_count` probes. English is the active language.
    pub fn new(dictionary_size: usize, hash_count: usize) -> Self {
        Self {
            dictionaries: AHashMap::new(),
            active_language: Language::English,
            dictionary_size,
            hash_count,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
        }
    }

    pub fn with_config(config: &Config) -> Self {
        let mut checker = Self::new(config.dictionary_size, config.hash_count);
        checker.max_suggestions = config.max_suggestions;
        checker.max_edit_distance = config.max_edit_distance;
        checker.active_language = Language::from_code(&config.default_language);
        checker
    }

    /// Add words to the active language. Returns how many were accepted.
    pub fn add_words<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_words_for_language(words, self.active_language)
    }

    /// Normalize and add words to `lang`, creating its dictionary if needed.
    /// Words invalid for the language are skipped. Returns how many were
    /// accepted.
    pub fn add_words_for_language<I, S>(&mut self, words: I, lang: Language) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let info = get_language_info(lang);
        let (size, hashes) = (self.dictionary_size, self.hash_count);
        let dictionary = self
            .dictionaries
            .entry(lang)
            .or_insert_with(|| LanguageDictionary::new(lang, size, hashes));

        let mut accepted = 0;
        let mut skipped = 0;
        for word in words {
            let normalized = info.normalize(word.as_ref());
            if info.is_valid_word(&normalized) {
                dictionary.insert(&normalized);
                accepted += 1;
            } else {
                skipped += 1;
            }
        }

        debug!(
            "added {} words to {} ({} skipped, {} total)",
            accepted,
            lang,
            skipped,
            dictionary.len()
        );
        accepted
    }

    /// Load the built-in word list for `lang`.
    pub fn load_default_dictionary(&mut self, lang: Language) -> usize {
        let accepted = self.add_words_for_language(default_words(lang), lang);
        info!("Loaded default {} dictionary: {} words", lang.name(), accepted);
        accepted
    }

    /// Load a word list file into `lang`.
    pub fn load_word_list_file(&mut self, path: &Path, lang: Language) -> Result<usize> {
        let words = read_word_list(path)?;
        let accepted = self.add_words_for_language(&words, lang);
        info!(
            "Loaded {} words for {} from {}",
            accepted,
            lang.name(),
            path.display()
        );
        Ok(accepted)
    }

    pub fn set_language(&mut self, lang: Language) {
        self.active_language = lang;
    }

    pub fn language(&self) -> Language {
        self.active_language
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    /// Whether any words were ever added for `lang`.
    pub fn has_language(&self, lang: Language) -> bool {
        self.dictionaries.contains_key(&lang)
    }

    /// Languages with a dictionary, in declaration order.
    pub fn loaded_languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.dictionaries.keys().copied().collect();
        languages.sort();
        languages
    }

    /// Number of distinct words stored for `lang`.
    pub fn word_count(&self, lang: Language) -> usize {
        self.dictionaries.get(&lang).map_or(0, LanguageDictionary::len)
    }

    pub fn dictionary(&self, lang: Language) -> Option<&LanguageDictionary> {
        self.dictionaries.get(&lang)
    }

    pub fn is_correct(&self, word: &str) -> bool {
        self.is_correct_for_language(word, self.active_language)
    }

    /// True only if the normalized word passes both the filter and the exact
    /// set for `lang`.
    pub fn is_correct_for_language(&self, word: &str, lang: Language) -> bool {
        let Some(dictionary) = self.dictionaries.get(&lang) else {
            return false;
        };

        let info = get_language_info(lang);
        let normalized = info.normalize(word);
        info.is_valid_word(&normalized) && dictionary.contains(&normalized)
    }

    pub fn get_suggestions(
        &self,
        word: &str,
        max_suggestions: usize,
        max_edit_distance: usize,
    ) -> Vec<Suggestion> {
        self.get_suggestions_for_language(
            word,
            max_suggestions,
            max_edit_distance,
            self.active_language,
        )
    }

    /// Up to `max_suggestions` dictionary words within `max_edit_distance`
    /// edits (or one keyboard slip) of `word`, best first.
    pub fn get_suggestions_for_language(
        &self,
        word: &str,
        max_suggestions: usize,
        max_edit_distance: usize,
        lang: Language,
    ) -> Vec<Suggestion> {
        let Some(dictionary) = self.dictionaries.get(&lang) else {
            return Vec::new();
        };

        let info = get_language_info(lang);
        let normalized = info.normalize(word);
        if !info.is_valid_word(&normalized) {
            return Vec::new();
        }

        let mut suggestions = if dictionary.contains(&normalized) {
            vec![Suggestion {
                word: normalized,
                similarity: 1.0,
            }]
        } else {
            let candidates = dictionary.generator().generate(&normalized, max_edit_distance);
            let candidate_count = candidates.len();

            let mut found: Vec<Suggestion> = candidates
                .into_iter()
                .filter(|candidate| dictionary.contains(candidate))
                .map(|candidate| Suggestion {
                    similarity: similarity(&normalized, &candidate),
                    word: candidate,
                })
                .collect();

            debug!(
                "{:?} ({}): {} candidates, {} in dictionary",
                normalized,
                lang,
                candidate_count,
                found.len()
            );

            found.sort_by(|a, b| {
                b.similarity
                    .total_cmp(&a.similarity)
                    .then_with(|| a.word.cmp(&b.word))
            });
            found
        };

        suggestions.truncate(max_suggestions);
        suggestions
    }

    pub fn suggest(&self, word: &str) -> String {
        self.suggest_for_language(word, self.active_language)
    }

    /// The best suggestion, or the normalized word itself when there is none.
    pub fn suggest_for_language(&self, word: &str, lang: Language) -> String {
        self.get_suggestions_for_language(word, 1, self.max_edit_distance, lang)
            .into_iter()
            .next()
            .map(|suggestion| suggestion.word)
            .unwrap_or_else(|| get_language_info(lang).normalize(word))
    }

    pub fn get_suggestions_with_threshold(
        &self,
        word: &str,
        threshold: f64,
        max_suggestions: usize,
    ) -> Vec<Suggestion> {
        self.get_suggestions_with_threshold_for_language(
            word,
            threshold,
            max_suggestions,
            self.active_language,
        )
    }

    /// Suggestions with similarity at or above `threshold`, at most
    /// `max_suggestions` of them.
    pub fn get_suggestions_with_threshold_for_language(
        &self,
        word: &str,
        threshold: f64,
        max_suggestions: usize,
        lang: Language,
    ) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = self
            .get_suggestions_for_language(
                word,
                max_suggestions.saturating_mul(2),
                self.max_edit_distance,
                lang,
            )
            .into_iter()
            .filter(|suggestion| suggestion.similarity >= threshold)
            .collect();

        suggestions.truncate(max_suggestions);
        suggestions
    }

    pub fn check_and_suggest(&self, word: &str) -> CheckOutcome {
        self.check_and_suggest_for_language(word, self.active_language)
    }

    /// Correctness plus, for misspelled words, the configured number of
    /// suggestions at the configured distance.
    pub fn check_and_suggest_for_language(&self, word: &str, lang: Language) -> CheckOutcome {
        if self.is_correct_for_language(word, lang) {
            return CheckOutcome {
                correct: true,
                suggestions: Vec::new(),
            };
        }

        CheckOutcome {
            correct: false,
            suggestions: self.get_suggestions_for_language(
                word,
                self.max_suggestions,
                self.max_edit_distance,
                lang,
            ),
        }
    }

    /// Detect the language from the word's script, then check and suggest in
    /// that language. The active language is neither read nor changed.
    pub fn auto_detect_and_suggest(&self, word: &str) -> Detection {
        let language = detect_language(word);
        debug!("detected {} for {:?}", language, word);

        let CheckOutcome {
            correct,
            suggestions,
        } = self.check_and_suggest_for_language(word, language);

        Detection {
            language,
            correct,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_checker() -> SpellChecker {
        let mut checker = SpellChecker::new(1000, 5);
        checker.add_words(["hello", "help", "hell", "world", "word", "work"]);
        checker
    }

    #[test]
    fn test_basic_correctness() {
        let mut checker = SpellChecker::new(1000, 5);
        checker.add_words(["hello", "world", "test", "go", "programming"]);

        assert!(checker.is_correct("hello"));
        assert!(checker.is_correct("world"));
        assert!(checker.is_correct("  HELLO "));
        assert!(!checker.is_correct("helo"));
        assert!(!checker.is_correct("wrld"));
    }

    #[test]
    fn test_suggestions_ranked() {
        let checker = sample_checker();
        let suggestions = checker.get_suggestions("helo", 3, 2);

        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0].word, "hello");
        assert!((suggestions[0].similarity - 0.8).abs() < 1e-9);
        for pair in suggestions.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[test]
    fn test_ties_are_alphabetical() {
        let checker = sample_checker();
        let suggestions = checker.get_suggestions("helo", 3, 1);
        let words: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
        // hell and help both score 0.75.
        assert_eq!(words, vec!["hello", "hell", "help"]);
    }

    #[test]
    fn test_correct_word_is_its_own_suggestion() {
        let checker = sample_checker();
        let suggestions = checker.get_suggestions("Hello", 5, 2);
        assert_eq!(
            suggestions,
            vec![Suggestion {
                word: "hello".to_string(),
                similarity: 1.0
            }]
        );
        assert!(checker.get_suggestions("hello", 0, 2).is_empty());
    }

    #[test]
    fn test_suggest_returns_input_when_nothing_found() {
        let checker = sample_checker();
        assert_eq!(checker.suggest("helo"), "hello");
        assert_eq!(checker.suggest("XYZZYQ"), "xyzzyq");
    }

    #[test]
    fn test_keyboard_typo_found_at_distance_one() {
        let mut checker = SpellChecker::default();
        checker.add_words(["cat"]);
        let suggestions = checker.get_suggestions("xat", 5, 1);
        assert_eq!(suggestions[0].word, "cat");
    }

    #[test]
    fn test_keyboard_typo_found_without_edits() {
        let mut checker = SpellChecker::default();
        checker.add_words(["cat", "at"]);
        let suggestions = checker.get_suggestions("xat", 5, 0);
        let words: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
        // "at" is a deletion away, so only the keyboard slip survives.
        assert_eq!(words, vec!["cat"]);
    }

    #[test]
    fn test_threshold() {
        let checker = sample_checker();
        let suggestions = checker.get_suggestions_with_threshold("helo", 0.8, 5);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].word, "hello");

        let loose = checker.get_suggestions_with_threshold("helo", 0.7, 2);
        assert_eq!(loose.len(), 2);
        assert!(loose.iter().all(|s| s.similarity >= 0.7));
    }

    #[test]
    fn test_check_and_suggest() {
        let checker = sample_checker();

        let outcome = checker.check_and_suggest("world");
        assert!(outcome.correct);
        assert!(outcome.suggestions.is_empty());

        let outcome = checker.check_and_suggest("wrld");
        assert!(!outcome.correct);
        assert_eq!(outcome.suggestions[0].word, "world");
        assert!(outcome.suggestions.len() <= DEFAULT_MAX_SUGGESTIONS);
    }

    #[test]
    fn test_uninitialized_language() {
        let checker = sample_checker();
        assert!(!checker.has_language(Language::German));
        assert!(!checker.is_correct_for_language("hallo", Language::German));
        assert!(checker
            .get_suggestions_for_language("hallo", 5, 2, Language::German)
            .is_empty());
        assert_eq!(checker.suggest_for_language("Hallo", Language::German), "hallo");
        assert_eq!(checker.word_count(Language::German), 0);
    }

    #[test]
    fn test_invalid_words_are_rejected() {
        let mut checker = sample_checker();
        assert_eq!(checker.add_words(["ok123", "", "fine"]), 1);
        assert!(!checker.is_correct("ok123"));
        assert!(checker.get_suggestions("hel1o", 5, 2).is_empty());
        assert!(!checker.is_correct(""));
    }

    #[test]
    fn test_language_selector() {
        let mut checker = SpellChecker::new(10_000, 7);
        checker.load_default_dictionary(Language::English);
        checker.load_default_dictionary(Language::Persian);

        assert_eq!(checker.language(), Language::English);
        assert!(checker.is_correct("hello"));
        assert!(!checker.is_correct("سلام"));

        checker.set_language(Language::Persian);
        assert_eq!(checker.language(), Language::Persian);
        assert!(checker.is_correct("سلام"));
        assert!(!checker.is_correct("hello"));

        // Explicit-language calls ignore the selector.
        assert!(checker.is_correct_for_language("hello", Language::English));
        assert_eq!(checker.language(), Language::Persian);
    }

    #[test]
    fn test_auto_detect() {
        let mut checker = SpellChecker::new(10_000, 7);
        checker.load_default_dictionary(Language::English);
        checker.load_default_dictionary(Language::Persian);
        checker.set_language(Language::Russian);

        let detection = checker.auto_detect_and_suggest("سلام");
        assert_eq!(detection.language, Language::Persian);
        assert!(detection.correct);

        let detection = checker.auto_detect_and_suggest("helo");
        assert_eq!(detection.language, Language::English);
        assert!(!detection.correct);
        assert_eq!(detection.suggestions[0].word, "hello");

        let detection = checker.auto_detect_and_suggest("برنام");
        assert_eq!(detection.language, Language::Persian);
        assert!(!detection.correct);
        assert_eq!(detection.suggestions[0].word, "برنامه");

        assert_eq!(checker.language(), Language::Russian);
    }

    #[test]
    fn test_with_config() {
        let config = Config {
            dictionary_size: 2048,
            hash_count: 3,
            max_edit_distance: 1,
            max_suggestions: 2,
            default_language: "fa".to_string(),
            ..Config::default()
        };
        let mut checker = SpellChecker::with_config(&config);
        assert_eq!(checker.language(), Language::Persian);
        assert_eq!(checker.max_suggestions(), 2);
        assert_eq!(checker.max_edit_distance(), 1);

        checker.add_words(["سلام"]);
        let dictionary = checker.dictionary(Language::Persian).unwrap();
        assert_eq!(dictionary.filter().bit_count(), 2048);
        assert_eq!(dictionary.filter().hash_count(), 3);
    }

    #[test]
    fn test_loaded_languages() {
        let mut checker = SpellChecker::default();
        checker.add_words_for_language(["мир"], Language::Russian);
        checker.add_words_for_language(["hola"], Language::Spanish);
        checker.add_words(["hello"]);
        assert_eq!(
            checker.loaded_languages(),
            vec![Language::English, Language::Spanish, Language::Russian]
        );
    }
}
