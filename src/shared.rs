//! Thread-safe handle around a [`SpellChecker`].
//!
//! The checker mutates its filters and word sets in place with no internal
//! synchronization. Hosts that serve concurrent callers wrap it here: adding
//! words and switching the active language take the write lock, every query
//! takes the read lock, so loaded dictionaries are read in parallel.

use crate::checker::{CheckOutcome, Detection, SpellChecker, Suggestion};
use crate::language::Language;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cheaply cloneable, `Send + Sync` spell checker.
#[derive(Debug, Clone, Default)]
pub struct SharedSpellChecker {
    inner: Arc<RwLock<SpellChecker>>,
}

impl SharedSpellChecker {
    pub fn new(checker: SpellChecker) -> Self {
        Self {
            inner: Arc::new(RwLock::new(checker)),
        }
    }

    pub fn add_words_for_language<I, S>(&self, words: I, lang: Language) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.write().add_words_for_language(words, lang)
    }

    pub fn load_default_dictionary(&self, lang: Language) -> usize {
        self.inner.write().load_default_dictionary(lang)
    }

    pub fn set_language(&self, lang: Language) {
        self.inner.write().set_language(lang);
    }

    pub fn language(&self) -> Language {
        self.inner.read().language()
    }

    pub fn is_correct_for_language(&self, word: &str, lang: Language) -> bool {
        self.inner.read().is_correct_for_language(word, lang)
    }

    pub fn get_suggestions_for_language(
        &self,
        word: &str,
        max_suggestions: usize,
        max_edit_distance: usize,
        lang: Language,
    ) -> Vec<Suggestion> {
        self.inner
            .read()
            .get_suggestions_for_language(word, max_suggestions, max_edit_distance, lang)
    }

    pub fn check_and_suggest_for_language(&self, word: &str, lang: Language) -> CheckOutcome {
        self.inner.read().check_and_suggest_for_language(word, lang)
    }

    pub fn auto_detect_and_suggest(&self, word: &str) -> Detection {
        self.inner.read().auto_detect_and_suggest(word)
    }

    /// Run `f` with shared access to the checker.
    pub fn read<R>(&self, f: impl FnOnce(&SpellChecker) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access to the checker.
    pub fn write<R>(&self, f: impl FnOnce(&mut SpellChecker) -> R) -> R {
        f(&mut self.inner.write())
    }
}
