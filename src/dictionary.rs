//! Per-language word storage and word-list parsing.
//!
//! A [`LanguageDictionary`] pairs a [`MembershipFilter`] with the exact set of
//! normalized words. The filter answers "definitely not" cheaply; the exact
//! set is the source of truth and removes the filter's false positives.
//! Words are only ever added, and every word in the exact set is also in the
//! filter.
//!
//! # Word List Format
//!
//! Word list files use a simple text format:
//! ```text
//! # Comments start with #
//! word frequency
//! the 1000000
//! hello
//! ```
//!
//! Only the first field is used; anything after it on the line is ignored.

use crate::bloom::MembershipFilter;
use crate::candidates::CandidateGenerator;
use crate::error::{Error, Result};
use crate::language::Language;
use ahash::AHashSet;
use std::fs;
use std::path::Path;

/// The (filter, exact set) pair for one language, plus the candidate
/// generator over that language's alphabet.
#[derive(Debug, Clone)]
pub struct LanguageDictionary {
    language: Language,
    filter: MembershipFilter,
    words: AHashSet<String>,
    generator: CandidateGenerator,
}

impl LanguageDictionary {
    /// An empty dictionary whose filter has `filter_size` bits and
    /// `hash_count` probes.
    pub fn new(language: Language, filter_size: usize, hash_count: usize) -> Self {
        Self {
            language,
            filter: MembershipFilter::new(filter_size, hash_count),
            words: AHashSet::new(),
            generator: CandidateGenerator::for_language(language),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Store an already normalized word. Returns `false` if it was present.
    pub fn insert(&mut self, normalized: &str) -> bool {
        self.filter.add(normalized);
        self.words.insert(normalized.to_string())
    }

    /// Filter hit confirmed by the exact set.
    pub fn contains(&self, normalized: &str) -> bool {
        self.filter.contains(normalized) && self.words.contains(normalized)
    }

    /// The filter alone; may return false positives.
    pub fn might_contain(&self, normalized: &str) -> bool {
        self.filter.contains(normalized)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn filter(&self) -> &MembershipFilter {
        &self.filter
    }

    pub fn generator(&self) -> &CandidateGenerator {
        &self.generator
    }
}

/// Extract words from word-list text. Blank lines and `#` comments are
/// skipped; only the first whitespace-separated field of each line is kept.
pub fn parse_word_list(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_whitespace().next())
        .collect()
}

/// Read a word list file.
pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_word_list(&text)
        .into_iter()
        .map(str::to_string)
        .collect())
}
