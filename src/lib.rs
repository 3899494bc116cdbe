//! Spellsuggest - multilingual spell checking with "did you mean" suggestions.
//!
//! # Overview
//!
//! Given per-language word lists, the checker answers whether a word is known
//! and, when it is not, proposes ranked corrections by:
//! - Routing the word to a language (explicitly, or by script detection)
//! - Normalizing it with that language's rule
//! - Rejecting it early through a bloom filter, confirming hits in an exact set
//! - Enumerating edit-distance and keyboard-slip candidates
//! - Scoring the surviving candidates by normalized Levenshtein similarity
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Caller word    │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Language        │ ← Detect, normalize, validate (language.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SpellChecker    │ ← Per-language filter + word set (checker.rs, dictionary.rs)
//! └────────┬────────┘
//!          │ miss
//!          ▼
//! ┌─────────────────┐
//! │ Candidates      │ ← Bounded edits + QWERTY slips (candidates.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Similarity      │ ← Rank survivors (similarity.rs)
//! └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use spellsuggest::{Language, SpellChecker};
//!
//! let mut checker = SpellChecker::new(10_000, 7);
//! checker.add_words(["hello", "help", "hell", "world"]);
//!
//! assert!(checker.is_correct("Hello"));
//! assert_eq!(checker.suggest("helo"), "hello");
//!
//! let detection = checker.auto_detect_and_suggest("wrld");
//! assert_eq!(detection.language, Language::English);
//! assert_eq!(detection.suggestions[0].word, "world");
//! ```

pub mod bloom;
pub mod candidates;
pub mod checker;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod language;
pub mod shared;
pub mod similarity;
pub mod wordlist;

pub use bloom::MembershipFilter;
pub use candidates::{keyboard_neighbors, CandidateGenerator, MAX_EDIT_DISTANCE};
pub use checker::{CheckOutcome, Detection, SpellChecker, Suggestion};
pub use config::Config;
pub use dictionary::{parse_word_list, LanguageDictionary};
pub use error::{Error, Result};
pub use language::{
    detect_language, get_language_info, is_valid_word_for_language, language_info_for_code,
    supported_languages, Direction, Language, LanguageInfo,
};
pub use shared::SharedSpellChecker;
pub use similarity::{edit_distance, similarity};
