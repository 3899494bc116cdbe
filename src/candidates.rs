//! Candidate generation for misspelled words.
//!
//! Two independent strategies feed the spell checker:
//!
//! - [`CandidateGenerator::edits`]: every string reachable through up to
//!   `max_distance` rounds of deletion, transposition, substitution and
//!   insertion. Each round applies exactly one operation to every string the
//!   previous round produced (breadth-first), so round `d` holds the strings at
//!   edit distance `d`.
//! - [`CandidateGenerator::keyboard_typos`]: one substitution per position with
//!   a neighbouring key on a QWERTY layout. Non-Latin scripts get nothing here.
//!   These are always included, even when the edit distance is zero.
//!
//! Candidates carry no score; the checker ranks the ones that survive the
//! dictionary lookup.
//!
//! # Cost
//!
//! Each round is `O(alphabet_size × word_length)` per input string and rounds
//! compound, so the distance is clamped to [`MAX_EDIT_DISTANCE`].

use crate::language::Language;
use ahash::AHashSet;
use log::warn;

/// Hard ceiling on the number of edit rounds.
pub const MAX_EDIT_DISTANCE: usize = 3;

/// Enumerates correction candidates over a fixed alphabet.
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    alphabet: Vec<char>,
}

impl CandidateGenerator {
    /// A generator that inserts and substitutes the characters of `alphabet`.
    /// Duplicate characters are dropped.
    pub fn new(alphabet: &str) -> Self {
        let mut seen = AHashSet::new();
        let alphabet = alphabet.chars().filter(|c| seen.insert(*c)).collect();
        Self { alphabet }
    }

    /// A generator over the alphabet of `lang`.
    pub fn for_language(lang: Language) -> Self {
        Self::new(lang.info().alphabet)
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Every distinct string within `max_distance` edits of `word`, excluding
    /// `word` itself.
    pub fn edits(&self, word: &str, max_distance: usize) -> AHashSet<String> {
        let max_distance = clamp_distance(max_distance);

        let mut seen: AHashSet<String> = AHashSet::new();
        seen.insert(word.to_string());
        let mut frontier = vec![word.to_string()];

        for _ in 0..max_distance {
            let mut level = AHashSet::new();
            for current in &frontier {
                let chars: Vec<char> = current.chars().collect();
                self.single_edits(&chars, &mut level);
            }

            frontier = level
                .into_iter()
                .filter(|candidate| !seen.contains(candidate))
                .collect();
            if frontier.is_empty() {
                break;
            }
            seen.extend(frontier.iter().cloned());
        }

        seen.remove(word);
        seen
    }

    /// Single-key slips: each position replaced by each QWERTY neighbour.
    pub fn keyboard_typos(&self, word: &str) -> AHashSet<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut typos = AHashSet::new();

        for (i, &c) in chars.iter().enumerate() {
            for &neighbor in keyboard_neighbors(c) {
                typos.insert(splice(&chars, i, 1, Some(neighbor)));
            }
        }

        typos
    }

    /// Union of [`edits`](Self::edits) and
    /// [`keyboard_typos`](Self::keyboard_typos). The keyboard slips are added
    /// regardless of `max_distance`.
    pub fn generate(&self, word: &str, max_distance: usize) -> AHashSet<String> {
        let mut candidates = self.edits(word, max_distance);
        candidates.extend(self.keyboard_typos(word));
        candidates
    }

    /// Apply one edit of each kind at every position, accumulating into `out`.
    fn single_edits(&self, chars: &[char], out: &mut AHashSet<String>) {
        let len = chars.len();

        for i in 0..len {
            out.insert(splice(chars, i, 1, None));
        }

        for i in 0..len.saturating_sub(1) {
            if chars[i] != chars[i + 1] {
                let mut swapped = chars.to_vec();
                swapped.swap(i, i + 1);
                out.insert(swapped.into_iter().collect());
            }
        }

        for i in 0..len {
            for &c in &self.alphabet {
                if c != chars[i] {
                    out.insert(splice(chars, i, 1, Some(c)));
                }
            }
        }

        for i in 0..=len {
            for &c in &self.alphabet {
                out.insert(splice(chars, i, 0, Some(c)));
            }
        }
    }
}

fn clamp_distance(max_distance: usize) -> usize {
    if max_distance > MAX_EDIT_DISTANCE {
        warn!(
            "max edit distance {} exceeds ceiling, using {}",
            max_distance, MAX_EDIT_DISTANCE
        );
        MAX_EDIT_DISTANCE
    } else {
        max_distance
    }
}

/// `chars` with `remove` characters at `at` replaced by `insert`.
fn splice(chars: &[char], at: usize, remove: usize, insert: Option<char>) -> String {
    let mut out = String::with_capacity(chars.len() + 1);
    out.extend(&chars[..at]);
    if let Some(c) = insert {
        out.push(c);
    }
    out.extend(&chars[at + remove..]);
    out
}

/// Keys physically adjacent to `key` on a QWERTY keyboard (letters only).
pub fn keyboard_neighbors(key: char) -> &'static [char] {
    match key {
        'q' => &['w', 'a'],
        'w' => &['q', 'e', 'a', 's'],
        'e' => &['w', 'r', 's', 'd'],
        'r' => &['e', 't', 'd', 'f'],
        't' => &['r', 'y', 'f', 'g'],
        'y' => &['t', 'u', 'g', 'h'],
        'u' => &['y', 'i', 'h', 'j'],
        'i' => &['u', 'o', 'j', 'k'],
        'o' => &['i', 'p', 'k', 'l'],
        'p' => &['o', 'l'],
        'a' => &['q', 'w', 's', 'z'],
        's' => &['a', 'w', 'e', 'd', 'x', 'z'],
        'd' => &['s', 'e', 'r', 'f', 'c', 'x'],
        'f' => &['d', 'r', 't', 'g', 'v', 'c'],
        'g' => &['f', 't', 'y', 'h', 'b', 'v'],
        'h' => &['g', 'y', 'u', 'j', 'n', 'b'],
        'j' => &['h', 'u', 'i', 'k', 'm', 'n'],
        'k' => &['j', 'i', 'o', 'l', 'm'],
        'l' => &['k', 'o', 'p'],
        'z' => &['a', 's', 'x'],
        'x' => &['z', 's', 'd', 'c'],
        'c' => &['x', 'd', 'f', 'v'],
        'v' => &['c', 'f', 'g', 'b'],
        'b' => &['v', 'g', 'h', 'n'],
        'n' => &['b', 'h', 'j', 'm'],
        'm' => &['n', 'j', 'k'],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::edit_distance;

    #[test]
    fn test_distance_one_operations() {
        let generator = CandidateGenerator::new("abcdefghijklmnopqrstuvwxyz");
        let edits = generator.edits("helo", 1);

        assert!(edits.contains("hello")); // insertion
        assert!(edits.contains("heo")); // deletion
        assert!(edits.contains("hleo")); // transposition
        assert!(edits.contains("help")); // substitution
        assert!(!edits.contains("helo"));
    }

    #[test]
    fn test_distance_one_count() {
        // n deletions + (n-1) transpositions + 25n substitutions + 26(n+1)
        // insertions, before deduplication.
        let generator = CandidateGenerator::new("abcdefghijklmnopqrstuvwxyz");
        let edits = generator.edits("ab", 1);
        assert!(edits.len() <= 2 + 1 + 50 + 78);
        assert!(edits.contains("ba"));
        assert!(edits.contains("a"));
        assert!(edits.contains("b"));
    }

    #[test]
    fn test_every_candidate_is_within_distance() {
        let generator = CandidateGenerator::new("abc");
        for candidate in generator.edits("cab", 2) {
            // A transposition counts as two Levenshtein edits.
            assert!(edit_distance("cab", &candidate) <= 4, "{candidate}");
        }
    }

    #[test]
    fn test_distance_two_reaches_further() {
        let generator = CandidateGenerator::new("abcdefghijklmnopqrstuvwxyz");
        let one = generator.edits("progamming", 1);
        let two = generator.edits("progamng", 2);

        assert!(one.contains("programming"));
        assert!(!generator.edits("progamng", 1).contains("programing"));
        assert!(two.contains("programing"));
    }

    #[test]
    fn test_zero_distance_is_empty() {
        let generator = CandidateGenerator::new("abc");
        assert!(generator.edits("abc", 0).is_empty());
    }

    #[test]
    fn test_generate_keeps_keyboard_typos_at_zero_distance() {
        let generator = CandidateGenerator::new("abc");
        let candidates = generator.generate("xat", 0);
        assert_eq!(candidates, generator.keyboard_typos("xat"));
        assert!(candidates.contains("cat"));

        // Non-Latin words have no keyboard slips, so nothing remains.
        assert!(generator.generate("سلام", 0).is_empty());
    }

    #[test]
    fn test_distance_is_clamped() {
        let generator = CandidateGenerator::new("ab");
        assert_eq!(generator.edits("ab", 10), generator.edits("ab", MAX_EDIT_DISTANCE));
    }

    #[test]
    fn test_empty_alphabet_only_deletes_and_swaps() {
        let generator = CandidateGenerator::for_language(Language::Chinese);
        let edits = generator.edits("你好", 1);
        let expected: AHashSet<String> =
            ["你", "好", "好你"].iter().map(|s| s.to_string()).collect();
        assert_eq!(edits, expected);
    }

    #[test]
    fn test_multibyte_alphabet() {
        let generator = CandidateGenerator::for_language(Language::Persian);
        assert!(generator.edits("سلا", 1).contains("سلام"));
        assert!(generator.edits("برنام", 1).contains("برنامه"));
    }

    #[test]
    fn test_keyboard_typos() {
        let generator = CandidateGenerator::new("");
        let typos = generator.keyboard_typos("cat");

        // c -> x d f v, a -> q w s z, t -> r y f g
        assert_eq!(typos.len(), 12);
        assert!(typos.contains("xat"));
        assert!(typos.contains("cst"));
        assert!(typos.contains("car"));
    }

    #[test]
    fn test_keyboard_typos_skip_unknown_keys() {
        let generator = CandidateGenerator::new("");
        assert!(generator.keyboard_typos("سلام").is_empty());
        assert!(generator.keyboard_typos("A1").is_empty());
        assert!(keyboard_neighbors('?').is_empty());
    }

    #[test]
    fn test_duplicate_alphabet_chars_dropped() {
        let generator = CandidateGenerator::new("aab");
        assert_eq!(generator.alphabet(), &['a', 'b']);
    }
}
