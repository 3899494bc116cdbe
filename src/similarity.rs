//! Levenshtein edit distance and the normalized similarity score built on it.
//!
//! Both functions measure strings in Unicode scalar values (`char`s), not
//! bytes, so `"سلام"` has length 4 and a one-letter typo in Persian costs the
//! same as one in English.

/// Minimum number of single-character insertions, deletions and substitutions
/// turning `source` into `target`.
pub fn edit_distance(source: &str, target: &str) -> usize {
    let source_chars: Vec<char> = source.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();
    let len1 = source_chars.len();
    let len2 = target_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    // Two rolling rows of the DP matrix.
    let mut previous: Vec<usize> = (0..=len2).collect();
    let mut current = vec![0usize; len2 + 1];

    for i in 1..=len1 {
        current[0] = i;
        for j in 1..=len2 {
            let cost = if source_chars[i - 1] == target_chars[j - 1] { 0 } else { 1 };

            let deletion = previous[j] + 1;
            let insertion = current[j - 1] + 1;
            let substitution = previous[j - 1] + cost;

            current[j] = deletion.min(insertion).min(substitution);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[len2]
}

/// Similarity in `[0.0, 1.0]`: `1 - distance / max_len`, and exactly 1.0 for
/// equal strings (including two empty strings).
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = edit_distance(a, b);
    (1.0 - distance as f64 / max_len as f64).clamp(0.0, 1.0)
}
