use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spellsuggest::{
    detect_language, edit_distance, similarity, Language, MembershipFilter, SpellChecker,
};
use std::io::Write;

fn random_word(rng: &mut StdRng, alphabet: &[char]) -> String {
    let len = rng.random_range(1..10);
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

#[test]
fn distance_examples() {
    assert_eq!(edit_distance("kitten", "sitting"), 3);
    assert_eq!(edit_distance("hello", "world"), 4);
    assert!((similarity("hello", "helo") - 0.8).abs() < 1e-9);
}

#[test]
fn distance_and_similarity_properties() {
    let mut rng = StdRng::seed_from_u64(7);
    let alphabet: Vec<char> = "abcdeсла".chars().collect();

    for _ in 0..500 {
        let a = random_word(&mut rng, &alphabet);
        let b = random_word(&mut rng, &alphabet);

        assert_eq!(edit_distance(&a, &a), 0);
        assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
        assert_eq!(similarity(&a, &a), 1.0);

        let score = similarity(&a, &b);
        assert!((0.0..=1.0).contains(&score), "{a} {b} {score}");
    }
}

#[test]
fn filter_has_no_false_negatives() {
    let mut rng = StdRng::seed_from_u64(42);
    let alphabet: Vec<char> = "abcdefghijklmnopqrstuvwxyzابپتسلام".chars().collect();
    let words: Vec<String> = (0..20_000)
        .map(|_| random_word(&mut rng, &alphabet))
        .collect();

    // Deliberately undersized so most bits are set.
    let mut filter = MembershipFilter::new(50_000, 4);
    filter.add_all(&words);

    assert!(words.iter().all(|word| filter.contains(word)));
}

#[test]
fn bulk_added_words_are_correct() {
    let mut rng = StdRng::seed_from_u64(99);
    let alphabet: Vec<char> = "abcdefghijklmnopqrstuvwxyz".chars().collect();
    let words: Vec<String> = (0..2_000)
        .map(|_| random_word(&mut rng, &alphabet).to_uppercase())
        .collect();

    let mut checker = SpellChecker::new(20_000, 7);
    assert_eq!(checker.add_words(&words), words.len());

    for word in &words {
        assert!(checker.is_correct(word), "{word}");
    }
}

#[test]
fn suggestions_are_ranked_and_capped() {
    let mut checker = SpellChecker::new(1000, 5);
    checker.add_words(["hello", "help", "hell", "world", "word", "work"]);

    let suggestions = checker.get_suggestions("helo", 3, 2);
    assert!(!suggestions.is_empty());
    assert!(suggestions.len() <= 3);
    assert_eq!(suggestions[0].word, "hello");
    assert!((suggestions[0].similarity - 0.8).abs() < 1e-9);
    for pair in suggestions.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }

    for max in 0..4 {
        assert!(checker.get_suggestions("wor", max, 2).len() <= max);
    }
}

#[test]
fn default_english_dictionary_examples() {
    let mut checker = SpellChecker::default();
    checker.load_default_dictionary(Language::English);

    assert!(checker.is_correct("hello"));
    assert!(!checker.is_correct("helo"));
    assert_eq!(checker.suggest("progamming"), "programming");

    let outcome = checker.check_and_suggest("algoritm");
    assert!(!outcome.correct);
    assert_eq!(outcome.suggestions[0].word, "algorithm");
}

#[test]
fn detection_examples() {
    assert_eq!(detect_language("hello"), Language::English);
    assert_eq!(detect_language("سلام"), Language::Persian);
    assert_eq!(detect_language("привет"), Language::Russian);
    assert_eq!(detect_language("你好"), Language::Chinese);
}

#[test]
fn language_dictionaries_are_isolated() {
    let mut checker = SpellChecker::default();
    checker.load_default_dictionary(Language::English);

    assert!(!checker.is_correct_for_language("سلام", Language::Persian));
    assert!(checker
        .get_suggestions_for_language("سلا", 5, 2, Language::Persian)
        .is_empty());

    checker.load_default_dictionary(Language::Persian);
    assert!(checker.is_correct_for_language("سلام", Language::Persian));
    assert!(!checker.is_correct_for_language("hello", Language::Persian));
    assert!(!checker.is_correct_for_language("سلام", Language::English));
}

#[test]
fn persian_suggestions() {
    let mut checker = SpellChecker::default();
    checker.load_default_dictionary(Language::Persian);

    for (misspelled, expected) in [("برنام", "برنامه"), ("دنی", "دنیا"), ("سلا", "سلام")] {
        let suggestions = checker.get_suggestions_for_language(misspelled, 3, 2, Language::Persian);
        assert!(
            suggestions.iter().any(|s| s.word == expected),
            "{misspelled}: {suggestions:?}"
        );
    }

    // ASCII digits normalize to Persian digits, which are not letters.
    assert!(!checker.is_correct_for_language("سلام1", Language::Persian));
}

#[test]
fn other_scripts_round_trip_through_auto_detect() {
    let mut checker = SpellChecker::default();
    for lang in [Language::Russian, Language::Chinese, Language::Korean] {
        checker.load_default_dictionary(lang);
    }

    let detection = checker.auto_detect_and_suggest("ПРИВЕТ");
    assert_eq!(detection.language, Language::Russian);
    assert!(detection.correct);

    let detection = checker.auto_detect_and_suggest("превет");
    assert!(!detection.correct);
    assert_eq!(detection.suggestions[0].word, "привет");

    let detection = checker.auto_detect_and_suggest("你好");
    assert_eq!(detection.language, Language::Chinese);
    assert!(detection.correct);

    let detection = checker.auto_detect_and_suggest("학교");
    assert_eq!(detection.language, Language::Korean);
    assert!(detection.correct);
}

#[test]
fn word_list_file_loading() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# custom words").unwrap();
    writeln!(file, "Rustacean 100").unwrap();
    writeln!(file, "borrowck").unwrap();
    writeln!(file, "not-a-word").unwrap();

    let mut checker = SpellChecker::default();
    let accepted = checker
        .load_word_list_file(file.path(), Language::English)
        .unwrap();

    assert_eq!(accepted, 2);
    assert!(checker.is_correct("rustacean"));
    assert_eq!(checker.suggest("borowck"), "borrowck");
}

#[test]
fn degenerate_inputs_do_not_panic() {
    let mut checker = SpellChecker::new(0, 0);
    assert!(!checker.is_correct(""));
    assert!(checker.get_suggestions("", 5, 2).is_empty());
    assert_eq!(checker.suggest(""), "");

    checker.add_words(["alpha", "beta"]);
    assert!(checker.is_correct("alpha"));
    // With no probes the filter passes everything; the exact set still decides.
    assert!(!checker.is_correct("gamma"));
    assert_eq!(checker.suggest("alpho"), "alpha");
}
