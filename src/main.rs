//! `spellsuggest` command line front end.
//!
//! Loads the configured built-in word lists (plus an optional word list file),
//! then answers one query per invocation:
//!
//! ```text
//! spellsuggest check hello wrld
//! spellsuggest suggest progamming --max 3
//! spellsuggest -l fa suggest برنام
//! spellsuggest detect سلام helo привет
//! spellsuggest distance kitten sitting
//! spellsuggest languages
//! spellsuggest info fa
//! ```

use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{warn, LevelFilter};
use std::io::Write;
use std::path::PathBuf;
use std::process;

use spellsuggest::{
    edit_distance, language_info_for_code, similarity, supported_languages, Config, Language,
    SpellChecker, Suggestion,
};

#[derive(Parser, Debug)]
#[command(name = "spellsuggest")]
#[command(about = "Multilingual spell checker with did-you-mean suggestions")]
#[command(version)]
struct Args {
    /// Config file (defaults to the per-user config location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Language code for check/suggest (defaults to the configured language)
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Extra word list file for the selected language
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Increase log verbosity (-v warn, -vv info, -vvv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report whether each word is spelled correctly
    Check {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Ranked suggestions for a word
    Suggest {
        word: String,
        /// Maximum number of suggestions
        #[arg(short, long)]
        max: Option<usize>,
        /// Maximum edit distance (capped at 3)
        #[arg(long)]
        distance: Option<usize>,
        /// Only show suggestions at or above this similarity (defaults to the
        /// configured threshold)
        #[arg(short, long)]
        threshold: Option<f64>,
    },
    /// Detect each word's language, then check and suggest in it
    Detect {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Edit distance and similarity between two strings
    Distance { a: String, b: String },
    /// List supported languages
    Languages,
    /// Show a language profile
    Info { code: String },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> spellsuggest::Result<Config> {
    match path {
        Some(path) => Config::load_path(path),
        None => Config::load(),
    }
}

/// Same fallback as `info`: unknown codes select English, with a warning.
fn resolve_language(code: &str) -> Language {
    code.parse::<Language>().unwrap_or_else(|err| {
        warn!("{err}, falling back to {}", Language::default().name());
        Language::default()
    })
}

fn build_checker(config: &Config, args: &Args) -> spellsuggest::Result<SpellChecker> {
    let mut checker = SpellChecker::with_config(config);

    if let Some(code) = &args.language {
        checker.set_language(resolve_language(code));
    }

    let mut preload: Vec<Language> = config
        .preload_languages
        .iter()
        .filter_map(|code| match code.parse::<Language>() {
            Ok(lang) => Some(lang),
            Err(err) => {
                warn!("Skipping preload entry: {err}");
                None
            }
        })
        .collect();
    // Detection may route to any script, so `detect` loads everything.
    if matches!(args.command, Command::Detect { .. }) {
        preload = supported_languages().to_vec();
    } else if !preload.contains(&checker.language()) {
        preload.push(checker.language());
    }

    for lang in preload {
        checker.load_default_dictionary(lang);
    }

    if let Some(path) = &args.dictionary {
        checker.load_word_list_file(path, checker.language())?;
    }

    Ok(checker)
}

fn print_suggestions(suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("  (no suggestions)");
    }
    for suggestion in suggestions {
        println!("  {} ({:.2})", suggestion.word, suggestion.similarity);
    }
}

fn run(args: Args) -> spellsuggest::Result<()> {
    match &args.command {
        Command::Distance { a, b } => {
            println!("distance:   {}", edit_distance(a, b));
            println!("similarity: {:.2}", similarity(a, b));
            return Ok(());
        }
        Command::Languages => {
            for lang in supported_languages() {
                let info = lang.info();
                println!("{}  {:<9} {}", lang.code(), info.name, info.direction);
            }
            return Ok(());
        }
        Command::Info { code } => {
            let info = language_info_for_code(code);
            println!("code:      {}", info.code);
            println!("name:      {}", info.name);
            println!("direction: {}", info.direction);
            if info.alphabet.is_empty() {
                println!("alphabet:  (script-based)");
            } else {
                println!("alphabet:  {}", info.alphabet);
            }
            return Ok(());
        }
        _ => {}
    }

    let config = load_config(args.config.as_ref())?;
    let checker = build_checker(&config, &args)?;

    match &args.command {
        Command::Check { words } => {
            for word in words {
                let verdict = if checker.is_correct(word) { "ok" } else { "misspelled" };
                println!("{word}: {verdict}");
            }
        }
        Command::Suggest {
            word,
            max,
            distance,
            threshold,
        } => {
            let max = max.unwrap_or(config.max_suggestions);
            let threshold = threshold.unwrap_or(config.similarity_threshold);
            let suggestions: Vec<Suggestion> = match distance {
                Some(distance) => checker
                    .get_suggestions(word, max, *distance)
                    .into_iter()
                    .filter(|suggestion| suggestion.similarity >= threshold)
                    .collect(),
                None => checker.get_suggestions_with_threshold(word, threshold, max),
            };
            println!("{word}:");
            print_suggestions(&suggestions);
        }
        Command::Detect { words } => {
            for word in words {
                let detection = checker.auto_detect_and_suggest(word);
                let verdict = if detection.correct { "ok" } else { "misspelled" };
                println!("{word} [{}]: {verdict}", detection.language);
                if !detection.correct {
                    print_suggestions(&detection.suggestions);
                }
            }
        }
        Command::Distance { .. } | Command::Languages | Command::Info { .. } => {}
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
