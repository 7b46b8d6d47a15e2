use clap::Parser;
use log::{debug, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::path::PathBuf;
use word_lists::*;

/// Draws random distinct words from a JSON word list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON array of words to draw from
    #[arg(long, default_value = "targetWords.json")]
    input: PathBuf,

    /// Number of words to draw
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Seed making draws reproducible
    #[arg(long)]
    seed: Option<u64>,

    /// Only report whether this word is in the list
    #[arg(long)]
    check: Option<String>,
}

/// Draws up to `count` distinct words, fewer if the list runs out.
fn draw<R: Rng>(mut picker: WordPicker<R>, count: usize) -> Vec<String> {
    for _ in 0..count {
        if picker.next_word().is_none() {
            warn!("Word list exhausted after {} words", picker.used_words().len());
            break
        }
    }
    picker.used_words().to_vec()
}

/// Tells whether `word`, once trimmed and lowercased, is in `words`.
fn check(mut words: Vec<String>, word: &str) -> bool {
    words.sort();
    words.sorted_contains(word.trim().to_lowercase().as_str())
}

fn main() -> Result<(), WordListError> {
    env_logger::init();

    let args = Args::parse();
    let words = read_json_list(&args.input)?;
    debug!("Loaded {} words from {}", words.len(), args.input.display());

    if let Some(word) = args.check {
        match check(words, &word) {
            true => println!("{word} is in {}", args.input.display()),
            false => println!("{word} is not in {}", args.input.display()),
        }
        return Ok(());
    }

    let picked = match args.seed {
        Some(seed) => draw(WordPicker::with_rng(words, StdRng::seed_from_u64(seed)), args.count),
        None => draw(WordPicker::new(words), args.count),
    };
    for word in picked {
        println!("{word}");
    }

    Ok(())
}
