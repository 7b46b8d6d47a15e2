use clap::{Parser, ValueEnum};
use log::info;
use std::path::PathBuf;
use word_lists::*;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Corpus {
    /// Norvig's unigram counts
    Norvig,
    /// Datamuse API, capped at 1000 words
    Datamuse,
}

/// Builds the list of six-letter words from a frequency-ranked corpus
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the JSON array to write
    #[arg(long, default_value = "allWords.json")]
    output: PathBuf,

    /// Where the ranked words come from
    #[arg(long, value_enum, default_value_t = Corpus::Norvig)]
    corpus: Corpus,

    /// Corpus language
    #[arg(long, default_value = "en")]
    lang: Lang,

    /// Number of most frequent words to consider
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Exact number of letters of the kept words
    #[arg(long, default_value_t = DEFAULT_WORD_LEN)]
    length: usize,
}

fn main() -> Result<(), WordListError> {
    env_logger::init();

    let args = Args::parse();
    let config = ExtractConfig {
        lang: args.lang,
        top_n: args.top_n,
        word_len: args.length,
    };
    let source: Box<dyn WordSource> = match args.corpus {
        Corpus::Norvig => Box::new(NorvigSource::new()),
        Corpus::Datamuse => Box::new(DatamuseSource::new(args.length)),
    };

    info!("Extracting {}-letter words from the top {} {} words ({:?})", config.word_len, config.top_n, config.lang, args.corpus);
    let count = build_word_list(&source, &config, &args.output)?;
    println!("Created {} with {count} words", args.output.display());

    Ok(())
}
