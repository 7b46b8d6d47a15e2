use clap::Parser;
use std::path::PathBuf;
use word_lists::*;

/// Converts plain-text word lists (one word per line) into JSON arrays
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory the word files are resolved against
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Source and destination as `SRC=DST`, replacing the default allWords and targetWords pairs
    #[arg(long = "pair", value_parser = parse_pair)]
    pairs: Vec<(PathBuf, PathBuf)>,
}

fn parse_pair(value: &str) -> Result<(PathBuf, PathBuf), String> {
    match value.split_once('=') {
        Some((txt, json)) if !txt.is_empty() && !json.is_empty() => Ok((txt.into(), json.into())),
        _ => Err(format!("expected SRC=DST, got {value:?}")),
    }
}

fn main() -> Result<(), WordListError> {
    env_logger::init();

    let args = Args::parse();
    let pairs = if args.pairs.is_empty() {
        DEFAULT_PAIRS.iter().map(|(txt, json)| (PathBuf::from(*txt), PathBuf::from(*json))).collect()
    } else {
        args.pairs
    };

    for (txt, json) in pairs {
        let (txt, json) = (args.dir.join(txt), args.dir.join(json));
        match convert_txt_to_json(&txt, &json)? {
            Conversion::Converted { count } => println!("Converted {count} words from {} to {}", txt.display(), json.display()),
            Conversion::Skipped => println!("Skipped {}: file not found", txt.display()),
        }
    }

    Ok(())
}
