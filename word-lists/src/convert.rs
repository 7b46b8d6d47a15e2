use crate::prelude::*;

pub const DEFAULT_PAIRS: [(&str, &str); 2] = [
    ("allWords.txt", "allWords.json"),
    ("targetWords.txt", "targetWords.json"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Converted { count: usize },
    /// The source file does not exist and the destination was left untouched
    Skipped,
}

/// Trims and lowercases every line, dropping blank ones. Order and duplicates are kept.
/// Lines end with `\n`, `\r\n` or a lone `\r`.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Converts a text file with one word per line into a JSON array.
pub fn convert_txt_to_json(txt: impl AsRef<Path>, json: impl AsRef<Path>) -> Result<Conversion, WordListError> {
    let (txt, json) = (txt.as_ref(), json.as_ref());
    if !txt.exists() {
        warn!("{} not found, {} not written", txt.display(), json.display());
        return Ok(Conversion::Skipped);
    }

    let text = std::fs::read_to_string(txt)?;
    let words = normalize_lines(&text);
    write_json_list(json, &words)?;
    debug!("Converted {} words from {} to {}", words.len(), txt.display(), json.display());

    Ok(Conversion::Converted { count: words.len() })
}
