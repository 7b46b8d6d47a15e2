use crate::prelude::*;
use unicode_general_category::{get_general_category, GeneralCategory};

pub const DEFAULT_TOP_N: usize = 50_000;
pub const DEFAULT_WORD_LEN: usize = 6;

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub lang: Lang,
    /// How many of the most frequent words to consider
    pub top_n: usize,
    /// Exact number of letters a word must have
    pub word_len: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            lang: Lang::English,
            top_n: DEFAULT_TOP_N,
            word_len: DEFAULT_WORD_LEN,
        }
    }
}

/// Lowercases ranked words and keeps the alphabetic ones with exactly `word_len` letters.
/// The result is deduplicated and sorted.
///
/// Length is counted in chars of the lowercased word.
pub fn filter_words<I, S>(words: I, word_len: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut kept = BTreeSet::new();
    for word in words {
        let word = word.as_ref().to_lowercase();
        if word.chars().count() != word_len || !word.chars().all(is_letter) {
            continue;
        }
        kept.insert(word);
    }
    kept.into_iter().collect()
}

/// A char from one of the Unicode letter categories (Lu, Ll, Lt, Lm, Lo).
/// Letter numbers and combining marks are not letters.
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Fetches the most frequent words from `source` and filters them.
pub fn extract_words(source: &impl WordSource, config: &ExtractConfig) -> Result<Vec<String>, WordListError> {
    let ranked = source.top_n_list(config.lang, config.top_n)?;
    let words = filter_words(&ranked, config.word_len);
    debug!("Kept {} of {} ranked words", words.len(), ranked.len());
    Ok(words)
}

/// Extracts words from `source` and writes them to `output` as a JSON array.
/// Returns the number of words written.
pub fn build_word_list(source: &impl WordSource, config: &ExtractConfig, output: impl AsRef<Path>) -> Result<usize, WordListError> {
    let words = extract_words(source, config)?;
    write_json_list(output, &words)?;
    Ok(words.len())
}
