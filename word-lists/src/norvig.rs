use crate::prelude::*;

pub const NORVIG_COUNT_1W_URL: &str = "https://norvig.com/ngrams/count_1w.txt";

/// Peter Norvig's unigram counts, derived from the Google Web Trillion Word Corpus.
/// Only English is available.
#[derive(Debug, Clone)]
pub struct NorvigSource {
    url: String,
}

impl NorvigSource {
    pub fn new() -> Self {
        NorvigSource { url: NORVIG_COUNT_1W_URL.to_string() }
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        NorvigSource { url: url.into() }
    }
}

impl Default for NorvigSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSource for NorvigSource {
    fn top_n_list(&self, lang: Lang, n: usize) -> Result<Vec<String>, WordListError> {
        if lang != Lang::English {
            return Err(WordListError::UnsupportedLang(lang.to_string()));
        }

        debug!("Downloading ranked words from {}", self.url);
        let rep = reqwest::blocking::get(&self.url)?;
        if !rep.status().is_success() {
            return Err(WordListError::Status(rep.status().as_u16()));
        }
        let words = parse_counts(&rep.text()?, n);
        debug!("Got {} ranked words", words.len());
        if words.is_empty() && n > 0 {
            return Err(WordListError::InvalidResponse("No word found in the counts file"));
        }

        Ok(words)
    }
}

/// Parses `word\tcount` lines, keeping the first `n` words.
/// The file is already sorted by decreasing count.
pub(crate) fn parse_counts(text: &str, n: usize) -> Vec<String> {
    let mut words = Vec::new();
    for line in text.lines() {
        if words.len() >= n {
            break
        }
        let Some(word) = line.split_once('\t').map(|(w, _)| w) else {
            trace!("Skipping malformed line {line:?}");
            continue
        };
        words.push(word.to_string());
    }
    words
}
