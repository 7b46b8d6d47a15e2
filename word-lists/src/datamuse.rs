use crate::prelude::*;

pub const DATAMUSE_WORDS_URL: &str = "https://api.datamuse.com/words";

/// The API refuses to return more results than this.
pub const DATAMUSE_MAX_RESULTS: usize = 1000;

#[derive(Deserialize)]
struct DatamuseWord {
    word: String,
}

/// Asks the Datamuse API for words spelled with exactly `word_len` letters.
/// Results come ranked by the API's own score, which mostly follows usage frequency.
#[derive(Debug, Clone)]
pub struct DatamuseSource {
    url: String,
    word_len: usize,
}

impl DatamuseSource {
    pub fn new(word_len: usize) -> Self {
        DatamuseSource { url: DATAMUSE_WORDS_URL.to_string(), word_len }
    }

    pub fn with_url(url: impl Into<String>, word_len: usize) -> Self {
        DatamuseSource { url: url.into(), word_len }
    }

    /// `?` matches any single letter in the `sp` (spelled like) query.
    pub fn pattern(&self) -> String {
        "?".repeat(self.word_len)
    }
}

impl WordSource for DatamuseSource {
    fn top_n_list(&self, lang: Lang, n: usize) -> Result<Vec<String>, WordListError> {
        if lang != Lang::English {
            return Err(WordListError::UnsupportedLang(lang.to_string()));
        }
        let max = n.min(DATAMUSE_MAX_RESULTS);
        if max < n {
            warn!("Datamuse returns at most {DATAMUSE_MAX_RESULTS} words, {n} were requested");
        }

        debug!("Querying {} for {max} words", self.url);
        let client = reqwest::blocking::Client::new();
        let rep = client.get(&self.url)
            .query(&[("sp", self.pattern()), ("max", max.to_string())])
            .send()?;
        if !rep.status().is_success() {
            return Err(WordListError::Status(rep.status().as_u16()));
        }

        parse_words(&rep.text()?)
    }
}

pub(crate) fn parse_words(body: &str) -> Result<Vec<String>, WordListError> {
    let words = serde_json::from_str::<Vec<DatamuseWord>>(body)?;
    Ok(words.into_iter().map(|w| w.word).collect())
}
