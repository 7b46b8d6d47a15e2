use crate::prelude::*;

/// A provider of words ranked by usage frequency, most frequent first.
pub trait WordSource {
    /// Returns the `n` most frequent words of `lang`.
    /// Fewer words are returned if the corpus is smaller than `n`.
    fn top_n_list(&self, lang: Lang, n: usize) -> Result<Vec<String>, WordListError>;
}

/// In-memory ranked list, already ordered by frequency.
#[derive(Debug, Clone, Default)]
pub struct FixedSource {
    lang: Lang,
    words: Vec<String>,
}

impl FixedSource {
    pub fn new(lang: Lang, words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        FixedSource {
            lang,
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for FixedSource {
    fn top_n_list(&self, lang: Lang, n: usize) -> Result<Vec<String>, WordListError> {
        if lang != self.lang {
            return Err(WordListError::UnsupportedLang(lang.to_string()));
        }
        Ok(self.words.iter().take(n).cloned().collect())
    }
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn top_n_list(&self, lang: Lang, n: usize) -> Result<Vec<String>, WordListError> {
        (**self).top_n_list(lang, n)
    }
}
