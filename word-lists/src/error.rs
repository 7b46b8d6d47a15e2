#[derive(Debug)]
pub enum WordListError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Reqwest(reqwest::Error),
    /// Non-success HTTP status returned by a corpus provider
    Status(u16),
    UnsupportedLang(String),
    InvalidResponse(&'static str),
}

impl From<std::io::Error> for WordListError {
    fn from(e: std::io::Error) -> Self {
        WordListError::Io(e)
    }
}

impl From<serde_json::Error> for WordListError {
    fn from(e: serde_json::Error) -> Self {
        WordListError::Json(e)
    }
}

impl From<reqwest::Error> for WordListError {
    fn from(e: reqwest::Error) -> Self {
        WordListError::Reqwest(e)
    }
}

impl std::fmt::Display for WordListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordListError::Io(e) => write!(f, "IoError: {e}"),
            WordListError::Json(e) => write!(f, "InvalidJson: {e}"),
            WordListError::Reqwest(e) => write!(f, "ReqwestError: {e}"),
            WordListError::Status(status) => write!(f, "UnexpectedStatus: {status}"),
            WordListError::UnsupportedLang(code) => write!(f, "UnsupportedLang: {code}"),
            WordListError::InvalidResponse(e) => write!(f, "InvalidResponse: {e}"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WordListError::Io(e) => Some(e),
            WordListError::Json(e) => Some(e),
            WordListError::Reqwest(e) => Some(e),
            _ => None,
        }
    }
}
