#[derive(Debug, thiserror::Error)]
pub enum VideoError {
    #[error("Invalid page URL {url}: {reason}")]
    InvalidPageUrl { url: String, reason: String },

    #[error("response not ok: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("no video found in page")]
    NoVideoFound,

    #[error("Parse Failed")]
    ParseFailed,

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a single `video_redirect` anchor could not be turned into a URL.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("no '=' in href")]
    MissingEquals,

    #[error("no '&' after '=' in href")]
    MissingAmpersand,

    #[error("invalid URL escape {0:?}")]
    InvalidEscape(String),

    #[error("decoded URL is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("decoded URL is empty")]
    Empty,
}
