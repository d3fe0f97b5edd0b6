use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// All four bracket characters are present but not as `[text](url)`.
    #[error("malformed link on line {line}: brackets in `{text}` are not in [text](url) order")]
    MalformedLink { line: usize, text: String },
}
