use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid viewBox: '{0}'")]
    ViewBox(String),
    #[error("invalid path data at offset {offset}: '{data}'")]
    PathData { data: String, offset: usize },
    #[error("malformed markup: {0}")]
    Markup(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
