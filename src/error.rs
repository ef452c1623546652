use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no slot at index {index}, the table has {available}")]
    UnknownSlot { index: usize, available: usize },
    #[error(transparent)]
    Parse(#[from] svgr::ParseError),
    #[error("could not read configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("could not write asset catalog contents: {0}")]
    Contents(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
