use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown toast category `{0}`")]
    UnknownCategory(String),

    #[error("no configuration directory available for this user")]
    NoConfigDir,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
