#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Non-positive duration: {0}")]
    NonPositiveDuration(String),

    #[error("Negative repetition count: {0}")]
    NegativeCount(i64),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl From<confique::Error> for Error {
    fn from(value: confique::Error) -> Self {
        Error::Config(value.to_string())
    }
}
