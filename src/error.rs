#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
    #[error("empty clause in {family} signatures")]
    EmptyClause { family: crate::BrowserFamily },
    #[error("empty token in {family} signatures")]
    EmptyToken { family: crate::BrowserFamily },
    #[error("redirect path must be absolute, got {0:?}")]
    InvalidRedirectPath(String),
}

pub type Result<T> = std::result::Result<T, Error>;
