use patterns::PatternLoadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrokError {
    #[error("Pattern load failed: {0}")]
    PatternLoad(#[from] PatternLoadError),

    #[error("Unknown pattern: {name}")]
    UnknownPattern { name: String },

    #[error("Recursive pattern definition: {chain}")]
    RecursivePattern { chain: String },

    /// Raised by the regex engine on the fully expanded pattern, e.g. for a
    /// binding name used twice or an invalid custom fragment.
    #[error(transparent)]
    Regex(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type GrokResult<T> = Result<T, GrokError>;
