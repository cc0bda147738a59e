use crate::scheme::SchemeConfigError;

#[derive(Debug, thiserror::Error)]
pub enum TranslitError {
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),
    #[error(transparent)]
    Config(#[from] SchemeConfigError),
}
