use thiserror::Error;

/// Errors raised while interpreting user-facing model inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Sort token that is not one of the known `<key>-<direction>` pairs.
    #[error("unknown sort order '{0}' (expected nsn|description|qty followed by -asc or -desc)")]
    UnknownSortOrder(String),

    /// Sort key name that is not recognised.
    #[error("unknown sort key '{0}'")]
    UnknownSortKey(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
