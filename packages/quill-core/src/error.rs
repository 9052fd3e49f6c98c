use thiserror::Error;

/// Errors raised while validating widget options, before anything is emitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A CDN version option is an empty string.
    #[error("the \"{0}\" option must be a non-empty string")]
    InvalidVersion(&'static str),

    /// The explicit configuration override is not a JSON object.
    #[error("the \"configuration\" option must be a JSON object")]
    InvalidConfiguration,

    /// The formats whitelist is not a JSON array.
    #[error("the \"formats\" option must be a JSON array")]
    InvalidFormats,

    /// The modules option is not a JSON object.
    #[error("the \"modules\" option must be a JSON object")]
    InvalidModules,

    /// The icons option is not an object keyed by icon names.
    #[error("the \"icons\" option must be an object keyed by icon names")]
    InvalidIcons,
}

/// Result type for option resolution.
pub type Result<T> = std::result::Result<T, ConfigError>;
