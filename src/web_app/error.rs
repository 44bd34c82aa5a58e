// web_app/error.rs - Error types shared by client and server code

use thiserror::Error;

/// Failure of the manufacturers query as seen by the page
///
/// The page never branches on the variant; it only shows `to_string()`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The request did not reach the server or the server function failed
    #[error("{0}")]
    Server(String),
    /// A response arrived but could not be decoded
    #[error("{0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("No catalog for namespace '{namespace}'")]
    MissingNamespace { namespace: String },
    #[error("Failed to parse catalog '{namespace}': {source}")]
    Parse {
        namespace: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}
