use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the Supabase connection lifecycle.
///
/// Every variant is recoverable by the caller. In particular, asking for the
/// shared client before `init` has succeeded yields [`NotInitialized`]
/// instead of aborting the process.
///
/// [`NotInitialized`]: ConnectionError::NotInitialized
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The credentials file could not be read or parsed.
    #[error("credentials file {path} could not be loaded")]
    EnvFileNotFound {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// A required environment variable is unset or empty.
    #[error("required environment variable {0} is not set or empty")]
    MissingVar(&'static str),

    /// The configured endpoint is not a valid URL, so no client can be built.
    #[error("invalid Supabase URL {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The shared client was requested before a successful `init` call.
    #[error("Supabase client is not initialized, call SupabaseConnection::init() first")]
    NotInitialized,
}
