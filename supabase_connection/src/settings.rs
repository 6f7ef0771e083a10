use std::path::PathBuf;

use tracing::info;

use crate::error::ConnectionError;

/// Environment variable naming the credentials file to load.
pub const ENV_FILE_VAR: &str = "SUPABASE_ENV_FILE";
/// Environment variable holding the Supabase project endpoint.
pub const URL_VAR: &str = "SUPABASE_URL";
/// Environment variable holding the anonymous access key.
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

const DEFAULT_ENV_FILE: &str = ".env";

/// Connection settings read from the credentials file and the process
/// environment.
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub url: String,
    pub anon_key: String,
    /// The credentials file the settings were loaded from.
    pub env_file: PathBuf,
}

impl ConnectionSettings {
    /// Loads the credentials file and reads the required variables from the
    /// process environment.
    ///
    /// The file location is taken from `SUPABASE_ENV_FILE` when set, and
    /// defaults to `.env` in the current working directory. Loading the file
    /// mutates the process environment; variables that are already set are
    /// not overridden.
    ///
    /// # Returns
    /// * `Result<Self, ConnectionError>` - The settings, or an error if the
    ///   file is unreadable or a required variable is missing or empty.
    pub fn load_from_env() -> Result<Self, ConnectionError> {
        let env_file = resolve_env_file(std::env::var_os(ENV_FILE_VAR).map(PathBuf::from));

        dotenvy::from_path(&env_file).map_err(|source| ConnectionError::EnvFileNotFound {
            path: env_file.clone(),
            source,
        })?;
        info!("Loaded Supabase credentials from {}", env_file.display());

        let url = required_var(URL_VAR)?;
        let anon_key = required_var(ANON_KEY_VAR)?;

        // The key itself never reaches the logs.
        info!("{}: {}", URL_VAR, url);
        info!("{} length: {}", ANON_KEY_VAR, anon_key.len());

        Ok(Self {
            url,
            anon_key,
            env_file,
        })
    }
}

fn resolve_env_file(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE))
}

fn required_var(name: &'static str) -> Result<String, ConnectionError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConnectionError::MissingVar(name)),
    }
}
