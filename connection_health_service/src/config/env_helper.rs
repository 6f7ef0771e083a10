use std::str::FromStr;

use anyhow::{Context, Result};

/// Load an environment variable and parse it to the given type, falling back
/// to a default when the variable is not set
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be read or parsed
pub fn load_env_var_or<T: FromStr>(var_name: &str, default: T) -> Result<T> {
    match std::env::var(var_name) {
        Ok(var) => var
            .parse::<T>()
            .map_err(|_| anyhow::anyhow!("{} is not a valid value for {}", var, var_name)),
        Err(std::env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(e).context(format!("{} could not be read", var_name)),
    }
}
