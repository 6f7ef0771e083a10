use anyhow::Result;

use super::env_helper::load_env_var_or;

const DEFAULT_PROBE_TABLE: &str = "users";

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Table queried by the startup probe.
    pub probe_table: String,
}

impl ServiceConfig {
    pub fn load_from_env() -> Result<Self> {
        Ok(Self {
            probe_table: load_env_var_or("PROBE_TABLE", DEFAULT_PROBE_TABLE.to_string())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_table_defaults_to_users() {
        std::env::remove_var("PROBE_TABLE");
        let config = ServiceConfig::load_from_env().unwrap();
        assert_eq!(config.probe_table, "users");
    }
}
