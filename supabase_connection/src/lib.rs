pub mod error;
pub mod settings;

use std::sync::{Arc, RwLock};

use postgrest::Postgrest;
use tracing::info;
use url::Url;

pub use error::ConnectionError;
pub use settings::ConnectionSettings;

// Process-wide slot holding the shared client. Guarded so concurrent
// init/client/close calls cannot race; between racing writers the last
// one wins.
static CLIENT: RwLock<Option<Arc<Postgrest>>> = RwLock::new(None);

/// A utility struct providing static methods for the Supabase client
/// lifecycle. The client is built once at startup, published in a
/// process-wide slot, and borrowed by any component that needs it.
pub struct SupabaseConnection;

impl SupabaseConnection {
    /// Initializes the shared Supabase client.
    ///
    /// This method:
    /// 1. Loads the credentials file and reads `SUPABASE_URL` and
    ///    `SUPABASE_ANON_KEY` from the environment
    /// 2. Builds a PostgREST client against the project endpoint
    /// 3. Publishes the client in the process-wide slot
    ///
    /// Calling `init` while a client is already published silently replaces
    /// it; the library exposes no disconnect to run on the old handle.
    ///
    /// # Returns
    /// * `Result<(), ConnectionError>` - Returns Ok(()) once the client is
    ///   published, or an error if configuration is missing or invalid.
    ///
    /// # Example
    /// ```no_run
    /// # use supabase_connection::SupabaseConnection;
    /// SupabaseConnection::init()?;
    /// let client = SupabaseConnection::client()?;
    /// # Ok::<(), supabase_connection::ConnectionError>(())
    /// ```
    pub fn init() -> Result<(), ConnectionError> {
        let settings = ConnectionSettings::load_from_env()?;
        let client = Self::connect(&settings)?;
        publish(client);
        info!("Supabase client initialized");
        Ok(())
    }

    /// Builds a standalone client from explicit settings, without touching
    /// the shared slot. Components that prefer an owned handle over the
    /// process-wide one construct it here and pass it along themselves.
    ///
    /// The endpoint is validated up front; `Postgrest::new` itself cannot
    /// fail, so a malformed URL is the only construction error.
    pub fn connect(settings: &ConnectionSettings) -> Result<Postgrest, ConnectionError> {
        let base = Url::parse(&settings.url).map_err(|source| ConnectionError::InvalidUrl {
            url: settings.url.clone(),
            source,
        })?;

        // The REST surface lives under /rest/v1 of the project URL.
        let endpoint = format!("{}/rest/v1", base.as_str().trim_end_matches('/'));

        Ok(Postgrest::new(endpoint)
            .insert_header("apikey", settings.anon_key.as_str())
            .insert_header("Authorization", format!("Bearer {}", settings.anon_key)))
    }

    /// Returns the client published by a previous successful `init` call.
    ///
    /// # Returns
    /// * `Result<Arc<Postgrest>, ConnectionError>` - The shared client, or
    ///   `ConnectionError::NotInitialized` if nothing is published.
    pub fn client() -> Result<Arc<Postgrest>, ConnectionError> {
        let slot = CLIENT.read().unwrap_or_else(|e| e.into_inner());
        slot.as_ref().cloned().ok_or(ConnectionError::NotInitialized)
    }

    /// Clears the shared client. There is no protocol-level disconnect to
    /// perform; handles already borrowed by callers stay valid until they
    /// are dropped. Calling `close` with nothing published is a no-op.
    pub fn close() {
        let mut slot = CLIENT.write().unwrap_or_else(|e| e.into_inner());
        if slot.take().is_some() {
            info!("Supabase client released");
        }
    }
}

fn publish(client: Postgrest) {
    let mut slot = CLIENT.write().unwrap_or_else(|e| e.into_inner());
    *slot = Some(Arc::new(client));
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn settings(url: &str) -> ConnectionSettings {
        ConnectionSettings {
            url: url.to_string(),
            anon_key: "abc123".to_string(),
            env_file: PathBuf::from(".env"),
        }
    }

    #[test]
    fn connect_rejects_malformed_url() {
        let err = SupabaseConnection::connect(&settings("not a url")).err().unwrap();
        assert!(matches!(err, ConnectionError::InvalidUrl { .. }));
    }

    #[test]
    fn connect_accepts_project_endpoint() {
        SupabaseConnection::connect(&settings("https://example.supabase.co")).unwrap();
    }

    // The slot is process-wide state, so its whole lifecycle is covered by
    // one test instead of several that would race each other.
    #[test]
    fn slot_lifecycle() {
        SupabaseConnection::close();
        assert!(matches!(
            SupabaseConnection::client(),
            Err(ConnectionError::NotInitialized)
        ));

        let first = SupabaseConnection::connect(&settings("https://one.supabase.co")).unwrap();
        publish(first);
        SupabaseConnection::client().expect("client should be published");

        // Publishing again silently replaces the previous handle.
        let second = SupabaseConnection::connect(&settings("https://two.supabase.co")).unwrap();
        publish(second);
        SupabaseConnection::client().expect("client should still be published");

        SupabaseConnection::close();
        SupabaseConnection::close();
        assert!(matches!(
            SupabaseConnection::client(),
            Err(ConnectionError::NotInitialized)
        ));
    }
}
