use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// File name under `~/.give-cli/` holding the session token.
const CREDENTIAL_FILE: &str = "credentials.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredCredential {
    token: String,
    stored_at: DateTime<Utc>,
}

/// Where the session token lives. The request client only ever calls
/// `token()`; `store`/`clear` belong to the login and logout flows.
pub trait CredentialStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn store(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Token persisted as a JSON file in the user's home directory, surviving
/// across invocations the way a browser session does.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        let dir = home.join(".give-cli");
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join(CREDENTIAL_FILE),
        })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CredentialStore for FileCredentialStore {
    fn token(&self) -> Option<String> {
        // A missing or malformed file reads as "not logged in".
        let contents = fs::read_to_string(&self.path).ok()?;
        let credential: StoredCredential = serde_json::from_str(&contents).ok()?;
        Some(credential.token)
    }

    fn store(&self, token: &str) -> Result<()> {
        let credential = StoredCredential {
            token: token.to_string(),
            stored_at: Utc::now(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&credential)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and one-shot sessions.
#[derive(Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn store(&self, token: &str) -> Result<()> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.token(), None);

        store.store("tok-1").unwrap();
        assert_eq!(store.token(), Some("tok-1".to_string()));

        store.clear().unwrap();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_memory_store_with_token() {
        let store = MemoryCredentialStore::with_token("seeded");
        assert_eq!(store.token(), Some("seeded".to_string()));
    }
}
