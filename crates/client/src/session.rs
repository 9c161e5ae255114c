//! Session token type and on-disk persistence.
//!
//! The token itself is opaque: the client never inspects it, it only
//! forwards it in the `Authorization` header. Validity is enforced by
//! the server rejecting expired or invalid tokens on each call.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed file name for the persisted token, matching the storage key
/// the dashboard has always used.
pub const TOKEN_FILE_NAME: &str = "auth_token";

/// Errors that can occur when loading or saving the session token.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// Reading or writing the token file failed.
    #[error("token store I/O error: {0}")]
    Io(#[from] io::Error),

    /// The token file exists but does not parse.
    #[error("token store parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A bearer session token obtained from `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionToken {
    /// The opaque token string sent as `Authorization: Bearer <token>`.
    pub token: String,
    /// Unix timestamp when the token was obtained. Informational only;
    /// expiry is the server's concern.
    pub obtained_at: i64,
}

impl SessionToken {
    /// Wrap a freshly issued token, stamping the current time.
    #[must_use]
    pub fn new(token: String) -> Self {
        Self {
            token,
            obtained_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// On-disk persistence for the session token.
///
/// One token per store, under a fixed file name. Survives runs until
/// an explicit logout clears it.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a store rooted at `dir`. The directory is created lazily
    /// on the first save.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(TOKEN_FILE_NAME),
        }
    }

    /// Path of the token file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<SessionToken>, TokenStoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let token = serde_json::from_str(&contents)?;
        Ok(Some(token))
    }

    /// Persist a token, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self, token: &SessionToken) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string(token)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Remove the persisted token. Removing an already-absent token is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), TokenStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_store(label: &str) -> TokenStore {
        let dir = std::env::temp_dir()
            .join("shopdesk-session-tests")
            .join(format!("{}-{}", label, std::process::id()));
        // Start from a clean slate in case of a previous crashed run.
        let _ = std::fs::remove_dir_all(&dir);
        TokenStore::new(dir)
    }

    #[test]
    fn test_load_missing_is_none() {
        let store = temp_store("missing");
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let store = temp_store("roundtrip");
        store.save(&SessionToken::new("T1".to_string())).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.token, "T1");
        assert!(loaded.obtained_at > 0);
    }

    #[test]
    fn test_save_replaces_previous_token() {
        let store = temp_store("replace");
        store.save(&SessionToken::new("old".to_string())).unwrap();
        store.save(&SessionToken::new("new".to_string())).unwrap();

        assert_eq!(store.load().unwrap().unwrap().token, "new");
    }

    #[test]
    fn test_clear_removes_token() {
        let store = temp_store("clear");
        store.save(&SessionToken::new("T1".to_string())).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_clear_when_absent_is_ok() {
        let store = temp_store("clear-absent");
        assert!(store.clear().is_ok());
    }

    #[test]
    fn test_uses_fixed_file_name() {
        let store = temp_store("file-name");
        assert_eq!(
            store.path().file_name().and_then(|n| n.to_str()),
            Some(TOKEN_FILE_NAME)
        );
    }
}
