//! Persisted session for the CLI.
//!
//! The backend issues an opaque token on login/registration; it is the only
//! client-side state worth keeping between invocations. The token is stored
//! as-is in a TOML file under the user's config directory (0600 on Unix) and
//! is never inspected or validated locally; trust decisions belong to the
//! backend.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Session issued by the backend on login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer token.
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Session {
    /// Best label for the signed-in account.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("account")
    }
}

/// File-backed store for the current session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Default location: `<config_dir>/questiongen/session.toml`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("questiongen").join("session.toml")
        } else if let Some(home_dir) = dirs::home_dir() {
            home_dir
                .join(".config")
                .join("questiongen")
                .join("session.toml")
        } else {
            PathBuf::from(".questiongen").join("session.toml")
        }
    }

    #[must_use]
    pub fn new() -> Self {
        Self::with_path(Self::default_path())
    }

    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the stored session, if any.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file at {}", self.path.display()))?;
        let session = toml::from_str(&contents)
            .with_context(|| format!("Corrupted session file at {}", self.path.display()))?;

        Ok(Some(session))
    }

    /// Persist a session, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create session directory {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(session)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write session file at {}", self.path.display()))?;

        // Token file: owner read/write only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).with_context(
                || format!("Failed to set permissions on {}", self.path.display()),
            )?;
        }

        Ok(())
    }

    /// Remove the stored session. Missing file is not an error.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).with_context(|| {
                format!("Failed to remove session file at {}", self.path.display())
            })?;
        }
        Ok(())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn temp_store() -> SessionStore {
        let unique = format!(
            "questiongen-test-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::SeqCst)
        );
        SessionStore::with_path(std::env::temp_dir().join(unique).join("session.toml"))
    }

    fn sample_session() -> Session {
        Session {
            token: "opaque-token".to_string(),
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
        }
    }

    #[test]
    fn load_returns_none_when_no_file_exists() -> Result<()> {
        let store = temp_store();
        assert_eq!(store.load()?, None);
        Ok(())
    }

    #[test]
    fn save_then_load_round_trips() -> Result<()> {
        let store = temp_store();
        let session = sample_session();

        store.save(&session)?;
        assert_eq!(store.load()?, Some(session));

        store.clear()?;
        Ok(())
    }

    #[test]
    fn clear_removes_the_session() -> Result<()> {
        let store = temp_store();
        store.save(&sample_session())?;

        store.clear()?;
        assert_eq!(store.load()?, None);

        // Clearing twice stays quiet.
        store.clear()?;
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_owner_only() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let store = temp_store();
        store.save(&sample_session())?;

        let mode = fs::metadata(
            store.path.as_path(),
        )?
        .permissions()
        .mode();
        assert_eq!(mode & 0o777, 0o600);

        store.clear()?;
        Ok(())
    }

    #[test]
    fn display_name_prefers_name_then_email() {
        let mut session = sample_session();
        assert_eq!(session.display_name(), "Ada");

        session.name = None;
        assert_eq!(session.display_name(), "ada@example.com");

        session.email = None;
        assert_eq!(session.display_name(), "account");
    }
}
