//! Login session persisted next to the config file.

use crate::errors::{AppError, AppResult};
use crate::models::auth::{AuthUser, LoginResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
    pub created_at: DateTime<Utc>,
    /// Backend the token was issued by.
    pub api_url: String,
}

impl Session {
    pub fn from_login(resp: LoginResponse, api_url: &str) -> Self {
        Self {
            token: resp.token,
            user: resp.user,
            created_at: Utc::now(),
            api_url: api_url.to_string(),
        }
    }

    /// Read the session file. A missing file means "not logged in".
    pub fn load(path: &Path) -> AppResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let session: Session = serde_json::from_str(&content)?;
        Ok(Some(session))
    }

    pub fn require(path: &Path) -> AppResult<Self> {
        Self::load(path)?.ok_or(AppError::NotLoggedIn)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        write_private(path, json.as_bytes())?;
        Ok(())
    }

    /// Delete the session file. Returns false when there was none.
    pub fn clear(path: &Path) -> AppResult<bool> {
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// Token with everything but the last four characters hidden.
    pub fn masked_token(&self) -> String {
        let n = self.token.chars().count();
        if n <= 4 {
            return "****".to_string();
        }
        let tail: String = self.token.chars().skip(n - 4).collect();
        format!("****{tail}")
    }
}

/// The token file is readable by its owner only.
#[cfg(unix)]
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // `mode` only applies on creation
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(bytes)
}

#[cfg(not(unix))]
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    fs::File::create(path)?.write_all(bytes)
}
