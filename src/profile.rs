//! # Connection Profiles
//!
//! Profile-based configuration for the research agent service. Profiles
//! live in an INI file (one section per profile) and carry the service
//! address; a missing file or section falls back to the built-in local
//! service so the client works out of the box.
//!
//! ```ini
//! [default]
//! server = http://localhost:5000
//!
//! [staging]
//! server = http://staging.internal:5000
//! ```

use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;

/// Address of the local agent service used when no profile is configured
pub const DEFAULT_SERVER: &str = "http://localhost:5000";

/// Connection settings for the agent service
///
/// The seam between configuration and the HTTP layer: anything that can
/// name a server can drive an [`crate::app::services::AgentService`].
pub trait ServiceProfile {
    /// Base address of the agent service, scheme included
    fn server(&self) -> &str;
}

/// A named profile loaded from the INI store (or the built-in fallback)
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionProfile {
    name: String,
    server: String,
}

impl ConnectionProfile {
    pub fn new(name: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            server: server.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ServiceProfile for ConnectionProfile {
    fn server(&self) -> &str {
        &self.server
    }
}

/// Profile pointing at the built-in local agent service
pub fn default_profile() -> ConnectionProfile {
    ConnectionProfile::new("default", DEFAULT_SERVER)
}

/// INI-backed profile storage
///
/// Reads profiles from a single INI file. The path may contain a leading
/// tilde, which is expanded before loading.
pub struct IniProfileStore {
    path: String,
}

impl IniProfileStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Look up a profile by section name
    ///
    /// Returns `Ok(None)` when the file or the section does not exist. A
    /// section without a `server` entry uses [`DEFAULT_SERVER`].
    pub fn get_profile(&self, name: &str) -> Result<Option<ConnectionProfile>> {
        let expanded = shellexpand::tilde(&self.path).into_owned();
        if !Path::new(&expanded).exists() {
            tracing::debug!("Profile file '{}' not found", expanded);
            return Ok(None);
        }

        let ini = Ini::load_from_file(&expanded)
            .with_context(|| format!("failed to read profile file '{expanded}'"))?;

        let Some(section) = ini.section(Some(name)) else {
            tracing::debug!("Profile section '{}' not found in '{}'", name, expanded);
            return Ok(None);
        };

        let server = section.get("server").unwrap_or(DEFAULT_SERVER);
        Ok(Some(ConnectionProfile::new(name, server)))
    }
}

/// Load a profile by name, falling back to the built-in default
///
/// Used by both the interactive controller and one-shot mode; a broken
/// profile file is an error, an absent one is not.
pub fn load_profile(name: &str, path: &str) -> Result<ConnectionProfile> {
    let store = IniProfileStore::new(path);
    match store.get_profile(name)? {
        Some(profile) => {
            tracing::debug!("Loaded profile '{}' -> {}", name, profile.server());
            Ok(profile)
        }
        None => {
            tracing::debug!("Profile '{}' not configured, using default server", name);
            Ok(default_profile())
        }
    }
}
