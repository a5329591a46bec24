//! Resolution, loading, and persistence of the configuration document
//!
//! Load order: the primary path wins, an existing legacy file is used only
//! when the primary is absent, and an empty system synthesizes the document
//! from the built-in baseline. A file that exists but does not parse is a
//! fatal error; a stale or unreadable revision marker only triggers
//! migration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::document::{BASELINE, ConfigDocument, RevisionCheck};
use crate::constants::paths;

/// Owns the resolved in-memory configuration for the process lifetime.
/// Mutations happen in place through [`ConfigStore::document_mut`]; nothing
/// touches disk again until an explicit save. Concurrent processes are not
/// coordinated: last writer wins.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    document: ConfigDocument,
}

impl ConfigStore {
    /// Open the store at the system default location
    pub fn new() -> Result<Self> {
        Self::at_path(paths::CONFIG_FILE)
    }

    /// Open the store at a caller-chosen primary path
    pub fn at_path(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_paths(path.into(), PathBuf::from(paths::LEGACY_CONFIG_FILE))
    }

    fn with_paths(path: PathBuf, legacy_path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory {}", parent.display())
            })?;
        }
        let document = Self::resolve(&path, &legacy_path)?;
        Ok(Self { path, document })
    }

    fn resolve(path: &Path, legacy_path: &Path) -> Result<ConfigDocument> {
        info!("looking for configuration");

        if path.exists() {
            debug!(path = %path.display(), "checking primary path");
            let mut document = Self::read_document(path)?;
            Self::check_and_migrate(&mut document);
            Ok(document)
        } else if legacy_path.exists() {
            debug!(path = %legacy_path.display(), "checking legacy fallback");
            let mut document = Self::read_document(legacy_path)?;
            Self::check_and_migrate(&mut document);
            Ok(document)
        } else {
            info!("no configuration file found, loading defaults");
            Ok(ConfigDocument::from_baseline())
        }
    }

    /// A file that exists but does not deserialize is operator-visible data
    /// loss and aborts the load.
    fn read_document(path: &Path) -> Result<ConfigDocument> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("malformed configuration file {}", path.display()))
    }

    /// Best-effort revision check: anything other than a current marker in
    /// the `default` section downgrades to a migration of both sections,
    /// never to an error.
    fn check_and_migrate(document: &mut ConfigDocument) {
        match document.default.revision_check() {
            RevisionCheck::Current => {
                debug!("configuration is at the current revision");
            }
            RevisionCheck::StaleOrUnreadable => {
                warn!("found outdated configuration, updating to the latest revision");
                document.default.migrate_from(&BASELINE);
                document.user.migrate_from(&BASELINE);
            }
        }
    }

    /// Persist to the configured primary path
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.path)
    }

    /// Serialize the whole in-memory document to `path`, replacing any
    /// existing content
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), "saving configuration");
        fs::write(path, self.render()?)
            .with_context(|| format!("failed to write configuration to {}", path.display()))?;
        info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Pretty-printed JSON of the current in-memory document, for
    /// diagnostics and inspection; no side effects
    pub fn render(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.document).context("failed to serialize configuration")
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut ConfigDocument {
        &mut self.document
    }

    /// Primary path this store resolves against and saves to
    pub fn path(&self) -> &Path {
        &self.path
    }
}
