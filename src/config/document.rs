//! Configuration document shape and schema migration
//!
//! The on-disk document is a JSON object with two sections: `default`
//! (the read-only baseline shipped with the program) and `user` (the live
//! configuration the application reads and edits). Both sections carry the
//! same recognized option keys; anything else a user or a newer version
//! added is preserved untouched through flattened side maps.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::constants::{defaults, schema};

/// Baseline configuration shipped with the program. Built once, never
/// mutated; migration borrows it to fill gaps in loaded sections.
pub static BASELINE: LazyLock<Section> = LazyLock::new(|| Section {
    kernel_options: Some(defaults::KERNEL_OPTIONS.to_string()),
    esp_path: Some(defaults::ESP_PATH.to_string()),
    setup_loader: Some(false),
    manage_mode: Some(false),
    force_update: Some(false),
    bootctl: Some(false),
    config_rev: Some(schema::CURRENT_REV.to_string()),
    extra: BTreeMap::new(),
});

/// Outcome of the schema revision check on a loaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionCheck {
    /// The revision marker matches the current revision; trust the file
    Current,
    /// Marker missing, stale, or unreadable; the document needs migration
    StaleOrUnreadable,
}

/// One configuration section: the recognized options plus a side map that
/// carries keys this version does not know about
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Kernel command-line parameters to apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_options: Option<String>,
    /// Path to the EFI system partition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esp_path: Option<String>,
    /// Whether to configure the boot loader entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_loader: Option<bool>,
    /// Whether the tool manages all kernels rather than a single one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_mode: Option<bool>,
    /// Whether to bypass change-detection and always rewrite
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_update: Option<bool>,
    /// Whether to use the external boot-control helper
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootctl: Option<bool>,
    /// Schema revision marker written by migration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_rev: Option<String>,
    /// Unrecognized per-section keys, preserved verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Section {
    /// Check the revision marker. Reads the legacy `config_ver` spelling
    /// (which lands in `extra` since it is not a recognized option); any
    /// missing, mismatched, or non-string value collapses into
    /// [`RevisionCheck::StaleOrUnreadable`] rather than an error.
    pub fn revision_check(&self) -> RevisionCheck {
        match self.extra.get(schema::REVISION_CHECK_KEY) {
            Some(Value::String(rev)) if rev == schema::CURRENT_REV => RevisionCheck::Current,
            _ => RevisionCheck::StaleOrUnreadable,
        }
    }

    /// Copy every baseline option this section is missing, then stamp
    /// `config_rev` with the current revision. Present values are never
    /// overwritten and unrecognized keys are never removed. Returns the
    /// names of the keys that were added.
    pub fn migrate_from(&mut self, baseline: &Section) -> Vec<&'static str> {
        let mut added = Vec::new();
        if self.kernel_options.is_none() {
            self.kernel_options = baseline.kernel_options.clone();
            added.push("kernel_options");
        }
        if self.esp_path.is_none() {
            self.esp_path = baseline.esp_path.clone();
            added.push("esp_path");
        }
        if self.setup_loader.is_none() {
            self.setup_loader = baseline.setup_loader;
            added.push("setup_loader");
        }
        if self.manage_mode.is_none() {
            self.manage_mode = baseline.manage_mode;
            added.push("manage_mode");
        }
        if self.force_update.is_none() {
            self.force_update = baseline.force_update;
            added.push("force_update");
        }
        if self.bootctl.is_none() {
            self.bootctl = baseline.bootctl;
            added.push("bootctl");
        }
        if self.config_rev.is_none() {
            added.push("config_rev");
        }
        self.config_rev = baseline.config_rev.clone();
        for key in &added {
            info!(key = %key, "adding missing key to configuration section");
        }
        added
    }
}

/// The full persisted document. Sections missing from an old file
/// deserialize as empty and are filled in by migration; unrecognized
/// top-level keys ride along in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub default: Section,
    #[serde(default)]
    pub user: Section,
    /// Unrecognized top-level keys, preserved verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ConfigDocument {
    /// Document synthesized when no configuration file exists anywhere:
    /// both sections start as copies of the baseline
    pub fn from_baseline() -> Self {
        Self {
            default: BASELINE.clone(),
            user: BASELINE.clone(),
            extra: BTreeMap::new(),
        }
    }
}
