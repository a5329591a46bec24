//! Application-wide constants
//!
//! Well-known filesystem locations, the schema revision, and the baseline
//! option values, providing a single source of truth for values shared
//! across the crate.

/// Filesystem locations consumed by the configuration store
pub mod paths {
    /// Primary configuration file
    pub const CONFIG_FILE: &str = "/etc/kernelstub/configuration";

    /// Configuration file from older installation layouts, consulted only
    /// when the primary path is absent and never written back
    pub const LEGACY_CONFIG_FILE: &str = "/etc/default/kernelstub";
}

/// Schema versioning constants
pub mod schema {
    /// Revision stamped into `config_rev` by migration and the baseline
    pub const CURRENT_REV: &str = "1";

    /// Key inspected by the revision check. Old installations spelled the
    /// marker `config_ver` while migration writes `config_rev`; the mismatch
    /// means any file that lacks the old spelling is treated as stale.
    pub const REVISION_CHECK_KEY: &str = "config_ver";
}

/// Baseline option values shipped with the program
pub mod defaults {
    /// Kernel command-line parameters
    pub const KERNEL_OPTIONS: &str = "quiet splash";

    /// Mount point of the EFI system partition
    pub const ESP_PATH: &str = "/boot/efi";
}
