//! Unified error type for the imagesync workspace.
//!
//! Every variant maps onto one reporting severity so the driver can turn the
//! first failure of a run into a verdict line and an exit status.

use thiserror::Error;

use crate::types::Severity;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ImageSyncError {
    /// A configuration value is missing or invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// The catalog could not be fetched, or yielded no image records.
    #[error("image list server down or empty list ({message})")]
    CatalogUnavailable {
        /// Catalog URL that was queried.
        url: String,
        /// Description of the failure.
        message: String,
    },

    /// The directory service could not be reached or rejected a query.
    #[error("LDAP server down ({message})")]
    RegistryUnavailable {
        /// Directory endpoint that was queried.
        endpoint: String,
        /// Description of the failure.
        message: String,
    },
}

impl ImageSyncError {
    /// Returns the reporting severity for this failure.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Config { .. } => Severity::Unknown,
            Self::CatalogUnavailable { .. } | Self::RegistryUnavailable { .. } => {
                Severity::Warning
            }
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ImageSyncError>;
