//! Immutable probe configuration, built once at startup.

use std::time::Duration;

use crate::constants;
use crate::error::{ImageSyncError, Result};

/// Settings for one probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Site identifier substituted into the base DN.
    pub site: String,
    /// Directory service URL.
    pub ldap_url: String,
    /// Catalog URL.
    pub catalog_url: String,
    /// Base DN template containing the site placeholder.
    pub base_dn_template: String,
    /// Object class required on every matching registry entry.
    pub object_class: String,
    /// Comma-separated check-list template with `#key#` tokens.
    pub check_list: String,
    /// Separator between fields inside a catalog chunk.
    pub field_separator: char,
    /// Timeout in seconds for each upstream request.
    pub timeout_secs: u64,
    /// Whether debug diagnostics are enabled.
    pub debug: bool,
}

impl ProbeConfig {
    /// Creates a configuration for `site` with every other value defaulted.
    #[must_use]
    pub fn new(site: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            ldap_url: constants::DEFAULT_LDAP_URL.to_string(),
            catalog_url: constants::DEFAULT_CATALOG_URL.to_string(),
            base_dn_template: constants::DEFAULT_BASE_DN.to_string(),
            object_class: constants::DEFAULT_OBJECT_CLASS.to_string(),
            check_list: constants::DEFAULT_CHECK_LIST.to_string(),
            field_separator: constants::DEFAULT_FIELD_SEPARATOR,
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            debug: false,
        }
    }

    /// Checks that the configuration can drive a run.
    ///
    /// # Errors
    ///
    /// Returns `ImageSyncError::Config` on the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.site.trim().is_empty() {
            return Err(config_err("site identifier is required"));
        }
        if self.check_list.trim().is_empty() {
            return Err(config_err("check list template is empty"));
        }
        if self.object_class.trim().is_empty() {
            return Err(config_err("object class is empty"));
        }
        if !self.base_dn_template.contains(constants::SITE_PLACEHOLDER) {
            return Err(config_err(format!(
                "base DN template lacks the {} placeholder: {}",
                constants::SITE_PLACEHOLDER,
                self.base_dn_template
            )));
        }
        if self.timeout_secs == 0 {
            return Err(config_err("timeout must be at least one second"));
        }
        Ok(())
    }

    /// Base DN with the site placeholder resolved.
    #[must_use]
    pub fn base_dn(&self) -> String {
        self.base_dn_template
            .replace(constants::SITE_PLACEHOLDER, &self.site)
    }

    /// Upstream request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn config_err(message: impl Into<String>) -> ImageSyncError {
    ImageSyncError::Config {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_defaults() {
        let config = ProbeConfig::new("IN2P3-IRES");
        assert_eq!(config.ldap_url, constants::DEFAULT_LDAP_URL);
        assert_eq!(config.field_separator, '"');
        assert!(!config.debug);
        config.validate().expect("defaults should validate");
    }

    #[test]
    fn base_dn_resolves_site() {
        let config = ProbeConfig::new("CESNET-MetaCloud");
        assert_eq!(
            config.base_dn(),
            "GLUE2GroupID=cloud,GLUE2DomainID=CESNET-MetaCloud,GLUE2GroupID=grid,o=glue"
        );
    }

    #[test]
    fn validate_rejects_blank_site() {
        let config = ProbeConfig::new("  ");
        assert!(matches!(
            config.validate(),
            Err(ImageSyncError::Config { .. })
        ));
    }

    #[test]
    fn validate_rejects_base_dn_without_placeholder() {
        let mut config = ProbeConfig::new("site");
        config.base_dn_template = "o=glue".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = ProbeConfig::new("site");
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_check_list() {
        let mut config = ProbeConfig::new("site");
        config.check_list = String::new();
        assert!(config.validate().is_err());
    }
}
