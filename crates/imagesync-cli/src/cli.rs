//! Command-line definition and conversion into a [`ProbeConfig`].

use clap::Parser;
use imagesync_common::config::ProbeConfig;
use imagesync_common::constants;

/// check_image_sync — verify that catalog images are published in the site registry.
#[derive(Parser, Debug)]
#[command(name = constants::BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Site identifier substituted into the base DN.
    #[arg(short, long, env = "IMAGESYNC_SITE")]
    pub site: Option<String>,

    /// Directory service URL.
    #[arg(short = 'H', long, env = "IMAGESYNC_LDAP_URL", default_value = constants::DEFAULT_LDAP_URL)]
    pub ldap_url: String,

    /// Image catalog URL.
    #[arg(short = 'u', long, env = "IMAGESYNC_CATALOG_URL", default_value = constants::DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    /// Base DN template; `#site-name#` is replaced by the site identifier.
    #[arg(short, long, env = "IMAGESYNC_BASE_DN", default_value = constants::DEFAULT_BASE_DN)]
    pub base_dn: String,

    /// Object class required on matching registry entries.
    #[arg(short, long, env = "IMAGESYNC_OBJECT_CLASS", default_value = constants::DEFAULT_OBJECT_CLASS)]
    pub object_class: String,

    /// Comma-separated check list with `#attribute#` tokens.
    #[arg(short, long, env = "IMAGESYNC_CHECK_LIST", default_value = constants::DEFAULT_CHECK_LIST)]
    pub check_list: String,

    /// Field separator inside a catalog entry.
    #[arg(long, env = "IMAGESYNC_SEPARATOR", default_value_t = constants::DEFAULT_FIELD_SEPARATOR)]
    pub separator: char,

    /// Timeout in seconds for each upstream request.
    #[arg(short, long, env = "IMAGESYNC_TIMEOUT", default_value_t = constants::DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Print debug diagnostics on stderr.
    #[arg(short, long)]
    pub debug: bool,

    /// Print the verdict as a JSON object.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Builds the run configuration. A missing site becomes an empty one,
    /// which validation rejects.
    #[must_use]
    pub fn to_config(&self) -> ProbeConfig {
        ProbeConfig {
            site: self.site.clone().unwrap_or_default(),
            ldap_url: self.ldap_url.clone(),
            catalog_url: self.catalog_url.clone(),
            base_dn_template: self.base_dn.clone(),
            object_class: self.object_class.clone(),
            check_list: self.check_list.clone(),
            field_separator: self.separator,
            timeout_secs: self.timeout,
            debug: self.debug,
        }
    }
}
