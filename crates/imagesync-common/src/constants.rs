//! Probe-wide constants and configuration defaults.

/// Tag prefixed to every verdict line printed on stdout.
pub const STATUS_TAG: &str = "IMAGE_SYNC";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "check_image_sync";

/// Placeholder in the base-DN template replaced by the site identifier.
pub const SITE_PLACEHOLDER: &str = "#site-name#";

/// Delimiter surrounding attribute names in the check-list template.
pub const TOKEN_DELIMITER: char = '#';

/// Field name that opens a new image record in the catalog.
pub const IMAGE_MARKER: &str = "hv:image";

/// Default field separator inside a catalog chunk.
pub const DEFAULT_FIELD_SEPARATOR: char = '"';

/// Default directory service endpoint (top-level BDII).
pub const DEFAULT_LDAP_URL: &str = "ldap://topbdii.egi.eu:2170";

/// Default catalog URL (HEPiX-style image list).
pub const DEFAULT_CATALOG_URL: &str =
    "https://appdb.egi.eu/store/vm/image/list/image.list";

/// Default base DN template, scoped to one site.
pub const DEFAULT_BASE_DN: &str =
    "GLUE2GroupID=cloud,GLUE2DomainID=#site-name#,GLUE2GroupID=grid,o=glue";

/// Default object class every registry entry must carry.
pub const DEFAULT_OBJECT_CLASS: &str = "GLUE2ApplicationEnvironment";

/// Default comma-separated check-list template.
pub const DEFAULT_CHECK_LIST: &str =
    "GLUE2ApplicationEnvironmentRepository=#ad:mpuri#,GLUE2ApplicationEnvironmentAppVersion=#hv:version#";

/// Default timeout, in seconds, for each upstream request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A registry count must exceed this value for an image to be present.
pub const PRESENCE_THRESHOLD: u64 = 1;
