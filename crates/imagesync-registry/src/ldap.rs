//! Directory service prober over LDAP.
//!
//! Searches run on an unauthenticated session (no bind request is sent) and
//! ask for no attributes (`1.1`), so each search returns only the matching
//! entries' DNs. The connection is opened on the first lookup and reused
//! for the rest of the run.

use std::time::Duration;

use imagesync_common::error::{ImageSyncError, Result};
use ldap3::{LdapConn, LdapConnSettings, Scope};

use crate::prober::RegistryProber;

/// Attribute list requesting no attribute values.
const NO_ATTRIBUTES: [&str; 1] = ["1.1"];

/// Unauthenticated LDAP session used for the whole run.
pub struct LdapProber {
    endpoint: String,
    timeout: Duration,
    conn: Option<LdapConn>,
}

impl LdapProber {
    /// Creates a prober for `endpoint`. No connection is made yet.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
            conn: None,
        }
    }

    /// Directory endpoint this prober talks to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns `true` once a connection has been opened.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    fn connection(&mut self) -> Result<&mut LdapConn> {
        if self.conn.is_none() {
            tracing::debug!(endpoint = %self.endpoint, timeout = ?self.timeout, "connecting to directory service");
            let settings = LdapConnSettings::new().set_conn_timeout(self.timeout);
            let conn = LdapConn::with_settings(settings, &self.endpoint)
                .map_err(|e| unavailable(&self.endpoint, format!("connection failed: {e}")))?;
            self.conn = Some(conn);
        }
        self.conn
            .as_mut()
            .ok_or_else(|| unavailable(&self.endpoint, "connection unavailable"))
    }

    /// Unbinds and closes the connection, if one was opened.
    ///
    /// # Errors
    ///
    /// Returns `ImageSyncError::RegistryUnavailable` if the unbind fails.
    pub fn close(self) -> Result<()> {
        let Some(mut conn) = self.conn else {
            return Ok(());
        };
        conn.unbind()
            .map_err(|e| unavailable(&self.endpoint, format!("unbind failed: {e}")))
    }
}

impl RegistryProber for LdapProber {
    fn count(&mut self, base_dn: &str, filter: &str) -> Result<u64> {
        let timeout = self.timeout;
        let outcome = self.connection()?.with_timeout(timeout).search(
            base_dn,
            Scope::Subtree,
            filter,
            NO_ATTRIBUTES.to_vec(),
        );
        let result =
            outcome.map_err(|e| unavailable(&self.endpoint, format!("search failed: {e}")))?;
        let (entries, _) = result
            .success()
            .map_err(|e| unavailable(&self.endpoint, format!("search rejected: {e}")))?;
        let count = entries.len() as u64;
        tracing::debug!(base_dn, filter, count, "directory search completed");
        Ok(count)
    }
}

fn unavailable(endpoint: &str, message: impl Into<String>) -> ImageSyncError {
    ImageSyncError::RegistryUnavailable {
        endpoint: endpoint.to_string(),
        message: message.into(),
    }
}
