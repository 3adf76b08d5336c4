//! Registry lookup abstraction.

use imagesync_common::error::Result;

/// Counts directory entries matching a filter.
///
/// Implementors only report the count; deciding whether an image is
/// present is left to the reconciler.
pub trait RegistryProber {
    /// Returns how many entries under `base_dn` match `filter`.
    ///
    /// # Errors
    ///
    /// Returns `ImageSyncError::RegistryUnavailable` on any transport or
    /// protocol failure.
    fn count(&mut self, base_dn: &str, filter: &str) -> Result<u64>;
}

impl<F> RegistryProber for F
where
    F: FnMut(&str, &str) -> Result<u64>,
{
    fn count(&mut self, base_dn: &str, filter: &str) -> Result<u64> {
        self(base_dn, filter)
    }
}
