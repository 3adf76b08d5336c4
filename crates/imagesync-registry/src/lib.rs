//! # imagesync-registry
//!
//! Everything between an image record and the directory service.
//!
//! Handles:
//! - **Template**: `#key#` substitution of record attributes into the check list.
//! - **Filter**: Compound directory filter built from a resolved check list.
//! - **Prober**: Entry-count lookups behind the [`prober::RegistryProber`] trait.
//! - **LDAP**: The [`ldap::LdapProber`] implementation over `ldap3`.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod filter;
pub mod ldap;
pub mod prober;
pub mod template;
