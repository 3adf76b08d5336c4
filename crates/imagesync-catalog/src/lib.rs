//! # imagesync-catalog
//!
//! Authoritative image catalog handling.
//!
//! Handles:
//! - **Fetch**: HTTP(S) retrieval of the raw image list.
//! - **Parser**: Single forward scan of the list into ordered image records.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod fetch;
pub mod parser;
