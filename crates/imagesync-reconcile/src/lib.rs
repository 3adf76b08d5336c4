//! # imagesync-reconcile
//!
//! Turns catalog records and registry counts into a health verdict.
//!
//! Handles:
//! - **Tally**: Running ok/missing counters and the unmatched filters.
//! - **Verdict**: The ok/critical ladder and failure reporting.
//! - **Check**: One full run from catalog text to verdict, failing fast.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod check;
pub mod tally;
pub mod verdict;
