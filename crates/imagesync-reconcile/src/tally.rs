//! Per-run reconciliation counters.

use imagesync_common::constants::PRESENCE_THRESHOLD;

/// Whether an image was found in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Enough matching entries were found.
    Present,
    /// Too few matching entries were found.
    Missing,
}

impl Presence {
    /// Classifies a registry count.
    ///
    /// Counts of 0 and 1 are both missing: a single row can be a stray
    /// entry-count artifact rather than a real match.
    #[must_use]
    pub const fn classify(count: u64) -> Self {
        if count > PRESENCE_THRESHOLD {
            Self::Present
        } else {
            Self::Missing
        }
    }
}

/// Running ok/missing counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    ok: usize,
    missing: usize,
    missing_filters: Vec<String>,
}

impl Tally {
    /// Creates an empty tally.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ok: 0,
            missing: 0,
            missing_filters: Vec::new(),
        }
    }

    /// Records one probed image and returns how it was classified.
    pub fn record(&mut self, count: u64, filter: &str) -> Presence {
        let presence = Presence::classify(count);
        match presence {
            Presence::Present => self.ok += 1,
            Presence::Missing => {
                self.missing += 1;
                self.missing_filters.push(filter.to_string());
            }
        }
        presence
    }

    /// Images found.
    #[must_use]
    pub const fn ok(&self) -> usize {
        self.ok
    }

    /// Images not found.
    #[must_use]
    pub const fn missing(&self) -> usize {
        self.missing
    }

    /// Images probed so far.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.ok + self.missing
    }

    /// Resolved check lists of the missing images, in catalog order.
    #[must_use]
    pub fn missing_filters(&self) -> &[String] {
        &self.missing_filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_one_are_missing() {
        assert_eq!(Presence::classify(0), Presence::Missing);
        assert_eq!(Presence::classify(1), Presence::Missing);
    }

    #[test]
    fn more_than_one_is_present() {
        assert_eq!(Presence::classify(2), Presence::Present);
        assert_eq!(Presence::classify(u64::MAX), Presence::Present);
    }

    #[test]
    fn record_keeps_totals_consistent() {
        let mut tally = Tally::new();
        let counts = [5, 0, 1, 9, 2];
        for (i, count) in counts.iter().enumerate() {
            let _ = tally.record(*count, &format!("Id={i}"));
            assert_eq!(tally.total(), i + 1);
        }
        assert_eq!(tally.ok(), 3);
        assert_eq!(tally.missing(), 2);
        assert_eq!(tally.missing_filters(), &["Id=1".to_string(), "Id=2".to_string()]);
    }
}
