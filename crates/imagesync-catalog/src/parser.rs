//! Streaming parser for the image list format.
//!
//! The list is cut into chunks at every `,` and `{`. Inside a chunk, fields
//! are split on the configured separator: field 1 holds an attribute name and
//! field 3 its value. A chunk naming `hv:image` opens a record, and the next
//! chunk containing `}` closes it.

use imagesync_common::constants::IMAGE_MARKER;
use imagesync_common::types::ImageRecord;

const CHUNK_DELIMITERS: [char; 2] = [',', '{'];

/// Scanner state between two chunks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Outside any image record.
    #[default]
    Idle,
    /// Collecting the attributes of the current image.
    Accumulating(ImageRecord),
}

/// Advances the scanner by one chunk.
///
/// Returns the next state and, when the chunk closes a non-empty record,
/// that record.
#[must_use]
pub fn step(state: ScanState, chunk: &str, separator: char) -> (ScanState, Option<ImageRecord>) {
    let mut fields = chunk.split(separator);
    let name = fields.nth(1).unwrap_or_default();
    let value = fields.nth(1).unwrap_or_default();

    let state = if name == IMAGE_MARKER {
        ScanState::Accumulating(ImageRecord::new())
    } else {
        match state {
            ScanState::Accumulating(mut record) => {
                if !name.trim().is_empty() && !value.trim().is_empty() {
                    record.insert(name, value);
                }
                ScanState::Accumulating(record)
            }
            ScanState::Idle => ScanState::Idle,
        }
    };

    match state {
        ScanState::Accumulating(record) if chunk.contains('}') => {
            let emitted = (!record.is_empty()).then_some(record);
            (ScanState::Idle, emitted)
        }
        other => (other, None),
    }
}

/// Lazy, single-pass sequence of image records over catalog text.
pub struct CatalogRecords<'a> {
    chunks: std::str::Split<'a, [char; 2]>,
    state: ScanState,
    separator: char,
}

impl Iterator for CatalogRecords<'_> {
    type Item = ImageRecord;

    fn next(&mut self) -> Option<Self::Item> {
        for chunk in self.chunks.by_ref() {
            let (state, emitted) = step(std::mem::take(&mut self.state), chunk, self.separator);
            self.state = state;
            if let Some(record) = emitted {
                tracing::debug!(%record, "parsed catalog image");
                return Some(record);
            }
        }
        None
    }
}

/// Scans catalog text into image records.
///
/// Malformed or empty input yields no record; callers decide whether that
/// is an error.
#[must_use]
pub fn parse_catalog(text: &str, separator: char) -> CatalogRecords<'_> {
    CatalogRecords {
        chunks: text.split(CHUNK_DELIMITERS),
        state: ScanState::Idle,
        separator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_IMAGES: &str = r#"{"hv:imagelist": {"dc:title": "Fedcloud list", "hv:images": [
        {"hv:image": {"dc:identifier": "img-1", "ad:mpuri": "https://mp/1:1", "hv:version": "1.0"}},
        {"hv:image": {"dc:identifier": "img-2", "ad:mpuri": "https://mp/2:3", "hv:version": "2.3"}}
    ]}}"#;

    #[test]
    fn parses_each_marked_image() {
        let records: Vec<_> = parse_catalog(TWO_IMAGES, '"').collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("dc:identifier"), Some("img-1"));
        assert_eq!(records[0].get("hv:version"), Some("1.0"));
        assert_eq!(records[1].get("ad:mpuri"), Some("https://mp/2:3"));
    }

    #[test]
    fn attributes_outside_records_are_ignored() {
        let records: Vec<_> = parse_catalog(TWO_IMAGES, '"').collect();
        assert!(records.iter().all(|r| r.get("dc:title").is_none()));
    }

    #[test]
    fn record_keeps_source_order() {
        let records: Vec<_> = parse_catalog(TWO_IMAGES, '"').collect();
        let keys: Vec<&str> = records[0].iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["dc:identifier", "ad:mpuri", "hv:version"]);
    }

    #[test]
    fn blank_names_and_values_are_dropped() {
        let text = r#"{"hv:image": {"dc:identifier": "img-1", "dc:description": "", "": "orphan", "hv:size": "  "}}"#;
        let records: Vec<_> = parse_catalog(text, '"').collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0].get("dc:identifier"), Some("img-1"));
    }

    #[test]
    fn marker_resets_an_unclosed_record() {
        let text = r#"{"hv:image": {"dc:identifier": "lost", "hv:image": {"dc:identifier": "kept"}}"#;
        let records: Vec<_> = parse_catalog(text, '"').collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("dc:identifier"), Some("kept"));
    }

    #[test]
    fn record_without_attributes_is_not_emitted() {
        let text = r#"{"hv:image": {}}, {"hv:image": {"dc:identifier": "img-1"}}"#;
        let records: Vec<_> = parse_catalog(text, '"').collect();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn empty_and_garbage_input_yield_nothing() {
        assert_eq!(parse_catalog("", '"').count(), 0);
        assert_eq!(parse_catalog("<html>503 Service Unavailable</html>", '"').count(), 0);
    }

    #[test]
    fn custom_separator_is_honored() {
        let text = "{'hv:image': {'dc:identifier': 'img-9'}}";
        let records: Vec<_> = parse_catalog(text, '\'').collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("dc:identifier"), Some("img-9"));
    }

    #[test]
    fn step_is_idle_until_marker() {
        let (state, emitted) = step(ScanState::Idle, r#""dc:identifier": "x"}"#, '"');
        assert_eq!(state, ScanState::Idle);
        assert!(emitted.is_none());

        let (state, _) = step(state, r#""hv:image": "#, '"');
        assert_eq!(state, ScanState::Accumulating(ImageRecord::new()));
    }

    #[test]
    fn step_emits_on_closing_brace() {
        let state = ScanState::Accumulating([("dc:identifier", "a")].into_iter().collect());
        let (state, emitted) = step(state, r#" "hv:version": "1"}"#, '"');
        assert_eq!(state, ScanState::Idle);
        let record = emitted.expect("record should close");
        assert_eq!(record.get("hv:version"), Some("1"));
    }
}
