//! Check-list template parsing and substitution using `nom`.
//!
//! A template is a sequence of literal text and `#key#` tokens. Resolution
//! walks the template's own segments in order, so the output never depends
//! on the order of attributes in the record.

use imagesync_common::constants::TOKEN_DELIMITER;
use imagesync_common::types::ImageRecord;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::char,
    combinator::map,
    multi::many0,
    sequence::delimited,
};

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied unchanged.
    Literal(String),
    /// Attribute name between two delimiters.
    Token(String),
}

const fn is_plain(c: char) -> bool {
    c != TOKEN_DELIMITER
}

/// Characters allowed in a token key. A key never spans a clause, so
/// separators, assignments, parentheses, and whitespace end it.
fn is_key_char(c: char) -> bool {
    !matches!(c, TOKEN_DELIMITER | ',' | '=' | '(' | ')') && !c.is_whitespace()
}

fn token(input: &str) -> IResult<&str, Segment> {
    map(
        delimited(char(TOKEN_DELIMITER), take_while1(is_key_char), char(TOKEN_DELIMITER)),
        |key: &str| Segment::Token(key.to_string()),
    )
    .parse(input)
}

fn literal(input: &str) -> IResult<&str, Segment> {
    map(take_while1(is_plain), |text: &str| Segment::Literal(text.to_string())).parse(input)
}

/// A delimiter that does not open a token is kept as text.
fn stray_delimiter(input: &str) -> IResult<&str, Segment> {
    map(char(TOKEN_DELIMITER), |c: char| Segment::Literal(c.to_string())).parse(input)
}

fn segments(input: &str) -> IResult<&str, Vec<Segment>> {
    many0(alt((token, literal, stray_delimiter))).parse(input)
}

/// Parsed check-list template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTemplate {
    segments: Vec<Segment>,
}

impl FilterTemplate {
    /// Parses a template. Every input is accepted.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let (rest, mut parsed) = segments(template).unwrap_or((template, Vec::new()));
        if !rest.is_empty() {
            parsed.push(Segment::Literal(rest.to_string()));
        }
        Self { segments: parsed }
    }

    /// Parsed segments, in template order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Substitutes record attributes into the template.
    ///
    /// Tokens whose key is absent from the record are kept verbatim and
    /// reported in [`Resolution::unresolved`].
    #[must_use]
    pub fn resolve(&self, record: &ImageRecord) -> Resolution {
        let mut filter = String::new();
        let mut unresolved = Vec::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => filter.push_str(text),
                Segment::Token(key) => match record.get(key) {
                    Some(value) => filter.push_str(value),
                    None => {
                        filter.push(TOKEN_DELIMITER);
                        filter.push_str(key);
                        filter.push(TOKEN_DELIMITER);
                        unresolved.push(key.clone());
                    }
                },
            }
        }
        Resolution {
            filter: ResolvedFilter(filter),
            unresolved,
        }
    }
}

/// Check list with one record's attributes substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFilter(String);

impl ResolvedFilter {
    /// Returns the resolved text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Comma-separated sub-clauses, trimmed, blanks skipped.
    pub fn clauses(&self) -> impl Iterator<Item = &str> {
        self.0.split(',').map(str::trim).filter(|c| !c.is_empty())
    }
}

impl std::fmt::Display for ResolvedFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Output of [`FilterTemplate::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Substituted check list.
    pub filter: ResolvedFilter,
    /// Keys the record did not provide, in template order.
    pub unresolved: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ImageRecord {
        [
            ("hv:version", "2.1"),
            ("ad:mpuri", "https://mp/img:42"),
            ("dc:identifier", "abc"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn parse_splits_literals_and_tokens() {
        let template = FilterTemplate::parse("Repo=#ad:mpuri#,Version=#hv:version#");
        assert_eq!(
            template.segments(),
            &[
                Segment::Literal("Repo=".into()),
                Segment::Token("ad:mpuri".into()),
                Segment::Literal(",Version=".into()),
                Segment::Token("hv:version".into()),
            ]
        );
    }

    #[test]
    fn parse_keeps_stray_delimiters_as_text() {
        let template = FilterTemplate::parse("name=a#b,tag=#");
        let resolved = template.resolve(&ImageRecord::new());
        assert_eq!(resolved.filter.as_str(), "name=a#b,tag=#");
        assert!(resolved.unresolved.is_empty());
    }

    #[test]
    fn stray_delimiter_does_not_swallow_next_token() {
        let template = FilterTemplate::parse("Name=a#b,Version=#hv:version#");
        assert_eq!(
            template.segments(),
            &[
                Segment::Literal("Name=a".into()),
                Segment::Literal("#".into()),
                Segment::Literal("b,Version=".into()),
                Segment::Token("hv:version".into()),
            ]
        );
        let record: ImageRecord = [("hv:version", "2.1")].into_iter().collect();
        let resolved = template.resolve(&record);
        assert_eq!(resolved.filter.as_str(), "Name=a#b,Version=2.1");
        assert!(resolved.unresolved.is_empty());
    }

    #[test]
    fn token_keys_stop_at_whitespace_and_parentheses() {
        let template = FilterTemplate::parse("A=#a b#,B=#(x)#");
        let resolved = template.resolve(&[("a b", "1"), ("(x)", "2")].into_iter().collect());
        assert_eq!(resolved.filter.as_str(), "A=#a b#,B=#(x)#");
        assert!(resolved.unresolved.is_empty());
    }

    #[test]
    fn resolve_substitutes_in_template_order() {
        let template = FilterTemplate::parse("Repo=#ad:mpuri#,Version=#hv:version#");
        let resolved = template.resolve(&record());
        assert_eq!(resolved.filter.as_str(), "Repo=https://mp/img:42,Version=2.1");
        assert!(resolved.unresolved.is_empty());
    }

    #[test]
    fn resolve_leaves_unknown_tokens_literal() {
        let template = FilterTemplate::parse("Name=#dc:title#,Id=#dc:identifier#");
        let resolved = template.resolve(&record());
        assert_eq!(resolved.filter.as_str(), "Name=#dc:title#,Id=abc");
        assert_eq!(resolved.unresolved, vec!["dc:title".to_string()]);
    }

    #[test]
    fn resolve_is_repeatable() {
        let template = FilterTemplate::parse("Repo=#ad:mpuri#");
        assert_eq!(template.resolve(&record()), template.resolve(&record()));
    }

    #[test]
    fn resolve_ignores_record_order() {
        let template = FilterTemplate::parse("V=#hv:version#,U=#ad:mpuri#");
        let reversed: ImageRecord = [("ad:mpuri", "https://mp/img:42"), ("hv:version", "2.1")]
            .into_iter()
            .collect();
        assert_eq!(template.resolve(&record()), template.resolve(&reversed));
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let template = FilterTemplate::parse("A=#a#,B=#b#");
        let tricky: ImageRecord = [("a", "#b#"), ("b", "x")].into_iter().collect();
        assert_eq!(template.resolve(&tricky).filter.as_str(), "A=#b#,B=x");
    }

    #[test]
    fn clauses_are_trimmed_and_skip_blanks() {
        let template = FilterTemplate::parse("a=1, b=2,,");
        let resolved = template.resolve(&ImageRecord::new());
        let clauses: Vec<&str> = resolved.filter.clauses().collect();
        assert_eq!(clauses, vec!["a=1", "b=2"]);
    }
}
