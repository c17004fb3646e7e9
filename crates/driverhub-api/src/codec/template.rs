//! Path templates such as `/session/:sessionId/element/:id`.

use std::borrow::Cow;
use std::fmt;

use crate::error::DecodeError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Capture(String),
}

/// A parsed route template.
///
/// Segments starting with `:` capture the corresponding request path segment
/// under that name; every other segment must match literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl UriTemplate {
    pub fn parse(template: &str) -> Self {
        let segments = split_path(template)
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Capture(name.to_string()),
                None => Segment::Literal(segment.to_string()),
            })
            .collect();
        Self {
            raw: template.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the template captures a segment called `name`.
    pub fn captures(&self, name: &str) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Capture(capture) if capture == name))
    }

    /// Matches already-decoded path segments, returning the captures in
    /// template order.
    pub fn matches(&self, path: &[Cow<'_, str>]) -> Option<Vec<(&str, String)>> {
        if path.len() != self.segments.len() {
            return None;
        }
        let mut captures = Vec::new();
        for (segment, actual) in self.segments.iter().zip(path) {
            match segment {
                Segment::Literal(literal) if literal == actual => {}
                Segment::Literal(_) => return None,
                Segment::Capture(_) if actual.is_empty() => return None,
                Segment::Capture(name) => captures.push((name.as_str(), actual.to_string())),
            }
        }
        Some(captures)
    }
}

impl fmt::Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    (!path.is_empty())
        .then(|| path.split('/'))
        .into_iter()
        .flatten()
}

/// Splits a request path into percent-decoded segments.
///
/// One leading and one trailing slash are ignored. Interior empty segments
/// are kept, so `/session//title` matches neither a literal nor a capture.
pub fn decode_path(path: &str) -> Result<Vec<Cow<'_, str>>, DecodeError> {
    split_path(path)
        .map(|segment| {
            urlencoding::decode(segment).map_err(|_| DecodeError::InvalidPath(segment.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(path: &str) -> Vec<Cow<'_, str>> {
        decode_path(path).unwrap()
    }

    #[test]
    fn test_literal_match() {
        let template = UriTemplate::parse("/status");
        assert_eq!(template.matches(&decoded("/status")), Some(vec![]));
        assert_eq!(template.matches(&decoded("/status/")), Some(vec![]));
        assert!(template.matches(&decoded("/state")).is_none());
    }

    #[test]
    fn test_captures() {
        let template = UriTemplate::parse("/session/:sessionId/element/:id/text");
        let captures = template
            .matches(&decoded("/session/abc/element/e%2F1/text"))
            .unwrap();
        assert_eq!(
            captures,
            vec![("sessionId", "abc".to_string()), ("id", "e/1".to_string())]
        );
        assert!(template.captures("sessionId"));
        assert!(!template.captures("name"));
    }

    #[test]
    fn test_segment_count_must_match() {
        let template = UriTemplate::parse("/session/:sessionId");
        assert!(template.matches(&decoded("/session")).is_none());
        assert!(template.matches(&decoded("/session/a/url")).is_none());
    }

    #[test]
    fn test_empty_segment_does_not_match() {
        assert_eq!(decoded("/session//title"), vec!["session", "", "title"]);
        let template = UriTemplate::parse("/session/:sessionId/title");
        assert!(template.matches(&decoded("/session//title")).is_none());
        assert!(UriTemplate::parse("/session/:sessionId").matches(&decoded("/session//")).is_none());
    }

    #[test]
    fn test_root_path() {
        let template = UriTemplate::parse("/");
        assert_eq!(template.matches(&decoded("/")), Some(vec![]));
    }

    #[test]
    fn test_invalid_percent_encoding() {
        assert!(matches!(
            decode_path("/session/%FF%FE"),
            Err(DecodeError::InvalidPath(_))
        ));
    }
}
