//! Domain types for termdeck.

use serde::{Deserialize, Serialize};

// ============================================================================
// DECK
// ============================================================================

/// A complete presentation: a fixed, ordered sequence of slides.
///
/// Immutable once loaded; vector order is presentation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Optional deck-level title, shown in the header bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Slides in presentation order. Never empty after validation.
    pub slides: Vec<Slide>,
}

/// One unit of presentation content: a title plus a body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// The title, revealed character by character on entry.
    pub title: String,
    /// Body content, shown below the title.
    #[serde(default)]
    pub body: SlideBody,
}

/// Slide body: styled lines, or an opaque preformatted block rendered verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlideBody {
    /// A raw text block, displayed as-is in a single style.
    Preformatted(String),
    /// Individually styled lines.
    Lines(Vec<ContentLine>),
}

impl Default for SlideBody {
    fn default() -> Self {
        SlideBody::Lines(Vec::new())
    }
}

impl SlideBody {
    /// Number of display rows the body occupies.
    pub fn rows(&self) -> usize {
        match self {
            SlideBody::Lines(lines) => lines.len(),
            SlideBody::Preformatted(text) => text.lines().count(),
        }
    }

    pub fn is_preformatted(&self) -> bool {
        matches!(self, SlideBody::Preformatted(_))
    }
}

/// One body line with its style tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentLine {
    pub text: String,
    #[serde(default, skip_serializing_if = "LineStyle::is_body")]
    pub style: LineStyle,
}

impl ContentLine {
    /// A plain body line.
    pub fn plain(text: impl Into<String>) -> Self {
        ContentLine {
            text: text.into(),
            style: LineStyle::Body,
        }
    }

    pub fn styled(text: impl Into<String>, style: LineStyle) -> Self {
        ContentLine {
            text: text.into(),
            style,
        }
    }
}

/// In deck files a bare string is shorthand for a `body`-styled line.
impl<'de> Deserialize<'de> for ContentLine {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Plain(String),
            Tagged {
                text: String,
                #[serde(default)]
                style: LineStyle,
            },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Plain(text) => ContentLine {
                text,
                style: LineStyle::Body,
            },
            Repr::Tagged { text, style } => ContentLine { text, style },
        })
    }
}

/// Style tag for a body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Regular text.
    #[default]
    Body,
    /// Section heading within a slide.
    Heading,
    /// Highlighted text.
    Emphasis,
    /// Bulleted list item (rendered with a leading marker).
    Bullet,
    /// Quotation (rendered with a leading bar).
    Quote,
    /// De-emphasized text.
    Dim,
}

impl LineStyle {
    fn is_body(&self) -> bool {
        *self == LineStyle::Body
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Resolved presentation settings (CLI > config file > defaults).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentOptions {
    /// Title reveal rate, characters per second.
    pub speed_cps: f64,
    /// Slide to start on, 1-based. Clamped into range at present time.
    pub start: usize,
}

impl Default for PresentOptions {
    fn default() -> Self {
        PresentOptions {
            speed_cps: crate::reveal::DEFAULT_SPEED_CPS,
            start: 1,
        }
    }
}

/// Output format for `info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_string_parses_as_body_line() {
        let line: ContentLine = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(line, ContentLine::plain("hello"));
    }

    #[test]
    fn tagged_line_parses_with_style() {
        let line: ContentLine =
            serde_json::from_str(r#"{"text": "note", "style": "dim"}"#).unwrap();
        assert_eq!(line, ContentLine::styled("note", LineStyle::Dim));
    }

    #[test]
    fn tagged_line_style_defaults_to_body() {
        let line: ContentLine = serde_json::from_str(r#"{"text": "note"}"#).unwrap();
        assert_eq!(line.style, LineStyle::Body);
    }

    #[test]
    fn slide_body_defaults_to_empty_lines() {
        let slide: Slide = serde_json::from_str(r#"{"title": "T"}"#).unwrap();
        assert_eq!(slide.body, SlideBody::Lines(Vec::new()));
        assert_eq!(slide.body.rows(), 0);
    }

    #[test]
    fn preformatted_body_parses_from_string() {
        let slide: Slide =
            serde_json::from_str(r#"{"title": "T", "body": "a\nb\nc"}"#).unwrap();
        assert!(slide.body.is_preformatted());
        assert_eq!(slide.body.rows(), 3);
    }

    #[test]
    fn lines_body_parses_from_array() {
        let slide: Slide = serde_json::from_str(
            r#"{"title": "T", "body": ["one", {"text": "two", "style": "bullet"}]}"#,
        )
        .unwrap();
        assert_eq!(
            slide.body,
            SlideBody::Lines(vec![
                ContentLine::plain("one"),
                ContentLine::styled("two", LineStyle::Bullet),
            ])
        );
    }

    #[test]
    fn deck_roundtrips_through_json() {
        let deck = Deck {
            title: Some("Demo".into()),
            slides: vec![Slide {
                title: "First".into(),
                body: SlideBody::Lines(vec![ContentLine::styled("hi", LineStyle::Emphasis)]),
            }],
        };
        let json = serde_json::to_string(&deck).unwrap();
        let back: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deck);
    }

    #[test]
    fn plain_line_serializes_without_style_field() {
        let json = serde_json::to_string(&ContentLine::plain("x")).unwrap();
        assert!(!json.contains("style"), "body style should be elided: {}", json);
    }
}
