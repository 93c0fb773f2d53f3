//! Deck summary formatting for `info`.
//!
//! Pure functions — (Deck, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::types::{Deck, OutputFormat};

/// Format a deck summary for output.
pub fn format_deck_info(deck: &Deck, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(deck),
        OutputFormat::Json => format_json(deck),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(deck: &Deck) -> String {
    let mut out = String::new();

    if let Some(title) = &deck.title {
        out.push_str(&format!("Deck: {}\n", title));
    }
    out.push_str(&format!(
        "Slides: {}\n\n",
        deck.slides.len()
    ));

    for (i, slide) in deck.slides.iter().enumerate() {
        let rows = slide.body.rows();
        let body_desc = if slide.body.is_preformatted() {
            format!("preformatted, {} row{}", rows, plural(rows))
        } else {
            format!("{} line{}", rows, plural(rows))
        };
        let title = if slide.title.is_empty() {
            "(untitled)"
        } else {
            slide.title.as_str()
        };
        out.push_str(&format!("{:>3}. {}  ({})\n", i + 1, title, body_desc));
    }

    out
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

// ============================================================================
// JSON FORMAT
// ============================================================================

#[derive(Serialize)]
struct DeckSummary<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    slide_count: usize,
    slides: Vec<SlideSummary<'a>>,
}

#[derive(Serialize)]
struct SlideSummary<'a> {
    index: usize,
    title: &'a str,
    body_rows: usize,
    preformatted: bool,
}

fn format_json(deck: &Deck) -> String {
    let summary = DeckSummary {
        title: deck.title.as_deref(),
        slide_count: deck.slides.len(),
        slides: deck
            .slides
            .iter()
            .enumerate()
            .map(|(i, slide)| SlideSummary {
                index: i + 1,
                title: &slide.title,
                body_rows: slide.body.rows(),
                preformatted: slide.body.is_preformatted(),
            })
            .collect(),
    };

    // A summary of in-memory data always serializes.
    serde_json::to_string_pretty(&summary).unwrap_or_else(|_| "{}".to_string())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentLine, Slide, SlideBody};

    fn two_slide_deck() -> Deck {
        Deck {
            title: Some("Demo deck".into()),
            slides: vec![
                Slide {
                    title: "Opening".into(),
                    body: SlideBody::Lines(vec![
                        ContentLine::plain("a"),
                        ContentLine::plain("b"),
                    ]),
                },
                Slide {
                    title: "Code".into(),
                    body: SlideBody::Preformatted("x\ny\nz".into()),
                },
            ],
        }
    }

    #[test]
    fn human_output_lists_titles_and_counts() {
        let out = format_deck_info(&two_slide_deck(), OutputFormat::Human);
        assert!(out.contains("Deck: Demo deck"));
        assert!(out.contains("Slides: 2"));
        assert!(out.contains("1. Opening  (2 lines)"));
        assert!(out.contains("2. Code  (preformatted, 3 rows)"));
    }

    #[test]
    fn human_output_marks_untitled_slides() {
        let deck = Deck {
            title: None,
            slides: vec![Slide {
                title: String::new(),
                body: SlideBody::default(),
            }],
        };
        let out = format_deck_info(&deck, OutputFormat::Human);
        assert!(out.contains("(untitled)"));
        assert!(!out.contains("Deck:"));
    }

    #[test]
    fn singular_counts_have_no_s() {
        let deck = Deck {
            title: None,
            slides: vec![Slide {
                title: "One".into(),
                body: SlideBody::Lines(vec![ContentLine::plain("only")]),
            }],
        };
        let out = format_deck_info(&deck, OutputFormat::Human);
        assert!(out.contains("(1 line)"));
    }

    #[test]
    fn json_output_parses_back() {
        let out = format_deck_info(&two_slide_deck(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["slide_count"], 2);
        assert_eq!(value["slides"][0]["title"], "Opening");
        assert_eq!(value["slides"][1]["preformatted"], true);
        assert_eq!(value["slides"][1]["body_rows"], 3);
    }

    #[test]
    fn json_indices_are_one_based() {
        let out = format_deck_info(&two_slide_deck(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["slides"][0]["index"], 1);
        assert_eq!(value["slides"][1]["index"], 2);
    }
}
