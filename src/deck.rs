//! Deck loading and validation.
//!
//! Decks are JSON files. Loading is the only fallible path in the whole
//! viewer: unreadable files surface as plain I/O errors, malformed or
//! structurally invalid decks as `InvalidData`.

use std::fs;
use std::io;
use std::path::Path;

use crate::types::{ContentLine, Deck, LineStyle, Slide, SlideBody};

/// Read and validate a deck file.
pub fn load_deck(path: &Path) -> io::Result<Deck> {
    let raw = fs::read_to_string(path)?;
    let deck: Deck = serde_json::from_str(&raw).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: {}", path.display(), e),
        )
    })?;
    validate(&deck).map_err(|msg| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: {}", path.display(), msg),
        )
    })?;
    Ok(deck)
}

/// Structural checks the viewer relies on.
///
/// The navigation state machine requires at least one slide; everything
/// else (empty titles, empty bodies) is legal and renders sensibly.
pub fn validate(deck: &Deck) -> Result<(), String> {
    if deck.slides.is_empty() {
        return Err("deck has no slides".to_string());
    }
    Ok(())
}

/// The built-in deck: shown when no file is given, and printed by
/// `termdeck sample` as a starting point for new decks.
pub fn sample_deck() -> Deck {
    Deck {
        title: Some("termdeck".to_string()),
        slides: vec![
            Slide {
                title: "Slides in your terminal".to_string(),
                body: SlideBody::Lines(vec![
                    ContentLine::plain("A deck is a JSON file: an ordered list of titles and bodies."),
                    ContentLine::plain("Titles type themselves out; bodies follow line by line."),
                    ContentLine::styled("Press \u{2192} to continue", LineStyle::Dim),
                ]),
            },
            Slide {
                title: "Navigation".to_string(),
                body: SlideBody::Lines(vec![
                    ContentLine::styled("\u{2192} / n / Space: next slide", LineStyle::Bullet),
                    ContentLine::styled("\u{2190} / p: previous slide", LineStyle::Bullet),
                    ContentLine::styled("1-9: jump straight to a slide", LineStyle::Bullet),
                    ContentLine::styled("Home / End: first / last slide", LineStyle::Bullet),
                    ContentLine::styled("q or Esc: quit", LineStyle::Bullet),
                ]),
            },
            Slide {
                title: "Typewriter titles".to_string(),
                body: SlideBody::Lines(vec![
                    ContentLine::plain("Each title reveals at a fixed number of characters per second,"),
                    ContentLine::plain("measured against the wall clock, not the frame rate."),
                    ContentLine::styled("Slow terminal? Same speed.", LineStyle::Emphasis),
                    ContentLine::styled("Tune it with --speed or the config file.", LineStyle::Dim),
                ]),
            },
            Slide {
                title: "Line styles".to_string(),
                body: SlideBody::Lines(vec![
                    ContentLine::styled("Headings for structure", LineStyle::Heading),
                    ContentLine::plain("Plain body text for prose."),
                    ContentLine::styled("Emphasis for the one thing that matters", LineStyle::Emphasis),
                    ContentLine::styled("Bullets for lists", LineStyle::Bullet),
                    ContentLine::styled("Quotes for borrowed words", LineStyle::Quote),
                    ContentLine::styled("Dim for asides", LineStyle::Dim),
                ]),
            },
            Slide {
                title: "Preformatted blocks".to_string(),
                body: SlideBody::Preformatted(
                    concat!(
                        "{\n",
                        "  \"title\": \"My talk\",\n",
                        "  \"slides\": [\n",
                        "    { \"title\": \"Hello\", \"body\": [\"first line\"] }\n",
                        "  ]\n",
                        "}"
                    )
                    .to_string(),
                ),
            },
            Slide {
                title: "That's the whole tool".to_string(),
                body: SlideBody::Lines(vec![
                    ContentLine::plain("Write a deck, point termdeck at it, present."),
                    ContentLine::styled("termdeck sample > my-deck.json", LineStyle::Quote),
                ]),
            },
        ],
    }
}

// ============================================================================
// TESTS
// ============================================================================
