//! TUI color semantics and style constants.
//!
//! Centralized theme definitions consumed by the rendering layer.
//!
//! Color semantics:
//! - Cyan: progress and position (bar, active indicator dot, typing cursor)
//! - Bold white: titles
//! - Yellow: emphasized body lines
//! - Green: quotations
//! - Dim: de-emphasized text, help line, inactive indicator dots

use ratatui::style::{Color, Modifier, Style};

use crate::types::LineStyle;

// ============================================================================
// CHROME
// ============================================================================

/// Header: deck title.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Header: slide counter.
pub const STYLE_COUNTER: Style = Style::new().fg(Color::DarkGray);

/// Progress bar fill.
pub const STYLE_PROGRESS: Style = Style::new().fg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Indicator dot for the current slide.
pub const STYLE_DOT_ACTIVE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Indicator dots for the other slides.
pub const STYLE_DOT_INACTIVE: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// SLIDE CONTENT
// ============================================================================

/// The slide title being revealed.
pub const STYLE_SLIDE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Block cursor shown while the title is still typing.
pub const STYLE_CURSOR: Style = Style::new().fg(Color::Cyan);

/// Regular body text.
pub const STYLE_BODY: Style = Style::new();

/// In-slide heading.
pub const STYLE_HEADING: Style = Style::new().add_modifier(Modifier::BOLD);

/// Emphasized body line.
pub const STYLE_EMPHASIS: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Bullet marker.
pub const STYLE_BULLET_MARK: Style = Style::new().fg(Color::Cyan);

/// Quotation line.
pub const STYLE_QUOTE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::ITALIC);

/// De-emphasized body line.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Preformatted block.
pub const STYLE_PREFORMATTED: Style = Style::new().fg(Color::Cyan);

/// Map a body line's style tag to its terminal style.
pub fn line_style(style: LineStyle) -> Style {
    match style {
        LineStyle::Body => STYLE_BODY,
        LineStyle::Heading => STYLE_HEADING,
        LineStyle::Emphasis => STYLE_EMPHASIS,
        LineStyle::Bullet => STYLE_BODY,
        LineStyle::Quote => STYLE_QUOTE,
        LineStyle::Dim => STYLE_DIM,
    }
}

// ============================================================================
// TESTS
// ============================================================================
