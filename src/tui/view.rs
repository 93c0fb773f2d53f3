//! Pure rendering: map App state to ratatui widget trees.
//!
//! State in, widgets out; the only effect is `Frame::render_widget()`
//! writing to the terminal buffer. The layout is fixed: progress bar,
//! header, slide content, indicator dots, help line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::types::{ContentLine, LineStyle, SlideBody};

use super::state::App;
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole viewer to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // progress bar
        Constraint::Length(1), // header: deck title + counter
        Constraint::Min(0),    // slide content
        Constraint::Length(1), // indicator dots
        Constraint::Length(1), // help
    ])
    .split(area);

    render_progress(app, frame, chunks[0]);
    render_header(app, frame, chunks[1]);
    render_slide(app, frame, chunks[2]);
    render_dots(app, frame, chunks[3]);
    render_help(frame, chunks[4]);
}

// ============================================================================
// CHROME
// ============================================================================

/// Full-width proportional progress bar: (current + 1) / count.
fn render_progress(app: &App, frame: &mut Frame, area: Rect) {
    let width = area.width as usize;
    let filled = ((app.nav.progress() * width as f64) as usize).min(width);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    frame.render_widget(
        Paragraph::new(Span::styled(bar, theme::STYLE_PROGRESS)),
        area,
    );
}

/// Deck title (left) and 1-based slide counter.
fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let deck_title = app.deck.title.as_deref().unwrap_or("termdeck");
    let counter = format!("{} / {}", app.nav.current() + 1, app.nav.count());
    let line = Line::from(vec![
        Span::raw("  "),
        Span::styled(deck_title.to_string(), theme::STYLE_TITLE),
        Span::raw("   "),
        Span::styled(counter, theme::STYLE_COUNTER),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// One dot per slide, the current one highlighted.
fn render_dots(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw("  ")];
    for i in 0..app.nav.count() {
        if i == app.nav.current() {
            spans.push(Span::styled("●", theme::STYLE_DOT_ACTIVE));
        } else {
            spans.push(Span::styled("○", theme::STYLE_DOT_INACTIVE));
        }
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help =
        "  [→/n/Space] next  [←/p] prev  [1-9] jump  [Home/End] first/last  [q] quit";
    frame.render_widget(
        Paragraph::new(Span::styled(help, theme::STYLE_HELP)),
        area,
    );
}

// ============================================================================
// SLIDE CONTENT
// ============================================================================

fn render_slide(app: &App, frame: &mut Frame, area: Rect) {
    let slide = app.current_slide();

    let mut lines = vec![Line::from("")];

    // Title: the revealed prefix, with a block cursor while typing.
    let mut title_spans = vec![
        Span::raw("  "),
        Span::styled(app.reveal.visible().to_string(), theme::STYLE_SLIDE_TITLE),
    ];
    if !app.reveal.is_complete() {
        title_spans.push(Span::styled("▌", theme::STYLE_CURSOR));
    }
    lines.push(Line::from(title_spans));
    lines.push(Line::from(""));

    // Body, gated by the entry animation.
    let visible_rows = app.visible_body_rows();
    match &slide.body {
        SlideBody::Lines(body) => {
            for line in body.iter().take(visible_rows) {
                lines.push(render_content_line(line));
            }
        }
        SlideBody::Preformatted(text) => {
            for row in text.lines().take(visible_rows) {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(row.to_string(), theme::STYLE_PREFORMATTED),
                ]));
            }
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// One styled body line, with per-style leading markers.
fn render_content_line(line: &ContentLine) -> Line<'static> {
    let style = theme::line_style(line.style);
    match line.style {
        LineStyle::Bullet => Line::from(vec![
            Span::raw("  "),
            Span::styled("• ", theme::STYLE_BULLET_MARK),
            Span::styled(line.text.clone(), style),
        ]),
        LineStyle::Quote => Line::from(vec![
            Span::raw("  "),
            Span::styled("▍ ", theme::STYLE_DIM),
            Span::styled(line.text.clone(), style),
        ]),
        _ => Line::from(vec![
            Span::raw("  "),
            Span::styled(line.text.clone(), style),
        ]),
    }
}

// ============================================================================
// TESTS
// ============================================================================
