//! TUI state: the app model, semantic actions, and transitions.
//!
//! `App` owns the deck, the navigation state machine, and the reveal engine
//! for the current slide's title. The transition function (update) and the
//! rendering layer (view) both program against these types; only the effects
//! boundary (run) mutates them.

use std::time::Duration;

use crate::nav::NavigationState;
use crate::reveal::{RevealEngine, TICK_INTERVAL};
use crate::types::{Deck, PresentOptions, Slide};

/// Interval between body rows entering after the title completes.
pub const BODY_STAGGER: Duration = Duration::from_millis(120);

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// The deck being presented. Non-empty (validated at load).
    pub deck: Deck,

    /// Current slide index and bounds.
    pub nav: NavigationState,

    /// Typewriter reveal of the current slide's title.
    pub reveal: RevealEngine,

    /// Time since the title completed, gating body entry.
    /// `None` while the title is still typing.
    body_clock: Option<Duration>,

    /// Set to true when the app should exit on the next iteration.
    pub should_quit: bool,
}

impl App {
    /// Build the model and activate the start slide.
    ///
    /// `options.start` is 1-based and clamped into range here.
    pub fn new(deck: Deck, options: &PresentOptions) -> Self {
        let count = deck.slides.len();
        let mut nav = NavigationState::new(count);
        let start = options.start.saturating_sub(1).min(count - 1);
        if start != 0 {
            nav.go_to(start);
        }
        let mut app = App {
            deck,
            nav,
            reveal: RevealEngine::new(options.speed_cps),
            body_clock: None,
            should_quit: false,
        };
        app.enter_slide();
        app
    }

    pub fn current_slide(&self) -> &Slide {
        &self.deck.slides[self.nav.current()]
    }

    /// Restart the title reveal and the body entry animation for the
    /// current slide. Called on startup and after every navigation.
    pub fn enter_slide(&mut self) {
        self.body_clock = None;
        let title = self.current_slide().title.clone();
        self.reveal.activate(&title);
        // Empty titles are complete before any tick; the body enters at once.
        if self.reveal.take_completion() {
            self.body_clock = Some(Duration::ZERO);
        }
    }

    /// Advance all animations by wall-clock `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) {
        self.reveal.tick(elapsed);
        if self.reveal.take_completion() {
            self.body_clock = Some(Duration::ZERO);
        } else if let Some(clock) = &mut self.body_clock {
            *clock = clock.saturating_add(elapsed);
        }
    }

    /// How many rows of the current body have entered so far.
    ///
    /// Nothing before the title completes; afterwards one row immediately
    /// and another per [`BODY_STAGGER`]. Preformatted blocks enter whole.
    pub fn visible_body_rows(&self) -> usize {
        let body = &self.current_slide().body;
        let total = body.rows();
        match self.body_clock {
            None => 0,
            Some(_) if body.is_preformatted() => total,
            Some(elapsed) => {
                let entered = (elapsed.as_secs_f64() / BODY_STAGGER.as_secs_f64()) as usize + 1;
                entered.min(total)
            }
        }
    }

    /// When the next animation tick should run, if any. `None` once the
    /// title is fully revealed and the body has fully entered.
    pub fn next_deadline(&self) -> Option<Duration> {
        if let Some(deadline) = self.reveal.next_deadline() {
            return Some(deadline);
        }
        if self.body_clock.is_some()
            && self.visible_body_rows() < self.current_slide().body.rows()
        {
            return Some(TICK_INTERVAL);
        }
        None
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions; the transition function
/// decides what each one means at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Advance one slide.
    Next,
    /// Step back one slide.
    Previous,
    /// Jump to the first slide.
    First,
    /// Jump to the last slide.
    Last,
    /// Jump to a specific 0-based slide index (number keys).
    GoToSlide(usize),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure navigation transition.
///
/// The effects boundary interprets it: `GoTo` re-enters the slide (resetting
/// the reveal engine and the body animation), `Stay` does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Move to this pre-validated slide index.
    GoTo(usize),
    /// Position unchanged; the intent was out of range or redundant.
    Stay,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
