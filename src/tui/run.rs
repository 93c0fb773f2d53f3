//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Architecture: a key-reader thread forwards crossterm key events over an
//! mpsc channel; the event loop waits on the channel with a timeout equal to
//! the app's next animation deadline. A timeout IS the animation tick.
//! There is never more than one pending timed wait, and navigation resets
//! the tick clock before the next wait is armed, so no stale tick can act
//! on an abandoned title reveal.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::types::{Deck, PresentOptions};

use super::state::{Action, App, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Directional navigation
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char(' ') => Some(Action::Next),
        KeyCode::Left | KeyCode::Char('p') => Some(Action::Previous),

        // Jumps
        KeyCode::Home => Some(Action::First),
        KeyCode::End => Some(Action::Last),
        KeyCode::Char(c @ '1'..='9') => Some(Action::GoToSlide((c as u8 - b'1') as usize)),

        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// KEY READER
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key events.
fn spawn_key_reader(tx: mpsc::Sender<KeyEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(key).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore mouse, resize, etc.
                Err(_) => break,
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Present the deck until the user quits.
///
/// Sets up the terminal, spawns the key reader, and runs the event loop.
/// Key bindings live only for the duration of this call; teardown leaves
/// the alternate screen and disables raw mode.
pub fn run(deck: Deck, options: &PresentOptions) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(deck, options);

    let (tx, rx) = mpsc::channel::<KeyEvent>();
    spawn_key_reader(tx);

    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        // At most one pending wait: a timed one while animating, a blocking
        // one once the slide is fully shown.
        let key = match app.next_deadline() {
            Some(timeout) => match rx.recv_timeout(timeout) {
                Ok(key) => Some(key),
                Err(mpsc::RecvTimeoutError::Timeout) => None,
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            },
            None => match rx.recv() {
                Ok(key) => Some(key),
                Err(_) => break, // sender dropped
            },
        };

        let now = Instant::now();
        match key {
            Some(key) => {
                if let Some(action) = map_key(key) {
                    match update(app.nav, &action) {
                        Transition::GoTo(index) => {
                            app.nav.go_to(index);
                            app.enter_slide();
                            // The new activation's clock starts now; time
                            // spent on the old slide must not count.
                            last_tick = now;
                        }
                        Transition::Quit => {
                            app.should_quit = true;
                        }
                        Transition::Stay => {}
                    }
                }
            }
            None => {
                // Deadline expired: one animation tick, time-corrected.
                app.tick(now - last_tick);
                last_tick = now;
            }
        }
    }

    // The reveal engine's gate goes inactive with the view.
    app.reveal.deactivate();

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
