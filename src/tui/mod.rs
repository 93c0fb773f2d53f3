//! TUI module for the interactive presentation.
//!
//! Organized along FP boundaries:
//! - `state`: pure model (App, Action, Transition)
//! - `update`: pure navigation transitions
//! - `view`: pure rendering
//! - `theme`: style constants
//! - `run`: effects (terminal lifecycle, event loop, key mapping)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
