//! Time-driven typewriter reveal of a text string.
//!
//! The engine owns a growing prefix of its target text. Each tick converts
//! wall-clock elapsed time into a fractional character advance that
//! accumulates across ticks, so the effective rate is exact over time and
//! independent of how often ticks arrive. Completion is a one-shot event per
//! activation, consumed through [`RevealEngine::take_completion`].
//!
//! All timing state is private to the engine instance; nothing is shared
//! across activations or engines.

use std::time::Duration;

/// Default reveal rate, characters per second.
pub const DEFAULT_SPEED_CPS: f64 = 50.0;

/// Floor applied to invalid (zero, negative, non-finite) configured rates.
pub const MIN_SPEED_CPS: f64 = 1.0;

/// Interval between scheduled ticks while animating (~60 Hz).
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Lifecycle of one activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// No active text; nothing revealed, no ticks requested.
    Idle,
    /// Revealing: `0 <= revealed < len`.
    Revealing,
    /// The full text is visible.
    Complete,
}

#[derive(Debug)]
pub struct RevealEngine {
    text: String,
    /// Byte offset of every char boundary, plus the total byte length.
    /// `boundaries[n]` is where the n-char prefix ends.
    boundaries: Vec<usize>,
    speed_cps: f64,
    /// Accumulated fractional character progress for the current activation.
    progress: f64,
    /// Revealed prefix length, in chars. Non-decreasing within an activation.
    revealed: usize,
    phase: RevealPhase,
    completion_taken: bool,
}

impl RevealEngine {
    /// Create an idle engine. Rates at or below zero are invalid
    /// configuration and clamp to [`MIN_SPEED_CPS`].
    pub fn new(speed_cps: f64) -> Self {
        let speed_cps = if speed_cps.is_finite() && speed_cps > 0.0 {
            speed_cps
        } else {
            MIN_SPEED_CPS
        };
        RevealEngine {
            text: String::new(),
            boundaries: vec![0],
            speed_cps,
            progress: 0.0,
            revealed: 0,
            phase: RevealPhase::Idle,
            completion_taken: false,
        }
    }

    pub fn speed_cps(&self) -> f64 {
        self.speed_cps
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Start revealing `text` from scratch, abandoning any prior activation:
    /// progress and the completion guard reset, and no callback from the
    /// abandoned activation can fire afterwards.
    ///
    /// An empty string is complete immediately, before any tick.
    pub fn activate(&mut self, text: &str) {
        self.text = text.to_string();
        self.boundaries = self
            .text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(self.text.len()))
            .collect();
        self.progress = 0.0;
        self.revealed = 0;
        self.completion_taken = false;
        self.phase = if self.text.is_empty() {
            RevealPhase::Complete
        } else {
            RevealPhase::Revealing
        };
    }

    /// The inactive gate: back to idle, nothing revealed, no ticks requested.
    /// Any pending completion is abandoned.
    pub fn deactivate(&mut self) {
        self.text.clear();
        self.boundaries = vec![0];
        self.progress = 0.0;
        self.revealed = 0;
        self.completion_taken = false;
        self.phase = RevealPhase::Idle;
    }

    /// Advance by wall-clock `elapsed`. Fractional progress carries over
    /// between ticks (never truncated per tick), so a text of length L at
    /// speed S completes in L / S seconds regardless of tick cadence.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.phase != RevealPhase::Revealing {
            return;
        }
        self.progress += elapsed.as_secs_f64() * self.speed_cps;
        let total = self.char_len();
        let target = (self.progress.floor() as usize).min(total);
        if target > self.revealed {
            self.revealed = target;
        }
        if self.revealed == total {
            self.phase = RevealPhase::Complete;
        }
    }

    /// Target text length, in chars.
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Revealed prefix length, in chars.
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    /// The revealed prefix. Always a valid char boundary of the target text.
    pub fn visible(&self) -> &str {
        &self.text[..self.boundaries[self.revealed]]
    }

    pub fn is_complete(&self) -> bool {
        self.phase == RevealPhase::Complete
    }

    /// One-shot completion event: returns `true` exactly once per
    /// activation, and only once the full text is visible. Re-activating
    /// re-arms the guard.
    pub fn take_completion(&mut self) -> bool {
        if self.phase == RevealPhase::Complete && !self.completion_taken {
            self.completion_taken = true;
            true
        } else {
            false
        }
    }

    /// When the next tick should run: one frame away while revealing,
    /// never while idle or complete. The driving loop must hold at most one
    /// pending wait, re-armed from this after every event.
    pub fn next_deadline(&self) -> Option<Duration> {
        match self.phase {
            RevealPhase::Revealing => Some(TICK_INTERVAL),
            RevealPhase::Idle | RevealPhase::Complete => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn new_engine_is_idle_and_blank() {
        let engine = RevealEngine::new(50.0);
        assert_eq!(engine.phase(), RevealPhase::Idle);
        assert_eq!(engine.visible(), "");
        assert_eq!(engine.next_deadline(), None);
    }

    #[test]
    fn hello_at_50cps_completes_in_a_tenth_of_a_second() {
        let mut engine = RevealEngine::new(50.0);
        engine.activate("Hello");
        engine.tick(ms(100)); // 5 / 50 = 0.1s
        assert_eq!(engine.revealed_len(), 5);
        assert_eq!(engine.visible(), "Hello");
        assert!(engine.is_complete());
    }

    #[test]
    fn fractional_progress_accumulates_across_ticks() {
        // 50 cps, 10ms ticks: each tick is worth half a character.
        // Truncating per tick would reveal nothing forever.
        let mut engine = RevealEngine::new(50.0);
        engine.activate("Hello");
        engine.tick(ms(10));
        assert_eq!(engine.revealed_len(), 0);
        engine.tick(ms(10));
        assert_eq!(engine.revealed_len(), 1);
        for _ in 0..8 {
            engine.tick(ms(10));
        }
        // 10 ticks x 10ms = 100ms total: the full word.
        assert_eq!(engine.revealed_len(), 5);
        assert!(engine.is_complete());
    }

    #[test]
    fn completion_lands_within_one_tick_of_len_over_speed() {
        // 20 chars at 100 cps = 200ms. With 16ms ticks, completion must
        // arrive on the first tick at or past the 200ms mark.
        let mut engine = RevealEngine::new(100.0);
        engine.activate("abcdefghijklmnopqrst");
        let mut ticks = 0;
        while !engine.is_complete() {
            engine.tick(ms(16));
            ticks += 1;
            assert!(ticks <= 13, "took too long: {} ticks", ticks);
        }
        assert!(ticks >= 13, "completed early: {} ticks", ticks);
    }

    #[test]
    fn revealed_length_is_monotonic() {
        let mut engine = RevealEngine::new(80.0);
        engine.activate("monotonic reveal");
        let mut last = 0;
        for _ in 0..200 {
            engine.tick(ms(3));
            assert!(engine.revealed_len() >= last);
            last = engine.revealed_len();
        }
        assert!(engine.is_complete());
    }

    #[test]
    fn completion_fires_exactly_once_per_activation() {
        let mut engine = RevealEngine::new(50.0);
        engine.activate("Hi");
        assert!(!engine.take_completion()); // not before revealed == len
        engine.tick(ms(1000));
        assert!(engine.take_completion());
        assert!(!engine.take_completion());
        engine.tick(ms(1000));
        assert!(!engine.take_completion());
    }

    #[test]
    fn empty_string_is_complete_with_zero_ticks() {
        let mut engine = RevealEngine::new(50.0);
        engine.activate("");
        assert!(engine.is_complete());
        assert_eq!(engine.next_deadline(), None);
        assert!(engine.take_completion());
        assert!(!engine.take_completion());
    }

    #[test]
    fn changing_text_mid_reveal_hard_resets() {
        let mut engine = RevealEngine::new(50.0);
        engine.activate("first title");
        engine.tick(ms(60)); // 3 chars in
        assert_eq!(engine.revealed_len(), 3);

        engine.activate("second");
        assert_eq!(engine.revealed_len(), 0);
        assert_eq!(engine.visible(), "");
        assert_eq!(engine.phase(), RevealPhase::Revealing);

        // The abandoned activation's progress must not leak into this one.
        engine.tick(ms(20));
        assert_eq!(engine.revealed_len(), 1);
    }

    #[test]
    fn reset_rearms_the_completion_guard() {
        let mut engine = RevealEngine::new(50.0);
        engine.activate("one");
        engine.tick(ms(1000));
        assert!(engine.take_completion());

        engine.activate("two");
        assert!(!engine.take_completion()); // new activation, not yet complete
        engine.tick(ms(1000));
        assert!(engine.take_completion()); // fires again for the new one
    }

    #[test]
    fn deactivate_reveals_nothing_and_requests_no_ticks() {
        let mut engine = RevealEngine::new(50.0);
        engine.activate("interrupted");
        engine.tick(ms(40));
        engine.deactivate();
        assert_eq!(engine.phase(), RevealPhase::Idle);
        assert_eq!(engine.visible(), "");
        assert_eq!(engine.next_deadline(), None);
        assert!(!engine.take_completion());
    }

    #[test]
    fn invalid_speed_clamps_to_minimum() {
        assert_eq!(RevealEngine::new(0.0).speed_cps(), MIN_SPEED_CPS);
        assert_eq!(RevealEngine::new(-3.0).speed_cps(), MIN_SPEED_CPS);
        assert_eq!(RevealEngine::new(f64::NAN).speed_cps(), MIN_SPEED_CPS);
        assert_eq!(RevealEngine::new(f64::INFINITY).speed_cps(), MIN_SPEED_CPS);
        assert_eq!(RevealEngine::new(12.5).speed_cps(), 12.5);
    }

    #[test]
    fn multibyte_text_reveals_on_char_boundaries() {
        let mut engine = RevealEngine::new(10.0);
        engine.activate("héllo → café");
        while !engine.is_complete() {
            engine.tick(ms(16));
            // Slicing would panic off a char boundary; also check validity.
            let visible = engine.visible();
            assert!(visible.chars().count() == engine.revealed_len());
        }
        assert_eq!(engine.visible(), "héllo → café");
    }

    #[test]
    fn oversized_elapsed_clamps_to_full_length() {
        let mut engine = RevealEngine::new(50.0);
        engine.activate("abc");
        engine.tick(Duration::from_secs(3600));
        assert_eq!(engine.revealed_len(), 3);
        assert!(engine.is_complete());
    }

    #[test]
    fn deadline_requested_only_while_revealing() {
        let mut engine = RevealEngine::new(50.0);
        assert_eq!(engine.next_deadline(), None);
        engine.activate("tick me");
        assert_eq!(engine.next_deadline(), Some(TICK_INTERVAL));
        engine.tick(ms(1000));
        assert_eq!(engine.next_deadline(), None);
    }
}
