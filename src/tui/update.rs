//! Pure navigation transitions: (NavigationState, Action) → Transition.
//!
//! Fully testable without a terminal. Every bounds check for a navigation
//! intent happens here, on a copy of the state machine, before the effects
//! layer commits anything. Out-of-range intents are silent no-ops: no
//! wraparound, no errors.

use crate::nav::NavigationState;

use super::state::{Action, Transition};

/// Decide where an action takes the presentation from `nav`'s position.
pub fn update(nav: NavigationState, action: &Action) -> Transition {
    let mut probe = nav;
    match action {
        Action::Next => moved(probe.next(), probe),
        Action::Previous => moved(probe.prev(), probe),
        Action::First => moved(probe.first(), probe),
        Action::Last => moved(probe.last(), probe),
        Action::GoToSlide(index) => {
            // Jumping to the slide already shown must not restart its
            // animations, so a redundant jump is a Stay too.
            if *index < nav.count() && *index != nav.current() {
                Transition::GoTo(*index)
            } else {
                Transition::Stay
            }
        }
        Action::Quit => Transition::Quit,
    }
}

fn moved(did_move: bool, probe: NavigationState) -> Transition {
    if did_move {
        Transition::GoTo(probe.current())
    } else {
        Transition::Stay
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn nav_at(current: usize, count: usize) -> NavigationState {
        let mut nav = NavigationState::new(count);
        if current != 0 {
            nav.go_to(current);
        }
        nav
    }

    #[test]
    fn next_advances_within_bounds() {
        for i in 0..4 {
            assert_eq!(update(nav_at(i, 5), &Action::Next), Transition::GoTo(i + 1));
        }
    }

    #[test]
    fn next_on_last_slide_stays() {
        assert_eq!(update(nav_at(4, 5), &Action::Next), Transition::Stay);
    }

    #[test]
    fn previous_decrements_within_bounds() {
        for i in 1..5 {
            assert_eq!(
                update(nav_at(i, 5), &Action::Previous),
                Transition::GoTo(i - 1)
            );
        }
    }

    #[test]
    fn previous_on_first_slide_stays() {
        assert_eq!(update(nav_at(0, 5), &Action::Previous), Transition::Stay);
    }

    #[test]
    fn three_slide_scenario() {
        // slides = [A, B, C], start at 0
        let mut nav = NavigationState::new(3);
        for _ in 0..2 {
            if let Transition::GoTo(i) = update(nav, &Action::Next) {
                nav.go_to(i);
            }
        }
        assert_eq!(nav.current(), 2);
        assert_eq!(update(nav, &Action::Next), Transition::Stay);
        assert_eq!(update(nav, &Action::Previous), Transition::GoTo(1));
    }

    #[test]
    fn go_to_slide_valid_index_moves() {
        assert_eq!(
            update(nav_at(0, 5), &Action::GoToSlide(3)),
            Transition::GoTo(3)
        );
        assert_eq!(
            update(nav_at(4, 5), &Action::GoToSlide(0)),
            Transition::GoTo(0)
        );
    }

    #[test]
    fn go_to_slide_out_of_range_stays() {
        assert_eq!(update(nav_at(0, 3), &Action::GoToSlide(3)), Transition::Stay);
        assert_eq!(update(nav_at(0, 3), &Action::GoToSlide(8)), Transition::Stay);
    }

    #[test]
    fn go_to_current_slide_stays() {
        // No animation restart from pressing the current slide's number.
        assert_eq!(update(nav_at(2, 5), &Action::GoToSlide(2)), Transition::Stay);
    }

    #[test]
    fn first_and_last_jump_unless_already_there() {
        assert_eq!(update(nav_at(3, 5), &Action::First), Transition::GoTo(0));
        assert_eq!(update(nav_at(0, 5), &Action::First), Transition::Stay);
        assert_eq!(update(nav_at(0, 5), &Action::Last), Transition::GoTo(4));
        assert_eq!(update(nav_at(4, 5), &Action::Last), Transition::Stay);
    }

    #[test]
    fn quit_always_quits() {
        assert_eq!(update(nav_at(0, 5), &Action::Quit), Transition::Quit);
        assert_eq!(update(nav_at(4, 5), &Action::Quit), Transition::Quit);
    }

    #[test]
    fn single_slide_deck_everything_stays() {
        for action in [
            Action::Next,
            Action::Previous,
            Action::First,
            Action::Last,
            Action::GoToSlide(0),
        ] {
            assert_eq!(update(nav_at(0, 1), &action), Transition::Stay);
        }
    }

    #[test]
    fn update_never_mutates_its_input() {
        let nav = nav_at(1, 3);
        let _ = update(nav, &Action::Next);
        assert_eq!(nav.current(), 1);
    }
}
