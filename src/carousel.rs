//! Carousel state: a rotating index over a fixed ordered collection,
//! plus per-item image load flags.
//!
//! Kept free of DOM and timer types so transitions can be unit-tested
//! with the native toolchain. The hero view owns the single repeating
//! `Interval` that drives [`CarouselState::advance`].

use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;

/// Auto-rotation cadence in milliseconds.
pub const ROTATION_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    current: usize,
    len: usize,
    loaded: HashMap<u32, bool>,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len,
            loaded: HashMap::new(),
        }
    }

    /// Index of the slide currently presented.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the image for `id` has finished loading.
    pub fn is_loaded(&self, id: u32) -> bool {
        self.loaded.get(&id).copied().unwrap_or(false)
    }

    /// Jump to an arbitrary position. Any integer is accepted; the
    /// index is wrapped into `[0, len)` with euclidean remainder, so
    /// `-1` lands on the last slide and `len` on the first.
    pub fn go_to(&self, index: isize) -> Self {
        if self.len == 0 {
            return self.clone();
        }
        let mut next = self.clone();
        next.current = index.rem_euclid(self.len as isize) as usize;
        next
    }

    /// One step forward. Timer tick and the "next" arrow share this.
    pub fn advance(&self) -> Self {
        self.go_to(self.current as isize + 1)
    }

    pub fn next(&self) -> Self {
        self.advance()
    }

    /// One step back, wrapping from the first slide to the last.
    pub fn previous(&self) -> Self {
        self.go_to(self.current as isize - 1)
    }

    /// Record that the image for `id` finished loading. Flags are set
    /// once and never reset; repeat calls are harmless.
    pub fn mark_loaded(&self, id: u32) -> Self {
        let mut next = self.clone();
        next.loaded.insert(id, true);
        next
    }
}

/// Messages the hero view dispatches into the state.
pub enum CarouselAction {
    Advance,
    Next,
    Previous,
    GoTo(isize),
    MarkLoaded(u32),
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CarouselAction::Advance => Rc::new(self.advance()),
            CarouselAction::Next => Rc::new(self.next()),
            CarouselAction::Previous => Rc::new(self.previous()),
            CarouselAction::GoTo(index) => Rc::new(self.go_to(index)),
            CarouselAction::MarkLoaded(id) => Rc::new(self.mark_loaded(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_rotation_returns_to_start() {
        for len in 1..=8 {
            let mut state = CarouselState::new(len).go_to(len as isize - 1);
            let start = state.current();
            for _ in 0..len {
                state = state.advance();
            }
            assert_eq!(state.current(), start, "cycle of length {len}");
        }
    }

    #[test]
    fn seven_advances_over_five_items() {
        let mut state = CarouselState::new(5);
        for _ in 0..7 {
            state = state.advance();
        }
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn next_then_previous_round_trips() {
        let len = 5;
        for start in 0..len {
            let state = CarouselState::new(len).go_to(start as isize);
            let back = state.next().previous();
            assert_eq!(back.current(), start, "starting at {start}");
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let state = CarouselState::new(5);
        assert_eq!(state.previous().current(), 4);
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let state = CarouselState::new(5).go_to(4);
        assert_eq!(state.next().current(), 0);
    }

    #[test]
    fn go_to_is_exact_and_idempotent() {
        let state = CarouselState::new(5);
        for k in 0..5 {
            let once = state.go_to(k);
            assert_eq!(once.current(), k as usize);
            assert_eq!(once.go_to(k), once);
        }
    }

    #[test]
    fn go_to_wraps_out_of_range_input() {
        let state = CarouselState::new(5);
        assert_eq!(state.go_to(-1).current(), 4);
        assert_eq!(state.go_to(-6).current(), 4);
        assert_eq!(state.go_to(5).current(), 0);
        assert_eq!(state.go_to(12).current(), 2);
    }

    #[test]
    fn mark_loaded_is_idempotent() {
        let state = CarouselState::new(5);
        assert!(!state.is_loaded(3));
        let once = state.mark_loaded(3);
        let twice = once.mark_loaded(3);
        assert!(once.is_loaded(3));
        assert_eq!(once, twice);
    }

    #[test]
    fn load_flags_survive_navigation() {
        let state = CarouselState::new(5).mark_loaded(1).advance().go_to(3);
        assert!(state.is_loaded(1));
        assert!(!state.is_loaded(2));
    }

    #[test]
    fn empty_carousel_is_inert() {
        let state = CarouselState::new(0);
        assert_eq!(state.advance().current(), 0);
        assert_eq!(state.previous().current(), 0);
        assert_eq!(state.go_to(7).current(), 0);
    }
}
