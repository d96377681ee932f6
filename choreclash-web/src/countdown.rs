//! Countdown presenter: owns the at-most-one live ticker behind the ring,
//! the numeric display, the pulse cue, and the per-second tick sound.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::timers::callback::Interval;
use yew::UseStateHandle;

use crate::audio;

/// What the ring and numeric display render from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownView {
    pub seconds_left: u32,
    pub total: u32,
    pub pulse: bool,
    pub running: bool,
}

/// Single-owner countdown. `start` always releases the previous ticker
/// first; `stop` cancels the ticker, strips transient visual state, and is
/// safe to call any number of times, running or not. Between authoritative
/// updates the displayed value counts down locally at a 1-second cadence.
#[derive(Default)]
pub struct CountdownPresenter {
    inner: Rc<Inner>,
}

#[derive(Default)]
struct Inner {
    ticker: RefCell<Option<Interval>>,
    handle: RefCell<Option<UseStateHandle<CountdownView>>>,
    current: Cell<CountdownView>,
}

impl CountdownPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fresh countdown bound to `handle`.
    pub fn start(&self, handle: UseStateHandle<CountdownView>, total: u32, seconds_left: u32) {
        self.stop();

        let view = CountdownView {
            seconds_left,
            total,
            pulse: false,
            running: true,
        };
        self.inner.current.set(view);
        handle.set(view);
        *self.inner.handle.borrow_mut() = Some(handle);

        let inner = Rc::clone(&self.inner);
        let ticker = Interval::new(1_000, move || inner.tick());
        *self.inner.ticker.borrow_mut() = Some(ticker);
    }

    /// Overwrite the displayed remaining seconds with an authoritative value.
    /// Does not restart the ticker, preserving tick continuity.
    pub fn update(&self, seconds_left: u32) {
        let mut view = self.inner.current.get();
        if !view.running {
            return;
        }
        view.seconds_left = seconds_left;
        self.inner.current.set(view);
        self.inner.push(view);
    }

    /// Cancel the ticker and clear the pulse/running cues. Idempotent.
    pub fn stop(&self) {
        self.inner.ticker.borrow_mut().take();
        let mut view = self.inner.current.get();
        if view.running || view.pulse {
            view.running = false;
            view.pulse = false;
            self.inner.current.set(view);
            self.inner.push(view);
        }
        self.inner.handle.borrow_mut().take();
    }

    /// Whether a ticker is currently live.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.ticker.borrow().is_some()
    }
}

impl Inner {
    fn tick(&self) {
        let mut view = self.current.get();
        if !view.running {
            return;
        }
        view.seconds_left = view.seconds_left.saturating_sub(1);
        view.pulse = !view.pulse;
        self.current.set(view);
        self.push(view);
        audio::tick();
    }

    fn push(&self, view: CountdownView) {
        if let Some(handle) = self.handle.borrow().as_ref() {
            handle.set(view);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_twice_is_a_noop_the_second_time() {
        let presenter = CountdownPresenter::new();
        presenter.stop();
        presenter.stop();
        assert!(!presenter.is_running());
        assert_eq!(presenter.inner.current.get(), CountdownView::default());
    }

    #[test]
    fn update_without_a_live_countdown_changes_nothing() {
        let presenter = CountdownPresenter::new();
        presenter.update(5);
        assert_eq!(presenter.inner.current.get().seconds_left, 0);
    }
}
