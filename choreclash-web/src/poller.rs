//! Cancellable repeating poll loop over the state endpoint.
//!
//! Each tick schedules its successor only after its own fetch resolves, so
//! ticks never overlap, and an epoch stamp retires completions belonging to
//! a superseded generation. Transport failure ends the loop outright rather
//! than retrying into a storm; the presentation is left as-is.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use choreclash_core::RoundState;
use gloo::timers::callback::Timeout;

use crate::gateway;

/// Default cadence between poll ticks.
pub const POLL_INTERVAL_MS: u32 = 500;

/// Receives every successfully observed state; returns whether the loop
/// should keep running.
pub type StateSink = Rc<dyn Fn(RoundState) -> bool>;

/// Single-owner polling loop: starting it cancels whatever was running, so
/// at most one loop is ever alive.
pub struct RoundPoller {
    inner: Rc<Inner>,
}

struct Inner {
    epoch: Cell<u64>,
    pending: RefCell<Option<Timeout>>,
    interval_ms: u32,
}

impl RoundPoller {
    #[must_use]
    pub fn new(interval_ms: u32) -> Self {
        Self {
            inner: Rc::new(Inner {
                epoch: Cell::new(0),
                pending: RefCell::new(None),
                interval_ms,
            }),
        }
    }

    /// Begin polling, cancelling any previously running loop first.
    pub fn start(&self, sink: StateSink) {
        self.stop();
        Inner::arm(&self.inner, self.inner.epoch.get(), sink);
    }

    /// Cancel the loop. Safe to call at any time, any number of times.
    pub fn stop(&self) {
        self.inner.halt();
    }

    /// Whether a tick is currently scheduled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.inner.pending.borrow().is_some()
    }
}

impl Inner {
    fn halt(&self) {
        self.epoch.set(self.epoch.get() + 1);
        self.pending.borrow_mut().take();
    }

    fn arm(this: &Rc<Self>, epoch: u64, sink: StateSink) {
        let inner = Rc::clone(this);
        let timeout = Timeout::new(this.interval_ms, move || {
            wasm_bindgen_futures::spawn_local(Self::tick(inner, epoch, sink));
        });
        *this.pending.borrow_mut() = Some(timeout);
    }

    async fn tick(this: Rc<Self>, epoch: u64, sink: StateSink) {
        if this.epoch.get() != epoch {
            return;
        }
        this.pending.borrow_mut().take();

        match gateway::fetch_state().await {
            Err(err) => {
                log::warn!("state poll failed, stopping poller: {err}");
                this.halt();
            }
            Ok(reply) => {
                if this.epoch.get() != epoch {
                    // Superseded while the fetch was in flight.
                    return;
                }
                let keep_going = match (reply.ok, reply.state) {
                    (true, Some(state)) => sink(state),
                    // `ok:false` (or a snapshot-less reply) skips the tick silently.
                    _ => true,
                };
                if keep_going && this.epoch.get() == epoch {
                    Self::arm(&this, epoch, sink);
                }
            }
        }
    }
}
