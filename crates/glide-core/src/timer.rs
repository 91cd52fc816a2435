//! # Timers
//!
//! `Timers` is a per-instance timer queue. Nothing runs on its own: the host
//! event loop calls [`Timers::run_due`] (typically once per frame, or after
//! sleeping until [`Timers::next_deadline`]) and every timer whose deadline
//! has passed fires once.
//!
//! ```rust
//! use std::rc::Rc;
//! use glide_core::*;
//! use web_time::Duration;
//!
//! let clock = ManualClock::default();
//! let timers = Timers::new(Rc::new(clock.clone()));
//! let id = timers.set_interval(Duration::from_millis(100), || {});
//!
//! clock.advance(Duration::from_millis(100));
//! assert_eq!(timers.run_due(), 1);
//! timers.cancel(id);
//! ```
//!
//! Callbacks run after the queue has released its internal borrow, so a
//! callback may cancel itself or schedule new timers.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use web_time::{Duration, Instant};

use crate::Clock;

new_key_type! {
    pub struct TimerId;
}

const MIN_PERIOD: Duration = Duration::from_millis(1);

struct Entry {
    deadline: Instant,
    period: Option<Duration>,
    callback: Rc<dyn Fn()>,
}

pub struct Timers {
    clock: Rc<dyn Clock>,
    entries: RefCell<SlotMap<TimerId, Entry>>,
}

impl Timers {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            entries: RefCell::new(SlotMap::with_key()),
        }
    }

    /// Fires `f` every `period` until cancelled.
    pub fn set_interval(&self, period: Duration, f: impl Fn() + 'static) -> TimerId {
        let period = period.max(MIN_PERIOD);
        let deadline = self.clock.now() + period;
        self.entries.borrow_mut().insert(Entry {
            deadline,
            period: Some(period),
            callback: Rc::new(f),
        })
    }

    /// Fires `f` once after `delay`.
    pub fn set_timeout(&self, delay: Duration, f: impl Fn() + 'static) -> TimerId {
        let deadline = self.clock.now() + delay;
        self.entries.borrow_mut().insert(Entry {
            deadline,
            period: None,
            callback: Rc::new(f),
        })
    }

    /// Returns `false` if the timer already fired (one-shot) or was cancelled.
    pub fn cancel(&self, id: TimerId) -> bool {
        self.entries.borrow_mut().remove(id).is_some()
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.entries.borrow().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.borrow().values().map(|e| e.deadline).min()
    }

    /// Fires every due timer once and returns how many callbacks ran.
    ///
    /// An interval that fell several periods behind fires once and skips ahead
    /// to its next deadline in the future.
    pub fn run_due(&self) -> usize {
        let now = self.clock.now();

        let mut due: Vec<(Instant, TimerId, bool, Rc<dyn Fn()>)> = {
            let mut entries = self.entries.borrow_mut();
            let mut due = Vec::new();
            for (id, e) in entries.iter_mut() {
                if e.deadline > now {
                    continue;
                }
                due.push((e.deadline, id, e.period.is_some(), e.callback.clone()));
                if let Some(period) = e.period {
                    while e.deadline <= now {
                        e.deadline += period;
                    }
                }
            }
            due
        };
        due.sort_by_key(|(deadline, ..)| *deadline);

        let mut fired = 0;
        for (_, id, repeating, callback) in due {
            // An earlier callback in this batch may have cancelled it.
            if !self.is_active(id) {
                continue;
            }
            if !repeating {
                self.entries.borrow_mut().remove(id);
            }
            callback();
            fired += 1;
        }
        if fired > 0 {
            log::trace!("timers: fired {fired}, {} pending", self.len());
        }
        fired
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl fmt::Debug for Timers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timers")
            .field("pending", &self.len())
            .field("next_deadline", &self.next_deadline())
            .finish()
    }
}
