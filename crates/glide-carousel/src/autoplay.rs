use std::fmt;
use std::rc::Rc;

use glide_core::{TimerId, Timers};
use web_time::Duration;

/// Interval that advances one carousel instance.
///
/// The handle lives here, next to the instance's `Timers`, and is cancelled
/// on `stop`, on every `restart`, and when the value is dropped.
pub struct Autoplay {
    timers: Rc<Timers>,
    interval: Duration,
    tick: Option<Rc<dyn Fn()>>,
    handle: Option<TimerId>,
}

impl Autoplay {
    pub fn new(timers: Rc<Timers>, interval: Duration) -> Self {
        Self {
            timers,
            interval,
            tick: None,
            handle: None,
        }
    }

    /// Sets what a tick does. Takes effect on the next `start`/`restart`.
    pub fn bind(&mut self, tick: impl Fn() + 'static) {
        self.tick = Some(Rc::new(tick));
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some_and(|id| self.timers.is_active(id))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// (Re)registers the interval; the countdown starts from now.
    pub fn start(&mut self) {
        self.stop();
        let Some(tick) = self.tick.clone() else {
            log::warn!("autoplay: start without a bound tick");
            return;
        };
        self.handle = Some(self.timers.set_interval(self.interval, move || tick()));
        log::debug!("autoplay: every {:?}", self.interval);
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.handle.take() {
            self.timers.cancel(id);
        }
    }

    /// Replaces a running interval with a fresh one; no-op when stopped.
    pub fn restart(&mut self) {
        if self.handle.is_some() {
            self.start();
        }
    }

    pub fn set_interval(&mut self, interval: Duration) {
        if self.interval != interval {
            self.interval = interval;
            self.restart();
        }
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for Autoplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autoplay")
            .field("interval", &self.interval)
            .field("running", &self.is_running())
            .finish()
    }
}
