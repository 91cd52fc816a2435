//! # Carousel instance
//!
//! `Carousel<T>` wires the pieces together for one mounted widget:
//!
//! - the item list and the derived [`SlideSet`],
//! - the [`PositionEngine`], fed by nav buttons, dots, drag and autoplay,
//! - the transition-end reconciler,
//! - an instance-local [`Timers`] queue and [`Autoplay`] interval,
//! - a [`Signal`] publishing every [`CarouselState`] change to the renderer.
//!
//! The host loop owns the timing: it forwards pointer events, calls
//! [`Carousel::on_transition_end`] when the strip animation completes, and
//! calls [`Carousel::tick`] to let autoplay run.
//!
//! ```rust
//! use std::rc::Rc;
//! use glide_carousel::*;
//! use glide_core::ManualClock;
//!
//! let clock = ManualClock::default();
//! let config = CarouselConfig::default().infinite(true);
//! let carousel = Carousel::with_clock(["a", "b", "c"], config, Rc::new(clock)).unwrap();
//! carousel.set_slide_width(320.0);
//!
//! carousel.go_previous();
//! assert_eq!(carousel.current_index(), 3);
//! assert_eq!(carousel.offset(), 0.0); // parked on the leading clone
//!
//! carousel.on_transition_end();
//! assert_eq!(carousel.offset(), 960.0);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use glide_core::{Clock, PointerEvent, Scope, Signal, Size, Timers, on_unmount, system_clock};

use crate::{
    Autoplay, CarouselConfig, CarouselState, ConfigError, CursorHint, Geometry, GestureOutcome,
    GestureTracker, Nav, PositionEngine, SlideSet, Snap, reconcile,
};

/// Where a navigation request came from; used for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSource {
    Button,
    Dot,
    Gesture,
    Autoplay,
}

/// One indicator dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dot {
    /// 0-based, as passed to [`Carousel::go_to_index`].
    pub index: usize,
    pub active: bool,
}

struct Inner<T> {
    config: CarouselConfig,
    items: Vec<Rc<T>>,
    slides: SlideSet<T>,
    engine: PositionEngine,
    gesture: GestureTracker,
    autoplay: Autoplay,
    /// Last measured viewport width, when the slide width is derived from it.
    viewport_width: Option<f32>,
}

struct Shared<T> {
    inner: RefCell<Inner<T>>,
    state: Signal<CarouselState>,
}

impl<T> Shared<T> {
    fn publish(&self) {
        let st = self.inner.borrow().engine.state();
        if self.state.get() != st {
            self.state.set(st);
        }
    }

    fn navigate(&self, source: NavSource, op: impl FnOnce(&mut PositionEngine) -> Nav) -> Nav {
        let nav = {
            let mut inner = self.inner.borrow_mut();
            let nav = op(&mut inner.engine);
            if nav.is_moved() {
                // The tick closure now acts on a new index; give it a full interval.
                inner.autoplay.restart();
                let st = inner.engine.state();
                log::debug!(
                    "carousel: {source:?} {nav:?} -> index {} offset {}",
                    st.current_index,
                    st.offset
                );
            } else {
                log::debug!("carousel: {source:?} ignored");
            }
            nav
        };
        self.publish();
        nav
    }
}

pub struct Carousel<T: 'static> {
    shared: Rc<Shared<T>>,
    timers: Rc<Timers>,
    scope: Scope,
}

impl<T: 'static> Carousel<T> {
    pub fn new(
        items: impl IntoIterator<Item = T>,
        config: CarouselConfig,
    ) -> Result<Self, ConfigError> {
        Self::with_clock(items, config, system_clock())
    }

    /// Mounts with an explicit clock (tests, or hosts with their own frame time).
    pub fn with_clock(
        items: impl IntoIterator<Item = T>,
        config: CarouselConfig,
        clock: Rc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let items: Vec<Rc<T>> = items.into_iter().map(Rc::new).collect();
        let slides = SlideSet::build(&items, config.slides_per_view, config.infinite);
        let geometry = Geometry::unmeasured(config.space_between, config.slides_per_view);
        let engine = PositionEngine::new(items.len(), geometry, config.infinite, config.speed);

        let timers = Rc::new(Timers::new(clock));
        let autoplay = Autoplay::new(timers.clone(), config.autoplay_interval());
        let state = Signal::new(engine.state());

        let shared = Rc::new(Shared {
            inner: RefCell::new(Inner {
                config,
                items,
                slides,
                engine,
                gesture: GestureTracker::new(),
                autoplay,
                viewport_width: None,
            }),
            state,
        });

        let weak = Rc::downgrade(&shared);
        shared.inner.borrow_mut().autoplay.bind(autoplay_tick(weak.clone()));

        let scope = Scope::new();
        scope.effect(|| {
            {
                let mut inner = shared.inner.borrow_mut();
                if inner.config.autoplay {
                    inner.autoplay.start();
                }
            }
            let timers = timers.clone();
            on_unmount(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.inner.borrow_mut().autoplay.stop();
                }
                timers.clear();
                log::debug!("carousel: unmounted");
            })
        });

        log::debug!(
            "carousel: mounted with {} items",
            shared.inner.borrow().engine.len()
        );
        Ok(Self {
            shared,
            timers,
            scope,
        })
    }

    pub fn state(&self) -> CarouselState {
        self.shared.state.get()
    }

    /// Renderer hook: subscribe to be told about every offset/duration change.
    pub fn state_signal(&self) -> Signal<CarouselState> {
        self.shared.state.clone()
    }

    pub fn current_index(&self) -> usize {
        self.state().current_index
    }

    pub fn offset(&self) -> f32 {
        self.state().offset
    }

    pub fn transition_duration_ms(&self) -> u32 {
        self.state().transition_duration_ms
    }

    pub fn len(&self) -> usize {
        self.shared.inner.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn config(&self) -> CarouselConfig {
        self.shared.inner.borrow().config.clone()
    }

    pub fn geometry(&self) -> Geometry {
        self.shared.inner.borrow().engine.geometry()
    }

    pub fn with_slides<R>(&self, f: impl FnOnce(&SlideSet<T>) -> R) -> R {
        f(&self.shared.inner.borrow().slides)
    }

    pub fn go_next(&self) -> Nav {
        self.shared.navigate(NavSource::Button, PositionEngine::go_next)
    }

    pub fn go_previous(&self) -> Nav {
        self.shared.navigate(NavSource::Button, PositionEngine::go_previous)
    }

    /// Dot click; `index` is 0-based.
    pub fn go_to_index(&self, index: usize) -> Nav {
        self.shared.navigate(NavSource::Dot, |e| e.go_to_index(index))
    }

    pub fn on_pointer(&self, event: &PointerEvent) -> GestureOutcome {
        let outcome = {
            let mut inner = self.shared.inner.borrow_mut();
            let Inner {
                gesture,
                engine,
                autoplay,
                ..
            } = &mut *inner;
            let outcome = gesture.handle_pointer(event, engine);
            if let GestureOutcome::Released(release, nav) = outcome {
                log::debug!("carousel: {:?} {release:?} -> {nav:?}", NavSource::Gesture);
                if nav.is_moved() {
                    autoplay.restart();
                }
            }
            outcome
        };
        if outcome != GestureOutcome::Ignored {
            self.shared.publish();
        }
        outcome
    }

    pub fn cursor(&self) -> CursorHint {
        self.shared.inner.borrow().gesture.cursor()
    }

    pub fn is_dragging(&self) -> bool {
        self.shared.inner.borrow().gesture.is_pressed()
    }

    /// The renderer finished animating to the last published offset.
    ///
    /// A drag held across the snap is re-anchored on the real slide.
    pub fn on_transition_end(&self) -> Snap {
        let snap = {
            let mut inner = self.shared.inner.borrow_mut();
            let Inner { gesture, engine, .. } = &mut *inner;
            let snap = reconcile(engine);
            if snap != Snap::None && gesture.rebase(engine) {
                log::debug!("carousel: drag re-anchored after {snap:?}");
            }
            snap
        };
        if snap != Snap::None {
            self.shared.publish();
        }
        snap
    }

    /// Runs due timers (autoplay). Returns how many fired.
    pub fn tick(&self) -> usize {
        self.timers.run_due()
    }

    pub fn timers(&self) -> Rc<Timers> {
        self.timers.clone()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.shared.inner.borrow().autoplay.is_running()
    }

    /// Measured width of one slide in px.
    pub fn set_slide_width(&self, slide_width: f32) {
        {
            let mut inner = self.shared.inner.borrow_mut();
            inner.viewport_width = None;
            let geometry = inner.engine.geometry().with_slide_width(slide_width);
            inner.engine.set_geometry(geometry);
        }
        self.shared.publish();
    }

    /// Measured viewport; the slide width is derived from it.
    pub fn measure_viewport(&self, viewport: Size) {
        {
            let mut inner = self.shared.inner.borrow_mut();
            inner.viewport_width = Some(viewport.width);
            let geometry = Geometry::from_viewport_size(
                viewport,
                inner.config.space_between,
                inner.config.slides_per_view,
            );
            inner.engine.set_geometry(geometry);
        }
        self.shared.publish();
    }

    /// Replaces the items. The slide set is rebuilt and the index clamped.
    pub fn set_items(&self, items: impl IntoIterator<Item = T>) {
        {
            let mut inner = self.shared.inner.borrow_mut();
            inner.items = items.into_iter().map(Rc::new).collect();
            inner.slides = SlideSet::build(
                &inner.items,
                inner.config.slides_per_view,
                inner.config.infinite,
            );
            let len = inner.items.len();
            inner.engine.set_len(len);
            inner.autoplay.restart();
            log::debug!("carousel: items replaced, now {len}");
        }
        self.shared.publish();
    }

    pub fn set_config(&self, config: CarouselConfig) -> Result<(), ConfigError> {
        config.validate()?;
        {
            let mut inner = self.shared.inner.borrow_mut();
            let old = std::mem::replace(&mut inner.config, config.clone());

            if old.slides_per_view != config.slides_per_view || old.infinite != config.infinite {
                inner.slides =
                    SlideSet::build(&inner.items, config.slides_per_view, config.infinite);
            }

            let geometry = match inner.viewport_width {
                Some(viewport) => {
                    Geometry::from_viewport(viewport, config.space_between, config.slides_per_view)
                }
                None => Geometry::new(
                    inner.engine.geometry().slide_width,
                    config.space_between,
                    config.slides_per_view,
                ),
            };
            inner.engine.set_infinite(config.infinite);
            inner.engine.set_speed(config.speed);
            inner.engine.set_geometry(geometry);

            inner.autoplay.set_interval(config.autoplay_interval());
            match (old.autoplay, config.autoplay) {
                (false, true) => inner.autoplay.start(),
                (true, false) => inner.autoplay.stop(),
                _ => inner.autoplay.restart(),
            }
        }
        self.shared.publish();
        Ok(())
    }

    /// Indicator dots, empty unless `show_dots` is on.
    pub fn dots(&self) -> Vec<Dot> {
        let inner = self.shared.inner.borrow();
        if !inner.config.show_dots {
            return Vec::new();
        }
        let current = inner.engine.current_index();
        (0..inner.items.len())
            .map(|index| Dot {
                index,
                active: index + 1 == current,
            })
            .collect()
    }

    /// Whether prev/next controls should be rendered.
    pub fn shows_nav(&self) -> bool {
        let inner = self.shared.inner.borrow();
        inner.config.show_nav && inner.engine.can_go_next()
    }

    /// Tears the instance down: autoplay cancelled, pending timers dropped.
    /// Dropping the carousel does the same.
    pub fn unmount(self) {
        self.scope.dispose();
    }

    pub fn is_mounted(&self) -> bool {
        !self.scope.is_disposed()
    }
}

fn autoplay_tick<T: 'static>(weak: Weak<Shared<T>>) -> impl Fn() + 'static {
    move || {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        if shared.inner.borrow().gesture.is_pressed() {
            log::trace!("autoplay: skipped while dragging");
            return;
        }
        shared.navigate(NavSource::Autoplay, PositionEngine::go_next);
    }
}

impl<T: 'static> fmt::Debug for Carousel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.shared.inner.borrow();
        f.debug_struct("Carousel")
            .field("state", &inner.engine.state())
            .field("slides", &inner.slides.to_string())
            .field("config", &inner.config)
            .field("autoplay", &inner.autoplay)
            .finish()
    }
}
