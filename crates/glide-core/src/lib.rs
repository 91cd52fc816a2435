//! # Signals, Scopes, and Timers
//!
//! Glide's engine crates are plain state machines. This crate holds the small
//! runtime they lean on so a host (a GPU renderer, a DOM binding, a test) can
//! drive them from its own event loop:
//!
//! - `Signal<T>`: observable value a renderer subscribes to.
//! - `Scope` / `Dispose`: per-instance cleanup, run on teardown.
//! - `Clock` / `Timers`: injectable time and a cooperative timer queue.
//! - `PointerEvent`: pointer input in widget-local coordinates.
//!
//! ## Signals
//!
//! ```rust
//! use glide_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Subscribers are called after every `set`/`update` and can be removed with
//! `unsubscribe`.
//!
//! ## Scopes
//!
//! Anything that must stop when a widget goes away (intervals, listeners)
//! registers a cleanup in the widget's `Scope`:
//!
//! ```rust
//! use glide_core::*;
//!
//! let scope = Scope::new();
//! scope.effect(|| {
//!     log::debug!("mounted");
//!     on_unmount(|| log::debug!("unmounted"))
//! });
//! scope.dispose();
//! assert!(scope.is_disposed());
//! ```
//!
//! There is no ambient "current scope": every owner passes its scope
//! explicitly, so two instances never share cleanup state.

pub mod clock;
pub mod effects;
pub mod geometry;
pub mod input;
pub mod scope;
pub mod signal;
pub mod timer;

pub use clock::*;
pub use effects::*;
pub use geometry::*;
pub use input::*;
pub use scope::*;
pub use signal::*;
pub use timer::*;
