//! # Carousel engine
//!
//! A carousel shows a fixed viewport onto a strip of equally sized slides and
//! moves that strip by changing one number, the offset. This crate computes
//! that number; drawing the strip is left to the host.
//!
//! The moving parts, leaf first:
//!
//! - [`SlideSet`]: the rendered strip, with clones at both ends in infinite
//!   mode.
//! - [`Geometry`]: measured slide width, gutter, slides per view.
//! - [`PositionEngine`]: current index, offset and transition duration for
//!   next / previous / go-to-index.
//! - [`reconcile()`]: after an animated wrap, swaps the clone for the real
//!   slide with the animation off.
//! - [`GestureTracker`]: single-pointer drag.
//! - [`Autoplay`]: interval on the instance's timer queue.
//! - [`Carousel`]: one mounted widget owning all of the above.
//!
//! ## Infinite mode in one picture
//!
//! ```text
//! strip:   5'  1   2   3   4   5   1'
//! slot:    0   1   2   3   4   5   6
//!
//! at 5, go_next  -> index 1, animate to slot 6 (clone of 1)
//! transition end -> duration 0, jump to slot 1 (the real 1)
//! ```
//!
//! The viewer sees the strip keep moving forward; the jump back happens with
//! the animation disabled and lands on an identical-looking slide.

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod reconcile;
pub mod slides;

pub use autoplay::Autoplay;
pub use carousel::{Carousel, Dot, NavSource};
pub use config::{CarouselConfig, DEFAULT_AUTOPLAY_MS, DEFAULT_SPEED_MS};
pub use engine::{CarouselState, Nav, PositionEngine};
pub use error::ConfigError;
pub use geometry::Geometry;
pub use gesture::{CursorHint, GestureOutcome, GestureState, GestureTracker, Release};
pub use reconcile::{Snap, reconcile};
pub use slides::{Slide, SlideSet};
