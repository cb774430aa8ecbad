//! Scroll-State Engine
//!
//! Derives progress, active section, parallax offsets and visibility flags
//! from a scroll sample and measured page geometry, turns them into
//! declarative bindings, and delivers viewport events to mounted pages.

pub mod bindings;
pub mod engine;
pub mod signal;

pub use bindings::{StyleBindings, VISIBLE_CLASS};
pub use engine::{
    active_section, is_visible, parallax_offset, scroll_progress, ParallaxOffset, ScrollEngine,
    ScrollFrame, ScrollSample, Visibility,
};
pub use signal::{ScrollListener, ScrollSignal, Subscription, ViewportEvent, ViewportEventKind};
