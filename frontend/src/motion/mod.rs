//! Scroll- and hover-driven animation of page elements.
//!
//! `registry` holds everything that is animating and knows nothing about the
//! browser; `dom` plugs it into `web-sys` and Yew.

pub mod dom;
pub mod easing;
pub mod registry;
pub mod trigger;
pub mod tween;
pub mod value;

pub use dom::{use_motion_section, use_motion_with_deps, Motion, Query};
pub use easing::{Ease, Easing};
pub use registry::{HoverEffect, ScrollAnimation, TweenRequest};
pub use trigger::{Anchor, RangeEnd, TogglePolicy, TriggerRange};
pub use tween::{Repeat, TweenSpec};
pub use value::{Rgba, Shadow, VisualState};
