//! Tweenkit is a property-tweening and timeline-scheduling engine.
//!
//! The engine interpolates opaque property values on external targets:
//!
//! - Build a [`Tween`] against a target and a set of property goals
//! - Compose tweens (and nested timelines) into a [`Timeline`] with explicit
//!   offsets, composite repeat, and yoyo
//! - Fan one definition out across a target group with a [`StaggerSpec`]
//! - Drive playback from the frame clock via a [`Scheduler`], or scrub it
//!   from a continuous scroll signal via a [`ScrollBinding`]
//!
//! Tweenkit owns no targets and reads no clocks. Embedders inject a
//! [`PropertyTargets`] accessor and call [`Scheduler::tick`] from their frame
//! callback with elapsed deltas; scroll-bound entries are advanced by
//! measurements instead of the clock.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod animation;
pub mod engine;
pub mod scroll;

pub use crate::foundation::error::{TweenkitError, TweenkitResult};

pub use crate::animation::ease::{Curve, Ease, EaseDir};
pub use crate::animation::playback::{PlayState, RepeatSpec};
pub use crate::animation::stagger::{GridSpec, StaggerOrigin, StaggerSpec, distribute};
pub use crate::animation::timeline::{Timeline, TimelineBuilder};
pub use crate::animation::tween::{PropertyGoal, Tween, TweenBuilder};
pub use crate::animation::value::{Lerp, Unit, Value};
pub use crate::engine::scheduler::{AnimId, Scheduler, ScrollId};
pub use crate::engine::targets::{MemoryTargets, PropId, PropertyTargets, TargetId};
pub use crate::scroll::driver::{ScrollBinding, Scrub};
pub use crate::scroll::trigger::{Mark, TriggerRegion};
