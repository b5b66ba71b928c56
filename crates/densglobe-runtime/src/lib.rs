//! Frame-driven state: the crossfade between datasets and the redraw scheduler.
#![forbid(unsafe_code)]

mod crossfade;
mod scheduler;
mod tween;

pub use crossfade::{CrossfadeController, CrossfadeState, MorphBinding};
pub use scheduler::{RedrawReason, RedrawScheduler};
pub use tween::{Ease, Tween};
