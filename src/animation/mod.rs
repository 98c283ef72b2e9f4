pub mod fan;
pub mod float;
pub mod scroll;
pub mod smoothing;

pub use fan::{CardTransform, FanLayout};
pub use float::{CardFloat, RingFloat};
pub use scroll::{ScrollMapper, ScrollState};
pub use smoothing::{decay_factor, Smoothed, SmoothedVec3};

/// Read-only per-frame snapshot handed to every animated view.
/// The scroll listener writes before the tick, the views read during
/// it; both run on the same single-threaded frame sequence.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub time: f32,
    pub dt: f32,
    pub active_index: f32,
    pub progress: f32,
}
