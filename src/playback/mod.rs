//! Trace playback
//!
//! - [`controller`]: [`PlaybackController`], the `Idle → Playing → Completed`
//!   state machine over a [`StepTrace`](crate::snapshot::StepTrace)
//! - [`entities`]: render entities derived from the current step
//! - [`swap`]: the swap-animation side channel and its fixed-delay clear
//! - [`clock`]: injectable time source
//!
//! Everything here runs on the host's event-loop thread. Timers are polled
//! through [`PlaybackController::tick`], nothing is spawned.

pub mod clock;
pub mod controller;
pub mod entities;
pub mod swap;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{
    PlaybackConfig, PlaybackController, PlaybackEvent, PlaybackState, ResetHook, SpeedPreset,
};
pub use entities::{ArrayEntity, PointerEntity, RenderEntities, Rgb};
pub use swap::{SwapAnimation, SwapCoordinator, SWAP_CLEAR_TIMEOUT};
