//! TUI pane rendering modules
//!
//! - [`source`]: snippet display with the current step's line marked
//! - [`array`]: boxes for each array, swap motion and pointer markers
//! - [`narration`]: what the current step does, in words
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane module exports a `render_*` function and the data struct it
//! reads from.

pub mod array;
pub mod narration;
pub mod source;
pub mod status;

pub use array::{render_array_pane, ArrayRenderData};
pub use narration::{render_narration_pane, NarrationRenderData};
pub use source::{render_source_pane, SourceScrollState};
pub use status::{render_status_bar, StatusRenderData};
