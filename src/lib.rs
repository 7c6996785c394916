//! # Introduction
//!
//! algoviz turns a short Java-like array snippet into a sequence of
//! narrated steps and plays them back in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), animating element swaps as they
//! happen.
//!
//! ## Pipeline
//!
//! ```text
//! Source → lines → classify → simulator → StepTrace → PlaybackController → TUI
//! ```
//!
//! 1. [`parser`]: splits the snippet into lines and reads `int` and `int[]`
//!    declarations and small expressions.
//! 2. [`simulator`]: recognizes the algorithm by keyword and re-enacts it,
//!    recording a [`snapshot::Step`] after every micro-operation.
//! 3. [`memory`]: the insertion-ordered variable and pointer tables each
//!    step owns a copy of.
//! 4. [`playback`]: the play/pause/step state machine and the swap
//!    animation record the renderer follows.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Recognized shapes
//!
//! Adjacent-swap (bubble) sort, two-pointer reversal and linear search.
//! Anything else gets its declarations and `++` increments narrated.

pub mod config;
pub mod memory;
pub mod parser;
pub mod playback;
pub mod samples;
pub mod simulator;
pub mod snapshot;
pub mod ui;
