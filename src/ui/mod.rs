//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: application state and the keyboard event loop
//! - **[`panes`]**: stateless render functions for each visible pane
//! - **[`slots`]**: box identity, so swapped elements travel instead of blinking
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a snippet and
//! call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod slots;
pub mod theme;

pub use app::App;
