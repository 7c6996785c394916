//! Step generation
//!
//! Turns a source snippet into a fully materialized [`StepTrace`]:
//!
//! ```text
//! Source → lines → declarations → classify → simulator → StepTrace
//! ```
//!
//! - [`engine`]: [`StepGenerator`], live state and step recording
//! - [`classify`]: maps a snippet onto one [`AlgorithmShape`]
//! - `init`: seeds variables from declarations
//! - `sort`, `reversal`, `search`, `generic`: one hand-written simulation per shape
//!
//! Simulators re-implement their algorithm directly; they do not interpret
//! the snippet line by line. Malformed input never fails, it just produces
//! a shorter trace.

pub mod classify;
pub mod engine;

mod generic;
mod init;
mod reversal;
mod search;
mod sort;

pub use classify::{classify, AlgorithmShape};
pub use engine::StepGenerator;

use crate::snapshot::StepTrace;

/// Generate the step trace for a snippet
pub fn generate(source: &str) -> StepTrace {
    StepGenerator::new(source).run()
}
