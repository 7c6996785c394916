// Step snapshots recorded by the simulators

use crate::memory::{Pointers, Variables};
use std::fmt;

/// What kind of micro-operation a step narrates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Declaration,
    Assignment,
    Comparison,
    Loop,
    Swap,
    Completion,
}

impl StepKind {
    /// Upper-case label used by the narration pane and `--trace`
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Declaration => "DECLARATION",
            StepKind::Assignment => "ASSIGNMENT",
            StepKind::Comparison => "COMPARISON",
            StepKind::Loop => "LOOP",
            StepKind::Swap => "SWAP",
            StepKind::Completion => "COMPLETION",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Monotonic step identifier, displayed as `step-N`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepId(pub usize);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step-{}", self.0)
    }
}

/// Full snapshot of simulation state after one micro-operation
///
/// `variables` and `pointers` are owned copies taken when the step was
/// recorded. They describe the whole state at that instant, not a diff.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub id: StepId,
    /// 1-based source line, or 0 for steps synthesized by a simulator
    pub line: usize,
    pub kind: StepKind,
    pub description: String,
    pub variables: Variables,
    pub pointers: Pointers,
    /// Variable names to emphasize
    pub highlights: Vec<String>,
    /// Array positions to emphasize
    pub highlighted_indices: Vec<usize>,
    /// Logical positions exchanged; only ever set on `Swap` steps
    pub swap_indices: Option<(usize, usize)>,
}

impl Step {
    pub fn is_highlighted(&self, name: &str) -> bool {
        self.highlights.iter().any(|h| h == name)
    }
}

/// Append-only, ordered sequence of steps produced by one generation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepTrace {
    steps: Vec<Step>,
}

impl StepTrace {
    pub fn new() -> Self {
        StepTrace { steps: Vec::new() }
    }

    /// Append a step; only the generator writes to a trace
    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Id the next pushed step will carry
    pub(crate) fn next_id(&self) -> StepId {
        StepId(self.steps.len())
    }

    /// Get a step by position
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Take ownership of the recorded steps
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a StepTrace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
