// Step generator: live simulation state and step recording

use super::classify::{classify, AlgorithmShape};
use crate::memory::{Pointers, Value, Variables};
use crate::parser::{tokenize, SourceLine};
use crate::snapshot::{Step, StepKind, StepTrace};
use tracing::{debug, trace};

/// Runs one snippet through initialization and its matching simulator
pub struct StepGenerator {
    /// Trimmed, non-empty source lines
    pub(super) lines: Vec<SourceLine>,

    /// Live variables, mutated as the simulation runs
    pub(super) variables: Variables,

    /// Live loop/scan indices
    pub(super) pointers: Pointers,

    /// Recorded history
    trace: StepTrace,
}

impl StepGenerator {
    pub fn new(source: &str) -> Self {
        StepGenerator {
            lines: tokenize(source),
            variables: Variables::new(),
            pointers: Pointers::new(),
            trace: StepTrace::new(),
        }
    }

    /// Run initialization and simulation, returning the finished trace
    pub fn run(mut self) -> StepTrace {
        self.initialize_variables();

        let shape = classify(&self.lines);
        debug!(shape = shape.name(), lines = self.lines.len(), "classified snippet");

        match shape {
            AlgorithmShape::AdjacentSwapSort => self.simulate_sort(),
            AlgorithmShape::TwoPointerReversal => self.simulate_reversal(),
            AlgorithmShape::LinearSearch => self.simulate_search(),
            AlgorithmShape::Unrecognized => self.simulate_generic(),
        }

        debug!(steps = self.trace.len(), "generated step trace");
        self.trace
    }

    /// Record a step with a full copy of the current state
    pub(super) fn record(
        &mut self,
        line: usize,
        kind: StepKind,
        description: String,
        highlights: &[&str],
        highlighted_indices: &[usize],
    ) {
        debug_assert!(kind != StepKind::Swap, "swap steps go through record_swap");
        self.push_step(line, kind, description, highlights, highlighted_indices, None);
    }

    /// Record the animation trigger for an exchange of two logical positions
    pub(super) fn record_swap(&mut self, description: String, highlights: &[&str], a: usize, b: usize) {
        self.push_step(0, StepKind::Swap, description, highlights, &[], Some((a, b)));
    }

    fn push_step(
        &mut self,
        line: usize,
        kind: StepKind,
        description: String,
        highlights: &[&str],
        highlighted_indices: &[usize],
        swap_indices: Option<(usize, usize)>,
    ) {
        let id = self.trace.next_id();
        trace!(%id, %kind, line, "{}", description);
        self.trace.push(Step {
            id,
            line,
            kind,
            description,
            variables: self.variables.clone(),
            pointers: self.pointers.clone(),
            highlights: highlights.iter().map(|h| h.to_string()).collect(),
            highlighted_indices: highlighted_indices.to_vec(),
            swap_indices,
        });
    }

    /// Set a loop index, mirrored into the variable table
    pub(super) fn set_index(&mut self, name: &str, value: i64) {
        self.pointers.insert(name, value);
        self.variables.insert(name, Value::Int(value));
    }

    /// Keep `name` as a variable but stop treating it as an index
    ///
    /// Scalar declarations register every integer as a pointer; a swap
    /// temporary holds element values, not positions.
    pub(super) fn demote_to_value(&mut self, name: &str) {
        self.pointers.remove(name);
    }

    /// Overwrite one element of an array variable in place
    pub(super) fn write_element(&mut self, array: &str, index: usize, value: i64) {
        if let Some(slot) = self
            .variables
            .get_mut(array)
            .and_then(Value::as_array_mut)
            .and_then(|values| values.get_mut(index))
        {
            *slot = value;
        }
    }

    /// Name and current elements of the array the simulators operate on
    pub(super) fn working_array(&self) -> Option<(String, Vec<i64>)> {
        self.variables
            .first_array()
            .map(|(name, values)| (name.to_string(), values.to_vec()))
    }
}
