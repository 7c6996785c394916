// Linear search simulation

use super::engine::StepGenerator;
use crate::memory::value::join_values;
use crate::snapshot::StepKind;

impl StepGenerator {
    /// Scan the first array variable for the integer variable `target`
    ///
    /// Stops at the first match; no steps are produced past it.
    pub(super) fn simulate_search(&mut self) {
        let Some((name, arr)) = self.working_array() else {
            return;
        };
        let Some(target) = self.variables.int("target") else {
            return;
        };
        let arr_name = name.as_str();

        self.record(
            0,
            StepKind::Loop,
            format!(
                "Starting Linear Search for target = {} in array [{}]",
                target,
                join_values(&arr)
            ),
            &[arr_name, "target"],
            &[],
        );

        for (i, &value) in arr.iter().enumerate() {
            self.set_index("i", i as i64);
            self.record(
                0,
                StepKind::Loop,
                format!("Checking position {} (i = {})", i, i),
                &["i"],
                &[i],
            );

            let is_match = value == target;
            self.record(
                0,
                StepKind::Comparison,
                format!(
                    "Compare {}[{}] = {} with target = {} → {}",
                    arr_name,
                    i,
                    value,
                    target,
                    if is_match { "FOUND!" } else { "NOT FOUND" }
                ),
                &[arr_name, "target"],
                &[i],
            );

            if is_match {
                self.record(
                    0,
                    StepKind::Completion,
                    format!("Target {} found at index {}!", target, i),
                    &[arr_name],
                    &[i],
                );
                return;
            }
        }

        self.record(
            0,
            StepKind::Completion,
            format!("Target {} not found in the array", target),
            &[arr_name],
            &[],
        );
    }
}
