// Two-pointer in-place reversal simulation

use super::engine::StepGenerator;
use crate::memory::value::join_values;
use crate::memory::Value;
use crate::snapshot::StepKind;

impl StepGenerator {
    /// Reverse the first array variable with `start`/`end` pointers
    pub(super) fn simulate_reversal(&mut self) {
        let Some((name, mut arr)) = self.working_array() else {
            return;
        };
        let arr_name = name.as_str();
        self.demote_to_value("temp");

        let mut start: i64 = 0;
        let mut end: i64 = arr.len() as i64 - 1;
        self.set_index("start", start);
        self.set_index("end", end);

        self.record(
            0,
            StepKind::Loop,
            format!("Starting Array Reversal. Initial: [{}]", join_values(&arr)),
            &[arr_name, "start", "end"],
            &endpoints(start, end),
        );

        let mut iteration = 1;
        while start < end {
            // start >= 0 and end > start, so both are valid positions
            let (s, e) = (start as usize, end as usize);

            self.record(
                0,
                StepKind::Comparison,
                format!("Check condition: start({}) < end({}) → TRUE (continue)", start, end),
                &["start", "end"],
                &[s, e],
            );

            let temp = arr[s];
            self.variables.insert("temp", Value::Int(temp));
            self.record(
                0,
                StepKind::Assignment,
                format!("Store {}[start] = {}[{}] = {} in temp", arr_name, arr_name, s, temp),
                &["temp", arr_name],
                &[s],
            );

            arr[s] = arr[e];
            self.write_element(arr_name, s, arr[e]);
            self.record(
                0,
                StepKind::Assignment,
                format!(
                    "Copy {}[end] = {}[{}] = {} to {}[{}]",
                    arr_name, arr_name, e, arr[s], arr_name, s
                ),
                &[arr_name],
                &[s],
            );

            arr[e] = temp;
            self.write_element(arr_name, e, temp);
            self.record(
                0,
                StepKind::Assignment,
                format!("Copy temp = {} to {}[{}]", temp, arr_name, e),
                &[arr_name],
                &[e],
            );

            self.record_swap(
                format!("Iteration {}: swapped positions {} and {}", iteration, s, e),
                &[arr_name],
                s,
                e,
            );

            start += 1;
            end -= 1;
            self.set_index("start", start);
            self.set_index("end", end);

            self.record(
                0,
                StepKind::Assignment,
                format!("Move start pointer forward to {}", start),
                &["start"],
                &[],
            );
            self.record(
                0,
                StepKind::Assignment,
                format!("Move end pointer backward to {}", end),
                &["end"],
                &[],
            );

            iteration += 1;
        }

        self.record(
            0,
            StepKind::Comparison,
            format!("Check condition: start({}) < end({}) → FALSE (stop)", start, end),
            &["start", "end"],
            &endpoints(start, end),
        );

        self.record(
            0,
            StepKind::Completion,
            format!("Array Reversal completed! Final array: [{}]", join_values(&arr)),
            &[arr_name],
            &[],
        );
    }
}

/// Highlightable positions among the two pointers; negative positions are dropped
fn endpoints(start: i64, end: i64) -> Vec<usize> {
    [start, end]
        .into_iter()
        .filter_map(|p| usize::try_from(p).ok())
        .collect()
}
