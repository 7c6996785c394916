// Adjacent-exchange (bubble) sort simulation

use super::engine::StepGenerator;
use crate::memory::value::join_values;
use crate::memory::Value;
use crate::snapshot::StepKind;

impl StepGenerator {
    /// Bubble sort over the first array variable
    ///
    /// Every exchange is narrated as the textbook three-move temp swap and
    /// then closed by a single `Swap` step that carries the two positions.
    pub(super) fn simulate_sort(&mut self) {
        let Some((name, mut arr)) = self.working_array() else {
            return;
        };
        let arr_name = name.as_str();
        self.demote_to_value("temp");
        let n = arr.len();

        self.record(
            0,
            StepKind::Loop,
            format!("Starting Bubble Sort on array of {} elements", n),
            &[arr_name],
            &[],
        );

        let passes = n.saturating_sub(1);
        for i in 0..passes {
            self.set_index("i", i as i64);
            self.record(
                0,
                StepKind::Loop,
                format!("Outer loop: pass {} of {} (i = {})", i + 1, passes, i),
                &["i"],
                &[],
            );

            for j in 0..(n - i - 1) {
                self.set_index("j", j as i64);
                self.record(
                    0,
                    StepKind::Loop,
                    format!("Inner loop: comparing positions {} and {} (j = {})", j, j + 1, j),
                    &["j"],
                    &[j, j + 1],
                );

                let left = arr[j];
                let right = arr[j + 1];
                let need_swap = left > right;
                self.record(
                    0,
                    StepKind::Comparison,
                    format!(
                        "Compare {}[{}] = {} with {}[{}] = {} → {}",
                        arr_name,
                        j,
                        left,
                        arr_name,
                        j + 1,
                        right,
                        if need_swap { "SWAP NEEDED" } else { "NO SWAP" }
                    ),
                    &[arr_name],
                    &[j, j + 1],
                );

                if !need_swap {
                    continue;
                }

                self.variables.insert("temp", Value::Int(left));
                self.record(
                    0,
                    StepKind::Assignment,
                    format!("Store {}[{}] = {} in temp", arr_name, j, left),
                    &["temp", arr_name],
                    &[j],
                );

                arr[j] = right;
                self.write_element(arr_name, j, right);
                self.record(
                    0,
                    StepKind::Assignment,
                    format!("Move {}[{}] = {} to position {}", arr_name, j + 1, right, j),
                    &[arr_name],
                    &[j],
                );

                arr[j + 1] = left;
                self.write_element(arr_name, j + 1, left);
                self.record(
                    0,
                    StepKind::Assignment,
                    format!("Move temp = {} to position {}", left, j + 1),
                    &[arr_name],
                    &[j + 1],
                );

                self.record_swap(
                    format!("Swap completed: {} and {} exchanged positions", left, right),
                    &[arr_name],
                    j,
                    j + 1,
                );
            }

            let settled = n - 1 - i;
            self.record(
                0,
                StepKind::Loop,
                format!(
                    "Pass {} completed: largest element ({}) is now at position {}",
                    i + 1,
                    arr[settled],
                    settled
                ),
                &[arr_name],
                &[settled],
            );
        }

        self.record(
            0,
            StepKind::Completion,
            format!("Bubble Sort completed! Final sorted array: [{}]", join_values(&arr)),
            &[arr_name],
            &[],
        );
    }
}
