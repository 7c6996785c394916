// Fallback simulation for unrecognized snippets

use super::engine::StepGenerator;
use crate::snapshot::StepKind;

impl StepGenerator {
    /// Walk the lines and apply `name++` to known pointers
    pub(super) fn simulate_generic(&mut self) {
        let increments: Vec<(usize, String)> = self
            .lines
            .iter()
            .filter(|line| line.text.contains("++"))
            .map(|line| {
                let name = line.text.replace("++", "").replace(';', "");
                (line.number, name.trim().to_string())
            })
            .collect();

        for (line, name) in increments {
            let Some(&current) = self.pointers.get(&name) else {
                continue;
            };
            let value = current.wrapping_add(1);
            self.set_index(&name, value);
            self.record(
                line,
                StepKind::Assignment,
                format!("Increment {} to {}", name, value),
                &[name.as_str()],
                &[],
            );
        }
    }
}
