// Variable initialization from declaration lines

use super::engine::StepGenerator;
use crate::memory::value::{join_values, Value};
use crate::parser::{evaluate, parse_declaration, Declaration};
use crate::snapshot::StepKind;

impl StepGenerator {
    /// Seed the tables from declarations, one declaration step per line
    ///
    /// Scalars are evaluated against whatever has been declared above them
    /// and are also registered as pointers, since any integer can act as a
    /// scan index later on.
    pub(super) fn initialize_variables(&mut self) {
        let declarations: Vec<(usize, Declaration)> = self
            .lines
            .iter()
            .filter_map(|line| parse_declaration(&line.text).map(|d| (line.number, d)))
            .collect();

        for (line, declaration) in declarations {
            match declaration {
                Declaration::Array { name, values } => {
                    let description = format!(
                        "Initialize array {} with {} elements: [{}]",
                        name,
                        values.len(),
                        join_values(&values)
                    );
                    self.variables.insert(name.as_str(), Value::Array(values));
                    self.record(line, StepKind::Declaration, description, &[name.as_str()], &[]);
                }
                Declaration::Scalar { name, expr } => {
                    let value = evaluate(&expr, &self.variables, &self.pointers);
                    self.set_index(&name, value);
                    self.record(
                        line,
                        StepKind::Declaration,
                        format!("Initialize variable {} = {}", name, value),
                        &[name.as_str()],
                        &[],
                    );
                }
            }
        }
    }
}
