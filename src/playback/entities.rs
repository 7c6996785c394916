//! Render entities derived from a step
//!
//! Entities are what the renderer draws: one [`ArrayEntity`] per array
//! variable and one [`PointerEntity`] per pointer that has an array to point
//! into. They are recomputed from the current step's snapshot on every
//! position change and are never stored in the trace.

use crate::snapshot::Step;
use std::fmt;

/// 24-bit color shared with the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

pub const BLUE: Rgb = Rgb(0x3b, 0x82, 0xf6);
pub const RED: Rgb = Rgb(0xef, 0x44, 0x44);
pub const GREEN: Rgb = Rgb(0x10, 0xb9, 0x81);
pub const ORANGE: Rgb = Rgb(0xf5, 0x9e, 0x0b);
pub const PURPLE: Rgb = Rgb(0x8b, 0x5c, 0xf6);

/// Anchor in renderer space
pub type Position = [f32; 3];

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayEntity {
    pub name: String,
    pub values: Vec<i64>,
    pub position: Position,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerEntity {
    pub name: String,
    /// Logical position pointed at; may fall outside the array
    pub index: i64,
    pub target_array: String,
    pub color: Rgb,
    pub position: Position,
}

/// Everything the renderer needs for one step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderEntities {
    pub arrays: Vec<ArrayEntity>,
    pub pointers: Vec<PointerEntity>,
}

impl RenderEntities {
    pub fn from_step(step: &Step) -> Self {
        RenderEntities {
            arrays: derive_arrays(step),
            pointers: derive_pointers(step),
        }
    }

    pub fn array(&self, name: &str) -> Option<&ArrayEntity> {
        self.arrays.iter().find(|a| a.name == name)
    }
}

/// One entity per array variable, laid out left to right
pub fn derive_arrays(step: &Step) -> Vec<ArrayEntity> {
    step.variables
        .iter()
        .filter_map(|(name, value)| value.as_array().map(|values| (name, values)))
        .enumerate()
        .map(|(k, (name, values))| ArrayEntity {
            name: name.to_string(),
            values: values.to_vec(),
            position: [(k as f32 * 10.0) - 5.0, 0.0, 0.0],
            color: if step.is_highlighted(name) { RED } else { BLUE },
        })
        .collect()
}

/// One entity per pointer, all aimed at the first array of the snapshot
///
/// Without an array there is nothing to point into and no pointer is emitted.
pub fn derive_pointers(step: &Step) -> Vec<PointerEntity> {
    let Some((target, _)) = step.variables.first_array() else {
        return Vec::new();
    };

    step.pointers
        .iter()
        .enumerate()
        .map(|(k, (name, &index))| {
            let k = k as f32;
            PointerEntity {
                name: name.to_string(),
                index,
                target_array: target.to_string(),
                color: if step.is_highlighted(name) {
                    ORANGE
                } else {
                    pointer_color(name)
                },
                position: [0.0, -2.5 - k * 0.8, k * 0.3],
            }
        })
        .collect()
}

/// Color by conventional role of the index name
fn pointer_color(name: &str) -> Rgb {
    match name {
        "j" => ORANGE,
        "start" => BLUE,
        "end" => RED,
        "temp" => PURPLE,
        _ => GREEN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{Pointers, Value, Variables};
    use crate::snapshot::{StepId, StepKind};

    fn step(variables: Variables, pointers: Pointers, highlights: &[&str]) -> Step {
        Step {
            id: StepId(0),
            line: 0,
            kind: StepKind::Loop,
            description: String::new(),
            variables,
            pointers,
            highlights: highlights.iter().map(|h| h.to_string()).collect(),
            highlighted_indices: vec![],
            swap_indices: None,
        }
    }

    #[test]
    fn test_arrays_and_pointers_follow_snapshot() {
        let mut vars = Variables::new();
        vars.insert("n", Value::Int(3));
        vars.insert("arr", Value::Array(vec![3, 1, 2]));
        let mut ptrs = Pointers::new();
        ptrs.insert("i", 0);
        ptrs.insert("j", 1);

        let entities = RenderEntities::from_step(&step(vars, ptrs, &["j"]));

        assert_eq!(entities.arrays.len(), 1);
        assert_eq!(entities.arrays[0].values, vec![3, 1, 2]);
        assert_eq!(entities.arrays[0].position, [-5.0, 0.0, 0.0]);
        assert_eq!(entities.arrays[0].color, BLUE);

        assert_eq!(entities.pointers.len(), 2);
        assert_eq!(entities.pointers[0].target_array, "arr");
        assert_eq!(entities.pointers[0].color, GREEN);
        assert_eq!(entities.pointers[1].color, ORANGE);
        assert!((entities.pointers[1].position[1] + 3.3).abs() < 1e-5);
    }

    #[test]
    fn test_pointers_without_array_are_omitted() {
        let mut ptrs = Pointers::new();
        ptrs.insert("i", 4);
        let entities = RenderEntities::from_step(&step(Variables::new(), ptrs, &[]));
        assert!(entities.arrays.is_empty());
        assert!(entities.pointers.is_empty());
    }

    #[test]
    fn test_highlighted_array_is_red() {
        let mut vars = Variables::new();
        vars.insert("arr", Value::Array(vec![1]));
        let entities = RenderEntities::from_step(&step(vars, Pointers::new(), &["arr"]));
        assert_eq!(entities.arrays[0].color, RED);
        assert_eq!(RED.to_string(), "#ef4444");
    }
}
