//! Simulation value representation
//!
//! The visualizer only ever tracks two shapes of data: plain integers and
//! ordered sequences of integers. [`Value`] tags which one a variable holds.

/// Value held by a simulated variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Array(Vec<i64>),
}

impl Value {
    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Array(_) => None,
        }
    }

    /// Get the array elements, returns None if not an Array
    pub fn as_array(&self) -> Option<&[i64]> {
        match self {
            Value::Array(values) => Some(values),
            Value::Int(_) => None,
        }
    }

    /// Mutable access to the array elements
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<i64>> {
        match self {
            Value::Array(values) => Some(values),
            Value::Int(_) => None,
        }
    }
}

/// Format a slice of elements as `a, b, c` for narration
pub fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
