//! Insertion-ordered name tables
//!
//! Variables and pointers are looked up by name but rendered in declaration
//! order, so a [`Table`] keeps a hash index next to the order names were
//! first inserted. Re-inserting an existing name updates it in place.

use super::value::Value;
use rustc_hash::FxHashMap;

/// Name → value map that remembers first-insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct Table<V> {
    values: FxHashMap<String, V>,
    insertion_order: Vec<String>,
}

/// Simulated variables (scalars and arrays)
pub type Variables = Table<Value>;

/// Loop and scan indices
pub type Pointers = Table<i64>;

impl<V> Table<V> {
    pub fn new() -> Self {
        Table {
            values: FxHashMap::default(),
            insertion_order: Vec::new(),
        }
    }

    /// Insert or overwrite a value, keeping the original position of the name
    pub fn insert(&mut self, name: impl Into<String>, value: V) {
        let name = name.into();
        if !self.values.contains_key(&name) {
            self.insertion_order.push(name.clone());
        }
        self.values.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.values.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut V> {
        self.values.get_mut(name)
    }

    /// Drop a name; later entries keep their relative order
    pub fn remove(&mut self, name: &str) -> Option<V> {
        let value = self.values.remove(name)?;
        self.insertion_order.retain(|n| n != name);
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.insertion_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insertion_order.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.insertion_order
            .iter()
            .filter_map(|name| self.values.get(name).map(|v| (name.as_str(), v)))
    }
}

impl<V> Default for Table<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl Table<Value> {
    /// Integer value of a variable, None for arrays and unknown names
    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    /// Elements of an array variable
    pub fn array(&self, name: &str) -> Option<&[i64]> {
        self.get(name).and_then(Value::as_array)
    }

    /// First array-valued variable in declaration order
    pub fn first_array(&self) -> Option<(&str, &[i64])> {
        self.iter()
            .find_map(|(name, value)| value.as_array().map(|values| (name, values)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_survives_overwrite() {
        let mut table: Pointers = Table::new();
        table.insert("j", 0);
        table.insert("i", 0);
        table.insert("j", 5);

        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![("j", &5), ("i", &0)]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut table: Pointers = Table::new();
        table.insert("i", 0);
        table.insert("temp", 0);
        table.insert("j", 1);

        assert_eq!(table.remove("temp"), Some(0));
        assert_eq!(table.remove("temp"), None);
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![("i", &0), ("j", &1)]);

        // Re-inserting a removed name appends it
        table.insert("temp", 4);
        assert_eq!(table.iter().last(), Some(("temp", &4)));
    }

    #[test]
    fn test_first_array_skips_scalars() {
        let mut vars = Variables::new();
        vars.insert("n", Value::Int(3));
        vars.insert("values", Value::Array(vec![3, 1, 2]));
        vars.insert("arr", Value::Array(vec![9]));

        let (name, values) = vars.first_array().unwrap();
        assert_eq!(name, "values");
        assert_eq!(values, &[3, 1, 2]);
        assert_eq!(vars.int("n"), Some(3));
        assert_eq!(vars.int("values"), None);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut vars = Variables::new();
        vars.insert("arr", Value::Array(vec![1, 2]));
        let snapshot = vars.clone();

        vars.get_mut("arr").and_then(Value::as_array_mut).unwrap()[0] = 99;

        assert_eq!(snapshot.array("arr"), Some(&[1, 2][..]));
        assert_eq!(vars.array("arr"), Some(&[99, 2][..]));
    }
}
