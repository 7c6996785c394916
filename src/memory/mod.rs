//! Live simulation state
//!
//! - [`value`]: tagged [`value::Value`] (integer or integer array)
//! - [`table`]: insertion-ordered [`table::Variables`] and [`table::Pointers`]
//!
//! The simulators mutate these tables freely; every recorded step takes an
//! owned clone, so history never aliases the live buffers.

pub mod table;
pub mod value;

pub use table::{Pointers, Table, Variables};
pub use value::Value;
