//! Source snippet recognition
//!
//! This is not a full parser. It recognizes just enough of a Java-like
//! snippet to seed a simulation:
//! - [`lines`]: split text into trimmed, numbered lines
//! - [`declarations`]: array-literal and integer declarations
//! - [`expressions`]: the small expression ladder used by declarations
//!
//! Unrecognized text is ignored rather than rejected.

pub mod declarations;
pub mod expressions;
pub mod lines;

pub use declarations::{parse_declaration, Declaration};
pub use expressions::evaluate;
pub use lines::{tokenize, SourceLine};
