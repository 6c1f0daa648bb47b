//! Parser tests.
//!
//! - `parser`: precedence, associativity, grouping and tree shape
//! - `errors`: the three failure modes and their diagnostics

mod errors;
