//! loxt driver.
//!
//! Wires the phases together for the `loxt` binary and for integration
//! tests:
//!
//! ```text
//! source --lex--> TokenStream --parse--> Ast --visit--> S-expression
//! ```
//!
//! [`FrontEnd`] runs both phases over one source text and collects every
//! diagnostic. The `commands` module holds the CLI entry points.

pub mod commands;
mod front_end;
mod tracing_setup;

pub use front_end::FrontEnd;
pub use tracing_setup::init_tracing;
