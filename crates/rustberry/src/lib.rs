pub use rustberry_core::*;

/// The lexer and parsers, for callers that only need syntax.
pub mod parser {
    pub use rustberry_parser::*;
}
