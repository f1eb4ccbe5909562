//! The schema-aware half of the compiler.
//!
//! A [`Session`] owns one [`TypeRegistry`](schema::TypeRegistry) built from
//! SDL and one [`DocumentRegistry`](document::DocumentRegistry) of parsed
//! executable documents. Documents are validated against the registry by a
//! [`Validator`](validation::Validator), and can be handed to an execution
//! engine through the projections in [`bridge`].
//!
//! ```
//! use rustberry_core::Session;
//!
//! let mut session = Session::new();
//! session.set_schema("type Query { hello: String }").unwrap();
//!
//! let file_id = session.add_executable("{ hello }");
//! assert!(session.validate_file(file_id).unwrap().is_empty());
//!
//! let mirrored = session.to_mirrored_ast(file_id).unwrap();
//! assert_eq!(mirrored.definitions.len(), 1);
//! ```

pub mod bridge;
mod diagnostic;
pub mod document;
pub mod schema;
mod session;
mod session_error;
pub mod types;
pub mod validation;

pub use diagnostic::Diagnostic;
pub use diagnostic::GraphQLErrorRecord;
pub use diagnostic::RuleId;
pub use diagnostic::Severity;
pub use diagnostic::SourceLocation;
pub use diagnostic::UnknownRuleId;
pub use rustberry_parser::GraphQLSourceSpan;
pub use rustberry_parser::ast;
pub use session::Session;
pub use session_error::SessionError;

#[cfg(test)]
mod tests;
