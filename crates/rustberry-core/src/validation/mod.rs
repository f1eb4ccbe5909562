//! Checks an executable document against a
//! [`TypeRegistry`](crate::schema::TypeRegistry).
//!
//! Each rule is a plain function from a document and a registry to the
//! diagnostics it finds. A [`Validator`] runs a list of rules and returns the
//! union of their results.

mod rules;
mod typed_walk;
mod utils;
mod validator;
mod variable_usages;

pub use validator::ValidationRule;
pub use validator::Validator;

#[cfg(test)]
mod tests;
