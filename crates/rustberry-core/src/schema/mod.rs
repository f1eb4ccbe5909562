mod builtins;
mod schema_build_error;
mod type_registry;
mod type_registry_builder;
mod type_validation_error;

pub use schema_build_error::SchemaBuildError;
pub use type_registry::TypeRegistry;
pub use type_registry_builder::TypeRegistryBuilder;
pub use type_validation_error::TypeValidationError;

#[cfg(test)]
mod tests;
