mod schema_build_error_tests;
mod type_registry_builder_tests;

use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistry;
use crate::schema::TypeValidationError;

/// The type validation errors of an SDL string that is expected to parse but
/// fail to build.
pub(crate) fn build_errors(sdl: &str) -> Vec<TypeValidationError> {
    match TypeRegistry::from_sdl(sdl) {
        Err(SchemaBuildError::TypeValidationErrors { errors }) => errors,
        Err(SchemaBuildError::Parse(err)) => panic!("{}", err.format_detailed(sdl, None)),
        Ok(_) => panic!("expected the schema to fail to build"),
    }
}
