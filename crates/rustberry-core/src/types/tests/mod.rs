mod object_or_interface_type_validator_tests;

use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistry;
use crate::schema::TypeValidationError;

pub(super) fn type_errors(sdl: &str) -> Vec<TypeValidationError> {
    match TypeRegistry::from_sdl(sdl) {
        Err(SchemaBuildError::TypeValidationErrors { errors }) => errors,
        Err(SchemaBuildError::Parse(err)) => panic!("{}", err.format_detailed(sdl, None)),
        Ok(_) => vec![],
    }
}
