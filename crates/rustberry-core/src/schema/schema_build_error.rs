use crate::Diagnostic;
use crate::RuleId;
use crate::schema::TypeValidationError;
use rustberry_parser::GraphQLParseError;

/// Why a [`TypeRegistry`](crate::schema::TypeRegistry) could not be built.
///
/// A build either succeeds completely or reports every problem it found; a
/// partially valid registry is never produced.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchemaBuildError {
    #[error("schema syntax error: {0}")]
    Parse(#[from] GraphQLParseError),

    #[error(
        "schema is invalid ({} error{}): {}",
        errors.len(),
        if errors.len() == 1 { "" } else { "s" },
        errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join("; "),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}

impl SchemaBuildError {
    /// One [`Diagnostic`] per problem: a `syntax` diagnostic for a parse
    /// failure, otherwise one `schema-build` diagnostic per
    /// [`TypeValidationError`].
    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = match self {
            Self::Parse(err) => vec![Diagnostic::from_parse_error(err)],
            Self::TypeValidationErrors { errors } => errors
                .iter()
                .map(|err| {
                    let mut diagnostic =
                        Diagnostic::without_span(RuleId::SchemaBuild, err.to_string());
                    diagnostic.spans = err.spans();
                    diagnostic
                })
                .collect(),
        };
        Diagnostic::sort(&mut diagnostics);
        diagnostics
    }
}
