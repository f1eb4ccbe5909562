use crate::GraphQLStringParsingError;

/// Which top-level grammar a parse was run with.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub enum DocumentKind {
    Executable,
    Schema,
}

impl DocumentKind {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Executable => "executable document",
            Self::Schema => "schema document",
        }
    }
}

/// Categorizes a [`GraphQLParseError`](crate::GraphQLParseError) for
/// programmatic handling. The human-readable text lives on the error itself.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// The grammar called for one of `expected`, but `found` came next.
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The source ended before the construct being parsed was complete.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The lexer rejected the source (illegal character, unterminated
    /// string, malformed number, ...).
    #[error("lexer error")]
    LexerError,

    /// A literal was lexically fine but its value could not be produced.
    #[error("invalid value: {0}")]
    InvalidValue(#[from] GraphQLStringParsingError),

    /// A name that is reserved in this position (e.g. a fragment named
    /// `on`, or an enum value named `true`).
    #[error("reserved name: `{name}`")]
    ReservedName {
        name: String,
    },

    /// A type-system definition inside an executable document or vice versa.
    #[error("{found} is not allowed in a {}", document_kind.description())]
    WrongDocumentKind {
        found: String,
        document_kind: DocumentKind,
    },

    /// A construct that must not be empty was (`{}`, `()`, an empty
    /// document).
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        construct: String,
    },

    #[error("invalid syntax")]
    InvalidSyntax,
}
