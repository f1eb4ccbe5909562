use crate::GraphQLErrorNotes;

/// The kind of a [`GraphQLToken`](crate::token::GraphQLToken).
///
/// Literal variants borrow their raw text straight out of the source. For
/// strings that is the text *including* the quotes; cooking (escape
/// processing, block-string indentation removal) happens in the parser.
///
/// Negative numbers are single tokens (`IntValue("-12")`), matching the
/// `IntValue`/`FloatValue` grammar.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    Name(&'src str),
    IntValue(&'src str),
    FloatValue(&'src str),
    /// A `"..."` literal.
    StringValue(&'src str),
    /// A `"""..."""` literal.
    BlockStringValue(&'src str),

    True,
    False,
    Null,

    Eof,

    /// A lexical error. The lexer produces nothing further after one of these.
    Error {
        message: String,
        error_notes: GraphQLErrorNotes,
    },
}

impl<'src> GraphQLTokenKind<'src> {
    pub fn error(message: impl Into<String>, error_notes: GraphQLErrorNotes) -> Self {
        Self::Error {
            message: message.into(),
            error_notes,
        }
    }

    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        Some(match self {
            Self::Ampersand => "&",
            Self::At => "@",
            Self::Bang => "!",
            Self::Colon => ":",
            Self::CurlyBraceClose => "}",
            Self::CurlyBraceOpen => "{",
            Self::Dollar => "$",
            Self::Ellipsis => "...",
            Self::Equals => "=",
            Self::ParenClose => ")",
            Self::ParenOpen => "(",
            Self::Pipe => "|",
            Self::SquareBracketClose => "]",
            Self::SquareBracketOpen => "[",
            _ => return None,
        })
    }

    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The text of this token if it can stand in for a GraphQL `Name`.
    ///
    /// `true`, `false` and `null` are lexed as their own kinds but still match
    /// the `Name` production, so they are names in every position except
    /// value literals and enum values.
    pub fn as_name(&self) -> Option<&'src str> {
        match self {
            Self::Name(name) => Some(name),
            Self::True => Some("true"),
            Self::False => Some("false"),
            Self::Null => Some("null"),
            _ => None,
        }
    }

    /// Short human-readable rendering for "expected X, found Y" messages.
    pub fn display(&self) -> String {
        if let Some(punct) = self.as_punctuator_str() {
            return punct.to_string();
        }
        match self {
            Self::Name(text)
            | Self::IntValue(text)
            | Self::FloatValue(text) => text.to_string(),
            Self::StringValue(_) | Self::BlockStringValue(_) => "string".to_string(),
            Self::True => "true".to_string(),
            Self::False => "false".to_string(),
            Self::Null => "null".to_string(),
            Self::Eof => "end of input".to_string(),
            Self::Error { message, .. } => format!("tokenization error: {message}"),
            _ => String::new(),
        }
    }

    /// Compares variants only, ignoring literal payloads.
    ///
    /// Kept exhaustive so that a new variant cannot silently compare equal.
    pub fn same_variant(&self, other: &GraphQLTokenKind<'_>) -> bool {
        match self {
            Self::Name(_) => matches!(other, GraphQLTokenKind::Name(_)),
            Self::IntValue(_) => matches!(other, GraphQLTokenKind::IntValue(_)),
            Self::FloatValue(_) => matches!(other, GraphQLTokenKind::FloatValue(_)),
            Self::StringValue(_) => matches!(other, GraphQLTokenKind::StringValue(_)),
            Self::BlockStringValue(_) => {
                matches!(other, GraphQLTokenKind::BlockStringValue(_))
            },
            Self::Error { .. } => matches!(other, GraphQLTokenKind::Error { .. }),
            Self::Ampersand => matches!(other, GraphQLTokenKind::Ampersand),
            Self::At => matches!(other, GraphQLTokenKind::At),
            Self::Bang => matches!(other, GraphQLTokenKind::Bang),
            Self::Colon => matches!(other, GraphQLTokenKind::Colon),
            Self::CurlyBraceClose => matches!(other, GraphQLTokenKind::CurlyBraceClose),
            Self::CurlyBraceOpen => matches!(other, GraphQLTokenKind::CurlyBraceOpen),
            Self::Dollar => matches!(other, GraphQLTokenKind::Dollar),
            Self::Ellipsis => matches!(other, GraphQLTokenKind::Ellipsis),
            Self::Equals => matches!(other, GraphQLTokenKind::Equals),
            Self::ParenClose => matches!(other, GraphQLTokenKind::ParenClose),
            Self::ParenOpen => matches!(other, GraphQLTokenKind::ParenOpen),
            Self::Pipe => matches!(other, GraphQLTokenKind::Pipe),
            Self::SquareBracketClose => {
                matches!(other, GraphQLTokenKind::SquareBracketClose)
            },
            Self::SquareBracketOpen => {
                matches!(other, GraphQLTokenKind::SquareBracketOpen)
            },
            Self::True => matches!(other, GraphQLTokenKind::True),
            Self::False => matches!(other, GraphQLTokenKind::False),
            Self::Null => matches!(other, GraphQLTokenKind::Null),
            Self::Eof => matches!(other, GraphQLTokenKind::Eof),
        }
    }
}
