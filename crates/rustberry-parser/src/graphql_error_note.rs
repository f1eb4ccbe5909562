use crate::GraphQLSourceSpan;
use smallvec::SmallVec;

/// How a [`GraphQLErrorNote`] is rendered.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub enum GraphQLErrorNoteKind {
    /// Rendered as `= note: ...`.
    General,
    /// Rendered as `= help: ...`.
    Help,
    /// Rendered as `= spec: ...`; the message is a link into the GraphQL
    /// specification.
    Spec,
}

impl GraphQLErrorNoteKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::General => "note",
            Self::Help => "help",
            Self::Spec => "spec",
        }
    }
}

/// Supplementary context attached to a parse error, optionally pointing at a
/// related location (for example where an unclosed `{` was opened).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    pub fn general_with_span(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
    ) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }

    pub fn spec(url: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Spec,
            message: url.into(),
            span: None,
        }
    }
}

/// Most errors carry zero to two notes.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
