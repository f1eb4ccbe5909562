use crate::Diagnostic;
use crate::document::DocumentNotFound;
use crate::document::FileId;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("no schema has been set on this session")]
    NoSchema,

    #[error("no document is registered as {0}")]
    DocumentNotFound(FileId),

    #[error("document cannot be bridged because it failed to parse: {0}")]
    DocumentHasSyntaxError(Diagnostic),
}

impl From<DocumentNotFound> for SessionError {
    fn from(err: DocumentNotFound) -> Self {
        Self::DocumentNotFound(err.0)
    }
}
