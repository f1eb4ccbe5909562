/// Why a [`CompactDocument`](crate::bridge::CompactDocument) could not be
/// encoded or decoded.
#[derive(Debug, thiserror::Error)]
pub enum CompactAstCodecError {
    #[error("failed to encode compact document: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("failed to decode compact document: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("{trailing} unexpected trailing byte(s) after the encoded document")]
    TrailingBytes {
        trailing: usize,
    },

    #[error("string id {id} is out of range: the document interns {len} string(s)")]
    StringOutOfRange {
        id: u32,
        len: usize,
    },

    #[error(
        "selection range {start}..{end} is out of range: the document holds {len} selection(s)"
    )]
    SelectionRangeOutOfRange {
        start: u32,
        end: u32,
        len: usize,
    },

    #[error("{kind} index {index} is out of range: the document holds {len}")]
    DefinitionOutOfRange {
        kind: &'static str,
        index: u32,
        len: usize,
    },
}
