mod document_registry;

pub use document_registry::DocumentEntry;
pub use document_registry::DocumentNotFound;
pub use document_registry::DocumentRegistry;
pub use document_registry::FileId;
