use crate::Diagnostic;
use dashmap::DashMap;
use rustberry_parser::ast;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;

static NEXT_REGISTRY_ID: AtomicU32 = AtomicU32::new(0);

/// Opaque handle of a document registered in a [`DocumentRegistry`].
///
/// Handles are never reused, and a handle minted by one registry is never
/// found in another.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct FileId {
    registry: u32,
    index: u32,
}

impl FileId {
    /// Position of the document in registration order.
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "file #{}.{}", self.registry, self.index)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("no document is registered as {0}")]
pub struct DocumentNotFound(pub FileId);

/// A registered document: its source text and the outcome of parsing it.
#[derive(Debug)]
pub struct DocumentEntry {
    source: String,
    path: Option<PathBuf>,
    outcome: Result<ast::ExecutableDocument, Diagnostic>,
}

impl DocumentEntry {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The parsed document, or the syntax diagnostic recorded when parsing
    /// failed.
    pub fn document(&self) -> Result<&ast::ExecutableDocument, &Diagnostic> {
        self.outcome.as_ref()
    }

    pub fn parse_diagnostic(&self) -> Option<&Diagnostic> {
        self.outcome.as_ref().err()
    }
}

/// Append-only store of parsed executable documents.
///
/// [`add()`](Self::add) takes `&self` and may be called from many threads at
/// once; entries are immutable after insertion.
#[derive(Debug)]
pub struct DocumentRegistry {
    id: u32,
    next_index: AtomicU32,
    entries: DashMap<FileId, Arc<DocumentEntry>>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self {
            id: NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed),
            next_index: AtomicU32::new(0),
            entries: DashMap::new(),
        }
    }

    /// Parses `source` and registers the outcome. A document that fails to
    /// parse still gets a handle; its syntax diagnostic is kept with it.
    pub fn add(&self, source: impl Into<String>) -> FileId {
        self.insert(source.into(), None)
    }

    /// Like [`add()`](Self::add), remembering where the source was read from.
    pub fn add_with_path(&self, source: impl Into<String>, path: impl Into<PathBuf>) -> FileId {
        self.insert(source.into(), Some(path.into()))
    }

    fn insert(&self, source: String, path: Option<PathBuf>) -> FileId {
        let outcome = rustberry_parser::parse_executable(&source)
            .map_err(|err| Diagnostic::from_parse_error(&err));
        let file_id = FileId {
            registry: self.id,
            index: self.next_index.fetch_add(1, Ordering::Relaxed),
        };
        log::debug!(
            "registered {file_id} ({} bytes{})",
            source.len(),
            if outcome.is_ok() { "" } else { ", syntax error" },
        );
        self.entries.insert(file_id, Arc::new(DocumentEntry { source, path, outcome }));
        file_id
    }

    pub fn get(&self, file_id: FileId) -> Result<Arc<DocumentEntry>, DocumentNotFound> {
        self.entries
            .get(&file_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(DocumentNotFound(file_id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Handles of every registered document, in registration order.
    pub fn iter_ids(&self) -> impl Iterator<Item = FileId> + use<> {
        let mut ids: Vec<FileId> = self.entries.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();
        ids.into_iter()
    }
}

impl Default for DocumentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
