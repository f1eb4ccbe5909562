use crate::Diagnostic;
use crate::RuleId;
use crate::SessionError;
use crate::bridge;
use crate::bridge::CompactDocument;
use crate::bridge::mirror::DocumentNode;
use crate::document::DocumentEntry;
use crate::document::DocumentRegistry;
use crate::document::FileId;
use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistry;
use crate::validation::Validator;
use rustberry_parser::ast;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug)]
enum SchemaState {
    Unset,
    Built(TypeRegistry),
    Failed(Vec<Diagnostic>),
}

/// One schema, the documents compiled against it, and the rules used to
/// validate them.
///
/// Documents are registered and validated through `&self`, so a session can
/// be shared across threads. Replacing the schema needs `&mut self` and
/// therefore cannot overlap with validation.
#[derive(Debug)]
pub struct Session {
    schema: SchemaState,
    documents: DocumentRegistry,
    validator: Validator,
}

impl Session {
    pub fn new() -> Self {
        Self::with_validator(Validator::default())
    }

    pub fn with_validator(validator: Validator) -> Self {
        Self {
            schema: SchemaState::Unset,
            documents: DocumentRegistry::new(),
            validator,
        }
    }

    /// Builds a [`TypeRegistry`] from `sdl` and makes it the session's
    /// schema.
    ///
    /// On failure the previous schema is discarded as well: until a later
    /// call succeeds, document validation reports
    /// [`SessionError::NoSchema`] and [`validate()`](Self::validate) reports
    /// the build errors.
    pub fn set_schema(&mut self, sdl: &str) -> Result<(), SchemaBuildError> {
        match TypeRegistry::from_sdl(sdl) {
            Ok(registry) => {
                self.schema = SchemaState::Built(registry);
                Ok(())
            },
            Err(err) => {
                log::debug!("schema build failed: {err}");
                self.schema = SchemaState::Failed(err.to_diagnostics());
                Err(err)
            },
        }
    }

    pub fn schema(&self) -> Option<&TypeRegistry> {
        match &self.schema {
            SchemaState::Built(registry) => Some(registry),
            SchemaState::Unset | SchemaState::Failed(_) => None,
        }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn documents(&self) -> &DocumentRegistry {
        &self.documents
    }

    /// Parses `source` without registering it.
    pub fn parse(&self, source: &str) -> Result<ast::ExecutableDocument, Diagnostic> {
        rustberry_parser::parse_executable(source).map_err(|err| Diagnostic::from_parse_error(&err))
    }

    /// Parses and registers `source`. Sources that fail to parse are
    /// registered too; validating them replays the syntax diagnostic.
    pub fn add_executable(&self, source: impl Into<String>) -> FileId {
        self.documents.add(source)
    }

    pub fn add_executable_with_path(
        &self,
        source: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> FileId {
        self.documents.add_with_path(source, path)
    }

    pub fn document(&self, file_id: FileId) -> Result<Arc<DocumentEntry>, SessionError> {
        Ok(self.documents.get(file_id)?)
    }

    pub fn validate_document(
        &self,
        document: &ast::ExecutableDocument,
    ) -> Result<Vec<Diagnostic>, SessionError> {
        let registry = self.schema().ok_or(SessionError::NoSchema)?;
        Ok(self.validator.validate(document, registry))
    }

    /// Validates a registered document. A document that failed to parse
    /// yields its syntax diagnostic, whether or not a schema is set.
    pub fn validate_file(&self, file_id: FileId) -> Result<Vec<Diagnostic>, SessionError> {
        let entry = self.document(file_id)?;
        match entry.document() {
            Ok(document) => self.validate_document(document),
            Err(diagnostic) => {
                log::debug!("{file_id} has a syntax error; replaying it");
                Ok(vec![diagnostic.clone()])
            },
        }
    }

    /// Registers `source` and validates it in one step.
    pub fn add_validate(
        &self,
        source: impl Into<String>,
    ) -> Result<(FileId, Vec<Diagnostic>), SessionError> {
        let file_id = self.add_executable(source);
        let diagnostics = self.validate_file(file_id)?;
        Ok((file_id, diagnostics))
    }

    /// Diagnostics for the schema itself: empty when the last
    /// [`set_schema()`](Self::set_schema) succeeded, its build errors when it
    /// failed, and a single `missing-schema` diagnostic when none was set.
    pub fn validate(&self) -> Vec<Diagnostic> {
        match &self.schema {
            SchemaState::Built(_) => vec![],
            SchemaState::Failed(diagnostics) => diagnostics.clone(),
            SchemaState::Unset => vec![Diagnostic::without_span(
                RuleId::MissingSchema,
                "no schema has been set",
            )],
        }
    }

    pub fn to_internal_ast(&self, file_id: FileId) -> Result<CompactDocument, SessionError> {
        self.with_parsed(file_id, bridge::to_internal_ast)
    }

    pub fn to_mirrored_ast(&self, file_id: FileId) -> Result<DocumentNode, SessionError> {
        self.with_parsed(file_id, bridge::to_mirrored_ast)
    }

    fn with_parsed<T>(
        &self,
        file_id: FileId,
        project: impl FnOnce(&ast::ExecutableDocument) -> T,
    ) -> Result<T, SessionError> {
        let entry = self.document(file_id)?;
        entry
            .document()
            .map(project)
            .map_err(|diagnostic| SessionError::DocumentHasSyntaxError(diagnostic.clone()))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
