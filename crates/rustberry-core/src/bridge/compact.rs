use crate::bridge::CompactAstCodecError;
use rustberry_parser::GraphQLSourceSpan;
use rustberry_parser::ast;
use rustberry_parser::ast::OperationKind;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;
use std::ops::Range;

/// Index of a string in a [`CompactDocument`]'s string table.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct StrId(u32);

impl StrId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// An interned name together with the span of the name token.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CompactName {
    pub value: StrId,
    pub span: GraphQLSourceSpan,
}

/// A contiguous run of entries in [`CompactDocument::selections()`]: the
/// selections of one selection set, in source order.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SelectionRange {
    pub start: u32,
    pub len: u32,
}

impl SelectionRange {
    pub fn indices(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn end(&self) -> u32 {
        self.start.saturating_add(self.len)
    }
}

/// A top-level definition, pointing into
/// [`CompactDocument::operations()`] or [`CompactDocument::fragments()`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CompactDefinition {
    Operation(u32),
    Fragment(u32),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CompactOperation {
    pub kind: OperationKind,
    pub name: Option<CompactName>,
    pub variable_definitions: Vec<CompactVariableDefinition>,
    pub directives: Vec<CompactDirective>,
    pub selections: SelectionRange,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CompactFragment {
    pub name: CompactName,
    pub type_condition: CompactName,
    pub directives: Vec<CompactDirective>,
    pub selections: SelectionRange,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CompactVariableDefinition {
    pub name: CompactName,
    pub var_type: CompactType,
    pub default_value: Option<CompactValue>,
    pub directives: Vec<CompactDirective>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum CompactSelection {
    Field(CompactField),
    FragmentSpread {
        name: CompactName,
        directives: Vec<CompactDirective>,
        span: GraphQLSourceSpan,
    },
    InlineFragment {
        type_condition: Option<CompactName>,
        directives: Vec<CompactDirective>,
        selections: SelectionRange,
        span: GraphQLSourceSpan,
    },
}

impl CompactSelection {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Self::Field(field) => field.span,
            Self::FragmentSpread { span, .. } | Self::InlineFragment { span, .. } => *span,
        }
    }

    pub fn directives(&self) -> &[CompactDirective] {
        match self {
            Self::Field(field) => &field.directives,
            Self::FragmentSpread { directives, .. }
            | Self::InlineFragment { directives, .. } => directives,
        }
    }

    /// The nested selection set, if this selection has one.
    pub fn children(&self) -> Option<SelectionRange> {
        match self {
            Self::Field(field) => field.selections,
            Self::InlineFragment { selections, .. } => Some(*selections),
            Self::FragmentSpread { .. } => None,
        }
    }

    fn set_children(&mut self, children: SelectionRange) {
        match self {
            Self::Field(field) => field.selections = Some(children),
            Self::InlineFragment { selections, .. } => *selections = children,
            Self::FragmentSpread { .. } => (),
        }
    }

    fn span_mut(&mut self) -> &mut GraphQLSourceSpan {
        match self {
            Self::Field(field) => &mut field.span,
            Self::FragmentSpread { span, .. } | Self::InlineFragment { span, .. } => span,
        }
    }

    fn directives_mut(&mut self) -> &mut Vec<CompactDirective> {
        match self {
            Self::Field(field) => &mut field.directives,
            Self::FragmentSpread { directives, .. }
            | Self::InlineFragment { directives, .. } => directives,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CompactField {
    pub alias: Option<CompactName>,
    pub name: CompactName,
    pub arguments: Vec<CompactArgument>,
    pub directives: Vec<CompactDirective>,
    pub selections: Option<SelectionRange>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CompactArgument {
    pub name: CompactName,
    pub value: CompactValue,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CompactDirective {
    pub name: CompactName,
    pub arguments: Vec<CompactArgument>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum CompactType {
    Named {
        name: CompactName,
        nullable: bool,
        span: GraphQLSourceSpan,
    },
    List {
        element: Box<CompactType>,
        nullable: bool,
        span: GraphQLSourceSpan,
    },
}

impl CompactType {
    /// The whole annotation, including any trailing `!`.
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Self::Named { span, .. } | Self::List { span, .. } => *span,
        }
    }

    fn erase_spans(&mut self) {
        match self {
            Self::Named { name, span, .. } => {
                name.span = GraphQLSourceSpan::default();
                *span = GraphQLSourceSpan::default();
            },
            Self::List { element, span, .. } => {
                element.erase_spans();
                *span = GraphQLSourceSpan::default();
            },
        }
    }
}

/// A value literal and its span. Numbers keep their source text.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CompactValue {
    pub kind: CompactValueKind,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum CompactValueKind {
    Variable(CompactName),
    Int(StrId),
    Float(StrId),
    String(StrId),
    Boolean(bool),
    Null,
    Enum(StrId),
    List(Vec<CompactValue>),
    Object(Vec<CompactObjectField>),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CompactObjectField {
    pub name: CompactName,
    pub value: CompactValue,
    pub span: GraphQLSourceSpan,
}

impl CompactValue {
    fn erase_spans(&mut self) {
        self.span = GraphQLSourceSpan::default();
        match &mut self.kind {
            CompactValueKind::Variable(name) => name.span = GraphQLSourceSpan::default(),
            CompactValueKind::List(items) => items.iter_mut().for_each(Self::erase_spans),
            CompactValueKind::Object(fields) => {
                for field in fields {
                    field.span = GraphQLSourceSpan::default();
                    field.name.span = GraphQLSourceSpan::default();
                    field.value.erase_spans();
                }
            },
            CompactValueKind::Int(_)
            | CompactValueKind::Float(_)
            | CompactValueKind::String(_)
            | CompactValueKind::Boolean(_)
            | CompactValueKind::Null
            | CompactValueKind::Enum(_) => (),
        }
    }
}

/// A flat, interned copy of an [`ast::ExecutableDocument`].
///
/// Names and literals live once in a string table and are referenced by
/// [`StrId`]. Operations, fragments and selections live in three arenas;
/// each selection set is a [`SelectionRange`] over the selection arena,
/// and a nested range always starts after the selection that owns it.
///
/// ```
/// use rustberry_core::bridge::CompactDocument;
///
/// let document = rustberry_parser::parse_executable("{ a { b c } }").unwrap();
/// let compact = CompactDocument::from_document(&document);
///
/// let bytes = compact.encode().unwrap();
/// assert_eq!(CompactDocument::decode(&bytes).unwrap(), compact);
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CompactDocument {
    pub(super) strings: Vec<String>,
    pub(super) definitions: Vec<CompactDefinition>,
    pub(super) operations: Vec<CompactOperation>,
    pub(super) fragments: Vec<CompactFragment>,
    pub(super) selections: Vec<CompactSelection>,
    pub(super) span: GraphQLSourceSpan,
}

impl CompactDocument {
    pub fn from_document(document: &ast::ExecutableDocument) -> Self {
        let mut builder = CompactDocumentBuilder::default();
        for definition in &document.definitions {
            builder.add_definition(definition);
        }
        builder.document.span = document.span;
        builder.document.strings = builder.strings;
        builder.document
    }

    /// Resolves an interned string. Every id stored in a document refers
    /// into that document's own table.
    pub fn str(&self, id: StrId) -> &str {
        &self.strings[id.index()]
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    /// Operations and fragments in source order.
    pub fn definitions(&self) -> &[CompactDefinition] {
        &self.definitions
    }

    pub fn operations(&self) -> &[CompactOperation] {
        &self.operations
    }

    pub fn fragments(&self) -> &[CompactFragment] {
        &self.fragments
    }

    /// The first fragment named `name`.
    pub fn fragment(&self, name: &str) -> Option<&CompactFragment> {
        self.fragments.iter().find(|fragment| self.str(fragment.name.value) == name)
    }

    /// The whole selection arena.
    pub fn all_selections(&self) -> &[CompactSelection] {
        &self.selections
    }

    pub fn selections(&self, range: SelectionRange) -> &[CompactSelection] {
        &self.selections[range.indices()]
    }

    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }

    /// Replaces every span with the default span, so two documents that
    /// differ only in layout compare equal.
    pub fn erase_spans(&mut self) {
        let erased = GraphQLSourceSpan::default();
        self.span = erased;
        for operation in &mut self.operations {
            operation.span = erased;
            if let Some(name) = &mut operation.name {
                name.span = erased;
            }
            erase_directive_spans(&mut operation.directives);
            for var_def in &mut operation.variable_definitions {
                var_def.span = erased;
                var_def.name.span = erased;
                var_def.var_type.erase_spans();
                if let Some(default_value) = &mut var_def.default_value {
                    default_value.erase_spans();
                }
                erase_directive_spans(&mut var_def.directives);
            }
        }
        for fragment in &mut self.fragments {
            fragment.span = erased;
            fragment.name.span = erased;
            fragment.type_condition.span = erased;
            erase_directive_spans(&mut fragment.directives);
        }
        for selection in &mut self.selections {
            *selection.span_mut() = erased;
            erase_directive_spans(selection.directives_mut());
            match selection {
                CompactSelection::Field(field) => {
                    field.name.span = erased;
                    if let Some(alias) = &mut field.alias {
                        alias.span = erased;
                    }
                    erase_argument_spans(&mut field.arguments);
                },
                CompactSelection::FragmentSpread { name, .. } => name.span = erased,
                CompactSelection::InlineFragment { type_condition, .. } => {
                    if let Some(type_condition) = type_condition {
                        type_condition.span = erased;
                    }
                },
            }
        }
    }

    /// Serializes with bincode's standard configuration.
    pub fn encode(&self) -> Result<Vec<u8>, CompactAstCodecError> {
        Ok(bincode::serde::encode_to_vec(self, bincode::config::standard())?)
    }

    /// Reverses [`encode()`](Self::encode), then checks that every string
    /// id, selection range and definition index points inside the decoded
    /// document.
    pub fn decode(bytes: &[u8]) -> Result<Self, CompactAstCodecError> {
        let (document, read): (Self, usize) =
            bincode::serde::decode_from_slice(bytes, bincode::config::standard())?;
        if read != bytes.len() {
            return Err(CompactAstCodecError::TrailingBytes {
                trailing: bytes.len() - read,
            });
        }
        document.check_references()?;
        Ok(document)
    }

    fn check_references(&self) -> Result<(), CompactAstCodecError> {
        for definition in &self.definitions {
            let (kind, index, len) = match *definition {
                CompactDefinition::Operation(index) => ("operation", index, self.operations.len()),
                CompactDefinition::Fragment(index) => ("fragment", index, self.fragments.len()),
            };
            if index as usize >= len {
                return Err(CompactAstCodecError::DefinitionOutOfRange { kind, index, len });
            }
        }
        for operation in &self.operations {
            self.check_optional_name(operation.name)?;
            for var_def in &operation.variable_definitions {
                self.check_name(var_def.name)?;
                self.check_type(&var_def.var_type)?;
                if let Some(default_value) = &var_def.default_value {
                    self.check_value(default_value)?;
                }
                self.check_directives(&var_def.directives)?;
            }
            self.check_directives(&operation.directives)?;
            self.check_range(operation.selections, 0)?;
        }
        for fragment in &self.fragments {
            self.check_name(fragment.name)?;
            self.check_name(fragment.type_condition)?;
            self.check_directives(&fragment.directives)?;
            self.check_range(fragment.selections, 0)?;
        }
        for (index, selection) in self.selections.iter().enumerate() {
            match selection {
                CompactSelection::Field(field) => {
                    self.check_optional_name(field.alias)?;
                    self.check_name(field.name)?;
                    self.check_arguments(&field.arguments)?;
                },
                CompactSelection::FragmentSpread { name, .. } => self.check_name(*name)?,
                CompactSelection::InlineFragment { type_condition, .. } =>
                    self.check_optional_name(*type_condition)?,
            }
            self.check_directives(selection.directives())?;
            if let Some(children) = selection.children() {
                self.check_range(children, index + 1)?;
            }
        }
        Ok(())
    }

    /// Nested ranges must start at or after `min_start`, which keeps the
    /// selection tree acyclic.
    fn check_range(&self, range: SelectionRange, min_start: usize) -> Result<(), CompactAstCodecError> {
        let out_of_range = (range.start as usize) < min_start && !range.is_empty()
            || range.end() as usize > self.selections.len()
            || range.start.checked_add(range.len).is_none();
        if out_of_range {
            return Err(CompactAstCodecError::SelectionRangeOutOfRange {
                start: range.start,
                end: range.end(),
                len: self.selections.len(),
            });
        }
        Ok(())
    }

    fn check_str(&self, id: StrId) -> Result<(), CompactAstCodecError> {
        if id.index() >= self.strings.len() {
            return Err(CompactAstCodecError::StringOutOfRange {
                id: id.0,
                len: self.strings.len(),
            });
        }
        Ok(())
    }

    fn check_name(&self, name: CompactName) -> Result<(), CompactAstCodecError> {
        self.check_str(name.value)
    }

    fn check_optional_name(&self, name: Option<CompactName>) -> Result<(), CompactAstCodecError> {
        name.map_or(Ok(()), |name| self.check_name(name))
    }

    fn check_type(&self, type_: &CompactType) -> Result<(), CompactAstCodecError> {
        match type_ {
            CompactType::Named { name, .. } => self.check_name(*name),
            CompactType::List { element, .. } => self.check_type(element),
        }
    }

    fn check_value(&self, value: &CompactValue) -> Result<(), CompactAstCodecError> {
        match &value.kind {
            CompactValueKind::Variable(name) => self.check_name(*name),
            CompactValueKind::Int(id)
            | CompactValueKind::Float(id)
            | CompactValueKind::String(id)
            | CompactValueKind::Enum(id) => self.check_str(*id),
            CompactValueKind::Boolean(_) | CompactValueKind::Null => Ok(()),
            CompactValueKind::List(items) => items.iter().try_for_each(|item| self.check_value(item)),
            CompactValueKind::Object(fields) => fields.iter().try_for_each(|field| {
                self.check_name(field.name)?;
                self.check_value(&field.value)
            }),
        }
    }

    fn check_arguments(&self, arguments: &[CompactArgument]) -> Result<(), CompactAstCodecError> {
        arguments.iter().try_for_each(|argument| {
            self.check_name(argument.name)?;
            self.check_value(&argument.value)
        })
    }

    fn check_directives(&self, directives: &[CompactDirective]) -> Result<(), CompactAstCodecError> {
        directives.iter().try_for_each(|directive| {
            self.check_name(directive.name)?;
            self.check_arguments(&directive.arguments)
        })
    }
}

fn erase_directive_spans(directives: &mut [CompactDirective]) {
    for directive in directives {
        directive.span = GraphQLSourceSpan::default();
        directive.name.span = GraphQLSourceSpan::default();
        erase_argument_spans(&mut directive.arguments);
    }
}

fn erase_argument_spans(arguments: &mut [CompactArgument]) {
    for argument in arguments {
        argument.span = GraphQLSourceSpan::default();
        argument.name.span = GraphQLSourceSpan::default();
        argument.value.erase_spans();
    }
}

#[derive(Default)]
struct CompactDocumentBuilder {
    document: CompactDocument,
    strings: Vec<String>,
    string_ids: HashMap<String, StrId>,
}

impl CompactDocumentBuilder {
    fn intern(&mut self, value: &str) -> StrId {
        if let Some(id) = self.string_ids.get(value) {
            return *id;
        }
        let id = StrId(self.strings.len() as u32);
        self.strings.push(value.to_string());
        self.string_ids.insert(value.to_string(), id);
        id
    }

    fn name(&mut self, name: &ast::Name) -> CompactName {
        CompactName {
            value: self.intern(&name.value),
            span: name.span,
        }
    }

    fn add_definition(&mut self, definition: &ast::ExecutableDefinition) {
        match definition {
            ast::ExecutableDefinition::Operation(op) => {
                let name = op.name.as_ref().map(|name| self.name(name));
                let variable_definitions = op
                    .variable_definitions
                    .iter()
                    .map(|var_def| self.variable_definition(var_def))
                    .collect();
                let directives = self.directives(&op.directives);
                let selections = self.selection_set(&op.selection_set);
                let index = self.document.operations.len() as u32;
                self.document.operations.push(CompactOperation {
                    kind: op.kind,
                    name,
                    variable_definitions,
                    directives,
                    selections,
                    span: op.span,
                });
                self.document.definitions.push(CompactDefinition::Operation(index));
            },
            ast::ExecutableDefinition::Fragment(frag) => {
                let name = self.name(&frag.name);
                let type_condition = self.name(&frag.type_condition.named_type);
                let directives = self.directives(&frag.directives);
                let selections = self.selection_set(&frag.selection_set);
                let index = self.document.fragments.len() as u32;
                self.document.fragments.push(CompactFragment {
                    name,
                    type_condition,
                    directives,
                    selections,
                    span: frag.span,
                });
                self.document.definitions.push(CompactDefinition::Fragment(index));
            },
        }
    }

    /// Lays out every selection of `set` first, then descends, so siblings
    /// stay contiguous.
    fn selection_set(&mut self, set: &ast::SelectionSet) -> SelectionRange {
        let start = self.document.selections.len();
        for selection in &set.selections {
            let shallow = self.shallow_selection(selection);
            self.document.selections.push(shallow);
        }
        for (offset, selection) in set.selections.iter().enumerate() {
            let children = match selection {
                ast::Selection::Field(field) =>
                    field.selection_set.as_ref().map(|nested| self.selection_set(nested)),
                ast::Selection::InlineFragment(inline) =>
                    Some(self.selection_set(&inline.selection_set)),
                ast::Selection::FragmentSpread(_) => None,
            };
            if let Some(children) = children {
                self.document.selections[start + offset].set_children(children);
            }
        }
        SelectionRange {
            start: start as u32,
            len: set.selections.len() as u32,
        }
    }

    fn shallow_selection(&mut self, selection: &ast::Selection) -> CompactSelection {
        match selection {
            ast::Selection::Field(field) => CompactSelection::Field(CompactField {
                alias: field.alias.as_ref().map(|alias| self.name(alias)),
                name: self.name(&field.name),
                arguments: self.arguments(&field.arguments),
                directives: self.directives(&field.directives),
                selections: None,
                span: field.span,
            }),
            ast::Selection::FragmentSpread(spread) => CompactSelection::FragmentSpread {
                name: self.name(&spread.name),
                directives: self.directives(&spread.directives),
                span: spread.span,
            },
            ast::Selection::InlineFragment(inline) => CompactSelection::InlineFragment {
                type_condition: inline
                    .type_condition
                    .as_ref()
                    .map(|cond| self.name(&cond.named_type)),
                directives: self.directives(&inline.directives),
                selections: SelectionRange::default(),
                span: inline.span,
            },
        }
    }

    fn variable_definition(&mut self, var_def: &ast::VariableDefinition) -> CompactVariableDefinition {
        CompactVariableDefinition {
            name: self.name(&var_def.variable),
            var_type: self.type_annotation(&var_def.var_type),
            default_value: var_def.default_value.as_ref().map(|value| self.value(value)),
            directives: self.directives(&var_def.directives),
            span: var_def.span,
        }
    }

    fn type_annotation(&mut self, annotation: &ast::TypeAnnotation) -> CompactType {
        match annotation {
            ast::TypeAnnotation::Named(named) => CompactType::Named {
                name: self.name(&named.name),
                nullable: named.nullable,
                span: named.span,
            },
            ast::TypeAnnotation::List(list) => CompactType::List {
                element: Box::new(self.type_annotation(&list.element_type)),
                nullable: list.nullable,
                span: list.span,
            },
        }
    }

    fn directives(&mut self, directives: &[ast::DirectiveAnnotation]) -> Vec<CompactDirective> {
        directives
            .iter()
            .map(|directive| CompactDirective {
                name: self.name(&directive.name),
                arguments: self.arguments(&directive.arguments),
                span: directive.span,
            })
            .collect()
    }

    fn arguments(&mut self, arguments: &[ast::Argument]) -> Vec<CompactArgument> {
        arguments
            .iter()
            .map(|argument| CompactArgument {
                name: self.name(&argument.name),
                value: self.value(&argument.value),
                span: argument.span,
            })
            .collect()
    }

    fn value(&mut self, value: &ast::Value) -> CompactValue {
        let kind = match value {
            ast::Value::Variable(var) => CompactValueKind::Variable(self.name(&var.name)),
            ast::Value::Int(int) => CompactValueKind::Int(self.intern(&int.raw)),
            ast::Value::Float(float) => CompactValueKind::Float(self.intern(&float.raw)),
            ast::Value::String(string) => CompactValueKind::String(self.intern(&string.value)),
            ast::Value::Boolean(boolean) => CompactValueKind::Boolean(boolean.value),
            ast::Value::Null(_) => CompactValueKind::Null,
            ast::Value::Enum(enum_value) => CompactValueKind::Enum(self.intern(&enum_value.value)),
            ast::Value::List(list) =>
                CompactValueKind::List(list.values.iter().map(|item| self.value(item)).collect()),
            ast::Value::Object(object) => CompactValueKind::Object(
                object
                    .fields
                    .iter()
                    .map(|field| CompactObjectField {
                        name: self.name(&field.name),
                        value: self.value(&field.value),
                        span: field.span,
                    })
                    .collect(),
            ),
        };
        CompactValue {
            kind,
            span: value.span(),
        }
    }
}
