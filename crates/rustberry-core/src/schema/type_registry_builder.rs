use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistry;
use crate::schema::TypeValidationError;
use crate::schema::builtins::BUILTIN_DOCUMENT;
use crate::schema::builtins::META_FIELDS_DOCUMENT;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InputObjectTypeValidator;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use crate::types::UnionTypeValidator;
use indexmap::IndexMap;
use rustberry_parser::GraphQLSourceSpan;
use rustberry_parser::ast;
use rustberry_parser::ast::DirectiveLocationKind;
use rustberry_parser::ast::OperationKind;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Collects the definitions of one or more schema documents and resolves
/// them into a [`TypeRegistry`].
///
/// Problems are collected rather than returned eagerly so that a single
/// [`build()`](Self::build) reports all of them.
///
/// ```
/// use rustberry_core::schema::TypeRegistryBuilder;
///
/// let base = rustberry_parser::parse_schema("type Query { a: Int }").unwrap();
/// let ext = rustberry_parser::parse_schema("extend type Query { b: Int }").unwrap();
///
/// let mut builder = TypeRegistryBuilder::new().unwrap();
/// builder.add_document(&base).add_document(&ext);
/// let registry = builder.build().unwrap();
/// assert!(registry.field("Query", "b").is_some());
/// ```
#[derive(Debug)]
pub struct TypeRegistryBuilder {
    types: IndexMap<String, GraphQLType>,
    directives: IndexMap<String, Directive>,
    meta_fields: IndexMap<String, Field>,
    schema_def_span: Option<GraphQLSourceSpan>,
    schema_directives: Vec<ast::DirectiveAnnotation>,
    root_operations: IndexMap<OperationKind, ast::Name>,
    type_extensions: Vec<ast::TypeDefinition>,
    errors: Vec<TypeValidationError>,
}

impl TypeRegistryBuilder {
    /// A builder pre-populated with the built-in scalars, directives and
    /// introspection types.
    pub fn new() -> Result<Self> {
        let builtins = BUILTIN_DOCUMENT
            .as_ref()
            .map_err(|err| SchemaBuildError::Parse(err.clone()))?;
        let meta_fields_doc = META_FIELDS_DOCUMENT
            .as_ref()
            .map_err(|err| SchemaBuildError::Parse(err.clone()))?;

        let mut builder = Self {
            types: IndexMap::new(),
            directives: IndexMap::new(),
            meta_fields: IndexMap::new(),
            schema_def_span: None,
            schema_directives: vec![],
            root_operations: IndexMap::new(),
            type_extensions: vec![],
            errors: vec![],
        };
        for def in &builtins.definitions {
            builder.add_definition(def, true);
        }
        for def in &meta_fields_doc.definitions {
            if let ast::TypeSystemDefinition::Type(ast::TypeDefinition::Object(holder)) = def {
                builder.meta_fields =
                    fields_from_ast(&holder.name.value, &holder.fields, &mut builder.errors);
            }
        }
        Ok(builder)
    }

    pub fn add_document(&mut self, schema_ast: &ast::SchemaDocument) -> &mut Self {
        for def in &schema_ast.definitions {
            self.add_definition(def, false);
        }
        self
    }

    pub fn build(mut self) -> Result<TypeRegistry> {
        for ext in std::mem::take(&mut self.type_extensions) {
            self.merge_type_extension(&ext);
        }
        self.check_for_empty_types();
        let (query_type, mutation_type, subscription_type) = self.resolve_root_types();

        // Final validation of all types together.
        let mut errors = vec![];
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Enum(_) | GraphQLType::Scalar(_) => (),

                GraphQLType::InputObject(type_) => errors.append(
                    &mut InputObjectTypeValidator::new(type_, &self.types).validate()
                ),

                GraphQLType::Interface(type_) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(&type_.0, &self.types).validate()
                ),

                GraphQLType::Object(type_) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(&type_.0, &self.types).validate()
                ),

                GraphQLType::Union(type_) => errors.append(
                    &mut UnionTypeValidator::new(type_, &self.types).validate()
                ),
            }
        }
        self.errors.append(&mut errors);
        self.validate_directive_definitions();
        self.validate_directive_annotations();

        let query_type = match query_type {
            Some(query_type) if self.errors.is_empty() => query_type,
            _ => {
                log::debug!("schema build failed with {} error(s)", self.errors.len());
                return Err(SchemaBuildError::TypeValidationErrors { errors: self.errors });
            },
        };

        log::debug!(
            "built type registry: {} types, {} directives",
            self.types.len(),
            self.directives.len(),
        );
        Ok(TypeRegistry::new(
            self.types,
            self.directives,
            query_type,
            mutation_type,
            subscription_type,
            self.meta_fields,
        ))
    }

    fn add_definition(&mut self, def: &ast::TypeSystemDefinition, builtin: bool) {
        match def {
            ast::TypeSystemDefinition::Schema(schema_def) => {
                if let Some(def1) = self.schema_def_span {
                    self.errors.push(TypeValidationError::DuplicateSchemaDefinition {
                        def1,
                        def2: schema_def.span,
                    });
                } else {
                    self.schema_def_span = Some(schema_def.span);
                }
                self.add_schema_definition(schema_def);
            },
            ast::TypeSystemDefinition::SchemaExtension(schema_ext) => {
                self.add_schema_definition(schema_ext);
            },
            ast::TypeSystemDefinition::Type(type_def) => {
                let type_ = type_from_ast(type_def, &mut self.errors);
                self.add_new_type(type_def.name(), type_, builtin);
            },
            ast::TypeSystemDefinition::TypeExtension(type_ext) => {
                self.type_extensions.push(type_ext.clone());
            },
            ast::TypeSystemDefinition::Directive(directive_def) => {
                self.add_new_directive(directive_def, builtin);
            },
        }
    }

    fn add_schema_definition(&mut self, def: &ast::SchemaDefinition) {
        self.schema_directives.extend(def.directives.iter().cloned());
        for root in &def.root_operations {
            if self.root_operations.contains_key(&root.operation_kind) {
                self.errors.push(TypeValidationError::DuplicateRootOperationType {
                    operation: root.operation_kind,
                    span: root.span,
                });
            } else {
                self.root_operations.insert(root.operation_kind, root.named_type.clone());
            }
        }
    }

    fn add_new_type(&mut self, name: &ast::Name, type_: GraphQLType, builtin: bool) {
        if !builtin && name.value.starts_with("__") {
            self.errors.push(TypeValidationError::InvalidDunderPrefixedName {
                name: name.value.to_string(),
                span: name.span,
            });
            return;
        }

        if let Some(conflicting_type) = self.types.get(&name.value) {
            self.errors.push(
                if conflicting_type.is_builtin() {
                    TypeValidationError::RedefinedBuiltin {
                        kind: conflicting_type.kind().description(),
                        name: name.value.to_string(),
                        span: name.span,
                    }
                } else {
                    TypeValidationError::DuplicateDefinition {
                        kind: "type",
                        name: name.value.to_string(),
                        def1: conflicting_type.def_span(),
                        def2: type_.def_span(),
                    }
                }
            );
            return;
        }

        self.types.insert(name.value.to_string(), type_);
    }

    fn add_new_directive(&mut self, def: &ast::DirectiveDefinition, builtin: bool) {
        if !builtin && def.name.value.starts_with("__") {
            self.errors.push(TypeValidationError::InvalidDunderPrefixedName {
                name: def.name.value.to_string(),
                span: def.name.span,
            });
            return;
        }

        if let Some(conflicting) = self.directives.get(&def.name.value) {
            self.errors.push(
                if conflicting.is_builtin() {
                    TypeValidationError::RedefinedBuiltin {
                        kind: "directive",
                        name: def.name.value.to_string(),
                        span: def.name.span,
                    }
                } else {
                    TypeValidationError::DuplicateDefinition {
                        kind: "directive",
                        name: def.name.value.to_string(),
                        def1: conflicting.span,
                        def2: def.span,
                    }
                }
            );
            return;
        }

        let directive = Directive {
            name: def.name.value.to_string(),
            description: description_from_ast(&def.description),
            parameters: input_values_from_ast(
                &format!("@{}", def.name.value),
                &def.arguments,
                &mut self.errors,
            ),
            repeatable: def.repeatable,
            locations: def.locations.iter().map(|loc| loc.kind).collect(),
            span: def.span,
        };
        self.directives.insert(directive.name.clone(), directive);
    }

    fn merge_type_extension(&mut self, ext: &ast::TypeDefinition) {
        let name = ext.name();
        let Some(existing) = self.types.get_mut(&name.value) else {
            self.errors.push(TypeValidationError::ExtensionOfUndefinedType {
                type_name: name.value.to_string(),
                span: name.span,
            });
            return;
        };

        if existing.kind() != ast_type_kind(ext) {
            self.errors.push(TypeValidationError::ExtensionKindMismatch {
                type_name: name.value.to_string(),
                defined_kind: existing.kind().description(),
                extension_keyword: ext.keyword(),
                span: name.span,
            });
            return;
        }

        existing.directives_mut().extend(ext.directives().iter().cloned());
        let errors = &mut self.errors;
        match (existing, ext) {
            (GraphQLType::Object(ObjectType(data)), ast::TypeDefinition::Object(ext)) =>
                merge_object_or_interface(data, &ext.implements, &ext.fields, errors),

            (GraphQLType::Interface(InterfaceType(data)), ast::TypeDefinition::Interface(ext)) =>
                merge_object_or_interface(data, &ext.implements, &ext.fields, errors),

            (GraphQLType::Union(union_type), ast::TypeDefinition::Union(ext)) => {
                for member in &ext.members {
                    push_unique_name(&union_type.name, &mut union_type.members, member, errors);
                }
            },

            (GraphQLType::Enum(enum_type), ast::TypeDefinition::Enum(ext)) => {
                let values = enum_values_from_ast(&enum_type.name, &ext.values, errors);
                merge_unique(&enum_type.name, &mut enum_type.values, values, |v| v.span, errors);
            },

            (GraphQLType::InputObject(input_type), ast::TypeDefinition::InputObject(ext)) => {
                let fields = input_values_from_ast(&input_type.name, &ext.fields, errors);
                merge_unique(&input_type.name, &mut input_type.fields, fields, |f| f.span, errors);
            },

            _ => (),
        }
    }

    fn check_for_empty_types(&mut self) {
        for type_ in self.types.values() {
            if type_.is_builtin() {
                continue;
            }
            let what = match type_ {
                GraphQLType::Object(ObjectType(data))
                | GraphQLType::Interface(InterfaceType(data)) if data.fields.is_empty() => "fields",
                GraphQLType::Union(union_type) if union_type.members.is_empty() => "member types",
                GraphQLType::Enum(enum_type) if enum_type.values.is_empty() => "values",
                GraphQLType::InputObject(input_type) if input_type.fields.is_empty() => "fields",
                _ => continue,
            };
            self.errors.push(TypeValidationError::EmptyTypeDefinition {
                kind: type_.kind().description(),
                type_name: type_.name().to_string(),
                what,
                span: type_.def_span(),
            });
        }
    }

    /// Root types come from `schema { ... }` when one is given, otherwise
    /// from the types named `Query`, `Mutation` and `Subscription`.
    fn resolve_root_types(&mut self) -> (Option<String>, Option<String>, Option<String>) {
        let mut roots: [Option<String>; 3] = [None, None, None];
        let slot = |kind: OperationKind| match kind {
            OperationKind::Query => 0,
            OperationKind::Mutation => 1,
            OperationKind::Subscription => 2,
        };

        if self.schema_def_span.is_none() && self.root_operations.is_empty() {
            for (kind, default_name) in [
                (OperationKind::Query, "Query"),
                (OperationKind::Mutation, "Mutation"),
                (OperationKind::Subscription, "Subscription"),
            ] {
                match self.types.get(default_name) {
                    Some(GraphQLType::Object(_)) => roots[slot(kind)] = Some(default_name.to_string()),
                    Some(other) => self.errors.push(TypeValidationError::NonObjectRootOperationType {
                        operation: kind,
                        type_name: default_name.to_string(),
                        span: other.def_span(),
                    }),
                    None => (),
                }
            }
        } else {
            for (kind, name) in &self.root_operations {
                match self.types.get(&name.value) {
                    Some(GraphQLType::Object(_)) => roots[slot(*kind)] = Some(name.value.to_string()),
                    Some(_) => self.errors.push(TypeValidationError::NonObjectRootOperationType {
                        operation: *kind,
                        type_name: name.value.to_string(),
                        span: name.span,
                    }),
                    None => self.errors.push(TypeValidationError::UndefinedTypeName {
                        undefined_type_name: name.value.to_string(),
                        ref_span: name.span,
                    }),
                }
            }
        }

        let [query, mutation, subscription] = roots;
        let query_type_named = self.root_operations.contains_key(&OperationKind::Query)
            || self.types.contains_key("Query");
        if query.is_none() && !query_type_named {
            self.errors.push(TypeValidationError::MissingQueryRootType);
        }
        (query, mutation, subscription)
    }

    fn validate_directive_definitions(&mut self) {
        for directive in self.directives.values() {
            if directive.is_builtin() {
                continue;
            }
            for (param_name, param) in &directive.parameters {
                let innermost = param.type_annotation.innermost_name();
                match self.types.get(&innermost.value) {
                    Some(param_type) if !param_type.is_input_type() => self.errors.push(
                        TypeValidationError::InvalidInputValueWithOutputType {
                            input_path: format!("@{}({param_name}:)", directive.name),
                            invalid_type_name: innermost.value.to_string(),
                            span: param.type_annotation.span(),
                        }
                    ),
                    Some(_) => (),
                    None => self.errors.push(TypeValidationError::UndefinedTypeName {
                        undefined_type_name: innermost.value.to_string(),
                        ref_span: innermost.span,
                    }),
                }
            }
        }
    }

    /// Directive annotations inside the schema must name a defined directive
    /// that is allowed at that location.
    fn validate_directive_annotations(&mut self) {
        let mut checker = DirectiveAnnotationChecker {
            directives: &self.directives,
            errors: vec![],
        };
        checker.check(&self.schema_directives, DirectiveLocationKind::Schema);

        for type_ in self.types.values().filter(|type_| !type_.is_builtin()) {
            let location = match type_.kind() {
                GraphQLTypeKind::Enum => DirectiveLocationKind::Enum,
                GraphQLTypeKind::InputObject => DirectiveLocationKind::InputObject,
                GraphQLTypeKind::Interface => DirectiveLocationKind::Interface,
                GraphQLTypeKind::Object => DirectiveLocationKind::Object,
                GraphQLTypeKind::Scalar => DirectiveLocationKind::Scalar,
                GraphQLTypeKind::Union => DirectiveLocationKind::Union,
            };
            checker.check(type_.directives(), location);

            match type_ {
                GraphQLType::Object(ObjectType(data))
                | GraphQLType::Interface(InterfaceType(data)) => {
                    for field in data.fields.values() {
                        checker.check(&field.directives, DirectiveLocationKind::FieldDefinition);
                        for param in field.parameters.values() {
                            checker.check(&param.directives, DirectiveLocationKind::ArgumentDefinition);
                        }
                    }
                },
                GraphQLType::Enum(enum_type) => {
                    for value in enum_type.values.values() {
                        checker.check(&value.directives, DirectiveLocationKind::EnumValue);
                    }
                },
                GraphQLType::InputObject(input_type) => {
                    for field in input_type.fields.values() {
                        checker.check(&field.directives, DirectiveLocationKind::InputFieldDefinition);
                    }
                },
                GraphQLType::Scalar(_) | GraphQLType::Union(_) => (),
            }
        }

        for directive in self.directives.values() {
            for param in directive.parameters.values() {
                checker.check(&param.directives, DirectiveLocationKind::ArgumentDefinition);
            }
        }

        let mut errors = checker.errors;
        self.errors.append(&mut errors);
    }
}

struct DirectiveAnnotationChecker<'a> {
    directives: &'a IndexMap<String, Directive>,
    errors: Vec<TypeValidationError>,
}

impl DirectiveAnnotationChecker<'_> {
    fn check(&mut self, annotations: &[ast::DirectiveAnnotation], location: DirectiveLocationKind) {
        let mut seen = HashSet::new();
        for annotation in annotations {
            let name = annotation.name.value.as_str();
            let Some(directive) = self.directives.get(name) else {
                self.errors.push(TypeValidationError::UndefinedDirective {
                    directive_name: name.to_string(),
                    span: annotation.span,
                });
                continue;
            };
            if !directive.allowed_at(location) {
                self.errors.push(TypeValidationError::MisplacedDirective {
                    directive_name: name.to_string(),
                    location,
                    span: annotation.span,
                });
            }
            if !seen.insert(name) && !directive.repeatable {
                self.errors.push(TypeValidationError::RepeatedNonRepeatableDirective {
                    directive_name: name.to_string(),
                    span: annotation.span,
                });
            }
        }
    }
}

fn ast_type_kind(def: &ast::TypeDefinition) -> GraphQLTypeKind {
    match def {
        ast::TypeDefinition::Enum(_) => GraphQLTypeKind::Enum,
        ast::TypeDefinition::InputObject(_) => GraphQLTypeKind::InputObject,
        ast::TypeDefinition::Interface(_) => GraphQLTypeKind::Interface,
        ast::TypeDefinition::Object(_) => GraphQLTypeKind::Object,
        ast::TypeDefinition::Scalar(_) => GraphQLTypeKind::Scalar,
        ast::TypeDefinition::Union(_) => GraphQLTypeKind::Union,
    }
}

fn description_from_ast(description: &Option<ast::StringValue>) -> Option<String> {
    description.as_ref().map(|desc| desc.value.clone())
}

fn type_from_ast(def: &ast::TypeDefinition, errors: &mut Vec<TypeValidationError>) -> GraphQLType {
    match def {
        ast::TypeDefinition::Scalar(def) => GraphQLType::Scalar(ScalarType {
            name: def.name.value.to_string(),
            description: description_from_ast(&def.description),
            directives: def.directives.clone(),
            span: def.span,
        }),

        ast::TypeDefinition::Object(def) => {
            let mut data = ObjectOrInterfaceTypeData {
                name: def.name.value.to_string(),
                description: description_from_ast(&def.description),
                interfaces: vec![],
                fields: IndexMap::new(),
                directives: def.directives.clone(),
                span: def.span,
            };
            merge_object_or_interface(&mut data, &def.implements, &def.fields, errors);
            GraphQLType::Object(ObjectType(data))
        },

        ast::TypeDefinition::Interface(def) => {
            let mut data = ObjectOrInterfaceTypeData {
                name: def.name.value.to_string(),
                description: description_from_ast(&def.description),
                interfaces: vec![],
                fields: IndexMap::new(),
                directives: def.directives.clone(),
                span: def.span,
            };
            merge_object_or_interface(&mut data, &def.implements, &def.fields, errors);
            GraphQLType::Interface(InterfaceType(data))
        },

        ast::TypeDefinition::Union(def) => {
            let mut members = vec![];
            for member in &def.members {
                push_unique_name(&def.name.value, &mut members, member, errors);
            }
            GraphQLType::Union(UnionType {
                name: def.name.value.to_string(),
                description: description_from_ast(&def.description),
                members,
                directives: def.directives.clone(),
                span: def.span,
            })
        },

        ast::TypeDefinition::Enum(def) => GraphQLType::Enum(EnumType {
            name: def.name.value.to_string(),
            description: description_from_ast(&def.description),
            values: enum_values_from_ast(&def.name.value, &def.values, errors),
            directives: def.directives.clone(),
            span: def.span,
        }),

        ast::TypeDefinition::InputObject(def) => GraphQLType::InputObject(InputObjectType {
            name: def.name.value.to_string(),
            description: description_from_ast(&def.description),
            fields: input_values_from_ast(&def.name.value, &def.fields, errors),
            directives: def.directives.clone(),
            span: def.span,
        }),
    }
}

fn merge_object_or_interface(
    data: &mut ObjectOrInterfaceTypeData,
    implements: &[ast::Name],
    fields: &[ast::FieldDefinition],
    errors: &mut Vec<TypeValidationError>,
) {
    for iface_name in implements {
        push_unique_name(&data.name, &mut data.interfaces, iface_name, errors);
    }
    let fields = fields_from_ast(&data.name, fields, errors);
    merge_unique(&data.name, &mut data.fields, fields, |field| field.span, errors);
}

fn push_unique_name(
    parent: &str,
    names: &mut Vec<ast::Name>,
    name: &ast::Name,
    errors: &mut Vec<TypeValidationError>,
) {
    if names.iter().any(|existing| existing.value == name.value) {
        errors.push(TypeValidationError::DuplicateMember {
            parent: parent.to_string(),
            member_name: name.value.to_string(),
            span: name.span,
        });
    } else {
        names.push(name.clone());
    }
}

fn merge_unique<T>(
    parent: &str,
    target: &mut IndexMap<String, T>,
    additions: IndexMap<String, T>,
    span_of: impl Fn(&T) -> GraphQLSourceSpan,
    errors: &mut Vec<TypeValidationError>,
) {
    for (name, item) in additions {
        let span = span_of(&item);
        insert_unique(parent, target, name, item, span, errors);
    }
}

fn insert_unique<T>(
    parent: &str,
    target: &mut IndexMap<String, T>,
    name: String,
    item: T,
    span: GraphQLSourceSpan,
    errors: &mut Vec<TypeValidationError>,
) {
    if target.contains_key(&name) {
        errors.push(TypeValidationError::DuplicateMember {
            parent: parent.to_string(),
            member_name: name,
            span,
        });
    } else {
        target.insert(name, item);
    }
}

fn fields_from_ast(
    type_name: &str,
    defs: &[ast::FieldDefinition],
    errors: &mut Vec<TypeValidationError>,
) -> IndexMap<String, Field> {
    let mut fields = IndexMap::new();
    for def in defs {
        let field = Field {
            name: def.name.value.to_string(),
            description: description_from_ast(&def.description),
            parameters: input_values_from_ast(
                &format!("{type_name}.{}", def.name.value),
                &def.arguments,
                errors,
            ),
            type_annotation: def.field_type.clone(),
            directives: def.directives.clone(),
            span: def.span,
        };
        insert_unique(type_name, &mut fields, field.name.clone(), field, def.span, errors);
    }
    fields
}

fn input_values_from_ast(
    parent: &str,
    defs: &[ast::InputValueDefinition],
    errors: &mut Vec<TypeValidationError>,
) -> IndexMap<String, InputValue> {
    let mut values = IndexMap::new();
    for def in defs {
        let value = InputValue {
            name: def.name.value.to_string(),
            description: description_from_ast(&def.description),
            type_annotation: def.value_type.clone(),
            default_value: def.default_value.clone(),
            directives: def.directives.clone(),
            span: def.span,
        };
        insert_unique(parent, &mut values, value.name.clone(), value, def.span, errors);
    }
    values
}

fn enum_values_from_ast(
    enum_name: &str,
    defs: &[ast::EnumValueDefinition],
    errors: &mut Vec<TypeValidationError>,
) -> IndexMap<String, EnumValue> {
    let mut values = IndexMap::new();
    for def in defs {
        let value = EnumValue {
            name: def.name.value.to_string(),
            description: description_from_ast(&def.description),
            directives: def.directives.clone(),
            span: def.span,
        };
        insert_unique(enum_name, &mut values, value.name.clone(), value, def.span, errors);
    }
    values
}
