use crate::schema::SchemaBuildError;
use crate::schema::TypeRegistryBuilder;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::is_possible_type;
use crate::types::is_subtype;
use indexmap::IndexMap;
use indexmap::IndexSet;
use rustberry_parser::ast;
use rustberry_parser::ast::OperationKind;
use rustberry_parser::ast::TypeAnnotation;
use serde::Serialize;
use std::collections::HashMap;

/// The resolved, immutable type graph of one schema.
///
/// Every named type reference inside the registry is known to resolve, every
/// interface implementation has been checked and the query root exists.
/// Lookups are plain map reads, so a registry can be shared across threads
/// without locking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypeRegistry {
    pub(super) types: IndexMap<String, GraphQLType>,
    pub(super) directives: IndexMap<String, Directive>,
    pub(super) query_type: String,
    pub(super) mutation_type: Option<String>,
    pub(super) subscription_type: Option<String>,
    pub(super) meta_fields: IndexMap<String, Field>,
    #[serde(skip)]
    pub(super) possible_types: HashMap<String, IndexSet<String>>,
}

impl TypeRegistry {
    /// Builds a registry from a parsed schema document.
    pub fn build(schema_ast: &ast::SchemaDocument) -> Result<Self, SchemaBuildError> {
        let mut builder = TypeRegistryBuilder::new()?;
        builder.add_document(schema_ast);
        builder.build()
    }

    /// Parses `sdl` and builds a registry from it.
    pub fn from_sdl(sdl: &str) -> Result<Self, SchemaBuildError> {
        let schema_ast = rustberry_parser::parse_schema(sdl)?;
        Self::build(&schema_ast)
    }

    pub(super) fn new(
        types: IndexMap<String, GraphQLType>,
        directives: IndexMap<String, Directive>,
        query_type: String,
        mutation_type: Option<String>,
        subscription_type: Option<String>,
        meta_fields: IndexMap<String, Field>,
    ) -> Self {
        let mut possible_types: HashMap<String, IndexSet<String>> = HashMap::new();
        for type_ in types.values() {
            match type_ {
                GraphQLType::Object(obj) => {
                    for iface_name in obj.0.interface_names() {
                        possible_types
                            .entry(iface_name.to_string())
                            .or_default()
                            .insert(obj.0.name.clone());
                    }
                },
                GraphQLType::Union(union_type) => {
                    possible_types.entry(union_type.name.clone()).or_default().extend(
                        union_type.members.iter().map(|member| member.value.clone()),
                    );
                },
                _ => (),
            }
        }

        Self {
            types,
            directives,
            query_type,
            mutation_type,
            subscription_type,
            meta_fields,
            possible_types,
        }
    }

    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn lookup_directive(&self, name: &str) -> Option<&Directive> {
        self.directives.get(name)
    }

    /// All named types, built-ins included, in definition order.
    pub fn types(&self) -> impl Iterator<Item = &GraphQLType> {
        self.types.values()
    }

    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.directives.values()
    }

    pub fn root_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => Some(self.query_type.as_str()),
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }

    pub fn root_type(&self, kind: OperationKind) -> Option<&ObjectType> {
        self.root_type_name(kind)
            .and_then(|name| self.types.get(name))
            .and_then(GraphQLType::as_object)
    }

    /// Object types a value of the composite type `type_name` may be at
    /// runtime: the type itself for objects, the implementors of an
    /// interface, the members of a union.
    pub fn possible_types(&self, type_name: &str) -> Vec<&str> {
        match self.types.get(type_name) {
            Some(GraphQLType::Object(obj)) => vec![obj.0.name.as_str()],
            Some(GraphQLType::Interface(_) | GraphQLType::Union(_)) => self
                .possible_types
                .get(type_name)
                .map(|names| names.iter().map(String::as_str).collect())
                .unwrap_or_default(),
            _ => vec![],
        }
    }

    /// Resolves a field selected on `type_name`, including the meta fields
    /// `__typename` (any composite type) and `__schema`/`__type` (the query
    /// root only).
    pub fn field(&self, type_name: &str, field_name: &str) -> Option<&Field> {
        let parent = self.types.get(type_name)?;
        if !parent.is_composite() {
            return None;
        }
        match field_name {
            "__typename" => self.meta_fields.get(field_name),
            "__schema" | "__type" if type_name == self.query_type =>
                self.meta_fields.get(field_name),
            _ => parent.fields().and_then(|fields| fields.get(field_name)),
        }
    }

    /// `true` if a value of `maybe_sub` is always acceptable where `sup` is
    /// expected.
    pub fn is_subtype(&self, maybe_sub: &TypeAnnotation, sup: &TypeAnnotation) -> bool {
        is_subtype(&self.types, maybe_sub, sup)
    }

    /// `true` if `candidate` is a possible type of the abstract type
    /// `abstract_name`.
    pub fn is_possible_type(&self, abstract_name: &str, candidate: &str) -> bool {
        is_possible_type(&self.types, abstract_name, candidate)
    }

    /// `true` if some object type could satisfy both composite types.
    pub fn types_overlap(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        let b_possible = self.possible_types(b);
        self.possible_types(a).iter().any(|name| b_possible.contains(name))
    }
}
