use rustberry_parser::GraphQLSourceSpan;
use rustberry_parser::ast::DirectiveLocationKind;
use rustberry_parser::ast::OperationKind;

/// One problem found while building a
/// [`TypeRegistry`](crate::schema::TypeRegistry).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TypeValidationError {
    #[error("the {kind} `{name}` is defined more than once")]
    DuplicateDefinition {
        kind: &'static str,
        name: String,
        def1: GraphQLSourceSpan,
        def2: GraphQLSourceSpan,
    },

    #[error("the {kind} `{name}` is built in and cannot be redefined")]
    RedefinedBuiltin {
        kind: &'static str,
        name: String,
        span: GraphQLSourceSpan,
    },

    #[error("the schema definition is given more than once")]
    DuplicateSchemaDefinition {
        def1: GraphQLSourceSpan,
        def2: GraphQLSourceSpan,
    },

    #[error("the {operation} root operation type is defined more than once")]
    DuplicateRootOperationType {
        operation: OperationKind,
        span: GraphQLSourceSpan,
    },

    #[error("`{member_name}` is listed more than once in `{parent}`")]
    DuplicateMember {
        parent: String,
        member_name: String,
        span: GraphQLSourceSpan,
    },

    #[error("the name `{name}` is reserved: names starting with `__` belong to introspection")]
    InvalidDunderPrefixedName {
        name: String,
        span: GraphQLSourceSpan,
    },

    #[error("the {kind} `{type_name}` must define one or more {what}")]
    EmptyTypeDefinition {
        kind: &'static str,
        type_name: String,
        what: &'static str,
        span: GraphQLSourceSpan,
    },

    #[error("cannot extend `{type_name}` because it is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        span: GraphQLSourceSpan,
    },

    #[error("cannot extend the {defined_kind} `{type_name}` with `extend {extension_keyword}`")]
    ExtensionKindMismatch {
        type_name: String,
        defined_kind: &'static str,
        extension_keyword: &'static str,
        span: GraphQLSourceSpan,
    },

    #[error("unknown type `{undefined_type_name}`")]
    UndefinedTypeName {
        undefined_type_name: String,
        ref_span: GraphQLSourceSpan,
    },

    #[error("the field `{parent_type_name}.{field_name}` must have an output type, but `{invalid_type_name}` is an input object type")]
    InvalidOutputFieldWithInputType {
        parent_type_name: String,
        field_name: String,
        invalid_type_name: String,
        span: GraphQLSourceSpan,
    },

    #[error("`{input_path}` must have an input type, but `{invalid_type_name}` is an output type")]
    InvalidInputValueWithOutputType {
        input_path: String,
        invalid_type_name: String,
        span: GraphQLSourceSpan,
    },

    #[error("`{type_name}` cannot implement itself")]
    SelfImplementingInterface {
        type_name: String,
        span: GraphQLSourceSpan,
    },

    #[error("`{type_name}` implements `{undefined_interface_name}`, which is not defined")]
    ImplementsUndefinedInterface {
        type_name: String,
        undefined_interface_name: String,
        span: GraphQLSourceSpan,
    },

    #[error("`{type_name}` can only implement interfaces, but `{non_interface_type_name}` is not an interface")]
    ImplementsNonInterfaceType {
        type_name: String,
        non_interface_type_name: String,
        span: GraphQLSourceSpan,
    },

    #[error("`{type_name}` must also implement `{missing_recursive_interface_name}` because `{}` implements it", inheritance_path.join("` > `"))]
    MissingRecursiveInterfaceImplementation {
        type_name: String,
        inheritance_path: Vec<String>,
        missing_recursive_interface_name: String,
        span: GraphQLSourceSpan,
    },

    #[error("`{type_name}` is missing the field `{field_name}` required by the interface `{interface_name}`")]
    MissingInterfaceSpecifiedField {
        type_name: String,
        interface_name: String,
        field_name: String,
        span: GraphQLSourceSpan,
    },

    #[error("`{type_name}.{field_name}` has type `{invalid_field_type}`, which is not a subtype of `{expected_field_type}` as required by the interface `{interface_name}`")]
    InvalidInterfaceSpecifiedFieldType {
        type_name: String,
        interface_name: String,
        field_name: String,
        expected_field_type: String,
        invalid_field_type: String,
        span: GraphQLSourceSpan,
    },

    #[error("`{type_name}.{field_name}` is missing the parameter `{missing_parameter_name}` required by the interface `{interface_name}`")]
    MissingInterfaceSpecifiedFieldParameter {
        type_name: String,
        interface_name: String,
        field_name: String,
        missing_parameter_name: String,
        span: GraphQLSourceSpan,
    },

    #[error("`{type_name}.{field_name}({parameter_name}:)` has type `{invalid_parameter_type}`, but the interface `{interface_name}` declares it as `{expected_parameter_type}`")]
    InvalidInterfaceSpecifiedFieldParameterType {
        type_name: String,
        interface_name: String,
        field_name: String,
        parameter_name: String,
        expected_parameter_type: String,
        invalid_parameter_type: String,
        span: GraphQLSourceSpan,
    },

    #[error("`{type_name}.{field_name}({parameter_name}:)` must be optional because the interface `{interface_name}` does not declare it")]
    InvalidRequiredAdditionalParameterOnInterfaceSpecifiedField {
        type_name: String,
        interface_name: String,
        field_name: String,
        parameter_name: String,
        span: GraphQLSourceSpan,
    },

    #[error("the union `{union_type_name}` can only contain object types, but `{member_type_name}` is a {member_kind}")]
    InvalidUnionMemberTypeKind {
        union_type_name: String,
        member_type_name: String,
        member_kind: &'static str,
        span: GraphQLSourceSpan,
    },

    #[error("input objects form a cycle of non-nullable fields: {}", circular_field_path.join(" > "))]
    CircularInputFieldChain {
        circular_field_path: Vec<String>,
        span: GraphQLSourceSpan,
    },

    #[error("the schema has no query root operation type")]
    MissingQueryRootType,

    #[error("the {operation} root operation type must be an object type, but `{type_name}` is not")]
    NonObjectRootOperationType {
        operation: OperationKind,
        type_name: String,
        span: GraphQLSourceSpan,
    },

    #[error("unknown directive `@{directive_name}`")]
    UndefinedDirective {
        directive_name: String,
        span: GraphQLSourceSpan,
    },

    #[error("the directive `@{directive_name}` is not allowed on {location}")]
    MisplacedDirective {
        directive_name: String,
        location: DirectiveLocationKind,
        span: GraphQLSourceSpan,
    },

    #[error("the directive `@{directive_name}` can only be used once here")]
    RepeatedNonRepeatableDirective {
        directive_name: String,
        span: GraphQLSourceSpan,
    },
}

impl TypeValidationError {
    /// Source locations this error points at, most relevant first.
    pub fn spans(&self) -> Vec<GraphQLSourceSpan> {
        match self {
            Self::DuplicateDefinition { def1, def2, .. }
            | Self::DuplicateSchemaDefinition { def1, def2 } => vec![*def2, *def1],

            Self::UndefinedTypeName { ref_span, .. } => vec![*ref_span],

            Self::MissingQueryRootType => vec![],

            Self::DuplicateRootOperationType { span, .. }
            | Self::RedefinedBuiltin { span, .. }
            | Self::DuplicateMember { span, .. }
            | Self::InvalidDunderPrefixedName { span, .. }
            | Self::EmptyTypeDefinition { span, .. }
            | Self::ExtensionOfUndefinedType { span, .. }
            | Self::ExtensionKindMismatch { span, .. }
            | Self::InvalidOutputFieldWithInputType { span, .. }
            | Self::InvalidInputValueWithOutputType { span, .. }
            | Self::SelfImplementingInterface { span, .. }
            | Self::ImplementsUndefinedInterface { span, .. }
            | Self::ImplementsNonInterfaceType { span, .. }
            | Self::MissingRecursiveInterfaceImplementation { span, .. }
            | Self::MissingInterfaceSpecifiedField { span, .. }
            | Self::InvalidInterfaceSpecifiedFieldType { span, .. }
            | Self::MissingInterfaceSpecifiedFieldParameter { span, .. }
            | Self::InvalidInterfaceSpecifiedFieldParameterType { span, .. }
            | Self::InvalidRequiredAdditionalParameterOnInterfaceSpecifiedField { span, .. }
            | Self::InvalidUnionMemberTypeKind { span, .. }
            | Self::CircularInputFieldChain { span, .. }
            | Self::NonObjectRootOperationType { span, .. }
            | Self::UndefinedDirective { span, .. }
            | Self::MisplacedDirective { span, .. }
            | Self::RepeatedNonRepeatableDirective { span, .. } => vec![*span],
        }
    }
}
