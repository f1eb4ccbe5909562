use crate::Diagnostic;
use crate::RuleId;
use crate::schema::TypeRegistry;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::validation::typed_walk::DocumentVisitor;
use crate::validation::typed_walk::walk_document;
use crate::validation::utils::for_each_duplicate;
use indexmap::IndexMap;
use rustberry_parser::GraphQLSourceSpan;
use rustberry_parser::ast;
use rustberry_parser::ast::DirectiveLocationKind;
use rustberry_parser::ast::TypeAnnotation;

/// Literal values must be coercible to the input type expected where they
/// appear: field and directive arguments, and variable defaults. Variables
/// are checked by variable-usage instead.
pub(crate) fn value_type(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut visitor = ValueTypeVisitor { registry, diagnostics: vec![] };
    walk_document(document, registry, &mut visitor);
    visitor.diagnostics
}

struct ValueTypeVisitor<'a> {
    registry: &'a TypeRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl ValueTypeVisitor<'_> {
    fn error(&mut self, message: String, span: GraphQLSourceSpan) {
        self.diagnostics.push(Diagnostic::error(RuleId::ValueType, message, span));
    }

    fn check_arguments(
        &mut self,
        arguments: &[ast::Argument],
        parameters: &IndexMap<String, InputValue>,
    ) {
        for argument in arguments {
            if let Some(param) = parameters.get(&argument.name.value) {
                self.check_value(&argument.value, &param.type_annotation);
            }
        }
    }

    fn check_value(&mut self, value: &ast::Value, expected: &TypeAnnotation) {
        match value {
            ast::Value::Variable(_) => return,
            ast::Value::Null(null) => {
                if !expected.nullable() {
                    self.error(format!("Expected value of type \"{expected}\", found null."), null.span);
                }
                return;
            },
            _ => (),
        }

        match expected {
            TypeAnnotation::List(list_annot) => match value {
                ast::Value::List(list) => {
                    for item in &list.values {
                        self.check_value(item, &list_annot.element_type);
                    }
                },
                // A single item is coerced to a list of one.
                _ => self.check_value(value, &list_annot.element_type),
            },
            TypeAnnotation::Named(named) => {
                let Some(expected_type) = self.registry.lookup_type(&named.name.value) else {
                    return;
                };
                match expected_type {
                    GraphQLType::Scalar(scalar) => self.check_scalar(value, expected, &scalar.name),
                    GraphQLType::Enum(enum_type) => match value {
                        ast::Value::Enum(enum_value) => {
                            if !enum_type.values.contains_key(&enum_value.value) {
                                self.error(
                                    format!(
                                        "Value \"{}\" does not exist in \"{}\" enum.",
                                        enum_value.value,
                                        enum_type.name,
                                    ),
                                    enum_value.span,
                                );
                            }
                        },
                        other => self.error(
                            format!(
                                "Enum \"{}\" cannot represent non-enum value: {other}.",
                                enum_type.name,
                            ),
                            other.span(),
                        ),
                    },
                    GraphQLType::InputObject(input_type) => match value {
                        ast::Value::Object(object) => self.check_input_object(object, input_type),
                        other => self.error(
                            format!("Expected value of type \"{expected}\", found {other}."),
                            other.span(),
                        ),
                    },
                    GraphQLType::Interface(_) | GraphQLType::Object(_) | GraphQLType::Union(_) => (),
                }
            },
        }
    }

    fn check_input_object(&mut self, object: &ast::ObjectValue, input_type: &InputObjectType) {
        for field in &object.fields {
            match input_type.fields.get(&field.name.value) {
                Some(field_def) => self.check_value(&field.value, &field_def.type_annotation),
                None => self.error(
                    format!(
                        "Field \"{}\" is not defined by type \"{}\".",
                        field.name.value,
                        input_type.name,
                    ),
                    field.name.span,
                ),
            }
        }
        for (field_name, field_def) in &input_type.fields {
            let provided = object.fields.iter().any(|field| field.name.value == *field_name);
            if field_def.is_required() && !provided {
                self.error(
                    format!(
                        "Field \"{}.{field_name}\" of required type \"{}\" was not provided.",
                        input_type.name,
                        field_def.type_annotation,
                    ),
                    object.span,
                );
            }
        }
    }

    fn check_scalar(&mut self, value: &ast::Value, expected: &TypeAnnotation, scalar_name: &str) {
        let accepted = match (scalar_name, value) {
            ("Int", ast::Value::Int(int)) => {
                if int.as_i32().is_none() {
                    self.error(
                        format!("Int cannot represent non 32-bit signed integer value: {}", int.raw),
                        int.span,
                    );
                }
                return;
            },
            ("Float", ast::Value::Float(float)) => {
                if float.as_f64().is_none() {
                    self.error(
                        format!("Float cannot represent non numeric value: {}", float.raw),
                        float.span,
                    );
                }
                return;
            },
            ("Int", _) => false,
            ("Float", value) => matches!(value, ast::Value::Int(_)),
            ("String", value) => matches!(value, ast::Value::String(_)),
            ("Boolean", value) => matches!(value, ast::Value::Boolean(_)),
            ("ID", value) => matches!(value, ast::Value::String(_) | ast::Value::Int(_)),
            // Custom scalars define their own literal coercion.
            _ => true,
        };
        if !accepted {
            self.error(
                format!("Expected value of type \"{expected}\", found {value}."),
                value.span(),
            );
        }
    }
}

impl<'a> DocumentVisitor<'a> for ValueTypeVisitor<'a> {
    fn visit_variable_definition(&mut self, var_def: &'a ast::VariableDefinition) {
        if let Some(default_value) = &var_def.default_value {
            self.check_value(default_value, &var_def.var_type);
        }
    }

    fn visit_field(
        &mut self,
        _parent_type: Option<&'a GraphQLType>,
        field: &'a ast::Field,
        field_def: Option<&'a Field>,
    ) {
        if let Some(field_def) = field_def {
            self.check_arguments(&field.arguments, &field_def.parameters);
        }
    }

    fn visit_directives(
        &mut self,
        directives: &'a [ast::DirectiveAnnotation],
        _location: DirectiveLocationKind,
    ) {
        for directive in directives {
            if let Some(directive_def) = self.registry.lookup_directive(&directive.name.value) {
                self.check_arguments(&directive.arguments, &directive_def.parameters);
            }
        }
    }
}

pub(crate) fn unique_input_field_names(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut visitor = UniqueInputFieldNames { diagnostics: vec![] };
    walk_document(document, registry, &mut visitor);
    visitor.diagnostics
}

struct UniqueInputFieldNames {
    diagnostics: Vec<Diagnostic>,
}

impl UniqueInputFieldNames {
    fn check_arguments(&mut self, arguments: &[ast::Argument]) {
        for argument in arguments {
            self.check_value(&argument.value);
        }
    }

    fn check_value(&mut self, value: &ast::Value) {
        match value {
            ast::Value::List(list) => {
                for item in &list.values {
                    self.check_value(item);
                }
            },
            ast::Value::Object(object) => {
                for_each_duplicate(
                    &object.fields,
                    |field| field.name.value.as_str(),
                    |duplicate, first| self.diagnostics.push(
                        Diagnostic::error(
                            RuleId::UniqueInputFieldNames,
                            format!(
                                "There can be only one input field named \"{}\".",
                                duplicate.name.value,
                            ),
                            duplicate.name.span,
                        ).with_span(first.name.span)
                    ),
                );
                for field in &object.fields {
                    self.check_value(&field.value);
                }
            },
            _ => (),
        }
    }
}

impl<'a> DocumentVisitor<'a> for UniqueInputFieldNames {
    fn visit_variable_definition(&mut self, var_def: &'a ast::VariableDefinition) {
        if let Some(default_value) = &var_def.default_value {
            self.check_value(default_value);
        }
    }

    fn visit_field(
        &mut self,
        _parent_type: Option<&'a GraphQLType>,
        field: &'a ast::Field,
        _field_def: Option<&'a Field>,
    ) {
        self.check_arguments(&field.arguments);
    }

    fn visit_directives(
        &mut self,
        directives: &'a [ast::DirectiveAnnotation],
        _location: DirectiveLocationKind,
    ) {
        for directive in directives {
            self.check_arguments(&directive.arguments);
        }
    }
}
