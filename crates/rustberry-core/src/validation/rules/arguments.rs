use crate::Diagnostic;
use crate::RuleId;
use crate::schema::TypeRegistry;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::validation::typed_walk::DocumentVisitor;
use crate::validation::typed_walk::walk_document;
use crate::validation::utils::for_each_duplicate;
use rustberry_parser::ast;
use rustberry_parser::ast::DirectiveLocationKind;

pub(crate) fn known_argument_names(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut visitor = KnownArgumentNames { registry, diagnostics: vec![] };
    walk_document(document, registry, &mut visitor);
    visitor.diagnostics
}

struct KnownArgumentNames<'a> {
    registry: &'a TypeRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> DocumentVisitor<'a> for KnownArgumentNames<'a> {
    fn visit_field(
        &mut self,
        parent_type: Option<&'a GraphQLType>,
        field: &'a ast::Field,
        field_def: Option<&'a Field>,
    ) {
        let (Some(parent_type), Some(field_def)) = (parent_type, field_def) else { return };
        for argument in &field.arguments {
            if !field_def.parameters.contains_key(&argument.name.value) {
                self.diagnostics.push(Diagnostic::error(
                    RuleId::KnownArgumentNames,
                    format!(
                        "Unknown argument \"{}\" on field \"{}.{}\".",
                        argument.name.value,
                        parent_type.name(),
                        field.name.value,
                    ),
                    argument.name.span,
                ));
            }
        }
    }

    fn visit_directives(
        &mut self,
        directives: &'a [ast::DirectiveAnnotation],
        _location: DirectiveLocationKind,
    ) {
        for directive in directives {
            let Some(directive_def) = self.registry.lookup_directive(&directive.name.value) else {
                continue;
            };
            for argument in &directive.arguments {
                if !directive_def.parameters.contains_key(&argument.name.value) {
                    self.diagnostics.push(Diagnostic::error(
                        RuleId::KnownArgumentNames,
                        format!(
                            "Unknown argument \"{}\" on directive \"@{}\".",
                            argument.name.value,
                            directive.name.value,
                        ),
                        argument.name.span,
                    ));
                }
            }
        }
    }
}

pub(crate) fn unique_argument_names(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut visitor = UniqueArgumentNames { diagnostics: vec![] };
    walk_document(document, registry, &mut visitor);
    visitor.diagnostics
}

struct UniqueArgumentNames {
    diagnostics: Vec<Diagnostic>,
}

impl UniqueArgumentNames {
    fn check(&mut self, arguments: &[ast::Argument]) {
        for_each_duplicate(
            arguments,
            |argument| argument.name.value.as_str(),
            |duplicate, first| self.diagnostics.push(
                Diagnostic::error(
                    RuleId::UniqueArgumentNames,
                    format!("There can be only one argument named \"{}\".", duplicate.name.value),
                    duplicate.name.span,
                ).with_span(first.name.span)
            ),
        );
    }
}

impl<'a> DocumentVisitor<'a> for UniqueArgumentNames {
    fn visit_field(
        &mut self,
        _parent_type: Option<&'a GraphQLType>,
        field: &'a ast::Field,
        _field_def: Option<&'a Field>,
    ) {
        self.check(&field.arguments);
    }

    fn visit_directives(
        &mut self,
        directives: &'a [ast::DirectiveAnnotation],
        _location: DirectiveLocationKind,
    ) {
        for directive in directives {
            self.check(&directive.arguments);
        }
    }
}

/// Non-null parameters without a default must be passed.
pub(crate) fn required_arguments(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut visitor = RequiredArguments { registry, diagnostics: vec![] };
    walk_document(document, registry, &mut visitor);
    visitor.diagnostics
}

struct RequiredArguments<'a> {
    registry: &'a TypeRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> DocumentVisitor<'a> for RequiredArguments<'a> {
    fn visit_field(
        &mut self,
        _parent_type: Option<&'a GraphQLType>,
        field: &'a ast::Field,
        field_def: Option<&'a Field>,
    ) {
        let Some(field_def) = field_def else { return };
        for (param_name, param) in &field_def.parameters {
            if param.is_required() && field.argument(param_name).is_none() {
                self.diagnostics.push(Diagnostic::error(
                    RuleId::RequiredArguments,
                    format!(
                        "Field \"{}\" argument \"{param_name}\" of type \"{}\" is required, but it was not provided.",
                        field.name.value,
                        param.type_annotation,
                    ),
                    field.span,
                ));
            }
        }
    }

    fn visit_directives(
        &mut self,
        directives: &'a [ast::DirectiveAnnotation],
        _location: DirectiveLocationKind,
    ) {
        for directive in directives {
            let Some(directive_def) = self.registry.lookup_directive(&directive.name.value) else {
                continue;
            };
            for (param_name, param) in &directive_def.parameters {
                let provided = directive
                    .arguments
                    .iter()
                    .any(|argument| argument.name.value == *param_name);
                if param.is_required() && !provided {
                    self.diagnostics.push(Diagnostic::error(
                        RuleId::RequiredArguments,
                        format!(
                            "Directive \"@{}\" argument \"{param_name}\" of type \"{}\" is required, but it was not provided.",
                            directive.name.value,
                            param.type_annotation,
                        ),
                        directive.span,
                    ));
                }
            }
        }
    }
}
