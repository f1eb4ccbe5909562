use crate::Diagnostic;
use crate::RuleId;
use crate::schema::TypeRegistry;
use crate::validation::typed_walk::DocumentVisitor;
use crate::validation::typed_walk::walk_document;
use crate::validation::utils::for_each_duplicate;
use rustberry_parser::ast;
use rustberry_parser::ast::DirectiveLocationKind;

pub(crate) fn known_directives(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut visitor = DirectiveVisitor::new(registry, |registry, directive, _location| {
        registry.lookup_directive(&directive.name.value).is_none().then(|| Diagnostic::error(
            RuleId::KnownDirectives,
            format!("Unknown directive \"@{}\".", directive.name.value),
            directive.span,
        ))
    });
    walk_document(document, registry, &mut visitor);
    visitor.diagnostics
}

pub(crate) fn directive_location(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut visitor = DirectiveVisitor::new(registry, |registry, directive, location| {
        let directive_def = registry.lookup_directive(&directive.name.value)?;
        (!directive_def.allowed_at(location)).then(|| Diagnostic::error(
            RuleId::DirectiveLocation,
            format!("Directive \"@{}\" may not be used on {location}.", directive.name.value),
            directive.span,
        ))
    });
    walk_document(document, registry, &mut visitor);
    visitor.diagnostics
}

/// Runs a per-directive check on every directive annotation in a document.
struct DirectiveVisitor<'a, F> {
    registry: &'a TypeRegistry,
    check: F,
    diagnostics: Vec<Diagnostic>,
}

impl<'a, F> DirectiveVisitor<'a, F>
where
    F: Fn(&TypeRegistry, &ast::DirectiveAnnotation, DirectiveLocationKind) -> Option<Diagnostic>,
{
    fn new(registry: &'a TypeRegistry, check: F) -> Self {
        Self { registry, check, diagnostics: vec![] }
    }
}

impl<'a, F> DocumentVisitor<'a> for DirectiveVisitor<'a, F>
where
    F: Fn(&TypeRegistry, &ast::DirectiveAnnotation, DirectiveLocationKind) -> Option<Diagnostic>,
{
    fn visit_directives(
        &mut self,
        directives: &'a [ast::DirectiveAnnotation],
        location: DirectiveLocationKind,
    ) {
        for directive in directives {
            if let Some(diagnostic) = (self.check)(self.registry, directive, location) {
                self.diagnostics.push(diagnostic);
            }
        }
    }
}

/// Non-repeatable directives may appear at most once per location.
/// Unknown directives are left to known-directives.
pub(crate) fn unique_directives_per_location(
    document: &ast::ExecutableDocument,
    registry: &TypeRegistry,
) -> Vec<Diagnostic> {
    let mut visitor = UniqueDirectivesPerLocation { registry, diagnostics: vec![] };
    walk_document(document, registry, &mut visitor);
    visitor.diagnostics
}

struct UniqueDirectivesPerLocation<'a> {
    registry: &'a TypeRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> DocumentVisitor<'a> for UniqueDirectivesPerLocation<'a> {
    fn visit_directives(
        &mut self,
        directives: &'a [ast::DirectiveAnnotation],
        _location: DirectiveLocationKind,
    ) {
        let registry = self.registry;
        let unique_directives = directives.iter().filter(|directive| {
            registry
                .lookup_directive(&directive.name.value)
                .is_some_and(|directive_def| !directive_def.repeatable)
        });
        for_each_duplicate(
            unique_directives,
            |directive| directive.name.value.as_str(),
            |duplicate, first| self.diagnostics.push(
                Diagnostic::error(
                    RuleId::UniqueDirectivesPerLocation,
                    format!(
                        "The directive \"@{}\" can only be used once at this location.",
                        duplicate.name.value,
                    ),
                    duplicate.span,
                ).with_span(first.span)
            ),
        );
    }
}
