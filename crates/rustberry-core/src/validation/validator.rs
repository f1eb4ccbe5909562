use crate::Diagnostic;
use crate::RuleId;
use crate::schema::TypeRegistry;
use crate::validation::rules;
use rustberry_parser::ast;

/// One validation rule. Rules never mutate the document and never depend on
/// each other's results.
pub type ValidationRule = fn(&ast::ExecutableDocument, &TypeRegistry) -> Vec<Diagnostic>;

/// An ordered set of validation rules.
///
/// [`Validator::default()`] runs every built-in rule.
///
/// ```
/// use rustberry_core::RuleId;
/// use rustberry_core::schema::TypeRegistry;
/// use rustberry_core::validation::Validator;
///
/// let registry = TypeRegistry::from_sdl("type Query { a: Int }").unwrap();
/// let document = rustberry_parser::parse_executable("query Q($unused: Int) { a }").unwrap();
///
/// let all_rules = Validator::default();
/// assert_eq!(all_rules.validate(&document, &registry).len(), 1);
///
/// let lenient = Validator::default().without_rule(RuleId::UnusedVariable);
/// assert!(lenient.validate(&document, &registry).is_empty());
/// ```
#[derive(Clone)]
pub struct Validator {
    rules: Vec<(RuleId, ValidationRule)>,
}

impl Validator {
    pub fn new(rules: Vec<(RuleId, ValidationRule)>) -> Self {
        Self { rules }
    }

    /// A validator that runs no rules at all.
    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn with_rule(mut self, rule_id: RuleId, rule: ValidationRule) -> Self {
        self.rules.push((rule_id, rule));
        self
    }

    pub fn without_rule(mut self, rule_id: RuleId) -> Self {
        self.rules.retain(|(id, _)| *id != rule_id);
        self
    }

    pub fn rule_ids(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.rules.iter().map(|(id, _)| *id)
    }

    /// Runs every rule and returns all diagnostics, sorted by position and
    /// then by rule.
    pub fn validate(
        &self,
        document: &ast::ExecutableDocument,
        registry: &TypeRegistry,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = vec![];
        for (rule_id, rule) in &self.rules {
            let found = rule(document, registry);
            log::trace!("{rule_id}: {} diagnostic(s)", found.len());
            diagnostics.extend(found);
        }
        Diagnostic::sort(&mut diagnostics);
        log::debug!(
            "validated document with {} rule(s): {} diagnostic(s)",
            self.rules.len(),
            diagnostics.len(),
        );
        diagnostics
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(rules::all())
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rule_ids().collect::<Vec<_>>())
            .finish()
    }
}
