use crate::Diagnostic;
use crate::RuleId;
use crate::schema::TypeRegistry;
use crate::validation::Validator;
use crate::validation::tests::PETS_SDL;
use crate::validation::tests::span_texts;
use rustberry_parser::ast;

fn validate(sdl: &str, query: &str) -> Vec<Diagnostic> {
    let registry = TypeRegistry::from_sdl(sdl).unwrap();
    let document = rustberry_parser::parse_executable(query).unwrap();
    Validator::default().validate(&document, &registry)
}

fn rules_of(diagnostics: &[Diagnostic]) -> Vec<RuleId> {
    diagnostics.iter().map(|diagnostic| diagnostic.rule).collect()
}

const HELLO_SDL: &str = "type Query { hello: String }";

#[test]
fn valid_document_has_no_diagnostics() {
    assert!(validate(HELLO_SDL, "{ hello }").is_empty());
    assert!(validate(
        PETS_SDL,
        concat!(
            "query Q($cmd: DogCommand!, $skip: Boolean = false) {\n",
            "  dog @skip(if: $skip) { ...DogFields knows: doesKnowCommand(dogCommand: $cmd) }\n",
            "  pet { ... on Cat { furColor } __typename }\n",
            "}\n",
            "fragment DogFields on Dog { name owner { relatives { name } } }\n",
        ),
    ).is_empty());
}

#[test]
fn unknown_field_is_the_only_diagnostic() {
    let query = "{ bye }";
    let diagnostics = validate(HELLO_SDL, query);

    assert_eq!(rules_of(&diagnostics), vec![RuleId::UnknownField]);
    assert_eq!(span_texts(&diagnostics[0], query), vec!["bye"]);
    assert_eq!(diagnostics[0].to_string(), "1:3: Cannot query field \"bye\" on type \"Query\". [unknown-field]");
}

#[test]
fn self_spreading_fragment_is_one_cycle() {
    let diagnostics = validate(HELLO_SDL, "{ ...A } fragment A on Query { ...A }");
    assert_eq!(rules_of(&diagnostics), vec![RuleId::FragmentCycle]);
}

#[test]
fn two_anonymous_operations_are_one_diagnostic() {
    let query = "{ hello }\n{ hello }";
    let diagnostics = validate(HELLO_SDL, query);

    assert_eq!(rules_of(&diagnostics), vec![RuleId::LoneAnonymousOperation]);
    assert_eq!(span_texts(&diagnostics[0], query), vec!["{ hello }", "{ hello }"]);
}

#[test]
fn diagnostics_are_sorted_by_position_then_rule() {
    let diagnostics = validate(
        PETS_SDL,
        "query Q($unused: Int) { dog { meow } cat { name(x: 1) } }",
    );

    assert_eq!(
        rules_of(&diagnostics),
        vec![RuleId::UnusedVariable, RuleId::UnknownField, RuleId::KnownArgumentNames],
    );
    let offsets: Vec<u32> = diagnostics
        .iter()
        .map(|diagnostic| diagnostic.primary_span().unwrap().start_inclusive.byte_offset())
        .collect();
    assert!(offsets.is_sorted());
}

#[test]
fn validation_is_repeatable() {
    let registry = TypeRegistry::from_sdl(PETS_SDL).unwrap();
    let document =
        rustberry_parser::parse_executable("{ dog { ...Missing meow } } fragment F on Cat { x }").unwrap();
    let validator = Validator::default();

    let first = validator.validate(&document, &registry);
    assert!(!first.is_empty());
    assert_eq!(validator.validate(&document, &registry), first);
}

#[test]
fn rules_can_be_removed_and_added() {
    let registry = TypeRegistry::from_sdl(HELLO_SDL).unwrap();
    let document = rustberry_parser::parse_executable("query Q($unused: Int) { hello }").unwrap();

    let validator = Validator::default().without_rule(RuleId::UnusedVariable);
    assert!(!validator.rule_ids().any(|rule_id| rule_id == RuleId::UnusedVariable));
    assert!(validator.validate(&document, &registry).is_empty());

    fn no_named_operations(document: &ast::ExecutableDocument, _: &TypeRegistry) -> Vec<Diagnostic> {
        document
            .operations()
            .filter_map(|operation| operation.name.as_ref())
            .map(|name| Diagnostic::error(RuleId::UniqueOperationNames, "named", name.span))
            .collect()
    }
    let custom = Validator::empty().with_rule(RuleId::UniqueOperationNames, no_named_operations);
    assert_eq!(custom.rule_ids().collect::<Vec<_>>(), vec![RuleId::UniqueOperationNames]);
    assert_eq!(custom.validate(&document, &registry).len(), 1);
}

#[test]
fn default_validator_runs_every_rule_once() {
    let rule_ids: Vec<RuleId> = Validator::default().rule_ids().collect();
    let expected: Vec<RuleId> = RuleId::ALL
        .into_iter()
        .filter(|rule_id| {
            !matches!(rule_id, RuleId::Syntax | RuleId::SchemaBuild | RuleId::MissingSchema)
        })
        .collect();

    assert_eq!(rule_ids, expected);
}
