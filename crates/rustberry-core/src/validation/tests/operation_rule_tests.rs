use crate::RuleId;
use crate::validation::tests::check_rule;
use crate::validation::tests::check_rule_with_schema;
use crate::validation::tests::messages;
use crate::validation::tests::span_texts;

mod unique_operation_names {
    use super::*;

    #[test]
    fn distinct_names_are_valid() {
        let diagnostics = check_rule(
            RuleId::UniqueOperationNames,
            "query A { dog { name } } query B { cat { name } } { pet { name } }",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn repeated_name_points_at_both_operations() {
        let query = "query A { dog { name } }\nmutation A { addPet(name: \"x\") { name } }";
        let diagnostics = check_rule(RuleId::UniqueOperationNames, query);

        assert_eq!(messages(&diagnostics), vec!["There can be only one operation named \"A\"."]);
        assert_eq!(span_texts(&diagnostics[0], query), vec!["A", "A"]);
        let spans = &diagnostics[0].spans;
        assert!(spans[0].start_inclusive.byte_offset() > spans[1].start_inclusive.byte_offset());
    }
}

mod lone_anonymous_operation {
    use super::*;

    #[test]
    fn a_single_anonymous_operation_is_valid() {
        let diagnostics = check_rule(
            RuleId::LoneAnonymousOperation,
            "{ dog { ...F } } fragment F on Dog { name }",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn every_anonymous_operation_is_one_diagnostic() {
        let query = "{ dog { name } }\n{ cat { name } }";
        let diagnostics = check_rule(RuleId::LoneAnonymousOperation, query);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "This anonymous operation must be the only defined operation.",
        );
        assert_eq!(
            span_texts(&diagnostics[0], query),
            vec!["{ dog { name } }", "{ cat { name } }"],
        );
    }

    #[test]
    fn anonymous_next_to_named_operation() {
        let query = "{ dog { name } } query Named { cat { name } }";
        let diagnostics = check_rule(RuleId::LoneAnonymousOperation, query);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(span_texts(&diagnostics[0], query), vec!["{ dog { name } }"]);
    }
}

mod known_operation_type {
    use super::*;

    #[test]
    fn configured_roots_are_valid() {
        let diagnostics = check_rule(
            RuleId::KnownOperationType,
            "query { dog { name } } mutation M { addPet(name: \"x\") { name } } subscription S { petCount }",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn missing_roots_are_reported() {
        let query = "mutation M { a } subscription S { a }";
        let diagnostics =
            check_rule_with_schema("type Query { a: Int }", RuleId::KnownOperationType, query);

        assert_eq!(
            messages(&diagnostics),
            vec![
                "Schema is not configured to execute mutation operation.",
                "Schema is not configured to execute subscription operation.",
            ],
        );
        assert_eq!(span_texts(&diagnostics[0], query), vec!["mutation M { a }"]);
    }
}

mod single_field_subscriptions {
    use super::*;

    #[test]
    fn one_root_field_is_valid() {
        let diagnostics = check_rule(
            RuleId::SingleFieldSubscriptions,
            "subscription S { newPet { name } } subscription T { count: petCount count: petCount }",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn extra_root_fields_are_reported_once() {
        let query = "subscription S { newPet { name } petCount __typename }";
        let diagnostics = check_rule(RuleId::SingleFieldSubscriptions, query);

        assert_eq!(
            messages(&diagnostics),
            vec![
                "Subscription \"S\" must select only one top level field.",
                "Subscription \"S\" must not select an introspection top level field.",
            ],
        );
        assert_eq!(span_texts(&diagnostics[0], query), vec!["petCount", "__typename"]);
    }

    #[test]
    fn root_fields_are_collected_through_fragments() {
        let diagnostics = check_rule(
            RuleId::SingleFieldSubscriptions,
            "subscription { ...F } fragment F on Subscription { newPet { name } petCount }",
        );
        assert_eq!(
            messages(&diagnostics),
            vec!["Anonymous Subscription must select only one top level field."],
        );
    }

    #[test]
    fn queries_are_not_checked() {
        let diagnostics =
            check_rule(RuleId::SingleFieldSubscriptions, "{ dog { name } cat { name } }");
        assert!(diagnostics.is_empty());
    }
}
