mod arguments;
mod directives;
mod field_merging;
mod fields;
mod fragments;
mod operations;
mod values;
mod variables;

pub(crate) use arguments::known_argument_names;
pub(crate) use arguments::required_arguments;
pub(crate) use arguments::unique_argument_names;
pub(crate) use directives::directive_location;
pub(crate) use directives::known_directives;
pub(crate) use directives::unique_directives_per_location;
pub(crate) use field_merging::field_merging;
pub(crate) use fields::leaf_field_selections;
pub(crate) use fields::unknown_field;
pub(crate) use fragments::fragment_cycle;
pub(crate) use fragments::fragment_on_composite_type;
pub(crate) use fragments::known_fragment_names;
pub(crate) use fragments::known_type_names;
pub(crate) use fragments::possible_fragment_spread;
pub(crate) use fragments::unique_fragment_names;
pub(crate) use fragments::unused_fragment;
pub(crate) use operations::known_operation_type;
pub(crate) use operations::lone_anonymous_operation;
pub(crate) use operations::single_field_subscriptions;
pub(crate) use operations::unique_operation_names;
pub(crate) use values::unique_input_field_names;
pub(crate) use values::value_type;
pub(crate) use variables::undefined_variable;
pub(crate) use variables::unique_variable_names;
pub(crate) use variables::unused_variable;
pub(crate) use variables::variable_usage;
pub(crate) use variables::variables_are_input_types;

use crate::RuleId;
use crate::validation::ValidationRule;

fn rule(rule_id: RuleId, rule: ValidationRule) -> (RuleId, ValidationRule) {
    (rule_id, rule)
}

/// Every built-in rule, in the order they run.
pub(super) fn all() -> Vec<(RuleId, ValidationRule)> {
    vec![
        rule(RuleId::UniqueOperationNames, unique_operation_names),
        rule(RuleId::LoneAnonymousOperation, lone_anonymous_operation),
        rule(RuleId::KnownOperationType, known_operation_type),
        rule(RuleId::SingleFieldSubscriptions, single_field_subscriptions),
        rule(RuleId::UnknownField, unknown_field),
        rule(RuleId::FieldMerging, field_merging),
        rule(RuleId::KnownArgumentNames, known_argument_names),
        rule(RuleId::UniqueArgumentNames, unique_argument_names),
        rule(RuleId::RequiredArguments, required_arguments),
        rule(RuleId::ValueType, value_type),
        rule(RuleId::UniqueInputFieldNames, unique_input_field_names),
        rule(RuleId::UniqueVariableNames, unique_variable_names),
        rule(RuleId::VariablesAreInputTypes, variables_are_input_types),
        rule(RuleId::UndefinedVariable, undefined_variable),
        rule(RuleId::UnusedVariable, unused_variable),
        rule(RuleId::VariableUsage, variable_usage),
        rule(RuleId::UniqueFragmentNames, unique_fragment_names),
        rule(RuleId::KnownFragmentNames, known_fragment_names),
        rule(RuleId::FragmentCycle, fragment_cycle),
        rule(RuleId::KnownTypeNames, known_type_names),
        rule(RuleId::FragmentOnCompositeType, fragment_on_composite_type),
        rule(RuleId::PossibleFragmentSpread, possible_fragment_spread),
        rule(RuleId::UnusedFragment, unused_fragment),
        rule(RuleId::KnownDirectives, known_directives),
        rule(RuleId::DirectiveLocation, directive_location),
        rule(RuleId::UniqueDirectivesPerLocation, unique_directives_per_location),
        rule(RuleId::LeafFieldSelections, leaf_field_selections),
    ]
}
