use crate::types::GraphQLType;
use indexmap::IndexMap;
use rustberry_parser::ast::TypeAnnotation;

/// `true` if a value of type `maybe_sub` can always be used where `sup` is
/// expected: equal types, a non-null version of `sup`, or (for named types)
/// an implementation or member of the abstract type `sup`.
pub(crate) fn is_subtype(
    types_map: &IndexMap<String, GraphQLType>,
    maybe_sub: &TypeAnnotation,
    sup: &TypeAnnotation,
) -> bool {
    is_subtype_impl(types_map, maybe_sub, maybe_sub.nullable(), sup, sup.nullable())
}

fn is_subtype_impl(
    types_map: &IndexMap<String, GraphQLType>,
    sub: &TypeAnnotation,
    sub_nullable: bool,
    sup: &TypeAnnotation,
    sup_nullable: bool,
) -> bool {
    if !sup_nullable && sub_nullable {
        return false;
    }
    match (sub, sup) {
        (TypeAnnotation::List(sub_list), TypeAnnotation::List(sup_list)) => is_subtype_impl(
            types_map,
            &sub_list.element_type,
            sub_list.element_type.nullable(),
            &sup_list.element_type,
            sup_list.element_type.nullable(),
        ),
        (TypeAnnotation::Named(sub_named), TypeAnnotation::Named(sup_named)) =>
            sub_named.name.value == sup_named.name.value
                || is_possible_type(types_map, &sup_named.name.value, &sub_named.name.value),
        _ => false,
    }
}

/// `true` if `candidate` is a member of the union `abstract_name`, or
/// implements the interface `abstract_name`.
pub(crate) fn is_possible_type(
    types_map: &IndexMap<String, GraphQLType>,
    abstract_name: &str,
    candidate: &str,
) -> bool {
    match types_map.get(abstract_name) {
        Some(GraphQLType::Union(union_type)) => union_type.has_member(candidate),
        Some(GraphQLType::Interface(_)) => types_map
            .get(candidate)
            .and_then(GraphQLType::as_object_or_interface)
            .is_some_and(|data| data.implements(abstract_name)),
        _ => false,
    }
}
