use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValue;
use indexmap::IndexMap;
use rustberry_parser::ast::TypeAnnotation;
use std::collections::HashSet;

pub(crate) struct InputObjectTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a InputObjectType,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(
        type_: &'a InputObjectType,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        for (field_name, field) in &self.type_.fields {
            let innermost = field.type_annotation.innermost_name();
            match self.types_map.get(&innermost.value) {
                // Input object fields can not be declared with an output type.
                //
                // https://spec.graphql.org/October2021/#sel-IAHhBXDDBFCAACEB4iG
                Some(field_type) if !field_type.is_input_type() => self.errors.push(
                    TypeValidationError::InvalidInputValueWithOutputType {
                        input_path: format!("{}.{field_name}", self.type_.name),
                        invalid_type_name: innermost.value.to_string(),
                        span: field.type_annotation.span(),
                    }
                ),
                Some(_) => (),
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    undefined_type_name: innermost.value.to_string(),
                    ref_span: innermost.span,
                }),
            }
        }

        let type_ = self.type_;
        self.validate_fields_recursive(
            &type_.name,
            &type_.fields,
            &mut vec![],
            HashSet::from([type_.name.as_str()]),
        );
        self.errors
    }

    /// Follows non-nullable, non-list fields looking for a path back to the
    /// type being validated. Such a cycle could never be satisfied by a
    /// finite value. Returns `true` once a cycle has been reported.
    fn validate_fields_recursive(
        &mut self,
        type_name: &'a str,
        fields: &'a IndexMap<String, InputValue>,
        path: &mut Vec<String>,
        seen_type_names: HashSet<&'a str>,
    ) -> bool {
        for (field_name, field) in fields {
            if annot_contains_cycle_breaking_type(&field.type_annotation) {
                continue;
            }
            let innermost_type_name = field.type_annotation.innermost_name().value.as_str();
            path.push(format!("{type_name}.{field_name}"));
            if innermost_type_name == self.type_.name {
                let mut circular_field_path = path.clone();
                circular_field_path.push(innermost_type_name.to_string());
                self.errors.push(TypeValidationError::CircularInputFieldChain {
                    circular_field_path,
                    span: self.type_.span,
                });
                return true;
            }
            if !seen_type_names.contains(innermost_type_name)
                && let Some(GraphQLType::InputObject(input_obj_type)) =
                    self.types_map.get(innermost_type_name) {
                let mut seen_type_names = seen_type_names.clone();
                seen_type_names.insert(innermost_type_name);
                if self.validate_fields_recursive(
                    innermost_type_name,
                    &input_obj_type.fields,
                    path,
                    seen_type_names,
                ) {
                    return true;
                }
            }
            path.pop();
        }
        false
    }
}

/// A nullable wrapper or a list anywhere in the annotation lets a value end
/// the chain (with `null` or `[]`).
fn annot_contains_cycle_breaking_type(type_annot: &TypeAnnotation) -> bool {
    match type_annot {
        TypeAnnotation::List(_) => true,
        TypeAnnotation::Named(named_annot) => named_annot.nullable,
    }
}
