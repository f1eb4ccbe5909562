use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::is_subtype;
use indexmap::IndexMap;
use std::collections::HashSet;

pub(crate) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    implemented_iface_names: HashSet<&'a str>,
    inheritance_path: Vec<&'a str>,
    type_: &'a ObjectOrInterfaceTypeData,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_: &'a ObjectOrInterfaceTypeData,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            implemented_iface_names: type_.interface_names().into_iter().collect(),
            inheritance_path: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        self.validate_interface_impls(&mut HashSet::new());
        self.validate_field_types();
        self.errors
    }

    fn validate_interface_impls(&mut self, verified_interface_impls: &mut HashSet<&'a str>) {
        let type_ = self.type_;
        let type_name = type_.name.as_str();
        let mut iface_names: Vec<&'a str> =
            self.implemented_iface_names.iter().copied().collect();
        iface_names.sort_unstable();

        for iface_name in iface_names {
            // Interfaces can implement other interfaces, so the same
            // interface may be reached more than once on this type.
            if !verified_interface_impls.insert(iface_name) {
                continue;
            }

            let iface_span = type_
                .interfaces
                .iter()
                .find(|name| name.value == iface_name)
                .map_or(type_.span, |name| name.span);

            if iface_name == type_name {
                self.errors.push(TypeValidationError::SelfImplementingInterface {
                    type_name: type_name.to_string(),
                    span: iface_span,
                });
                continue;
            }

            let iface_type =
                if let Some(iface_type) = self.types_map.get(iface_name) { iface_type } else {
                    self.errors.push(
                        TypeValidationError::ImplementsUndefinedInterface {
                            type_name: type_name.to_string(),
                            undefined_interface_name: iface_name.to_string(),
                            span: iface_span,
                        }
                    );
                    continue;
                };

            let iface =
                if let Some(iface) = iface_type.as_interface() { &iface.0 } else {
                    self.errors.push(
                        TypeValidationError::ImplementsNonInterfaceType {
                            type_name: type_name.to_string(),
                            non_interface_type_name: iface_name.to_string(),
                            span: iface_span,
                        }
                    );
                    continue;
                };

            // The implementing type must also explicitly implement each of
            // the interfaces *this* interface implements.
            //
            // https://spec.graphql.org/October2021/#IsValidImplementation()
            let iface_implemented_iface_names: HashSet<&'a str> =
                iface.interface_names().into_iter().collect();
            let mut missing_recursive_interface_names: Vec<&&str> = iface_implemented_iface_names
                .iter()
                .filter(|name| !type_.implements(name) && **name != type_name)
                .collect();
            missing_recursive_interface_names.sort_unstable();
            for missing_rec_iface_name in missing_recursive_interface_names {
                let mut inheritance_path: Vec<String> =
                    self.inheritance_path.iter().map(|s| s.to_string()).collect();
                inheritance_path.push(iface_name.to_string());
                self.errors.push(
                    TypeValidationError::MissingRecursiveInterfaceImplementation {
                        type_name: type_name.to_string(),
                        inheritance_path,
                        missing_recursive_interface_name: missing_rec_iface_name.to_string(),
                        span: iface_span,
                    }
                );
            }

            let mut child_inheritance_path = self.inheritance_path.clone();
            child_inheritance_path.push(iface_name);
            let mut child_validator = ObjectOrInterfaceTypeValidator {
                errors: vec![],
                implemented_iface_names: iface_implemented_iface_names,
                inheritance_path: child_inheritance_path,
                type_,
                types_map: self.types_map,
            };
            child_validator.validate_interface_impls(verified_interface_impls);
            self.errors.append(&mut child_validator.errors);

            self.validate_interface_fields(iface_name, iface);
        }
    }

    /// Every field of `iface` must be present on the implementing type with
    /// a covariant type and equivalent parameters.
    fn validate_interface_fields(&mut self, iface_name: &str, iface: &ObjectOrInterfaceTypeData) {
        let type_ = self.type_;
        let type_name = type_.name.as_str();
        for (field_name, iface_field) in &iface.fields {
            let type_field =
                if let Some(type_field) = type_.fields.get(field_name) { type_field } else {
                    self.errors.push(
                        TypeValidationError::MissingInterfaceSpecifiedField {
                            type_name: type_name.to_string(),
                            interface_name: iface_name.to_string(),
                            field_name: field_name.to_string(),
                            span: type_.span,
                        }
                    );
                    continue;
                };

            // For each parameter defined on this field in the interface,
            // there must be an equivalently-typed parameter on the
            // implementing type.
            for (param_name, iface_param) in &iface_field.parameters {
                let type_param =
                    if let Some(type_param) = type_field.parameters.get(param_name) {
                        type_param
                    } else {
                        self.errors.push(
                            TypeValidationError::MissingInterfaceSpecifiedFieldParameter {
                                type_name: type_name.to_string(),
                                interface_name: iface_name.to_string(),
                                field_name: field_name.to_string(),
                                missing_parameter_name: param_name.to_string(),
                                span: type_field.span,
                            }
                        );
                        continue;
                    };

                if !type_param.type_annotation.is_equivalent_to(&iface_param.type_annotation) {
                    self.errors.push(
                        TypeValidationError::InvalidInterfaceSpecifiedFieldParameterType {
                            type_name: type_name.to_string(),
                            interface_name: iface_name.to_string(),
                            field_name: field_name.to_string(),
                            parameter_name: param_name.to_string(),
                            expected_parameter_type: iface_param.type_annotation.to_string(),
                            invalid_parameter_type: type_param.type_annotation.to_string(),
                            span: type_param.type_annotation.span(),
                        }
                    );
                }
            }

            // Parameters the interface doesn't know about must be optional.
            //
            // See 2.d at https://spec.graphql.org/October2021/#IsValidImplementation()
            for (param_name, type_param) in &type_field.parameters {
                if !iface_field.parameters.contains_key(param_name) && type_param.is_required() {
                    self.errors.push(
                        TypeValidationError::InvalidRequiredAdditionalParameterOnInterfaceSpecifiedField {
                            type_name: type_name.to_string(),
                            interface_name: iface_name.to_string(),
                            field_name: field_name.to_string(),
                            parameter_name: param_name.to_string(),
                            span: type_param.span,
                        }
                    );
                }
            }

            if !is_subtype(self.types_map, &type_field.type_annotation, &iface_field.type_annotation) {
                self.errors.push(
                    TypeValidationError::InvalidInterfaceSpecifiedFieldType {
                        type_name: type_name.to_string(),
                        interface_name: iface_name.to_string(),
                        field_name: field_name.to_string(),
                        expected_field_type: iface_field.type_annotation.to_string(),
                        invalid_field_type: type_field.type_annotation.to_string(),
                        span: type_field.type_annotation.span(),
                    }
                );
            }
        }
    }

    fn validate_field_types(&mut self) {
        let type_ = self.type_;
        for (field_name, field) in &type_.fields {
            // All fields must be declared with an output type.
            //
            // https://spec.graphql.org/October2021/#sel-JAHZhCFDBFABLBgB_pM
            let innermost = field.type_annotation.innermost_name();
            match self.types_map.get(&innermost.value) {
                Some(field_type) if !field_type.is_output_type() => self.errors.push(
                    TypeValidationError::InvalidOutputFieldWithInputType {
                        parent_type_name: type_.name.to_string(),
                        field_name: field_name.to_string(),
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

            for (param_name, param) in &field.parameters {
                // All parameters must be declared with an input type.
                //
                // https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBDCAACEB6yD
                let innermost = param.type_annotation.innermost_name();
                match self.types_map.get(&innermost.value) {
                    Some(param_type) if !param_type.is_input_type() => self.errors.push(
                        TypeValidationError::InvalidInputValueWithOutputType {
                            input_path: format!("{}.{field_name}({param_name}:)", type_.name),
                            invalid_type_name: innermost.value.to_string(),
                            span: param.type_annotation.span(),
                        }
                    ),
                    Some(_) => (),
                    None => self.errors.push(TypeValidationError::UndefinedTypeName {
                        undefined_type_name: innermost.value.to_string(),
                        ref_span: innermost.span,
                    }),
                }
            }
        }
    }
}
