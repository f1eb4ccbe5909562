//! Schema, type, directive and extension definitions.

use super::definition_keyword_description;
use super::shared_grammar::ConstContext;
use crate::DocumentKind;
use crate::GraphQLErrorNote;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParser;
use crate::GraphQLSourceSpan;
use crate::ast;
use crate::ast::DirectiveLocationKind;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;

const TYPE_KEYWORDS: [&str; 6] = ["scalar", "type", "interface", "union", "enum", "input"];

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    pub(super) fn parse_type_system_definition(
        &mut self,
    ) -> Result<ast::TypeSystemDefinition, GraphQLParseError> {
        let description = self.parse_description()?;
        let token = self.peek_token()?;
        let start = description.as_ref().map_or(token.span, |desc| desc.span);

        match token.kind {
            GraphQLTokenKind::Name("schema") => {
                self.parse_schema_definition(description, start, false)
                    .map(ast::TypeSystemDefinition::Schema)
            },
            GraphQLTokenKind::Name(keyword) if TYPE_KEYWORDS.contains(&keyword) => {
                self.parse_type_definition(description, start, false)
                    .map(ast::TypeSystemDefinition::Type)
            },
            GraphQLTokenKind::Name("directive") => {
                self.parse_directive_definition(description, start)
                    .map(ast::TypeSystemDefinition::Directive)
            },
            GraphQLTokenKind::Name("extend") => {
                if let Some(description) = description {
                    return Err(GraphQLParseError::new(
                        "extensions cannot have descriptions",
                        description.span,
                        GraphQLParseErrorKind::InvalidSyntax,
                    ).with_note(GraphQLErrorNote::help(
                        "move the description onto the original definition",
                    )));
                }
                self.parse_type_system_extension()
            },
            GraphQLTokenKind::Name(keyword @ ("query" | "mutation" | "subscription" | "fragment")) => {
                let found = definition_keyword_description(keyword).unwrap_or("an operation");
                Err(self.wrong_document_kind(&token, found, DocumentKind::Schema))
            },
            GraphQLTokenKind::CurlyBraceOpen => {
                Err(self.wrong_document_kind(&token, "an operation", DocumentKind::Schema))
            },
            _ => Err(self.unexpected(
                &token,
                &[
                    "`schema`", "`scalar`", "`type`", "`interface`", "`union`", "`enum`",
                    "`input`", "`directive`", "`extend`",
                ],
            )),
        }
    }

    fn parse_type_system_extension(
        &mut self,
    ) -> Result<ast::TypeSystemDefinition, GraphQLParseError> {
        let extend = self.expect_keyword("extend")?;
        let token = self.peek_token()?;
        match token.kind {
            GraphQLTokenKind::Name("schema") => {
                self.parse_schema_definition(None, extend.span, true)
                    .map(ast::TypeSystemDefinition::SchemaExtension)
            },
            GraphQLTokenKind::Name(keyword) if TYPE_KEYWORDS.contains(&keyword) => {
                self.parse_type_definition(None, extend.span, true)
                    .map(ast::TypeSystemDefinition::TypeExtension)
            },
            _ => Err(self.unexpected(
                &token,
                &["`schema`", "`scalar`", "`type`", "`interface`", "`union`", "`enum`", "`input`"],
            )),
        }
    }

    /// Error for an extension that adds nothing to the definition it
    /// extends.
    fn empty_extension(&self, keyword: &GraphQLToken<'src>, adds: &str) -> GraphQLParseError {
        let keyword_text = keyword.kind.display();
        GraphQLParseError::new(
            format!("`extend {keyword_text}` must add {adds}"),
            keyword.span,
            GraphQLParseErrorKind::InvalidEmptyConstruct {
                construct: format!("extend {keyword_text}"),
            },
        )
    }

    // =========================================================================
    // Schema definition
    // =========================================================================

    fn parse_schema_definition(
        &mut self,
        description: Option<ast::StringValue>,
        start: GraphQLSourceSpan,
        is_extension: bool,
    ) -> Result<ast::SchemaDefinition, GraphQLParseError> {
        let keyword = self.expect_keyword("schema")?;
        let directives = self.parse_directive_annotations(ConstContext::ConstDirectiveArgument)?;

        let root_operations =
            if !is_extension || self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
                self.parse_delimited(
                    &GraphQLTokenKind::CurlyBraceOpen,
                    &GraphQLTokenKind::CurlyBraceClose,
                    "root operation types",
                    false,
                    Self::parse_root_operation_type_definition,
                )?.0
            } else {
                Vec::new()
            };

        if is_extension && directives.is_empty() && root_operations.is_empty() {
            return Err(self.empty_extension(&keyword, "directives or root operation types"));
        }

        Ok(ast::SchemaDefinition {
            description,
            directives,
            root_operations,
            span: self.span_from(start),
        })
    }

    fn parse_root_operation_type_definition(
        &mut self,
    ) -> Result<ast::RootOperationTypeDefinition, GraphQLParseError> {
        let token = self.peek_token()?;
        let Some(operation_kind) = token.kind.as_name().and_then(ast::OperationKind::from_keyword)
        else {
            return Err(self.unexpected(&token, &["`query`", "`mutation`", "`subscription`"]));
        };
        self.consume_token()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let named_type = self.expect_name()?;
        Ok(ast::RootOperationTypeDefinition {
            operation_kind,
            named_type,
            span: self.span_from(token.span),
        })
    }

    // =========================================================================
    // Type definitions
    // =========================================================================

    /// Parses any of the six type definitions (or, with `is_extension`, their
    /// extensions) starting at the keyword.
    fn parse_type_definition(
        &mut self,
        description: Option<ast::StringValue>,
        start: GraphQLSourceSpan,
        is_extension: bool,
    ) -> Result<ast::TypeDefinition, GraphQLParseError> {
        let keyword = self.consume_token()?;
        let name = self.expect_name()?;

        let definition = match keyword.kind {
            GraphQLTokenKind::Name("scalar") => {
                let directives =
                    self.parse_directive_annotations(ConstContext::ConstDirectiveArgument)?;
                if is_extension && directives.is_empty() {
                    return Err(self.empty_extension(&keyword, "directives"));
                }
                ast::TypeDefinition::Scalar(ast::ScalarTypeDefinition {
                    description,
                    name,
                    directives,
                    span: self.span_from(start),
                })
            },
            GraphQLTokenKind::Name(kw @ ("type" | "interface")) => {
                let implements = self.parse_implements_interfaces()?;
                let directives =
                    self.parse_directive_annotations(ConstContext::ConstDirectiveArgument)?;
                let fields = self.parse_fields_definition()?;
                if is_extension && implements.is_empty() && directives.is_empty() && fields.is_empty() {
                    return Err(self.empty_extension(&keyword, "interfaces, directives or fields"));
                }
                let span = self.span_from(start);
                if kw == "type" {
                    ast::TypeDefinition::Object(ast::ObjectTypeDefinition {
                        description,
                        name,
                        implements,
                        directives,
                        fields,
                        span,
                    })
                } else {
                    ast::TypeDefinition::Interface(ast::InterfaceTypeDefinition {
                        description,
                        name,
                        implements,
                        directives,
                        fields,
                        span,
                    })
                }
            },
            GraphQLTokenKind::Name("union") => {
                let directives =
                    self.parse_directive_annotations(ConstContext::ConstDirectiveArgument)?;
                let members = self.parse_union_members()?;
                if is_extension && directives.is_empty() && members.is_empty() {
                    return Err(self.empty_extension(&keyword, "directives or member types"));
                }
                ast::TypeDefinition::Union(ast::UnionTypeDefinition {
                    description,
                    name,
                    directives,
                    members,
                    span: self.span_from(start),
                })
            },
            GraphQLTokenKind::Name("enum") => {
                let directives =
                    self.parse_directive_annotations(ConstContext::ConstDirectiveArgument)?;
                let values =
                    if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
                        self.parse_delimited(
                            &GraphQLTokenKind::CurlyBraceOpen,
                            &GraphQLTokenKind::CurlyBraceClose,
                            "enum values",
                            false,
                            Self::parse_enum_value_definition,
                        )?.0
                    } else {
                        Vec::new()
                    };
                if is_extension && directives.is_empty() && values.is_empty() {
                    return Err(self.empty_extension(&keyword, "directives or values"));
                }
                ast::TypeDefinition::Enum(ast::EnumTypeDefinition {
                    description,
                    name,
                    directives,
                    values,
                    span: self.span_from(start),
                })
            },
            GraphQLTokenKind::Name("input") => {
                let directives =
                    self.parse_directive_annotations(ConstContext::ConstDirectiveArgument)?;
                let fields =
                    if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
                        self.parse_delimited(
                            &GraphQLTokenKind::CurlyBraceOpen,
                            &GraphQLTokenKind::CurlyBraceClose,
                            "input fields",
                            false,
                            Self::parse_input_value_definition,
                        )?.0
                    } else {
                        Vec::new()
                    };
                if is_extension && directives.is_empty() && fields.is_empty() {
                    return Err(self.empty_extension(&keyword, "directives or fields"));
                }
                ast::TypeDefinition::InputObject(ast::InputObjectTypeDefinition {
                    description,
                    name,
                    directives,
                    fields,
                    span: self.span_from(start),
                })
            },
            _ => return Err(self.unexpected(&keyword, &TYPE_KEYWORDS)),
        };
        Ok(definition)
    }

    /// `implements A & B`, or nothing. A leading `&` is allowed.
    fn parse_implements_interfaces(&mut self) -> Result<Vec<ast::Name>, GraphQLParseError> {
        if !self.peek_is_keyword("implements")? {
            return Ok(Vec::new());
        }
        self.consume_token()?;
        self.consume_if(&GraphQLTokenKind::Ampersand)?;
        let mut interfaces = vec![self.expect_name()?];
        while self.consume_if(&GraphQLTokenKind::Ampersand)?.is_some() {
            interfaces.push(self.expect_name()?);
        }
        Ok(interfaces)
    }

    /// `= A | B`, or nothing. A leading `|` is allowed.
    fn parse_union_members(&mut self) -> Result<Vec<ast::Name>, GraphQLParseError> {
        if self.consume_if(&GraphQLTokenKind::Equals)?.is_none() {
            return Ok(Vec::new());
        }
        self.consume_if(&GraphQLTokenKind::Pipe)?;
        let mut members = vec![self.expect_name()?];
        while self.consume_if(&GraphQLTokenKind::Pipe)?.is_some() {
            members.push(self.expect_name()?);
        }
        Ok(members)
    }

    fn parse_fields_definition(&mut self) -> Result<Vec<ast::FieldDefinition>, GraphQLParseError> {
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            return Ok(Vec::new());
        }
        let (fields, _) = self.parse_delimited(
            &GraphQLTokenKind::CurlyBraceOpen,
            &GraphQLTokenKind::CurlyBraceClose,
            "field definitions",
            false,
            Self::parse_field_definition,
        )?;
        Ok(fields)
    }

    fn parse_field_definition(&mut self) -> Result<ast::FieldDefinition, GraphQLParseError> {
        let description = self.parse_description()?;
        let name = self.expect_name()?;
        let start = description.as_ref().map_or(name.span, |desc| desc.span);
        let arguments = self.parse_arguments_definition()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let field_type = self.parse_type_annotation()?;
        let directives = self.parse_directive_annotations(ConstContext::ConstDirectiveArgument)?;
        Ok(ast::FieldDefinition {
            description,
            name,
            arguments,
            field_type,
            directives,
            span: self.span_from(start),
        })
    }

    fn parse_arguments_definition(
        &mut self,
    ) -> Result<Vec<ast::InputValueDefinition>, GraphQLParseError> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen)? {
            return Ok(Vec::new());
        }
        let (arguments, _) = self.parse_delimited(
            &GraphQLTokenKind::ParenOpen,
            &GraphQLTokenKind::ParenClose,
            "argument definitions",
            false,
            Self::parse_input_value_definition,
        )?;
        Ok(arguments)
    }

    fn parse_input_value_definition(
        &mut self,
    ) -> Result<ast::InputValueDefinition, GraphQLParseError> {
        let description = self.parse_description()?;
        let name = self.expect_name()?;
        let start = description.as_ref().map_or(name.span, |desc| desc.span);
        self.expect(&GraphQLTokenKind::Colon)?;
        let value_type = self.parse_type_annotation()?;
        let default_value =
            if self.consume_if(&GraphQLTokenKind::Equals)?.is_some() {
                Some(self.parse_value(ConstContext::InputDefaultValue)?)
            } else {
                None
            };
        let directives = self.parse_directive_annotations(ConstContext::ConstDirectiveArgument)?;
        Ok(ast::InputValueDefinition {
            description,
            name,
            value_type,
            default_value,
            directives,
            span: self.span_from(start),
        })
    }

    fn parse_enum_value_definition(
        &mut self,
    ) -> Result<ast::EnumValueDefinition, GraphQLParseError> {
        let description = self.parse_description()?;
        let token = self.peek_token()?;
        if matches!(
            token.kind,
            GraphQLTokenKind::True | GraphQLTokenKind::False | GraphQLTokenKind::Null
        ) {
            let name = token.kind.display();
            let mut err = GraphQLParseError::new(
                format!("`{name}` cannot be used as an enum value"),
                token.span,
                GraphQLParseErrorKind::ReservedName { name },
            );
            err.add_spec("https://spec.graphql.org/October2021/#EnumValue");
            return Err(err);
        }
        let name = self.expect_name()?;
        let start = description.as_ref().map_or(name.span, |desc| desc.span);
        let directives = self.parse_directive_annotations(ConstContext::ConstDirectiveArgument)?;
        Ok(ast::EnumValueDefinition {
            description,
            name,
            directives,
            span: self.span_from(start),
        })
    }

    // =========================================================================
    // Directive definitions
    // =========================================================================

    fn parse_directive_definition(
        &mut self,
        description: Option<ast::StringValue>,
        start: GraphQLSourceSpan,
    ) -> Result<ast::DirectiveDefinition, GraphQLParseError> {
        self.expect_keyword("directive")?;
        self.expect(&GraphQLTokenKind::At)?;
        let name = self.expect_name()?;
        let arguments = self.parse_arguments_definition()?;
        let repeatable =
            if self.peek_is_keyword("repeatable")? {
                self.consume_token()?;
                true
            } else {
                false
            };
        self.expect_keyword("on")?;
        self.consume_if(&GraphQLTokenKind::Pipe)?;
        let mut locations = vec![self.parse_directive_location()?];
        while self.consume_if(&GraphQLTokenKind::Pipe)?.is_some() {
            locations.push(self.parse_directive_location()?);
        }
        Ok(ast::DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            span: self.span_from(start),
        })
    }

    fn parse_directive_location(&mut self) -> Result<ast::DirectiveLocation, GraphQLParseError> {
        let token = self.peek_token()?;
        let Some(text) = token.kind.as_name() else {
            return Err(self.unexpected(&token, &["directive location"]));
        };
        let Some(kind) = DirectiveLocationKind::from_name(text) else {
            let mut err = GraphQLParseError::new(
                format!("unknown directive location `{text}`"),
                token.span,
                GraphQLParseErrorKind::InvalidSyntax,
            );
            if let Some(suggestion) = suggest_directive_location(text) {
                err.add_help(format!("did you mean `{suggestion}`?"));
            }
            return Err(err);
        };
        self.consume_token()?;
        Ok(ast::DirectiveLocation {
            kind,
            span: token.span,
        })
    }
}

/// Case-insensitive match, or a single-edit typo of a known location.
fn suggest_directive_location(input: &str) -> Option<&'static str> {
    let upper = input.to_ascii_uppercase();
    DirectiveLocationKind::ALL
        .iter()
        .map(|kind| kind.as_str())
        .find(|candidate| *candidate == upper || edit_distance(candidate, &upper) == 1)
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, a_char) in a.chars().enumerate() {
        let mut curr = vec![i + 1; b_chars.len() + 1];
        for (j, b_char) in b_chars.iter().enumerate() {
            let substitution = prev[j] + usize::from(a_char != *b_char);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        prev = curr;
    }
    prev[b_chars.len()]
}
