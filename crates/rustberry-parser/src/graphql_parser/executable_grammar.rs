//! Operations, selection sets and fragments.

use super::definition_keyword_description;
use super::shared_grammar::ConstContext;
use crate::DocumentKind;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParser;
use crate::ast;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    pub(super) fn parse_executable_definition(
        &mut self,
    ) -> Result<ast::ExecutableDefinition, GraphQLParseError> {
        let token = self.peek_token()?;
        match token.kind {
            GraphQLTokenKind::CurlyBraceOpen
            | GraphQLTokenKind::Name("query" | "mutation" | "subscription") => {
                self.parse_operation_definition().map(ast::ExecutableDefinition::Operation)
            },
            GraphQLTokenKind::Name("fragment") => {
                self.parse_fragment_definition().map(ast::ExecutableDefinition::Fragment)
            },
            GraphQLTokenKind::StringValue(_) | GraphQLTokenKind::BlockStringValue(_) => {
                // A description can only introduce a type-system definition.
                Err(self.wrong_document_kind(
                    &token,
                    "a described type-system definition",
                    DocumentKind::Executable,
                ))
            },
            _ => {
                let type_system_keyword = token
                    .kind
                    .as_name()
                    .and_then(definition_keyword_description);
                Err(match type_system_keyword {
                    Some(found) => self.wrong_document_kind(&token, found, DocumentKind::Executable),
                    None => self.unexpected(
                        &token,
                        &["`{`", "`query`", "`mutation`", "`subscription`", "`fragment`"],
                    ),
                })
            },
        }
    }

    fn parse_operation_definition(
        &mut self,
    ) -> Result<ast::OperationDefinition, GraphQLParseError> {
        let start = self.peek_token()?;
        if matches!(start.kind, GraphQLTokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                kind: ast::OperationKind::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                span: selection_set.span,
                selection_set,
                shorthand: true,
            });
        }

        let keyword = self.consume_token()?;
        let kind = keyword
            .kind
            .as_name()
            .and_then(ast::OperationKind::from_keyword)
            .ok_or_else(|| self.unexpected(&keyword, &["`query`", "`mutation`", "`subscription`"]))?;

        let name =
            if self.peek_token()?.kind.as_name().is_some() {
                Some(self.expect_name()?)
            } else {
                None
            };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            kind,
            name,
            variable_definitions,
            directives,
            selection_set,
            shorthand: false,
            span: self.span_from(keyword.span),
        })
    }

    fn parse_variable_definitions(
        &mut self,
    ) -> Result<Vec<ast::VariableDefinition>, GraphQLParseError> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen)? {
            return Ok(Vec::new());
        }
        let (definitions, _) = self.parse_delimited(
            &GraphQLTokenKind::ParenOpen,
            &GraphQLTokenKind::ParenClose,
            "variable definitions",
            false,
            Self::parse_variable_definition,
        )?;
        Ok(definitions)
    }

    fn parse_variable_definition(&mut self) -> Result<ast::VariableDefinition, GraphQLParseError> {
        let dollar = self.expect(&GraphQLTokenKind::Dollar)?;
        let variable = self.expect_name()?;
        let variable_span = dollar.span.merge(&variable.span);
        self.expect(&GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type_annotation()?;
        let default_value =
            if self.consume_if(&GraphQLTokenKind::Equals)?.is_some() {
                Some(self.parse_value(ConstContext::VariableDefaultValue)?)
            } else {
                None
            };
        let directives = self.parse_directive_annotations(ConstContext::ConstDirectiveArgument)?;
        Ok(ast::VariableDefinition {
            variable,
            variable_span,
            var_type,
            default_value,
            directives,
            span: self.span_from(dollar.span),
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    pub(super) fn parse_selection_set(&mut self) -> Result<ast::SelectionSet, GraphQLParseError> {
        self.nested(|parser| {
            let (selections, span) = parser.parse_delimited(
                &GraphQLTokenKind::CurlyBraceOpen,
                &GraphQLTokenKind::CurlyBraceClose,
                "selection set",
                false,
                Self::parse_selection,
            )?;
            Ok(ast::SelectionSet { selections, span })
        })
    }

    fn parse_selection(&mut self) -> Result<ast::Selection, GraphQLParseError> {
        let token = self.peek_token()?;
        match token.kind {
            GraphQLTokenKind::Ellipsis => self.parse_fragment_selection(),
            _ if token.kind.as_name().is_some() => self.parse_field().map(ast::Selection::Field),
            _ => Err(self.unexpected(&token, &["field", "`...`", "`}`"])),
        }
    }

    fn parse_field(&mut self) -> Result<ast::Field, GraphQLParseError> {
        let first = self.expect_name()?;
        let start = first.span;
        let (alias, name) =
            if self.consume_if(&GraphQLTokenKind::Colon)?.is_some() {
                (Some(first), self.expect_name()?)
            } else {
                (None, first)
            };
        let arguments = self.parse_arguments(ConstContext::AllowVariables)?;
        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set =
            if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
                Some(self.parse_selection_set()?)
            } else {
                None
            };
        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    /// `...Name` or `... on Type { }` or `... @dir { }`.
    fn parse_fragment_selection(&mut self) -> Result<ast::Selection, GraphQLParseError> {
        let ellipsis = self.expect(&GraphQLTokenKind::Ellipsis)?;
        let token = self.peek_token()?;
        match token.kind {
            GraphQLTokenKind::Name("on") => {
                let type_condition = self.parse_type_condition()?;
                self.parse_inline_fragment_rest(ellipsis.span, Some(type_condition))
            },
            GraphQLTokenKind::At | GraphQLTokenKind::CurlyBraceOpen => {
                self.parse_inline_fragment_rest(ellipsis.span, None)
            },
            _ if token.kind.as_name().is_some() => {
                let name = self.expect_name()?;
                let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
                Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                    name,
                    directives,
                    span: self.span_from(ellipsis.span),
                }))
            },
            _ => Err(self.unexpected(&token, &["fragment name", "`on`", "`@`", "`{`"])),
        }
    }

    fn parse_inline_fragment_rest(
        &mut self,
        start: crate::GraphQLSourceSpan,
        type_condition: Option<ast::TypeCondition>,
    ) -> Result<ast::Selection, GraphQLParseError> {
        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::Selection::InlineFragment(ast::InlineFragment {
            type_condition,
            directives,
            selection_set,
            span: self.span_from(start),
        }))
    }

    fn parse_type_condition(&mut self) -> Result<ast::TypeCondition, GraphQLParseError> {
        let on = self.expect_keyword("on")?;
        let named_type = self.expect_name()?;
        Ok(ast::TypeCondition {
            named_type,
            span: self.span_from(on.span),
        })
    }

    // =========================================================================
    // Fragment definitions
    // =========================================================================

    fn parse_fragment_definition(&mut self) -> Result<ast::FragmentDefinition, GraphQLParseError> {
        let keyword = self.expect_keyword("fragment")?;
        let name_token = self.peek_token()?;
        if matches!(name_token.kind, GraphQLTokenKind::Name("on")) {
            let mut err = GraphQLParseError::new(
                "a fragment cannot be named `on`",
                name_token.span,
                GraphQLParseErrorKind::ReservedName {
                    name: "on".to_string(),
                },
            );
            err.add_spec("https://spec.graphql.org/October2021/#FragmentName");
            return Err(err);
        }
        let name = self.expect_name()?;
        let type_condition = self.parse_type_condition()?;
        let directives = self.parse_directive_annotations(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            span: self.span_from(keyword.span),
        })
    }
}
