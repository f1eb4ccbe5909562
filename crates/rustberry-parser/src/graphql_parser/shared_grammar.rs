//! Grammar shared by executable and schema documents: values, arguments,
//! directive annotations, type annotations and descriptions.

use crate::GraphQLErrorNote;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParser;
use crate::GraphQLSourceSpan;
use crate::ast;
use crate::string_value_cooking::cook_block_string_value;
use crate::string_value_cooking::cook_string_value;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;

/// Where a value is being parsed, which decides whether `$variables` are
/// allowed.
#[derive(Clone, Copy, Debug)]
pub(super) enum ConstContext {
    AllowVariables,
    VariableDefaultValue,
    ConstDirectiveArgument,
    InputDefaultValue,
}

impl ConstContext {
    fn forbidden_in(&self) -> Option<&'static str> {
        match self {
            Self::AllowVariables => None,
            Self::VariableDefaultValue => Some("variable default values"),
            Self::ConstDirectiveArgument => Some("const directive arguments"),
            Self::InputDefaultValue => Some("input value default values"),
        }
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    // =========================================================================
    // Delimiters
    // =========================================================================

    /// Error for input ending inside a delimited construct, pointing back at
    /// the opening delimiter.
    pub(super) fn unclosed_delimiter(
        &self,
        found: &GraphQLToken<'src>,
        open: &GraphQLToken<'src>,
        construct: &str,
    ) -> GraphQLParseError {
        let close = match open.kind {
            GraphQLTokenKind::CurlyBraceOpen => "`}`",
            GraphQLTokenKind::ParenOpen => "`)`",
            _ => "`]`",
        };
        self.unexpected(found, &[close]).with_note(GraphQLErrorNote::general_with_span(
            format!("{construct} opened here"),
            open.span,
        ))
    }

    /// Error for `()`/`{}` where at least one item is required.
    pub(super) fn empty_construct(
        &self,
        open: &GraphQLToken<'src>,
        close: &GraphQLToken<'src>,
        construct: &str,
    ) -> GraphQLParseError {
        GraphQLParseError::new(
            format!("{construct} cannot be empty"),
            open.span.merge(&close.span),
            GraphQLParseErrorKind::InvalidEmptyConstruct {
                construct: construct.to_string(),
            },
        )
    }

    /// Parses `open item+ close`, calling `parse_item` for each item.
    ///
    /// An immediately closed list is an error unless `allow_empty` is set.
    pub(super) fn parse_delimited<T>(
        &mut self,
        open_kind: &GraphQLTokenKind<'_>,
        close_kind: &GraphQLTokenKind<'_>,
        construct: &str,
        allow_empty: bool,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, GraphQLParseError>,
    ) -> Result<(Vec<T>, GraphQLSourceSpan), GraphQLParseError> {
        let open = self.expect(open_kind)?;
        let mut items = Vec::new();
        loop {
            let token = self.peek_token()?;
            if token.kind.same_variant(close_kind) {
                self.consume_token()?;
                if items.is_empty() && !allow_empty {
                    return Err(self.empty_construct(&open, &token, construct));
                }
                break;
            }
            if matches!(token.kind, GraphQLTokenKind::Eof) {
                return Err(self.unclosed_delimiter(&token, &open, construct));
            }
            items.push(parse_item(self)?);
        }
        Ok((items, self.span_from(open.span)))
    }

    // =========================================================================
    // Values
    // =========================================================================

    pub(super) fn parse_value(
        &mut self,
        context: ConstContext,
    ) -> Result<ast::Value, GraphQLParseError> {
        self.nested(|parser| parser.parse_value_impl(context))
    }

    fn parse_value_impl(&mut self, context: ConstContext) -> Result<ast::Value, GraphQLParseError> {
        let token = self.peek_token()?;
        let span = token.span;
        match token.kind {
            GraphQLTokenKind::Dollar => {
                if let Some(forbidden_in) = context.forbidden_in() {
                    return Err(GraphQLParseError::new(
                        format!("variables are not allowed in {forbidden_in}"),
                        span,
                        GraphQLParseErrorKind::InvalidSyntax,
                    ));
                }
                self.consume_token()?;
                let name = self.expect_name()?;
                Ok(ast::Value::Variable(ast::VariableValue {
                    span: span.merge(&name.span),
                    name,
                }))
            },
            GraphQLTokenKind::IntValue(raw) => {
                self.consume_token()?;
                Ok(ast::Value::Int(ast::IntValue {
                    raw: raw.to_string(),
                    span,
                }))
            },
            GraphQLTokenKind::FloatValue(raw) => {
                self.consume_token()?;
                Ok(ast::Value::Float(ast::FloatValue {
                    raw: raw.to_string(),
                    span,
                }))
            },
            GraphQLTokenKind::StringValue(_) | GraphQLTokenKind::BlockStringValue(_) => {
                self.parse_string_value().map(ast::Value::String)
            },
            GraphQLTokenKind::True | GraphQLTokenKind::False => {
                self.consume_token()?;
                Ok(ast::Value::Boolean(ast::BooleanValue {
                    value: matches!(token.kind, GraphQLTokenKind::True),
                    span,
                }))
            },
            GraphQLTokenKind::Null => {
                self.consume_token()?;
                Ok(ast::Value::Null(ast::NullValue { span }))
            },
            GraphQLTokenKind::Name(name) => {
                self.consume_token()?;
                Ok(ast::Value::Enum(ast::EnumValue {
                    value: name.to_string(),
                    span,
                }))
            },
            GraphQLTokenKind::SquareBracketOpen => {
                let (values, span) = self.parse_delimited(
                    &GraphQLTokenKind::SquareBracketOpen,
                    &GraphQLTokenKind::SquareBracketClose,
                    "list value",
                    true,
                    |parser| parser.parse_value(context),
                )?;
                Ok(ast::Value::List(ast::ListValue { values, span }))
            },
            GraphQLTokenKind::CurlyBraceOpen => {
                let (fields, span) = self.parse_delimited(
                    &GraphQLTokenKind::CurlyBraceOpen,
                    &GraphQLTokenKind::CurlyBraceClose,
                    "input object value",
                    true,
                    |parser| parser.parse_object_field(context),
                )?;
                Ok(ast::Value::Object(ast::ObjectValue { fields, span }))
            },
            _ => Err(self.unexpected(&token, &["value"])),
        }
    }

    fn parse_object_field(
        &mut self,
        context: ConstContext,
    ) -> Result<ast::ObjectField, GraphQLParseError> {
        let name = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let value = self.parse_value(context)?;
        Ok(ast::ObjectField {
            span: self.span_from(name.span),
            name,
            value,
        })
    }

    /// Parses a `"..."` or `"""..."""` literal and cooks it.
    pub(super) fn parse_string_value(&mut self) -> Result<ast::StringValue, GraphQLParseError> {
        let token = self.peek_token()?;
        let (cooked, block) = match token.kind {
            GraphQLTokenKind::StringValue(raw) => (cook_string_value(raw), false),
            GraphQLTokenKind::BlockStringValue(raw) => (cook_block_string_value(raw), true),
            _ => return Err(self.unexpected(&token, &["string"])),
        };
        let value = cooked.map_err(|err| {
            GraphQLParseError::new(
                format!("invalid string literal: {err}"),
                token.span,
                GraphQLParseErrorKind::InvalidValue(err),
            )
        })?;
        self.consume_token()?;
        Ok(ast::StringValue {
            value,
            block,
            span: token.span,
        })
    }

    /// An optional description string preceding a type-system definition.
    pub(super) fn parse_description(
        &mut self,
    ) -> Result<Option<ast::StringValue>, GraphQLParseError> {
        if self.peek_is(&GraphQLTokenKind::StringValue(""))?
            || self.peek_is(&GraphQLTokenKind::BlockStringValue(""))? {
            return self.parse_string_value().map(Some);
        }
        Ok(None)
    }

    // =========================================================================
    // Arguments and directives
    // =========================================================================

    /// `(name: value, ...)`, or nothing.
    pub(super) fn parse_arguments(
        &mut self,
        context: ConstContext,
    ) -> Result<Vec<ast::Argument>, GraphQLParseError> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen)? {
            return Ok(Vec::new());
        }
        let (arguments, _) = self.parse_delimited(
            &GraphQLTokenKind::ParenOpen,
            &GraphQLTokenKind::ParenClose,
            "argument list",
            false,
            |parser| {
                let name = parser.expect_name()?;
                parser.expect(&GraphQLTokenKind::Colon)?;
                let value = parser.parse_value(context)?;
                Ok(ast::Argument {
                    span: parser.span_from(name.span),
                    name,
                    value,
                })
            },
        )?;
        Ok(arguments)
    }

    /// Zero or more `@name(args)` annotations.
    pub(super) fn parse_directive_annotations(
        &mut self,
        context: ConstContext,
    ) -> Result<Vec<ast::DirectiveAnnotation>, GraphQLParseError> {
        let mut directives = Vec::new();
        while let Some(at) = self.consume_if(&GraphQLTokenKind::At)? {
            let name = self.expect_name()?;
            let arguments = self.parse_arguments(context)?;
            directives.push(ast::DirectiveAnnotation {
                name,
                arguments,
                span: self.span_from(at.span),
            });
        }
        Ok(directives)
    }

    // =========================================================================
    // Type annotations
    // =========================================================================

    /// `Name`, `[Type]`, each optionally followed by `!`.
    pub(super) fn parse_type_annotation(
        &mut self,
    ) -> Result<ast::TypeAnnotation, GraphQLParseError> {
        self.nested(Self::parse_type_annotation_impl)
    }

    fn parse_type_annotation_impl(&mut self) -> Result<ast::TypeAnnotation, GraphQLParseError> {
        let token = self.peek_token()?;
        match token.kind {
            GraphQLTokenKind::SquareBracketOpen => {
                let open = self.consume_token()?;
                let element_type = self.parse_type_annotation()?;
                let close = self.peek_token()?;
                match close.kind {
                    GraphQLTokenKind::SquareBracketClose => {
                        self.consume_token()?;
                    },
                    GraphQLTokenKind::Eof => {
                        return Err(self.unclosed_delimiter(&close, &open, "list type"));
                    },
                    _ => return Err(self.unexpected(&close, &["`]`"])),
                }
                let nullable = self.consume_if(&GraphQLTokenKind::Bang)?.is_none();
                Ok(ast::TypeAnnotation::List(ast::ListTypeAnnotation {
                    element_type: Box::new(element_type),
                    nullable,
                    span: self.span_from(open.span),
                }))
            },
            _ if token.kind.as_name().is_some() => {
                let name = self.expect_name()?;
                let nullable = self.consume_if(&GraphQLTokenKind::Bang)?.is_none();
                Ok(ast::TypeAnnotation::Named(ast::NamedTypeAnnotation {
                    span: self.span_from(name.span),
                    name,
                    nullable,
                }))
            },
            _ => Err(self.unexpected(&token, &["type"])),
        }
    }
}
