use rustberry_parser::GraphQLParseError;
use rustberry_parser::GraphQLSourceSpan;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Only errors are reported; there are no warnings.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

/// Identifies the check that produced a [`Diagnostic`].
///
/// `Syntax`, `SchemaBuild` and `MissingSchema` are produced outside the
/// validator; every other id names one validation rule.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum RuleId {
    Syntax,
    SchemaBuild,
    MissingSchema,
    UniqueOperationNames,
    LoneAnonymousOperation,
    KnownOperationType,
    SingleFieldSubscriptions,
    UnknownField,
    FieldMerging,
    KnownArgumentNames,
    UniqueArgumentNames,
    RequiredArguments,
    ValueType,
    UniqueInputFieldNames,
    UniqueVariableNames,
    VariablesAreInputTypes,
    UndefinedVariable,
    UnusedVariable,
    VariableUsage,
    UniqueFragmentNames,
    KnownFragmentNames,
    FragmentCycle,
    KnownTypeNames,
    FragmentOnCompositeType,
    PossibleFragmentSpread,
    UnusedFragment,
    KnownDirectives,
    DirectiveLocation,
    UniqueDirectivesPerLocation,
    LeafFieldSelections,
}

impl RuleId {
    pub const ALL: [RuleId; 30] = [
        Self::Syntax,
        Self::SchemaBuild,
        Self::MissingSchema,
        Self::UniqueOperationNames,
        Self::LoneAnonymousOperation,
        Self::KnownOperationType,
        Self::SingleFieldSubscriptions,
        Self::UnknownField,
        Self::FieldMerging,
        Self::KnownArgumentNames,
        Self::UniqueArgumentNames,
        Self::RequiredArguments,
        Self::ValueType,
        Self::UniqueInputFieldNames,
        Self::UniqueVariableNames,
        Self::VariablesAreInputTypes,
        Self::UndefinedVariable,
        Self::UnusedVariable,
        Self::VariableUsage,
        Self::UniqueFragmentNames,
        Self::KnownFragmentNames,
        Self::FragmentCycle,
        Self::KnownTypeNames,
        Self::FragmentOnCompositeType,
        Self::PossibleFragmentSpread,
        Self::UnusedFragment,
        Self::KnownDirectives,
        Self::DirectiveLocation,
        Self::UniqueDirectivesPerLocation,
        Self::LeafFieldSelections,
    ];

    /// The stable kebab-case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::SchemaBuild => "schema-build",
            Self::MissingSchema => "missing-schema",
            Self::UniqueOperationNames => "unique-operation-names",
            Self::LoneAnonymousOperation => "lone-anonymous-operation",
            Self::KnownOperationType => "known-operation-type",
            Self::SingleFieldSubscriptions => "single-field-subscriptions",
            Self::UnknownField => "unknown-field",
            Self::FieldMerging => "field-merging",
            Self::KnownArgumentNames => "known-argument-names",
            Self::UniqueArgumentNames => "unique-argument-names",
            Self::RequiredArguments => "required-arguments",
            Self::ValueType => "value-type",
            Self::UniqueInputFieldNames => "unique-input-field-names",
            Self::UniqueVariableNames => "unique-variable-names",
            Self::VariablesAreInputTypes => "variables-are-input-types",
            Self::UndefinedVariable => "undefined-variable",
            Self::UnusedVariable => "unused-variable",
            Self::VariableUsage => "variable-usage",
            Self::UniqueFragmentNames => "unique-fragment-names",
            Self::KnownFragmentNames => "known-fragment-names",
            Self::FragmentCycle => "fragment-cycle",
            Self::KnownTypeNames => "known-type-names",
            Self::FragmentOnCompositeType => "fragment-on-composite-type",
            Self::PossibleFragmentSpread => "possible-fragment-spread",
            Self::UnusedFragment => "unused-fragment",
            Self::KnownDirectives => "known-directives",
            Self::DirectiveLocation => "directive-location",
            Self::UniqueDirectivesPerLocation => "unique-directives-per-location",
            Self::LeafFieldSelections => "leaf-field-selections",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown rule id `{0}`")]
pub struct UnknownRuleId(pub String);

impl FromStr for RuleId {
    type Err = UnknownRuleId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| UnknownRuleId(s.to_string()))
    }
}

impl Serialize for RuleId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A structured error report.
///
/// The first span is the primary location; any further spans point at
/// related source (the other half of a conflict, every anonymous operation,
/// ...).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub rule: RuleId,
    pub spans: Vec<GraphQLSourceSpan>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(rule: RuleId, message: impl Into<String>, span: GraphQLSourceSpan) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            rule,
            spans: vec![span],
            notes: vec![],
        }
    }

    /// A diagnostic that is not tied to any source location.
    pub fn without_span(rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            rule,
            spans: vec![],
            notes: vec![],
        }
    }

    pub fn with_span(mut self, span: GraphQLSourceSpan) -> Self {
        self.spans.push(span);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn from_parse_error(err: &GraphQLParseError) -> Self {
        let mut diagnostic = Self::error(RuleId::Syntax, err.message(), *err.span());
        for note in err.notes() {
            if let Some(span) = note.span {
                diagnostic.spans.push(span);
            }
            diagnostic.notes.push(format!("{}: {}", note.kind.prefix(), note.message));
        }
        diagnostic
    }

    pub fn primary_span(&self) -> Option<&GraphQLSourceSpan> {
        self.spans.first()
    }

    /// 1-based line/column of every span start.
    pub fn locations(&self) -> Vec<SourceLocation> {
        self.spans
            .iter()
            .map(|span| {
                let (line, column) = span.start_inclusive.to_line_column();
                SourceLocation { line, column }
            })
            .collect()
    }

    /// The shape used for the `errors` entries of a GraphQL response.
    pub fn to_graphql_error(&self) -> GraphQLErrorRecord {
        GraphQLErrorRecord {
            message: self.message.clone(),
            locations: self.locations(),
            path: None,
            extensions: BTreeMap::from([("rule", self.rule.as_str())]),
        }
    }

    /// Ordering used for every diagnostic list handed to callers.
    pub(crate) fn sort(diagnostics: &mut [Diagnostic]) {
        diagnostics.sort_by_key(|diagnostic| {
            (
                diagnostic
                    .primary_span()
                    .map_or(0, |span| span.start_inclusive.byte_offset()),
                diagnostic.rule,
            )
        });
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.locations().first() {
            Some(loc) => write!(f, "{}:{}: {} [{}]", loc.line, loc.column, self.message, self.rule),
            None => write!(f, "{} [{}]", self.message, self.rule),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphQLErrorRecord {
    pub message: String,
    pub locations: Vec<SourceLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    pub extensions: BTreeMap<&'static str, &'static str>,
}
