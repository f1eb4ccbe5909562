use crate::GraphQLSourceSpan;

/// Implemented by every AST node.
///
/// Node types implement this via `#[inherent] impl AstNode`, so the methods
/// are callable without importing the trait while still being usable as a
/// bound in generic helpers (diagnostic builders, printers).
pub trait AstNode {
    fn span(&self) -> GraphQLSourceSpan;

    /// Appends the exact source text this node was parsed from.
    fn append_source(&self, sink: &mut String, source: &str) {
        append_span_source_slice(&self.span(), sink, source);
    }

    fn to_source(&self, source: &str) -> String {
        let mut sink = String::new();
        self.append_source(&mut sink, source);
        sink
    }
}

/// Implements [`AstNode`] for node structs with a `span` field.
macro_rules! impl_ast_node {
    ($($node:ty),+ $(,)?) => {
        $(
            #[inherent::inherent]
            impl $crate::ast::AstNode for $node {
                pub fn span(&self) -> $crate::GraphQLSourceSpan {
                    self.span
                }

                pub fn append_source(&self, sink: &mut String, source: &str);

                pub fn to_source(&self, source: &str) -> String;
            }
        )+
    };
}
pub(crate) use impl_ast_node;

fn append_span_source_slice(
    span: &GraphQLSourceSpan,
    sink: &mut String,
    source: &str,
) {
    if let Some(text) = span.slice(source) {
        sink.push_str(text);
    }
}
