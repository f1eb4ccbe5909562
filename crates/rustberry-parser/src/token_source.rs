//! Token sources feed [`GraphQLToken`](crate::token::GraphQLToken)s to the
//! parser.

mod str_to_graphql_token_source;

use crate::token::GraphQLToken;

pub use str_to_graphql_token_source::StrGraphQLTokenSource;

/// Anything that yields tokens for one source unit.
///
/// Implementors end the sequence with either an `Eof` token or a single
/// `Error` token; nothing is produced after either.
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T
where
    T: Iterator<Item = GraphQLToken<'src>>,
{}

#[cfg(test)]
mod tests;
