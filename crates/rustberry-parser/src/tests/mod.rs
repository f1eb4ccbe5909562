mod apollo_parser_differential_tests;
mod graphql_parser_schema_tests;
mod graphql_parser_value_tests;
mod graphql_token_stream_tests;
mod utils;
