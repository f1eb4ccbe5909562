mod session_concurrency_tests;

pub(super) const HELLO_SDL: &str = "type Query { hello: String }";
