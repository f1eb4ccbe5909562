use std::fmt::Write;

/// A query nesting `child { ... }` selections `depth` levels deep.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        let field = if level == 0 { "root" } else { "child" };
        let _ = writeln!(out, "{indent}{field} {{");
        let _ = writeln!(out, "{indent}  id");
    }
    let _ = writeln!(out, "{}name", "  ".repeat(depth + 1));
    for level in (0..depth).rev() {
        let _ = writeln!(out, "{}}}", "  ".repeat(level + 1));
    }
    out.push_str("}\n");
    out
}

/// A document of `count` distinct named queries.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 80);
    for i in 0..count {
        let _ = writeln!(out, "query Operation{i}($id: ID!) {{");
        let _ = writeln!(out, "  node(id: $id) {{ id name field{i}: description }}");
        let _ = writeln!(out, "}}\n");
    }
    out
}
