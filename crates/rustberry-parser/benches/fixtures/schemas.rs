use std::fmt::Write;

/// A schema of `type_count` object types, each with `fields_per_type`
/// fields, an interface, an enum and an input type per ten objects.
pub fn synthetic_schema(type_count: usize, fields_per_type: usize) -> String {
    let mut out = String::with_capacity(type_count * fields_per_type * 40);
    out.push_str("type Query {\n");
    for i in 0..type_count {
        let _ = writeln!(out, "  object{i}(id: ID!): Object{i}");
    }
    out.push_str("}\n\ninterface Node {\n  id: ID!\n}\n\n");
    for i in 0..type_count {
        let _ = writeln!(out, "\"\"\"\nObject number {i}.\n\"\"\"");
        let _ = writeln!(out, "type Object{i} implements Node {{");
        out.push_str("  id: ID!\n");
        for f in 0..fields_per_type {
            let _ = writeln!(out, "  field{f}(first: Int = 10, after: String): [String!]");
        }
        out.push_str("}\n\n");
        if i % 10 == 0 {
            let _ = writeln!(out, "enum Enum{i} {{ ALPHA BETA GAMMA }}\n");
            let _ = writeln!(out, "input Input{i} {{ a: Int! b: [String] = [\"x\"] c: Enum{i} }}\n");
        }
    }
    out
}
