use std::fmt::Write;

/// Generates a query with `depth` nested selection sets.
///
/// At each level, the query selects an `id` field and a `child` field that
/// contains the next nesting level. The innermost level selects `name`.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        let _ = writeln!(out, "{indent}{} {{", if level == 0 { "root" } else { "child" });
        let _ = writeln!(out, "{indent}  id");
    }
    let _ = writeln!(out, "{}name", "  ".repeat(depth + 1));
    for level in (0..depth).rev() {
        let _ = writeln!(out, "{}}}", "  ".repeat(level + 1));
    }
    out.push_str("}\n");
    out
}

/// Generates a query selecting `count` sibling fields, each with one
/// argument.
pub fn wide_query(count: usize) -> String {
    let mut out = String::with_capacity(count * 24);
    out.push_str("query Wide {\n");
    for idx in 0..count {
        let _ = writeln!(out, "  field{idx}(arg: {idx})");
    }
    out.push_str("}\n");
    out
}

/// Generates a list value literal with `count` object elements.
pub fn large_list_value(count: usize) -> String {
    let mut out = String::with_capacity(count * 32);
    out.push('[');
    for idx in 0..count {
        let _ = write!(out, "{{ id: {idx}, tag: \"t{idx}\" }}, ");
    }
    out.push(']');
    out
}
