//! Declaration recognition
//!
//! Only two declaration shapes seed the simulation:
//!
//! ```text
//! array  ::= type "[]" identifier "=" "{" int ("," int)* "}" ";"
//! scalar ::= "int" identifier "=" expression ";"
//! ```
//!
//! Recognition is textual. Anything else (loops, method calls, `new`
//! allocations) is not a declaration and is left to the simulators.

use super::expressions::parse_leading_int;
use super::lines::has_word;

/// A declaration found on a single source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `int[] name = {v1, v2, ...};`
    Array { name: String, values: Vec<i64> },
    /// `int name = expr;` with the right-hand side left unevaluated
    Scalar { name: String, expr: String },
}

/// Recognize a declaration on a trimmed line
pub fn parse_declaration(line: &str) -> Option<Declaration> {
    if line.contains("[]") && line.contains('=') && line.contains('{') {
        let name = declared_name(line)?;
        return Some(Declaration::Array {
            name,
            values: array_literal(line),
        });
    }

    if line.contains("int ")
        && line.contains('=')
        && !line.contains("[]")
        && !has_word(line, "for")
        && !has_word(line, "while")
    {
        let name = declared_name(line)?;
        let expr = line.split('=').nth(1).unwrap_or("").replace(';', "");
        return Some(Declaration::Scalar {
            name,
            expr: expr.trim().to_string(),
        });
    }

    None
}

/// Last word before `=`, with any `[]` suffix stripped
fn declared_name(line: &str) -> Option<String> {
    let lhs = line.split('=').next()?;
    let name = lhs.split_whitespace().last()?.replace("[]", "");
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Elements between the first `{` and the following `}`; unparseable entries become 0
fn array_literal(line: &str) -> Vec<i64> {
    let body = line
        .split_once('{')
        .map(|(_, rest)| rest.split('}').next().unwrap_or(""))
        .unwrap_or("");

    if body.trim().is_empty() {
        return Vec::new();
    }

    body.split(',')
        .map(|entry| parse_leading_int(entry).unwrap_or(0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_declaration() {
        let decl = parse_declaration("int[] arr = {64, 34, 25, 12, 22, 11, 90};");
        assert_eq!(
            decl,
            Some(Declaration::Array {
                name: "arr".to_string(),
                values: vec![64, 34, 25, 12, 22, 11, 90],
            })
        );
    }

    #[test]
    fn test_scalar_declaration() {
        let decl = parse_declaration("int end = arr.length - 1;");
        assert_eq!(
            decl,
            Some(Declaration::Scalar {
                name: "end".to_string(),
                expr: "arr.length - 1".to_string(),
            })
        );
    }

    #[test]
    fn test_loop_headers_are_not_declarations() {
        assert_eq!(parse_declaration("for (int i = 0; i < n-1; i++) {"), None);
        assert_eq!(parse_declaration("while (start < end) {"), None);
        assert_eq!(parse_declaration("arr[j] = arr[j+1];"), None);
    }

    #[test]
    fn test_array_without_literal_is_skipped() {
        assert_eq!(parse_declaration("int[] dist = new int[9];"), None);
    }

    #[test]
    fn test_malformed_literal_entries_default_to_zero() {
        let decl = parse_declaration("int[] arr = {1, x, 3};");
        assert_eq!(
            decl,
            Some(Declaration::Array {
                name: "arr".to_string(),
                values: vec![1, 0, 3],
            })
        );
    }

    #[test]
    fn test_open_matrix_literal_is_empty_array() {
        let decl = parse_declaration("int[][] graph = {");
        assert_eq!(
            decl,
            Some(Declaration::Array {
                name: "graph".to_string(),
                values: vec![],
            })
        );
    }
}
