//! Expression evaluation for declaration right-hand sides
//!
//! The evaluator understands a fixed ladder of forms, tried in order:
//!
//! 1. `X.length`, `X.length + k`, `X.length - k` when `X` is an array
//! 2. `a + b` (exactly one `+`)
//! 3. `a - b` (exactly one `-`)
//! 4. a single term: pointer, then integer variable, then integer literal
//!
//! There is no general precedence or nesting. Anything the ladder does not
//! recognize evaluates to `0`; evaluation never fails.

use crate::memory::{Pointers, Variables};

/// Evaluate an expression against the current tables
pub fn evaluate(expr: &str, variables: &Variables, pointers: &Pointers) -> i64 {
    let expr = expr.trim();

    if let Some(n) = evaluate_length(expr, variables) {
        return n;
    }

    if let Some((lhs, rhs)) = split_single(expr, '+') {
        return evaluate_term(lhs, variables, pointers)
            .wrapping_add(evaluate_term(rhs, variables, pointers));
    }

    if let Some((lhs, rhs)) = split_single(expr, '-') {
        return evaluate_term(lhs, variables, pointers)
            .wrapping_sub(evaluate_term(rhs, variables, pointers));
    }

    evaluate_term(expr, variables, pointers)
}

/// `X.length [± k]`; None when `X` is not an array or the tail is not understood
fn evaluate_length(expr: &str, variables: &Variables) -> Option<i64> {
    let (name, tail) = expr.split_once(".length")?;
    let len = variables.array(name.trim())?.len() as i64;
    let tail = tail.trim();

    if tail.is_empty() {
        return Some(len);
    }
    if let Some(k) = tail.strip_prefix('+') {
        return parse_leading_int(k).map(|k| len.wrapping_add(k));
    }
    if let Some(k) = tail.strip_prefix('-') {
        return parse_leading_int(k).map(|k| len.wrapping_sub(k));
    }
    None
}

/// Split on `op` only when it occurs exactly once
fn split_single(expr: &str, op: char) -> Option<(&str, &str)> {
    if expr.matches(op).count() != 1 {
        return None;
    }
    expr.split_once(op)
}

fn evaluate_term(term: &str, variables: &Variables, pointers: &Pointers) -> i64 {
    let term = term.trim();

    if let Some(&p) = pointers.get(term) {
        return p;
    }
    if let Some(n) = variables.int(term) {
        return n;
    }
    parse_leading_int(term).unwrap_or(0)
}

/// Parse an optionally signed run of leading digits, ignoring whatever follows
///
/// `"10;"` is 10, `" -3 "` is -3, `"x1"` is None.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::Value;

    fn tables() -> (Variables, Pointers) {
        let mut vars = Variables::new();
        vars.insert("arr", Value::Array(vec![5, 4, 3, 2, 1, 0, 9]));
        vars.insert("n", Value::Int(7));
        let mut ptrs = Pointers::new();
        ptrs.insert("i", 2);
        (vars, ptrs)
    }

    #[test]
    fn test_length_forms() {
        let (vars, ptrs) = tables();
        assert_eq!(evaluate("arr.length", &vars, &ptrs), 7);
        assert_eq!(evaluate("arr.length - 1", &vars, &ptrs), 6);
        assert_eq!(evaluate("arr.length+2", &vars, &ptrs), 9);
    }

    #[test]
    fn test_unknown_length_target_falls_through() {
        let (vars, ptrs) = tables();
        // `other.length` is not an array, so the `-` split runs and both sides are terms
        assert_eq!(evaluate("other.length - 1", &vars, &ptrs), -1);
    }

    #[test]
    fn test_binary_split() {
        let (vars, ptrs) = tables();
        assert_eq!(evaluate("n + i", &vars, &ptrs), 9);
        assert_eq!(evaluate("n-1", &vars, &ptrs), 6);
        assert_eq!(evaluate("-5", &vars, &ptrs), -5);
    }

    #[test]
    fn test_pointer_shadows_variable() {
        let (mut vars, ptrs) = tables();
        vars.insert("i", Value::Int(40));
        assert_eq!(evaluate("i", &vars, &ptrs), 2);
    }

    #[test]
    fn test_chained_arithmetic_is_unsupported() {
        let (vars, ptrs) = tables();
        assert_eq!(evaluate("n + i + 1", &vars, &ptrs), 0);
        assert_eq!(evaluate("minDistance(dist, visited)", &vars, &ptrs), 0);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("10;"), Some(10));
        assert_eq!(parse_leading_int(" -3 "), Some(-3));
        assert_eq!(parse_leading_int("x1"), None);
        assert_eq!(parse_leading_int(""), None);
    }
}
