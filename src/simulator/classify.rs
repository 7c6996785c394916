//! Keyword classification of snippets
//!
//! A snippet is matched against a closed catalog of algorithm shapes by
//! looking for tell-tale keywords in its lower-cased text. The first rule
//! that matches wins; [`AlgorithmShape::Unrecognized`] is an ordinary
//! outcome that selects the generic simulator.

use crate::parser::lines::{has_word, words, SourceLine};

/// Algorithm shapes with a dedicated simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmShape {
    /// Nested loops exchanging adjacent elements through a temporary
    AdjacentSwapSort,
    /// `start`/`end` pointers walking toward each other in a `while` loop
    TwoPointerReversal,
    /// Scan for a `target` value
    LinearSearch,
    Unrecognized,
}

impl AlgorithmShape {
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmShape::AdjacentSwapSort => "Bubble Sort",
            AlgorithmShape::TwoPointerReversal => "Array Reversal",
            AlgorithmShape::LinearSearch => "Linear Search",
            AlgorithmShape::Unrecognized => "Generic",
        }
    }
}

/// Pick the simulator for a tokenized snippet
pub fn classify(lines: &[SourceLine]) -> AlgorithmShape {
    let text = lines
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let for_loops = words(&text).filter(|w| *w == "for").count();

    if text.contains("bubble") || (for_loops >= 2 && has_word(&text, "temp")) {
        AlgorithmShape::AdjacentSwapSort
    } else if has_word(&text, "while") && has_word(&text, "start") && has_word(&text, "end") {
        AlgorithmShape::TwoPointerReversal
    } else if text.contains("target") || text.contains("search") {
        AlgorithmShape::LinearSearch
    } else {
        AlgorithmShape::Unrecognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenize;

    fn shape(source: &str) -> AlgorithmShape {
        classify(&tokenize(source))
    }

    #[test]
    fn test_nested_loops_with_temp_is_sort() {
        let src = "for (int i = 0; i < n; i++) {\nfor (int j = 0; j < n; j++) {\nint temp = arr[j];";
        assert_eq!(shape(src), AlgorithmShape::AdjacentSwapSort);
    }

    #[test]
    fn test_single_loop_with_temp_is_not_sort() {
        let src = "for (int i = 0; i < n; i++) {\nint temp = arr[i];";
        assert_eq!(shape(src), AlgorithmShape::Unrecognized);
    }

    #[test]
    fn test_two_pointer_reversal() {
        let src = "int start = 0;\nint end = arr.length - 1;\nwhile (start < end) {";
        assert_eq!(shape(src), AlgorithmShape::TwoPointerReversal);
    }

    #[test]
    fn test_target_selects_search() {
        assert_eq!(shape("int target = 10;"), AlgorithmShape::LinearSearch);
    }

    #[test]
    fn test_keywords_in_comments_are_ignored() {
        assert_eq!(shape("// binary search tree\nint x = 1;"), AlgorithmShape::Unrecognized);
    }
}
