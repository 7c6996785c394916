//! Line splitting for source snippets
//!
//! The visualizer works line by line: each non-empty, non-comment line is
//! trimmed and tagged with its 1-based position in the original text so the
//! source pane can point at it.

/// A trimmed, non-empty source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

/// Split source text into meaningful lines, skipping blanks and full-line comments
pub fn tokenize(source: &str) -> Vec<SourceLine> {
    source
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let text = raw.trim();
            if text.is_empty() || is_comment(text) {
                return None;
            }
            Some(SourceLine {
                number: idx + 1,
                text: text.to_string(),
            })
        })
        .collect()
}

fn is_comment(text: &str) -> bool {
    text.starts_with("//") || text.starts_with("/*") || text.starts_with('*')
}

/// Split text into identifier-like words (ASCII alphanumerics and `_`)
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
}

/// Whether `text` contains `word` as a whole identifier
pub fn has_word(text: &str, word: &str) -> bool {
    words(text).any(|w| w == word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_original_line_numbers() {
        let source = "int[] arr = {1, 2};\n\n   // note\nint n = arr.length;\n";
        let lines = tokenize(source);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].number, 1);
        assert_eq!(lines[0].text, "int[] arr = {1, 2};");
        assert_eq!(lines[1].number, 4);
        assert_eq!(lines[1].text, "int n = arr.length;");
    }

    #[test]
    fn test_block_comment_lines_skipped() {
        let lines = tokenize("/* header\n * body\n */\nint x = 1;");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].number, 4);
    }

    #[test]
    fn test_has_word_is_whole_word() {
        assert!(has_word("for (int i = 0; i < n; i++)", "for"));
        assert!(!has_word("int before = 1;", "for"));
        assert!(has_word("arr[j+1] = temp;", "temp"));
        assert!(!has_word("int temperature = 3;", "temp"));
    }
}
