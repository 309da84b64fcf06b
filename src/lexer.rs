//! Lexical analysis of a single input line into a command name and its arguments.

/// Result of tokenizing one input line.
///
/// `command_name` is already lowercased; `arguments` keep their original case and order.
/// An empty `command_name` means the line held no tokens at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedInput {
    /// First token of the line, case-folded to lowercase.
    pub command_name: String,
    /// Every token after the first one.
    pub arguments: Vec<String>,
}

impl ParsedInput {
    /// Number of arguments following the command name.
    pub fn argument_count(&self) -> usize {
        self.arguments.len()
    }

    /// Whether the line contained no command at all.
    pub fn is_empty(&self) -> bool {
        self.command_name.is_empty()
    }
}

/// Iterator over the non-empty tokens of a line.
///
/// Consecutive delimiters never produce empty tokens.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
    delimiter: char,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.trim_start_matches(self.delimiter);
        if start.is_empty() {
            self.rest = start;
            return None;
        }

        let end = start.find(self.delimiter).unwrap_or(start.len());
        let (token, rest) = start.split_at(end);
        self.rest = rest;
        Some(token)
    }
}

/// Remove one trailing line terminator (`\n` or `\r\n`) if present.
pub(crate) fn strip_line_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(stripped) => stripped.strip_suffix('\r').unwrap_or(stripped),
        None => line,
    }
}

/// Splits `line` into its raw tokens.
///
/// A single trailing line terminator is dropped first; the remaining text is cut at
/// every occurrence of `delimiter` and empty segments are skipped.
///
/// # Arguments
/// * `line` - The raw input line, possibly ending with a line terminator.
/// * `delimiter` - The character separating tokens.
pub fn split_tokens(line: &str, delimiter: char) -> Tokens<'_> {
    Tokens {
        rest: strip_line_terminator(line),
        delimiter,
    }
}

/// The main entry point to perform lexical analysis.
///
/// The first token becomes the lowercased command name, the rest become arguments.
/// An empty or delimiter-only line produces an empty command name, which callers
/// treat as "nothing to do".
///
/// # Arguments
/// * `line` - The string to be tokenized.
/// * `delimiter` - The character separating tokens.
///
/// # Returns
/// A [`ParsedInput`] describing the command and its arguments.
pub fn tokenize(line: &str, delimiter: char) -> ParsedInput {
    tokenize_content(strip_line_terminator(line), delimiter)
}

/// Like [`tokenize`], for text whose line terminator was already removed.
pub(crate) fn tokenize_content(content: &str, delimiter: char) -> ParsedInput {
    let mut tokens = Tokens {
        rest: content,
        delimiter,
    };
    let Some(first) = tokens.next() else {
        return ParsedInput::default();
    };

    ParsedInput {
        command_name: first.to_lowercase(),
        arguments: tokens.map(str::to_string).collect(),
    }
}
