/// Delimiter separating the command name and its arguments.
pub const DEFAULT_DELIMITER: char = ' ';

/// Path shown in the prompt when none is configured.
pub const DEFAULT_PATH: &str = "/";

/// Longest accepted input line in bytes, counting the line terminator.
pub const DEFAULT_MAX_LINE_LEN: usize = 255;

/// Settings that shape how the interpreter reads and splits input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Character on which input lines are split into tokens.
    pub delimiter: char,
    /// Initial path of the session, rendered in the prompt.
    pub initial_path: String,
    /// Maximum line length in bytes including the terminator; longer input is truncated.
    pub max_line_len: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            initial_path: DEFAULT_PATH.to_string(),
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

/// Cut `line` so that it fits into a buffer of `max_len` bytes including the terminator.
///
/// The cut never splits a UTF-8 character: it backs off to the previous char boundary.
pub fn truncate_line(line: &str, max_len: usize) -> &str {
    let limit = max_len.saturating_sub(1);
    if line.len() <= limit {
        return line;
    }
    let mut end = limit;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.delimiter, ' ');
        assert_eq!(config.initial_path, "/");
        assert_eq!(config.max_line_len, 255);
    }

    #[test]
    fn test_short_line_is_untouched() {
        assert_eq!(truncate_line("print hi", 255), "print hi");
        assert_eq!(truncate_line("", 255), "");
    }

    #[test]
    fn test_long_line_keeps_room_for_terminator() {
        let line = "a".repeat(300);
        assert_eq!(truncate_line(&line, 255).len(), 254);
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        // "é" is two bytes; a limit of 4 content bytes falls inside the second one.
        let line = "abcé";
        assert_eq!(truncate_line(line, 5), "abc");
        assert_eq!(truncate_line(line, 6), "abcé");
    }

    #[test]
    fn test_zero_limit_yields_empty_line() {
        assert_eq!(truncate_line("print", 0), "");
    }
}
