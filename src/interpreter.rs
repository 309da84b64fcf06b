use crate::config::{ShellConfig, truncate_line};
use crate::dispatcher::dispatch;
use crate::error::RegistryError;
use crate::lexer;
use crate::registry::Registry;
use crate::session::Session;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, info};

/// A minimal interactive shell dispatching input lines to registered actions.
///
/// The interpreter owns a [`Session`], a [`Registry`] and a [`ShellConfig`]. See
/// [`Interpreter::with_builtins`] for the commands included out of the box.
///
/// Example
/// ```
/// use yshell::Interpreter;
/// let mut sh = Interpreter::with_builtins().unwrap();
/// let mut out = Vec::new();
/// sh.execute_line("PRINT hello   world\n", &mut out);
/// assert_eq!(out, b"hello world\n");
/// assert_eq!(sh.prompt(), "/> ");
/// ```
pub struct Interpreter {
    session: Session,
    registry: Registry,
    config: ShellConfig,
}

impl Interpreter {
    /// Create an interpreter over a custom registry.
    pub fn new(registry: Registry, config: ShellConfig) -> Self {
        Self {
            session: Session::new(config.initial_path.clone()),
            registry,
            config,
        }
    }

    /// Create an interpreter with the default configuration and the built-ins
    /// `exit` and `print`.
    pub fn with_builtins() -> Result<Self, RegistryError> {
        Ok(Self::new(Registry::with_builtins()?, ShellConfig::default()))
    }

    /// Current shell state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Commands this interpreter dispatches to.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Prompt shown before reading the next line.
    pub fn prompt(&self) -> String {
        self.session.prompt()
    }

    /// Whether an action asked the shell to stop.
    pub fn should_exit(&self) -> bool {
        self.session.should_exit
    }

    /// Tokenize one line and dispatch it, writing command output to `stdout`.
    ///
    /// The line terminator is removed first, then content longer than the configured
    /// limit (which counts the terminator) is truncated.
    pub fn execute_line(&mut self, line: &str, stdout: &mut dyn Write) {
        let content = lexer::strip_line_terminator(line);
        let content = truncate_line(content, self.config.max_line_len);
        let input = lexer::tokenize_content(content, self.config.delimiter);
        debug!(command = %input.command_name, args = ?input.arguments, "tokenized");
        dispatch(&self.registry, &input, stdout, &mut self.session);
    }

    /// Read-Eval-Print Loop over standard input.
    ///
    /// Uses line editing on a terminal and falls back to [`Interpreter::run_loop`]
    /// when input is piped. Returns when an action requests exit or input reaches
    /// end of file.
    pub fn repl(&mut self) -> rustyline::Result<()> {
        info!(path = %self.session.current_path, "shell started");

        if io::stdin().is_terminal() {
            self.edit_loop()?;
        } else {
            self.run_loop(io::stdin().lock(), io::stdout())?;
        }

        info!("shell stopped");
        Ok(())
    }

    fn edit_loop(&mut self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;
        let mut stdout = io::stdout();

        while !self.session.should_exit {
            match rl.readline(&self.prompt()) {
                Ok(line) => self.execute_line(&line, &mut stdout),
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Prompt on `output` and execute lines read from `input` until exit or EOF.
    pub fn run_loop<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> io::Result<()> {
        let mut line = String::new();

        while !self.session.should_exit {
            write!(output, "{}", self.prompt())?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            self.execute_line(&line, &mut output);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::Print;
    use std::io::Cursor;

    fn run_lines(sh: &mut Interpreter, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            if sh.should_exit() {
                break;
            }
            sh.execute_line(line, &mut out);
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_session_of_lines_stops_at_exit() {
        let mut sh = Interpreter::with_builtins().unwrap();
        let out = run_lines(
            &mut sh,
            &["print one\n", "   \n", "nosuch cmd\n", "EXIT\n", "print two\n"],
        );

        assert_eq!(out, "one\n");
        assert!(sh.should_exit());
    }

    #[test]
    fn test_custom_config_is_applied() {
        let config = ShellConfig {
            delimiter: ',',
            initial_path: "/home".to_string(),
            max_line_len: 255,
        };
        let mut sh = Interpreter::new(Registry::with_builtins().unwrap(), config);

        assert_eq!(sh.prompt(), "/home> ");
        assert_eq!(run_lines(&mut sh, &["print,a,,b c\n"]), "a b c\n");
    }

    #[test]
    fn test_long_lines_are_truncated() {
        let config = ShellConfig {
            max_line_len: 12,
            ..ShellConfig::default()
        };
        let mut registry = Registry::new();
        registry.register("print", Print).unwrap();
        let mut sh = Interpreter::new(registry, config);

        // 11 content bytes survive: "print abcde".
        assert_eq!(run_lines(&mut sh, &["print abcdefghij\n"]), "abcde\n");
    }

    #[test]
    fn test_terminator_does_not_count_against_content() {
        let mut sh = Interpreter::with_builtins().unwrap();
        let word = "a".repeat(247);
        // 6 + 247 content bytes plus "\r\n": within the 255-byte limit.
        let line = format!("print {}\r\n", word);
        assert_eq!(line.len(), 255);

        assert_eq!(run_lines(&mut sh, &[line.as_str()]), format!("{}\n", word));
    }

    #[test]
    fn test_long_crlf_line_loses_no_content_to_carriage_return() {
        let mut sh = Interpreter::with_builtins().unwrap();
        let line = format!("print {}\r\n", "b".repeat(300));

        let out = run_lines(&mut sh, &[line.as_str()]);
        assert_eq!(out, format!("{}\n", "b".repeat(248)));
    }

    #[test]
    fn test_run_loop_prompts_before_each_read_and_stops_at_exit() {
        let mut sh = Interpreter::with_builtins().unwrap();
        let input = Cursor::new("print a  b\nnosuch\nexit\nprint no\n");
        let mut out = Vec::new();

        sh.run_loop(input, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "/> a b\n/> /> ");
        assert!(sh.should_exit());
    }

    #[test]
    fn test_run_loop_stops_at_end_of_input() {
        let mut sh = Interpreter::with_builtins().unwrap();
        let mut out = Vec::new();

        sh.run_loop(Cursor::new("PRINT last\n"), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "/> last\n/> ");
        assert!(!sh.should_exit());
    }

    #[test]
    fn test_run_loop_handles_final_line_without_terminator() {
        let mut sh = Interpreter::with_builtins().unwrap();
        let mut out = Vec::new();

        sh.run_loop(Cursor::new("print end"), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "/> end\n/> ");
    }

    #[test]
    fn test_accessors() {
        let sh = Interpreter::with_builtins().unwrap();
        assert_eq!(sh.session(), &Session::default());
        assert_eq!(sh.registry().len(), 2);
        assert!(!sh.should_exit());
    }
}
