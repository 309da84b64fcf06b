use anyhow::Result;
use argh::FromArgs;
use tracing_subscriber::EnvFilter;
use yshell::Interpreter;
use yshell::config::{DEFAULT_DELIMITER, DEFAULT_MAX_LINE_LEN, DEFAULT_PATH, ShellConfig};
use yshell::registry::Registry;

#[derive(FromArgs)]
/// A minimal interactive shell with the built-in commands `print` and `exit`.
struct Args {
    #[argh(option, default = "DEFAULT_DELIMITER")]
    /// character separating the command name and its arguments
    delimiter: char,

    #[argh(option, default = "DEFAULT_PATH.to_string()")]
    /// path displayed in the prompt
    path: String,

    #[argh(option, default = "DEFAULT_MAX_LINE_LEN")]
    /// maximum input line length in bytes, including the line terminator
    max_line_len: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Args = argh::from_env();
    let config = ShellConfig {
        delimiter: args.delimiter,
        initial_path: args.path,
        max_line_len: args.max_line_len,
    };

    let mut sh = Interpreter::new(Registry::with_builtins()?, config);
    sh.repl()?;
    Ok(())
}
