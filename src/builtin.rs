use crate::command::{Action, ExitCode, SUCCESS};
use crate::session::Session;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

/// Exit the shell.
///
/// Arguments are ignored. The session is marked as exiting, which stops the
/// dispatch of any remaining handlers and ends the interactive loop with status 0.
pub struct Exit;

impl Action for Exit {
    fn invoke(
        &self,
        _args: &[String],
        _stdout: &mut dyn Write,
        session: &mut Session,
    ) -> Result<ExitCode> {
        info!("exit requested");
        session.request_exit();
        Ok(SUCCESS)
    }
}

/// Write the arguments to standard output, separated by single spaces,
/// followed by a newline.
pub struct Print;

impl Action for Print {
    fn invoke(
        &self,
        args: &[String],
        stdout: &mut dyn Write,
        _session: &mut Session,
    ) -> Result<ExitCode> {
        let message = args.join(" ");
        writeln!(stdout, "{}", message).context("print: can't write to output")?;
        stdout.flush().context("print: can't flush output")?;
        Ok(SUCCESS)
    }
}
