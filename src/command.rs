use crate::session::Session;
use anyhow::Result;
use std::io::Write;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
pub type ExitCode = i32;

/// Status returned by an action that completed normally.
pub const SUCCESS: ExitCode = 0;

/// Status recorded for an action that failed.
pub const ERROR: ExitCode = 1;

/// Object-safe behavior bound to a command name in the [`Registry`](crate::registry::Registry).
///
/// Built-ins implement this trait, and so can any caller-supplied handler.
/// Several actions may share one name; the dispatcher invokes all of them.
pub trait Action {
    /// Runs the action with the arguments that followed the command name.
    ///
    /// `stdout` receives anything the action prints. The session lets an action
    /// inspect or change shell state, e.g. request the shell to exit.
    fn invoke(
        &self,
        args: &[String],
        stdout: &mut dyn Write,
        session: &mut Session,
    ) -> Result<ExitCode>;
}
