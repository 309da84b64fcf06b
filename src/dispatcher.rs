use crate::command::{ERROR, SUCCESS};
use crate::lexer::ParsedInput;
use crate::registry::Registry;
use crate::session::Session;
use std::io::Write;
use tracing::{debug, warn};

/// Invoke every action registered under `input.command_name`.
///
/// All matching entries fire, in registry traversal order (newest first), not just
/// the first match. An empty command name or a name with no entries is a silent
/// no-op. Statuses are not returned: a failing action is only logged.
///
/// Once an action asks the session to exit, the remaining matches are skipped.
pub fn dispatch(
    registry: &Registry,
    input: &ParsedInput,
    stdout: &mut dyn Write,
    session: &mut Session,
) {
    if input.is_empty() {
        return;
    }

    let mut invoked = 0usize;
    for action in registry.find_all(&input.command_name) {
        invoked += 1;
        let status = match action.invoke(&input.arguments, stdout, session) {
            Ok(code) => code,
            Err(err) => {
                warn!(command = %input.command_name, error = %format!("{:#}", err), "command failed");
                ERROR
            }
        };
        if status != SUCCESS {
            warn!(command = %input.command_name, status, "command returned non-zero status");
        }
        if session.should_exit {
            break;
        }
    }

    debug!(
        command = %input.command_name,
        argc = input.argument_count(),
        invoked,
        "dispatched"
    );
}
