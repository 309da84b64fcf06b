/// Mutable shell state shared by the prompt renderer and the dispatched actions.
///
/// The session contains:
/// - `current_path`: the path shown in the prompt.
/// - `should_exit`: a flag that the interactive loop checks to know when to terminate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Path displayed in front of the prompt marker.
    pub current_path: String,
    /// When set to true, the interactive loop stops and the shell exits with status 0.
    pub should_exit: bool,
}

impl Session {
    /// Create a session whose prompt shows `current_path`.
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
            should_exit: false,
        }
    }

    /// Render the prompt written before each read, e.g. `/> `.
    pub fn prompt(&self) -> String {
        format!("{}> ", self.current_path)
    }

    /// Ask the interactive loop to stop after the current line.
    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new("/")
    }
}
