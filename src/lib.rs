//! A tiny interactive command shell.
//!
//! Input lines are split into a command name and arguments by the [`lexer`], then
//! the [`dispatcher`] invokes every action bound to that name in the [`registry`].
//! Unknown or empty commands are ignored silently. Only the built-ins `print` and
//! `exit` ship with the crate; more can be added by implementing [`command::Action`].
//!
//! The main entry point is [`Interpreter`], which ties a [`session::Session`], a
//! registry and a [`config::ShellConfig`] together and runs the read loop.

pub mod builtin;
pub mod command;
pub mod config;
pub mod dispatcher;
pub mod error;
mod interpreter;
pub mod lexer;
pub mod registry;
pub mod session;

/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
