//! Error sink and run-status flags.
//!
//! Every subsystem funnels its [`MinnowError`] values through one
//! [`Diagnostics`] instance.  Reporting writes the error's `Display`
//! form to standard error and raises the matching status flag: static
//! errors (lexical, parse, resolution) set `had_error`, runtime errors
//! set `had_runtime_error`.  The driver inspects the flags to pick an
//! exit code and to decide whether later pipeline stages may run.

use log::debug;

use crate::error::MinnowError;

#[derive(Debug, Default)]
pub struct Diagnostics {
    had_error: bool,
    had_runtime_error: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the error to standard error and raise the matching flag.
    pub fn report(&mut self, error: &MinnowError) {
        debug!("Reporting: {:?}", error);

        eprintln!("{}", error);

        match error {
            MinnowError::Runtime { .. } => self.had_runtime_error = true,
            _ => self.had_error = true,
        }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clear the static-error flag between REPL lines so one mistake
    /// does not poison the rest of the session.
    pub fn reset(&mut self) {
        self.had_error = false;
    }
}
