//! Centralised error hierarchy for the **Minnow interpreter**.
//!
//! All subsystems (scanner, parser, resolver, runtime, CLI) must convert their
//! internal failure modes into one of the variants defined here.  This enables a
//! uniform `Result<T>` alias throughout the crate and ergonomic inter‑operation
//! with `anyhow`, while still preserving rich diagnostic detail.
//!
//! The module **does not** print diagnostics itself; that is the job of
//! [`crate::diagnostics::Diagnostics`].

use std::io;
use thiserror::Error;

use log::info;

use crate::token::{Token, TokenType};

/// Canonical error type used throughout the interpreter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MinnowError {
    /// Lexical (scanner) error with source line information.
    #[error("[line {line}] Error: {message}")]
    Lex {
        /// Human‑readable description.
        message: String,

        /// 1‑based line where the error occurred.
        line: usize,
    },

    /// Syntactic (parser) error, located at a token.
    #[error("[line {line}] Error{place}: {message}")]
    Parse {
        message: String,

        /// Rendered token context: ` at 'lexeme'`, or ` at end` for EOF.
        place: String,

        line: usize,
    },

    /// Static‑analysis (resolution) failure, located at a token.
    #[error("[line {line}] Error{place}: {message}")]
    Resolve {
        message: String,
        place: String,
        line: usize,
    },

    /// Runtime evaluation error.
    #[error("{message}\n[line {line}]")]
    Runtime { message: String, line: usize },

    /// Wrapper around `std::io::Error` (transparent).  Enables `?` on I/O ops.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl MinnowError {
    /// Helper constructor for the **scanner**.
    pub fn lex<S: Into<String>>(line: usize, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Lex error: line={}, msg={}", line, message);

        MinnowError::Lex { message, line }
    }

    /// Helper constructor for the **parser**.
    pub fn parse_at<S: Into<String>>(token: &Token, msg: S) -> Self {
        let message: String = msg.into();

        info!(
            "Creating Parse error: line={}, at={}, msg={}",
            token.line, token.lexeme, message
        );

        MinnowError::Parse {
            message,
            place: place(token),
            line: token.line,
        }
    }

    /// Helper constructor for the **resolver**.
    pub fn resolve_at<S: Into<String>>(token: &Token, msg: S) -> Self {
        let message: String = msg.into();

        info!(
            "Creating Resolve error: line={}, at={}, msg={}",
            token.line, token.lexeme, message
        );

        MinnowError::Resolve {
            message,
            place: place(token),
            line: token.line,
        }
    }

    /// Helper constructor for the **evaluator**.
    pub fn runtime<S: Into<String>>(line: usize, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Runtime error: line={}, msg={}", line, message);

        MinnowError::Runtime { message, line }
    }
}

fn place(token: &Token) -> String {
    if token.token_type == TokenType::EOF {
        " at end".to_string()
    } else {
        format!(" at '{}'", token.lexeme)
    }
}

/// Crate‑wide `Result` alias.
pub type Result<T> = std::result::Result<T, MinnowError>;
