pub mod ast;
pub mod ast_printer;
pub mod callable;
pub mod diagnostics;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod token;
pub mod value;

use diagnostics::Diagnostics;
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;

/// Run one source buffer through the full pipeline: scan, parse,
/// resolve, evaluate.  Errors are reported through `diagnostics`; a
/// static error from any stage skips the stages after it.
///
/// `next_id` threads the parser's expression-id watermark between
/// calls so a REPL session can keep one interpreter (and its
/// accumulated resolution table) across lines.
pub fn run(
    source: &[u8],
    interpreter: &mut Interpreter,
    diagnostics: &mut Diagnostics,
    next_id: &mut usize,
) {
    let tokens = scanner::scan_tokens(source, diagnostics);

    let mut parser = Parser::new(tokens, *next_id, diagnostics);
    let statements = parser.parse();
    *next_id = parser.next_id();

    if diagnostics.had_error() {
        return;
    }

    Resolver::new(interpreter, diagnostics).resolve(&statements);

    if diagnostics.had_error() {
        return;
    }

    if let Err(error) = interpreter.interpret(&statements) {
        diagnostics.report(&error);
    }
}
