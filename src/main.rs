use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser as ClapParser;
use log::info;

use minnow::diagnostics::Diagnostics;
use minnow::interpreter::Interpreter;

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Script to execute; without one, an interactive prompt starts
    script: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Cli = Cli::parse();

    match args.script.as_slice() {
        [] => run_prompt()?,

        [script] => run_file(script)?,

        _ => {
            println!("Usage: minnow [script]");
            std::process::exit(64);
        }
    }

    Ok(())
}

/// Execute a script file, then exit 65 on a static error or 70 on a
/// runtime error.
fn run_file(path: &Path) -> anyhow::Result<()> {
    info!("Running file {}", path.display());

    let source: Vec<u8> = fs::read(path)?;

    let mut interpreter = Interpreter::new();
    let mut diagnostics = Diagnostics::new();
    let mut next_id: usize = 0;

    minnow::run(&source, &mut interpreter, &mut diagnostics, &mut next_id);

    if diagnostics.had_error() {
        std::process::exit(65);
    }
    if diagnostics.had_runtime_error() {
        std::process::exit(70);
    }

    Ok(())
}

/// Read-eval-print loop.  Globals and the resolution table persist
/// across lines; the static-error flag resets so one bad line does not
/// end the session.  EOF (CTRL+D) terminates.
fn run_prompt() -> anyhow::Result<()> {
    info!("Starting interactive prompt");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut interpreter = Interpreter::new();
    let mut diagnostics = Diagnostics::new();
    let mut next_id: usize = 0;

    let mut line = String::new();

    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        minnow::run(
            line.as_bytes(),
            &mut interpreter,
            &mut diagnostics,
            &mut next_id,
        );

        diagnostics.reset();
    }

    Ok(())
}
