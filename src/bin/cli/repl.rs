//! Interactive read loop.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use zipvfs::{Outcome, Shell};

use crate::exit_codes::ExitCode;

/// Prints the result of one executed line.
///
/// Returns `false` once the session should end.
pub fn report(outcome: zipvfs::Result<Outcome>) -> bool {
    match outcome {
        Ok(Outcome::Continue(Some(output))) => println!("{}", output),
        Ok(Outcome::Continue(None)) => {}
        Ok(Outcome::Exit(message)) => {
            println!("{}", message);
            return false;
        }
        Err(e) => eprintln!("{}", e),
    }
    true
}

/// Runs the prompt loop until `exit`, Ctrl-D, or a terminal error.
pub fn run(shell: &mut Shell) -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FatalError;
        }
    };

    loop {
        match rl.readline(&shell.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        log::warn!("Failed to add history entry: {}", e);
                    }
                }
                if !report(shell.execute(&line)) {
                    return ExitCode::Success;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", zipvfs::shell::EXIT_MESSAGE);
                return ExitCode::Success;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                return ExitCode::IoError;
            }
        }
    }
}
