use std::io::{stdin, stdout};

use glide_simulation::ConsoleSession;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = stdin();
    let stdout = stdout();
    let mut session = ConsoleSession::new(stdin.lock(), stdout.lock());

    // A broken input stream is reported but never changes the exit code.
    if let Err(e) = session.run() {
        eprintln!("Session ended early: {}", e);
    }

    Ok(())
}
