mod builtins;
mod command;
mod dispatch;
mod executor;
mod jobs;
mod parser;
mod signals;
mod status;

use std::io::{self, Write};

use dispatch::Action;
use jobs::JobTable;
use status::LastStatus;

fn main() {
    if let Err(e) = signals::install() {
        eprintln!("cannot install signal handlers: {e}");
        std::process::exit(1);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut jobs = JobTable::new();
    let mut last_status = LastStatus::default();

    loop {
        // Finished background jobs are announced before the next prompt,
        // never mid-line.
        jobs.reap(&mut last_status);

        print!(": ");
        if stdout.flush().is_err() {
            break;
        }

        let mut input = String::new();
        match stdin.read_line(&mut input) {
            Ok(0) => break, // end of input, same shutdown as `exit`
            Ok(_) => match parser::parse(&input) {
                Ok(Some(cmd)) => match dispatch::dispatch(&cmd, &mut last_status, &mut jobs) {
                    Ok(Action::Continue) => {}
                    Ok(Action::Exit) => break,
                    Err(e) => {
                        eprintln!("cannot spawn {}: {e}", cmd.program());
                        std::process::exit(1);
                    }
                },
                Ok(None) => {} // blank or comment line
                Err(message) => eprintln!("{message}"),
            },
            Err(e) => {
                eprintln!("error reading input: {e}");
                break;
            }
        }
    }

    // Best-effort SIGTERM for any jobs still registered; nothing waits on them.
    jobs.terminate_all();
}
