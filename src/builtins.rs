use std::env;
use std::io;
use std::path::PathBuf;

use crate::status::LastStatus;

/// Change the interpreter's own working directory; with no argument the
/// target comes from `$HOME`. Runs in-process, since a child's chdir would
/// be invisible to the parent. Never touches the last status; failures are
/// reported and the loop carries on.
pub fn cd(args: &[String]) {
    let target = match args.first() {
        Some(path) => PathBuf::from(path),
        None => match env::var("HOME") {
            Ok(home) => PathBuf::from(home),
            Err(_) => {
                eprintln!("cd: HOME is not set");
                return;
            }
        },
    };

    match env::set_current_dir(&target) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            eprintln!("cd: {}: no such file or directory", target.display());
        }
        Err(e) => {
            eprintln!("cd: {}: {e}", target.display());
        }
    }
}

/// Repeat the outcome of the most recent reaped process, exactly as it was
/// first reported.
pub fn status(last_status: &LastStatus) {
    println!("{last_status}");
}
