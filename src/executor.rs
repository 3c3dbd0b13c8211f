use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::process::CommandExt;
use std::process::{Child, Command, Stdio};

use crate::command;
use crate::jobs::JobTable;
use crate::signals;
use crate::status::LastStatus;

/// Permission bits for files created by output redirection.
const OUTPUT_MODE: u32 = 0o644;

/// Launch an external command: bind its stdio, spawn it, then either wait
/// for it (foreground) or register it (background).
///
/// A trailing `&` is honored only outside foreground-only mode. Redirect
/// files that fail to open, and programs that cannot be found or executed,
/// are reported and recorded as a failed status without disturbing the
/// interpreter. The sole `Err` return is a process-creation failure
/// (resource exhaustion at fork time), which the caller treats as fatal.
pub fn run(
    cmd: &command::Command,
    last_status: &mut LastStatus,
    jobs: &mut JobTable,
) -> io::Result<()> {
    let background = cmd.background && !signals::foreground_only();

    // Stdio is prepared parent-side; the child merely inherits the
    // descriptors. A background job with no explicit redirect talks to the
    // null device on both ends so it can never contend for the terminal.
    let stdin = match &cmd.input_file {
        Some(path) => match File::open(path) {
            Ok(file) => Stdio::from(file),
            Err(_) => {
                eprintln!("cannot open {path} for input");
                *last_status = LastStatus::Exited(1);
                return Ok(());
            }
        },
        None if background => Stdio::null(),
        None => Stdio::inherit(),
    };

    let stdout = match &cmd.output_file {
        Some(path) => match open_output(path) {
            Ok(file) => Stdio::from(file),
            Err(_) => {
                eprintln!("cannot open {path} for output");
                *last_status = LastStatus::Exited(1);
                return Ok(());
            }
        },
        None if background => Stdio::null(),
        None => Stdio::inherit(),
    };

    let mut process = Command::new(cmd.program());
    process.args(cmd.args()).stdin(stdin).stdout(stdout);
    unsafe {
        process.pre_exec(move || {
            signals::prepare_child(background);
            Ok(())
        });
    }

    match process.spawn() {
        Ok(child) if background => {
            let pid = jobs.add(child);
            println!("background pid is {pid}");
            Ok(())
        }
        Ok(child) => wait_foreground(child, last_status),
        Err(e)
            if e.kind() == io::ErrorKind::NotFound
                || e.kind() == io::ErrorKind::PermissionDenied =>
        {
            eprintln!("{}: no such file or directory", cmd.program());
            *last_status = LastStatus::Exited(1);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Block until the foreground child is gone and record how it went. A
/// signal death is announced immediately; `status` can repeat it later.
fn wait_foreground(mut child: Child, last_status: &mut LastStatus) -> io::Result<()> {
    let status = child.wait()?;
    let outcome = LastStatus::from_wait(status);
    if let LastStatus::Signaled(_) = outcome {
        println!("{outcome}");
    }
    *last_status = outcome;
    Ok(())
}

fn open_output(path: &str) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(OUTPUT_MODE)
        .open(path)
}
