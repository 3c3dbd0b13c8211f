use std::io;

use crate::builtins;
use crate::command::Command;
use crate::executor;
use crate::jobs::JobTable;
use crate::status::LastStatus;

/// What the interpreter loop should do after a command has been handled.
#[derive(Debug, PartialEq)]
pub enum Action {
    Continue,
    Exit,
}

/// Route one command by its first word: the three built-ins run in-process,
/// everything else goes to the launcher. A built-in never falls through to
/// external execution, and `exit` itself has no side effects; shutdown
/// sequencing belongs to the loop that receives [`Action::Exit`].
///
/// `Err` means the launcher hit an unrecoverable process-creation failure.
pub fn dispatch(
    cmd: &Command,
    last_status: &mut LastStatus,
    jobs: &mut JobTable,
) -> io::Result<Action> {
    match cmd.program() {
        "exit" => return Ok(Action::Exit),
        "cd" => builtins::cd(cmd.args()),
        "status" => builtins::status(last_status),
        _ => executor::run(cmd, last_status, jobs)?,
    }
    Ok(Action::Continue)
}
