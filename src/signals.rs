use std::io;
use std::mem;
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set by the SIGTSTP handler, read by the launcher when deciding whether a
/// trailing `&` takes effect. Single writer (the handler), single reader
/// (the main loop); the Release half of the toggle pairs with the Acquire
/// load in [`foreground_only`].
static FOREGROUND_ONLY: AtomicBool = AtomicBool::new(false);

/// Mode-toggle announcements, newline-wrapped so they never splice into a
/// half-printed prompt. Emitted with `write(2)` because the handler can fire
/// mid-`println!` and buffered stdout is not async-signal-safe.
const ENTER_FOREGROUND_ONLY: &[u8] = b"\nEntering foreground-only mode (& is now ignored)\n";
const EXIT_FOREGROUND_ONLY: &[u8] = b"\nExiting foreground-only mode\n";

extern "C" fn handle_sigtstp(_signal: libc::c_int) {
    let was_active = FOREGROUND_ONLY.fetch_xor(true, Ordering::AcqRel);
    let message = if was_active {
        EXIT_FOREGROUND_ONLY
    } else {
        ENTER_FOREGROUND_ONLY
    };
    unsafe {
        libc::write(
            libc::STDOUT_FILENO,
            message.as_ptr() as *const libc::c_void,
            message.len(),
        );
    }
}

/// Whether a trailing `&` is currently ignored.
pub fn foreground_only() -> bool {
    FOREGROUND_ONLY.load(Ordering::Acquire)
}

/// Install the interpreter's own dispositions, once, before the first
/// prompt: Ctrl-C never kills the shell, and Ctrl-Z only flips the
/// foreground-only flag. Both stay installed for the process lifetime.
/// `SA_RESTART` keeps the blocking `read_line` from surfacing `EINTR`.
pub fn install() -> io::Result<()> {
    set_disposition(libc::SIGINT, libc::SIG_IGN, 0)?;
    set_disposition(
        libc::SIGTSTP,
        handle_sigtstp as libc::sighandler_t,
        libc::SA_RESTART,
    )?;
    Ok(())
}

fn set_disposition(
    signal: libc::c_int,
    handler: libc::sighandler_t,
    flags: libc::c_int,
) -> io::Result<()> {
    let mut action: libc::sigaction = unsafe { mem::zeroed() };
    action.sa_sigaction = handler;
    action.sa_flags = flags;
    unsafe {
        libc::sigemptyset(&mut action.sa_mask);
        if libc::sigaction(signal, &action, ptr::null_mut()) != 0 {
            return Err(io::Error::last_os_error());
        }
    }
    Ok(())
}

/// Child-side dispositions, applied between fork and exec. Only
/// async-signal-safe calls belong here; `signal(2)` qualifies and cannot
/// fail for valid signal numbers. A foreground child becomes interruptible
/// again while a background child stays immune to Ctrl-C, and no child
/// ever reacts to Ctrl-Z.
pub(crate) fn prepare_child(background: bool) {
    let interrupt = if background { libc::SIG_IGN } else { libc::SIG_DFL };
    unsafe {
        libc::signal(libc::SIGINT, interrupt);
        libc::signal(libc::SIGTSTP, libc::SIG_IGN);
    }
}

/// Best-effort SIGTERM. Failure (typically ESRCH for an already-gone pid)
/// is ignored: shutdown neither waits on nor verifies its jobs.
pub(crate) fn terminate(pid: u32) {
    unsafe {
        libc::kill(pid as libc::pid_t, libc::SIGTERM);
    }
}
