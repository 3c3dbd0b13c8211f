#[cfg(unix)]
use std::io::Write;
#[cfg(unix)]
use std::process::{Child, Command, Stdio};
#[cfg(unix)]
use std::thread;
#[cfg(unix)]
use std::time::Duration;

#[cfg(unix)]
fn run_shell(lines: &[&str]) -> std::process::Output {
    let mut child = spawn_shell();

    {
        let stdin = child.stdin.as_mut().expect("stdin");
        for line in lines {
            writeln!(stdin, "{line}").expect("write line");
        }
        writeln!(stdin, "exit").expect("write exit");
    }

    child.wait_with_output().expect("wait output")
}

#[cfg(unix)]
fn spawn_shell() -> Child {
    Command::new(env!("CARGO_BIN_EXE_tinysh"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn tinysh")
}

#[cfg(unix)]
fn send_signal(shell: &Child, signal: libc::c_int) {
    unsafe {
        libc::kill(shell.id() as libc::pid_t, signal);
    }
}

/// Give the shell time to reach the prompt or handle a signal.
#[cfg(unix)]
fn settle() {
    thread::sleep(Duration::from_millis(400));
}

#[cfg(unix)]
fn write_line(shell: &mut Child, line: &str) {
    let stdin = shell.stdin.as_mut().expect("stdin");
    writeln!(stdin, "{line}").expect("write line");
}

#[cfg(unix)]
#[test]
fn shell_ignores_sigint_at_prompt() {
    let mut shell = spawn_shell();
    settle();

    send_signal(&shell, libc::SIGINT);
    settle();

    write_line(&mut shell, "echo ALIVE");
    write_line(&mut shell, "exit");

    let output = shell.wait_with_output().expect("wait output");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ALIVE"), "stdout was: {stdout}");
    assert!(output.status.success(), "shell did not exit cleanly");
}

#[cfg(unix)]
#[test]
fn sigtstp_toggles_foreground_only_mode() {
    let mut shell = spawn_shell();
    settle();

    for _ in 0..3 {
        send_signal(&shell, libc::SIGTSTP);
        settle();
    }

    write_line(&mut shell, "exit");
    let output = shell.wait_with_output().expect("wait output");
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Three toggles from the initial state: enter, exit, enter.
    assert_eq!(
        stdout.matches("Entering foreground-only mode").count(),
        2,
        "stdout was: {stdout}"
    );
    assert_eq!(
        stdout.matches("Exiting foreground-only mode").count(),
        1,
        "stdout was: {stdout}"
    );
    let entered = stdout.find("Entering foreground-only mode").unwrap();
    let exited = stdout.find("Exiting foreground-only mode").unwrap();
    assert!(entered < exited, "stdout was: {stdout}");
}

#[cfg(unix)]
#[test]
fn foreground_only_mode_ignores_ampersand() {
    let mut shell = spawn_shell();
    settle();

    send_signal(&shell, libc::SIGTSTP);
    settle();

    // Runs in the foreground despite the trailing marker.
    write_line(&mut shell, "sleep 1 &");
    thread::sleep(Duration::from_millis(1600));

    send_signal(&shell, libc::SIGTSTP);
    settle();

    // Mode is off again, so this one really goes to the background.
    write_line(&mut shell, "sleep 1 &");
    settle();

    write_line(&mut shell, "exit");
    let output = shell.wait_with_output().expect("wait output");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains("Entering foreground-only mode (& is now ignored)"),
        "stdout was: {stdout}"
    );
    assert!(
        stdout.contains("Exiting foreground-only mode"),
        "stdout was: {stdout}"
    );
    assert_eq!(
        stdout.matches("background pid is").count(),
        1,
        "stdout was: {stdout}"
    );
}

#[cfg(unix)]
#[test]
fn foreground_child_killed_by_sigint_is_reported() {
    let output = run_shell(&["sh -c 'kill -INT $$'", "status"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Once from the wait itself, once more from `status`.
    assert_eq!(
        stdout.matches("terminated by signal 2").count(),
        2,
        "stdout was: {stdout}"
    );
}

#[cfg(unix)]
#[test]
fn background_child_ignores_sigint() {
    let output = run_shell(&["sh -c 'kill -INT $$; exit 5' &", "sleep 1", "status"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains("is done; exit value 5"),
        "stdout was: {stdout}"
    );
    assert!(
        !stdout.contains("terminated by signal 2"),
        "stdout was: {stdout}"
    );
}
