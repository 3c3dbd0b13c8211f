use std::collections::HashMap;
use std::process::Child;

use crate::signals;
use crate::status::LastStatus;

/// The shell's background-job registry, keyed by process id.
///
/// Each entry owns the spawned [`Child`]. Holding the handle un-reaped means
/// the kernel cannot recycle the pid out from under us, so a pid maps to at
/// most one live entry without any sentinel bookkeeping. The table grows as
/// needed; entries leave it when [`reap`](JobTable::reap) observes the
/// process gone or [`terminate_all`](JobTable::terminate_all) signals it.
pub struct JobTable {
    jobs: HashMap<u32, Child>,
}

impl Default for JobTable {
    fn default() -> Self {
        Self::new()
    }
}

impl JobTable {
    pub fn new() -> Self {
        Self {
            jobs: HashMap::new(),
        }
    }

    /// Track a freshly spawned background job. Returns its pid.
    pub fn add(&mut self, child: Child) -> u32 {
        let pid = child.id();
        self.jobs.insert(pid, child);
        pid
    }

    /// Non-blocking poll of every tracked job, run once per loop iteration
    /// before the prompt. Completed jobs are reported on stdout, recorded in
    /// the shared last status (background completions overwrite it just as
    /// foreground ones do), and dropped from the table.
    pub fn reap(&mut self, last_status: &mut LastStatus) {
        let mut done = Vec::new();

        for (pid, child) in self.jobs.iter_mut() {
            match child.try_wait() {
                Ok(Some(status)) => {
                    let outcome = LastStatus::from_wait(status);
                    println!("background pid {pid} is done; {outcome}");
                    *last_status = outcome;
                    done.push(*pid);
                }
                Ok(None) => {} // still running
                Err(e) => {
                    eprintln!("error checking background pid {pid}: {e}");
                }
            }
        }

        for pid in done {
            self.jobs.remove(&pid);
        }
    }

    /// Send SIGTERM to every tracked job and forget them all. Best-effort:
    /// nothing is waited for, and a job that ignores the signal is not
    /// escalated.
    pub fn terminate_all(&mut self) {
        for &pid in self.jobs.keys() {
            signals::terminate(pid);
        }
        self.jobs.clear();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
