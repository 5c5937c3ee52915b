use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, Signal, System};

#[derive(Debug)]
pub enum KillOutcome {
    Terminated(u32, &'static str),
    Denied(u32, String),
    NotFound(u32),
}

pub fn terminate(sys: &mut System, pid: u32, signal: Signal) -> KillOutcome {
    // Re-check liveness first; the pid may come from a stale snapshot.
    let target = Pid::from_u32(pid);
    sys.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[target]),
        true,
        ProcessRefreshKind::nothing(),
    );

    let Some(process) = sys.process(target) else {
        return KillOutcome::NotFound(pid);
    };

    let signal_name = match signal {
        Signal::Term => "SIGTERM",
        Signal::Kill => "SIGKILL",
        _ => "signal",
    };
    match process.kill_with(signal) {
        Some(true) => KillOutcome::Terminated(pid, signal_name),
        Some(false) => KillOutcome::Denied(
            pid,
            format!("failed to send {signal_name} to PID {pid} (permission denied?)"),
        ),
        None => {
            // Signal not supported on this platform, fall back to kill()
            if process.kill() {
                KillOutcome::Terminated(pid, signal_name)
            } else {
                KillOutcome::Denied(pid, format!("failed to kill PID {pid} (permission denied?)"))
            }
        }
    }
}
