use std::path::Path;

use sysinfo::{Disks, Networks, ProcessRefreshKind, ProcessesToUpdate, Signal, System};

use super::kill::{self, KillOutcome};
use super::snapshot::{
    DiskSample, MemorySample, NetworkSample, ProcessSample, SystemSnapshot, build_snapshot,
};

/// Mount point whose usage the snapshot reports; hosts without a `/`
/// mount fall back to the first listed volume.
pub const ROOT_MOUNT: &str = "/";

/// The retained `System` is the delta baseline for CPU sampling: aggregate
/// and per-process percentages are measured against the previous refresh.
/// Disks and networks are re-enumerated from scratch on every pass.
pub struct Collector {
    sys: System,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    /// One warm-up refresh so the first snapshot already diffs CPU against
    /// a real prior reading.
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        Collector { sys }
    }

    /// `None` when the OS hands back a non-finite reading.
    pub fn sample_cpu(&mut self) -> Option<f32> {
        self.sys.refresh_cpu_all();
        let usage = self.sys.global_cpu_usage();
        if usage.is_finite() {
            Some(usage)
        } else {
            log::debug!("cpu sample unavailable: non-finite reading {usage}");
            None
        }
    }

    /// `None` when the OS reports a zero total.
    pub fn sample_memory(&mut self) -> Option<MemorySample> {
        self.sys.refresh_memory();
        let total_bytes = self.sys.total_memory();
        if total_bytes == 0 {
            log::debug!("memory sample unavailable: zero total reported");
            return None;
        }
        let used_bytes = self.sys.used_memory();
        Some(MemorySample {
            total_bytes,
            used_bytes,
            used_percent: percent_of(used_bytes, total_bytes),
        })
    }

    /// `None` when no usable volume is reported.
    pub fn sample_disk(&mut self) -> Option<DiskSample> {
        let disks = Disks::new_with_refreshed_list();
        let disk = disks
            .list()
            .iter()
            .find(|d| d.mount_point() == Path::new(ROOT_MOUNT))
            .or_else(|| disks.list().first())?;

        let total_bytes = disk.total_space();
        if total_bytes == 0 {
            log::debug!(
                "disk sample unavailable: zero-sized volume at {}",
                disk.mount_point().display()
            );
            return None;
        }
        let used_bytes = total_bytes.saturating_sub(disk.available_space());
        Some(DiskSample {
            total_bytes,
            used_bytes,
            used_percent: percent_of(used_bytes, total_bytes),
        })
    }

    /// `None` when the OS reports no interfaces at all.
    pub fn sample_network(&mut self) -> Option<NetworkSample> {
        let networks = Networks::new_with_refreshed_list();
        if networks.list().is_empty() {
            log::debug!("network sample unavailable: no interfaces reported");
            return None;
        }
        let (sent_bytes, received_bytes) =
            networks
                .list()
                .values()
                .fold((0u64, 0u64), |(sent, received), data| {
                    (
                        sent.saturating_add(data.total_transmitted()),
                        received.saturating_add(data.total_received()),
                    )
                });
        Some(NetworkSample {
            sent_bytes,
            received_bytes,
        })
    }

    /// One row per visible process. Fields the kernel withholds come back
    /// as their zero values; a single opaque process never aborts the listing.
    pub fn sample_processes(&mut self) -> Vec<ProcessSample> {
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        let total_memory = self.sys.total_memory();

        let mut rows = Vec::with_capacity(self.sys.processes().len());
        for (pid, process) in self.sys.processes() {
            let memory_percent = if total_memory > 0 {
                (process.memory() as f32 / total_memory as f32) * 100.0
            } else {
                0.0
            };
            rows.push(ProcessSample {
                pid: pid.as_u32(),
                name: process.name().to_string_lossy().to_string(),
                cpu_percent: process.cpu_usage(),
                memory_percent,
            });
        }
        rows
    }

    /// One full sampling pass. Always returns a snapshot; each subsystem
    /// degrades independently.
    pub fn sample(&mut self) -> SystemSnapshot {
        let cpu = self.sample_cpu();
        let memory = self.sample_memory();
        let disk = self.sample_disk();
        let network = self.sample_network();
        let processes = self.sample_processes();
        build_snapshot(cpu, memory, disk, network, processes)
    }

    pub fn terminate(&mut self, pid: u32, signal: Signal) -> KillOutcome {
        kill::terminate(&mut self.sys, pid, signal)
    }
}

fn percent_of(part: u64, whole: u64) -> f32 {
    ((part as f64 / whole as f64) * 100.0) as f32
}
