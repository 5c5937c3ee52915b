//! Snapshot data model and assembly. `SystemSnapshot` doubles as the wire
//! type served over HTTP; its field names are the JSON contract the
//! dashboard page relies on.

use serde::Serialize;

const GIB: u64 = 1024 * 1024 * 1024;
const MIB: u64 = 1024 * 1024;

/// One observed process. Rows are rebuilt from scratch on every pass;
/// there is no identity tracking across snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessSample {
    pub pid: u32,
    /// Empty when the OS withholds the executable name.
    pub name: String,
    /// Unclamped; can exceed 100 on multi-core hosts.
    pub cpu_percent: f32,
    pub memory_percent: f32,
}

/// Point-in-time metrics plus the process table, ordered by descending
/// CPU. Subsystems that could not be read show up as their zero values.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SystemSnapshot {
    pub cpu_usage: f32,
    /// GiB
    pub memory_total: f64,
    /// GiB
    pub memory_used: f64,
    pub memory_usage: f32,
    /// GiB
    pub disk_total: f64,
    /// GiB
    pub disk_used: f64,
    pub disk_usage: f32,
    /// MiB, cumulative since boot (platform-dependent counter reset)
    pub net_sent: f64,
    /// MiB, cumulative since boot
    pub net_recv: f64,
    pub processes: Vec<ProcessSample>,
}

/// `used_percent` is computed from the byte counters at query time, never
/// re-derived from converted GiB values.
#[derive(Debug, Clone, Copy)]
pub struct MemorySample {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub used_percent: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct DiskSample {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub used_percent: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct NetworkSample {
    pub sent_bytes: u64,
    pub received_bytes: u64,
}

fn to_gib(bytes: u64) -> f64 {
    bytes as f64 / GIB as f64
}

fn to_mib(bytes: u64) -> f64 {
    bytes as f64 / MIB as f64
}

/// Assembles a snapshot from the per-subsystem readings. A failed reading
/// leaves its fields at zero; nothing here can fail as a whole.
pub fn build_snapshot(
    cpu: Option<f32>,
    memory: Option<MemorySample>,
    disk: Option<DiskSample>,
    network: Option<NetworkSample>,
    mut processes: Vec<ProcessSample>,
) -> SystemSnapshot {
    // total_cmp keeps the order total even for non-finite OS readings; the
    // pid tie-break keeps equal rows from swapping places between refreshes.
    processes.sort_by(|a, b| {
        b.cpu_percent
            .total_cmp(&a.cpu_percent)
            .then_with(|| a.pid.cmp(&b.pid))
    });

    let mut snapshot = SystemSnapshot {
        cpu_usage: cpu.unwrap_or(0.0),
        processes,
        ..SystemSnapshot::default()
    };

    if let Some(mem) = memory {
        snapshot.memory_total = to_gib(mem.total_bytes);
        snapshot.memory_used = to_gib(mem.used_bytes);
        snapshot.memory_usage = mem.used_percent;
    }

    if let Some(disk) = disk {
        snapshot.disk_total = to_gib(disk.total_bytes);
        snapshot.disk_used = to_gib(disk.used_bytes);
        snapshot.disk_usage = disk.used_percent;
    }

    if let Some(net) = network {
        snapshot.net_sent = to_mib(net.sent_bytes);
        snapshot.net_recv = to_mib(net.received_bytes);
    }

    snapshot
}
