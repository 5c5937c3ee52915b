use std::collections::BTreeMap;

use proptest::prelude::*;

use procdash::system::snapshot::{
    DiskSample, MemorySample, NetworkSample, ProcessSample, build_snapshot,
};

/// Pid-keyed map guarantees unique pids; cpu is in exact quarter steps.
fn rows(entries: BTreeMap<u32, u16>) -> Vec<ProcessSample> {
    entries
        .into_iter()
        .map(|(pid, cpu_quarters)| ProcessSample {
            pid,
            name: format!("p{pid}"),
            cpu_percent: f32::from(cpu_quarters) / 4.0,
            memory_percent: 0.0,
        })
        .collect()
}

proptest! {
    #[test]
    fn rows_ordered_by_cpu_then_pid(
        entries in prop::collection::btree_map(any::<u32>(), 0u16..=2000, 0..64),
    ) {
        let snapshot = build_snapshot(None, None, None, None, rows(entries));
        for pair in snapshot.processes.windows(2) {
            let by_cpu = pair[0].cpu_percent.total_cmp(&pair[1].cpu_percent);
            prop_assert!(
                by_cpu.is_gt() || (by_cpu.is_eq() && pair[0].pid < pair[1].pid),
                "pid {} (cpu {}) placed before pid {} (cpu {})",
                pair[0].pid, pair[0].cpu_percent, pair[1].pid, pair[1].cpu_percent
            );
        }
    }

    #[test]
    fn ordering_ignores_input_permutation(
        entries in prop::collection::btree_map(any::<u32>(), 0u16..=2000, 0..64),
    ) {
        let forward = rows(entries);
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = build_snapshot(None, None, None, None, forward);
        let b = build_snapshot(None, None, None, None, reversed);
        prop_assert_eq!(a.processes, b.processes);
    }

    #[test]
    fn no_rows_added_or_lost(
        entries in prop::collection::btree_map(any::<u32>(), 0u16..=2000, 0..64),
    ) {
        let input = rows(entries);
        let mut expected: Vec<u32> = input.iter().map(|p| p.pid).collect();
        expected.sort_unstable();

        let snapshot = build_snapshot(None, None, None, None, input);
        let mut got: Vec<u32> = snapshot.processes.iter().map(|p| p.pid).collect();
        got.sort_unstable();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn unit_conversion_tracks_byte_counters(
        total in 1u64..(1u64 << 60),
        sent in 0u64..(1u64 << 50),
    ) {
        let used = total / 2;
        let snapshot = build_snapshot(
            None,
            Some(MemorySample { total_bytes: total, used_bytes: used, used_percent: 50.0 }),
            Some(DiskSample { total_bytes: total, used_bytes: used, used_percent: 50.0 }),
            Some(NetworkSample { sent_bytes: sent, received_bytes: sent }),
            Vec::new(),
        );

        let gib = (1u64 << 30) as f64;
        let mib = (1u64 << 20) as f64;
        prop_assert!(
            (snapshot.memory_total * gib - total as f64).abs() <= total as f64 * 1e-9,
            "memory_total {} does not track {} bytes", snapshot.memory_total, total
        );
        prop_assert!(
            (snapshot.disk_used * gib - used as f64).abs() <= used as f64 * 1e-9 + 1e-9,
            "disk_used {} does not track {} bytes", snapshot.disk_used, used
        );
        prop_assert!(
            (snapshot.net_sent * mib - sent as f64).abs() <= sent as f64 * 1e-9 + 1e-9,
            "net_sent {} does not track {} bytes", snapshot.net_sent, sent
        );
    }

    #[test]
    fn percents_pass_through_exactly(
        mem_pct in 0.0f32..=200.0,
        disk_pct in 0.0f32..=200.0,
    ) {
        let snapshot = build_snapshot(
            None,
            Some(MemorySample { total_bytes: 1, used_bytes: 1, used_percent: mem_pct }),
            Some(DiskSample { total_bytes: 1, used_bytes: 1, used_percent: disk_pct }),
            None,
            Vec::new(),
        );
        prop_assert_eq!(snapshot.memory_usage, mem_pct);
        prop_assert_eq!(snapshot.disk_usage, disk_pct);
    }
}
