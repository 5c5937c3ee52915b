//! Browser-based task manager for the local host: samples CPU, memory,
//! disk, network, and per-process usage on demand, serves it as JSON, and
//! terminates processes by PID.

pub mod api;
pub mod state;
pub mod system;
