use std::sync::Mutex;

use crate::system::collector::Collector;

/// The collector holds the CPU delta baseline, so every request must go
/// through this one instance. `web::Data` provides the `Arc`.
pub struct AppState {
    pub collector: Mutex<Collector>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            collector: Mutex::new(Collector::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
