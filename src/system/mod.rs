pub mod collector;
pub mod kill;
pub mod snapshot;
