pub mod collector;
pub mod counters;
pub mod kill;
pub mod platform;
pub mod rate;
pub mod snapshot;
pub mod table;
