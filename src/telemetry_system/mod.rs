pub mod publisher;
pub mod snapshot;
pub mod telemetry;
