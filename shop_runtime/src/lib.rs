// Bootstrap pieces shared by every Kube Shop service binary.
pub mod config;
pub mod server;
pub mod telemetry;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;
