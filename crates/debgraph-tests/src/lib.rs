pub mod fixtures;
pub mod test_env;

// Re-export key testing utilities
pub use test_env::{GraphConfigBuilder, TestEnvironment};
