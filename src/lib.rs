pub mod adapters;
pub mod application;
pub mod infra;

// Test utilities (in-memory implementations of the trait seams)
#[cfg(test)]
pub mod test_utils;

// Re-exports for shorter use statements.
pub use application::*;
