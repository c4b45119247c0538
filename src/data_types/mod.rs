pub mod config;
pub mod markers;
pub mod state;
pub mod viewport;

// Re-export everything for convenience
pub use config::*;
pub use markers::*;
pub use state::*;
pub use viewport::*;
