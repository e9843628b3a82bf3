//! Combat systems

pub mod attack;
pub mod dash;
pub mod hits;

// Re-export all systems
pub use attack::*;
pub use dash::*;
pub use hits::*;
