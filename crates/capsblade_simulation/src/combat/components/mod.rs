//! Combat components

pub mod attack;
pub mod dash;


// Re-export all components
pub use attack::*;
pub use dash::*;
