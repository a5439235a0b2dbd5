// Type definitions for triplex-config
//
// This module contains all the struct definitions deserialized from the toml file.

pub mod constants;
pub mod layout;
pub mod triplex;

// Re-export commonly used types
pub use constants::*;
pub use layout::*;
pub use triplex::*;
