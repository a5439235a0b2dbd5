// Configuration loading and validation logic

pub mod loader;
pub mod validation;

pub use loader::*;
pub use validation::*;
