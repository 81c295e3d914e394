pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod validation;

pub use crate::core::driver::{generate_password, generate_valid};
pub use crate::generators::GenerationError;
pub use crate::models::{CharacterClass, GenerationConfig, Password};
pub use crate::validation::is_valid;
