pub mod config;
pub mod driver;

pub use config::Config;
pub use driver::{check_convergent, generate_password, generate_valid, DEFAULT_MAX_ATTEMPTS};
