pub mod config;
pub mod machine;

pub use config::Config;
pub use machine::*;
