pub mod config;

pub use config::GenerationConfig;
