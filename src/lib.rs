pub mod cli;
pub mod config;
pub mod docker_compose;
pub mod dockerfile;
pub mod emitter;
pub mod error;
pub mod framework;
pub mod generator;
pub mod orchestrator;
pub mod template;

pub use error::{Result, TatuError};
