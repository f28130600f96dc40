use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TatuError {
    #[error("Unsupported framework `{name}`, expected one of: {supported}")]
    UnsupportedFramework { name: String, supported: String },

    #[error(
        "Invalid app name `{0}`. Only alphanumeric characters, dashes, and underscores are allowed"
    )]
    InvalidAppName(String),

    #[error("Template rendering failed")]
    Template(#[from] minijinja::Error),

    #[error("Unable to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Orchestration(#[from] OrchestrationError),
}

#[derive(Error, Debug)]
pub enum OrchestrationError {
    #[error("Unable to run `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Failed { command: String, status: ExitStatus },
}

impl TatuError {
    /// Process exit code reported for this kind of failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            TatuError::UnsupportedFramework { .. } | TatuError::InvalidAppName(_) => 2,
            TatuError::Write { .. } => 3,
            TatuError::Orchestration(_) => 4,
            TatuError::Template(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, TatuError>;
