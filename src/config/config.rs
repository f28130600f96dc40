use crate::error::{Result, TatuError};
use clap::Args;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

pub const DEFAULT_APP_NAME: &str = "my-react-app";
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_PASS: &str = "password";
pub const DEFAULT_DB_NAME: &str = "postgres";
pub const DEFAULT_NODE_VERSION: &str = "20";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_FRAMEWORK: &str = "gin-gonic";

static APP_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("app name pattern is valid"));

/// Values substituted into the generated Dockerfile and docker-compose.yml.
///
/// Field names double as placeholder names in `src/templates/`.
#[derive(Args, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GenerationConfig {
    /// Application name, used as the compose service name
    #[arg(short = 'a', long = "app", default_value = DEFAULT_APP_NAME)]
    pub app_name: String,

    /// PostgreSQL user
    #[arg(short = 'u', long = "dbuser", default_value = DEFAULT_DB_USER)]
    pub db_user: String,

    /// PostgreSQL password
    #[arg(short = 'p', long = "dbpass", default_value = DEFAULT_DB_PASS)]
    pub db_pass: String,

    /// PostgreSQL database name
    #[arg(short = 'n', long = "dbname", default_value = DEFAULT_DB_NAME)]
    pub db_name: String,

    /// Node.js version used by the node Dockerfile
    #[arg(
        short = 'v',
        long = "nodeVersion",
        visible_alias = "node-version",
        default_value = DEFAULT_NODE_VERSION
    )]
    pub node_version: String,

    /// Directory the Dockerfile and docker-compose.yml are written to
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Host address the published ports are bound to
    #[arg(
        short = 'i',
        long = "ipServer",
        visible_alias = "ip-server",
        default_value = DEFAULT_BIND_ADDRESS
    )]
    pub bind_address: String,

    /// Framework the Dockerfile is generated for
    #[arg(short = 'f', long = "framework", default_value = DEFAULT_FRAMEWORK)]
    pub framework: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            app_name: DEFAULT_APP_NAME.to_string(),
            db_user: DEFAULT_DB_USER.to_string(),
            db_pass: DEFAULT_DB_PASS.to_string(),
            db_name: DEFAULT_DB_NAME.to_string(),
            node_version: DEFAULT_NODE_VERSION.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            framework: DEFAULT_FRAMEWORK.to_string(),
        }
    }
}

impl GenerationConfig {
    pub fn dockerfile_path(&self) -> PathBuf {
        self.output_dir.join("Dockerfile")
    }

    pub fn docker_compose_path(&self) -> PathBuf {
        self.output_dir.join("docker-compose.yml")
    }

    /// The app name ends up as a compose service key and inside a mount path.
    pub fn validate_app_name(&self) -> Result<()> {
        if !APP_NAME_REGEX.is_match(&self.app_name) {
            return Err(TatuError::InvalidAppName(self.app_name.clone()));
        }
        Ok(())
    }
}
