use crate::config::GenerationConfig;
use crate::orchestrator::DEFAULT_ORCHESTRATOR;
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "tatu",
    version,
    about = "Scaffold a Dockerfile and docker-compose.yml for an app backed by PostgreSQL",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// More log output (repeat for debug and trace)
    #[arg(long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Parser, Clone, Debug)]
pub struct SetupDevCommandArgs {
    #[command(flatten)]
    pub config: GenerationConfig,

    /// Only write the files, do not run `docker compose up -d`
    #[arg(long, default_value_t = false)]
    pub skip_up: bool,

    /// Executable providing the `compose` subcommand
    #[arg(long, default_value = DEFAULT_ORCHESTRATOR)]
    pub orchestrator: String,
}

#[derive(Parser, Clone, Debug)]
pub struct RenderCommandArgs {
    #[command(flatten)]
    pub config: GenerationConfig,
}

#[derive(Parser, Clone, Debug)]
pub struct FrameworksCommandArgs {}

#[derive(Parser, Clone, Debug)]
pub struct CompletionsCommandArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a Dockerfile and docker-compose.yml, then bring them up
    #[command()]
    SetupDev(SetupDevCommandArgs),

    /// Print the generated files without writing them
    #[command()]
    Render(RenderCommandArgs),

    /// List the frameworks a Dockerfile can be generated for
    #[command()]
    Frameworks(FrameworksCommandArgs),

    /// Print shell completions
    #[command()]
    Completions(CompletionsCommandArgs),
}

impl Cli {
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let mut builder = env_logger::Builder::from_default_env();
        if let Some(level) = self.log_level(std::env::var_os("RUST_LOG").is_some()) {
            builder.filter_level(level);
        }
        builder.init();
    }

    /// Level forced on top of `RUST_LOG`. `None` leaves `RUST_LOG` in charge,
    /// which only happens when it is set and `--verbose` is not given.
    pub fn log_level(&self, rust_log_set: bool) -> Option<log::LevelFilter> {
        if self.quiet {
            return Some(log::LevelFilter::Off);
        }

        match self.verbose {
            0 if rust_log_set => None,
            0 => Some(log::LevelFilter::Warn),
            1 => Some(log::LevelFilter::Info),
            2 => Some(log::LevelFilter::Debug),
            _ => Some(log::LevelFilter::Trace),
        }
    }
}
