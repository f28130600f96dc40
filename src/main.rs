use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::process;
use strum::IntoEnumIterator;
use tatu::cli::{
    Cli, Commands, CompletionsCommandArgs, FrameworksCommandArgs, RenderCommandArgs,
    SetupDevCommandArgs,
};
use tatu::framework::Framework;
use tatu::generator::{generate, render};
use tatu::orchestrator::docker_compose_up;
use tatu::TatuError;

struct Tatu {}

impl Tatu {
    fn setup_dev_cmd(&self, args: SetupDevCommandArgs) -> Result<()> {
        let config = args.config;
        generate(&config).context("Unable to generate Docker files")?;

        if args.skip_up {
            log::info!("Skipping docker compose up");
            return Ok(());
        }

        docker_compose_up(&args.orchestrator, &config.output_dir)
            .map_err(TatuError::from)
            .context("Unable to bring the composition up")?;

        Ok(())
    }

    fn render_cmd(&self, args: RenderCommandArgs) -> Result<()> {
        let rendered = render(&args.config)?;

        println!("# {}", args.config.dockerfile_path().display());
        println!("{}", rendered.dockerfile);
        println!("# {}", args.config.docker_compose_path().display());
        print!("{}", rendered.docker_compose);

        Ok(())
    }

    fn frameworks_cmd(&self, _args: FrameworksCommandArgs) -> Result<()> {
        for framework in Framework::iter() {
            println!("{framework} (port {})", framework.template().port);
        }
        Ok(())
    }

    fn completions_cmd(&self, args: CompletionsCommandArgs) -> Result<()> {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
        Ok(())
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<TatuError>()
        .map(TatuError::exit_code)
        .unwrap_or(1)
}

fn report(result: Result<()>, success: &str, failure: &str) {
    match result {
        Ok(_) => {
            if !success.is_empty() {
                println!("{success}");
            }
        }
        Err(err) => {
            eprintln!("{failure}");
            eprintln!("{err:#}");
            process::exit(exit_code(&err))
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    args.init_logging();
    let tatu = Tatu {};

    match args.command {
        Some(Commands::SetupDev(args)) => report(
            tatu.setup_dev_cmd(args),
            "Development environment is ready",
            "Failed to set up the development environment",
        ),
        Some(Commands::Render(args)) => {
            report(tatu.render_cmd(args), "", "Failed to render templates")
        }
        Some(Commands::Frameworks(args)) => {
            report(tatu.frameworks_cmd(args), "", "Failed to list frameworks")
        }
        Some(Commands::Completions(args)) => report(
            tatu.completions_cmd(args),
            "",
            "Failed to generate completions",
        ),
        None => {
            println!("No command provided");
            process::exit(1)
        }
    }

    Ok(())
}
