use crate::config::GenerationConfig;
use crate::docker_compose::docker_compose;
use crate::dockerfile::dockerfile;
use crate::emitter::write_file;
use crate::error::Result;
use crate::framework::Framework;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedFiles {
    pub dockerfile: String,
    pub docker_compose: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedFiles {
    pub dockerfile: PathBuf,
    pub docker_compose: PathBuf,
}

/// Renders both files in memory. Nothing is written.
pub fn render(config: &GenerationConfig) -> Result<RenderedFiles> {
    config.validate_app_name()?;
    let framework = Framework::parse(&config.framework)?;
    log::info!("Rendering templates for {framework}");

    Ok(RenderedFiles {
        dockerfile: dockerfile::generate_template(config, framework)?,
        docker_compose: docker_compose::generate_template(config, framework)?,
    })
}

/// Renders both files, then writes the Dockerfile and docker-compose.yml into
/// the output directory. A failed second write leaves the first file in place.
pub fn generate(config: &GenerationConfig) -> Result<GeneratedFiles> {
    let rendered = render(config)?;

    let dockerfile = config.dockerfile_path();
    write_file(&dockerfile, &rendered.dockerfile)?;
    println!("Dockerfile created at {}", dockerfile.display());

    let docker_compose = config.docker_compose_path();
    write_file(&docker_compose, &rendered.docker_compose)?;
    println!("docker-compose.yml created at {}", docker_compose.display());

    Ok(GeneratedFiles {
        dockerfile,
        docker_compose,
    })
}
