use crate::error::OrchestrationError;
use std::path::Path;
use std::process::Command;

pub const DEFAULT_ORCHESTRATOR: &str = "docker";

const UP_ARGS: [&str; 3] = ["compose", "up", "-d"];

/// Runs `<program> compose up -d` in `dir` and prints what it wrote.
///
/// Returns the captured output. Stdout and stderr are captured separately and
/// joined stdout first, so lines are not in the order the child wrote them.
pub fn docker_compose_up(program: &str, dir: &Path) -> Result<String, OrchestrationError> {
    let command = format!("{program} {}", UP_ARGS.join(" "));
    log::info!("Running `{command}` in {}", dir.display());

    let output = Command::new(program)
        .args(UP_ARGS)
        .current_dir(dir)
        .output()
        .map_err(|source| OrchestrationError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    print!("{combined}");

    if !output.status.success() {
        return Err(OrchestrationError::Failed {
            command,
            status: output.status,
        });
    }

    Ok(combined)
}
