use crate::config::GenerationConfig;
use crate::error::Result;
use crate::framework::Framework;
use crate::template::render_template;

const TEMPLATE_NAME: &str = "docker-compose.yml.j2";
const TEMPLATE_SOURCE: &str = include_str!("../templates/docker-compose.yml.j2");

/// Renders the PostgreSQL + app composition. The app port follows the framework.
pub fn generate_template(config: &GenerationConfig, framework: Framework) -> Result<String> {
    let port = framework.template().port;
    let template = render_template(TEMPLATE_NAME, TEMPLATE_SOURCE, config, port)?;

    // Values go in unescaped, so a stray `:` or newline can break the document.
    if let Err(err) = serde_yaml::from_str::<serde_yaml::Value>(&template) {
        log::warn!("Generated docker-compose.yml is not valid YAML: {err}");
    }

    Ok(template)
}
