use crate::config::GenerationConfig;
use crate::error::Result;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

/// Everything a template can reference: the config fields plus the app port.
#[derive(Serialize)]
struct TemplateContext<'a> {
    #[serde(flatten)]
    config: &'a GenerationConfig,
    port: u16,
}

/// Renders an embedded template, substituting `{{ placeholder }}`s verbatim.
///
/// Unknown placeholders fail instead of rendering as empty strings.
pub fn render_template(
    name: &'static str,
    source: &'static str,
    config: &GenerationConfig,
    port: u16,
) -> Result<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env.add_template(name, source)?;

    let rendered = env
        .get_template(name)?
        .render(TemplateContext { config, port })?;

    log::debug!("Rendered {name} ({} bytes)", rendered.len());
    Ok(rendered)
}
