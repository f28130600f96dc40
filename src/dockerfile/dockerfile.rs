use crate::config::GenerationConfig;
use crate::error::Result;
use crate::framework::Framework;
use crate::template::render_template;

pub fn generate_template(config: &GenerationConfig, framework: Framework) -> Result<String> {
    let template = framework.template();
    render_template(template.name, template.source, config, template.port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gin_gonic_builds_a_static_binary_and_exposes_8080() {
        let dockerfile =
            generate_template(&GenerationConfig::default(), Framework::GinGonic).unwrap();
        assert!(dockerfile.starts_with("FROM golang:latest AS builder\n"));
        assert!(dockerfile.contains("EXPOSE 8080\n"));
        assert!(dockerfile.ends_with("CMD [\"./main\"]\n"));
    }

    #[test]
    fn node_uses_configured_node_version() {
        let config = GenerationConfig {
            node_version: "18".to_string(),
            ..Default::default()
        };
        let dockerfile = generate_template(&config, Framework::Node).unwrap();
        assert!(dockerfile.starts_with("FROM node:18-alpine\n"));
        assert!(dockerfile.contains("EXPOSE 3000\n"));
    }

    #[test]
    fn django_runs_on_its_exposed_port() {
        let dockerfile =
            generate_template(&GenerationConfig::default(), Framework::Django).unwrap();
        assert!(dockerfile.contains("EXPOSE 8000\n"));
        assert!(dockerfile.contains("\"runserver\", \"0.0.0.0:8000\""));
    }

    #[test]
    fn node_version_only_affects_node() {
        let config = GenerationConfig {
            node_version: "99".to_string(),
            ..Default::default()
        };
        for framework in [Framework::GinGonic, Framework::Django] {
            assert!(!generate_template(&config, framework).unwrap().contains("99"));
        }
    }
}
