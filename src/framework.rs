use crate::error::{Result, TatuError};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Framework {
    GinGonic,
    Node,
    Django,
}

/// Dockerfile template and the port the app listens on inside the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameworkTemplate {
    pub name: &'static str,
    pub source: &'static str,
    pub port: u16,
}

impl Framework {
    pub fn parse(name: &str) -> Result<Self> {
        Framework::from_str(name).map_err(|_| TatuError::UnsupportedFramework {
            name: name.to_string(),
            supported: Framework::supported().join(", "),
        })
    }

    pub fn supported() -> Vec<&'static str> {
        Framework::iter().map(Into::into).collect()
    }

    pub fn template(self) -> FrameworkTemplate {
        match self {
            Framework::GinGonic => FrameworkTemplate {
                name: "Dockerfile.gin-gonic.j2",
                source: include_str!("templates/Dockerfile.gin-gonic.j2"),
                port: 8080,
            },
            Framework::Node => FrameworkTemplate {
                name: "Dockerfile.node.j2",
                source: include_str!("templates/Dockerfile.node.j2"),
                port: 3000,
            },
            Framework::Django => FrameworkTemplate {
                name: "Dockerfile.django.j2",
                source: include_str!("templates/Dockerfile.django.j2"),
                port: 8000,
            },
        }
    }
}
