use std::path::Path;

use anyhow::Context;
use dcm_diff::RenderConfig;
use serde::{Deserialize, Serialize};

/// Settings read from the `--config` TOML file.
///
/// ```toml
/// [render]
/// tag_width = 60
/// value_width = 40
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub render: RenderConfig,
}

impl CliConfig {
    /// Load from `path`, or defaults when no file is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Column widths with command-line overrides applied.
    pub fn render_with(&self, tag_width: Option<usize>, value_width: Option<usize>) -> RenderConfig {
        RenderConfig {
            tag_width: tag_width.unwrap_or(self.render.tag_width),
            value_width: value_width.unwrap_or(self.render.value_width),
        }
    }
}
