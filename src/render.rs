// src/render.rs

use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

use crate::present::RenderConfig;

/// The external chart renderer.
pub trait Renderer {
    /// Called right before [`Renderer::render`].
    fn hide_loading(&mut self);

    fn render(&mut self, config: &RenderConfig) -> Result<()>;
}

/// Writes the render configuration as JSON for a renderer living elsewhere
/// (a page script, a file watcher, ...).
pub struct JsonRenderer<W: Write> {
    out: W,
    pretty: bool,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, pretty: false }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn hide_loading(&mut self) {
        info!("loading done");
    }

    fn render(&mut self, config: &RenderConfig) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, config)
        } else {
            serde_json::to_writer(&mut self.out, config)
        }
        .context("serializing render config")?;
        writeln!(self.out).context("writing render config")?;
        self.out.flush().context("flushing render config")?;
        info!(
            container = %config.container,
            records = config.data.len(),
            "handed tree map to renderer"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Dictionary;
    use crate::present::build_render_config;

    #[test]
    fn test_json_renderer_writes_one_document() -> Result<()> {
        let depths = vec!["region".to_string(), "state".to_string()];
        let config = build_render_config(
            Vec::new(),
            &depths,
            "section",
            "state",
            &Dictionary::default(),
            "#treemap",
        )?;

        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.hide_loading();
        renderer.render(&config)?;

        let written = String::from_utf8(renderer.into_inner())?;
        assert_eq!(written.lines().count(), 1);
        let parsed: RenderConfig = serde_json::from_str(&written)?;
        assert_eq!(parsed, config);
        Ok(())
    }
}
