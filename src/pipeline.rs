// src/pipeline.rs

use anyhow::{Context, Result};
use tokio::time::Instant;
use tracing::{info, instrument};

use crate::config::ViewConfig;
use crate::enrich::enrich;
use crate::error::Error;
use crate::fetch::{Fetcher, Locators};
use crate::model::{LookupTable, ObservationTable};
use crate::present::{build_render_config, RenderConfig};
use crate::render::Renderer;

/// One tree map view: fetch, join, describe, hand off.
///
/// Nothing stops a second `load` from starting while an earlier one is still
/// waiting on its fetches; both will render.
pub struct TreeMap<F> {
    fetcher: F,
    view: ViewConfig,
}

impl<F: Fetcher> TreeMap<F> {
    /// Validates `view` up front so a bad page configuration never reaches
    /// the network.
    pub fn new(fetcher: F, view: ViewConfig) -> Result<Self, Error> {
        view.validate()?;
        Ok(Self { fetcher, view })
    }

    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    /// Fetch the three resources, join them and pass the result to `renderer`.
    ///
    /// A failed fetch returns before anything is joined or rendered.
    #[instrument(level = "info", skip_all, fields(dataset = %self.view.dataset, squares = %self.view.squares, group = %self.view.group))]
    pub async fn load<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<RenderConfig> {
        let start = Instant::now();
        let locators = Locators::for_view(&self.view);
        let mut results = self.fetcher.fetch_all(&locators.to_vec()).await?.into_iter();

        let (Some(squares), Some(groups), Some(table), None) =
            (results.next(), results.next(), results.next(), results.next())
        else {
            anyhow::bail!("fetcher did not return exactly one result per locator");
        };

        let config = self.build(
            LookupTable::from_value(&locators.squares_metadata, squares)?,
            LookupTable::from_value(&locators.group_metadata, groups)?,
            ObservationTable::from_value(&locators.dataset, table)?,
        )?;

        renderer.hide_loading();
        renderer.render(&config).context("rendering tree map")?;
        info!(records = config.data.len(), elapsed = ?start.elapsed(), "tree map loaded");
        Ok(config)
    }

    /// The synchronous join and presentation step once all payloads are in.
    pub fn build(
        &self,
        squares: LookupTable,
        groups: LookupTable,
        table: ObservationTable,
    ) -> Result<RenderConfig, Error> {
        let view = &self.view;
        let dictionary = view.dictionary();
        let records = enrich(
            &table,
            &squares,
            &groups,
            &view.squares,
            &view.group,
            dictionary.locale(),
            &view.icon_base,
        )?;
        info!(
            rows = table.data.len(),
            kept = records.len(),
            entities = squares.len(),
            groups = groups.len(),
            "enriched observations"
        );

        build_render_config(
            records,
            &view.depth_chain(),
            &view.group,
            &view.squares,
            &dictionary,
            &view.container,
        )
    }
}
