// src/fetch/urls.rs

use crate::config::ViewConfig;
use crate::enrich::SECTION;

/// Metadata endpoint segment used for the `section` grouping level.
pub const SECTION_METADATA: &str = "product_section";

/// The three resources behind one tree map, in fetch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locators {
    pub squares_metadata: String,
    pub group_metadata: String,
    pub dataset: String,
}

impl Locators {
    pub fn for_view(view: &ViewConfig) -> Self {
        Self {
            squares_metadata: metadata_locator(&view.squares),
            group_metadata: metadata_locator(metadata_segment(&view.group)),
            dataset: dataset_locator(&view.dataset, &view.squares, &view.group, &view.filters),
        }
    }

    /// Locators in the order their responses are consumed.
    pub fn to_vec(&self) -> Vec<String> {
        vec![
            self.squares_metadata.clone(),
            self.group_metadata.clone(),
            self.dataset.clone(),
        ]
    }
}

pub fn metadata_locator(level: &str) -> String {
    format!("metadata/{}", level)
}

/// Endpoint segment for a grouping level's metadata.
pub fn metadata_segment(group: &str) -> &str {
    if group == SECTION {
        SECTION_METADATA
    } else {
        group
    }
}

/// `<dataset>/year/<squares>/<group>?<filters>`; `filters` is passed through
/// as an already-encoded query string.
pub fn dataset_locator(dataset: &str, squares: &str, group: &str, filters: &str) -> String {
    let filters = filters.trim_start_matches('?');
    if filters.is_empty() {
        format!("{}/year/{}/{}", dataset, squares, group)
    } else {
        format!("{}/year/{}/{}?{}", dataset, squares, group, filters)
    }
}
